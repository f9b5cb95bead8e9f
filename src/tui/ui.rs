//! Main UI rendering coordinator.

use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::format::{block_url, tx_url};

use super::app::{App, Mode};
use super::components::{address_bar, status_bar, trade_table};

/// Renders the entire application UI as of the current wall-clock time.
pub fn render(frame: &mut Frame, app: &App) {
    render_at(frame, app, Utc::now().timestamp_millis());
}

/// Renders the entire application UI as of `now_ms`.
pub fn render_at(frame: &mut Frame, app: &App, now_ms: i64) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Length(3), // Address bar
            Constraint::Min(5),    // Trades
            Constraint::Length(1), // Links of the selected trade
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    status_bar::render(frame, main_layout[0], app);
    address_bar::render(frame, main_layout[1], app);
    trade_table::render(frame, main_layout[2], app, now_ms);
    render_links(frame, main_layout[3], app);
    render_keybindings(frame, main_layout[4], app);
}

/// Renders the explorer links of the highlighted trade.
fn render_links(frame: &mut Frame, area: Rect, app: &App) {
    let Some(trade) = app.selected_trade() else {
        return;
    };

    let line = Line::from(vec![
        Span::styled(" tx ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            tx_url(&app.explorer_url, &trade.hash),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("  block ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            block_url(&app.explorer_url, trade.block_number),
            Style::default().fg(Color::Cyan),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Renders the keybindings help line.
fn render_keybindings(frame: &mut Frame, area: Rect, app: &App) {
    let help = match app.mode {
        Mode::Insert => "[Esc]cancel [Enter]select address",
        Mode::Normal => "[a]address [x]clear [j/k]move [g]top [q]quit",
    };

    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}
