//! Selected address input bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::{App, Mode};

/// Renders the selected address, or the input field while editing it.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_insert = app.mode == Mode::Insert;

    let border_style = if is_insert {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = if is_insert {
        " Address (INSERT) "
    } else {
        " Address "
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let prompt = "> ";
    let para = if is_insert {
        Paragraph::new(format!("{prompt}{}", app.address_input.as_str()))
    } else {
        let selected = app.selection.read();
        if selected.is_empty() {
            Paragraph::new(format!("{prompt}none (press a to select)"))
                .style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(format!("{prompt}{selected}"))
        }
    };
    frame.render_widget(para, inner);

    // Show cursor in insert mode
    if is_insert {
        let offset = (prompt.len() + app.address_input.cursor_column()) as u16;
        let cursor_x = (inner.x + offset).min(inner.right().saturating_sub(1));
        frame.set_cursor_position((cursor_x, inner.y));
    }
}
