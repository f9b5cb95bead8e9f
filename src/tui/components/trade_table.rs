//! Recent token trades panel.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::format::{
    block_url, format_amount, format_distance, format_net, truncate_address, tx_url,
};
use crate::models::Trade;
use crate::tui::app::App;

pub const LOADING_TEXT: &str = "Loading trades...";
pub const SELECT_ADDRESS_TEXT: &str = "Select an address";
pub const NO_TRADES_TEXT: &str = "No trades found";

/// Column titles, left to right.
pub const HEADERS: [&str; 7] = [
    "Hash",
    "Time Since",
    "Block #",
    "From",
    "Token",
    "Amount",
    "Net",
];

/// Characters kept on each side of truncated hashes and addresses.
const TRUNCATE_KEEP: usize = 6;

/// What the panel shows.
#[derive(Debug, PartialEq)]
pub enum PanelView<'a> {
    Loading,
    /// Empty-state message.
    Empty(&'static str),
    Table(&'a [Trade]),
}

/// Picks the panel content. Loading wins over everything else.
pub fn panel_view<'a>(loading: bool, address: &str, trades: &'a [Trade]) -> PanelView<'a> {
    if loading {
        PanelView::Loading
    } else if trades.is_empty() {
        if address.is_empty() {
            PanelView::Empty(SELECT_ADDRESS_TEXT)
        } else {
            PanelView::Empty(NO_TRADES_TEXT)
        }
    } else {
        PanelView::Table(trades)
    }
}

/// Display values of one table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TradeRow {
    pub hash: String,
    pub tx_url: String,
    /// Relative to the `now_ms` the row was built with.
    pub time_since: String,
    pub block: String,
    pub block_url: String,
    pub from: String,
    pub token: String,
    pub amount: String,
    pub net: String,
    pub is_buy: bool,
}

impl TradeRow {
    /// Derives the row for `trade` as of `now_ms`.
    pub fn new(trade: &Trade, explorer_url: &str, now_ms: i64) -> Self {
        Self {
            hash: truncate_address(&trade.hash, TRUNCATE_KEEP),
            tx_url: tx_url(explorer_url, &trade.hash),
            time_since: format_distance(trade.timestamp_millis(), now_ms),
            block: trade.block_number.to_string(),
            block_url: block_url(explorer_url, trade.block_number),
            from: truncate_address(&trade.from_address, TRUNCATE_KEEP),
            token: truncate_address(&trade.subject_address, TRUNCATE_KEEP),
            amount: format_amount(trade.amount, trade.is_buy),
            net: format_net(&trade.cost),
            is_buy: trade.is_buy,
        }
    }

    fn net_style(&self) -> Style {
        if self.is_buy {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Red)
        }
    }
}

/// Renders the trades panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App, now_ms: i64) {
    let block = Block::default()
        .title(" Recent Token Trades ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match panel_view(app.feed.is_loading(), app.feed.address(), app.feed.trades()) {
        PanelView::Loading => render_notice(frame, inner, "⟳", LOADING_TEXT, Color::Yellow),
        PanelView::Empty(text) => render_notice(frame, inner, "✕", text, Color::DarkGray),
        PanelView::Table(trades) => {
            let rows: Vec<TradeRow> = trades
                .iter()
                .map(|t| TradeRow::new(t, &app.explorer_url, now_ms))
                .collect();
            render_table(frame, inner, &rows, app.selected_row);
        }
    }
}

/// Renders a centered icon and message.
fn render_notice(frame: &mut Frame, area: Rect, icon: &str, text: &str, color: Color) {
    let top_padding = area.height.saturating_sub(2) / 2;
    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::raw("")).collect();
    lines.push(Line::from(Span::styled(
        icon.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(color),
    )));

    let para = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(para, area);
}

/// Renders one row per trade, highlighting `selected`.
fn render_table(frame: &mut Frame, area: Rect, rows: &[TradeRow], selected: usize) {
    let header = Row::new(HEADERS).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );

    let body: Vec<Row> = rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.hash.clone()).style(Style::default().add_modifier(Modifier::UNDERLINED)),
                Cell::from(row.time_since.clone()),
                Cell::from(row.block.clone()).style(Style::default().add_modifier(Modifier::UNDERLINED)),
                Cell::from(row.from.clone()),
                Cell::from(row.token.clone()),
                Cell::from(row.amount.clone()),
                Cell::from(row.net.clone()).style(row.net_style()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(15),
        Constraint::Length(22),
        Constraint::Length(10),
        Constraint::Length(15),
        Constraint::Length(15),
        Constraint::Length(10),
        Constraint::Min(14),
    ];

    let table = Table::new(body, widths)
        .header(header)
        .row_highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = TableState::default().with_selected(Some(selected.min(rows.len().saturating_sub(1))));
    frame.render_stateful_widget(table, area, &mut state);
}
