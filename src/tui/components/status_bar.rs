//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::feed::FeedStatus;
use crate::tui::app::App;

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (status_label, status_color) = match app.feed.status() {
        FeedStatus::Loading => (" Loading ", Color::Yellow),
        FeedStatus::Loaded => (" Live ", Color::Green),
        FeedStatus::Failed(_) => (" Fetch Failed ", Color::Red),
    };

    let error_span = if let Some(ref error) = app.error_message {
        Span::styled(
            format!(" {} ", error.message),
            Style::default().fg(Color::Red),
        )
    } else {
        Span::raw("")
    };

    let count = format!(" {} trades ", app.feed.trades().len());

    let title = " tokenscope ";
    let used = title.width() + status_label.width() + error_span.width() + 2;
    let padding = (area.width as usize).saturating_sub(used + count.width());

    let line = Line::from(vec![
        Span::styled(
            title,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(status_label, Style::default().fg(status_color)),
        Span::raw("│"),
        error_span,
        Span::raw(" ".repeat(padding)),
        Span::raw("│"),
        Span::raw(count),
    ]);

    let para = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
