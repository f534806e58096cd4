//! UI rendering helpers for TUI
//!
//! Layout helpers and the keybinding footer shared by the LitTime screens.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::current_theme;

/// Centered box of at most `width` x `height` cells.
///
/// Clamps to fit within the parent area with at least 2 cells of margin
/// on each side.
pub fn center_box(area: Rect, width: u16, height: u16) -> Rect {
    let box_width = width.min(area.width.saturating_sub(4));
    let box_height = height.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(box_width)) / 2;
    let y = area.y + (area.height.saturating_sub(box_height)) / 2;
    Rect::new(x, y, box_width, box_height)
}

/// Split off the last row of `area` for a footer.
///
/// Returns `(body, footer)`.
pub fn split_footer(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Render a centered footer of `(key, action)` hints.
pub fn render_footer(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let theme = current_theme();
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, action)) in hints.iter().enumerate() {
        let sep = if i + 1 < hints.len() { "  " } else { "" };
        spans.push(Span::styled(key.to_string(), theme.accent_bold_style()));
        spans.push(Span::styled(
            format!(" {}{}", action, sep),
            theme.text_secondary_style(),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
