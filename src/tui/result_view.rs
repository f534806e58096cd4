//! Scrollable view of an estimation result.

use std::path::Path;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{App, TICK_RATE};
use super::current_theme;
use super::event::Event;
use super::ui::{center_box, render_footer, split_footer};
use crate::estimator::ReadingEstimate;
use crate::report::summary_rows;

/// Outcome of a key press in the result view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewOutcome {
    Continue,
    Quit,
}

/// Result screen state.
#[derive(Debug, Clone)]
pub struct ResultView {
    source: Option<String>,
    rows: Vec<(&'static str, String)>,
    hard_text: bool,
    scroll: u16,
}

impl ResultView {
    pub fn new(estimate: &ReadingEstimate, source: Option<&Path>) -> Self {
        Self {
            source: source.map(|p| p.display().to_string()),
            rows: summary_rows(estimate),
            hard_text: estimate.is_hard_text(),
            scroll: 0,
        }
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Content lines, before scrolling.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let theme = current_theme();
        let mut lines = Vec::with_capacity(self.rows.len() + 3);

        if let Some(source) = &self.source {
            lines.push(Line::from(vec![
                Span::styled("File: ", theme.text_secondary_style()),
                Span::styled(source.clone(), theme.text_style()),
            ]));
            lines.push(Line::from(""));
        }

        for (label, value) in &self.rows {
            let value_style = if *label == "Difficulty" {
                if self.hard_text {
                    theme.error_style()
                } else {
                    theme.success_style()
                }
            } else {
                theme.accent_bold_style()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", label), theme.text_style()),
                Span::styled(value.clone(), value_style),
            ]));
        }
        lines
    }

    fn max_scroll(&self) -> u16 {
        let count = self.lines().len();
        u16::try_from(count.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ViewOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return ViewOutcome::Quit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return ViewOutcome::Quit,
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = (self.scroll + 1).min(self.max_scroll());
            }
            KeyCode::Home => self.scroll = 0,
            _ => {}
        }
        ViewOutcome::Continue
    }

    pub fn render(&self, frame: &mut Frame) {
        let theme = current_theme();
        let (body, footer) = split_footer(frame.area());
        let area = center_box(body, 60, 12);

        let content = Paragraph::new(self.lines())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.accent_style())
                    .title(Span::styled(" LitTime Results ", theme.accent_bold_style())),
            )
            .scroll((self.scroll, 0));

        frame.render_widget(content, area);
        render_footer(frame, footer, &[("q", "quit"), ("↑/↓", "scroll")]);
    }
}

/// Show the result until the user quits.
pub fn run_result_view(estimate: &ReadingEstimate, source: Option<&Path>) -> Result<()> {
    let mut view = ResultView::new(estimate, source);
    let mut app = App::new(TICK_RATE)?;

    loop {
        app.draw(|frame| view.render(frame))?;

        if let Event::Key(key) = app.next_event()? {
            if view.handle_key(key) == ViewOutcome::Quit {
                return Ok(());
            }
        }
    }
}
