//! Interactive setup form
//!
//! Collects the run options (file, speed, visuals, workers) before an
//! estimation. [`SetupForm`] holds all state and reacts to key events
//! without touching the terminal; [`run_setup`] drives it on a real one.

use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{App, TICK_RATE};
use super::current_theme;
use super::event::Event;
use super::ui::{center_box, render_footer, split_footer};
use crate::config::Config;

/// Maximum number of characters a field accepts.
pub const FIELD_CHAR_LIMIT: usize = 70;

const LABELS: [&str; 4] = [
    "File Path",
    "Reading Speed (wpm)",
    "Has Visuals (y/n)",
    "Workers",
];

const FILE: usize = 0;
const SPEED: usize = 1;
const VISUALS: usize = 2;
const WORKERS: usize = 3;
/// Focus index of the submit button.
const SUBMIT: usize = LABELS.len();

/// Validated values from a submitted form.
#[derive(Debug, Clone, PartialEq)]
pub struct SetupInputs {
    pub file_path: PathBuf,
    pub reading_speed: u32,
    pub has_visuals: bool,
    pub workers: usize,
}

/// What a key press did to the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    /// Keep showing the form
    Continue,
    /// All fields validated
    Submitted(SetupInputs),
    /// User backed out
    Cancelled,
}

/// State of the setup form.
#[derive(Debug, Clone)]
pub struct SetupForm {
    values: [String; 4],
    focus: usize,
    error: Option<String>,
}

impl SetupForm {
    /// Form prefilled with the given defaults and an empty file path.
    pub fn new(reading_speed: u32, has_visuals: bool, workers: usize) -> Self {
        let visuals = if has_visuals { "y" } else { "n" };
        Self {
            values: [
                String::new(),
                reading_speed.to_string(),
                visuals.to_string(),
                workers.to_string(),
            ],
            focus: FILE,
            error: None,
        }
    }

    /// Form prefilled from the configured estimator defaults.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.estimator.default_reading_speed,
            config.estimator.has_visuals,
            config.estimator.default_workers,
        )
    }

    /// Prefill the file path field.
    pub fn with_file(mut self, path: &str) -> Self {
        self.values[FILE] = path.chars().take(FIELD_CHAR_LIMIT).collect();
        self
    }

    /// Index of the focused element; the submit button comes after the fields.
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn is_submit_focused(&self) -> bool {
        self.focus == SUBMIT
    }

    /// Current text of field `index`.
    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Validation message from the last submit attempt.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => FormOutcome::Cancelled,
                _ => FormOutcome::Continue,
            };
        }

        match key.code {
            KeyCode::Esc => return FormOutcome::Cancelled,
            KeyCode::Enter if self.focus == SUBMIT => return self.submit(),
            KeyCode::Enter | KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            KeyCode::Backspace => {
                if let Some(value) = self.values.get_mut(self.focus) {
                    value.pop();
                    self.error = None;
                }
            }
            KeyCode::Char(c) => {
                if let Some(value) = self.values.get_mut(self.focus) {
                    if value.chars().count() < FIELD_CHAR_LIMIT {
                        value.push(c);
                        self.error = None;
                    }
                }
            }
            _ => {}
        }
        FormOutcome::Continue
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % (SUBMIT + 1);
    }

    fn focus_prev(&mut self) {
        self.focus = if self.focus == 0 {
            SUBMIT
        } else {
            self.focus - 1
        };
    }

    fn fail(&mut self, field: usize, message: &str) -> FormOutcome {
        self.error = Some(message.to_string());
        self.focus = field;
        FormOutcome::Continue
    }

    fn submit(&mut self) -> FormOutcome {
        let path = self.values[FILE].trim();
        if path.is_empty() {
            return self.fail(FILE, "File path cannot be empty");
        }
        let file_path = PathBuf::from(path);

        let reading_speed = match self.values[SPEED].trim().parse::<u32>() {
            Ok(speed) if speed > 0 => speed,
            _ => return self.fail(SPEED, "Reading speed must be a positive whole number"),
        };

        let has_visuals = match self.values[VISUALS].trim().to_lowercase().as_str() {
            "y" | "yes" => true,
            "n" | "no" | "" => false,
            _ => return self.fail(VISUALS, "Has visuals must be y or n"),
        };

        // 0 workers runs on one, like the --workers flag
        let workers = match self.values[WORKERS].trim().parse::<usize>() {
            Ok(workers) => workers.max(1),
            Err(_) => return self.fail(WORKERS, "Workers must be a whole number"),
        };

        self.error = None;
        FormOutcome::Submitted(SetupInputs {
            file_path,
            reading_speed,
            has_visuals,
            workers,
        })
    }

    /// Draw the form centered in the frame.
    pub fn render(&self, frame: &mut Frame) {
        let theme = current_theme();
        let (body, footer) = split_footer(frame.area());
        let area = center_box(body, 64, 15);

        let mut lines = Vec::with_capacity(LABELS.len() * 2 + 4);
        for (i, label) in LABELS.iter().enumerate() {
            let focused = i == self.focus;
            let marker = if focused { "> " } else { "  " };
            let label_style = if focused {
                theme.accent_bold_style()
            } else {
                theme.text_secondary_style()
            };
            lines.push(Line::from(Span::styled(
                format!("{}{}:", marker, label),
                label_style,
            )));

            let cursor = if focused { "_" } else { "" };
            lines.push(Line::from(Span::styled(
                format!("    {}{}", self.values[i], cursor),
                theme.text_style(),
            )));
        }

        lines.push(Line::from(""));
        let button_style = if self.is_submit_focused() {
            theme.highlight_style()
        } else {
            theme.text_secondary_style()
        };
        lines.push(Line::from(Span::styled("  [ Submit ]", button_style)));

        if let Some(error) = &self.error {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  {}", error),
                theme.error_style(),
            )));
        }

        let form = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.accent_style())
                .title(Span::styled(" LitTime Setup ", theme.accent_bold_style())),
        );

        frame.render_widget(Clear, area);
        frame.render_widget(form, area);
        render_footer(
            frame,
            footer,
            &[("tab", "next"), ("shift+tab", "back"), ("enter", "submit"), ("esc", "quit")],
        );
    }
}

/// Show the form until it is submitted or cancelled.
///
/// Returns `None` when the user cancels.
pub fn run_setup(mut form: SetupForm) -> Result<Option<SetupInputs>> {
    let mut app = App::new(TICK_RATE)?;

    loop {
        app.draw(|frame| form.render(frame))?;

        match app.next_event()? {
            Event::Key(key) => match form.handle_key(key) {
                FormOutcome::Continue => {}
                FormOutcome::Submitted(inputs) => return Ok(Some(inputs)),
                FormOutcome::Cancelled => return Ok(None),
            },
            Event::Resize(_, _) | Event::Tick => {}
        }
    }
}
