//! TUI (Text User Interface) module for LitTime
//!
//! Terminal screens built on ratatui/crossterm: the interactive setup form
//! and the result view.

pub mod app;
pub mod event;
pub mod result_view;
pub mod setup;
pub mod theme;
pub mod ui;

pub use theme::current_theme;

pub use result_view::{run_result_view, ResultView, ViewOutcome};
pub use setup::{run_setup, FormOutcome, SetupForm, SetupInputs};
