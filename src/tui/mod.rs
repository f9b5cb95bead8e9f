//! Terminal User Interface for tokenscope.
//!
//! Provides a Ratatui-based TUI showing the recent trades of the selected
//! token address.

pub mod app;
pub mod components;
pub mod event;
pub mod input;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Event, Message};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;
