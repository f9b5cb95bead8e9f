//! Application state for the TUI.

use std::time::{Duration, Instant};

use crate::feed::TradeFeed;
use crate::models::Trade;
use crate::state::Selection;

use super::input::TextInput;

/// How long an error stays in the status bar.
const ERROR_DISPLAY_DURATION: Duration = Duration::from_secs(5);

/// Central application state container.
pub struct App {
    // -- Shared State --
    /// Session-wide selected address.
    pub selection: Selection,

    // -- Trades Panel --
    /// Trades for the selected address.
    pub feed: TradeFeed,
    /// Index of the highlighted row in the trades table.
    pub selected_row: usize,
    /// Block explorer base URL for tx/block links.
    pub explorer_url: String,

    // -- UI State --
    /// Current input mode.
    pub mode: Mode,
    /// Address being typed in insert mode.
    pub address_input: TextInput,
    /// Error message to display (clears after timeout).
    pub error_message: Option<ErrorDisplay>,

    // -- Internal --
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates a new App bound to `selection`.
    pub fn new(selection: Selection, explorer_url: impl Into<String>) -> Self {
        Self {
            selection,
            feed: TradeFeed::new(),
            selected_row: 0,
            explorer_url: explorer_url.into(),
            mode: Mode::Normal,
            address_input: TextInput::new(),
            error_message: None,
            should_quit: false,
        }
    }

    /// Enters insert mode with the current selection pre-filled.
    pub fn start_address_input(&mut self) {
        self.address_input = TextInput::from(self.selection.read());
        self.mode = Mode::Insert;
    }

    /// Leaves insert mode without changing the selection.
    pub fn cancel_address_input(&mut self) {
        self.address_input.take();
        self.mode = Mode::Normal;
    }

    /// Writes the typed address into the shared selection.
    ///
    /// Surrounding whitespace is trimmed; nothing else is validated.
    pub fn submit_address_input(&mut self) {
        let address = self.address_input.take();
        self.mode = Mode::Normal;
        self.selection.select(address.trim());
    }

    /// Clears the shared selection.
    pub fn clear_selection(&mut self) {
        self.selection.select("");
    }

    /// Moves the row highlight down, stopping at the last row.
    pub fn select_next_row(&mut self) {
        let len = self.feed.trades().len();
        if self.selected_row + 1 < len {
            self.selected_row += 1;
        }
    }

    /// Moves the row highlight up, stopping at the first row.
    pub fn select_previous_row(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Returns the highlighted trade, if the table is showing.
    pub fn selected_trade(&self) -> Option<&Trade> {
        if self.feed.is_loading() {
            return None;
        }
        self.feed.trades().get(self.selected_row)
    }

    /// Resets the row highlight after the trades were replaced.
    pub fn reset_row_selection(&mut self) {
        self.selected_row = 0;
    }

    /// Sets an error message to display.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(ErrorDisplay {
            message: message.into(),
            timestamp: Instant::now(),
        });
    }

    /// Clears error messages older than [`ERROR_DISPLAY_DURATION`].
    pub fn clear_stale_errors(&mut self) {
        if let Some(ref error) = self.error_message
            && error.timestamp.elapsed() > ERROR_DISPLAY_DURATION
        {
            self.error_message = None;
        }
    }
}

/// Input mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal,
    /// Typing an address.
    Insert,
}

/// Error message with timestamp for auto-clear.
#[derive(Clone, Debug)]
pub struct ErrorDisplay {
    /// The error message.
    pub message: String,
    /// When the error was shown.
    pub timestamp: Instant,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::feed::RequestId;

    fn trade(hash: &str) -> Trade {
        Trade {
            hash: hash.to_string(),
            timestamp: 1_700_000_000,
            block_number: 7,
            from_address: "0xfrom".to_string(),
            subject_address: "0xsubject".to_string(),
            amount: dec!(3),
            cost: "0".to_string(),
            is_buy: false,
        }
    }

    fn loaded_app(count: usize) -> App {
        let mut app = App::new(Selection::new(), "https://basescan.org");
        app.feed.begin(RequestId(1), "0xa".to_string());
        let trades = (0..count).map(|i| trade(&format!("0x{i}"))).collect();
        app.feed.settle(RequestId(1), Ok(trades));
        app
    }

    #[test]
    fn submit_writes_trimmed_selection() {
        let mut app = App::new(Selection::new(), "https://basescan.org");
        app.start_address_input();
        assert_eq!(app.mode, Mode::Insert);
        for c in "  0xabc ".chars() {
            app.address_input.insert(c);
        }
        app.submit_address_input();
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.selection.read(), "0xabc");
        assert!(app.address_input.is_empty());
    }

    #[test]
    fn cancel_keeps_selection() {
        let selection = Selection::new();
        selection.select("0xold");
        let mut app = App::new(selection, "https://basescan.org");
        app.start_address_input();
        assert_eq!(app.address_input.as_str(), "0xold");
        app.address_input.insert('1');
        app.cancel_address_input();
        assert_eq!(app.selection.read(), "0xold");
    }

    #[test]
    fn row_selection_is_clamped() {
        let mut app = loaded_app(2);
        app.select_previous_row();
        assert_eq!(app.selected_row, 0);
        app.select_next_row();
        app.select_next_row();
        assert_eq!(app.selected_row, 1);
        assert_eq!(app.selected_trade().map(|t| t.hash.as_str()), Some("0x1"));
    }

    #[test]
    fn no_selected_trade_while_loading() {
        let mut app = loaded_app(2);
        app.feed.begin(RequestId(2), "0xb".to_string());
        assert!(app.selected_trade().is_none());
    }
}
