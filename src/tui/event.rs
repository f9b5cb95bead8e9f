//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::feed::{RequestId, Settled};
use crate::models::Trade;

use super::app::{App, Mode};

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),

    /// A trades fetch was issued for `address`.
    FetchStarted { request: RequestId, address: String },
    /// A trades fetch settled. Errors are carried as display strings.
    TradesFetched {
        request: RequestId,
        address: String,
        result: Result<Vec<Trade>, String>,
    },

    /// Request to quit the application.
    Quit,
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {
                    if tx.is_closed() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });
}

/// Spawns a task that sends periodic tick events.
///
/// Ticks drive redraws, which keeps relative trade times current.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) {
    match message {
        Message::Input(event) => handle_input(app, event),
        Message::FetchStarted { request, address } => {
            app.feed.begin(request, address);
        }
        Message::TradesFetched {
            request,
            address,
            result,
        } => {
            let error = result.as_ref().err().cloned();
            if app.feed.settle(request, result) == Settled::Applied {
                app.reset_row_selection();
                if let Some(error) = error {
                    app.show_error(format!("failed to load trades for {address}: {error}"));
                }
            }
        }
        Message::Quit => app.should_quit = true,
    }
}

/// Handles input events and updates application state.
fn handle_input(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(_, _) => {}
        Event::Tick => app.clear_stale_errors(),
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keys (work in any mode)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Insert => handle_insert_mode(app, key),
    }
}

/// Handles keys in normal mode.
fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Char('/') => app.start_address_input(),
        KeyCode::Char('x') => app.clear_selection(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next_row(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous_row(),
        KeyCode::Char('g') | KeyCode::Home => app.reset_row_selection(),
        _ => {}
    }
}

/// Handles keys in insert mode (address input).
fn handle_insert_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_address_input(),
        KeyCode::Esc => app.cancel_address_input(),
        KeyCode::Char(c) => app.address_input.insert(c),
        KeyCode::Backspace => app.address_input.backspace(),
        KeyCode::Delete => app.address_input.delete(),
        KeyCode::Left => app.address_input.move_left(),
        KeyCode::Right => app.address_input.move_right(),
        KeyCode::Home => app.address_input.move_home(),
        KeyCode::End => app.address_input.move_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::state::Selection;

    fn key(code: KeyCode) -> Message {
        Message::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn trade(hash: &str) -> Trade {
        Trade {
            hash: hash.to_string(),
            timestamp: 1_700_000_000,
            block_number: 1,
            from_address: "0xfrom".to_string(),
            subject_address: "0xsubject".to_string(),
            amount: dec!(1),
            cost: "1".to_string(),
            is_buy: true,
        }
    }

    #[test]
    fn typing_an_address_updates_selection() {
        let mut app = App::new(Selection::new(), "https://basescan.org");
        update(&mut app, key(KeyCode::Char('a')));
        for c in "0xB".chars() {
            update(&mut app, key(KeyCode::Char(c)));
        }
        // 'q' is text while typing, not quit
        update(&mut app, key(KeyCode::Char('q')));
        update(&mut app, key(KeyCode::Backspace));
        update(&mut app, key(KeyCode::Enter));

        assert_eq!(app.selection.read(), "0xB");
        assert!(!app.should_quit);
    }

    #[test]
    fn fetch_lifecycle_toggles_loading() {
        let mut app = App::new(Selection::new(), "https://basescan.org");
        update(
            &mut app,
            Message::FetchStarted {
                request: RequestId(1),
                address: "0xa".to_string(),
            },
        );
        assert!(app.feed.is_loading());

        update(
            &mut app,
            Message::TradesFetched {
                request: RequestId(1),
                address: "0xa".to_string(),
                result: Ok(vec![trade("0x1")]),
            },
        );
        assert!(!app.feed.is_loading());
        assert_eq!(app.feed.trades().len(), 1);
        assert!(app.error_message.is_none());
    }

    #[test]
    fn failed_fetch_shows_error_and_keeps_trades() {
        let mut app = App::new(Selection::new(), "https://basescan.org");
        update(
            &mut app,
            Message::FetchStarted {
                request: RequestId(1),
                address: "0xa".to_string(),
            },
        );
        update(
            &mut app,
            Message::TradesFetched {
                request: RequestId(1),
                address: "0xa".to_string(),
                result: Ok(vec![trade("0x1")]),
            },
        );
        update(
            &mut app,
            Message::FetchStarted {
                request: RequestId(2),
                address: "0xa2".to_string(),
            },
        );
        update(
            &mut app,
            Message::TradesFetched {
                request: RequestId(2),
                address: "0xa2".to_string(),
                result: Err("http error: 500".to_string()),
            },
        );

        assert!(!app.feed.is_loading());
        assert_eq!(app.feed.trades(), &[trade("0x1")]);
        let message = &app.error_message.as_ref().unwrap().message;
        assert!(message.contains("0xa2"));
    }

    #[test]
    fn stale_failure_is_silent() {
        let mut app = App::new(Selection::new(), "https://basescan.org");
        for (id, address) in [(1, "0xA"), (2, "0xB")] {
            update(
                &mut app,
                Message::FetchStarted {
                    request: RequestId(id),
                    address: address.to_string(),
                },
            );
        }
        update(
            &mut app,
            Message::TradesFetched {
                request: RequestId(1),
                address: "0xA".to_string(),
                result: Err("timeout".to_string()),
            },
        );
        assert!(app.error_message.is_none());
        assert!(app.feed.is_loading());
    }

    #[test]
    fn quit_keys() {
        let mut app = App::new(Selection::new(), "https://basescan.org");
        update(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = App::new(Selection::new(), "https://basescan.org");
        app.start_address_input();
        update(
            &mut app,
            Message::Input(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert!(app.should_quit);
    }
}
