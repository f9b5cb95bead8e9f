use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info};

use tokenscope::TokenScopeError;
use tokenscope::api::TradesClient;
use tokenscope::config::fetch_config;
use tokenscope::feed::spawn_trade_watcher;
use tokenscope::logging::init_logging;
use tokenscope::state::Selection;
use tokenscope::tui::event::{spawn_event_reader, spawn_tick_timer, update};
use tokenscope::tui::{self, App, Message, Tui};

/// Redraw interval, which also refreshes relative trade times.
const TICK_INTERVAL_MS: u64 = 1000;

#[tokio::main]
async fn main() -> Result<(), TokenScopeError> {
    let app_config = fetch_config()?;

    // stdout belongs to the TUI, so logs go to a file.
    init_logging(&app_config.log_file)?;
    info!(
        api = %app_config.api.base_url,
        explorer = %app_config.explorer_url,
        "Starting tokenscope"
    );

    let selection = Selection::new();
    if let Some(address) = &app_config.initial_address {
        selection.select(address.as_str());
    }

    let client = Arc::new(TradesClient::new(&app_config.api)?);
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut terminal = tui::setup_terminal()?;
    spawn_event_reader(tx.clone());
    spawn_tick_timer(tx.clone(), TICK_INTERVAL_MS);
    let watcher = spawn_trade_watcher(&selection, client, tx);

    let mut app = App::new(selection, app_config.explorer_url);
    let result = run(&mut terminal, &mut app, &mut rx).await;

    watcher.abort();
    tui::restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        error!(error = %e, "tokenscope exited with an error");
    }
    info!("Stopped tokenscope");
    result
}

/// Draws, waits for the next message, applies it, until the app quits.
async fn run(
    terminal: &mut Tui,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<Message>,
) -> Result<(), TokenScopeError> {
    while !app.should_quit {
        terminal.draw(|frame| tui::render(frame, app))?;

        let Some(message) = rx.recv().await else {
            break;
        };
        update(app, message);

        // Apply everything already queued before the next redraw.
        while let Ok(message) = rx.try_recv() {
            update(app, message);
        }
    }
    Ok(())
}
