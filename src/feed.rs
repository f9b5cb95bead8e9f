//! Recent-trades feed for the selected address.
//!
//! [`spawn_trade_watcher`] observes the [`Selection`] and issues one fetch
//! per address change. Fetch lifecycle events are delivered to the UI loop
//! as [`Message`]s and applied to a [`TradeFeed`], which holds what the
//! trades panel renders.
//!
//! Fetches are never cancelled and may complete out of order. Every fetch
//! carries a [`RequestId`]; the feed only accepts the result of the most
//! recently issued request, so a slow response for an address the user has
//! already moved away from cannot overwrite newer data.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::api::TradeSource;
use crate::models::Trade;
use crate::state::Selection;
use crate::tui::Message;

/// Identifier of one fetch, increasing with every selection change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestId(pub u64);

/// Outcome of the most recent fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedStatus {
    /// A fetch is in flight.
    Loading,
    /// The last fetch succeeded (possibly with zero trades).
    Loaded,
    /// The last fetch failed; held trades are from an earlier success.
    Failed(String),
}

/// Whether a settled fetch was applied to the feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    Applied,
    /// The result belonged to a superseded request and was dropped.
    Stale,
}

/// Trades panel state.
#[derive(Debug)]
pub struct TradeFeed {
    address: String,
    trades: Vec<Trade>,
    status: FeedStatus,
    pending: Option<RequestId>,
}

impl TradeFeed {
    /// Creates an empty feed in the loading state, as it is before the
    /// first fetch has been issued.
    pub fn new() -> Self {
        Self {
            address: String::new(),
            trades: Vec::new(),
            status: FeedStatus::Loading,
            pending: None,
        }
    }

    /// Records that `request` was issued for `address`.
    pub fn begin(&mut self, request: RequestId, address: String) {
        self.address = address;
        self.status = FeedStatus::Loading;
        self.pending = Some(request);
    }

    /// Applies the result of `request`.
    ///
    /// On success the held trades are replaced wholesale. On failure they
    /// are left untouched. Either way the feed stops loading, unless the
    /// request has since been superseded, in which case nothing changes.
    pub fn settle(
        &mut self,
        request: RequestId,
        result: std::result::Result<Vec<Trade>, String>,
    ) -> Settled {
        if self.pending != Some(request) {
            return Settled::Stale;
        }
        self.pending = None;
        match result {
            Ok(trades) => {
                self.trades = trades;
                self.status = FeedStatus::Loaded;
            }
            Err(cause) => {
                self.status = FeedStatus::Failed(cause);
            }
        }
        Settled::Applied
    }

    /// Whether the panel should show the loading indicator.
    pub fn is_loading(&self) -> bool {
        self.status == FeedStatus::Loading
    }

    /// Address of the most recently issued request.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Held trades, in the order the backend returned them.
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn status(&self) -> &FeedStatus {
        &self.status
    }
}

impl Default for TradeFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawns a task that fetches trades whenever the selection changes.
///
/// The current selection is fetched immediately, even when it is empty.
/// Each fetch runs in its own task and reports back through `tx` with a
/// [`Message::FetchStarted`] followed later by a [`Message::TradesFetched`].
/// The watcher stops once `tx` is closed or the selection is dropped;
/// results arriving after that are discarded.
pub fn spawn_trade_watcher<S: TradeSource>(
    selection: &Selection,
    source: Arc<S>,
    tx: mpsc::UnboundedSender<Message>,
) -> JoinHandle<()> {
    let mut rx = selection.subscribe();

    tokio::spawn(async move {
        let mut next_id = 0u64;

        while rx.changed().await.is_ok() {
            let address = rx.borrow_and_update().clone();
            next_id += 1;
            let request = RequestId(next_id);

            info!(request = request.0, address = %address, "Fetching trades");
            if tx
                .send(Message::FetchStarted {
                    request,
                    address: address.clone(),
                })
                .is_err()
            {
                break;
            }

            let source = Arc::clone(&source);
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = match source.fetch_trades(&address).await {
                    Ok(trades) => {
                        info!(
                            request = request.0,
                            address = %address,
                            count = trades.len(),
                            "Fetched trades"
                        );
                        Ok(trades)
                    }
                    Err(e) => {
                        warn!(request = request.0, address = %address, error = %e, "Trade fetch failed");
                        Err(e.to_string())
                    }
                };
                if tx
                    .send(Message::TradesFetched {
                        request,
                        address,
                        result,
                    })
                    .is_err()
                {
                    debug!(request = request.0, "UI closed before fetch completed");
                }
            });
        }

        debug!("Trade watcher stopped");
    })
}
