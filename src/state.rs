//! Session-wide selected address.
//!
//! The composition root creates one [`Selection`] and hands clones of it
//! to whoever needs to read or change the address. Clones share state.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

/// Handle to the currently selected address.
///
/// An empty string means nothing is selected.
#[derive(Clone, Debug)]
pub struct Selection {
    tx: Arc<watch::Sender<String>>,
}

impl Selection {
    /// Creates a selection with no address selected.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(String::new());
        Self { tx: Arc::new(tx) }
    }

    /// Returns the current address, or an empty string if none is selected.
    pub fn read(&self) -> String {
        self.tx.borrow().clone()
    }

    /// Replaces the selected address.
    ///
    /// The value is not validated. Observers are only notified when the
    /// address actually changes.
    pub fn select(&self, address: impl Into<String>) {
        let address = address.into();
        let changed = self.tx.send_if_modified(|current| {
            if *current == address {
                return false;
            }
            *current = address.clone();
            true
        });
        if changed {
            info!(address = %address, "Selected address");
        }
    }

    /// Returns a receiver that observes address changes.
    ///
    /// The current value is marked unseen, so the first
    /// [`changed`](watch::Receiver::changed) call resolves immediately.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        let mut rx = self.tx.subscribe();
        rx.mark_changed();
        rx
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}
