//! Background suggestion lookups.
//!
//! Owners that fetch suggestions externally (a server, a large index) should
//! not block the UI while doing it. The pattern:
//! 1. The tag input reports `QueryChanged`
//! 2. If the query meets the minimum length, the owner spawns a lookup via
//!    `TaskSpawner` and marks the widget busy
//! 3. The main loop keeps rendering and handling events
//! 4. When the task completes, it sends a `LookupMessage` through the channel
//! 5. The main loop polls the channel with `try_recv()`, drops results for
//!    queries that are no longer current and hands the rest to the widget

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::trace;

use crate::tags::{filter_suggestions, Suggestion};

/// Messages sent from background tasks to the main event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupMessage {
    /// Suggestions found for a query.
    SuggestionsFetched {
        query: String,
        suggestions: Vec<Suggestion>,
    },
}

/// A catalogue of suggestions searched off the UI thread.
#[derive(Debug, Clone)]
pub struct SuggestionSource {
    catalogue: Arc<Vec<Suggestion>>,
    /// Simulated latency of the lookup.
    delay: Duration,
}

impl SuggestionSource {
    /// Create a source over the given catalogue.
    pub fn new(catalogue: Vec<Suggestion>, delay: Duration) -> Self {
        Self {
            catalogue: Arc::new(catalogue),
            delay,
        }
    }

    /// Look up suggestions starting with `query`.
    pub async fn lookup(&self, query: &str) -> Vec<Suggestion> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        filter_suggestions(query, &self.catalogue)
    }
}

/// Spawns background tasks that report back through a channel.
#[derive(Debug, Clone)]
pub struct TaskSpawner {
    tx: mpsc::UnboundedSender<LookupMessage>,
}

impl TaskSpawner {
    /// Create a new TaskSpawner with the given channel sender.
    pub fn new(tx: mpsc::UnboundedSender<LookupMessage>) -> Self {
        Self { tx }
    }

    /// Spawn a lookup for the given query.
    pub fn spawn_lookup(&self, source: &SuggestionSource, query: String) {
        let tx = self.tx.clone();
        let source = source.clone();
        tokio::spawn(async move {
            let suggestions = source.lookup(&query).await;
            trace!(query = %query, found = suggestions.len(), "Lookup finished");
            let _ = tx.send(LookupMessage::SuggestionsFetched { query, suggestions });
        });
    }
}

/// Create the lookup channel, returning the receiver and a spawner.
pub fn create_task_channel() -> (mpsc::UnboundedReceiver<LookupMessage>, TaskSpawner) {
    let (tx, rx) = mpsc::unbounded_channel();
    (rx, TaskSpawner::new(tx))
}
