use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use super::config::FetchPolicy;
use super::events::EventStream;
use super::Orchestrator;
use crate::traits::Fetcher;

pub struct OrchestratorBuilder<E> {
    fetchers: Vec<Arc<dyn Fetcher<Error = E>>>,
    listing_cap: usize,
    fetch_timeout: Duration,
    event_capacity: usize,
}

impl<E> Default for OrchestratorBuilder<E> {
    fn default() -> Self {
        Self {
            fetchers: Vec::new(),
            listing_cap: 5,
            fetch_timeout: Duration::from_secs(12),
            event_capacity: 64,
        }
    }
}

impl<E> OrchestratorBuilder<E>
where
    E: Display + Send,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Registration order defines store ordering everywhere downstream.
    pub fn register<F>(mut self, fetcher: F) -> Self
    where
        F: Fetcher<Error = E> + 'static,
    {
        self.fetchers.push(Arc::new(fetcher));
        self
    }

    pub fn listing_cap(mut self, listing_cap: usize) -> Self {
        self.listing_cap = listing_cap;
        self
    }

    pub fn fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    pub fn event_capacity(mut self, event_capacity: usize) -> Self {
        self.event_capacity = event_capacity;
        self
    }

    pub fn build(self) -> (Orchestrator<E>, EventStream) {
        let (events_tx, events_rx) = mpsc::channel(self.event_capacity);
        let orchestrator = Orchestrator::new(
            self.fetchers,
            FetchPolicy::new(self.listing_cap, self.fetch_timeout),
            events_tx,
        );

        (orchestrator, ReceiverStream::new(events_rx))
    }
}
