mod builder;
mod cart;
pub mod collector;
mod config;
mod events;
pub mod gate;
mod receipt;

pub use builder::OrchestratorBuilder;
pub use cart::{Cart, CartLane};
pub use config::FetchPolicy;
pub use events::{EventStream, UiEvent};
pub use gate::{SelectionGate, SelectionResolver};
pub use receipt::{Receipt, ReceiptLine};

use std::fmt::Display;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::error::SelectionCanceled;
use crate::traits::Fetcher;
use crate::types::Choice;

/// Drives one shopping run: for every requested item, fan out to all
/// registered stores, hand the grouped candidates to the presentation layer,
/// wait for its selection and fold the accepted listings into per-store
/// carts.
///
/// The orchestrator is a single sequential flow. The only parallelism lives
/// inside the per-item fan-out, the only suspension point is the selection
/// gate, and the cart has no writer but this task, so no locking is needed
/// anywhere.
pub struct Orchestrator<E> {
    fetchers: Vec<Arc<dyn Fetcher<Error = E>>>,
    policy: FetchPolicy,
    events: mpsc::Sender<UiEvent>,
}

impl<E> Orchestrator<E>
where
    E: Display + Send,
{
    pub fn builder() -> OrchestratorBuilder<E> {
        OrchestratorBuilder::new()
    }

    pub(crate) fn new(
        fetchers: Vec<Arc<dyn Fetcher<Error = E>>>,
        policy: FetchPolicy,
        events: mpsc::Sender<UiEvent>,
    ) -> Self {
        Self {
            fetchers,
            policy,
            events,
        }
    }

    /// Processes `items` in order and returns the accumulated cart. The
    /// matching [`Receipt`] is emitted as [`UiEvent::Finalize`] and can be
    /// recomputed from the returned cart at any time.
    ///
    /// Items whose fan-out comes back empty across every store are skipped
    /// without prompting. A canceled selection ends the remaining items;
    /// whatever was accumulated so far is still summarized.
    pub async fn run(self, items: Vec<String>) -> Cart {
        let mut cart = Cart::for_stores(self.fetchers.iter().map(|fetcher| fetcher.store()));

        for term in items {
            self.emit(UiEvent::Log(format!(
                "searching {} store(s) for \"{}\"",
                self.fetchers.len(),
                term
            )))
            .await;

            let candidates = collector::collect(&self.fetchers, &term, self.policy).await;
            if candidates.is_empty() {
                self.emit(UiEvent::Log(format!("no results for \"{}\"", term)))
                    .await;
                continue;
            }

            let (gate, resolver) = gate::channel();
            self.emit(UiEvent::PromptSelection {
                term: term.clone(),
                candidates,
                resolver,
            })
            .await;

            let selection = match gate.resolved().await {
                Ok(selection) => selection,
                Err(SelectionCanceled) => {
                    log::warn!("selection for \"{}\" canceled, ending the run", term);
                    break;
                }
            };

            for (store, choice) in selection.decisions() {
                if let Choice::Chosen(listing) = choice {
                    self.emit(UiEvent::Log(format!(
                        "added \"{}\" ({}) to the {} cart",
                        listing.name,
                        listing.price_label(),
                        store
                    )))
                    .await;
                }
            }

            cart.accept(selection);
        }

        self.emit(UiEvent::Finalize(Receipt::summarize(&cart)))
            .await;

        cart
    }

    async fn emit(&self, event: UiEvent) {
        // A gone presentation side surfaces at the gate, not here.
        let _ = self.events.send(event).await;
    }
}
