use tokio::sync::oneshot;

use crate::error::SelectionCanceled;
use crate::types::Selection;

/// Creates the rendezvous for one candidate set: the orchestrator keeps the
/// gate, the presentation side receives the resolver inside the prompt event.
pub fn channel() -> (SelectionGate, SelectionResolver) {
    let (tx, rx) = oneshot::channel();
    (SelectionGate { rx }, SelectionResolver { tx })
}

/// Waiting half of the handoff, consumed by awaiting it.
#[derive(Debug)]
pub struct SelectionGate {
    rx: oneshot::Receiver<Selection>,
}

impl SelectionGate {
    /// Blocks until the resolver fires. No timeout is imposed here; a human
    /// may take arbitrarily long. A dropped resolver reads as cancellation.
    pub async fn resolved(self) -> Result<Selection, SelectionCanceled> {
        self.rx.await.map_err(|_| SelectionCanceled)
    }
}

/// Fulfilling half. `resolve` takes `self` by value, so a second resolution
/// of the same gate is unrepresentable.
#[derive(Debug)]
pub struct SelectionResolver {
    tx: oneshot::Sender<Selection>,
}

impl SelectionResolver {
    /// Hands the selection to the waiting flow. If the flow is already gone
    /// the selection comes back to the caller.
    pub fn resolve(self, selection: Selection) -> Result<(), Selection> {
        self.tx.send(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Listing;

    #[tokio::test]
    async fn delivers_the_selection_it_was_resolved_with() {
        let (gate, resolver) = channel();

        let mut selection = Selection::new();
        selection.choose("alpha-mart", Listing::new("alpha-mart", "Milk 1gal", "$3.49"));
        selection.skip("corner-grocer");

        resolver.resolve(selection.clone()).unwrap();
        assert_eq!(gate.resolved().await, Ok(selection));
    }

    #[tokio::test]
    async fn dropped_resolver_reads_as_cancellation() {
        let (gate, resolver) = channel();
        drop(resolver);

        assert_eq!(gate.resolved().await, Err(SelectionCanceled));
    }

    #[tokio::test]
    async fn resolving_a_dropped_gate_returns_the_selection() {
        let (gate, resolver) = channel();
        drop(gate);

        let mut selection = Selection::new();
        selection.skip("alpha-mart");

        assert_eq!(resolver.resolve(selection.clone()), Err(selection));
    }
}
