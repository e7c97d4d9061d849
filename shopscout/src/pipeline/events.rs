use tokio_stream::wrappers::ReceiverStream;

use super::gate::SelectionResolver;
use super::receipt::Receipt;
use crate::types::CandidateSet;

/// Everything the pipeline tells the presentation layer. `PromptSelection`
/// carries the resolver that unblocks the flow; dropping it unresolved
/// cancels the rest of the run.
#[derive(Debug)]
pub enum UiEvent {
    Log(String),
    PromptSelection {
        term: String,
        candidates: CandidateSet,
        resolver: SelectionResolver,
    },
    Finalize(Receipt),
}

/// Presentation-side view of a run; ends when the orchestrator finishes.
pub type EventStream = ReceiverStream<UiEvent>;
