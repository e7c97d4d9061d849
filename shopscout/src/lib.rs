mod error;
mod pipeline;
mod price;
mod traits;
mod types;

pub use error::{RenderError, SelectionCanceled};
pub use pipeline::collector;
pub use pipeline::gate;
pub use pipeline::{
    Cart, CartLane, EventStream, FetchPolicy, Orchestrator, OrchestratorBuilder, Receipt,
    ReceiptLine, SelectionGate, SelectionResolver, UiEvent,
};
pub use price::parse_price;
pub use traits::{Extract, Fetcher, Renderer, WaitPolicy};
pub use types::{CandidateSet, Choice, Listing, RawListing, Selection};
