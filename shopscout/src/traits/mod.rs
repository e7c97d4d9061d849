mod extract;
mod fetcher;
mod render;

pub use extract::Extract;
pub use fetcher::Fetcher;
pub use render::{Renderer, WaitPolicy};
