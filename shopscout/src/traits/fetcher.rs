use async_trait::async_trait;

use crate::types::Listing;

/// One retail storefront. Implementations own URL construction and listing
/// extraction; every internal failure must surface as `Err` so the collector
/// can absorb it without touching the other stores.
#[async_trait]
pub trait Fetcher: Send + Sync {
    type Error;

    /// Stable store id. The order fetchers are registered in defines store
    /// ordering everywhere downstream: carts, receipts, tie breaks.
    fn store(&self) -> String;

    fn search_urls(&self, term: &str) -> Vec<String>;

    /// Bounded candidate list for `term`. An empty result is a normal
    /// outcome, not an error.
    async fn fetch(&self, term: &str) -> Result<Vec<Listing>, Self::Error>;
}
