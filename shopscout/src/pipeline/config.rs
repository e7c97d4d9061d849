use std::time::Duration;

/// Limits applied to every store during a fan-out.
#[derive(Clone, Copy)]
pub struct FetchPolicy {
    listing_cap: usize,
    fetch_timeout: Duration,
}

impl FetchPolicy {
    pub fn new(listing_cap: usize, fetch_timeout: Duration) -> Self {
        Self {
            listing_cap,
            fetch_timeout,
        }
    }

    pub fn listing_cap(&self) -> usize {
        self.listing_cap
    }

    /// Each fetcher's own deadline; one slow store never delays the others
    /// past this.
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            listing_cap: 5,
            fetch_timeout: Duration::from_secs(12),
        }
    }
}
