use crate::types::RawListing;

/// Turns rendered page content into raw listing rows. Implemented by
/// per-store extraction rules, which are configuration data rather than code.
pub trait Extract {
    type Error;

    fn extract(&self, html: &str) -> Result<Vec<RawListing>, Self::Error>;
}
