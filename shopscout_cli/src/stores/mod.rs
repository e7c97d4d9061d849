mod fetcher;
mod profile;

mod kroger;
mod target;
mod walmart;

pub use fetcher::SelectorFetcher;
pub use profile::StoreProfile;

/// Every configured storefront. The order here is the registration order,
/// which fixes store ordering in carts, receipts and tie breaks.
pub fn all() -> Vec<StoreProfile> {
    vec![walmart::profile(), target::profile(), kroger::profile()]
}
