use std::time::Duration;

use super::profile::StoreProfile;

pub fn profile() -> StoreProfile {
    StoreProfile {
        id: "target",
        search_base: "https://www.target.com/s",
        query_param: "searchTerm",
        page_param: None,
        pages: 1,
        row_selector: "div[data-test='product-card']",
        name_selector: "a[data-test='product-title']",
        price_selector: "span[data-test='current-price']",
        description_selector: Some("div[data-test='product-description']"),
        rating_selector: None,
        ready_class: "product-grid",
        ready_timeout: Duration::from_secs(12),
        listing_cap: 5,
    }
}
