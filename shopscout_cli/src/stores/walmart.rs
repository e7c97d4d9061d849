use std::time::Duration;

use super::profile::StoreProfile;

pub fn profile() -> StoreProfile {
    StoreProfile {
        id: "walmart",
        search_base: "https://www.walmart.com/search",
        query_param: "q",
        page_param: Some("page"),
        pages: 2,
        row_selector: "div[data-item-id]",
        name_selector: "span[data-automation-id='product-title']",
        price_selector: "div[data-automation-id='product-price']",
        description_selector: None,
        rating_selector: Some("span.w_iUH7"),
        ready_class: "search-results",
        ready_timeout: Duration::from_secs(12),
        listing_cap: 5,
    }
}
