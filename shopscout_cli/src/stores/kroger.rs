use std::time::Duration;

use super::profile::StoreProfile;

pub fn profile() -> StoreProfile {
    StoreProfile {
        id: "kroger",
        search_base: "https://www.kroger.com/search",
        query_param: "query",
        page_param: Some("page"),
        pages: 2,
        row_selector: "div.ProductCard",
        name_selector: "span.kds-Text--m",
        // dollars and cents render as separate nodes; the flattened text can
        // read like "329" and then parses as whole dollars
        price_selector: "data[typeof='Price']",
        description_selector: None,
        rating_selector: Some("span.kds-Rating"),
        ready_class: "ProductCard",
        ready_timeout: Duration::from_secs(12),
        listing_cap: 5,
    }
}
