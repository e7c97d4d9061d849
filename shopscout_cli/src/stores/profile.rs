use std::time::Duration;

use scraper::{ElementRef, Html, Selector};
use shopscout::{Extract, RawListing, WaitPolicy};

use crate::error::AppError;

/// Everything that distinguishes one storefront from another. The control
/// flow that uses a profile is shared by every store; only this data varies.
#[derive(Debug, Clone)]
pub struct StoreProfile {
    pub id: &'static str,
    pub search_base: &'static str,
    pub query_param: &'static str,
    /// Result pages past the first are requested with this parameter.
    pub page_param: Option<&'static str>,
    pub pages: u32,
    pub row_selector: &'static str,
    pub name_selector: &'static str,
    pub price_selector: &'static str,
    pub description_selector: Option<&'static str>,
    pub rating_selector: Option<&'static str>,
    /// Class that marks the result grid as rendered.
    pub ready_class: &'static str,
    pub ready_timeout: Duration,
    pub listing_cap: usize,
}

impl StoreProfile {
    pub fn search_urls(&self, term: &str) -> Result<Vec<String>, AppError> {
        let mut urls = Vec::new();

        for page in 1..=self.pages.max(1) {
            let mut url = reqwest::Url::parse(self.search_base)
                .map_err(|err| AppError::Url(err.to_string()))?;

            {
                let mut query = url.query_pairs_mut();
                query.append_pair(self.query_param, term);
                if page > 1 {
                    if let Some(page_param) = self.page_param {
                        query.append_pair(page_param, &page.to_string());
                    }
                }
            }

            urls.push(url.to_string());
        }

        Ok(urls)
    }

    pub fn wait_policy(&self) -> WaitPolicy {
        WaitPolicy::ClassPresent {
            class: self.ready_class.to_string(),
            timeout: self.ready_timeout,
        }
    }

    fn selector(raw: &str) -> Result<Selector, AppError> {
        Selector::parse(raw).map_err(|err| AppError::Selector(err.to_string()))
    }
}

impl Extract for StoreProfile {
    type Error = AppError;

    fn extract(&self, html: &str) -> Result<Vec<RawListing>, AppError> {
        let document = Html::parse_document(html);
        let row_selector = Self::selector(self.row_selector)?;
        let name_selector = Self::selector(self.name_selector)?;
        let price_selector = Self::selector(self.price_selector)?;
        let description_selector = self.description_selector.map(Self::selector).transpose()?;
        let rating_selector = self.rating_selector.map(Self::selector).transpose()?;

        let mut rows = Vec::new();

        for row in document.select(&row_selector) {
            let name = text_of(row.select(&name_selector).next());
            let price_text = text_of(row.select(&price_selector).next());
            let description = description_selector
                .as_ref()
                .and_then(|selector| text_of(row.select(selector).next()));
            let rating = rating_selector
                .as_ref()
                .and_then(|selector| text_of(row.select(selector).next()));

            rows.push(RawListing {
                name,
                price_text,
                description,
                rating,
            });
        }

        Ok(rows)
    }
}

fn text_of(element: Option<ElementRef>) -> Option<String> {
    element
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_profile() -> StoreProfile {
        StoreProfile {
            id: "test-store",
            search_base: "https://shop.example.com/search",
            query_param: "q",
            page_param: Some("page"),
            pages: 2,
            row_selector: "li.result",
            name_selector: "span.title",
            price_selector: "span.price",
            description_selector: Some("p.blurb"),
            rating_selector: None,
            ready_class: "results",
            ready_timeout: Duration::from_secs(10),
            listing_cap: 5,
        }
    }

    #[test]
    fn builds_one_url_per_page_with_the_term_encoded() {
        let urls = test_profile().search_urls("whole milk").unwrap();

        assert_eq!(
            urls,
            [
                "https://shop.example.com/search?q=whole+milk",
                "https://shop.example.com/search?q=whole+milk&page=2",
            ]
        );
    }

    #[test]
    fn extracts_rows_with_partial_fields() {
        let html = r#"
            <ul class="results">
                <li class="result">
                    <span class="title">Milk 1gal</span>
                    <span class="price">$3.49</span>
                    <p class="blurb">Whole milk, vitamin D</p>
                </li>
                <li class="result">
                    <span class="title">Milk 2%</span>
                </li>
                <li class="result">
                    <span class="price">$0.99</span>
                </li>
            </ul>
        "#;

        let rows = test_profile().extract(html).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].name.as_deref(), Some("Milk 1gal"));
        assert_eq!(rows[0].price_text.as_deref(), Some("$3.49"));
        assert_eq!(rows[0].description.as_deref(), Some("Whole milk, vitamin D"));
        assert_eq!(rows[1].price_text, None);
        assert_eq!(rows[2].name, None);
    }

    #[test]
    fn a_page_with_no_rows_extracts_nothing() {
        let rows = test_profile().extract("<html><body></body></html>").unwrap();
        assert!(rows.is_empty());
    }
}
