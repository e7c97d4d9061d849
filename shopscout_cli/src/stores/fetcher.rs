use std::sync::Arc;

use async_trait::async_trait;
use shopscout::{Extract, Fetcher, Listing, Renderer};

use super::profile::StoreProfile;
use crate::error::AppError;

/// The one fetcher that serves every store; per-store behavior lives
/// entirely in the profile. Pages are visited in order until the listing
/// cap is met. A page that fails to render or extract ends the walk,
/// keeping whatever earlier pages gathered; a first-page failure is the
/// store failing outright and surfaces as an error.
pub struct SelectorFetcher {
    profile: StoreProfile,
    renderer: Arc<dyn Renderer>,
}

impl SelectorFetcher {
    pub fn new(profile: StoreProfile, renderer: Arc<dyn Renderer>) -> Self {
        Self { profile, renderer }
    }
}

#[async_trait]
impl Fetcher for SelectorFetcher {
    type Error = AppError;

    fn store(&self) -> String {
        self.profile.id.to_string()
    }

    fn search_urls(&self, term: &str) -> Vec<String> {
        match self.profile.search_urls(term) {
            Ok(urls) => urls,
            Err(err) => {
                log::error!("{}: {}", self.profile.id, err);
                Vec::new()
            }
        }
    }

    async fn fetch(&self, term: &str) -> Result<Vec<Listing>, AppError> {
        let wait = self.profile.wait_policy();
        let mut listings = Vec::new();

        for url in self.profile.search_urls(term)? {
            if listings.len() >= self.profile.listing_cap {
                break;
            }

            log::info!("{}: visiting {}", self.profile.id, url);

            let html = match self.renderer.render(&url, &wait).await {
                Ok(html) => html,
                Err(err) => {
                    if listings.is_empty() {
                        return Err(err.into());
                    }
                    log::error!("{}: {}", self.profile.id, err);
                    break;
                }
            };

            let rows = match self.profile.extract(&html) {
                Ok(rows) => rows,
                Err(err) => {
                    if listings.is_empty() {
                        return Err(err);
                    }
                    log::error!("{}: {}", self.profile.id, err);
                    break;
                }
            };

            for raw in rows {
                if listings.len() >= self.profile.listing_cap {
                    break;
                }

                let name = match raw.name {
                    Some(name) => name,
                    None => continue,
                };

                listings.push(
                    Listing::new(self.profile.id, name, raw.price_text.unwrap_or_default())
                        .with_description(raw.description)
                        .with_rating(raw.rating),
                );
            }
        }

        Ok(listings)
    }
}
