use std::fmt::Display;
use std::sync::Arc;

use tokio::time::timeout;

use super::config::FetchPolicy;
use crate::traits::Fetcher;
use crate::types::CandidateSet;

/// Runs every registered fetcher for `term` concurrently and joins the
/// results into one candidate set, grouped in registration order.
///
/// Stores are fully isolated from each other: a fetcher error or timeout is
/// logged and contributes an empty group, never a collector failure. Groups
/// are truncated to the policy's listing cap.
pub async fn collect<E>(
    fetchers: &[Arc<dyn Fetcher<Error = E>>],
    term: &str,
    policy: FetchPolicy,
) -> CandidateSet
where
    E: Display + Send,
{
    let searches = fetchers.iter().map(|fetcher| async move {
        let store = fetcher.store();
        log::debug!("{}: searching {:?}", store, fetcher.search_urls(term));

        match timeout(policy.fetch_timeout(), fetcher.fetch(term)).await {
            Ok(Ok(mut listings)) => {
                listings.truncate(policy.listing_cap());
                (store, listings)
            }
            Ok(Err(err)) => {
                log::error!("{}: {}", store, err);
                (store, Vec::new())
            }
            Err(_) => {
                log::warn!(
                    "{}: no response within {:?}",
                    store,
                    policy.fetch_timeout()
                );
                (store, Vec::new())
            }
        }
    });

    let mut candidates = CandidateSet::new();
    for (store, listings) in futures::future::join_all(searches).await {
        candidates.push_group(store, listings);
    }

    candidates
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::types::Listing;

    struct StaticStore {
        id: &'static str,
        rows: Vec<(&'static str, &'static str)>,
    }

    #[async_trait]
    impl Fetcher for StaticStore {
        type Error = String;

        fn store(&self) -> String {
            self.id.to_string()
        }

        fn search_urls(&self, term: &str) -> Vec<String> {
            vec![format!("stub://{}/search?q={}", self.id, term)]
        }

        async fn fetch(&self, _term: &str) -> Result<Vec<Listing>, String> {
            Ok(self
                .rows
                .iter()
                .map(|(name, price)| Listing::new(self.id, *name, *price))
                .collect())
        }
    }

    struct FailingStore {
        id: &'static str,
    }

    #[async_trait]
    impl Fetcher for FailingStore {
        type Error = String;

        fn store(&self) -> String {
            self.id.to_string()
        }

        fn search_urls(&self, term: &str) -> Vec<String> {
            vec![format!("stub://{}/search?q={}", self.id, term)]
        }

        async fn fetch(&self, _term: &str) -> Result<Vec<Listing>, String> {
            Err(String::from("connection reset"))
        }
    }

    struct HangingStore {
        id: &'static str,
    }

    #[async_trait]
    impl Fetcher for HangingStore {
        type Error = String;

        fn store(&self) -> String {
            self.id.to_string()
        }

        fn search_urls(&self, term: &str) -> Vec<String> {
            vec![format!("stub://{}/search?q={}", self.id, term)]
        }

        async fn fetch(&self, _term: &str) -> Result<Vec<Listing>, String> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(Vec::new())
        }
    }

    fn fetchers(list: Vec<Box<dyn Fetcher<Error = String>>>) -> Vec<Arc<dyn Fetcher<Error = String>>> {
        list.into_iter().map(Arc::from).collect()
    }

    #[tokio::test]
    async fn failing_stores_do_not_affect_the_others() {
        let fetchers = fetchers(vec![
            Box::new(StaticStore {
                id: "alpha-mart",
                rows: vec![("Milk 1gal", "$3.49")],
            }),
            Box::new(FailingStore { id: "bridge-foods" }),
            Box::new(StaticStore {
                id: "corner-grocer",
                rows: vec![("Milk 1gal", "329")],
            }),
        ]);

        let candidates = collect(&fetchers, "milk", FetchPolicy::default()).await;

        assert_eq!(candidates.groups().count(), 2);
        assert!(candidates.get("bridge-foods").is_none());
        assert_eq!(candidates.get("alpha-mart").unwrap()[0].price, 3.49);
        assert_eq!(candidates.get("corner-grocer").unwrap()[0].price, 329.0);
    }

    #[tokio::test]
    async fn hanging_store_times_out_on_its_own() {
        let fetchers = fetchers(vec![
            Box::new(HangingStore { id: "alpha-mart" }),
            Box::new(StaticStore {
                id: "bridge-foods",
                rows: vec![("Eggs dozen", "$2.79")],
            }),
        ]);

        let policy = FetchPolicy::new(5, Duration::from_millis(50));
        let candidates = collect(&fetchers, "eggs", policy).await;

        assert!(candidates.get("alpha-mart").is_none());
        assert_eq!(candidates.get("bridge-foods").unwrap().len(), 1);
    }

    #[tokio::test]
    async fn groups_are_capped_at_the_policy_limit() {
        let fetchers = fetchers(vec![Box::new(StaticStore {
            id: "alpha-mart",
            rows: vec![
                ("Milk A", "$3.49"),
                ("Milk B", "$3.59"),
                ("Milk C", "$3.69"),
            ],
        })]);

        let policy = FetchPolicy::new(2, Duration::from_secs(12));
        let candidates = collect(&fetchers, "milk", policy).await;

        assert_eq!(candidates.get("alpha-mart").unwrap().len(), 2);
    }

    #[tokio::test]
    async fn all_stores_empty_yields_an_empty_set() {
        let fetchers = fetchers(vec![
            Box::new(FailingStore { id: "alpha-mart" }),
            Box::new(StaticStore {
                id: "bridge-foods",
                rows: Vec::new(),
            }),
        ]);

        let candidates = collect(&fetchers, "caviar", FetchPolicy::default()).await;
        assert!(candidates.is_empty());
    }
}
