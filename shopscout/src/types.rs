use crate::price::parse_price;

/// One product candidate returned by a store for a search term. Immutable
/// once produced by a fetcher.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub store: String,
    pub name: String,
    pub raw_price: String,
    /// Derived from `raw_price`; `0.0` when the text had no numeric pattern.
    pub price: f64,
    pub description: Option<String>,
    pub rating: Option<String>,
}

impl Listing {
    pub fn new(
        store: impl Into<String>,
        name: impl Into<String>,
        raw_price: impl Into<String>,
    ) -> Self {
        let raw_price = raw_price.into();
        let price = parse_price(&raw_price);

        Self {
            store: store.into(),
            name: name.into(),
            raw_price,
            price,
            description: None,
            rating: None,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_rating(mut self, rating: Option<String>) -> Self {
        self.rating = rating;
        self
    }

    pub fn has_known_price(&self) -> bool {
        self.price > 0.0
    }

    /// Display form of the price; zero-priced listings read as unknown even
    /// though they still count toward subtotals.
    pub fn price_label(&self) -> String {
        if self.has_known_price() {
            format!("${:.2}", self.price)
        } else {
            String::from("price unknown")
        }
    }
}

/// Extraction output before the store id and parsed price are attached.
/// Any field may be missing from the markup; rows without a name are dropped.
#[derive(Debug, Clone, Default)]
pub struct RawListing {
    pub name: Option<String>,
    pub price_text: Option<String>,
    pub description: Option<String>,
    pub rating: Option<String>,
}

/// All listings found for one search term, grouped per store in fetcher
/// registration order. Built fresh for every term and handed to the
/// presentation layer; stores that returned nothing are absent.
#[derive(Debug, Default)]
pub struct CandidateSet {
    groups: Vec<(String, Vec<Listing>)>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty groups are dropped so presentation never prompts for a store
    /// with nothing to pick.
    pub fn push_group(&mut self, store: impl Into<String>, listings: Vec<Listing>) {
        if !listings.is_empty() {
            self.groups.push((store.into(), listings));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &[Listing])> {
        self.groups
            .iter()
            .map(|(store, listings)| (store.as_str(), listings.as_slice()))
    }

    pub fn get(&self, store: &str) -> Option<&[Listing]> {
        self.groups
            .iter()
            .find(|(candidate, _)| candidate == store)
            .map(|(_, listings)| listings.as_slice())
    }
}

/// Per-store decision for one candidate set.
#[derive(Debug, Clone, PartialEq)]
pub enum Choice {
    Chosen(Listing),
    Skipped,
}

/// The external actor's answer to one candidate set: one decision per store,
/// committed atomically when the selection gate resolves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    decisions: Vec<(String, Choice)>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn choose(&mut self, store: impl Into<String>, listing: Listing) {
        self.decisions.push((store.into(), Choice::Chosen(listing)));
    }

    pub fn skip(&mut self, store: impl Into<String>) {
        self.decisions.push((store.into(), Choice::Skipped));
    }

    pub fn decisions(&self) -> impl Iterator<Item = (&str, &Choice)> {
        self.decisions
            .iter()
            .map(|(store, choice)| (store.as_str(), choice))
    }

    pub fn into_decisions(self) -> Vec<(String, Choice)> {
        self.decisions
    }
}
