use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use shopscout::{CandidateSet, Selection};

use crate::error::AppError;

/// Scripted answers for every prompt, keyed by search term then store:
/// `{"milk": {"walmart": 0, "kroger": "skip"}}` picks walmart's first
/// candidate and skips everything else. Stores and terms the plan does not
/// mention are skipped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionPlan(HashMap<String, HashMap<String, PlanChoice>>);

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PlanChoice {
    /// Zero-based index into that store's candidate group.
    Pick(usize),
    Skip(String),
}

impl SelectionPlan {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn resolve(&self, term: &str, candidates: &CandidateSet) -> Selection {
        let answers = self.0.get(term);
        let mut selection = Selection::new();

        for (store, listings) in candidates.groups() {
            match answers.and_then(|answers| answers.get(store)) {
                Some(PlanChoice::Pick(index)) => match listings.get(*index) {
                    Some(listing) => selection.choose(store, listing.clone()),
                    None => {
                        log::warn!(
                            "plan picks candidate {} at {}, but only {} came back; skipping",
                            index,
                            store,
                            listings.len()
                        );
                        selection.skip(store);
                    }
                },
                Some(PlanChoice::Skip(_)) | None => selection.skip(store),
            }
        }

        selection
    }
}

#[cfg(test)]
mod tests {
    use shopscout::{Choice, Listing};

    use super::*;

    fn candidates() -> CandidateSet {
        let mut candidates = CandidateSet::new();
        candidates.push_group(
            "walmart",
            vec![
                Listing::new("walmart", "Milk 1gal", "$3.49"),
                Listing::new("walmart", "Milk 2%", "$3.29"),
            ],
        );
        candidates.push_group("kroger", vec![Listing::new("kroger", "Milk 1gal", "329")]);
        candidates
    }

    fn decisions(selection: &Selection) -> HashMap<String, Choice> {
        selection
            .decisions()
            .map(|(store, choice)| (store.to_string(), choice.clone()))
            .collect()
    }

    #[test]
    fn picks_and_skips_follow_the_plan() {
        let plan: SelectionPlan =
            serde_json::from_str(r#"{"milk": {"walmart": 1, "kroger": "skip"}}"#).unwrap();

        let selection = plan.resolve("milk", &candidates());
        let decisions = decisions(&selection);

        match decisions.get("walmart").unwrap() {
            Choice::Chosen(listing) => assert_eq!(listing.name, "Milk 2%"),
            Choice::Skipped => panic!("walmart should have a pick"),
        }
        assert_eq!(decisions.get("kroger"), Some(&Choice::Skipped));
    }

    #[test]
    fn unknown_terms_skip_every_store() {
        let plan: SelectionPlan = serde_json::from_str(r#"{"milk": {"walmart": 0}}"#).unwrap();

        let selection = plan.resolve("eggs", &candidates());
        assert!(selection
            .decisions()
            .all(|(_, choice)| *choice == Choice::Skipped));
    }

    #[test]
    fn out_of_range_picks_degrade_to_skip() {
        let plan: SelectionPlan = serde_json::from_str(r#"{"milk": {"kroger": 7}}"#).unwrap();

        let selection = plan.resolve("milk", &candidates());
        let decisions = decisions(&selection);
        assert_eq!(decisions.get("kroger"), Some(&Choice::Skipped));
    }
}
