use crate::types::{Choice, Listing, Selection};

/// One store's accepted listings, in acceptance order.
#[derive(Debug, Clone)]
pub struct CartLane {
    store: String,
    items: Vec<Listing>,
}

impl CartLane {
    pub fn store(&self) -> &str {
        &self.store
    }

    pub fn items(&self) -> &[Listing] {
        &self.items
    }
}

/// Accepted listings per store, accumulated across every processed item.
/// Lanes keep fetcher registration order; entries within a lane keep
/// item-processing order. Append-only, and written only by the orchestrator
/// after a selection gate resolves.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lanes: Vec<CartLane>,
}

impl Cart {
    /// Pre-creates one lane per store so receipts list every registered
    /// store even when its cart stays empty.
    pub fn for_stores<I, S>(stores: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lanes: stores
                .into_iter()
                .map(|store| CartLane {
                    store: store.into(),
                    items: Vec::new(),
                })
                .collect(),
        }
    }

    /// Appends every non-skip choice to its store's lane.
    pub fn accept(&mut self, selection: Selection) {
        for (store, choice) in selection.into_decisions() {
            if let Choice::Chosen(listing) = choice {
                self.lane_mut(&store).items.push(listing);
            }
        }
    }

    pub fn lanes(&self) -> &[CartLane] {
        &self.lanes
    }

    pub fn lane(&self, store: &str) -> Option<&CartLane> {
        self.lanes.iter().find(|lane| lane.store == store)
    }

    fn lane_mut(&mut self, store: &str) -> &mut CartLane {
        let index = match self.lanes.iter().position(|lane| lane.store == store) {
            Some(index) => index,
            None => {
                self.lanes.push(CartLane {
                    store: store.to_string(),
                    items: Vec::new(),
                });
                self.lanes.len() - 1
            }
        };

        &mut self.lanes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(choices: &[(&str, Option<(&str, &str)>)]) -> Selection {
        let mut selection = Selection::new();
        for (store, choice) in choices {
            match choice {
                Some((name, price)) => {
                    selection.choose(*store, Listing::new(*store, *name, *price))
                }
                None => selection.skip(*store),
            }
        }
        selection
    }

    #[test]
    fn lane_lengths_match_non_skip_choices_across_items() {
        let mut cart = Cart::for_stores(["alpha-mart", "bridge-foods"]);

        cart.accept(selection(&[
            ("alpha-mart", Some(("Milk 1gal", "$3.49"))),
            ("bridge-foods", None),
        ]));
        cart.accept(selection(&[
            ("alpha-mart", Some(("Eggs dozen", "$2.79"))),
            ("bridge-foods", Some(("Bread loaf", "$1.99"))),
        ]));
        cart.accept(selection(&[
            ("alpha-mart", None),
            ("bridge-foods", None),
        ]));

        assert_eq!(cart.lane("alpha-mart").unwrap().items().len(), 2);
        assert_eq!(cart.lane("bridge-foods").unwrap().items().len(), 1);
    }

    #[test]
    fn entries_keep_item_processing_order() {
        let mut cart = Cart::for_stores(["alpha-mart"]);

        cart.accept(selection(&[("alpha-mart", Some(("Milk 1gal", "$3.49")))]));
        cart.accept(selection(&[("alpha-mart", Some(("Eggs dozen", "$2.79")))]));

        let names: Vec<&str> = cart
            .lane("alpha-mart")
            .unwrap()
            .items()
            .iter()
            .map(|listing| listing.name.as_str())
            .collect();
        assert_eq!(names, ["Milk 1gal", "Eggs dozen"]);
    }

    #[test]
    fn registered_stores_keep_their_lanes_when_empty() {
        let cart = Cart::for_stores(["alpha-mart", "bridge-foods"]);

        assert_eq!(cart.lanes().len(), 2);
        assert!(cart.lane("bridge-foods").unwrap().items().is_empty());
    }
}
