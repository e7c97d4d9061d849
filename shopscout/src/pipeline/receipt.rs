use super::cart::Cart;

#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine {
    pub store: String,
    pub items: usize,
    pub subtotal: f64,
}

/// Final per-store totals and the cheapest store among those with at least
/// one accepted listing. Pure over the cart: summarizing the same cart twice
/// gives the same receipt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub cheapest: Option<String>,
}

impl Receipt {
    pub fn summarize(cart: &Cart) -> Self {
        let lines: Vec<ReceiptLine> = cart
            .lanes()
            .iter()
            .map(|lane| ReceiptLine {
                store: lane.store().to_string(),
                items: lane.items().len(),
                subtotal: lane.items().iter().map(|listing| listing.price).sum(),
            })
            .collect();

        // strict `<` keeps the earliest line on ties
        let mut cheapest: Option<&ReceiptLine> = None;
        for line in lines.iter().filter(|line| line.items > 0) {
            match cheapest {
                Some(best) if line.subtotal >= best.subtotal => {}
                _ => cheapest = Some(line),
            }
        }
        let cheapest = cheapest.map(|line| line.store.clone());

        Self { lines, cheapest }
    }
}
