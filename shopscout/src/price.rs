use once_cell::sync::Lazy;
use regex::Regex;

static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\.\d{2}").unwrap());
static WHOLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Pulls the first numeric price out of raw storefront text.
///
/// A dollars-and-cents pattern wins over a bare integer, so `"$3.49"` parses
/// to `3.49` and `"329"` to `329.0`. Text with no numeric pattern at all
/// parses to `0.0`; callers present those listings as "price unknown" but the
/// zero still participates in cart subtotals.
pub fn parse_price(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }

    if let Some(found) = DECIMAL.find(raw) {
        return found.as_str().parse().unwrap_or(0.0);
    }

    if let Some(found) = WHOLE.find(raw) {
        return found.as_str().parse().unwrap_or(0.0);
    }

    0.0
}
