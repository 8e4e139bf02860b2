//! Free-text lot size parsing.
//!
//! Listings describe land in many shapes: "2.5 acres", "1.2 - 1.5 acres",
//! "±3 AC", "43,560 sq ft". Ranges resolve to their lower bound.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::SiteContext;

pub const SQFT_PER_ACRE: f64 = 43_560.0;

/// Bare numbers above this are read as square feet
const BARE_NUMBER_ACRE_LIMIT: f64 = 500.0;

const NUMBER: &str = r"(\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?|\.\d+)";

static ACRES_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i){NUMBER}(?:\s*(?:-|–|to)\s*{NUMBER})?\s*-?\s*(?:acres?|ac\b|ac\.)"
    ))
    .expect("Invalid acres regex")
});

static SQFT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i){NUMBER}(?:\s*(?:-|–|to)\s*{NUMBER})?\s*(?:sq\.?\s*f(?:ee)?t\.?|square\s+f(?:ee|oo)t|sf\b|ft2|ft²)"
    ))
    .expect("Invalid square feet regex")
});

static BARE_NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^\s*[±~]?\s*{NUMBER}\s*$")).expect("Invalid number regex")
});

fn parse_number(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Convert a free-text lot size to acres.
///
/// Returns `None` for anything that cannot be read as a positive area.
pub fn parse_lot_size(text: &str) -> Option<f64> {
    let acres = if let Some(caps) = ACRES_PATTERN.captures(text) {
        parse_number(&caps[1])
    } else if let Some(caps) = SQFT_PATTERN.captures(text) {
        parse_number(&caps[1]).map(|sqft| sqft / SQFT_PER_ACRE)
    } else if let Some(caps) = BARE_NUMBER_PATTERN.captures(text) {
        parse_number(&caps[1]).map(|value| {
            if value > BARE_NUMBER_ACRE_LIMIT {
                value / SQFT_PER_ACRE
            } else {
                value
            }
        })
    } else {
        None
    };

    acres.filter(|value| *value > 0.0)
}

/// Lot size for scoring: the numeric field, else the parsed text, else unknown
pub fn resolve_lot_size(site: &SiteContext) -> Option<f64> {
    site.lot_size_acres
        .filter(|acres| acres.is_finite() && *acres >= 0.0)
        .or_else(|| site.lot_size_text.as_deref().and_then(parse_lot_size))
}
