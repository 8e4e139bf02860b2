//! Hard gates and per-factor credit used by the ranker and retailer matcher.
//!
//! Category gates only decide whether a concept is considered at all.
//! Retailer factors return a credit fraction in `[0, 1]`, or a
//! disqualification that removes the retailer before any score is computed.

use crate::catalog::{covers_state, is_value_oriented};
use crate::models::{
    CategoryRequirement, DistrictProfile, IncomeTier, MarketPositioning, RetailerRequirement,
};

pub const LOT_WEIGHT: f64 = 30.0;
pub const TRAFFIC_WEIGHT: f64 = 25.0;
pub const DEMOGRAPHICS_WEIGHT: f64 = 25.0;
pub const REGION_WEIGHT: f64 = 20.0;

/// Check if a category is ruled out for the site before scoring
///
/// A category is excluded when the district marks it inappropriate, or when it
/// is value-oriented and the trade area is upper-middle or high income.
#[inline]
pub fn is_category_excluded(
    category: &CategoryRequirement,
    district: Option<&DistrictProfile>,
    income_tier: Option<IncomeTier>,
) -> bool {
    if district.is_some_and(|d| d.excludes(&category.id)) {
        return true;
    }

    income_tier.is_some_and(|tier| tier.is_affluent()) && is_value_oriented(&category.id)
}

/// Outcome of evaluating one retailer factor
#[derive(Debug, Clone, PartialEq)]
pub enum FactorOutcome {
    /// Fraction of the factor's weight earned, whether it earned full credit, and a note
    Credit { fraction: f64, full: bool, note: String },
    Disqualified(String),
}

impl FactorOutcome {
    fn credit(fraction: f64, note: String) -> Self {
        FactorOutcome::Credit {
            fraction,
            full: fraction >= 1.0,
            note,
        }
    }
}

/// Lot size against the retailer's footprint
///
/// Full credit inside `[min, 1.5 * max]`, 0.6 from `0.8 * min`, else 0.2.
/// Lots under half the minimum disqualify.
pub fn lot_size_factor(retailer: &RetailerRequirement, lot_size_acres: f64) -> FactorOutcome {
    let min = retailer.lot_size_min;
    let max = retailer.lot_size_max;

    if lot_size_acres < 0.5 * min {
        return FactorOutcome::Disqualified(format!(
            "lot {:.2} ac is under half the {:.2} ac minimum",
            lot_size_acres, min
        ));
    }

    if lot_size_acres >= min && lot_size_acres <= 1.5 * max {
        FactorOutcome::credit(1.0, format!("lot {:.2} ac fits {:.2}-{:.2} ac", lot_size_acres, min, max))
    } else if lot_size_acres >= 0.8 * min {
        FactorOutcome::credit(0.6, format!("lot {:.2} ac is workable for {:.2}-{:.2} ac", lot_size_acres, min, max))
    } else {
        FactorOutcome::credit(0.2, format!("lot {:.2} ac is tight for a {:.2} ac minimum", lot_size_acres, min))
    }
}

/// Daily traffic against the retailer's minimum and ideal counts
pub fn traffic_factor(retailer: &RetailerRequirement, vpd: u32) -> FactorOutcome {
    let vpd_f = vpd as f64;
    let fraction = if vpd >= retailer.ideal_vpd {
        1.0
    } else if vpd >= retailer.min_vpd {
        0.7
    } else if vpd_f >= 0.7 * retailer.min_vpd as f64 {
        0.3
    } else {
        0.0
    };

    FactorOutcome::credit(
        fraction,
        format!("{} VPD vs {} min / {} ideal", vpd, retailer.min_vpd, retailer.ideal_vpd),
    )
}

/// Site demographics relevant to retailer gating
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DemographicFacts {
    pub median_income: Option<u32>,
    pub income_tier: Option<IncomeTier>,
    pub population: Option<u32>,
}

impl DemographicFacts {
    pub fn is_empty(&self) -> bool {
        self.median_income.is_none() && self.income_tier.is_none() && self.population.is_none()
    }
}

/// Declared positioning, with chains in value-oriented categories treated as value
pub fn effective_positioning(retailer: &RetailerRequirement) -> MarketPositioning {
    match retailer.positioning {
        MarketPositioning::Standard if is_value_oriented(&retailer.category) => MarketPositioning::Value,
        positioning => positioning,
    }
}

fn income_tier_partial(retailer: &RetailerRequirement, tier: IncomeTier) -> Result<f64, String> {
    let positioning = effective_positioning(retailer);
    if positioning == MarketPositioning::Value && tier.is_affluent() {
        return Err(format!("value retailer in a {} income area", tier.as_str()));
    }
    if positioning == MarketPositioning::Premium && tier == IncomeTier::Low {
        return Err("premium retailer in a low income area".to_string());
    }

    if retailer.income_preferences.contains(&tier) {
        Ok(0.4)
    } else {
        Ok(0.1)
    }
}

/// Band distance from 0.3 (inside the bounds) down to 0.1 (at the hard limits)
fn median_income_partial(retailer: &RetailerRequirement, income: u32) -> Result<f64, String> {
    let income_f = income as f64;

    if let Some(max) = retailer.max_median_income {
        if income_f > 1.3 * max as f64 {
            return Err(format!("median income ${} exceeds 130% of ${} maximum", income, max));
        }
    }
    if let Some(min) = retailer.min_median_income {
        if income_f < 0.7 * min as f64 {
            return Err(format!("median income ${} is under 70% of ${} minimum", income, min));
        }
    }

    let above_max = retailer.max_median_income.is_some_and(|max| income > max);
    let below_min = retailer.min_median_income.is_some_and(|min| income < min);
    if !above_max && !below_min {
        return Ok(0.3);
    }

    let near_band = retailer
        .max_median_income
        .is_some_and(|max| above_max && income_f <= 1.15 * max as f64)
        || retailer
            .min_median_income
            .is_some_and(|min| below_min && income_f >= 0.85 * min as f64);

    Ok(if near_band { 0.2 } else { 0.1 })
}

fn population_partial(retailer: &RetailerRequirement, population: u32) -> f64 {
    match retailer.min_population {
        None => 0.3,
        Some(min) if population >= min => 0.3,
        Some(min) if population as f64 >= 0.7 * min as f64 => 0.15,
        Some(_) => 0.0,
    }
}

/// Sum of income tier, median income, and population partials
///
/// Returns `None` when no demographic input is known.
pub fn demographics_factor(
    retailer: &RetailerRequirement,
    facts: &DemographicFacts,
) -> Option<FactorOutcome> {
    if facts.is_empty() {
        return None;
    }

    let mut fraction = 0.0;
    let mut notes = Vec::new();

    if let Some(tier) = facts.income_tier {
        match income_tier_partial(retailer, tier) {
            Ok(partial) => {
                fraction += partial;
                notes.push(format!("{} income tier", tier.as_str()));
            }
            Err(reason) => return Some(FactorOutcome::Disqualified(reason)),
        }
    }

    if let Some(income) = facts.median_income {
        match median_income_partial(retailer, income) {
            Ok(partial) => {
                fraction += partial;
                notes.push(format!("median income ${}", income));
            }
            Err(reason) => return Some(FactorOutcome::Disqualified(reason)),
        }
    }

    if let Some(population) = facts.population {
        fraction += population_partial(retailer, population);
        notes.push(format!("population {}", population));
    }

    // 0.4 + 0.3 + 0.3 sums to 1.0 only up to float error
    let fraction = if fraction > 0.999 { 1.0 } else { fraction };

    Some(FactorOutcome::credit(fraction, notes.join(", ")))
}

/// Expansion plan coverage for the site's state
pub fn region_factor(retailer: &RetailerRequirement, state_code: &str) -> FactorOutcome {
    if covers_state(&retailer.expansion_regions, state_code) {
        FactorOutcome::credit(1.0, format!("expanding in {}", state_code.to_uppercase()))
    } else {
        FactorOutcome::credit(0.2, format!("{} is outside current expansion plans", state_code.to_uppercase()))
    }
}
