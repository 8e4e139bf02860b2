//! Category suitability ranking.
//!
//! Every catalog category that survives the district and income gates gets a
//! 1-10 score built from traffic, income fit, lot size, and how many of its
//! flagship brands already trade nearby.

use crate::catalog::CategoryCatalog;
use crate::core::filters::is_category_excluded;
use crate::core::names::is_present_nearby;
use crate::models::{
    CategoryRequirement, Demographics, DistrictProfile, IncomeTier, NearbyBusiness,
    SuitabilityResult,
};

const MIN_SCORE: i32 = 1;
const MAX_SCORE: i32 = 10;

/// Fraction of the minimum VPD below which the base score falls under 3
const NEAR_MIN_VPD_RATIO: f64 = 0.7;

const INCOME_MATCH_BONUS: i32 = 2;
const INCOME_MISMATCH_PENALTY: i32 = 3;
const IDEAL_LOT_BONUS: i32 = 1;
const MAX_LOT_PENALTY: f64 = 8.0;
const SATURATION_PENALTY: i32 = 3;

/// Base score from traffic alone, before rounding
///
/// Piecewise linear: 0-3 below 70% of the minimum, 3-5 up to the minimum,
/// 5-10 up to the ideal, and 10 at or above the ideal.
pub fn traffic_base_score(vpd: u32, min_vpd: u32, ideal_vpd: u32) -> f64 {
    let vpd = f64::from(vpd);
    let min = f64::from(min_vpd);
    let ideal = f64::from(ideal_vpd);
    let near_min = NEAR_MIN_VPD_RATIO * min;

    if vpd >= ideal {
        10.0
    } else if vpd >= min {
        5.0 + 5.0 * (vpd - min) / (ideal - min)
    } else if vpd >= near_min {
        3.0 + 2.0 * (vpd - near_min) / (min - near_min)
    } else {
        3.0 * vpd / near_min
    }
}

/// Points removed when the lot is under the category minimum
pub fn lot_shortfall_penalty(lot_size_acres: f64, lot_size_min: f64) -> i32 {
    if lot_size_min <= 0.0 || lot_size_acres >= lot_size_min {
        return 0;
    }
    let shortfall = 10.0 * (lot_size_min - lot_size_acres) / lot_size_min;
    shortfall.min(MAX_LOT_PENALTY).round() as i32
}

/// Score a single category; the caller has already applied exclusion gates
pub fn score_category(
    category: &CategoryRequirement,
    vpd: u32,
    nearby: &[NearbyBusiness],
    income_tier: Option<IncomeTier>,
    lot_size_acres: Option<f64>,
) -> SuitabilityResult {
    let mut reasons = Vec::new();
    let mut score = traffic_base_score(vpd, category.min_vpd, category.ideal_vpd).round() as i32;

    if vpd >= category.ideal_vpd {
        reasons.push(format!("Traffic of {} VPD meets the ideal of {}", vpd, category.ideal_vpd));
    } else if vpd >= category.min_vpd {
        reasons.push(format!("Traffic of {} VPD clears the minimum of {}", vpd, category.min_vpd));
    } else {
        reasons.push(format!("Traffic of {} VPD is below the minimum of {}", vpd, category.min_vpd));
    }

    if let Some(tier) = income_tier {
        if category.prefers(tier) {
            score = (score + INCOME_MATCH_BONUS).min(MAX_SCORE);
            reasons.push(format!("{} income area fits the concept", tier.as_str()));
        } else {
            score = (score - INCOME_MISMATCH_PENALTY).max(MIN_SCORE);
            reasons.push(format!("{} income area is a weak fit", tier.as_str()));
        }
    }

    let mut lot_size_shortfall = false;
    if let Some(lot) = lot_size_acres {
        if lot >= category.lot_size_ideal {
            score = (score + IDEAL_LOT_BONUS).min(MAX_SCORE);
            reasons.push(format!("{:.2} acre lot meets the ideal size", lot));
        } else if lot < category.lot_size_min {
            let penalty = lot_shortfall_penalty(lot, category.lot_size_min);
            score = (score - penalty).max(MIN_SCORE);
            lot_size_shortfall = true;
            reasons.push(format!(
                "{:.2} acre lot is short of the {:.2} acre minimum",
                lot, category.lot_size_min
            ));
        }
    }

    let (competing_brands, remaining_brands): (Vec<String>, Vec<String>) = category
        .example_brands
        .iter()
        .cloned()
        .partition(|brand| is_present_nearby(brand, nearby));

    let market_saturated = !category.example_brands.is_empty() && remaining_brands.is_empty();
    if market_saturated {
        score = (score - SATURATION_PENALTY).max(MIN_SCORE);
        reasons.push("Every flagship brand already operates nearby".to_string());
    } else if !competing_brands.is_empty() {
        reasons.push(format!("{} competing brand(s) nearby", competing_brands.len()));
    }

    SuitabilityResult {
        category_id: category.id.clone(),
        category_name: category.name.clone(),
        score: score.clamp(MIN_SCORE, MAX_SCORE) as u8,
        reasoning: reasons.join("; "),
        remaining_brands,
        competing_brands,
        lot_size_shortfall,
        market_saturated,
    }
}

/// Rank every eligible category for the site, best first
///
/// Ties keep catalog order.
pub fn rank_categories(
    vpd: u32,
    nearby: &[NearbyBusiness],
    demographics: Option<&Demographics>,
    lot_size_acres: Option<f64>,
    district: Option<&DistrictProfile>,
    catalog: &CategoryCatalog,
) -> Vec<SuitabilityResult> {
    let income_tier = demographics.map(|d| d.income_tier);

    let mut results: Vec<SuitabilityResult> = catalog
        .iter()
        .filter(|category| !is_category_excluded(category, district, income_tier))
        .map(|category| score_category(category, vpd, nearby, income_tier, lot_size_acres))
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(
        "Ranked {} of {} categories",
        results.len(),
        catalog.len()
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DistrictType;
    use std::collections::BTreeSet;

    fn demographics(tier: IncomeTier) -> Demographics {
        Demographics {
            median_household_income: None,
            income_tier: tier,
            population: None,
            is_college_town: false,
            college_enrollment: None,
            unemployment_rate: None,
            preferred_businesses: Vec::new(),
        }
    }

    fn business(name: &str) -> NearbyBusiness {
        NearbyBusiness {
            name: name.to_string(),
            business_type: "retail".to_string(),
            distance_miles: None,
        }
    }

    fn find<'a>(results: &'a [SuitabilityResult], id: &str) -> &'a SuitabilityResult {
        results.iter().find(|r| r.category_id == id).unwrap()
    }

    #[test]
    fn test_traffic_base_score_curve() {
        assert_eq!(traffic_base_score(20_000, 10_000, 20_000), 10.0);
        assert_eq!(traffic_base_score(15_000, 10_000, 20_000), 7.5);
        assert_eq!(traffic_base_score(10_000, 10_000, 20_000), 5.0);
        assert!((traffic_base_score(8_500, 10_000, 20_000) - 4.0).abs() < 1e-9);
        assert_eq!(traffic_base_score(0, 10_000, 20_000), 0.0);
    }

    #[test]
    fn test_lot_shortfall_penalty_capped() {
        assert_eq!(lot_shortfall_penalty(0.3, 8.0), 8);
        assert_eq!(lot_shortfall_penalty(0.75, 1.0), 3);
        assert_eq!(lot_shortfall_penalty(2.0, 1.0), 0);
    }

    #[test]
    fn test_premium_retail_high_income_scores_ten() {
        let catalog = CategoryCatalog::builtin();
        let premium = catalog.get("premium_retail").unwrap();

        let result = score_category(premium, 32_000, &[], Some(IncomeTier::High), Some(10.0));
        assert_eq!(result.score, 10);
        assert!(!result.lot_size_shortfall);
    }

    #[test]
    fn test_big_box_tiny_lot_floors_at_one() {
        let catalog = CategoryCatalog::builtin();
        let big_box = catalog.get("big_box").unwrap();

        // 10 + 2 income, capped at 10, then 8 off for the lot
        let result = score_category(big_box, 40_000, &[], Some(IncomeTier::Middle), Some(0.3));
        assert_eq!(result.score, 2);
        assert!(result.lot_size_shortfall);

        let result = score_category(big_box, 20_000, &[], Some(IncomeTier::High), Some(0.3));
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_saturated_market_penalized() {
        let catalog = CategoryCatalog::builtin();
        let fitness = catalog.get("fitness").unwrap();
        let nearby: Vec<_> = fitness.example_brands.iter().map(|b| business(b)).collect();

        let result = score_category(fitness, 20_000, &nearby, None, None);
        assert!(result.market_saturated);
        assert_eq!(result.score, 7);
        assert!(result.remaining_brands.is_empty());
    }

    #[test]
    fn test_partial_competition_reports_remaining() {
        let catalog = CategoryCatalog::builtin();
        let coffee = catalog.get("coffee_shop").unwrap();
        let nearby = vec![business("STARBUCKS #1234")];

        let result = score_category(coffee, 20_000, &nearby, None, None);
        assert_eq!(result.competing_brands, vec!["Starbucks".to_string()]);
        assert_eq!(result.remaining_brands.len(), coffee.example_brands.len() - 1);
        assert!(!result.market_saturated);
    }

    #[test]
    fn test_scores_stay_in_range_for_extreme_inputs() {
        let catalog = CategoryCatalog::builtin();
        let low = demographics(IncomeTier::Low);
        let results = rank_categories(0, &[], Some(&low), Some(0.01), None, &catalog);

        assert!(!results.is_empty());
        assert!(results.iter().all(|r| (1..=10).contains(&r.score)));
    }

    #[test]
    fn test_ranking_sorted_and_gated() {
        let catalog = CategoryCatalog::builtin();
        let district = DistrictProfile {
            district_type: DistrictType::Neighborhood,
            description: "test".to_string(),
            appropriate_categories: BTreeSet::new(),
            inappropriate_categories: ["truck_stop".to_string()].into_iter().collect(),
        };

        let results = rank_categories(
            22_000,
            &[],
            Some(&demographics(IncomeTier::High)),
            Some(2.0),
            Some(&district),
            &catalog,
        );

        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert!(results.iter().all(|r| r.category_id != "truck_stop"));
        assert!(results.iter().all(|r| r.category_id != "dollar_store"));
        assert_eq!(find(&results, "premium_retail").score, 10);
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let catalog = CategoryCatalog::builtin();
        let demo = demographics(IncomeTier::Middle);
        let first = rank_categories(12_000, &[], Some(&demo), Some(1.0), None, &catalog);
        let second = rank_categories(12_000, &[], Some(&demo), Some(1.0), None, &catalog);
        assert_eq!(first, second);
    }
}
