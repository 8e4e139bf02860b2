//! Brand recommendations for a site.
//!
//! Candidates come from three places: curated archetypes for historic
//! downtowns, the example brands of every category the site can support, and
//! the trade area's own preferred-business list. Each candidate carries an
//! internal priority; the best ten distinct names are returned.

use std::collections::HashMap;

use crate::catalog::CategoryCatalog;
use crate::core::filters::is_category_excluded;
use crate::core::names::{is_present_nearby, normalize_name};
use crate::models::{
    CategoryRequirement, Demographics, DistrictProfile, DistrictType, IncomeTier, NearbyBusiness,
};

pub const MAX_RECOMMENDATIONS: usize = 10;

const MAX_BRANDS_PER_CATEGORY: usize = 3;
const CURATED_PRIORITY: i32 = 12;

const PRIORITY_IDEAL_TRAFFIC: i32 = 10;
const PRIORITY_MIN_TRAFFIC: i32 = 7;
const PRIORITY_NEAR_MIN_TRAFFIC: i32 = 4;
const INCOME_MATCH_BONUS: i32 = 3;
const INCOME_MISMATCH_PENALTY: i32 = 2;
const IDEAL_LOT_BONUS: i32 = 1;

/// Categories whose traffic is below this share of the minimum are not recommended
const NEAR_MIN_VPD_RATIO: f64 = 0.7;

/// Independent concepts that suit a walkable historic core
const DOWNTOWN_ARCHETYPES: &[&str] = &[
    "Local Coffee Roaster",
    "Farm-to-Table Restaurant",
    "Craft Brewery Taproom",
    "Wine Bar",
    "Independent Bookstore",
    "Boutique Apparel Shop",
    "Art Gallery",
    "Artisan Bakery",
    "Yoga Studio",
    "Barbershop",
    "Live Music Venue",
    "Cocktail Lounge",
];

/// Brand fragments implying a big-box footprint
const BIG_BOX_HINTS: &[&str] = &[
    "walmart", "target", "costco", "sams club", "home depot", "lowes", "meijer", "menards",
];

/// Brand fragments implying a premium retail pad
const PREMIUM_HINTS: &[&str] = &[
    "whole foods", "trader joe", "lululemon", "apple store", "sephora", "williams sonoma",
    "nordstrom", "anthropologie",
];

/// Brand fragments implying a fitness club
const FITNESS_HINTS: &[&str] = &[
    "fitness", "gym", "orangetheory", "crossfit", "lifetime", "ymca",
];

/// Fallback minimums when the catalog lacks the category
const BIG_BOX_LOT_FALLBACK: f64 = 8.0;
const PREMIUM_LOT_FALLBACK: f64 = 1.5;
const FITNESS_LOT_FALLBACK: f64 = 1.0;

/// Site facts the recommendation generator reads
#[derive(Debug, Clone, Copy)]
pub struct RecommendationInput<'a> {
    pub district: Option<&'a DistrictProfile>,
    pub vpd: u32,
    pub nearby: &'a [NearbyBusiness],
    pub demographics: Option<&'a Demographics>,
    pub lot_size_acres: Option<f64>,
}

/// Ordered candidate list keyed by normalized name
#[derive(Debug, Default)]
struct Candidates {
    entries: Vec<(String, i32)>,
    index: HashMap<String, usize>,
}

impl Candidates {
    /// Insert a candidate, keeping the higher priority on a name collision
    fn offer(&mut self, name: &str, priority: i32) {
        let key = normalize_name(name);
        if key.is_empty() {
            return;
        }

        match self.index.get(&key) {
            Some(&pos) => {
                if priority > self.entries[pos].1 {
                    self.entries[pos] = (name.to_string(), priority);
                }
            }
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((name.to_string(), priority));
            }
        }
    }

    fn into_ranked(mut self, limit: usize) -> Vec<String> {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries.into_iter().take(limit).map(|(name, _)| name).collect()
    }
}

/// Priority for a category's brands, or `None` if the site cannot support it
fn category_priority(
    category: &CategoryRequirement,
    vpd: u32,
    income_tier: Option<IncomeTier>,
    lot_size_acres: Option<f64>,
) -> Option<i32> {
    if f64::from(vpd) < NEAR_MIN_VPD_RATIO * f64::from(category.min_vpd) {
        return None;
    }
    if lot_size_acres.is_some_and(|lot| lot < category.lot_size_min) {
        return None;
    }

    let mut priority = if vpd >= category.ideal_vpd {
        PRIORITY_IDEAL_TRAFFIC
    } else if vpd >= category.min_vpd {
        PRIORITY_MIN_TRAFFIC
    } else {
        PRIORITY_NEAR_MIN_TRAFFIC
    };

    if let Some(tier) = income_tier {
        if category.prefers(tier) {
            priority += INCOME_MATCH_BONUS;
        } else {
            priority -= INCOME_MISMATCH_PENALTY;
        }
    }

    if lot_size_acres.is_some_and(|lot| lot >= category.lot_size_ideal) {
        priority += IDEAL_LOT_BONUS;
    }

    Some(priority)
}

/// Minimum lot implied by a brand name, if it looks like a large-format concept
fn implied_lot_minimum(name: &str, catalog: &CategoryCatalog) -> Option<f64> {
    let normalized = normalize_name(name);
    let min_for = |id: &str, fallback: f64| {
        catalog.get(id).map(|c| c.lot_size_min).unwrap_or(fallback)
    };

    if BIG_BOX_HINTS.iter().any(|hint| normalized.contains(hint)) {
        Some(min_for("big_box", BIG_BOX_LOT_FALLBACK))
    } else if PREMIUM_HINTS.iter().any(|hint| normalized.contains(hint)) {
        Some(min_for("premium_retail", PREMIUM_LOT_FALLBACK))
    } else if FITNESS_HINTS.iter().any(|hint| normalized.contains(hint)) {
        Some(min_for("fitness", FITNESS_LOT_FALLBACK))
    } else {
        None
    }
}

/// Generate up to ten brand recommendations, best first
pub fn generate_recommendations(
    input: &RecommendationInput<'_>,
    catalog: &CategoryCatalog,
) -> Vec<String> {
    let mut candidates = Candidates::default();
    let income_tier = input.demographics.map(|d| d.income_tier);

    if input
        .district
        .is_some_and(|d| d.district_type == DistrictType::HistoricDowntown)
    {
        DOWNTOWN_ARCHETYPES
            .iter()
            .filter(|name| !is_present_nearby(name, input.nearby))
            .take(MAX_RECOMMENDATIONS)
            .for_each(|name| candidates.offer(name, CURATED_PRIORITY));
    }

    for category in catalog.iter() {
        if is_category_excluded(category, input.district, income_tier) {
            continue;
        }
        let Some(priority) = category_priority(category, input.vpd, income_tier, input.lot_size_acres)
        else {
            continue;
        };

        category
            .example_brands
            .iter()
            .filter(|brand| !is_present_nearby(brand, input.nearby))
            .take(MAX_BRANDS_PER_CATEGORY)
            .for_each(|brand| candidates.offer(brand, priority));
    }

    if let Some(demographics) = input.demographics {
        for name in &demographics.preferred_businesses {
            if is_present_nearby(name, input.nearby) {
                continue;
            }
            let too_small = match (implied_lot_minimum(name, catalog), input.lot_size_acres) {
                (Some(min), Some(lot)) => lot < min,
                _ => false,
            };
            if too_small {
                tracing::debug!("Skipping preferred business {} on a small lot", name);
                continue;
            }
            candidates.offer(name, CURATED_PRIORITY);
        }
    }

    let recommendations = candidates.into_ranked(MAX_RECOMMENDATIONS);
    tracing::debug!("Generated {} recommendations", recommendations.len());
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn district(district_type: DistrictType) -> DistrictProfile {
        DistrictProfile {
            district_type,
            description: "test".to_string(),
            appropriate_categories: BTreeSet::new(),
            inappropriate_categories: BTreeSet::new(),
        }
    }

    fn demographics(tier: IncomeTier, preferred: &[&str]) -> Demographics {
        Demographics {
            median_household_income: None,
            income_tier: tier,
            population: None,
            is_college_town: false,
            college_enrollment: None,
            unemployment_rate: None,
            preferred_businesses: preferred.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn business(name: &str) -> NearbyBusiness {
        NearbyBusiness {
            name: name.to_string(),
            business_type: "retail".to_string(),
            distance_miles: None,
        }
    }

    #[test]
    fn test_category_priority_rules() {
        let catalog = CategoryCatalog::builtin();
        let coffee = catalog.get("coffee_shop").unwrap();

        assert_eq!(category_priority(coffee, 20_000, Some(IncomeTier::High), Some(1.0)), Some(14));
        assert_eq!(category_priority(coffee, 12_000, Some(IncomeTier::Low), None), Some(5));
        assert_eq!(category_priority(coffee, 9_000, None, None), Some(4));
        assert_eq!(category_priority(coffee, 8_000, None, None), None);
        assert_eq!(category_priority(coffee, 20_000, None, Some(0.1)), None);
    }

    #[test]
    fn test_downtown_archetypes_lead() {
        let catalog = CategoryCatalog::builtin();
        let profile = district(DistrictType::HistoricDowntown);
        let nearby = vec![business("Wine Bar")];
        let input = RecommendationInput {
            district: Some(&profile),
            vpd: 8_000,
            nearby: &nearby,
            demographics: None,
            lot_size_acres: Some(0.3),
        };

        let recs = generate_recommendations(&input, &catalog);
        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
        assert_eq!(recs[0], "Local Coffee Roaster");
        assert!(!recs.iter().any(|r| r == "Wine Bar"));
    }

    #[test]
    fn test_preferred_businesses_filtered_by_lot() {
        let catalog = CategoryCatalog::builtin();
        let demo = demographics(IncomeTier::Middle, &["Costco", "Planet Fitness", "Local Deli"]);
        let input = RecommendationInput {
            district: None,
            vpd: 5_000,
            nearby: &[],
            demographics: Some(&demo),
            lot_size_acres: Some(1.2),
        };

        let recs = generate_recommendations(&input, &catalog);
        assert!(!recs.iter().any(|r| r == "Costco"));
        assert!(recs.iter().any(|r| r == "Planet Fitness"));
        assert!(recs.iter().any(|r| r == "Local Deli"));
    }

    #[test]
    fn test_nearby_brands_skipped_and_names_deduplicated() {
        let catalog = CategoryCatalog::builtin();
        let demo = demographics(IncomeTier::Middle, &["starbucks", "STARBUCKS!"]);
        let nearby = vec![business("McDonald's #44")];
        let input = RecommendationInput {
            district: None,
            vpd: 30_000,
            nearby: &nearby,
            demographics: Some(&demo),
            lot_size_acres: Some(2.0),
        };

        let recs = generate_recommendations(&input, &catalog);
        assert!(recs.len() <= MAX_RECOMMENDATIONS);
        assert!(!recs.iter().any(|r| r == "McDonald's"));

        let normalized: Vec<_> = recs.iter().map(|r| normalize_name(r)).collect();
        let unique: BTreeSet<_> = normalized.iter().collect();
        assert_eq!(unique.len(), normalized.len());
        assert!(normalized.iter().filter(|n| n.as_str() == "starbucks").count() <= 1);
    }

    #[test]
    fn test_no_traffic_and_no_demographics_yields_nothing() {
        let catalog = CategoryCatalog::builtin();
        let input = RecommendationInput {
            district: None,
            vpd: 0,
            nearby: &[],
            demographics: None,
            lot_size_acres: None,
        };

        assert!(generate_recommendations(&input, &catalog).is_empty());
    }

    #[test]
    fn test_implied_lot_minimum_uses_catalog() {
        let catalog = CategoryCatalog::builtin();
        assert_eq!(implied_lot_minimum("Walmart Supercenter", &catalog), Some(8.0));
        assert_eq!(implied_lot_minimum("Trader Joe's", &catalog), Some(1.5));
        assert_eq!(implied_lot_minimum("Corner Diner", &catalog), None);
    }
}
