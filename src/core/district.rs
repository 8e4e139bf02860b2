//! District classification.
//!
//! A fixed-priority decision list; the first matching archetype wins:
//! college campus, historic downtown, highway corridor, suburban retail,
//! and finally neighborhood as the default.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

use crate::core::lot_size::resolve_lot_size;
use crate::core::names::{contains_any, normalize_name};
use crate::models::{DistrictProfile, DistrictType, NearbyBusiness, SiteContext};

const CAMPUS_KEYWORDS: &[&str] = &["university", "college"];

const DOWNTOWN_KEYWORDS: &[&str] = &[
    "downtown",
    "main st",
    "main street",
    "historic",
    "town square",
    "courthouse",
    "old town",
    "city center",
    "market square",
];

/// Name/type fragments typical of a walkable boutique district
const BOUTIQUE_INDICATORS: &[&str] = &[
    "boutique",
    "gallery",
    "antique",
    "bakery",
    "cafe",
    "bookstore",
    "brewery",
    "brewing",
    "bistro",
    "florist",
    "jeweler",
    "tavern",
    "winery",
    "wine bar",
    "tea house",
];

static HIGHWAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:highway|hwy|interstate|expressway|freeway|turnpike|bypass|frontage\s+r(?:oa)?d)\b|\b(?:i|us|sr|route|rte)[\s-]?\d+\b",
    )
    .expect("Invalid highway regex")
});

const DOWNTOWN_KEYWORD_POINTS: u8 = 3;
const BOUTIQUE_POINTS: u8 = 2;
const SMALL_LOT_ACRES: f64 = 0.5;
const DENSE_BUSINESS_COUNT: usize = 15;
const DOWNTOWN_TRIGGER: u8 = 3;
const HIGHWAY_VPD: u32 = 25_000;
const SUBURBAN_LOT_ACRES: f64 = 1.0;

const CAMPUS_APPROPRIATE: &[&str] = &[
    "coffee_shop", "fast_casual", "fast_food", "pizza", "ice_cream", "bar_brewery",
    "convenience_store", "fitness", "salon", "laundromat", "pharmacy", "urgent_care", "bank",
    "specialty_retail",
];
const CAMPUS_INAPPROPRIATE: &[&str] = &["truck_stop", "big_box", "car_wash", "auto_parts"];

const DOWNTOWN_APPROPRIATE: &[&str] = &[
    "coffee_shop", "fast_casual", "casual_dining", "bar_brewery", "specialty_retail",
    "ice_cream", "salon", "bank", "fitness", "pizza", "hotel",
];
const DOWNTOWN_INAPPROPRIATE: &[&str] = &[
    "truck_stop", "big_box", "fuel_station", "car_wash", "auto_parts", "auto_service",
    "dollar_store", "fast_food",
];

const HIGHWAY_APPROPRIATE: &[&str] = &[
    "fuel_station", "convenience_store", "truck_stop", "fast_food", "hotel", "casual_dining",
    "coffee_shop", "car_wash", "auto_service", "auto_parts",
];
const HIGHWAY_INAPPROPRIATE: &[&str] = &[
    "specialty_retail", "salon", "laundromat", "daycare", "bar_brewery", "thrift_store",
];

const SUBURBAN_APPROPRIATE: &[&str] = &[
    "coffee_shop", "fast_food", "fast_casual", "casual_dining", "pizza", "ice_cream",
    "bar_brewery", "convenience_store", "fuel_station", "grocery", "dollar_store", "big_box",
    "premium_retail", "specialty_retail", "pharmacy", "auto_parts", "auto_service", "car_wash",
    "fitness", "bank", "urgent_care", "hotel", "salon", "laundromat", "pet_store",
    "thrift_store", "daycare",
];
const SUBURBAN_INAPPROPRIATE: &[&str] = &["truck_stop"];

const NEIGHBORHOOD_APPROPRIATE: &[&str] = &[
    "coffee_shop", "pizza", "convenience_store", "pharmacy", "salon", "laundromat", "daycare",
    "dollar_store", "ice_cream", "urgent_care", "bank", "fitness", "auto_service", "fast_casual",
];
const NEIGHBORHOOD_INAPPROPRIATE: &[&str] = &["truck_stop", "big_box", "hotel", "premium_retail"];

fn to_set(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

fn profile(
    district_type: DistrictType,
    description: &str,
    appropriate: &[&str],
    inappropriate: &[&str],
) -> DistrictProfile {
    DistrictProfile {
        district_type,
        description: description.to_string(),
        appropriate_categories: to_set(appropriate),
        inappropriate_categories: to_set(inappropriate),
    }
}

/// Normalized name and type of a nearby business, for keyword checks
fn business_text(business: &NearbyBusiness) -> String {
    normalize_name(&format!("{} {}", business.name, business.business_type))
}

/// Weighted evidence that a site sits in a historic downtown
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DowntownSignals {
    pub keyword: bool,
    pub boutique_matches: usize,
    pub small_lot: bool,
    pub dense: bool,
}

impl DowntownSignals {
    pub fn collect(site: &SiteContext, address: &str, lot_size_acres: Option<f64>) -> Self {
        let boutique_matches = site
            .nearby_businesses
            .iter()
            .filter(|business| contains_any(&business_text(business), BOUTIQUE_INDICATORS))
            .count();

        Self {
            keyword: contains_any(address, DOWNTOWN_KEYWORDS),
            boutique_matches,
            small_lot: lot_size_acres.is_some_and(|acres| acres < SMALL_LOT_ACRES),
            dense: site.nearby_businesses.len() > DENSE_BUSINESS_COUNT,
        }
    }

    pub fn score(&self) -> u8 {
        let mut score = 0;
        if self.keyword {
            score += DOWNTOWN_KEYWORD_POINTS;
        }
        if self.boutique_matches > 0 {
            score += BOUTIQUE_POINTS;
        }
        if self.small_lot {
            score += 1;
        }
        if self.dense {
            score += 1;
        }
        score
    }

    pub fn is_downtown(&self) -> bool {
        self.score() >= DOWNTOWN_TRIGGER || (self.keyword && self.small_lot)
    }
}

fn is_college_campus(site: &SiteContext, address: &str) -> bool {
    let college_town = site
        .demographics
        .as_ref()
        .is_some_and(|d| d.is_college_town);
    if !college_town {
        return false;
    }

    contains_any(address, CAMPUS_KEYWORDS)
        || site
            .nearby_businesses
            .iter()
            .any(|business| contains_any(&business_text(business), CAMPUS_KEYWORDS))
}

pub fn is_highway_address(address: &str) -> bool {
    HIGHWAY_PATTERN.is_match(address)
}

/// Classify the site into a district archetype
pub fn classify_district(site: &SiteContext) -> DistrictProfile {
    let address = site.address.to_lowercase();
    let lot_size_acres = resolve_lot_size(site);

    let district = if is_college_campus(site, &address) {
        profile(
            DistrictType::CollegeCampus,
            "College campus area with student-driven foot traffic",
            CAMPUS_APPROPRIATE,
            CAMPUS_INAPPROPRIATE,
        )
    } else if DowntownSignals::collect(site, &address, lot_size_acres).is_downtown() {
        profile(
            DistrictType::HistoricDowntown,
            "Historic downtown with walkable, small-format storefronts",
            DOWNTOWN_APPROPRIATE,
            DOWNTOWN_INAPPROPRIATE,
        )
    } else if is_highway_address(&address) || site.vpd().is_some_and(|vpd| vpd >= HIGHWAY_VPD) {
        profile(
            DistrictType::HighwayCorridor,
            "Highway corridor serving pass-through and commuter traffic",
            HIGHWAY_APPROPRIATE,
            HIGHWAY_INAPPROPRIATE,
        )
    } else if lot_size_acres.is_some_and(|acres| acres >= SUBURBAN_LOT_ACRES) {
        profile(
            DistrictType::SuburbanRetail,
            "Suburban retail parcel suited to pad sites and strip centers",
            SUBURBAN_APPROPRIATE,
            SUBURBAN_INAPPROPRIATE,
        )
    } else {
        profile(
            DistrictType::Neighborhood,
            "Neighborhood site suited to local services",
            NEIGHBORHOOD_APPROPRIATE,
            NEIGHBORHOOD_INAPPROPRIATE,
        )
    };

    tracing::debug!(
        "Classified {:?} as {:?}",
        site.address,
        district.district_type
    );

    district
}
