use std::collections::HashSet;

use crate::core::names::is_present_nearby;
use crate::models::{
    Demographics, FeasibilityExplanations, FeasibilityScore, FeasibilityWeights, NearbyBusiness,
    Rating, TrafficData,
};

/// Sub-score used when its data source is missing
const DEFAULT_SUBSCORE: u8 = 5;

/// National chains whose presence signals a proven trade area
const ANCHOR_BRANDS: &[&str] = &[
    "Walmart",
    "Target",
    "Costco",
    "Home Depot",
    "Lowe's",
    "Kroger",
    "Publix",
    "Hy-Vee",
    "Starbucks",
    "McDonald's",
    "Chick-fil-A",
    "CVS",
    "Walgreens",
    "Best Buy",
    "Whole Foods",
    "Trader Joe's",
];

/// Calculate the overall 0-10 feasibility score for a site
///
/// Scoring formula:
/// overall = round(
///     traffic * 0.35 +
///     demographics * 0.25 +
///     competition * 0.20 +
///     access * 0.20
/// )
///
/// Missing traffic or demographics fall back to a neutral 5.
pub fn calculate_feasibility(
    traffic: Option<&TrafficData>,
    demographics: Option<&Demographics>,
    nearby: &[NearbyBusiness],
    weights: &FeasibilityWeights,
) -> FeasibilityScore {
    let (traffic_score, traffic_note) = match traffic {
        Some(t) => {
            let score = calculate_traffic_score(t.vpd);
            (score, format!("{} vehicles per day on the adjacent road", t.vpd))
        }
        None => (DEFAULT_SUBSCORE, "N/A - no traffic data available".to_string()),
    };

    let (access_score, access_note) = match traffic {
        Some(t) => {
            let score = calculate_access_score(t, traffic_score);
            let road = t.road_name.as_deref().unwrap_or("adjacent road");
            (score, format!("{} classified as {:?}", road, t.road_type).to_lowercase())
        }
        None => (DEFAULT_SUBSCORE, "N/A - no road classification available".to_string()),
    };

    let (demographics_score, demographics_note) = match demographics {
        Some(d) => (calculate_demographics_score(d), describe_demographics(d)),
        None => (DEFAULT_SUBSCORE, "N/A - no demographic data available".to_string()),
    };

    let (competition_score, competition_note) = calculate_competition_score(nearby);

    let weighted = traffic_score as f64 * weights.traffic
        + demographics_score as f64 * weights.demographics
        + competition_score as f64 * weights.competition
        + access_score as f64 * weights.access;
    let overall = weighted.round().clamp(0.0, 10.0) as u8;

    FeasibilityScore {
        overall,
        traffic: traffic_score,
        demographics: demographics_score,
        competition: competition_score,
        access: access_score,
        rating: Rating::from_overall(overall),
        explanations: FeasibilityExplanations {
            traffic: traffic_note,
            demographics: demographics_note,
            competition: competition_note,
            access: access_note,
        },
    }
}

/// Step function over daily vehicle counts
#[inline]
pub fn calculate_traffic_score(vpd: u32) -> u8 {
    match vpd {
        30_000.. => 10,
        20_000..=29_999 => 9,
        15_000..=19_999 => 8,
        10_000..=14_999 => 6,
        5_000..=9_999 => 4,
        _ => 2,
    }
}

/// Road class bucket; major roads ride two points above the traffic score
#[inline]
fn calculate_access_score(traffic: &TrafficData, traffic_score: u8) -> u8 {
    use crate::models::RoadType;

    if traffic.road_type.is_major() {
        (traffic_score + 2).min(10)
    } else if traffic.road_type == RoadType::Secondary {
        6
    } else {
        4
    }
}

fn income_component(demographics: &Demographics) -> f64 {
    if demographics.is_college_town {
        return match demographics.enrollment_share() {
            Some(share) if share >= 25.0 => 8.0,
            Some(share) if share >= 15.0 => 7.5,
            _ => 7.0,
        };
    }

    match demographics.median_household_income {
        Some(income) if income >= 85_000 => 9.0,
        Some(income) if income >= 65_000 => 8.0,
        Some(income) if income >= 50_000 => 7.0,
        Some(income) if income >= 35_000 => 6.0,
        Some(_) => 4.0,
        None => DEFAULT_SUBSCORE as f64,
    }
}

fn employment_bonus(demographics: &Demographics) -> f64 {
    if demographics.is_college_town {
        return 0.5;
    }

    match demographics.unemployment_rate {
        Some(rate) if rate <= 4.0 => 1.0,
        Some(rate) if rate <= 6.0 => 0.5,
        _ => 0.0,
    }
}

fn population_bonus(demographics: &Demographics) -> f64 {
    match demographics.population {
        Some(population) if population >= 50_000 => 1.0,
        Some(population) if population >= 20_000 => 0.5,
        _ => 0.0,
    }
}

/// Income (or enrollment) curve plus employment and population bonuses
pub fn calculate_demographics_score(demographics: &Demographics) -> u8 {
    let raw = income_component(demographics)
        + employment_bonus(demographics)
        + population_bonus(demographics);

    raw.round().clamp(0.0, 10.0) as u8
}

fn describe_demographics(demographics: &Demographics) -> String {
    let income = demographics
        .median_household_income
        .map(|i| format!("median income ${}", i))
        .unwrap_or_else(|| "median income N/A".to_string());
    let population = demographics
        .population
        .map(|p| format!("population {}", p))
        .unwrap_or_else(|| "population N/A".to_string());

    if demographics.is_college_town {
        format!(
            "College town, {} tier, {}, {}",
            demographics.income_tier.as_str(),
            income,
            population
        )
    } else {
        format!("{} tier, {}, {}", demographics.income_tier.as_str(), income, population)
    }
}

/// True if any nationally-known anchor operates nearby
pub fn has_anchor_tenant(nearby: &[NearbyBusiness]) -> bool {
    ANCHOR_BRANDS.iter().any(|brand| is_present_nearby(brand, nearby))
}

/// Business-count band, diversity, and anchor bonus
pub fn calculate_competition_score(nearby: &[NearbyBusiness]) -> (u8, String) {
    let count = nearby.len();
    let distinct_types = nearby
        .iter()
        .map(|b| b.business_type.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect::<HashSet<_>>()
        .len();

    let base = match count {
        5..=20 if distinct_types >= 3 => 9,
        3..=30 => 7,
        31.. => 5,
        _ => 4,
    };

    let anchor = has_anchor_tenant(nearby);
    let score = if anchor { (base + 1).min(10) } else { base };

    let note = format!(
        "{} nearby businesses across {} types{}",
        count,
        distinct_types,
        if anchor { ", anchor tenant present" } else { "" }
    );

    (score, note)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IncomeTier, RoadType};

    fn traffic(vpd: u32, road_type: RoadType) -> TrafficData {
        TrafficData {
            vpd,
            road_type,
            road_name: Some("Lincoln Way".to_string()),
        }
    }

    fn demographics(income: u32, unemployment: f64, population: u32) -> Demographics {
        Demographics {
            median_household_income: Some(income),
            income_tier: IncomeTier::Middle,
            population: Some(population),
            is_college_town: false,
            college_enrollment: None,
            unemployment_rate: Some(unemployment),
            preferred_businesses: vec![],
        }
    }

    fn business(name: &str, business_type: &str) -> NearbyBusiness {
        NearbyBusiness {
            name: name.to_string(),
            business_type: business_type.to_string(),
            distance_miles: None,
        }
    }

    #[test]
    fn test_traffic_steps() {
        assert_eq!(calculate_traffic_score(45_000), 10);
        assert_eq!(calculate_traffic_score(30_000), 10);
        assert_eq!(calculate_traffic_score(29_999), 9);
        assert_eq!(calculate_traffic_score(15_000), 8);
        assert_eq!(calculate_traffic_score(12_000), 6);
        assert_eq!(calculate_traffic_score(5_000), 4);
        assert_eq!(calculate_traffic_score(0), 2);
    }

    #[test]
    fn test_access_buckets() {
        let t = traffic(22_000, RoadType::Primary);
        assert_eq!(calculate_access_score(&t, 9), 10);

        let t = traffic(12_000, RoadType::Motorway);
        assert_eq!(calculate_access_score(&t, 6), 8);

        let t = traffic(12_000, RoadType::Secondary);
        assert_eq!(calculate_access_score(&t, 6), 6);

        let t = traffic(12_000, RoadType::Residential);
        assert_eq!(calculate_access_score(&t, 6), 4);
    }

    #[test]
    fn test_demographics_standard_curve() {
        // 9 + 1 + 1 = 11, clamped to 10
        assert_eq!(calculate_demographics_score(&demographics(95_000, 3.0, 80_000)), 10);
        // 7 + 0.5 + 0.5 = 8
        assert_eq!(calculate_demographics_score(&demographics(55_000, 5.0, 30_000)), 8);
        // 4 + 0 + 0 = 4
        assert_eq!(calculate_demographics_score(&demographics(30_000, 9.0, 5_000)), 4);
    }

    #[test]
    fn test_demographics_college_curve() {
        let mut d = demographics(30_000, 9.0, 40_000);
        d.is_college_town = true;
        d.college_enrollment = Some(12_000);
        // 30% enrolled: 8 + 0.5 + 0.5 = 9
        assert_eq!(calculate_demographics_score(&d), 9);

        d.college_enrollment = Some(7_000);
        // 17.5% enrolled: 7.5 + 0.5 + 0.5 = 8.5, rounds to 9
        assert_eq!(calculate_demographics_score(&d), 9);

        d.college_enrollment = None;
        // 7 + 0.5 + 0.5 = 8
        assert_eq!(calculate_demographics_score(&d), 8);
    }

    #[test]
    fn test_competition_bands() {
        let diverse: Vec<_> = ["cafe", "bank", "pharmacy", "gym", "salon"]
            .iter()
            .enumerate()
            .map(|(i, t)| business(&format!("Local {}", i), t))
            .collect();
        assert_eq!(calculate_competition_score(&diverse).0, 9);

        let uniform: Vec<_> = (0..5).map(|i| business(&format!("Cafe {}", i), "cafe")).collect();
        assert_eq!(calculate_competition_score(&uniform).0, 7);

        let crowded: Vec<_> = (0..35).map(|i| business(&format!("Shop {}", i), "store")).collect();
        assert_eq!(calculate_competition_score(&crowded).0, 5);

        assert_eq!(calculate_competition_score(&[]).0, 4);
    }

    #[test]
    fn test_anchor_bonus() {
        let nearby = vec![
            business("Target Store T-1234", "department_store"),
            business("Joe's Diner", "restaurant"),
            business("Main Street Bank", "bank"),
        ];
        let (score, note) = calculate_competition_score(&nearby);
        assert_eq!(score, 8);
        assert!(note.contains("anchor"));
    }

    #[test]
    fn test_missing_sources_default_to_five() {
        let score = calculate_feasibility(None, None, &[], &FeasibilityWeights::default());

        assert_eq!(score.traffic, 5);
        assert_eq!(score.access, 5);
        assert_eq!(score.demographics, 5);
        assert_eq!(score.competition, 4);
        // 1.75 + 1.25 + 0.8 + 1.0 = 4.8
        assert_eq!(score.overall, 5);
        assert_eq!(score.rating, Rating::Fair);
        assert!(score.explanations.traffic.starts_with("N/A"));
    }

    #[test]
    fn test_overall_is_weighted_blend() {
        let t = traffic(32_000, RoadType::Trunk);
        let d = demographics(90_000, 3.5, 60_000);
        let nearby: Vec<_> = ["cafe", "bank", "pharmacy", "gym", "salon", "grocery"]
            .iter()
            .enumerate()
            .map(|(i, kind)| business(&format!("Local {}", i), kind))
            .collect();

        let score = calculate_feasibility(Some(&t), Some(&d), &nearby, &FeasibilityWeights::default());

        let expected = (0.35 * score.traffic as f64
            + 0.25 * score.demographics as f64
            + 0.20 * score.competition as f64
            + 0.20 * score.access as f64)
            .round() as u8;
        assert_eq!(score.overall, expected);
        assert_eq!(score.overall, 10);
        assert_eq!(score.rating, Rating::Excellent);
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(Rating::from_overall(8), Rating::Excellent);
        assert_eq!(Rating::from_overall(7), Rating::Good);
        assert_eq!(Rating::from_overall(4), Rating::Fair);
        assert_eq!(Rating::from_overall(3), Rating::Poor);
    }
}
