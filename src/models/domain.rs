use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::reference::FranchiseInfo;

/// Household income band assigned to a trade area by the demographics provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeTier {
    Low,
    Moderate,
    Middle,
    #[serde(alias = "upper-middle", alias = "upperMiddle")]
    UpperMiddle,
    High,
}

impl IncomeTier {
    /// Upper-middle and high tiers gate out value-oriented concepts
    pub fn is_affluent(self) -> bool {
        matches!(self, IncomeTier::UpperMiddle | IncomeTier::High)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IncomeTier::Low => "low",
            IncomeTier::Moderate => "moderate",
            IncomeTier::Middle => "middle",
            IncomeTier::UpperMiddle => "upper_middle",
            IncomeTier::High => "high",
        }
    }
}

/// OSM-style classification of the road fronting the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadType {
    Motorway,
    Trunk,
    Primary,
    Secondary,
    Tertiary,
    Residential,
    #[serde(other)]
    Unknown,
}

impl RoadType {
    pub fn is_major(self) -> bool {
        matches!(self, RoadType::Motorway | RoadType::Trunk | RoadType::Primary)
    }
}

impl Default for RoadType {
    fn default() -> Self {
        RoadType::Unknown
    }
}

/// A business found near the site by the places collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyBusiness {
    pub name: String,
    #[serde(rename = "type", alias = "businessType", default)]
    pub business_type: String,
    #[serde(rename = "distanceMiles", default)]
    pub distance_miles: Option<f64>,
}

/// Traffic counts for the road adjacent to the site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficData {
    #[serde(rename = "estimatedVpd", alias = "vpd")]
    pub vpd: u32,
    #[serde(rename = "roadType", default)]
    pub road_type: RoadType,
    #[serde(rename = "roadName", default)]
    pub road_name: Option<String>,
}

/// Trade-area demographic profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Demographics {
    #[serde(rename = "medianHouseholdIncome", default)]
    pub median_household_income: Option<u32>,
    #[serde(rename = "incomeTier")]
    pub income_tier: IncomeTier,
    #[serde(default)]
    pub population: Option<u32>,
    #[serde(rename = "isCollegeTown", default)]
    pub is_college_town: bool,
    #[serde(rename = "collegeEnrollment", default)]
    pub college_enrollment: Option<u32>,
    /// Percentage, e.g. `3.8` for 3.8%
    #[serde(rename = "unemploymentRate", default)]
    pub unemployment_rate: Option<f64>,
    /// Business names the demographics collaborator considers a fit for the area
    #[serde(rename = "preferredBusinesses", default)]
    pub preferred_businesses: Vec<String>,
}

impl Demographics {
    /// Share of the population enrolled in college, as a percentage
    pub fn enrollment_share(&self) -> Option<f64> {
        match (self.college_enrollment, self.population) {
            (Some(enrolled), Some(population)) if population > 0 => {
                Some(enrolled as f64 / population as f64 * 100.0)
            }
            _ => None,
        }
    }
}

/// Everything known about a site, assembled upstream before scoring
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteContext {
    pub address: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(rename = "stateCode", default)]
    pub state_code: Option<String>,
    #[serde(rename = "nearbyBusinesses", default)]
    pub nearby_businesses: Vec<NearbyBusiness>,
    #[serde(default)]
    pub traffic: Option<TrafficData>,
    #[serde(default)]
    pub demographics: Option<Demographics>,
    #[serde(rename = "lotSizeAcres", default)]
    pub lot_size_acres: Option<f64>,
    /// Free-text lot size from a listing, used when `lot_size_acres` is absent
    #[serde(rename = "lotSizeText", default)]
    pub lot_size_text: Option<String>,
}

impl SiteContext {
    pub fn vpd(&self) -> Option<u32> {
        self.traffic.as_ref().map(|t| t.vpd)
    }

    pub fn income_tier(&self) -> Option<IncomeTier> {
        self.demographics.as_ref().map(|d| d.income_tier)
    }
}

/// Location archetype used to gate which categories are considered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistrictType {
    CollegeCampus,
    HistoricDowntown,
    HighwayCorridor,
    SuburbanRetail,
    Neighborhood,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictProfile {
    #[serde(rename = "type")]
    pub district_type: DistrictType,
    pub description: String,
    #[serde(rename = "appropriateCategories")]
    pub appropriate_categories: BTreeSet<String>,
    #[serde(rename = "inappropriateCategories")]
    pub inappropriate_categories: BTreeSet<String>,
}

impl DistrictProfile {
    pub fn excludes(&self, category_id: &str) -> bool {
        self.inappropriate_categories.contains(category_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Rating {
    pub fn from_overall(overall: u8) -> Self {
        match overall {
            8.. => Rating::Excellent,
            6..=7 => Rating::Good,
            4..=5 => Rating::Fair,
            _ => Rating::Poor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityExplanations {
    pub traffic: String,
    pub demographics: String,
    pub competition: String,
    pub access: String,
}

/// Overall 0-10 site score with its four components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityScore {
    pub overall: u8,
    #[serde(rename = "trafficScore")]
    pub traffic: u8,
    #[serde(rename = "demographicsScore")]
    pub demographics: u8,
    #[serde(rename = "competitionScore")]
    pub competition: u8,
    #[serde(rename = "accessScore")]
    pub access: u8,
    pub rating: Rating,
    pub explanations: FeasibilityExplanations,
}

/// Per-category suitability for the site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuitabilityResult {
    #[serde(rename = "categoryId")]
    pub category_id: String,
    #[serde(rename = "categoryName")]
    pub category_name: String,
    pub score: u8,
    pub reasoning: String,
    #[serde(rename = "remainingBrands")]
    pub remaining_brands: Vec<String>,
    #[serde(rename = "competingBrands")]
    pub competing_brands: Vec<String>,
    #[serde(rename = "lotSizeShortfall")]
    pub lot_size_shortfall: bool,
    #[serde(rename = "marketSaturated")]
    pub market_saturated: bool,
}

/// Per-factor outcome: `Some(true)` full credit, `Some(false)` partial, `None` not evaluated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchDetails {
    #[serde(rename = "lotSizeMatch")]
    pub lot_size: Option<bool>,
    #[serde(rename = "trafficMatch")]
    pub traffic: Option<bool>,
    #[serde(rename = "demographicsMatch")]
    pub demographics: Option<bool>,
    #[serde(rename = "regionMatch")]
    pub region: Option<bool>,
    pub notes: Vec<String>,
}

/// A retailer that qualified for the site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetailerMatchResult {
    #[serde(rename = "retailerId")]
    pub retailer_id: String,
    pub name: String,
    pub category: String,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    pub details: MatchDetails,
    pub franchise: FranchiseInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetailerMatches {
    pub matches: Vec<RetailerMatchResult>,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
}

/// Full output of the scoring pipeline for one site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteEvaluation {
    pub district: DistrictProfile,
    pub feasibility: FeasibilityScore,
    pub suitability: Vec<SuitabilityResult>,
    pub recommendations: Vec<String>,
    #[serde(rename = "retailerMatches")]
    pub retailer_matches: RetailerMatches,
}

/// Weights for the overall feasibility blend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeasibilityWeights {
    pub traffic: f64,
    pub demographics: f64,
    pub competition: f64,
    pub access: f64,
}

impl Default for FeasibilityWeights {
    fn default() -> Self {
        Self {
            traffic: 0.35,
            demographics: 0.25,
            competition: 0.20,
            access: 0.20,
        }
    }
}

impl FeasibilityWeights {
    /// All weights finite and non-negative, with a positive total
    pub fn is_valid(&self) -> bool {
        let weights = [self.traffic, self.demographics, self.competition, self.access];
        weights.iter().all(|w| w.is_finite() && *w >= 0.0) && weights.iter().sum::<f64>() > 0.0
    }
}
