use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::domain::IncomeTier;

/// Ideal site conditions for a business concept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRequirement {
    pub id: String,
    pub name: String,
    #[serde(rename = "minVpd")]
    pub min_vpd: u32,
    #[serde(rename = "idealVpd")]
    pub ideal_vpd: u32,
    #[serde(rename = "incomePreferences")]
    pub income_preferences: BTreeSet<IncomeTier>,
    #[serde(rename = "lotSizeMin")]
    pub lot_size_min: f64,
    #[serde(rename = "lotSizeIdeal")]
    pub lot_size_ideal: f64,
    #[serde(rename = "exampleBrands")]
    pub example_brands: Vec<String>,
}

impl CategoryRequirement {
    pub fn prefers(&self, tier: IncomeTier) -> bool {
        self.income_preferences.contains(&tier)
    }
}

/// Franchise terms published by an expanding chain
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FranchiseInfo {
    #[serde(rename = "franchiseAvailable", default)]
    pub franchise_available: bool,
    #[serde(rename = "investmentMin", default)]
    pub investment_min: Option<u32>,
    #[serde(rename = "investmentMax", default)]
    pub investment_max: Option<u32>,
    #[serde(rename = "franchiseFee", default)]
    pub franchise_fee: Option<u32>,
    #[serde(rename = "contactUrl", default)]
    pub contact_url: Option<String>,
}

/// Price positioning of a chain; value and premium chains carry hard income gates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketPositioning {
    Value,
    #[default]
    Standard,
    Premium,
}

/// Published site criteria for a retail chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetailerRequirement {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(rename = "lotSizeMin")]
    pub lot_size_min: f64,
    #[serde(rename = "lotSizeMax")]
    pub lot_size_max: f64,
    #[serde(rename = "minVpd")]
    pub min_vpd: u32,
    #[serde(rename = "idealVpd")]
    pub ideal_vpd: u32,
    #[serde(rename = "incomePreferences")]
    pub income_preferences: BTreeSet<IncomeTier>,
    #[serde(rename = "minMedianIncome", default)]
    pub min_median_income: Option<u32>,
    #[serde(rename = "maxMedianIncome", default)]
    pub max_median_income: Option<u32>,
    #[serde(rename = "minPopulation", default)]
    pub min_population: Option<u32>,
    #[serde(rename = "expansionRegions")]
    pub expansion_regions: Vec<String>,
    #[serde(rename = "activelyExpanding", default = "default_true")]
    pub actively_expanding: bool,
    #[serde(default)]
    pub franchise: FranchiseInfo,
    /// Omitted in data files means standard, unless the category itself is value-oriented
    #[serde(default)]
    pub positioning: MarketPositioning,
}

fn default_true() -> bool { true }
