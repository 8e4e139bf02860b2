//! Built-in expansion criteria for retail chains.
//!
//! Figures are taken from published site-selection sheets and franchise
//! disclosure summaries. `expansion_regions` entries are region groups
//! (see `regions`), two-letter state codes, or `"National"`.

use crate::models::{FranchiseInfo, IncomeTier, MarketPositioning, RetailerRequirement};

use crate::models::IncomeTier::{High as H, Low as L, Middle as Mi, Moderate as Mo, UpperMiddle as Um};

/// Chains that never locate in upper-middle or high income trade areas
pub const VALUE_RETAILERS: &[&str] = &["dollar-general", "family-dollar", "dollar-tree"];

/// Chains that never locate in low income trade areas
pub const PREMIUM_RETAILERS: &[&str] = &["trader-joes", "orangetheory", "lululemon"];

fn seed_positioning(retailer_id: &str) -> MarketPositioning {
    if VALUE_RETAILERS.contains(&retailer_id) {
        MarketPositioning::Value
    } else if PREMIUM_RETAILERS.contains(&retailer_id) {
        MarketPositioning::Premium
    } else {
        MarketPositioning::Standard
    }
}

struct RetailerSeed {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    lot: (f64, f64),
    vpd: (u32, u32),
    incomes: &'static [IncomeTier],
    median_income: (Option<u32>, Option<u32>),
    min_population: Option<u32>,
    regions: &'static [&'static str],
    expanding: bool,
    franchise: Option<FranchiseSeed>,
}

struct FranchiseSeed {
    investment: (u32, u32),
    fee: u32,
    url: &'static str,
}

const ALL_TIERS: &[IncomeTier] = &[L, Mo, Mi, Um, H];

const SEEDS: &[RetailerSeed] = &[
    RetailerSeed {
        id: "dollar-general",
        name: "Dollar General",
        category: "dollar_store",
        lot: (0.75, 1.5),
        vpd: (3_000, 8_000),
        incomes: &[L, Mo, Mi],
        median_income: (None, Some(75_000)),
        min_population: Some(3_000),
        regions: &["National"],
        expanding: true,
        franchise: None,
    },
    RetailerSeed {
        id: "family-dollar",
        name: "Family Dollar",
        category: "dollar_store",
        lot: (0.5, 1.25),
        vpd: (5_000, 12_000),
        incomes: &[L, Mo],
        median_income: (None, Some(60_000)),
        min_population: Some(10_000),
        regions: &["Southeast", "Southwest", "Midwest"],
        expanding: true,
        franchise: None,
    },
    RetailerSeed {
        id: "dollar-tree",
        name: "Dollar Tree",
        category: "dollar_store",
        lot: (0.75, 1.5),
        vpd: (8_000, 15_000),
        incomes: &[L, Mo, Mi],
        median_income: (None, Some(85_000)),
        min_population: Some(15_000),
        regions: &["National"],
        expanding: true,
        franchise: None,
    },
    RetailerSeed {
        id: "aldi",
        name: "Aldi",
        category: "grocery",
        lot: (1.5, 3.0),
        vpd: (12_000, 20_000),
        incomes: &[L, Mo, Mi],
        median_income: (Some(35_000), Some(90_000)),
        min_population: Some(20_000),
        regions: &["National"],
        expanding: true,
        franchise: None,
    },
    RetailerSeed {
        id: "trader-joes",
        name: "Trader Joe's",
        category: "grocery",
        lot: (1.0, 2.0),
        vpd: (15_000, 25_000),
        incomes: &[Um, H],
        median_income: (Some(70_000), None),
        min_population: Some(50_000),
        regions: &["West", "Northeast", "Midwest"],
        expanding: true,
        franchise: None,
    },
    RetailerSeed {
        id: "hy-vee",
        name: "Hy-Vee",
        category: "grocery",
        lot: (5.0, 10.0),
        vpd: (15_000, 25_000),
        incomes: &[Mo, Mi, Um],
        median_income: (Some(45_000), Some(110_000)),
        min_population: Some(20_000),
        regions: &["IA", "MN", "MO", "NE", "KS", "WI", "IL", "SD"],
        expanding: true,
        franchise: None,
    },
    RetailerSeed {
        id: "starbucks",
        name: "Starbucks",
        category: "coffee_shop",
        lot: (0.3, 1.0),
        vpd: (15_000, 25_000),
        incomes: &[Mi, Um, H],
        median_income: (Some(50_000), None),
        min_population: Some(15_000),
        regions: &["National"],
        expanding: true,
        franchise: None,
    },
    RetailerSeed {
        id: "dutch-bros",
        name: "Dutch Bros Coffee",
        category: "coffee_shop",
        lot: (0.5, 1.0),
        vpd: (15_000, 25_000),
        incomes: &[Mo, Mi, Um],
        median_income: (Some(45_000), Some(120_000)),
        min_population: Some(25_000),
        regions: &["West", "Southwest", "Midwest", "Southeast"],
        expanding: true,
        franchise: None,
    },
    RetailerSeed {
        id: "scooters-coffee",
        name: "Scooter's Coffee",
        category: "coffee_shop",
        lot: (0.25, 0.75),
        vpd: (10_000, 20_000),
        incomes: &[Mo, Mi, Um],
        median_income: (Some(40_000), None),
        min_population: Some(10_000),
        regions: &["Midwest", "Southwest", "Southeast"],
        expanding: true,
        franchise: Some(FranchiseSeed {
            investment: (514_000, 939_000),
            fee: 40_000,
            url: "https://www.scooterscoffee.com/franchise",
        }),
    },
    RetailerSeed {
        id: "mcdonalds",
        name: "McDonald's",
        category: "fast_food",
        lot: (0.75, 1.5),
        vpd: (20_000, 30_000),
        incomes: &[L, Mo, Mi, Um],
        median_income: (None, None),
        min_population: Some(10_000),
        regions: &["National"],
        expanding: true,
        franchise: Some(FranchiseSeed {
            investment: (1_470_000, 2_650_000),
            fee: 45_000,
            url: "https://www.mcdonalds.com/us/en-us/franchising.html",
        }),
    },
    RetailerSeed {
        id: "taco-bell",
        name: "Taco Bell",
        category: "fast_food",
        lot: (0.5, 1.25),
        vpd: (15_000, 25_000),
        incomes: &[L, Mo, Mi],
        median_income: (None, None),
        min_population: Some(10_000),
        regions: &["National"],
        expanding: true,
        franchise: Some(FranchiseSeed {
            investment: (575_000, 3_400_000),
            fee: 45_000,
            url: "https://www.tacobell.com/franchise",
        }),
    },
    RetailerSeed {
        id: "chick-fil-a",
        name: "Chick-fil-A",
        category: "fast_food",
        lot: (1.0, 2.0),
        vpd: (25_000, 35_000),
        incomes: &[Mi, Um, H],
        median_income: (Some(55_000), None),
        min_population: Some(30_000),
        regions: &["National"],
        expanding: true,
        franchise: Some(FranchiseSeed {
            investment: (10_000, 10_000),
            fee: 10_000,
            url: "https://www.chick-fil-a.com/careers/franchise",
        }),
    },
    RetailerSeed {
        id: "culvers",
        name: "Culver's",
        category: "fast_food",
        lot: (1.0, 1.75),
        vpd: (18_000, 28_000),
        incomes: &[Mo, Mi, Um],
        median_income: (Some(45_000), Some(110_000)),
        min_population: Some(15_000),
        regions: &["Midwest", "Southeast", "Southwest", "West"],
        expanding: true,
        franchise: Some(FranchiseSeed {
            investment: (2_500_000, 6_600_000),
            fee: 55_000,
            url: "https://www.culvers.com/own-a-culvers",
        }),
    },
    RetailerSeed {
        id: "chipotle",
        name: "Chipotle Mexican Grill",
        category: "fast_casual",
        lot: (0.5, 1.25),
        vpd: (15_000, 25_000),
        incomes: &[Mi, Um, H],
        median_income: (Some(55_000), None),
        min_population: Some(30_000),
        regions: &["National"],
        expanding: true,
        franchise: None,
    },
    RetailerSeed {
        id: "panera",
        name: "Panera Bread",
        category: "fast_casual",
        lot: (1.0, 1.5),
        vpd: (18_000, 28_000),
        incomes: &[Mi, Um, H],
        median_income: (Some(60_000), None),
        min_population: Some(40_000),
        regions: &["National"],
        expanding: true,
        franchise: Some(FranchiseSeed {
            investment: (1_400_000, 3_100_000),
            fee: 35_000,
            url: "https://www.panerabread.com/en-us/company/franchise.html",
        }),
    },
    RetailerSeed {
        id: "caseys",
        name: "Casey's",
        category: "convenience_store",
        lot: (1.0, 2.5),
        vpd: (8_000, 15_000),
        incomes: &[L, Mo, Mi],
        median_income: (None, Some(95_000)),
        min_population: Some(2_000),
        regions: &["Midwest", "TX", "TN", "KY", "OK", "AR"],
        expanding: true,
        franchise: None,
    },
    RetailerSeed {
        id: "quiktrip",
        name: "QuikTrip",
        category: "convenience_store",
        lot: (1.5, 3.0),
        vpd: (25_000, 40_000),
        incomes: &[Mo, Mi, Um],
        median_income: (None, None),
        min_population: Some(50_000),
        regions: &["Midwest", "Southwest", "Southeast"],
        expanding: true,
        franchise: None,
    },
    RetailerSeed {
        id: "loves",
        name: "Love's Travel Stops",
        category: "truck_stop",
        lot: (8.0, 20.0),
        vpd: (20_000, 40_000),
        incomes: ALL_TIERS,
        median_income: (None, None),
        min_population: None,
        regions: &["National"],
        expanding: true,
        franchise: None,
    },
    RetailerSeed {
        id: "target",
        name: "Target",
        category: "big_box",
        lot: (8.0, 15.0),
        vpd: (25_000, 45_000),
        incomes: &[Mi, Um, H],
        median_income: (Some(60_000), None),
        min_population: Some(75_000),
        regions: &["National"],
        expanding: true,
        franchise: None,
    },
    RetailerSeed {
        id: "planet-fitness",
        name: "Planet Fitness",
        category: "fitness",
        lot: (1.0, 2.5),
        vpd: (12_000, 20_000),
        incomes: &[L, Mo, Mi],
        median_income: (Some(35_000), Some(100_000)),
        min_population: Some(25_000),
        regions: &["National"],
        expanding: true,
        franchise: Some(FranchiseSeed {
            investment: (1_500_000, 5_100_000),
            fee: 20_000,
            url: "https://www.planetfitness.com/franchising",
        }),
    },
    RetailerSeed {
        id: "orangetheory",
        name: "Orangetheory Fitness",
        category: "fitness",
        lot: (0.3, 0.75),
        vpd: (15_000, 25_000),
        incomes: &[Um, H],
        median_income: (Some(75_000), None),
        min_population: Some(40_000),
        regions: &["National"],
        expanding: true,
        franchise: Some(FranchiseSeed {
            investment: (1_000_000, 1_500_000),
            fee: 59_950,
            url: "https://www.orangetheory.com/en-us/franchising",
        }),
    },
    RetailerSeed {
        id: "lululemon",
        name: "Lululemon",
        category: "premium_retail",
        lot: (0.5, 2.0),
        vpd: (15_000, 25_000),
        incomes: &[Um, H],
        median_income: (Some(85_000), None),
        min_population: Some(75_000),
        regions: &["National"],
        expanding: true,
        franchise: None,
    },
    RetailerSeed {
        id: "autozone",
        name: "AutoZone",
        category: "auto_parts",
        lot: (0.75, 1.25),
        vpd: (12_000, 20_000),
        incomes: &[L, Mo, Mi],
        median_income: (None, Some(90_000)),
        min_population: Some(10_000),
        regions: &["National"],
        expanding: true,
        franchise: None,
    },
    RetailerSeed {
        id: "take5-oil",
        name: "Take 5 Oil Change",
        category: "auto_service",
        lot: (0.4, 0.8),
        vpd: (15_000, 25_000),
        incomes: &[Mo, Mi, Um],
        median_income: (Some(40_000), None),
        min_population: Some(15_000),
        regions: &["National"],
        expanding: true,
        franchise: Some(FranchiseSeed {
            investment: (285_000, 1_600_000),
            fee: 35_000,
            url: "https://www.take5franchising.com",
        }),
    },
    RetailerSeed {
        id: "mister-car-wash",
        name: "Mister Car Wash",
        category: "car_wash",
        lot: (1.0, 2.0),
        vpd: (20_000, 30_000),
        incomes: &[Mo, Mi, Um],
        median_income: (Some(45_000), Some(130_000)),
        min_population: Some(30_000),
        regions: &["Southeast", "Southwest", "West", "Midwest"],
        expanding: true,
        franchise: None,
    },
    RetailerSeed {
        id: "great-clips",
        name: "Great Clips",
        category: "salon",
        lot: (0.1, 0.3),
        vpd: (8_000, 15_000),
        incomes: ALL_TIERS,
        median_income: (None, None),
        min_population: Some(10_000),
        regions: &["National"],
        expanding: true,
        franchise: Some(FranchiseSeed {
            investment: (180_000, 330_000),
            fee: 25_000,
            url: "https://www.greatclipsfranchise.com",
        }),
    },
    RetailerSeed {
        id: "crumbl",
        name: "Crumbl Cookies",
        category: "ice_cream",
        lot: (0.15, 0.5),
        vpd: (10_000, 20_000),
        incomes: &[Mi, Um, H],
        median_income: (Some(55_000), None),
        min_population: Some(20_000),
        regions: &["National"],
        expanding: true,
        franchise: Some(FranchiseSeed {
            investment: (400_000, 1_000_000),
            fee: 50_000,
            url: "https://crumblcookies.com/franchising",
        }),
    },
    RetailerSeed {
        id: "hampton-inn",
        name: "Hampton Inn",
        category: "hotel",
        lot: (1.5, 3.0),
        vpd: (25_000, 40_000),
        incomes: &[Mi, Um, H],
        median_income: (None, None),
        min_population: Some(20_000),
        regions: &["National"],
        expanding: true,
        franchise: Some(FranchiseSeed {
            investment: (13_000_000, 22_000_000),
            fee: 75_000,
            url: "https://development.hilton.com/hampton",
        }),
    },
    RetailerSeed {
        id: "walgreens",
        name: "Walgreens",
        category: "pharmacy",
        lot: (1.0, 1.75),
        vpd: (20_000, 30_000),
        incomes: ALL_TIERS,
        median_income: (None, None),
        min_population: Some(15_000),
        regions: &["National"],
        expanding: false,
        franchise: None,
    },
];

/// Materialize the built-in retailer table in dataset order
pub fn builtin_retailers() -> Vec<RetailerRequirement> {
    SEEDS
        .iter()
        .map(|seed| RetailerRequirement {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            category: seed.category.to_string(),
            lot_size_min: seed.lot.0,
            lot_size_max: seed.lot.1,
            min_vpd: seed.vpd.0,
            ideal_vpd: seed.vpd.1,
            income_preferences: seed.incomes.iter().copied().collect(),
            min_median_income: seed.median_income.0,
            max_median_income: seed.median_income.1,
            min_population: seed.min_population,
            expansion_regions: seed.regions.iter().map(|r| r.to_string()).collect(),
            actively_expanding: seed.expanding,
            franchise: seed
                .franchise
                .as_ref()
                .map(|f| FranchiseInfo {
                    franchise_available: true,
                    investment_min: Some(f.investment.0),
                    investment_max: Some(f.investment.1),
                    franchise_fee: Some(f.fee),
                    contact_url: Some(f.url.to_string()),
                })
                .unwrap_or_default(),
            positioning: seed_positioning(seed.id),
        })
        .collect()
}
