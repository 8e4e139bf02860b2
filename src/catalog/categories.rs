//! Built-in business category thresholds.
//!
//! Thresholds are daily vehicle counts and lot sizes in acres. Example brands
//! are ordered by how strongly they represent the concept; recommendation
//! output takes them in this order.

use crate::models::{CategoryRequirement, IncomeTier};

use crate::models::IncomeTier::{High as H, Low as L, Middle as Mi, Moderate as Mo, UpperMiddle as Um};

const ALL_TIERS: &[IncomeTier] = &[L, Mo, Mi, Um, H];

/// Categories skipped outright when the trade area is upper-middle or high income
pub const VALUE_ORIENTED_CATEGORIES: &[&str] = &["dollar_store", "thrift_store", "laundromat"];

pub fn is_value_oriented(category_id: &str) -> bool {
    VALUE_ORIENTED_CATEGORIES.contains(&category_id)
}

struct CategorySeed {
    id: &'static str,
    name: &'static str,
    min_vpd: u32,
    ideal_vpd: u32,
    incomes: &'static [IncomeTier],
    lot_min: f64,
    lot_ideal: f64,
    brands: &'static [&'static str],
}

const SEEDS: &[CategorySeed] = &[
    CategorySeed {
        id: "coffee_shop",
        name: "Coffee Shop",
        min_vpd: 12_000,
        ideal_vpd: 20_000,
        incomes: &[Mi, Um, H],
        lot_min: 0.3,
        lot_ideal: 0.75,
        brands: &["Starbucks", "Dutch Bros Coffee", "Scooter's Coffee", "Dunkin'"],
    },
    CategorySeed {
        id: "fast_food",
        name: "Quick-Service Restaurant",
        min_vpd: 15_000,
        ideal_vpd: 25_000,
        incomes: &[L, Mo, Mi],
        lot_min: 0.5,
        lot_ideal: 1.0,
        brands: &["McDonald's", "Taco Bell", "Wendy's", "Culver's"],
    },
    CategorySeed {
        id: "fast_casual",
        name: "Fast Casual Dining",
        min_vpd: 12_000,
        ideal_vpd: 20_000,
        incomes: &[Mi, Um, H],
        lot_min: 0.5,
        lot_ideal: 1.0,
        brands: &["Chipotle Mexican Grill", "Panera Bread", "Qdoba Mexican Eats", "Noodles & Company"],
    },
    CategorySeed {
        id: "casual_dining",
        name: "Casual Dining",
        min_vpd: 15_000,
        ideal_vpd: 25_000,
        incomes: &[Mi, Um],
        lot_min: 1.0,
        lot_ideal: 2.0,
        brands: &["Texas Roadhouse", "Olive Garden", "Chili's", "Applebee's"],
    },
    CategorySeed {
        id: "pizza",
        name: "Pizza & Delivery",
        min_vpd: 8_000,
        ideal_vpd: 15_000,
        incomes: &[L, Mo, Mi],
        lot_min: 0.3,
        lot_ideal: 0.6,
        brands: &["Domino's Pizza", "Papa John's", "Little Caesars", "Marco's Pizza"],
    },
    CategorySeed {
        id: "ice_cream",
        name: "Dessert & Ice Cream",
        min_vpd: 8_000,
        ideal_vpd: 15_000,
        incomes: &[Mo, Mi, Um],
        lot_min: 0.3,
        lot_ideal: 0.6,
        brands: &["Dairy Queen", "Crumbl Cookies", "Baskin-Robbins"],
    },
    CategorySeed {
        id: "bar_brewery",
        name: "Bar & Brewpub",
        min_vpd: 5_000,
        ideal_vpd: 12_000,
        incomes: &[Mi, Um, H],
        lot_min: 0.2,
        lot_ideal: 0.5,
        brands: &["Old Chicago", "World of Beer", "Yard House"],
    },
    CategorySeed {
        id: "convenience_store",
        name: "Convenience Store",
        min_vpd: 10_000,
        ideal_vpd: 20_000,
        incomes: &[L, Mo, Mi, Um],
        lot_min: 0.75,
        lot_ideal: 1.5,
        brands: &["Casey's", "Kwik Trip", "QuikTrip", "7-Eleven"],
    },
    CategorySeed {
        id: "fuel_station",
        name: "Fuel Station",
        min_vpd: 15_000,
        ideal_vpd: 30_000,
        incomes: ALL_TIERS,
        lot_min: 1.0,
        lot_ideal: 2.0,
        brands: &["Shell", "BP", "Phillips 66", "Sheetz"],
    },
    CategorySeed {
        id: "truck_stop",
        name: "Truck Stop & Travel Center",
        min_vpd: 20_000,
        ideal_vpd: 35_000,
        incomes: ALL_TIERS,
        lot_min: 5.0,
        lot_ideal: 10.0,
        brands: &["Love's Travel Stops", "Pilot Flying J", "TravelCenters of America"],
    },
    CategorySeed {
        id: "grocery",
        name: "Grocery Store",
        min_vpd: 15_000,
        ideal_vpd: 25_000,
        incomes: &[Mo, Mi, Um],
        lot_min: 3.0,
        lot_ideal: 5.0,
        brands: &["Aldi", "Hy-Vee", "Kroger", "Trader Joe's"],
    },
    CategorySeed {
        id: "dollar_store",
        name: "Dollar Store",
        min_vpd: 5_000,
        ideal_vpd: 12_000,
        incomes: &[L, Mo],
        lot_min: 0.75,
        lot_ideal: 1.25,
        brands: &["Dollar General", "Family Dollar", "Dollar Tree"],
    },
    CategorySeed {
        id: "big_box",
        name: "Big-Box Retail",
        min_vpd: 25_000,
        ideal_vpd: 40_000,
        incomes: &[Mo, Mi, Um],
        lot_min: 8.0,
        lot_ideal: 15.0,
        brands: &["Walmart Supercenter", "Target", "Costco Wholesale"],
    },
    CategorySeed {
        id: "premium_retail",
        name: "Premium Retail",
        min_vpd: 15_000,
        ideal_vpd: 22_000,
        incomes: &[Um, H],
        lot_min: 1.5,
        lot_ideal: 3.0,
        brands: &["Lululemon", "Sephora", "Williams Sonoma", "Apple Store"],
    },
    CategorySeed {
        id: "specialty_retail",
        name: "Specialty & Boutique Retail",
        min_vpd: 3_000,
        ideal_vpd: 8_000,
        incomes: &[Mi, Um, H],
        lot_min: 0.1,
        lot_ideal: 0.3,
        brands: &["Warby Parker", "Paper Source", "Kiehl's"],
    },
    CategorySeed {
        id: "pharmacy",
        name: "Pharmacy",
        min_vpd: 12_000,
        ideal_vpd: 20_000,
        incomes: ALL_TIERS,
        lot_min: 1.0,
        lot_ideal: 1.5,
        brands: &["Walgreens", "CVS Pharmacy", "Rite Aid"],
    },
    CategorySeed {
        id: "auto_parts",
        name: "Auto Parts",
        min_vpd: 10_000,
        ideal_vpd: 18_000,
        incomes: &[L, Mo, Mi],
        lot_min: 0.75,
        lot_ideal: 1.25,
        brands: &["AutoZone", "O'Reilly Auto Parts", "Advance Auto Parts"],
    },
    CategorySeed {
        id: "auto_service",
        name: "Quick Lube & Auto Service",
        min_vpd: 12_000,
        ideal_vpd: 20_000,
        incomes: &[Mo, Mi, Um],
        lot_min: 0.5,
        lot_ideal: 1.0,
        brands: &["Jiffy Lube", "Valvoline Instant Oil Change", "Take 5 Oil Change"],
    },
    CategorySeed {
        id: "car_wash",
        name: "Express Car Wash",
        min_vpd: 15_000,
        ideal_vpd: 25_000,
        incomes: &[Mo, Mi, Um],
        lot_min: 1.0,
        lot_ideal: 1.5,
        brands: &["Mister Car Wash", "Tommy's Express", "Zips Car Wash"],
    },
    CategorySeed {
        id: "fitness",
        name: "Fitness Center",
        min_vpd: 10_000,
        ideal_vpd: 20_000,
        incomes: &[Mi, Um, H],
        lot_min: 1.0,
        lot_ideal: 2.0,
        brands: &["Planet Fitness", "Anytime Fitness", "Orangetheory Fitness", "Crunch Fitness"],
    },
    CategorySeed {
        id: "bank",
        name: "Bank Branch",
        min_vpd: 10_000,
        ideal_vpd: 18_000,
        incomes: &[Mi, Um, H],
        lot_min: 0.5,
        lot_ideal: 1.0,
        brands: &["Chase Bank", "Wells Fargo", "U.S. Bank"],
    },
    CategorySeed {
        id: "urgent_care",
        name: "Urgent Care Clinic",
        min_vpd: 10_000,
        ideal_vpd: 18_000,
        incomes: ALL_TIERS,
        lot_min: 0.75,
        lot_ideal: 1.5,
        brands: &["MedExpress", "American Family Care", "CareNow Urgent Care"],
    },
    CategorySeed {
        id: "hotel",
        name: "Limited-Service Hotel",
        min_vpd: 20_000,
        ideal_vpd: 35_000,
        incomes: &[Mi, Um, H],
        lot_min: 2.0,
        lot_ideal: 3.5,
        brands: &["Hampton Inn", "Holiday Inn Express", "Fairfield Inn & Suites"],
    },
    CategorySeed {
        id: "salon",
        name: "Salon & Personal Care",
        min_vpd: 5_000,
        ideal_vpd: 12_000,
        incomes: ALL_TIERS,
        lot_min: 0.2,
        lot_ideal: 0.4,
        brands: &["Great Clips", "Supercuts", "Sport Clips"],
    },
    CategorySeed {
        id: "laundromat",
        name: "Laundromat",
        min_vpd: 5_000,
        ideal_vpd: 10_000,
        incomes: &[L, Mo],
        lot_min: 0.25,
        lot_ideal: 0.5,
        brands: &["SpinXpress", "Clean Rite Center", "Laundromax"],
    },
    CategorySeed {
        id: "pet_store",
        name: "Pet Supplies",
        min_vpd: 12_000,
        ideal_vpd: 20_000,
        incomes: &[Mi, Um, H],
        lot_min: 1.0,
        lot_ideal: 2.0,
        brands: &["Petco", "PetSmart", "Pet Supplies Plus"],
    },
    CategorySeed {
        id: "thrift_store",
        name: "Thrift & Resale",
        min_vpd: 5_000,
        ideal_vpd: 12_000,
        incomes: &[L, Mo, Mi],
        lot_min: 1.0,
        lot_ideal: 1.5,
        brands: &["Goodwill", "Savers", "Plato's Closet"],
    },
    CategorySeed {
        id: "daycare",
        name: "Child Care Center",
        min_vpd: 5_000,
        ideal_vpd: 12_000,
        incomes: &[Mi, Um, H],
        lot_min: 0.5,
        lot_ideal: 1.0,
        brands: &["KinderCare", "Primrose School", "The Goddard School"],
    },
];

/// Materialize the built-in table in catalog order
pub fn builtin_categories() -> Vec<CategoryRequirement> {
    SEEDS
        .iter()
        .map(|seed| CategoryRequirement {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            min_vpd: seed.min_vpd,
            ideal_vpd: seed.ideal_vpd,
            income_preferences: seed.incomes.iter().copied().collect(),
            lot_size_min: seed.lot_min,
            lot_size_ideal: seed.lot_ideal,
            example_brands: seed.brands.iter().map(|b| b.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_oriented_ids_exist_in_catalog() {
        let categories = builtin_categories();
        for id in VALUE_ORIENTED_CATEGORIES {
            assert!(categories.iter().any(|c| c.id == *id), "missing {}", id);
        }
    }

    #[test]
    fn test_premium_retail_thresholds() {
        let categories = builtin_categories();
        let premium = categories.iter().find(|c| c.id == "premium_retail").unwrap();

        assert_eq!(premium.ideal_vpd, 22_000);
        assert_eq!(premium.lot_size_ideal, 3.0);
        assert!(premium.prefers(IncomeTier::High));
    }
}
