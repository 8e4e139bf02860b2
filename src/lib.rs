//! Site Scout - commercial site feasibility scoring and retailer matching
//!
//! This library provides the deterministic evaluation pipeline behind the
//! Site Scout service: district classification, feasibility scoring,
//! category suitability ranking, brand recommendations, and matching against
//! the site criteria of actively-expanding retail chains.

pub mod catalog;
pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use catalog::{CategoryCatalog, RetailerDataset};
pub use core::{parse_lot_size, score_and_match, SiteEvaluator};
pub use models::{
    DistrictProfile, FeasibilityScore, FeasibilityWeights, RetailerMatches, SiteContext,
    SiteEvaluation, SuitabilityResult,
};
