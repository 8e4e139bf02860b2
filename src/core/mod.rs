// Core pipeline exports
pub mod district;
pub mod evaluator;
pub mod filters;
pub mod lot_size;
pub mod matcher;
pub mod names;
pub mod recommendations;
pub mod scoring;
pub mod suitability;

pub use district::classify_district;
pub use evaluator::{score_and_match, SiteEvaluator};
pub use lot_size::{parse_lot_size, resolve_lot_size};
pub use matcher::{RetailerMatcher, RetailerQuery};
pub use recommendations::{generate_recommendations, RecommendationInput};
pub use scoring::calculate_feasibility;
pub use suitability::rank_categories;
