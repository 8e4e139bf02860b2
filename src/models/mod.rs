// Model exports
pub mod domain;
pub mod reference;
pub mod requests;
pub mod responses;

pub use domain::{
    Demographics, DistrictProfile, DistrictType, FeasibilityExplanations, FeasibilityScore,
    FeasibilityWeights, IncomeTier, MatchDetails, NearbyBusiness, Rating, RetailerMatchResult,
    RetailerMatches, RoadType, SiteContext, SiteEvaluation, SuitabilityResult, TrafficData,
};
pub use reference::{CategoryRequirement, FranchiseInfo, MarketPositioning, RetailerRequirement};
pub use requests::{EvaluateSiteRequest, ParseLotSizeRequest};
pub use responses::{
    CategoriesResponse, ErrorResponse, EvaluateSiteResponse, HealthResponse,
    ParseLotSizeResponse, RetailersResponse,
};
