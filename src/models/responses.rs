use serde::{Deserialize, Serialize};

use crate::models::domain::SiteEvaluation;
use crate::models::reference::{CategoryRequirement, RetailerRequirement};

/// Response for the evaluate endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateSiteResponse {
    #[serde(rename = "evaluationId")]
    pub evaluation_id: String,
    #[serde(rename = "evaluatedAt")]
    pub evaluated_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "lotSizeAcres")]
    pub lot_size_acres: Option<f64>,
    #[serde(flatten)]
    pub evaluation: SiteEvaluation,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub categories: usize,
    pub retailers: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryRequirement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetailersResponse {
    #[serde(rename = "activelyExpanding")]
    pub actively_expanding: usize,
    pub retailers: Vec<RetailerRequirement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseLotSizeResponse {
    pub text: String,
    pub acres: Option<f64>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
