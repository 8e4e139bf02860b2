use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::domain::SiteContext;

/// Request to evaluate a site
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_site"))]
pub struct EvaluateSiteRequest {
    #[serde(flatten)]
    pub site: SiteContext,
}

fn validate_site(req: &EvaluateSiteRequest) -> Result<(), ValidationError> {
    let site = &req.site;
    if site.address.trim().is_empty() {
        return Err(ValidationError::new("address_required"));
    }
    if !(-90.0..=90.0).contains(&site.latitude) || !(-180.0..=180.0).contains(&site.longitude) {
        return Err(ValidationError::new("coordinates_out_of_range"));
    }
    if let Some(acres) = site.lot_size_acres {
        if !acres.is_finite() || acres < 0.0 {
            return Err(ValidationError::new("lot_size_negative"));
        }
    }
    if let Some(code) = &site.state_code {
        if code.trim().len() != 2 {
            return Err(ValidationError::new("state_code_length"));
        }
    }
    Ok(())
}

/// Request to parse a free-text lot size
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ParseLotSizeRequest {
    #[validate(length(min = 1, max = 256))]
    pub text: String,
}
