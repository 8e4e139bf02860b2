use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{parse_lot_size, resolve_lot_size, SiteEvaluator};
use crate::models::{
    CategoriesResponse, ErrorResponse, EvaluateSiteRequest, EvaluateSiteResponse, HealthResponse,
    ParseLotSizeRequest, ParseLotSizeResponse, RetailersResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub evaluator: SiteEvaluator,
}

/// Configure all site routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/sites/evaluate", web::post().to(evaluate_site))
        .route("/categories", web::get().to(list_categories))
        .route("/retailers", web::get().to(list_retailers))
        .route("/lot-size/parse", web::post().to(parse_lot_size_text));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        categories: state.evaluator.catalog().len(),
        retailers: state.evaluator.dataset().len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Evaluate a site
///
/// POST /api/v1/sites/evaluate
///
/// Request body:
/// ```json
/// {
///   "address": "string",
///   "latitude": 41.59,
///   "longitude": -93.62,
///   "stateCode": "IA",
///   "nearbyBusinesses": [{ "name": "string", "type": "string" }],
///   "traffic": { "estimatedVpd": 18000, "roadType": "primary" },
///   "demographics": { "incomeTier": "middle", "medianHouseholdIncome": 64000 },
///   "lotSizeAcres": 1.5
/// }
/// ```
async fn evaluate_site(
    state: web::Data<AppState>,
    req: web::Json<EvaluateSiteRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for evaluate request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(
            "Validation failed",
            errors.to_string(),
        ));
    }

    let site = req.into_inner().site;
    if site.traffic.is_none() {
        tracing::warn!("No traffic data for {}; scoring with defaults", site.address);
    }
    if site.demographics.is_none() {
        tracing::warn!("No demographics for {}; scoring with defaults", site.address);
    }

    let evaluation_id = uuid::Uuid::new_v4().to_string();
    tracing::info!("Evaluating site {} ({})", site.address, evaluation_id);

    let evaluation = state.evaluator.evaluate(&site);

    tracing::info!(
        "Site {} scored {} ({:?}) with {} retailer matches",
        evaluation_id,
        evaluation.feasibility.overall,
        evaluation.feasibility.rating,
        evaluation.retailer_matches.total_matches
    );

    HttpResponse::Ok().json(EvaluateSiteResponse {
        evaluation_id,
        evaluated_at: chrono::Utc::now(),
        lot_size_acres: resolve_lot_size(&site),
        evaluation,
    })
}

/// List the category catalog
async fn list_categories(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(CategoriesResponse {
        categories: state.evaluator.catalog().as_slice().to_vec(),
    })
}

/// List the retailer dataset
async fn list_retailers(state: web::Data<AppState>) -> impl Responder {
    let dataset = state.evaluator.dataset();
    HttpResponse::Ok().json(RetailersResponse {
        actively_expanding: dataset.actively_expanding().count(),
        retailers: dataset.as_slice().to_vec(),
    })
}

/// Parse a free-text lot size into acres
async fn parse_lot_size_text(req: web::Json<ParseLotSizeRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(
            "Validation failed",
            errors.to_string(),
        ));
    }

    let text = req.into_inner().text;
    let acres = parse_lot_size(&text);
    tracing::debug!("Parsed lot size {:?} as {:?}", text, acres);

    HttpResponse::Ok().json(ParseLotSizeResponse { text, acres })
}
