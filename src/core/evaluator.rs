use std::sync::Arc;

use crate::catalog::{CategoryCatalog, RetailerDataset};
use crate::core::{
    district::classify_district,
    lot_size::resolve_lot_size,
    matcher::{RetailerMatcher, RetailerQuery},
    recommendations::{generate_recommendations, RecommendationInput},
    scoring::calculate_feasibility,
    suitability::rank_categories,
};
use crate::models::{FeasibilityWeights, SiteContext, SiteEvaluation};

/// Site evaluation orchestrator
///
/// Holds the immutable reference data shared by every request.
///
/// # Pipeline Stages
/// 1. District classification
/// 2. Feasibility scoring
/// 3. Category suitability ranking
/// 4. Brand recommendations
/// 5. Retailer matching
#[derive(Debug, Clone)]
pub struct SiteEvaluator {
    catalog: Arc<CategoryCatalog>,
    dataset: Arc<RetailerDataset>,
    weights: FeasibilityWeights,
    matcher: RetailerMatcher,
}

impl SiteEvaluator {
    pub fn new(
        catalog: Arc<CategoryCatalog>,
        dataset: Arc<RetailerDataset>,
        weights: FeasibilityWeights,
    ) -> Self {
        Self {
            catalog,
            dataset,
            weights,
            matcher: RetailerMatcher::default(),
        }
    }

    /// Evaluator over the built-in tables with default weights
    pub fn with_builtin_data() -> Self {
        Self::new(
            Arc::new(CategoryCatalog::builtin()),
            Arc::new(RetailerDataset::builtin()),
            FeasibilityWeights::default(),
        )
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn dataset(&self) -> &RetailerDataset {
        &self.dataset
    }

    pub fn weights(&self) -> &FeasibilityWeights {
        &self.weights
    }

    /// Run the whole pipeline for one site
    ///
    /// Never fails: missing traffic counts as zero VPD for ranking, and
    /// other missing inputs fall back to neutral defaults.
    pub fn evaluate(&self, site: &SiteContext) -> SiteEvaluation {
        let lot_size_acres = resolve_lot_size(site);
        let vpd = site.vpd().unwrap_or(0);
        let demographics = site.demographics.as_ref();

        let district = classify_district(site);

        let feasibility = calculate_feasibility(
            site.traffic.as_ref(),
            demographics,
            &site.nearby_businesses,
            &self.weights,
        );

        let suitability = rank_categories(
            vpd,
            &site.nearby_businesses,
            demographics,
            lot_size_acres,
            Some(&district),
            &self.catalog,
        );

        let recommendations = generate_recommendations(
            &RecommendationInput {
                district: Some(&district),
                vpd,
                nearby: &site.nearby_businesses,
                demographics,
                lot_size_acres,
            },
            &self.catalog,
        );

        let query = RetailerQuery {
            lot_size_acres,
            vpd: site.vpd(),
            median_income: demographics.and_then(|d| d.median_household_income),
            income_tier: site.income_tier(),
            population: demographics.and_then(|d| d.population),
            state_code: site.state_code.clone(),
        };
        let retailer_matches = self.matcher.find_matches(&query, &self.dataset);

        tracing::debug!(
            "Evaluated {:?}: overall {}, {} categories, {} retailer matches",
            site.address,
            feasibility.overall,
            suitability.len(),
            retailer_matches.total_matches
        );

        SiteEvaluation {
            district,
            feasibility,
            suitability,
            recommendations,
            retailer_matches,
        }
    }
}

/// Score a site against the given catalog and dataset with default weights
pub fn score_and_match(
    site: &SiteContext,
    catalog: &CategoryCatalog,
    dataset: &RetailerDataset,
) -> SiteEvaluation {
    SiteEvaluator::new(
        Arc::new(catalog.clone()),
        Arc::new(dataset.clone()),
        FeasibilityWeights::default(),
    )
    .evaluate(site)
}
