use crate::catalog::RetailerDataset;
use crate::core::filters::{
    demographics_factor, lot_size_factor, region_factor, traffic_factor, DemographicFacts,
    FactorOutcome, DEMOGRAPHICS_WEIGHT, LOT_WEIGHT, REGION_WEIGHT, TRAFFIC_WEIGHT,
};
use crate::models::{
    IncomeTier, MatchDetails, RetailerMatchResult, RetailerMatches, RetailerRequirement,
};

/// Most matches returned for a site
pub const MAX_RETAILER_MATCHES: usize = 20;

/// Scores under this are dropped
pub const MIN_MATCH_SCORE: u8 = 30;

/// Site facts consulted by the retailer matcher; every field may be unknown
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RetailerQuery {
    pub lot_size_acres: Option<f64>,
    pub vpd: Option<u32>,
    pub median_income: Option<u32>,
    pub income_tier: Option<IncomeTier>,
    pub population: Option<u32>,
    pub state_code: Option<String>,
}

impl RetailerQuery {
    fn demographic_facts(&self) -> DemographicFacts {
        DemographicFacts {
            median_income: self.median_income,
            income_tier: self.income_tier,
            population: self.population,
        }
    }
}

/// Running weighted credit; weights of unknown inputs are never added
#[derive(Debug, Default)]
struct Tally {
    earned: f64,
    applicable: f64,
    details: MatchDetails,
}

impl Tally {
    /// Record a factor. Returns `false` if the retailer is disqualified.
    fn record(
        &mut self,
        weight: f64,
        outcome: FactorOutcome,
        flag: impl FnOnce(&mut MatchDetails) -> &mut Option<bool>,
    ) -> bool {
        match outcome {
            FactorOutcome::Credit { fraction, full, note } => {
                self.earned += weight * fraction;
                self.applicable += weight;
                *flag(&mut self.details) = Some(full);
                self.details.notes.push(note);
                true
            }
            FactorOutcome::Disqualified(reason) => {
                tracing::trace!("Disqualified: {}", reason);
                false
            }
        }
    }

    fn score(&self) -> Option<u8> {
        if self.applicable <= 0.0 {
            return None;
        }
        let score = (100.0 * self.earned / self.applicable).round().clamp(0.0, 100.0);
        Some(score as u8)
    }
}

/// Retailer matching orchestrator
///
/// # Pipeline Stages
/// 1. Skip chains that are not actively expanding
/// 2. Evaluate lot, traffic, demographics, and region; any hard gate skips the chain
/// 3. Normalize earned credit over the applicable weights
/// 4. Drop scores under the minimum, rank, and truncate
#[derive(Debug, Clone)]
pub struct RetailerMatcher {
    limit: usize,
    min_score: u8,
}

impl RetailerMatcher {
    pub fn new(limit: usize, min_score: u8) -> Self {
        Self {
            limit: limit.min(MAX_RETAILER_MATCHES),
            min_score,
        }
    }

    /// Score one retailer, or `None` if it is disqualified or under the minimum
    pub fn score_retailer(
        &self,
        retailer: &RetailerRequirement,
        query: &RetailerQuery,
    ) -> Option<RetailerMatchResult> {
        let mut tally = Tally::default();

        if let Some(lot) = query.lot_size_acres {
            if !tally.record(LOT_WEIGHT, lot_size_factor(retailer, lot), |d| &mut d.lot_size) {
                return None;
            }
        }

        if let Some(vpd) = query.vpd {
            if !tally.record(TRAFFIC_WEIGHT, traffic_factor(retailer, vpd), |d| &mut d.traffic) {
                return None;
            }
        }

        if let Some(outcome) = demographics_factor(retailer, &query.demographic_facts()) {
            if !tally.record(DEMOGRAPHICS_WEIGHT, outcome, |d| &mut d.demographics) {
                return None;
            }
        }

        if let Some(state_code) = query.state_code.as_deref().filter(|s| !s.trim().is_empty()) {
            if !tally.record(REGION_WEIGHT, region_factor(retailer, state_code), |d| &mut d.region) {
                return None;
            }
        }

        let match_score = tally.score()?;
        if match_score < self.min_score {
            return None;
        }

        Some(RetailerMatchResult {
            retailer_id: retailer.id.clone(),
            name: retailer.name.clone(),
            category: retailer.category.clone(),
            match_score,
            details: tally.details,
            franchise: retailer.franchise.clone(),
        })
    }

    /// Find every qualifying retailer for the site
    ///
    /// `total_matches` counts all qualifying retailers before truncation.
    pub fn find_matches(&self, query: &RetailerQuery, dataset: &RetailerDataset) -> RetailerMatches {
        let mut matches: Vec<RetailerMatchResult> = dataset
            .actively_expanding()
            .filter_map(|retailer| self.score_retailer(retailer, query))
            .collect();

        let total_matches = matches.len();

        // Sort by score (descending) and then by name for a stable order
        matches.sort_by(|a, b| {
            b.match_score
                .cmp(&a.match_score)
                .then_with(|| a.name.cmp(&b.name))
        });

        matches.truncate(self.limit);

        tracing::debug!(
            "Retailer matching kept {} of {} qualifying chains",
            matches.len(),
            total_matches
        );

        RetailerMatches {
            matches,
            total_matches,
        }
    }
}

impl Default for RetailerMatcher {
    fn default() -> Self {
        Self::new(MAX_RETAILER_MATCHES, MIN_MATCH_SCORE)
    }
}
