//! Immutable reference data: business category thresholds and retailer
//! expansion criteria, indexed by id and shared across requests.

pub mod categories;
pub mod regions;
pub mod retailers;

pub use categories::{builtin_categories, is_value_oriented, VALUE_ORIENTED_CATEGORIES};
pub use regions::{covers_state, region_for_state};
pub use retailers::builtin_retailers;

use crate::models::{CategoryRequirement, RetailerRequirement};
use std::collections::HashMap;
use thiserror::Error;

/// Reference records that violate their threshold invariants
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("Invalid record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },
}

fn invalid(id: &str, reason: impl Into<String>) -> CatalogError {
    CatalogError::InvalidRecord {
        id: id.to_string(),
        reason: reason.into(),
    }
}

fn build_index<'a>(ids: impl Iterator<Item = &'a str>) -> Result<HashMap<String, usize>, CatalogError> {
    let mut index = HashMap::new();
    for (position, id) in ids.enumerate() {
        if index.insert(id.to_string(), position).is_some() {
            return Err(CatalogError::DuplicateId(id.to_string()));
        }
    }
    Ok(index)
}

pub fn validate_category(category: &CategoryRequirement) -> Result<(), CatalogError> {
    let id = category.id.as_str();
    if id.trim().is_empty() {
        return Err(invalid(id, "empty id"));
    }
    if category.min_vpd > category.ideal_vpd {
        return Err(invalid(id, format!(
            "minVpd {} exceeds idealVpd {}",
            category.min_vpd, category.ideal_vpd
        )));
    }
    if !(category.lot_size_min.is_finite() && category.lot_size_min > 0.0) {
        return Err(invalid(id, "lotSizeMin must be a positive number"));
    }
    if category.lot_size_min > category.lot_size_ideal {
        return Err(invalid(id, format!(
            "lotSizeMin {} exceeds lotSizeIdeal {}",
            category.lot_size_min, category.lot_size_ideal
        )));
    }
    Ok(())
}

pub fn validate_retailer(retailer: &RetailerRequirement) -> Result<(), CatalogError> {
    let id = retailer.id.as_str();
    if id.trim().is_empty() {
        return Err(invalid(id, "empty id"));
    }
    if retailer.min_vpd > retailer.ideal_vpd {
        return Err(invalid(id, format!(
            "minVpd {} exceeds idealVpd {}",
            retailer.min_vpd, retailer.ideal_vpd
        )));
    }
    if !(retailer.lot_size_min.is_finite() && retailer.lot_size_min > 0.0) {
        return Err(invalid(id, "lotSizeMin must be a positive number"));
    }
    if retailer.lot_size_min > retailer.lot_size_max {
        return Err(invalid(id, format!(
            "lotSizeMin {} exceeds lotSizeMax {}",
            retailer.lot_size_min, retailer.lot_size_max
        )));
    }
    if let (Some(min), Some(max)) = (retailer.min_median_income, retailer.max_median_income) {
        if min > max {
            return Err(invalid(id, format!(
                "minMedianIncome {} exceeds maxMedianIncome {}",
                min, max
            )));
        }
    }
    Ok(())
}

/// Category thresholds in catalog order, with an id index
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    categories: Vec<CategoryRequirement>,
    index: HashMap<String, usize>,
}

impl CategoryCatalog {
    /// Build a catalog, rejecting duplicate ids and inverted thresholds
    pub fn new(categories: Vec<CategoryRequirement>) -> Result<Self, CatalogError> {
        for category in &categories {
            validate_category(category)?;
        }
        let index = build_index(categories.iter().map(|c| c.id.as_str()))?;
        Ok(Self { categories, index })
    }

    pub fn builtin() -> Self {
        let categories = builtin_categories();
        let index = categories
            .iter()
            .enumerate()
            .map(|(position, c)| (c.id.clone(), position))
            .collect();
        Self { categories, index }
    }

    pub fn get(&self, id: &str) -> Option<&CategoryRequirement> {
        self.index.get(id).map(|&position| &self.categories[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryRequirement> {
        self.categories.iter()
    }

    pub fn as_slice(&self) -> &[CategoryRequirement] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Retailer expansion criteria in dataset order, with an id index
#[derive(Debug, Clone)]
pub struct RetailerDataset {
    retailers: Vec<RetailerRequirement>,
    index: HashMap<String, usize>,
}

impl RetailerDataset {
    pub fn new(retailers: Vec<RetailerRequirement>) -> Result<Self, CatalogError> {
        for retailer in &retailers {
            validate_retailer(retailer)?;
        }
        let index = build_index(retailers.iter().map(|r| r.id.as_str()))?;
        Ok(Self { retailers, index })
    }

    pub fn builtin() -> Self {
        let retailers = builtin_retailers();
        let index = retailers
            .iter()
            .enumerate()
            .map(|(position, r)| (r.id.clone(), position))
            .collect();
        Self { retailers, index }
    }

    pub fn get(&self, id: &str) -> Option<&RetailerRequirement> {
        self.index.get(id).map(|&position| &self.retailers[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &RetailerRequirement> {
        self.retailers.iter()
    }

    pub fn actively_expanding(&self) -> impl Iterator<Item = &RetailerRequirement> {
        self.retailers.iter().filter(|r| r.actively_expanding)
    }

    pub fn as_slice(&self) -> &[RetailerRequirement] {
        &self.retailers
    }

    pub fn len(&self) -> usize {
        self.retailers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.retailers.is_empty()
    }
}

impl Default for RetailerDataset {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_passes_validation() {
        let catalog = CategoryCatalog::new(builtin_categories());
        assert!(catalog.is_ok(), "{:?}", catalog.err());
    }

    #[test]
    fn test_builtin_dataset_passes_validation() {
        let dataset = RetailerDataset::new(builtin_retailers());
        assert!(dataset.is_ok(), "{:?}", dataset.err());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = CategoryCatalog::builtin();
        assert_eq!(catalog.get("big_box").map(|c| c.lot_size_min), Some(8.0));
        assert!(catalog.get("spaceport").is_none());

        let dataset = RetailerDataset::builtin();
        assert_eq!(dataset.get("aldi").map(|r| r.name.as_str()), Some("Aldi"));
    }

    #[test]
    fn test_rejects_inverted_vpd() {
        let mut categories = builtin_categories();
        categories[0].min_vpd = categories[0].ideal_vpd + 1;

        let err = CategoryCatalog::new(categories).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRecord { .. }));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut retailers = builtin_retailers();
        let duplicate = retailers[0].clone();
        retailers.push(duplicate);

        let err = RetailerDataset::new(retailers).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId("dollar-general".to_string()));
    }

    #[test]
    fn test_rejects_inverted_income_band() {
        let mut retailers = builtin_retailers();
        retailers[3].min_median_income = Some(100_000);
        retailers[3].max_median_income = Some(50_000);

        assert!(RetailerDataset::new(retailers).is_err());
    }

    #[test]
    fn test_actively_expanding_skips_closing_chains() {
        let dataset = RetailerDataset::builtin();
        assert!(dataset.actively_expanding().all(|r| r.id != "walgreens"));
        assert!(dataset.actively_expanding().count() < dataset.len());
    }
}
