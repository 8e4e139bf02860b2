use serde::{de::DeserializeOwned, Deserialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::{CatalogError, CategoryCatalog, RetailerDataset};
use crate::models::{CategoryRequirement, RetailerRequirement};

/// Errors that can occur when loading reference data overrides
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid reference data: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Unsupported reference data format: {0}")]
    UnsupportedFormat(String),
}

/// On-disk encoding of a reference data file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Toml,
}

impl DataFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self, ReferenceDataError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(ReferenceDataError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

/// TOML has no top-level arrays, so records sit under a named table
#[derive(Debug, Deserialize)]
struct CategoryFile {
    categories: Vec<CategoryRequirement>,
}

#[derive(Debug, Deserialize)]
struct RetailerFile {
    retailers: Vec<RetailerRequirement>,
}

fn read(path: &Path) -> Result<String, ReferenceDataError> {
    std::fs::read_to_string(path).map_err(|source| ReferenceDataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_records<T, W>(
    text: &str,
    format: DataFormat,
    unwrap: impl FnOnce(W) -> Vec<T>,
) -> Result<Vec<T>, ReferenceDataError>
where
    T: DeserializeOwned,
    W: DeserializeOwned,
{
    match format {
        DataFormat::Json => Ok(serde_json::from_str(text)?),
        DataFormat::Toml => Ok(unwrap(toml::from_str(text)?)),
    }
}

/// Parse and validate a category catalog
///
/// JSON files hold a bare array; TOML files hold `[[categories]]` tables.
pub fn parse_categories(text: &str, format: DataFormat) -> Result<CategoryCatalog, ReferenceDataError> {
    let records = parse_records(text, format, |file: CategoryFile| file.categories)?;
    Ok(CategoryCatalog::new(records)?)
}

/// Parse and validate a retailer dataset
///
/// JSON files hold a bare array; TOML files hold `[[retailers]]` tables.
pub fn parse_retailers(text: &str, format: DataFormat) -> Result<RetailerDataset, ReferenceDataError> {
    let records = parse_records(text, format, |file: RetailerFile| file.retailers)?;
    Ok(RetailerDataset::new(records)?)
}

/// Load the category catalog, falling back to the built-in table
pub fn load_categories(path: Option<&Path>) -> Result<CategoryCatalog, ReferenceDataError> {
    match path {
        Some(path) => {
            let catalog = parse_categories(&read(path)?, DataFormat::from_path(path)?)?;
            tracing::info!("Loaded {} categories from {}", catalog.len(), path.display());
            Ok(catalog)
        }
        None => Ok(CategoryCatalog::builtin()),
    }
}

/// Load the retailer dataset, falling back to the built-in table
pub fn load_retailers(path: Option<&Path>) -> Result<RetailerDataset, ReferenceDataError> {
    match path {
        Some(path) => {
            let dataset = parse_retailers(&read(path)?, DataFormat::from_path(path)?)?;
            tracing::info!("Loaded {} retailers from {}", dataset.len(), path.display());
            Ok(dataset)
        }
        None => Ok(RetailerDataset::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORY_JSON: &str = r#"[
        {
            "id": "coffee_shop",
            "name": "Coffee Shop",
            "minVpd": 12000,
            "idealVpd": 20000,
            "incomePreferences": ["middle", "upper_middle"],
            "lotSizeMin": 0.3,
            "lotSizeIdeal": 0.75,
            "exampleBrands": ["Starbucks"]
        }
    ]"#;

    const RETAILER_TOML: &str = r#"
        [[retailers]]
        id = "aldi"
        name = "ALDI"
        category = "grocery"
        lotSizeMin = 2.0
        lotSizeMax = 3.5
        minVpd = 15000
        idealVpd = 25000
        incomePreferences = ["low", "moderate", "middle"]
        expansionRegions = ["National"]

        [retailers.franchise]
        franchiseAvailable = false
    "#;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DataFormat::from_path(Path::new("a/b.json")).unwrap(), DataFormat::Json);
        assert_eq!(DataFormat::from_path(Path::new("b.TOML")).unwrap(), DataFormat::Toml);
        assert!(matches!(
            DataFormat::from_path(Path::new("b.yaml")),
            Err(ReferenceDataError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_parse_json_categories() {
        let catalog = parse_categories(CATEGORY_JSON, DataFormat::Json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("coffee_shop").unwrap().ideal_vpd, 20_000);
    }

    #[test]
    fn test_parse_toml_retailers() {
        let dataset = parse_retailers(RETAILER_TOML, DataFormat::Toml).unwrap();
        let aldi = dataset.get("aldi").unwrap();
        assert!(aldi.actively_expanding);
        assert_eq!(aldi.min_median_income, None);
    }

    #[test]
    fn test_invalid_record_rejected() {
        let bad = CATEGORY_JSON.replace("\"idealVpd\": 20000", "\"idealVpd\": 1000");
        let err = parse_categories(&bad, DataFormat::Json).unwrap_err();
        assert!(matches!(err, ReferenceDataError::Catalog(CatalogError::InvalidRecord { .. })));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = parse_categories("{ not json", DataFormat::Json).unwrap_err();
        assert!(matches!(err, ReferenceDataError::Json(_)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = std::env::temp_dir().join(format!("{}.json", uuid::Uuid::new_v4()));
        let err = load_categories(Some(&path)).unwrap_err();
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, RETAILER_TOML).unwrap();

        let dataset = load_retailers(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_fallback_to_builtin() {
        assert_eq!(load_categories(None).unwrap().len(), CategoryCatalog::builtin().len());
        assert_eq!(load_retailers(None).unwrap().len(), RetailerDataset::builtin().len());
    }
}
