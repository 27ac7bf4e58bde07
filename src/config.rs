use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Review/rating thresholds and run options for one ingestion pass.
///
/// Loaded once at startup and never mutated afterwards. All numeric
/// thresholds are non-negative; `default_country` is compared lowercase.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IngestionConfig {
    /// Reviews below this count need `min_rating_low_reviews` to survive.
    pub min_reviews_low_rating: i64,
    /// Rating floor for rows caught by the low-review band.
    pub min_rating_low_reviews: f64,
    /// Absolute rejection floor on review count.
    pub min_reviews_very_low: i64,
    /// Absolute rejection floor on rating.
    pub min_rating_very_low: f64,
    /// Country accepted when a row omits one.
    pub default_country: String,
    /// Whether downstream persistence is skipped. CLI-controlled, not read
    /// from the override document.
    #[serde(skip)]
    pub dry_run: bool,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            min_reviews_low_rating: 50,
            min_rating_low_reviews: 3.0,
            min_reviews_very_low: 10,
            min_rating_very_low: 3.5,
            default_country: "india".to_string(),
            dry_run: true,
        }
    }
}

impl IngestionConfig {
    /// Load thresholds, applying overrides from an optional JSON document.
    /// Keys absent from the document keep their defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(config_path) => {
                let config_content = fs::read_to_string(config_path).map_err(|e| {
                    IngestError::Config(format!(
                        "Failed to read config file '{}': {}",
                        config_path.display(),
                        e
                    ))
                })?;
                serde_json::from_str::<IngestionConfig>(&config_content)?
            }
            None => IngestionConfig::default(),
        };
        if config.min_reviews_low_rating < 0
            || config.min_reviews_very_low < 0
            || config.min_rating_low_reviews < 0.0
            || config.min_rating_very_low < 0.0
        {
            return Err(IngestError::Config(
                "review/rating thresholds must be non-negative".to_string(),
            ));
        }
        config.default_country = config.default_country.to_lowercase();
        Ok(config)
    }
}
