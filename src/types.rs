use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::MAX_SKIP_RATIO;

/// One row of the scraped directory-listing export, exactly as the CSV
/// carries it. Columns missing from the export deserialize as empty strings;
/// the same physical venue may appear multiple times with divergent field
/// completeness.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawRecord {
    pub name: String,
    pub description: String,
    pub phone: String,
    pub rating: String,
    pub reviews: String,
    pub full_address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub working_hours: String,
    pub location_link: String,
    pub google_maps_url: String,
    pub site: String,
    pub business_status: String,
}

/// A cleaned listing ready for the directory upsert payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedRecord {
    pub name: String,
    /// URL-safe lowercase-hyphen form of the name.
    pub slug: String,
    pub description: Option<String>,
    /// Structurally validated map link, or null.
    pub google_maps_url: Option<String>,
    pub website_url: Option<String>,
    /// E.164-ish phone number, or null.
    pub phone: Option<String>,
    /// Lowercase business status; defaults to "operational" when absent.
    pub status: String,
    /// Rating rounded to one decimal place.
    pub average_rating: Option<f64>,
    pub review_count: Option<i64>,
    pub full_address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    /// Lowercase-keyed day -> hours mapping parsed from the raw blob.
    pub operating_hours_raw: Option<BTreeMap<String, String>>,
    /// Slug of the first known locality found in the address.
    pub locality_slug: Option<String>,
}

/// Why a row was routed to the skipped set. Exactly one reason is reported
/// per row, chosen by the gate's fixed evaluation order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    InvalidCity,
    ClassificationExcluded,
    FailedThreshold,
    InvalidMapsUrl,
}

/// One rejected row in the skip report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkipEntry {
    pub name: String,
    pub reason: SkipReason,
}

/// Aggregate counts for one ingestion run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunSummary {
    pub input_rows: usize,
    pub post_dedupe: usize,
    pub imported: usize,
    pub skipped: usize,
    pub timestamp: DateTime<Utc>,
}

/// The full output payload of an ingestion run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngestReport {
    pub summary: RunSummary,
    pub imported: Vec<NormalizedRecord>,
    pub skipped: Vec<SkipEntry>,
}

impl IngestReport {
    /// Fraction of post-dedupe rows that were skipped.
    pub fn skip_ratio(&self) -> f64 {
        if self.summary.post_dedupe == 0 {
            0.0
        } else {
            self.summary.skipped as f64 / self.summary.post_dedupe as f64
        }
    }

    /// True when the skip ratio signals a likely upstream data-quality
    /// regression rather than a bug in this pipeline.
    pub fn exceeds_skip_budget(&self) -> bool {
        self.skip_ratio() > MAX_SKIP_RATIO
    }
}
