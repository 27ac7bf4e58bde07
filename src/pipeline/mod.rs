pub mod classify;
pub mod dedupe;
pub mod normalize;
pub mod validate;

use chrono::Utc;
use tracing::{debug, info};

use crate::config::IngestionConfig;
use crate::types::{IngestReport, RawRecord, RunSummary, SkipEntry, SkipReason};

use self::classify::classify;
use self::dedupe::dedupe_rows;
use self::normalize::normalize_row;
use self::validate::{is_valid_city, passes_review_filters, validate_maps_url};

/// Run the gate checks for one row in their fixed order. The first failing
/// check wins; changing this order changes which reason multi-failure rows
/// report, which is user-visible in the skip report.
fn skip_reason(record: &RawRecord, config: &IngestionConfig) -> Option<SkipReason> {
    if !is_valid_city(record, config) {
        return Some(SkipReason::InvalidCity);
    }
    if !classify(record) {
        return Some(SkipReason::ClassificationExcluded);
    }
    if !passes_review_filters(record, config) {
        return Some(SkipReason::FailedThreshold);
    }
    if !validate_maps_url(&record.location_link) {
        return Some(SkipReason::InvalidMapsUrl);
    }
    None
}

/// Run the whole row-level pipeline: dedupe, gate, normalize, partition.
///
/// Every post-dedupe row lands in exactly one of the report's `imported` or
/// `skipped` sets; input rows are only read, never mutated.
pub fn ingest(rows: Vec<RawRecord>, config: &IngestionConfig) -> IngestReport {
    let input_rows = rows.len();
    let deduped = dedupe_rows(rows);
    let post_dedupe = deduped.len();
    info!(input_rows, post_dedupe, "deduplicated source rows");

    let mut imported = Vec::new();
    let mut skipped = Vec::new();

    for row in &deduped {
        match skip_reason(row, config) {
            Some(reason) => {
                debug!(name = %row.name, ?reason, "row skipped");
                skipped.push(SkipEntry {
                    name: row.name.clone(),
                    reason,
                });
            }
            None => imported.push(normalize_row(row)),
        }
    }

    info!(
        imported = imported.len(),
        skipped = skipped.len(),
        "partitioned rows"
    );

    IngestReport {
        summary: RunSummary {
            input_rows,
            post_dedupe,
            imported: imported.len(),
            skipped: skipped.len(),
            timestamp: Utc::now(),
        },
        imported,
        skipped,
    }
}
