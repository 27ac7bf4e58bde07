use crate::constants::{NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS};
use crate::types::RawRecord;

/// Decide whether a row belongs to the pub category from its free-text name
/// and description.
///
/// A positive keyword keeps the row even when a negative keyword also
/// matches, and rows matching neither set are kept: sparse descriptions must
/// not produce false negatives.
pub fn classify(record: &RawRecord) -> bool {
    let combined = format!(
        "{} {}",
        record.name.to_lowercase(),
        record.description.to_lowercase()
    );

    if POSITIVE_KEYWORDS.iter().any(|word| combined.contains(word)) {
        return true;
    }
    if NEGATIVE_KEYWORDS.iter().any(|word| combined.contains(word)) {
        return false;
    }
    true
}
