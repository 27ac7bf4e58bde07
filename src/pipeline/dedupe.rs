use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::pipeline::normalize::{normalize_phone, parse_review_count, slugify};
use crate::types::RawRecord;

/// Identity of a real-world venue within one run: slugified name plus the
/// postal code, falling back to the normalized phone when the postal code is
/// empty.
pub type DedupeKey = (String, String);

pub fn dedupe_key(record: &RawRecord) -> DedupeKey {
    let name = slugify(&record.name);
    let postal_code = record.postal_code.trim();
    let qualifier = if !postal_code.is_empty() {
        postal_code.to_string()
    } else {
        normalize_phone(&record.phone).unwrap_or_default()
    };
    (name, qualifier)
}

/// Collapse rows sharing a dedupe key, keeping the most credible variant.
///
/// Single pass; output preserves the first-seen order of surviving keys. A
/// held row is replaced only when the candidate's parsed review count
/// (missing counts as 0) is strictly greater, so ties keep the first-seen
/// row. Idempotent.
pub fn dedupe_rows(rows: Vec<RawRecord>) -> Vec<RawRecord> {
    let mut key_order: Vec<DedupeKey> = Vec::new();
    let mut survivors: HashMap<DedupeKey, RawRecord> = HashMap::new();

    for row in rows {
        let key = dedupe_key(&row);
        match survivors.entry(key.clone()) {
            Entry::Vacant(slot) => {
                key_order.push(key);
                slot.insert(row);
            }
            Entry::Occupied(mut slot) => {
                let held = parse_review_count(&slot.get().reviews).unwrap_or(0);
                let candidate = parse_review_count(&row.reviews).unwrap_or(0);
                if candidate > held {
                    slot.insert(row);
                }
            }
        }
    }

    key_order
        .into_iter()
        .filter_map(|key| survivors.remove(&key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, postal_code: &str, phone: &str, reviews: &str) -> RawRecord {
        RawRecord {
            name: name.to_string(),
            postal_code: postal_code.to_string(),
            phone: phone.to_string(),
            reviews: reviews.to_string(),
            ..RawRecord::default()
        }
    }

    #[test]
    fn key_prefers_postal_code_over_phone() {
        let record = row("Toit Brewpub", "560038", "080-1234-5678", "10");
        assert_eq!(
            dedupe_key(&record),
            ("toit-brewpub".to_string(), "560038".to_string())
        );
    }

    #[test]
    fn key_falls_back_to_phone_then_empty() {
        let with_phone = row("Toit Brewpub", "  ", "98765 43210", "10");
        assert_eq!(
            dedupe_key(&with_phone),
            ("toit-brewpub".to_string(), "+919876543210".to_string())
        );

        let bare = row("Toit Brewpub", "", "", "10");
        assert_eq!(dedupe_key(&bare), ("toit-brewpub".to_string(), String::new()));
    }

    #[test]
    fn survivor_has_the_highest_review_count() {
        let rows = vec![
            row("Toit Brewpub", "560038", "", "10"),
            row("Toit  Brewpub", "560038", "", "200"),
            row("Toit Brewpub!", "560038", "", "80"),
        ];

        let deduped = dedupe_rows(rows);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].reviews, "200");
    }

    #[test]
    fn ties_keep_the_first_seen_row() {
        let first = row("Arbor", "560001", "", "50");
        let mut second = first.clone();
        second.description = "later variant".to_string();

        let deduped = dedupe_rows(vec![first.clone(), second]);
        assert_eq!(deduped, vec![first]);
    }

    #[test]
    fn missing_review_counts_are_treated_as_zero() {
        let rows = vec![
            row("Arbor", "560001", "", ""),
            row("Arbor", "560001", "", "1"),
        ];

        let deduped = dedupe_rows(rows);
        assert_eq!(deduped[0].reviews, "1");
    }

    #[test]
    fn output_preserves_first_seen_order() {
        let rows = vec![
            row("Arbor", "560001", "", "10"),
            row("Toit", "560038", "", "10"),
            row("Arbor", "560001", "", "99"),
            row("Byg Brewski", "560043", "", "10"),
        ];

        let deduped = dedupe_rows(rows);
        let names: Vec<&str> = deduped.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Arbor", "Toit", "Byg Brewski"]);
    }

    #[test]
    fn dedupe_is_idempotent() {
        let rows = vec![
            row("Arbor", "560001", "", "10"),
            row("Arbor", "560001", "", "99"),
            row("Toit", "", "080-1234-5678", "50"),
        ];

        let once = dedupe_rows(rows);
        let twice = dedupe_rows(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn distinct_qualifiers_are_distinct_venues() {
        let rows = vec![
            row("Chulha Chauki Da Dhaba", "560066", "", "10"),
            row("Chulha Chauki Da Dhaba", "560100", "", "10"),
        ];

        assert_eq!(dedupe_rows(rows).len(), 2);
    }
}
