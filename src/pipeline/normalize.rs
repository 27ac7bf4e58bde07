use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::constants::{DEFAULT_BUSINESS_STATUS, LOCALITY_REGEX};
use crate::pipeline::validate::validate_maps_url;
use crate::types::{NormalizedRecord, RawRecord};

static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").unwrap());
static SEPARATOR_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_-]+").unwrap());

/// Best-effort international phone form. Strips everything that is not a
/// digit; a bare 10-digit national number gets the +91 country prefix, a
/// 12-digit number already starting with 91 keeps its digits as-is.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    if digits.starts_with("91") && digits.len() == 12 {
        return Some(format!("+{digits}"));
    }
    if digits.len() == 10 {
        return Some(format!("+91{digits}"));
    }
    Some(format!("+{digits}"))
}

/// Lowercase-hyphen slug of a listing name. Idempotent.
pub fn slugify(value: &str) -> String {
    let lowered = value.to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(&lowered, "");
    SEPARATOR_RUNS
        .replace_all(&stripped, "-")
        .trim_matches('-')
        .to_string()
}

/// Parse a rating field and round it to one decimal place.
///
/// Rounding is arithmetic half-away-from-zero on the scaled value, so
/// "4.26" -> 4.3 and "4.25" -> 4.3.
pub fn parse_rating(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .map(|rating| (rating * 10.0).round() / 10.0)
}

/// Parse a review-count field, truncating toward zero so inputs like
/// "120.0" survive the scraper's float formatting.
pub fn parse_review_count(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().map(|count| count.trunc() as i64)
}

/// Parse the scraped working-hours blob. Anything that is not a JSON object
/// normalizes to None; keys are lower-cased and values stringified.
pub fn parse_working_hours(raw: &str) -> Option<BTreeMap<String, String>> {
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Some(
            map.into_iter()
                .map(|(key, value)| {
                    let text = match value {
                        Value::String(s) => s,
                        other => other.to_string(),
                    };
                    (key.to_lowercase(), text)
                })
                .collect(),
        ),
        _ => None,
    }
}

/// Find the first known locality mentioned in an address, as a slug.
pub fn extract_locality(address: &str) -> Option<String> {
    if address.is_empty() {
        return None;
    }
    LOCALITY_REGEX
        .find(address)
        .map(|found| slugify(found.as_str()))
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Build the cleaned output shape for a row that passed every gate check.
/// Reads the raw row; never mutates it.
pub fn normalize_row(record: &RawRecord) -> NormalizedRecord {
    let maps_url = if !record.location_link.is_empty() {
        record.location_link.as_str()
    } else {
        record.google_maps_url.as_str()
    };
    let status = if record.business_status.is_empty() {
        DEFAULT_BUSINESS_STATUS
    } else {
        record.business_status.as_str()
    };

    NormalizedRecord {
        name: record.name.clone(),
        slug: slugify(&record.name),
        description: non_empty(&record.description),
        google_maps_url: validate_maps_url(maps_url).then(|| maps_url.to_string()),
        website_url: non_empty(&record.site),
        phone: normalize_phone(&record.phone),
        status: status.to_lowercase(),
        average_rating: parse_rating(&record.rating),
        review_count: parse_review_count(&record.reviews),
        full_address: non_empty(&record.full_address),
        city: non_empty(&record.city),
        postal_code: non_empty(&record.postal_code),
        country: non_empty(&record.country),
        operating_hours_raw: parse_working_hours(&record.working_hours),
        locality_slug: extract_locality(&record.full_address),
    }
}
