use url::Url;

use crate::config::IngestionConfig;
use crate::constants::{BENGALURU_ALIASES, MAPS_URL_HOSTS};
use crate::pipeline::normalize::{parse_rating, parse_review_count};
use crate::types::RawRecord;

/// A row belongs to the run's city when its city field is one of the accepted
/// spelling variants and its country (or the configured default, when the
/// field is empty) matches the configured country.
pub fn is_valid_city(record: &RawRecord, config: &IngestionConfig) -> bool {
    let city = record.city.to_lowercase();
    let country = if record.country.is_empty() {
        config.default_country.clone()
    } else {
        record.country.to_lowercase()
    };
    BENGALURU_ALIASES.contains(&city.as_str()) && country == config.default_country
}

/// Structural map-link check: https scheme, a known map host, and a path
/// under /maps. Never touches the network.
pub fn validate_maps_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    if parsed.scheme() != "https" {
        return false;
    }
    if !parsed
        .host_str()
        .is_some_and(|host| MAPS_URL_HOSTS.contains(&host))
    {
        return false;
    }
    parsed.path().starts_with("/maps")
}

/// Review/rating quality gate. Both fields must parse; a row caught inside a
/// band is rescued by either enough reviews or a high-enough rating, and both
/// bands must pass independently.
pub fn passes_review_filters(record: &RawRecord, config: &IngestionConfig) -> bool {
    let (Some(rating), Some(reviews)) = (
        parse_rating(&record.rating),
        parse_review_count(&record.reviews),
    ) else {
        return false;
    };
    if reviews < config.min_reviews_very_low && rating < config.min_rating_very_low {
        return false;
    }
    if reviews < config.min_reviews_low_rating && rating < config.min_rating_low_reviews {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_in(city: &str, country: &str) -> RawRecord {
        RawRecord {
            city: city.to_string(),
            country: country.to_string(),
            ..RawRecord::default()
        }
    }

    fn rated(rating: &str, reviews: &str) -> RawRecord {
        RawRecord {
            rating: rating.to_string(),
            reviews: reviews.to_string(),
            ..RawRecord::default()
        }
    }

    #[test]
    fn accepts_known_city_spellings() {
        let config = IngestionConfig::default();
        assert!(is_valid_city(&record_in("Bangalore", "India"), &config));
        assert!(is_valid_city(&record_in("BENGALURU", "india"), &config));
        assert!(is_valid_city(&record_in("Bengalooru", ""), &config));
    }

    #[test]
    fn rejects_other_cities_and_countries() {
        let config = IngestionConfig::default();
        assert!(!is_valid_city(&record_in("Mysore", "India"), &config));
        assert!(!is_valid_city(&record_in("Bangalore", "Nepal"), &config));
        assert!(!is_valid_city(&record_in("", ""), &config));
    }

    #[test]
    fn empty_country_falls_back_to_configured_default() {
        let config = IngestionConfig::default();
        assert!(is_valid_city(&record_in("Bangalore", ""), &config));
    }

    #[test]
    fn maps_url_requires_https_known_host_and_maps_path() {
        assert!(validate_maps_url(
            "https://www.google.com/maps/place/Toit/@12.9,77.6"
        ));
        assert!(validate_maps_url("https://maps.app.goo.gl/maps/xyz"));
        assert!(!validate_maps_url("http://www.google.com/maps/place/Toit"));
        assert!(!validate_maps_url("https://goo.gl/maps/xyz"));
        assert!(!validate_maps_url("https://www.google.com/search?q=toit"));
        assert!(!validate_maps_url(""));
        assert!(!validate_maps_url("not a url"));
    }

    #[test]
    fn unparseable_rating_or_reviews_fail_the_gate() {
        let config = IngestionConfig::default();
        assert!(!passes_review_filters(&rated("", "100"), &config));
        assert!(!passes_review_filters(&rated("4.2", ""), &config));
        assert!(!passes_review_filters(&rated("good", "many"), &config));
    }

    #[test]
    fn rows_below_both_floors_fail() {
        let config = IngestionConfig::default();
        // reviews 5 < 10 and rating 2.0 < 3.5
        assert!(!passes_review_filters(&rated("2.0", "5"), &config));
    }

    #[test]
    fn either_reviews_or_rating_rescue_each_band() {
        let config = IngestionConfig::default();
        // 5 reviews but a 4.8 rating beats the absolute floor, and 4.8 >= 3.0
        // clears the secondary band too
        assert!(passes_review_filters(&rated("4.8", "5"), &config));
        // 200 reviews clear both review floors regardless of rating
        assert!(passes_review_filters(&rated("2.1", "200"), &config));
        // 20 reviews clear the absolute floor but 2.5 < 3.0 with 20 < 50
        // still trips the secondary band
        assert!(!passes_review_filters(&rated("2.5", "20"), &config));
    }
}
