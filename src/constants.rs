use once_cell::sync::Lazy;
use regex::Regex;

/// Accepted lowercase spelling variants for the target city.
pub const BENGALURU_ALIASES: &[&str] = &["bengaluru", "bangalore", "bengalooru"];

/// Keywords that affirm the pub category. Any hit keeps the row, even when a
/// negative keyword also matches.
pub const POSITIVE_KEYWORDS: &[&str] = &[
    "pub",
    "bar",
    "brew",
    "brewery",
    "taproom",
    "restobar",
    "gastropub",
    "night",
    "ale",
    "club",
];

/// Keywords that exclude a row when no positive keyword matched.
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "hotel",
    "lodging",
    "cafe",
    "restaurant",
    "canteen",
    "dhaba",
    "mess",
    "biryani",
];

/// Known locality name patterns, scanned left-to-right against the full
/// address. Internal whitespace variants are part of the pattern.
pub const LOCALITY_PATTERNS: &[&str] = &[
    r"koramangala",
    r"indiranagar",
    r"whitefield",
    r"mg\s+road",
    r"church\s+street",
    r"hsr\s+layout",
    r"jp\s*nagar",
    r"jayanagar",
    r"banashankari",
    r"rajajinagar",
    r"brigade\s*road",
    r"ulsoor",
    r"vittal\s+mallya",
    r"bellandur",
    r"hebbal",
    r"btm\s+layout",
    r"yelahanka",
    r"hoodi",
];

/// Single alternation over [`LOCALITY_PATTERNS`], compiled once.
pub static LOCALITY_REGEX: Lazy<Regex> = Lazy::new(|| {
    let joined = LOCALITY_PATTERNS
        .iter()
        .map(|p| format!("({p})"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i){joined}")).unwrap()
});

/// Hosts a structurally valid map link may point at.
pub const MAPS_URL_HOSTS: &[&str] = &["www.google.com", "maps.app.goo.gl"];

/// Business status assumed when the source omits one.
pub const DEFAULT_BUSINESS_STATUS: &str = "OPERATIONAL";

/// Skipped/post-dedupe ratio above which the run signals a data-quality
/// regression via its exit code.
pub const MAX_SKIP_RATIO: f64 = 0.15;
