//! Fixed table of known locations and tolerant name lookup.

use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Known locations in lookup order. Substring matches return the first hit,
/// so order matters.
const LOCATIONS: &[(&str, f64, f64)] = &[
    ("Los Angeles, USA", 34.0522, -118.2437),
    ("New York, USA", 40.7128, -74.0060),
    ("London, UK", 51.5074, -0.1278),
    ("Tokyo, Japan", 35.6762, 139.6503),
    ("Singapore", 1.3521, 103.8198),
    ("Dubai, UAE", 25.2048, 55.2708),
    ("Sydney, Australia", -33.8688, 151.2093),
    ("Mumbai, India", 19.0760, 72.8777),
    ("Shanghai, China", 31.2304, 121.4737),
    ("Delhi, India", 28.7041, 77.1025),
    ("Amsterdam, Netherlands", 52.3676, 4.9041),
    ("Frankfurt, Germany", 50.1109, 8.6821),
    ("Hong Kong", 22.3193, 114.1694),
    ("San Francisco, USA", 37.7749, -122.4194),
    ("São Paulo, Brazil", -23.5505, -46.6333),
    ("Mexico City, Mexico", 19.4326, -99.1332),
    ("Toronto, Canada", 43.6532, -79.3832),
    ("Cairo, Egypt", 30.0444, 31.2357),
    ("Moscow, Russia", 55.7558, 37.6173),
    ("Bangkok, Thailand", 13.7563, 100.5018),
    ("Jakarta, Indonesia", -6.2088, 106.8456),
    ("Seoul, South Korea", 37.5665, 126.9780),
    ("Paris, France", 48.8566, 2.3522),
    ("Rome, Italy", 41.9028, 12.4964),
    ("Madrid, Spain", 40.4168, -3.7038),
    ("Berlin, Germany", 52.5200, 13.4050),
    ("Vienna, Austria", 48.2082, 16.3738),
    ("Brussels, Belgium", 50.8503, 4.3517),
    ("Stockholm, Sweden", 59.3293, 18.0686),
    ("Warsaw, Poland", 52.2297, 21.0122),
];

fn coords(lat: f64, lng: f64) -> Coordinates {
    Coordinates { lat, lng }
}

/// Number of entries in the gazetteer
pub fn location_count() -> usize {
    LOCATIONS.len()
}

/// All known location names, in lookup order
pub fn known_locations() -> impl Iterator<Item = &'static str> {
    LOCATIONS.iter().map(|(name, _, _)| *name)
}

/// Resolve a location name to coordinates.
///
/// Tries, in order: exact name, substring containment in either direction,
/// then the pre-comma city token contained in a known name.
pub fn resolve_coordinates(name: &str) -> Option<Coordinates> {
    if name.trim().is_empty() {
        return None;
    }

    if let Some((_, lat, lng)) = LOCATIONS.iter().find(|(known, _, _)| *known == name) {
        return Some(coords(*lat, *lng));
    }

    if let Some((_, lat, lng)) = LOCATIONS
        .iter()
        .find(|(known, _, _)| name.contains(known) || known.contains(name))
    {
        return Some(coords(*lat, *lng));
    }

    let city = city_token(name);
    if city.is_empty() {
        return None;
    }

    LOCATIONS
        .iter()
        .find(|(known, _, _)| known.contains(city))
        .map(|(_, lat, lng)| coords(*lat, *lng))
}

/// Leading comma-separated segment, trimmed ("Berlin, Germany" -> "Berlin")
pub fn city_token(name: &str) -> &str {
    name.split(',').next().unwrap_or(name).trim()
}

/// Trailing comma-separated segment, trimmed; the whole name if there is no comma
pub fn region_token(name: &str) -> &str {
    match name.rsplit_once(',') {
        Some((_, region)) => region.trim(),
        None => name,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Continent {
    NorthAmerica,
    SouthAmerica,
    Europe,
    Asia,
    Australia,
    Africa,
    Unknown,
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Europe => "Europe",
            Continent::Asia => "Asia",
            Continent::Australia => "Australia",
            Continent::Africa => "Africa",
            Continent::Unknown => "Unknown",
        };
        write!(f, "{}", s)
    }
}

// Country keywords are checked before city keywords.
const COUNTRY_KEYWORDS: &[(Continent, &[&str])] = &[
    (Continent::NorthAmerica, &["usa", "canada", "mexico"]),
    (Continent::SouthAmerica, &["brazil", "argentina"]),
    (
        Continent::Europe,
        &["uk", "germany", "france", "italy", "spain", "russia"],
    ),
    (
        Continent::Asia,
        &["china", "japan", "korea", "india", "singapore", "thailand"],
    ),
    (Continent::Australia, &["australia"]),
    (Continent::Africa, &["egypt", "nigeria", "south africa"]),
];

const CITY_KEYWORDS: &[(Continent, &[&str])] = &[
    (
        Continent::NorthAmerica,
        &["new york", "los angeles", "chicago", "toronto", "mexico city"],
    ),
    (
        Continent::Europe,
        &["london", "paris", "berlin", "rome", "madrid"],
    ),
    (
        Continent::Asia,
        &["tokyo", "beijing", "delhi", "mumbai", "shanghai", "hong kong"],
    ),
    (Continent::Australia, &["sydney", "melbourne"]),
    (Continent::Africa, &["cairo", "lagos"]),
    (Continent::SouthAmerica, &["são paulo", "sao paulo", "buenos aires"]),
];

/// Guess the continent of a location from keywords in its name
pub fn continent_of(location: &str) -> Continent {
    let lower = location.to_lowercase();

    COUNTRY_KEYWORDS
        .iter()
        .chain(CITY_KEYWORDS.iter())
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(continent, _)| *continent)
        .unwrap_or(Continent::Unknown)
}

/// Two locations on different continents are assumed to have an ocean between them
pub fn has_ocean_between(origin: &str, destination: &str) -> bool {
    continent_of(origin) != continent_of(destination)
}
