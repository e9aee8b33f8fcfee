use std::fmt;

use serde::{Deserialize, Serialize};

use crate::i18n::{Locale, LocalizedText};

pub mod category;

use category::Category;

/// Identifier of a venue record. Ids come from the hand-authored data set
/// and are stable but not contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(pub u32);

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Geographic coordinate pair, WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Rectangular geographic bounds, south-west and north-east corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub const fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Whether a position lies inside the bounds.
    pub fn contains(&self, position: LatLng) -> bool {
        position.lat >= self.south_west.lat
            && position.lat <= self.north_east.lat
            && position.lng >= self.south_west.lng
            && position.lng <= self.north_east.lng
    }

    /// Clamps a position onto the bounds, the hard-edge behavior the map
    /// canvas applies when panning past the city limits.
    pub fn clamp(&self, position: LatLng) -> LatLng {
        LatLng {
            lat: position.lat.clamp(self.south_west.lat, self.north_east.lat),
            lng: position.lng.clamp(self.south_west.lng, self.north_east.lng),
        }
    }
}

/// A single point-of-interest record shown on the map.
///
/// Records are immutable after construction; the full set is fixed at
/// process start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub names: LocalizedText,
    pub category: Category,
    pub position: LatLng,
    pub hours: String,
    pub schedule: String,
    pub address: String,
    pub contact: String,
    pub link: Option<String>,
    pub description: Option<String>,
}

impl Place {
    /// Display name under the given locale (override when authored, default
    /// name otherwise).
    pub fn name(&self, locale: Locale) -> &str {
        self.names.resolve(locale)
    }

    /// Whether the already-lowercased search needle matches this place's
    /// names under the given locale.
    pub(crate) fn matches_search(&self, locale: Locale, needle_lower: &str) -> bool {
        self.names.matches(locale, needle_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_contains_and_clamp() {
        let bounds = LatLngBounds::new(LatLng::new(56.19, 43.75), LatLng::new(56.40, 44.15));
        assert!(bounds.contains(LatLng::new(56.3287, 44.002)));
        assert!(!bounds.contains(LatLng::new(55.75, 37.62)));

        let clamped = bounds.clamp(LatLng::new(55.75, 37.62));
        assert_eq!(clamped, LatLng::new(56.19, 43.75));
        // Positions already inside are untouched
        let inside = LatLng::new(56.30, 44.00);
        assert_eq!(bounds.clamp(inside), inside);
    }

    #[test]
    fn test_place_name_resolution() {
        let place = Place {
            id: PlaceId(3),
            names: LocalizedText::new("Арсенал").with(Locale::En, "Arsenal"),
            category: Category::Museum,
            position: LatLng::new(56.328139, 44.0065),
            hours: "вт-вс 12:00–20:00".to_string(),
            schedule: "Выставки".to_string(),
            address: "Кремль, 6".to_string(),
            contact: "+7 831 422-75-55".to_string(),
            link: None,
            description: None,
        };
        assert_eq!(place.name(Locale::En), "Arsenal");
        assert_eq!(place.name(Locale::Zh), "Арсенал");
    }
}
