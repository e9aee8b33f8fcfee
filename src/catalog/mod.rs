use serde::{Deserialize, Serialize};

use crate::domain::category::CategoryFilter;
use crate::domain::{Place, PlaceId};
use crate::i18n::Locale;

mod places;

pub use places::places;

/// Filter arguments: the active category selection, the raw search string
/// and the active locale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlaceFilter {
    pub category: CategoryFilter,
    pub search: String,
    pub locale: Locale,
}

impl PlaceFilter {
    pub fn new(category: CategoryFilter, search: impl Into<String>, locale: Locale) -> Self {
        Self {
            category,
            search: search.into(),
            locale,
        }
    }

    /// The initial filter: every category, empty search.
    pub fn all(locale: Locale) -> Self {
        Self::new(CategoryFilter::All, "", locale)
    }
}

/// The venue catalog, held in authoring order for the process lifetime.
#[derive(Debug, Clone)]
pub struct PlaceCatalog {
    places: Vec<Place>,
}

impl PlaceCatalog {
    /// Catalog over the built-in venue list.
    pub fn builtin() -> Self {
        Self::new(places().to_vec())
    }

    pub fn new(places: Vec<Place>) -> Self {
        Self { places }
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn get(&self, id: PlaceId) -> Option<&Place> {
        self.places.iter().find(|place| place.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Place> {
        self.places.iter()
    }

    /// Selects the places matching the filter, preserving catalog order.
    ///
    /// A place passes when its category survives the selection and the
    /// lowercased search string occurs in its lowercased default name or,
    /// where an override for the active locale exists, in that override.
    /// An empty search matches every place. Pure: same inputs, same result.
    pub fn filter(&self, filter: &PlaceFilter) -> Vec<&Place> {
        let needle = filter.search.to_lowercase();
        self.places
            .iter()
            .filter(|place| filter.category.matches(place.category))
            .filter(|place| place.matches_search(filter.locale, &needle))
            .collect()
    }
}
