//! UI state snapshot and the event reducer that advances it.
//!
//! The state is a plain value. `reduce` never mutates in place, so a caller
//! can keep a history of snapshots or share them across threads freely.

use serde::{Deserialize, Serialize};

use crate::catalog::{PlaceCatalog, PlaceFilter};
use crate::domain::category::CategoryFilter;
use crate::domain::{LatLng, Place};
use crate::i18n::Locale;
use crate::map::{CITY_VIEWPORT, LOCATE_ZOOM};

/// Light or dark chrome around the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Current camera position, as opposed to the static limits in
/// [`crate::map::Viewport`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: CITY_VIEWPORT.center,
            zoom: CITY_VIEWPORT.zoom,
        }
    }
}

/// Everything the page needs to render, minus the catalog itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppState {
    pub category: CategoryFilter,
    pub search: String,
    pub locale: Locale,
    pub theme: Theme,
    pub view: MapView,
}

/// User interactions that can change [`AppState`].
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    CategorySelected(CategoryFilter),
    SearchChanged(String),
    LocaleChanged(Locale),
    ThemeToggled,
    Located(LatLng),
}

impl AppState {
    /// Applies one event and returns the next state.
    pub fn reduce(&self, event: AppEvent) -> AppState {
        let mut next = self.clone();
        match event {
            AppEvent::CategorySelected(category) => next.category = category,
            AppEvent::SearchChanged(search) => next.search = search,
            AppEvent::LocaleChanged(locale) => next.locale = locale,
            AppEvent::ThemeToggled => next.theme = next.theme.toggled(),
            AppEvent::Located(position) => {
                // A reported position outside the city still has to land
                // inside the camera limits.
                next.view = MapView {
                    center: CITY_VIEWPORT.max_bounds.clamp(position),
                    zoom: LOCATE_ZOOM,
                };
            }
        }
        next
    }

    /// The catalog filter this state describes.
    pub fn filter(&self) -> PlaceFilter {
        PlaceFilter {
            category: self.category,
            search: self.search.clone(),
            locale: self.locale,
        }
    }

    /// Venues visible under this state, in catalog order.
    pub fn visible<'a>(&self, catalog: &'a PlaceCatalog) -> Vec<&'a Place> {
        catalog.filter(&self.filter())
    }
}
