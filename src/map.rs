//! Map presentation layer: marker icons, camera limits and popup cards.
//!
//! Everything here is plain data for a Leaflet-style client. Icon URLs and
//! pixel offsets mirror the `L.Icon` options the map library expects.

use serde::Serialize;

use crate::domain::category::Category;
use crate::domain::{LatLng, LatLngBounds, Place, PlaceId};
use crate::i18n::{Locale, UiText};

/// Base tile layer for the city map.
pub const TILE_URL: &str = "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png";

/// Attribution line the tile provider requires.
pub const TILE_ATTRIBUTION: &str = r#"&copy; <a href="https://carto.com/">Carto</a>"#;

/// Zoom applied when the map jumps to the visitor's position.
pub const LOCATE_ZOOM: u8 = 14;

/// Marker icon descriptor, field names match Leaflet's `L.Icon` options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerIcon {
    pub icon_url: &'static str,
    pub icon_size: (u32, u32),
    pub icon_anchor: (u32, u32),
    pub popup_anchor: (i32, i32),
}

impl Category {
    /// The pin icon drawn for venues of this category.
    pub fn icon(self) -> MarkerIcon {
        match self {
            // The museum glyph is visually heavier, so it is drawn slightly
            // smaller and its popup sits two pixels lower.
            Category::Museum => MarkerIcon {
                icon_url: "https://cdn-icons-png.flaticon.com/128/1825/1825814.png",
                icon_size: (30, 30),
                icon_anchor: (16, 32),
                popup_anchor: (0, -30),
            },
            Category::Theater => MarkerIcon {
                icon_url: "https://cdn-icons-png.flaticon.com/128/1778/1778557.png",
                icon_size: (32, 32),
                icon_anchor: (16, 32),
                popup_anchor: (0, -32),
            },
            Category::Library => MarkerIcon {
                icon_url: "https://cdn-icons-png.flaticon.com/128/3875/3875536.png",
                icon_size: (32, 32),
                icon_anchor: (16, 32),
                popup_anchor: (0, -32),
            },
            Category::Gallery => MarkerIcon {
                icon_url: "https://cdn-icons-png.flaticon.com/128/8077/8077696.png",
                icon_size: (32, 32),
                icon_anchor: (16, 32),
                popup_anchor: (0, -32),
            },
            Category::HouseOfCulture => MarkerIcon {
                icon_url: "https://cdn-icons-png.flaticon.com/128/2933/2933168.png",
                icon_size: (32, 32),
                icon_anchor: (16, 32),
                popup_anchor: (0, -32),
            },
            Category::ArtSchool => MarkerIcon {
                icon_url: "https://cdn-icons-png.flaticon.com/128/8093/8093232.png",
                icon_size: (32, 32),
                icon_anchor: (16, 32),
                popup_anchor: (0, -32),
            },
        }
    }
}

/// Camera limits for the city map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub max_bounds: LatLngBounds,
    pub max_bounds_viscosity: f64,
}

/// Default camera for Nizhny Novgorod. The bounds keep panning inside the
/// city; viscosity 1.0 makes them solid.
pub const CITY_VIEWPORT: Viewport = Viewport {
    center: LatLng::new(56.3287, 44.002),
    zoom: 13,
    min_zoom: 13,
    max_zoom: 18,
    max_bounds: LatLngBounds::new(LatLng::new(56.19, 43.75), LatLng::new(56.40, 44.15)),
    max_bounds_viscosity: 1.0,
};

/// One labelled line of a popup card, e.g. "Время работы: 10:00–18:00".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardField {
    pub label: String,
    pub value: String,
}

/// Outbound link at the bottom of a popup card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLink {
    pub label: String,
    pub href: String,
}

/// Popup content for one venue, with labels and name resolved for a locale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupCard {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: Vec<CardField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<CardLink>,
}

impl PopupCard {
    pub fn for_place(place: &Place, locale: Locale) -> Self {
        let field = |text: UiText, value: &str| CardField {
            label: text.label(locale).to_string(),
            value: value.to_string(),
        };
        Self {
            title: place.name(locale).to_string(),
            description: place.description.clone(),
            fields: vec![
                field(UiText::Hours, &place.hours),
                field(UiText::Schedule, &place.schedule),
                field(UiText::Address, &place.address),
                field(UiText::Contact, &place.contact),
            ],
            link: place.link.as_deref().map(|href| CardLink {
                label: UiText::Website.label(locale).to_string(),
                href: normalize_href(href),
            }),
        }
    }
}

/// Scheme-less venue links would resolve relative to the page, so they get
/// an https prefix before reaching an anchor tag.
fn normalize_href(href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else {
        format!("https://{href}")
    }
}

/// A venue pin ready to drop on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: PlaceId,
    pub position: LatLng,
    pub category: Category,
    pub icon: MarkerIcon,
    pub card: PopupCard,
}

/// Projects filtered places into markers, popups resolved for the locale.
/// Input order is preserved.
pub fn markers<'a, I>(places: I, locale: Locale) -> Vec<Marker>
where
    I: IntoIterator<Item = &'a Place>,
{
    places
        .into_iter()
        .map(|place| Marker {
            id: place.id,
            position: place.position,
            category: place.category,
            icon: place.category.icon(),
            card: PopupCard::for_place(place, locale),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocalizedText;

    fn gallery(link: &str) -> Place {
        Place {
            id: PlaceId(14),
            names: LocalizedText::new("FUTURO Gallery"),
            category: Category::Gallery,
            position: LatLng::new(56.329583, 43.994380),
            hours: "вт-вс 12:00–20:00".to_string(),
            schedule: "Современные арт-инсталляции".to_string(),
            address: "Рождественская улица, 6".to_string(),
            contact: "+7 (831) 213-62-62".to_string(),
            link: if link.is_empty() {
                None
            } else {
                Some(link.to_string())
            },
            description: Some("Галерея цифрового искусства.".to_string()),
        }
    }

    #[test]
    fn test_every_category_has_an_icon_with_sane_offsets() {
        for category in Category::ALL {
            let icon = category.icon();
            assert!(icon.icon_url.ends_with(".png"));
            assert_eq!(icon.icon_anchor, (16, 32));
            assert!(icon.popup_anchor.1 < 0, "popup must open above the pin");
        }
        // One glyph is rendered smaller than the rest
        assert_eq!(Category::Museum.icon().icon_size, (30, 30));
        assert_eq!(Category::Theater.icon().icon_size, (32, 32));
    }

    #[test]
    fn test_city_viewport_limits() {
        assert_eq!(CITY_VIEWPORT.zoom, 13);
        assert_eq!(CITY_VIEWPORT.min_zoom, 13);
        assert_eq!(CITY_VIEWPORT.max_zoom, 18);
        assert!(CITY_VIEWPORT.max_bounds.contains(CITY_VIEWPORT.center));
        assert!(LOCATE_ZOOM > CITY_VIEWPORT.min_zoom);
        assert!(LOCATE_ZOOM <= CITY_VIEWPORT.max_zoom);
    }

    #[test]
    fn test_popup_card_labels_follow_the_locale() {
        let place = gallery("https://futurogallery.ru/");

        let ru = PopupCard::for_place(&place, Locale::Ru);
        assert_eq!(ru.title, "FUTURO Gallery");
        assert_eq!(ru.fields[0].label, "Время работы");
        assert_eq!(ru.link.as_ref().unwrap().label, "Перейти на сайт");

        let zh = PopupCard::for_place(&place, Locale::Zh);
        assert_eq!(zh.fields.len(), 4);
        assert_eq!(zh.fields[2].label, "地址");
    }

    #[test]
    fn test_bare_domain_links_get_a_scheme() {
        let card = PopupCard::for_place(&gallery("arsenal-museum.art"), Locale::Ru);
        assert_eq!(card.link.unwrap().href, "https://arsenal-museum.art");

        let card = PopupCard::for_place(&gallery("http://cdkz-nn.ru"), Locale::Ru);
        assert_eq!(card.link.unwrap().href, "http://cdkz-nn.ru");

        let card = PopupCard::for_place(&gallery(""), Locale::Ru);
        assert!(card.link.is_none());
    }

    #[test]
    fn test_markers_preserve_order_and_carry_icons() {
        let first = gallery("https://futurogallery.ru/");
        let mut second = gallery("");
        second.id = PlaceId(18);
        second.names = LocalizedText::new("ЦЕХ");

        let pins = markers([&first, &second], Locale::En);
        assert_eq!(pins.len(), 2);
        assert_eq!(pins[0].id, PlaceId(14));
        assert_eq!(pins[1].id, PlaceId(18));
        assert_eq!(pins[0].icon, Category::Gallery.icon());
        assert_eq!(pins[1].card.title, "ЦЕХ");
    }

    #[test]
    fn test_marker_icon_serializes_with_leaflet_option_names() {
        let json = serde_json::to_value(Category::Library.icon()).unwrap();
        assert_eq!(
            json["iconUrl"],
            "https://cdn-icons-png.flaticon.com/128/3875/3875536.png"
        );
        assert_eq!(json["iconSize"][0], 32);
        assert_eq!(json["popupAnchor"][1], -32);
    }
}
