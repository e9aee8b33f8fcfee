use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CatalogError;
use crate::i18n::Locale;

/// Venue categories. The set is closed on purpose: marker icon selection and
/// sidebar labels are resolved by exhaustive match, so an unrecognized
/// category cannot exist past the string boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Museum,
    Theater,
    Library,
    Gallery,
    HouseOfCulture,
    ArtSchool,
}

impl Category {
    /// Every category, in the order the sidebar presents them.
    pub const ALL: &'static [Category] = &[
        Category::Museum,
        Category::Theater,
        Category::Library,
        Category::Gallery,
        Category::HouseOfCulture,
        Category::ArtSchool,
    ];

    /// Stable key used in URLs, CLI flags and serialized payloads.
    pub fn key(self) -> &'static str {
        match self {
            Category::Museum => "museum",
            Category::Theater => "theater",
            Category::Library => "library",
            Category::Gallery => "gallery",
            Category::HouseOfCulture => "house-of-culture",
            Category::ArtSchool => "art-school",
        }
    }

    /// Parses a category key; unknown keys are an explicit error listing the
    /// valid set.
    pub fn parse(key: &str) -> Result<Self, CatalogError> {
        match key {
            "museum" => Ok(Category::Museum),
            "theater" => Ok(Category::Theater),
            "library" => Ok(Category::Library),
            "gallery" => Ok(Category::Gallery),
            "house-of-culture" => Ok(Category::HouseOfCulture),
            "art-school" => Ok(Category::ArtSchool),
            other => Err(CatalogError::UnknownCategory {
                key: other.to_string(),
                expected: Self::expected_keys(),
            }),
        }
    }

    fn expected_keys() -> String {
        Self::ALL
            .iter()
            .map(|category| category.key())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Sidebar/button label under a locale.
    pub fn label(self, locale: Locale) -> &'static str {
        match self {
            Category::Museum => match locale {
                Locale::Ru => "Музей",
                Locale::En => "Museum",
                Locale::Zh => "博物馆",
            },
            Category::Theater => match locale {
                Locale::Ru => "Театр",
                Locale::En => "Theater",
                Locale::Zh => "剧院",
            },
            Category::Library => match locale {
                Locale::Ru => "Библиотека",
                Locale::En => "Library",
                Locale::Zh => "图书馆",
            },
            Category::Gallery => match locale {
                Locale::Ru => "Галерея",
                Locale::En => "Gallery",
                Locale::Zh => "画廊",
            },
            Category::HouseOfCulture => match locale {
                Locale::Ru => "Дом Культуры",
                Locale::En => "House of Culture",
                Locale::Zh => "文化之家",
            },
            Category::ArtSchool => match locale {
                Locale::Ru => "Школа Искусств",
                Locale::En => "School of Arts",
                Locale::Zh => "艺术学院",
            },
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Sidebar selection: a concrete category or the "all" sentinel that matches
/// every place. Exactly one selection is active at a time; "all" is the
/// initial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Key of the sentinel selection.
    pub const ALL_KEY: &'static str = "all";

    /// Parses a selection key: the "all" sentinel or any category key.
    pub fn parse(key: &str) -> Result<Self, CatalogError> {
        if key == Self::ALL_KEY {
            return Ok(CategoryFilter::All);
        }
        Category::parse(key)
            .map(CategoryFilter::Only)
            .map_err(|_| CatalogError::UnknownCategory {
                key: key.to_string(),
                expected: format!("{}, {}", Self::ALL_KEY, Category::expected_keys()),
            })
    }

    pub fn key(self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_KEY,
            CategoryFilter::Only(category) => category.key(),
        }
    }

    /// Whether a place of the given category passes this selection.
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    /// Button label under a locale; the sentinel carries its own labels.
    pub fn label(self, locale: Locale) -> &'static str {
        match self {
            CategoryFilter::All => match locale {
                Locale::Ru => "Все",
                Locale::En => "All",
                Locale::Zh => "全部",
            },
            CategoryFilter::Only(category) => category.label(locale),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// Serialized as the bare selection key so query strings and state snapshots
// read the same way ("all", "museum", ...).
impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Self::parse(&key).map_err(D::Error::custom)
    }
}
