use std::collections::BTreeMap;
use std::fmt;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CatalogError;

/// Display languages supported by the UI.
///
/// The set is closed: labels and name overrides are resolved by exhaustive
/// match, so there is no lookup that can miss at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ru,
    En,
    Zh,
}

/// Russian is the authoring language of the catalog and the fallback for
/// every missing override.
pub const DEFAULT_LOCALE: Locale = Locale::Ru;

/// Locales in the order the language switcher presents them.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::Ru, Locale::En, Locale::Zh];

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Parses a locale code. Case-insensitive and tolerant of region
    /// suffixes ("en-US" parses as English); anything outside the supported
    /// set is an explicit error.
    pub fn parse(code: &str) -> Result<Self, CatalogError> {
        let normalized = code.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "ru" => Ok(Locale::Ru),
            "en" => Ok(Locale::En),
            "zh" => Ok(Locale::Zh),
            _ => Err(CatalogError::UnknownLocale {
                code: code.to_string(),
            }),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        DEFAULT_LOCALE
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A display string with a mandatory default-locale entry and optional
/// per-locale overrides.
///
/// Serializes as a single locale-keyed map (`{"ru": "…", "en": "…"}`);
/// deserializing a map without the default-locale entry is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedText {
    default: String,
    overrides: BTreeMap<Locale, String>,
}

impl LocalizedText {
    pub fn new(default_text: impl Into<String>) -> Self {
        Self {
            default: default_text.into(),
            overrides: BTreeMap::new(),
        }
    }

    /// Adds or replaces the text for a locale. Setting the default locale
    /// replaces the default entry itself.
    pub fn with(mut self, locale: Locale, text: impl Into<String>) -> Self {
        if locale == DEFAULT_LOCALE {
            self.default = text.into();
        } else {
            self.overrides.insert(locale, text.into());
        }
        self
    }

    /// Builds from a locale-keyed map. The default-locale entry is mandatory.
    pub fn from_entries(mut entries: BTreeMap<Locale, String>) -> Result<Self, CatalogError> {
        let default = entries.remove(&DEFAULT_LOCALE).ok_or_else(|| {
            CatalogError::InvalidPlace(format!("missing '{DEFAULT_LOCALE}' name entry"))
        })?;
        Ok(Self {
            default,
            overrides: entries,
        })
    }

    /// The default-locale text.
    pub fn default_text(&self) -> &str {
        &self.default
    }

    /// The override for a locale, if one was authored. The default locale
    /// has no override by definition.
    pub fn get_override(&self, locale: Locale) -> Option<&str> {
        self.overrides.get(&locale).map(String::as_str)
    }

    /// The text shown under a locale: the override when present, the
    /// default otherwise.
    pub fn resolve(&self, locale: Locale) -> &str {
        self.get_override(locale).unwrap_or(&self.default)
    }

    /// True when the lowercased needle occurs in the default text or in the
    /// active locale's override. An empty needle matches everything.
    pub fn matches(&self, locale: Locale, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        if self.default.to_lowercase().contains(needle_lower) {
            return true;
        }
        self.get_override(locale)
            .map_or(false, |text| text.to_lowercase().contains(needle_lower))
    }
}

impl Serialize for LocalizedText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.overrides.len()))?;
        map.serialize_entry(DEFAULT_LOCALE.as_str(), &self.default)?;
        for (locale, text) in &self.overrides {
            map.serialize_entry(locale.as_str(), text)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LocalizedText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = BTreeMap::<Locale, String>::deserialize(deserializer)?;
        Self::from_entries(entries).map_err(D::Error::custom)
    }
}

/// The fixed UI vocabulary rendered by the sidebar and marker popups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiText {
    Categories,
    SearchPlaceholder,
    Hours,
    Schedule,
    Website,
    Description,
    Address,
    Contact,
    FindMe,
}

/// Every vocabulary entry, in the order the UI presents them.
pub const UI_TEXTS: &[UiText] = &[
    UiText::Categories,
    UiText::SearchPlaceholder,
    UiText::Hours,
    UiText::Schedule,
    UiText::Website,
    UiText::Description,
    UiText::Address,
    UiText::Contact,
    UiText::FindMe,
];

impl UiText {
    /// Resource key used by the JSON vocabulary payload.
    pub fn key(self) -> &'static str {
        match self {
            UiText::Categories => "categories",
            UiText::SearchPlaceholder => "searchPlaceholder",
            UiText::Hours => "hours",
            UiText::Schedule => "schedule",
            UiText::Website => "website",
            UiText::Description => "description",
            UiText::Address => "address",
            UiText::Contact => "contact",
            UiText::FindMe => "findMe",
        }
    }

    /// Label under a locale. All entries carry all three translations.
    pub fn label(self, locale: Locale) -> &'static str {
        match self {
            UiText::Categories => match locale {
                Locale::Ru => "Категории",
                Locale::En => "Categories",
                Locale::Zh => "类别",
            },
            UiText::SearchPlaceholder => match locale {
                Locale::Ru => "Поиск по названию",
                Locale::En => "Search by name",
                Locale::Zh => "按名称搜索",
            },
            UiText::Hours => match locale {
                Locale::Ru => "Время работы",
                Locale::En => "Hours",
                Locale::Zh => "营业时间",
            },
            UiText::Schedule => match locale {
                Locale::Ru => "Мероприятия",
                Locale::En => "Activities",
                Locale::Zh => "活动",
            },
            UiText::Website => match locale {
                Locale::Ru => "Перейти на сайт",
                Locale::En => "Visit website",
                Locale::Zh => "访问网站",
            },
            UiText::Description => match locale {
                Locale::Ru => "Описание",
                Locale::En => "Description",
                Locale::Zh => "描述",
            },
            UiText::Address => match locale {
                Locale::Ru => "Адрес",
                Locale::En => "Address",
                Locale::Zh => "地址",
            },
            UiText::Contact => match locale {
                Locale::Ru => "Контакты",
                Locale::En => "Contact",
                Locale::Zh => "联系方式",
            },
            UiText::FindMe => match locale {
                Locale::Ru => "Найти меня",
                Locale::En => "Find me",
                Locale::Zh => "查找我",
            },
        }
    }
}
