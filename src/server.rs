use axum::{
    extract::Query,
    http::{Method, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Extension, Router,
};
use hyper::Server;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::debug;

use crate::catalog::{PlaceCatalog, PlaceFilter};
use crate::config::Config;
use crate::domain::category::{Category, CategoryFilter};
use crate::error::{CatalogError, Result};
use crate::i18n::{Locale, SUPPORTED_LOCALES, UI_TEXTS};
use crate::map::{
    markers, Marker, MarkerIcon, CITY_VIEWPORT, LOCATE_ZOOM, TILE_ATTRIBUTION, TILE_URL,
};

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "culture-map",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Query string of `/api/places`. All parameters are optional; omitting
/// them serves the full catalog under the default locale.
#[derive(Debug, Default, Deserialize)]
struct PlacesQuery {
    category: Option<String>,
    search: Option<String>,
    locale: Option<String>,
}

impl PlacesQuery {
    fn into_filter(self) -> Result<PlaceFilter> {
        let category = match self.category.as_deref() {
            Some(key) => CategoryFilter::parse(key)?,
            None => CategoryFilter::All,
        };
        let locale = match self.locale.as_deref() {
            Some(code) => Locale::parse(code)?,
            None => Locale::default(),
        };
        Ok(PlaceFilter {
            category,
            search: self.search.unwrap_or_default(),
            locale,
        })
    }
}

#[derive(Debug, Serialize)]
struct PlacesResponse {
    locale: Locale,
    count: usize,
    markers: Vec<Marker>,
}

/// Filtered venue markers, popups resolved for the requested locale.
async fn list_places(
    Extension(catalog): Extension<Arc<PlaceCatalog>>,
    Query(query): Query<PlacesQuery>,
) -> std::result::Result<Json<PlacesResponse>, (StatusCode, String)> {
    let filter = query
        .into_filter()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let visible = catalog.filter(&filter);
    debug!(
        "Serving {} of {} places (category={}, search={:?})",
        visible.len(),
        catalog.len(),
        filter.category,
        filter.search
    );

    Ok(Json(PlacesResponse {
        locale: filter.locale,
        count: visible.len(),
        markers: markers(visible, filter.locale),
    }))
}

#[derive(Debug, Default, Deserialize)]
struct LocaleQuery {
    locale: Option<String>,
}

fn requested_locale(code: Option<&str>) -> std::result::Result<Locale, (StatusCode, String)> {
    match code {
        Some(code) => Locale::parse(code).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string())),
        None => Ok(Locale::default()),
    }
}

#[derive(Debug, Serialize)]
struct CategoryEntry {
    key: &'static str,
    label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<MarkerIcon>,
}

/// Sidebar buttons in presentation order, the "all" sentinel first.
async fn list_categories(
    Query(query): Query<LocaleQuery>,
) -> std::result::Result<Json<Vec<CategoryEntry>>, (StatusCode, String)> {
    let locale = requested_locale(query.locale.as_deref())?;

    let mut entries = vec![CategoryEntry {
        key: CategoryFilter::ALL_KEY,
        label: CategoryFilter::All.label(locale),
        icon: None,
    }];
    entries.extend(Category::ALL.iter().map(|&category| CategoryEntry {
        key: category.key(),
        label: category.label(locale),
        icon: Some(category.icon()),
    }));

    Ok(Json(entries))
}

/// The fixed UI vocabulary under the requested locale.
async fn ui_texts(
    Query(query): Query<LocaleQuery>,
) -> std::result::Result<Json<serde_json::Value>, (StatusCode, String)> {
    let locale = requested_locale(query.locale.as_deref())?;

    let texts: BTreeMap<&'static str, &'static str> = UI_TEXTS
        .iter()
        .map(|&text| (text.key(), text.label(locale)))
        .collect();

    Ok(Json(serde_json::json!({
        "locale": locale,
        "texts": texts,
    })))
}

/// Camera limits, tile layer and supported locales for the map page.
async fn map_settings() -> impl IntoResponse {
    Json(serde_json::json!({
        "viewport": CITY_VIEWPORT,
        "locateZoom": LOCATE_ZOOM,
        "tileUrl": TILE_URL,
        "tileAttribution": TILE_ATTRIBUTION,
        "locales": SUPPORTED_LOCALES,
    }))
}

/// Create the HTTP router: the JSON API plus the static map page.
pub fn create_router(catalog: Arc<PlaceCatalog>, assets_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/places", get(list_places))
        .route("/api/categories", get(list_categories))
        .route("/api/ui", get(ui_texts))
        .route("/api/map", get(map_settings))
        // Anything else falls through to the static map page and its assets
        .fallback_service(ServeDir::new(assets_dir))
        .layer(Extension(catalog))
        .layer(ServiceBuilder::new().layer(cors))
}

/// Start the HTTP server on the configured address.
pub async fn start_server(catalog: Arc<PlaceCatalog>, config: &Config) -> Result<()> {
    let app = create_router(catalog, &config.assets.dir);

    let host: IpAddr = config.server.host.parse().map_err(|e| {
        CatalogError::Config(format!(
            "Invalid server host '{}': {}",
            config.server.host, e
        ))
    })?;
    let addr = SocketAddr::new(host, config.server.port);

    println!("🚀 Map server running on http://{addr}");
    println!("💚 Health check: http://{addr}/health");
    println!("📍 Places API:   http://{addr}/api/places");
    println!("🗺️ Map page:     http://{addr}/");

    Server::bind(&addr).serve(app.into_make_service()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_means_everything_under_the_default_locale() {
        let filter = PlacesQuery::default().into_filter().unwrap();
        assert_eq!(filter.category, CategoryFilter::All);
        assert_eq!(filter.search, "");
        assert_eq!(filter.locale, Locale::Ru);
    }

    #[test]
    fn test_query_parses_category_and_locale_keys() {
        let query = PlacesQuery {
            category: Some("house-of-culture".to_string()),
            search: Some("газ".to_string()),
            locale: Some("EN".to_string()),
        };
        let filter = query.into_filter().unwrap();
        assert_eq!(
            filter.category,
            CategoryFilter::Only(Category::HouseOfCulture)
        );
        assert_eq!(filter.search, "газ");
        assert_eq!(filter.locale, Locale::En);
    }

    #[test]
    fn test_unknown_category_key_is_rejected_with_the_valid_set() {
        let query = PlacesQuery {
            category: Some("cinema".to_string()),
            ..Default::default()
        };
        let message = query.into_filter().unwrap_err().to_string();
        assert!(message.contains("cinema"));
        assert!(message.contains("all"));
        assert!(message.contains("house-of-culture"));
    }

    #[test]
    fn test_unknown_locale_is_rejected() {
        assert!(requested_locale(Some("de")).is_err());
        assert_eq!(requested_locale(None).unwrap(), Locale::Ru);
    }
}
