use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use culture_map::catalog::PlaceCatalog;
use culture_map::server::create_router;

async fn request(path: &str) -> Result<(StatusCode, Vec<u8>)> {
    let app = create_router(Arc::new(PlaceCatalog::builtin()), "assets");
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty())?)
        .await?;

    let status = response.status();
    let body = hyper::body::to_bytes(response.into_body()).await?.to_vec();
    Ok((status, body))
}

async fn request_json(path: &str) -> Result<Value> {
    let (status, body) = request(path).await?;
    assert_eq!(status, StatusCode::OK, "unexpected status for {path}");
    Ok(serde_json::from_slice(&body)?)
}

#[tokio::test]
async fn test_health_reports_the_service() -> Result<()> {
    let json = request_json("/health").await?;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "culture-map");
    Ok(())
}

#[tokio::test]
async fn test_places_serves_every_marker_by_default() -> Result<()> {
    let json = request_json("/api/places").await?;

    assert_eq!(json["locale"], "ru");
    assert_eq!(json["count"], 30);

    let markers = json["markers"].as_array().unwrap();
    assert_eq!(markers.len(), 30);
    assert_eq!(
        markers[0]["card"]["title"],
        "Нижегородский государственный художественный музей"
    );
    assert!(markers[0]["icon"]["iconUrl"]
        .as_str()
        .unwrap()
        .ends_with("1825814.png"));
    Ok(())
}

#[tokio::test]
async fn test_places_applies_category_search_and_locale() -> Result<()> {
    let json = request_json("/api/places?category=museum&search=arsenal&locale=en").await?;

    assert_eq!(json["locale"], "en");
    assert_eq!(json["count"], 1);

    let marker = &json["markers"][0];
    assert_eq!(marker["id"], 3);
    assert_eq!(marker["card"]["title"], "Arsenal – Center for Contemporary Art");
    assert_eq!(marker["card"]["fields"][0]["label"], "Hours");
    // The authored link has no scheme; the card link must carry one
    assert_eq!(marker["card"]["link"]["href"], "https://arsenal-museum.art");
    Ok(())
}

#[tokio::test]
async fn test_places_decodes_percent_encoded_search() -> Result<()> {
    // "%D0%B0%D1%80%D1%81%D0%B5%D0%BD%D0%B0%D0%BB" decodes to Cyrillic
    // lowercase "арсенал"
    let json =
        request_json("/api/places?search=%D0%B0%D1%80%D1%81%D0%B5%D0%BD%D0%B0%D0%BB").await?;
    assert_eq!(json["count"], 1);
    assert_eq!(json["markers"][0]["id"], 3);
    Ok(())
}

#[tokio::test]
async fn test_places_rejects_unknown_category() -> Result<()> {
    let (status, body) = request("/api/places?category=cinema").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let message = String::from_utf8(body)?;
    assert!(message.contains("cinema"));
    assert!(message.contains("house-of-culture"));
    Ok(())
}

#[tokio::test]
async fn test_places_rejects_unknown_locale() -> Result<()> {
    let (status, body) = request("/api/places?locale=de").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let message = String::from_utf8(body)?;
    assert!(message.contains("de"));
    assert!(message.contains("ru, en, zh"));
    Ok(())
}

#[tokio::test]
async fn test_categories_list_the_sentinel_first() -> Result<()> {
    let entries = request_json("/api/categories?locale=zh").await?;
    let entries = entries.as_array().unwrap();

    assert_eq!(entries.len(), 7);
    assert_eq!(entries[0]["key"], "all");
    assert_eq!(entries[0]["label"], "全部");
    assert!(entries[0].get("icon").is_none());

    assert_eq!(entries[1]["key"], "museum");
    assert_eq!(entries[1]["label"], "博物馆");
    assert!(entries[1]["icon"]["iconUrl"].is_string());
    Ok(())
}

#[tokio::test]
async fn test_ui_vocabulary_follows_the_locale() -> Result<()> {
    let json = request_json("/api/ui?locale=en").await?;
    assert_eq!(json["locale"], "en");
    assert_eq!(json["texts"]["searchPlaceholder"], "Search by name");
    assert_eq!(json["texts"]["findMe"], "Find me");

    let default = request_json("/api/ui").await?;
    assert_eq!(default["texts"]["searchPlaceholder"], "Поиск по названию");
    Ok(())
}

#[tokio::test]
async fn test_map_settings_expose_the_city_camera() -> Result<()> {
    let json = request_json("/api/map").await?;

    assert_eq!(json["viewport"]["center"]["lat"], 56.3287);
    assert_eq!(json["viewport"]["zoom"], 13);
    assert_eq!(json["viewport"]["maxBounds"]["southWest"]["lat"], 56.19);
    assert_eq!(json["viewport"]["maxBounds"]["northEast"]["lng"], 44.15);
    assert_eq!(json["locateZoom"], 14);
    assert!(json["tileUrl"]
        .as_str()
        .unwrap()
        .contains("basemaps.cartocdn.com"));
    assert_eq!(json["locales"], serde_json::json!(["ru", "en", "zh"]));
    Ok(())
}
