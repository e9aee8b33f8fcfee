//! Visitor positioning behind a swappable provider.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::LatLng;
use crate::state::AppEvent;

/// Source of the visitor's position. A browser backs this with the
/// geolocation permission prompt; servers and tests use fixed values.
#[async_trait]
pub trait Locator: Send + Sync {
    /// The current position, or `None` when positioning is unavailable or
    /// the visitor declined.
    async fn current_position(&self) -> Option<LatLng>;
}

/// Locator with a fixed answer.
pub struct StaticLocator {
    position: Option<LatLng>,
}

impl StaticLocator {
    pub fn new(position: LatLng) -> Self {
        Self {
            position: Some(position),
        }
    }

    /// A locator that always declines.
    pub fn unavailable() -> Self {
        Self { position: None }
    }
}

#[async_trait]
impl Locator for StaticLocator {
    async fn current_position(&self) -> Option<LatLng> {
        self.position
    }
}

/// Runs the "find me" action. A position becomes the event that moves the
/// camera; a declined request produces nothing and the map stays put.
pub async fn locate_event(locator: &dyn Locator) -> Option<AppEvent> {
    match locator.current_position().await {
        Some(position) => {
            debug!("Locator answered: {}, {}", position.lat, position.lng);
            Some(AppEvent::Located(position))
        }
        None => {
            debug!("Locator has no position available");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::LOCATE_ZOOM;
    use crate::state::AppState;

    #[tokio::test]
    async fn test_locate_event_moves_the_camera() {
        let locator = StaticLocator::new(LatLng::new(56.30, 43.95));
        let event = locate_event(&locator).await.unwrap();

        let state = AppState::default().reduce(event);
        assert_eq!(state.view.center, LatLng::new(56.30, 43.95));
        assert_eq!(state.view.zoom, LOCATE_ZOOM);
    }

    #[tokio::test]
    async fn test_declined_location_produces_no_event() {
        let locator = StaticLocator::unavailable();
        assert!(locate_event(&locator).await.is_none());
    }
}
