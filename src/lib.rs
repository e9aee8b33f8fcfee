pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod geolocate;
pub mod i18n;
pub mod logging;
pub mod map;
pub mod server;
pub mod state;
