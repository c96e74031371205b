//! Core library for the `weather` widget.
//!
//! This crate defines:
//! - Configuration & credential resolution
//! - The remote lookup against OpenWeather and its failure taxonomy
//! - Session state (query + latest outcome) and its rendering
//!
//! It is used by `weather-cli`, but any other front-end can drive a
//! [`WeatherApp`] the same way.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod model;
pub mod provider;
pub mod session;
pub mod view;

pub use config::Config;
pub use diagnostics::{DiagnosticSink, LookupEvent, TracingSink};
pub use error::LookupError;
pub use model::{LookupState, Query, WeatherSnapshot};
pub use provider::{OpenWeatherClient, WeatherProvider};
pub use session::WeatherApp;
pub use view::{Panel, View, render};
