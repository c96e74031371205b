use async_trait::async_trait;
use std::fmt::Debug;

use crate::{LookupError, WeatherSnapshot};

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// Remote lookup of current weather for a city.
///
/// Implementations issue at most one outbound request per call and never
/// retry. An absent or empty `credential` must short-circuit with
/// [`LookupError::MissingCredential`] before any request is made.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_weather(
        &self,
        query: &str,
        credential: Option<&str>,
    ) -> Result<WeatherSnapshot, LookupError>;
}
