use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::{
    diagnostics::{DiagnosticSink, LookupEvent, TracingSink, mask_credential},
    error::LookupError,
    model::WeatherSnapshot,
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Current-weather client for OpenWeather.
///
/// One GET per lookup, transport defaults for timeouts, no retries.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    base_url: String,
    http: Client,
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for OpenWeatherClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenWeatherClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at another host, e.g. a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
            sink: Arc::new(TracingSink),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/data/2.5/weather", self.base_url.trim_end_matches('/'))
    }

    fn fail(&self, err: LookupError, detail: String) -> LookupError {
        self.sink.record(&LookupEvent::Failure { detail });
        err
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    #[serde(default)]
    dt: Option<i64>,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

impl OwCurrentResponse {
    /// `None` when the condition list is empty.
    fn into_snapshot(self) -> Option<WeatherSnapshot> {
        let condition = self.weather.into_iter().next()?.description;

        Some(WeatherSnapshot {
            location_name: self.name,
            condition,
            temperature_c: self.main.temp,
            humidity_pct: self.main.humidity,
            wind_speed_mps: self.wind.speed,
            observed_at: self.dt.and_then(unix_to_utc),
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn fetch_weather(
        &self,
        query: &str,
        credential: Option<&str>,
    ) -> Result<WeatherSnapshot, LookupError> {
        let api_key = credential.filter(|key| !key.is_empty());
        let masked = api_key.map(mask_credential).unwrap_or_else(|| "<unset>".to_string());
        self.sink.record(&LookupEvent::Credential { masked: masked.clone() });

        let Some(api_key) = api_key else {
            return Err(LookupError::MissingCredential);
        };

        let request = self
            .http
            .get(self.endpoint())
            .query(&[("q", query.trim()), ("units", "metric"), ("appid", api_key)])
            .build()
            .map_err(|e| self.fail(LookupError::Unavailable, format!("Invalid request: {e}")))?;

        self.sink.record(&LookupEvent::Request { url: redact_url(request.url(), &masked) });

        let res = self.http.execute(request).await.map_err(|e| {
            self.fail(LookupError::Unavailable, format!("Failed to send request to OpenWeather: {e}"))
        })?;

        let status = res.status();

        // Classification depends on the status alone; the body is detail only.
        if !status.is_success() {
            let body = res
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
            return Err(self.fail(
                LookupError::from_status(status),
                format!("OpenWeather request failed with status {status}: {}", truncate_body(&body)),
            ));
        }

        let body = res.text().await.map_err(|e| {
            self.fail(LookupError::Unavailable, format!("Failed to read OpenWeather response body: {e}"))
        })?;

        let parsed: OwCurrentResponse = serde_json::from_str(&body).map_err(|e| {
            self.fail(LookupError::Unavailable, format!("Failed to parse OpenWeather JSON: {e}"))
        })?;

        self.sink.record(&LookupEvent::Payload { body });

        parsed.into_snapshot().ok_or_else(|| {
            self.fail(
                LookupError::Unavailable,
                "OpenWeather response contained no weather conditions".to_string(),
            )
        })
    }
}

fn redact_url(url: &Url, masked: &str) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "appid" { masked.to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
