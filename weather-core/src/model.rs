use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// City name as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Replace the text unconditionally. No validation happens here.
    pub fn set(&mut self, text: impl Into<String>) {
        self.0 = text.into();
    }

    /// Raw text, as displayed in the input field.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text sent to the provider.
    pub fn trimmed(&self) -> &str {
        self.0.trim()
    }
}

/// Result of one successful lookup. Values are copied from the provider
/// response without unit conversion (the request asks for metric units).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub condition: String,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_mps: f64,
    pub observed_at: Option<DateTime<Utc>>,
}

/// What the widget currently shows below the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LookupState {
    #[default]
    Empty,
    Success(WeatherSnapshot),
    Failure(LookupError),
}

impl LookupState {
    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match self {
            LookupState::Success(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<LookupError> {
        match self {
            LookupState::Failure(err) => Some(*err),
            _ => None,
        }
    }
}

impl From<Result<WeatherSnapshot, LookupError>> for LookupState {
    fn from(outcome: Result<WeatherSnapshot, LookupError>) -> Self {
        match outcome {
            Ok(snapshot) => LookupState::Success(snapshot),
            Err(err) => LookupState::Failure(err),
        }
    }
}
