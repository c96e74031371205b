use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Why a lookup did not produce a snapshot.
///
/// The `Display` text is what the user sees in the error banner; the raw
/// transport or provider detail only ever reaches the diagnostics sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupError {
    /// No API key configured; no request was issued.
    #[error("API Key is not configured. Please check your setup.")]
    MissingCredential,

    /// Provider answered 401.
    #[error("Invalid API key. Please check your configuration.")]
    InvalidCredential,

    /// Provider answered 404.
    #[error("City not found. Please check the spelling.")]
    LocationNotFound,

    /// Network failure, malformed body or any other status.
    #[error("Unable to fetch weather data. Please try again later.")]
    Unavailable,
}

impl LookupError {
    /// Classify a non-success provider status.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => LookupError::InvalidCredential,
            StatusCode::NOT_FOUND => LookupError::LocationNotFound,
            _ => LookupError::Unavailable,
        }
    }

    pub fn banner(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_401_is_invalid_credential() {
        assert_eq!(LookupError::from_status(StatusCode::UNAUTHORIZED), LookupError::InvalidCredential);
    }

    #[test]
    fn status_404_is_location_not_found() {
        assert_eq!(LookupError::from_status(StatusCode::NOT_FOUND), LookupError::LocationNotFound);
    }

    #[test]
    fn other_statuses_are_unavailable() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::FORBIDDEN,
            StatusCode::TOO_MANY_REQUESTS,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::BAD_GATEWAY,
        ] {
            assert_eq!(LookupError::from_status(status), LookupError::Unavailable, "{status}");
        }
    }

    #[test]
    fn banner_texts_are_fixed() {
        assert_eq!(
            LookupError::MissingCredential.banner(),
            "API Key is not configured. Please check your setup."
        );
        assert_eq!(
            LookupError::InvalidCredential.banner(),
            "Invalid API key. Please check your configuration."
        );
        assert_eq!(
            LookupError::LocationNotFound.banner(),
            "City not found. Please check the spelling."
        );
        assert_eq!(
            LookupError::Unavailable.banner(),
            "Unable to fetch weather data. Please try again later."
        );
    }
}
