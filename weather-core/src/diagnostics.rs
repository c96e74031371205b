//! Developer-facing trace of each lookup.
//!
//! The provider reports every step to a [`DiagnosticSink`]. The default sink
//! forwards to `tracing`; tests install a recording sink instead.

use std::fmt::Debug;

use tracing::{debug, warn};

/// One observable step of a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupEvent {
    /// Credential in use, already masked.
    Credential { masked: String },
    /// Request URL, with the credential masked.
    Request { url: String },
    /// Raw body of a successful response.
    Payload { body: String },
    /// Raw detail of a failed lookup.
    Failure { detail: String },
}

pub trait DiagnosticSink: Send + Sync + Debug {
    fn record(&self, event: &LookupEvent);
}

/// Default sink: `debug!` for the happy path, `warn!` for failures.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, event: &LookupEvent) {
        match event {
            LookupEvent::Credential { masked } => debug!(api_key = %masked, "Using API key"),
            LookupEvent::Request { url } => debug!(url = %url, "Requesting weather"),
            LookupEvent::Payload { body } => debug!(body = %body, "Weather data received"),
            LookupEvent::Failure { detail } => warn!(detail = %detail, "Weather request failed"),
        }
    }
}

const VISIBLE_PREFIX: usize = 4;

/// Keep the first four characters, star out the rest. Keys of four
/// characters or fewer are starred out entirely.
pub fn mask_credential(credential: &str) -> String {
    let keep = if credential.chars().count() > VISIBLE_PREFIX { VISIBLE_PREFIX } else { 0 };

    credential
        .chars()
        .enumerate()
        .map(|(i, c)| if i < keep { c } else { '*' })
        .collect()
}
