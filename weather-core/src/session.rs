use std::{future::Future, sync::Arc};

use crate::{
    error::LookupError,
    model::{LookupState, Query, WeatherSnapshot},
    provider::WeatherProvider,
    view::{self, View},
};

/// State of one widget session: the input field and the latest outcome.
#[derive(Debug)]
pub struct WeatherApp {
    provider: Arc<dyn WeatherProvider>,
    credential: Option<String>,
    query: Query,
    state: LookupState,
}

impl WeatherApp {
    pub fn new(provider: Arc<dyn WeatherProvider>, credential: Option<String>) -> Self {
        Self {
            provider,
            credential,
            query: Query::default(),
            state: LookupState::Empty,
        }
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query.set(text);
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    /// Start a lookup for the current query.
    ///
    /// The returned future owns everything it needs, so several lookups may be
    /// in flight at once. Nothing orders their completion.
    pub fn dispatch(
        &self,
    ) -> impl Future<Output = Result<WeatherSnapshot, LookupError>> + Send + use<> {
        let provider = Arc::clone(&self.provider);
        let query = self.query.trimmed().to_string();
        let credential = self.credential.clone();

        async move { provider.fetch_weather(&query, credential.as_deref()).await }
    }

    /// Replace the displayed outcome. Stale outcomes are not detected: the
    /// last one applied wins.
    pub fn apply(&mut self, outcome: Result<WeatherSnapshot, LookupError>) {
        self.state = outcome.into();
    }

    pub async fn trigger(&mut self) -> &LookupState {
        let outcome = self.dispatch().await;
        self.apply(outcome);
        &self.state
    }

    pub fn view(&self) -> View {
        view::render(self.query.as_str(), &self.state)
    }
}
