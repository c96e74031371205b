//! Rendering of the widget: the form, plus either an error banner or a
//! result panel. Nothing here classifies errors or touches the network.

use std::fmt;

use crate::model::{LookupState, WeatherSnapshot};

pub const TITLE: &str = "Weather App";
pub const PLACEHOLDER: &str = "Enter city name";
pub const TRIGGER_LABEL: &str = "Get Weather";

/// Formatted result panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub title: String,
    pub description: String,
    pub temperature: String,
    pub humidity: String,
    pub wind_speed: String,
}

impl Panel {
    pub fn from_snapshot(snapshot: &WeatherSnapshot) -> Self {
        Self {
            title: snapshot.location_name.clone(),
            description: snapshot.condition.clone(),
            temperature: format!("Temperature: {}°C", snapshot.temperature_c),
            humidity: format!("Humidity: {}%", snapshot.humidity_pct),
            wind_speed: format!("Wind Speed: {} m/s", snapshot.wind_speed_mps),
        }
    }

    /// Body lines below the title, top to bottom.
    pub fn lines(&self) -> [&str; 4] {
        [
            self.description.as_str(),
            self.temperature.as_str(),
            self.humidity.as_str(),
            self.wind_speed.as_str(),
        ]
    }
}

/// Everything the widget displays for one state.
///
/// At most one of `banner` and `panel` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub input: String,
    pub banner: Option<String>,
    pub panel: Option<Panel>,
}

pub fn render(query: &str, state: &LookupState) -> View {
    let (banner, panel) = match state {
        LookupState::Empty => (None, None),
        LookupState::Failure(err) => (Some(err.banner()), None),
        LookupState::Success(snapshot) => (None, Some(Panel::from_snapshot(snapshot))),
    };

    View { input: query.to_string(), banner, panel }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        if self.input.is_empty() {
            writeln!(f, "[ {PLACEHOLDER} ]")?;
        } else {
            writeln!(f, "[ {} ]", self.input)?;
        }
        writeln!(f, "< {TRIGGER_LABEL} >")?;

        if let Some(banner) = &self.banner {
            writeln!(f)?;
            writeln!(f, "{banner}")?;
        }

        if let Some(panel) = &self.panel {
            writeln!(f)?;
            writeln!(f, "{}", panel.title)?;
            for line in panel.lines() {
                writeln!(f, "{line}")?;
            }
        }

        Ok(())
    }
}
