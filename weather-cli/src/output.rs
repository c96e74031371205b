use colored::Colorize;
use serde_json::json;
use weather_core::{LookupState, View};

/// Print the banner or the panel below the prompt.
pub fn print_outcome(view: &View) {
    if let Some(banner) = &view.banner {
        println!("{}", banner.red());
    }

    if let Some(panel) = &view.panel {
        println!("{}", panel.title.bold());
        for line in panel.lines() {
            println!("  {line}");
        }
    }
}

/// Machine-readable form of a lookup outcome.
pub fn outcome_json(state: &LookupState) -> serde_json::Value {
    match state {
        LookupState::Empty => serde_json::Value::Null,
        LookupState::Success(snapshot) => json!({ "weather": snapshot }),
        LookupState::Failure(err) => json!({
            "error": err,
            "message": err.to_string(),
        }),
    }
}
