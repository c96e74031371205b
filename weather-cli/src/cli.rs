use std::{process::ExitCode, sync::Arc};

use anyhow::{Context, bail};
use clap::{ArgAction, Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use tracing::info;
use weather_core::{
    Config, OpenWeatherClient, WeatherApp,
    view::{PLACEHOLDER, TITLE, TRIGGER_LABEL},
};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city")]
pub struct Cli {
    /// Log verbosity: -v info, -vv debug, -vvv trace.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Defaults to `interactive`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Look up one city and exit.
    Show {
        /// City name.
        city: String,

        /// Print the snapshot or the error as JSON.
        #[arg(long, conflicts_with = "plain")]
        json: bool,

        /// Print the whole widget without colors.
        #[arg(long)]
        plain: bool,
    },

    /// Prompt for cities until Esc or Ctrl-C.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => {
                // Prompts read stdin synchronously; keep them off the async workers.
                tokio::task::spawn_blocking(configure)
                    .await
                    .context("Configuration prompt panicked")??;
                Ok(ExitCode::SUCCESS)
            }
            Command::Show { city, json, plain } => {
                let mut app = build_app(&Config::load_or_default());
                app.set_query(city);
                show(app, json, plain).await
            }
            Command::Interactive => {
                interactive(build_app(&Config::load_or_default())).await?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

/// The credential is resolved once here and handed to the session.
fn build_app(config: &Config) -> WeatherApp {
    let client = OpenWeatherClient::with_base_url(config.base_url());
    WeatherApp::new(Arc::new(client), config.credential())
}

/// Run one lookup for the app's current query and print the outcome.
/// Any failure maps to a non-zero exit code.
async fn show(mut app: WeatherApp, json: bool, plain: bool) -> anyhow::Result<ExitCode> {
    let failed = app.trigger().await.error().is_some();

    if json {
        let value = output::outcome_json(app.state());
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else if plain {
        print!("{}", app.view());
    } else {
        output::print_outcome(&app.view());
    }

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

/// A broken config file is not overwritten: configure needs a clean load.
fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;

    let api_key = api_key.trim();
    if api_key.is_empty() {
        bail!("API key must not be empty");
    }

    config.set_api_key(api_key.to_string());
    let path = config.save()?;
    info!(path = %path.display(), "Configuration saved");
    println!("Saved API key to {}", path.display());

    Ok(())
}

/// `None` when the user leaves with Esc or Ctrl-C.
fn prompt_city(initial: &str) -> anyhow::Result<Option<String>> {
    let input = Text::new("City:")
        .with_placeholder(PLACEHOLDER)
        .with_initial_value(initial)
        .with_help_message(&format!("Enter: {TRIGGER_LABEL}, Esc: quit"))
        .prompt();

    match input {
        Ok(text) => Ok(Some(text)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e).context("Failed to read city name"),
    }
}

async fn interactive(mut app: WeatherApp) -> anyhow::Result<()> {
    println!("{TITLE}");

    loop {
        let initial = app.query().as_str().to_string();
        let input = tokio::task::spawn_blocking(move || prompt_city(&initial))
            .await
            .context("City prompt panicked")??;

        let Some(text) = input else {
            break;
        };

        app.set_query(text);
        app.trigger().await;
        output::print_outcome(&app.view());
    }

    Ok(())
}
