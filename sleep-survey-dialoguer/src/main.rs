//! Interactive sleep quality survey in the terminal.
//!
//! Endpoint and timeout come from `SLEEP_SURVEY_*` environment variables;
//! the command line flags override them. Set `RUST_LOG` for more output.

use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::Confirm;
use sleep_survey::{ClientConfig, HttpPredictionClient, Outcome, SubmissionController, SurveyState};
use sleep_survey_dialoguer::{DialoguerError, DialoguerPresenter, DialoguerWizard, theme};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "sleep_survey=info,sleep_survey_dialoguer=info";

#[derive(Debug, Parser)]
#[command(name = "sleep-survey", about = "Answer the sleep quality survey and get a prediction")]
struct Args {
    /// Prediction endpoint, e.g. http://127.0.0.1:5000/predict
    #[arg(long)]
    endpoint: Option<String>,

    /// Endpoint probed with GET before every submission
    #[arg(long)]
    health_endpoint: Option<String>,

    /// Disable colors in prompts
    #[arg(long)]
    plain: bool,
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<ClientConfig> {
    let mut config = ClientConfig::load()?;
    if let Some(endpoint) = &args.endpoint {
        config = config.with_endpoint(endpoint);
    }
    if let Some(health) = &args.health_endpoint {
        config = config.with_health_endpoint(health);
    }
    config.validate()?;
    Ok(config)
}

fn frontend(plain: bool) -> (DialoguerWizard, DialoguerPresenter) {
    if plain {
        (DialoguerWizard::plain(), DialoguerPresenter::plain())
    } else {
        (DialoguerWizard::new(), DialoguerPresenter::new())
    }
}

/// Yes/no question. A closed prompt counts as "no".
fn confirm(prompt: &str, colorful: bool) -> bool {
    let theme = theme(colorful);
    Confirm::with_theme(theme.as_ref())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .unwrap_or_else(|err| {
            warn!(error = %err, "prompt closed");
            false
        })
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = load_config(&args).context("invalid client configuration")?;
    info!(endpoint = %config.endpoint, "using prediction service");

    let (wizard, presenter) = frontend(args.plain);
    let colorful = wizard.is_colorful();
    let client = HttpPredictionClient::new(config)?;
    let controller = SubmissionController::new(client, presenter);

    let mut state = SurveyState::new();
    loop {
        match wizard.collect(&mut state) {
            Ok(()) => {}
            Err(DialoguerError::Cancelled) => {
                println!("Survey cancelled.");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }

        match controller.submit(&mut state).await {
            Outcome::Succeeded {
                restarted: true, ..
            } => continue,
            Outcome::Succeeded { .. } => {
                if !confirm("Change your answers and submit again?", colorful) {
                    return Ok(());
                }
            }
            Outcome::Failed(err) => {
                let retry = err.is_recoverable()
                    && confirm("Edit your answers and try again?", colorful);
                if !retry {
                    return Ok(());
                }
            }
            Outcome::Busy => warn!("a submission is already in flight"),
        }
    }
}
