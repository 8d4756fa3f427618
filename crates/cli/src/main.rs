//! CareerScope CLI entry point.
//!
//! This binary is the composition root for the entire system. Responsibilities:
//!
//! 1. **Parse configuration**: command-line arguments, environment variables,
//!    and an optional `.env` file.
//! 2. **Wire observability**: configure `tracing-subscriber` with a stderr
//!    formatting layer and, when configured, an OpenTelemetry OTLP exporter.
//!    All `tracing` spans and events emitted by every crate in the workspace
//!    flow through this subscriber.
//! 3. **Construct infrastructure**: create one [`github::GithubClient`] and
//!    inject it into an [`analyzer::Analyzer`] as both ports.
//! 4. **Run one analysis** and print the summary as JSON on stdout.
//!
//! Exit codes: `0` on success, `2` when the access token was rejected, `1`
//! for every other failure.

mod args;
mod telemetry;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use signals::{AccessToken, AnalysisError, AnalysisSummary, Username};

use analyzer::Analyzer;
use args::Cli;
use github::GithubClient;

const EXIT_FAILURE: u8 = 1;
const EXIT_AUTH: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is the normal case.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let _telemetry = match telemetry::init(cli.log_format) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    match run(&cli).await {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "Analysis failed");
            eprintln!("error: {err:#}");
            match err.downcast_ref::<AnalysisError>() {
                Some(analysis) if analysis.is_auth() => ExitCode::from(EXIT_AUTH),
                _ => ExitCode::from(EXIT_FAILURE),
            }
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<String> {
    let username = Username::new(cli.username.trim()).context("username must not be empty")?;
    let token = AccessToken::new(cli.token.as_str()).context("access token must not be empty")?;

    let client = Arc::new(
        GithubClient::new(cli.github_config()).context("constructing GitHub client")?,
    );
    let analyzer = Analyzer::new(client.clone(), client, cli.probe_config())
        .context("invalid probe configuration")?;

    let summary = analyzer.analyze(&username, &token).await?;
    render(&summary, cli.pretty).context("serialising summary")
}

fn render(summary: &AnalysisSummary, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(summary)
    } else {
        serde_json::to_string(summary)
    }
}
