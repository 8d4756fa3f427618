//! Command-line arguments and their mapping onto crate configurations.

use std::time::Duration;

use analyzer::ProbeConfig;
use clap::{Parser, ValueEnum};
use github::{GithubConfig, DEFAULT_GRAPHQL_URL, DEFAULT_REST_URL};

/// Summarise a GitHub user's profile, contribution history, and repository
/// hygiene as JSON.
#[derive(Debug, Parser)]
#[command(name = "careerscope", version)]
pub struct Cli {
    /// GitHub login to analyse.
    #[arg(long, short = 'u')]
    pub username: String,

    /// Access token used for every request.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// GraphQL endpoint for the profile query.
    #[arg(long, env = "CAREERSCOPE_GRAPHQL_URL", default_value = DEFAULT_GRAPHQL_URL)]
    pub graphql_url: String,

    /// REST API base URL for artifact checks.
    #[arg(long, env = "CAREERSCOPE_REST_URL", default_value = DEFAULT_REST_URL)]
    pub rest_url: String,

    /// Probe at most this many repositories at once (4 requests each).
    /// Unlimited when omitted.
    #[arg(long)]
    pub max_concurrent_repos: Option<usize>,

    /// Per-check deadline in seconds; an expired check counts as absent.
    #[arg(long)]
    pub probe_timeout_secs: Option<u64>,

    /// Overall deadline for any single HTTP request, in seconds.
    #[arg(long)]
    pub request_timeout_secs: Option<u64>,

    /// Format of log output on stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Pretty-print the JSON summary.
    #[arg(long)]
    pub pretty: bool,
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Pretty,
    /// One JSON object per event.
    Json,
}

impl Cli {
    /// Adapter configuration derived from the arguments.
    pub fn github_config(&self) -> GithubConfig {
        GithubConfig {
            graphql_url: self.graphql_url.clone(),
            rest_url: self.rest_url.clone(),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            ..GithubConfig::default()
        }
    }

    /// Probe-stage configuration derived from the arguments.
    pub fn probe_config(&self) -> ProbeConfig {
        ProbeConfig {
            max_concurrent_repositories: self.max_concurrent_repos,
            probe_timeout: self.probe_timeout_secs.map(Duration::from_secs),
        }
    }
}
