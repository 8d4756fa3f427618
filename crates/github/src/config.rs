//! Adapter configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default GraphQL endpoint.
pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// Default REST API base URL.
pub const DEFAULT_REST_URL: &str = "https://api.github.com";

/// Connection settings for [`crate::GithubClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Endpoint the profile query is POSTed to.
    pub graphql_url: String,

    /// Base URL artifact paths are appended to (`{rest_url}/repos/...`).
    pub rest_url: String,

    /// `User-Agent` sent with every request. GitHub rejects requests
    /// without one.
    pub user_agent: String,

    /// Overall deadline per request. `None` leaves requests unbounded.
    pub request_timeout: Option<Duration>,

    /// Deadline for establishing a connection.
    pub connect_timeout: Option<Duration>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            graphql_url: DEFAULT_GRAPHQL_URL.to_owned(),
            rest_url: DEFAULT_REST_URL.to_owned(),
            user_agent: concat!("careerscope/", env!("CARGO_PKG_VERSION")).to_owned(),
            request_timeout: None,
            connect_timeout: Some(Duration::from_secs(10)),
        }
    }
}
