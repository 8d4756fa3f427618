//! The `reqwest`-backed GitHub client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, RETRY_AFTER};
use reqwest::StatusCode;
use signals::{
    AccessToken, AnalysisError, ArtifactKind, ArtifactProbe, ProbeError, ProfileQuery,
    ProfileQueryResult, QueryError, RepositoryName, Username,
};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::artifacts::artifact_url;
use crate::graphql::{into_query_result, QueryRequest, QueryResponse};
use crate::GithubConfig;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "x-github-api-version";
const API_VERSION: &str = "2022-11-28";

/// Failure to construct a [`GithubClient`].
#[derive(Debug, Error)]
pub enum GithubError {
    /// The underlying HTTP client could not be built (e.g. TLS backend
    /// initialisation failed or the user agent is not a valid header value).
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// GitHub adapter implementing both [`ProfileQuery`] and [`ArtifactProbe`].
///
/// Wraps one pooled `reqwest::Client`. The client carries no per-user state
/// (tokens are attached per request), so one instance can be shared by every
/// concurrent probe and every analysis.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    config: GithubConfig,
}

impl GithubClient {
    /// Builds a client from `config`.
    ///
    /// # Errors
    ///
    /// [`GithubError::ClientBuild`] if the HTTP client cannot be constructed.
    pub fn new(config: GithubConfig) -> Result<Self, GithubError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));

        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        let http = builder.build().map_err(GithubError::ClientBuild)?;
        Ok(Self { http, config })
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &GithubConfig {
        &self.config
    }
}

#[async_trait]
impl ProfileQuery for GithubClient {
    #[instrument(skip(self, login, token), fields(login = %login, endpoint = %self.config.graphql_url))]
    async fn profile_and_contributions(
        &self,
        login: &Username,
        token: &AccessToken,
    ) -> Result<ProfileQueryResult, AnalysisError> {
        let response = self
            .http
            .post(&self.config.graphql_url)
            .bearer_auth(token.expose())
            .json(&QueryRequest::profile(login))
            .send()
            .await
            .map_err(|err| QueryError::Transport {
                message: err.to_string(),
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AnalysisError::Auth {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            return Err(QueryError::Status {
                status: status.as_u16(),
                retry_after: retry_after(response.headers()),
            }
            .into());
        }

        let body = response.bytes().await.map_err(|err| QueryError::Transport {
            message: err.to_string(),
        })?;
        let decoded: QueryResponse =
            serde_json::from_slice(&body).map_err(|err| QueryError::Decode {
                message: err.to_string(),
            })?;

        let result = into_query_result(decoded, login)?;
        debug!(
            repositories = result.repositories.len(),
            weeks = result.calendar.weeks.len(),
            "Profile query succeeded"
        );
        Ok(result)
    }
}

#[async_trait]
impl ArtifactProbe for GithubClient {
    async fn check(
        &self,
        owner: &Username,
        repository: &RepositoryName,
        kind: ArtifactKind,
        token: &AccessToken,
    ) -> Result<bool, ProbeError> {
        let url = artifact_url(&self.config.rest_url, owner, repository, kind);
        let response = self
            .http
            .get(&url)
            .bearer_auth(token.expose())
            .send()
            .await
            .map_err(|err| ProbeError {
                repository: repository.clone(),
                kind,
                message: err.to_string(),
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS || status == StatusCode::FORBIDDEN {
            debug!(%repository, artifact = %kind, status = status.as_u16(), "Artifact check was refused");
        }
        Ok(status.is_success())
    }
}

/// Parses a `Retry-After` header given in whole seconds.
fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}
