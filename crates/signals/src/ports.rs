//! Port traits implemented by infrastructure adapters.
//!
//! The orchestrator drives an analysis purely through these two traits; the
//! `github` crate supplies the production implementation and tests supply
//! in-memory fakes. Both take the access token per call so that a single
//! adapter (and its connection pool) can serve any number of analyses.

use async_trait::async_trait;

use crate::{
    AccessToken, AnalysisError, ArtifactKind, ProbeError, ProfileQueryResult, RepositoryName,
    Username,
};

/// Executes the single structured profile query.
#[async_trait]
pub trait ProfileQuery: Send + Sync {
    /// Fetches the profile, contribution calendar and owned repositories of
    /// `login`, repositories ordered by star count descending.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::Auth`] when the endpoint rejects `token`.
    /// - [`AnalysisError::Query`] for every other failure, including a
    ///   response carrying an `errors` list.
    async fn profile_and_contributions(
        &self,
        login: &Username,
        token: &AccessToken,
    ) -> Result<ProfileQueryResult, AnalysisError>;
}

/// Checks whether one well-known artifact exists in a repository.
#[async_trait]
pub trait ArtifactProbe: Send + Sync {
    /// Returns `Ok(true)` iff the artifact endpoint answered with a 2xx
    /// status and `Ok(false)` for any other status.
    ///
    /// # Errors
    ///
    /// [`ProbeError`] when no status was obtained at all. Callers treat this
    /// the same as `Ok(false)`.
    async fn check(
        &self,
        owner: &Username,
        repository: &RepositoryName,
        kind: ArtifactKind,
        token: &AccessToken,
    ) -> Result<bool, ProbeError>;
}
