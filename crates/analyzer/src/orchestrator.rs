//! The analysis orchestrator.
//!
//! One analysis runs three stages in strict order:
//!
//! 1. **Query**: a single [`ProfileQuery`] call. Any failure ends the
//!    analysis; no probe is issued and no partial summary is returned.
//! 2. **Transform**: [`signals::aggregate`] over the returned calendar.
//! 3. **Fan-out**: one spawned task per repository, each running the four
//!    artifact checks of [`ArtifactProber`]. All tasks are joined and the
//!    results are zipped back against the query's repository order, so
//!    completion order never leaks into the summary.

use std::sync::Arc;
use std::time::Instant;

use signals::{
    aggregate, AccessToken, AnalysisError, AnalysisId, AnalysisSummary, ArtifactPresence,
    ArtifactProbe, ProfileQuery, ProfileQueryResult, RepoDescriptor, RepoReport, Username,
};
use tokio::sync::Semaphore;
use tracing::{debug, info, info_span, instrument, warn, Instrument};

use crate::{ArtifactProber, ConfigError, ProbeConfig};

/// Drives analyses against a pair of ports.
///
/// Holds no per-analysis state; one instance may run any number of analyses,
/// concurrently or not.
#[derive(Clone)]
pub struct Analyzer {
    query: Arc<dyn ProfileQuery>,
    prober: ArtifactProber,
    config: ProbeConfig,
}

impl Analyzer {
    /// Creates an analyzer.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] if `config` fails validation.
    pub fn new(
        query: Arc<dyn ProfileQuery>,
        probe: Arc<dyn ArtifactProbe>,
        config: ProbeConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            query,
            prober: ArtifactProber::new(probe, config.probe_timeout),
            config,
        })
    }

    /// Produces the summary for `username`.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::Auth`] or [`AnalysisError::Query`] from the query
    /// stage. Probe failures are never errors; they show up as absent
    /// artifacts.
    #[instrument(
        name = "analyze",
        skip(self, username, token),
        fields(username = %username, analysis_id = %AnalysisId::new_random())
    )]
    pub async fn analyze(
        &self,
        username: &Username,
        token: &AccessToken,
    ) -> Result<AnalysisSummary, AnalysisError> {
        let started = Instant::now();

        let ProfileQueryResult {
            profile,
            calendar,
            repositories,
        } = self.query.profile_and_contributions(username, token).await?;

        let activity = aggregate(&calendar);
        if let Some(reported) = calendar.total_contributions {
            if reported != activity.total_contributions {
                debug!(
                    reported,
                    computed = activity.total_contributions,
                    "Server contribution total differs from the daily series"
                );
            }
        }

        let presences = self.probe_all(username, &repositories, token).await;
        let repos: Vec<RepoReport> = repositories
            .into_iter()
            .zip(presences)
            .map(|(repo, presence)| RepoReport {
                name: repo.name,
                presence,
            })
            .collect();

        info!(
            repositories = repos.len(),
            days = activity.daily.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Analysis complete"
        );

        Ok(AnalysisSummary {
            profile,
            activity,
            repos,
        })
    }

    /// Probes every repository concurrently; the result is index-aligned with
    /// `repositories`.
    async fn probe_all(
        &self,
        owner: &Username,
        repositories: &[RepoDescriptor],
        token: &AccessToken,
    ) -> Vec<ArtifactPresence> {
        let gate = self
            .config
            .max_concurrent_repositories
            .map(|limit| Arc::new(Semaphore::new(limit)));

        let handles: Vec<_> = repositories
            .iter()
            .map(|repo| {
                let prober = self.prober.clone();
                let gate = gate.clone();
                let owner = owner.clone();
                let name = repo.name.clone();
                let token = token.clone();
                let span = info_span!("probe_repository", repository = %name);

                tokio::spawn(
                    async move {
                        // A closed semaphore is impossible here; treat it as "no gate".
                        let _permit = match gate {
                            Some(gate) => gate.acquire_owned().await.ok(),
                            None => None,
                        };
                        prober.probe(&owner, &name, &token).await
                    }
                    .instrument(span),
                )
            })
            .collect();

        futures::future::join_all(handles)
            .await
            .into_iter()
            .zip(repositories)
            .map(|(joined, repo)| match joined {
                Ok(presence) => presence,
                Err(err) => {
                    warn!(repository = %repo.name, error = %err, "Probe task did not complete; reporting all artifacts absent");
                    ArtifactPresence::absent()
                }
            })
            .collect()
    }
}
