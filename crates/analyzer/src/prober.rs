//! Artifact presence probing for a single repository.
//!
//! All four artifact checks for one repository run concurrently and are
//! joined before returning. The prober never fails: a check that errors or
//! times out is reported as absent.

use std::sync::Arc;
use std::time::Duration;

use signals::{AccessToken, ArtifactKind, ArtifactPresence, ArtifactProbe, RepositoryName, Username};
use tracing::debug;

/// Runs the four artifact checks of one repository against an
/// [`ArtifactProbe`].
///
/// Cheap to clone; clones share the underlying probe.
#[derive(Clone)]
pub struct ArtifactProber {
    probe: Arc<dyn ArtifactProbe>,
    timeout: Option<Duration>,
}

impl ArtifactProber {
    /// Creates a prober. `timeout` bounds each individual check.
    pub fn new(probe: Arc<dyn ArtifactProbe>, timeout: Option<Duration>) -> Self {
        Self { probe, timeout }
    }

    /// Returns the presence of every [`ArtifactKind`] in `owner/repository`.
    pub async fn probe(
        &self,
        owner: &Username,
        repository: &RepositoryName,
        token: &AccessToken,
    ) -> ArtifactPresence {
        let (readme, contributing, license, docs) = tokio::join!(
            self.check(owner, repository, ArtifactKind::Readme, token),
            self.check(owner, repository, ArtifactKind::Contributing, token),
            self.check(owner, repository, ArtifactKind::License, token),
            self.check(owner, repository, ArtifactKind::Docs, token),
        );

        ArtifactPresence {
            readme,
            contributing,
            license,
            docs,
        }
    }

    async fn check(
        &self,
        owner: &Username,
        repository: &RepositoryName,
        kind: ArtifactKind,
        token: &AccessToken,
    ) -> bool {
        let check = self.probe.check(owner, repository, kind, token);
        let outcome = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, check).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    debug!(%repository, artifact = %kind, ?limit, "Artifact check timed out; reporting absent");
                    return false;
                }
            },
            None => check.await,
        };

        match outcome {
            Ok(found) => {
                debug!(%repository, artifact = %kind, found, "Artifact check completed");
                found
            }
            Err(err) => {
                debug!(%repository, artifact = %kind, error = %err, "Artifact check failed; reporting absent");
                false
            }
        }
    }
}
