//! Tuning knobs for the artifact fan-out.
//!
//! Both options default to "off", which reproduces the plain behaviour: every
//! repository is probed at once (up to `4 × repositories` requests in flight)
//! and every check is awaited to completion.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for the probe stage of an analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Maximum number of repositories probed at the same time. Each
    /// repository issues four checks, so at most `4 × limit` requests are in
    /// flight. `None` means no limit.
    pub max_concurrent_repositories: Option<usize>,

    /// Deadline for a single artifact check. An expired check counts as
    /// absent. `None` waits for every check unconditionally.
    pub probe_timeout: Option<Duration>,
}

impl ProbeConfig {
    /// Checks that every configured limit is usable.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] when a limit is set to zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_concurrent_repositories == Some(0) {
            return Err(ConfigError::ZeroConcurrencyLimit);
        }
        if self.probe_timeout == Some(Duration::ZERO) {
            return Err(ConfigError::ZeroProbeTimeout);
        }
        Ok(())
    }
}

/// An invalid [`ProbeConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A concurrency limit of zero would never let a probe start.
    #[error("max_concurrent_repositories must be at least 1")]
    ZeroConcurrencyLimit,

    /// A zero deadline would report every artifact absent.
    #[error("probe_timeout must be greater than zero")]
    ZeroProbeTimeout,
}
