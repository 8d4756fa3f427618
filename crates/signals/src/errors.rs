//! Error and retry-policy types for the career-signal domain.
//!
//! [`AnalysisError`] covers conditions that abort an analysis: the profile
//! query is the root of all downstream work, so any failure there is terminal
//! and no partial summary is produced.
//!
//! [`ProbeError`] describes a failed artifact check. It never escapes the
//! orchestrator; a failed check is folded into "absent".
//!
//! [`RetryPolicy`] lets a caller decide whether re-running an analysis is
//! worthwhile. The analysis itself never retries.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ArtifactKind, RepositoryName, Username};

// ---------------------------------------------------------------------------
// Retry semantics
// ---------------------------------------------------------------------------

/// Whether an error condition is worth retrying and, if so, after what delay.
///
/// - `Retryable`: connection failures, timeouts, 5xx and 429 responses.
/// - `NonRetryable`: rejected credentials, GraphQL errors, unknown users,
///   undecodable responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RetryPolicy {
    /// The operation may be retried.
    Retryable {
        /// Minimum back-off before the next attempt. `None` means apply the
        /// caller's own back-off schedule.
        after: Option<Duration>,
    },
    /// The operation must not be retried without a change of input or
    /// credentials.
    NonRetryable,
}

// ---------------------------------------------------------------------------
// Analysis-level errors
// ---------------------------------------------------------------------------

/// Terminal failure of an analysis.
///
/// Callers only need to distinguish "credentials were rejected" from
/// "anything else went wrong with the query"; [`AnalysisError::is_auth`]
/// answers that directly.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The query endpoint rejected the access token (HTTP 401 or 403).
    ///
    /// Not retryable without new credentials.
    #[error("Authentication rejected by the query endpoint (HTTP {status})")]
    Auth {
        /// HTTP status returned by the endpoint.
        status: u16,
    },

    /// The profile query failed for any other reason.
    #[error(transparent)]
    Query(#[from] QueryError),
}

impl AnalysisError {
    /// Returns `true` if the failure was a credential rejection.
    pub fn is_auth(&self) -> bool {
        matches!(self, AnalysisError::Auth { .. })
    }

    /// Classifies this error for a caller deciding whether to re-run.
    pub fn retry_policy(&self) -> RetryPolicy {
        match self {
            AnalysisError::Auth { .. } => RetryPolicy::NonRetryable,
            AnalysisError::Query(QueryError::Transport { .. }) => {
                RetryPolicy::Retryable { after: None }
            }
            AnalysisError::Query(QueryError::Status {
                status,
                retry_after,
            }) if *status == 429 || *status >= 500 => RetryPolicy::Retryable {
                after: *retry_after,
            },
            AnalysisError::Query(_) => RetryPolicy::NonRetryable,
        }
    }
}

/// Reasons a profile query can fail other than rejected credentials.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("Profile query transport failure: {message}")]
    Transport {
        /// Description of the underlying transport error.
        message: String,
    },

    /// The endpoint answered with a non-success status other than 401/403.
    #[error("Profile query returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Delay requested by a `Retry-After` header, if any.
        retry_after: Option<Duration>,
    },

    /// The response body was not a valid query response document.
    #[error("Profile query response could not be decoded: {message}")]
    Decode {
        /// Description of the decoding failure.
        message: String,
    },

    /// The response carried a non-empty `errors` list.
    #[error("GraphQL error: {}", .messages.join("; "))]
    GraphQl {
        /// The `message` of every reported error, in response order.
        messages: Vec<String>,
    },

    /// The response carried no errors but no user either.
    #[error("No user found for login '{login}'")]
    UserNotFound {
        /// The login that was queried.
        login: Username,
    },
}

// ---------------------------------------------------------------------------
// Probe errors
// ---------------------------------------------------------------------------

/// A single artifact check that did not produce an HTTP status.
#[derive(Debug, Error)]
#[error("Probe for {kind} in '{repository}' failed: {message}")]
pub struct ProbeError {
    /// Repository being probed.
    pub repository: RepositoryName,
    /// Artifact being checked.
    pub kind: ArtifactKind,
    /// Description of the underlying failure.
    pub message: String,
}
