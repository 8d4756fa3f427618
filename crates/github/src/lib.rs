//! CareerScope GitHub infrastructure adapter.
//!
//! Implements the port traits defined in the [`signals`] crate
//! ([`signals::ProfileQuery`] and [`signals::ArtifactProbe`]) against the
//! GitHub GraphQL and REST APIs using `reqwest`.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain domain rules. All GitHub
//! API details (endpoint URLs, headers, status mapping, response decoding)
//! are handled here; the [`signals`] and `analyzer` crates never see them.
//!
//! ## Status mapping
//!
//! | Call | Response | Result |
//! |------|----------|--------|
//! | Profile query | 401 / 403 | `AnalysisError::Auth` |
//! | Profile query | other non-2xx | `QueryError::Status` |
//! | Profile query | `errors` present | `QueryError::GraphQl` |
//! | Artifact check | 2xx | `Ok(true)` |
//! | Artifact check | any other status | `Ok(false)` |
//! | Artifact check | no response | `Err(ProbeError)` |

mod artifacts;
pub mod client;
pub mod config;
pub mod graphql;

pub use client::{GithubClient, GithubError};
pub use config::{GithubConfig, DEFAULT_GRAPHQL_URL, DEFAULT_REST_URL};
