//! CareerScope analysis orchestration.
//!
//! This crate sequences one analysis: the profile query, the contribution
//! aggregation, and the concurrent artifact fan-out. It talks to the outside
//! world only through the [`signals::ProfileQuery`] and
//! [`signals::ArtifactProbe`] ports.
//!
//! ## Architectural Layer
//!
//! **Orchestration layer.** The orchestrator sequences calls between business
//! logic in the [`signals`] crate and infrastructure ports. It contains no
//! domain rules of its own beyond the fault-containment policy of the probe
//! stage.
//!
//! ## Concurrency
//!
//! Given `R` repositories, an unconfigured analyzer issues up to `4R` artifact
//! checks at once. [`ProbeConfig::max_concurrent_repositories`] caps that at
//! `4 × limit`; [`ProbeConfig::probe_timeout`] bounds each check.

pub mod config;
pub mod orchestrator;
pub mod prober;

pub use config::{ConfigError, ProbeConfig};
pub use orchestrator::Analyzer;
pub use prober::ArtifactProber;
