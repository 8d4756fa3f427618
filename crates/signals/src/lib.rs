//! Career-signal domain for CareerScope.
//!
//! This crate contains every domain concept, newtype identifier, value type,
//! and error type used to summarise a GitHub user's profile, contribution
//! history, and repository hygiene. Infrastructure crates implement the port
//! traits defined here; they never add domain rules.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It defines *what* is needed; infrastructure crates define *how* to supply it.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`Username`, `RepositoryName`, `AccessToken`, `AnalysisId`) |
//! | [`types`] | Profile, calendar, repository, artifact and summary value types |
//! | [`contributions`] | Pure calendar → daily/monthly aggregation |
//! | [`errors`] | Analysis, query and probe errors plus retry classification |
//! | [`ports`] | `ProfileQuery` and `ArtifactProbe` traits |

pub mod contributions;
pub mod errors;
pub mod identifiers;
pub mod ports;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use contributions::aggregate;
pub use errors::{AnalysisError, ProbeError, QueryError, RetryPolicy};
pub use identifiers::{AccessToken, AnalysisId, RepositoryName, Username};
pub use ports::{ArtifactProbe, ProfileQuery};
pub use types::{
    Activity, AnalysisSummary, ArtifactKind, ArtifactPresence, CalendarDay, ContributionCalendar,
    ContributionDay, ContributionWeek, MonthlyRollup, Profile, ProfileQueryResult, RepoDescriptor,
    RepoReport,
};
