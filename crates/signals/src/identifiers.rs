//! Newtype domain identifiers.
//!
//! Every domain concept that has an identity is represented as a distinct newtype
//! wrapping a primitive. This prevents accidentally interchanging, for example,
//! a [`Username`] with a [`RepositoryName`] even though both are `String` under
//! the hood.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Identifiers: String-backed (GitHub names)
// ---------------------------------------------------------------------------

string_id! {
    /// A GitHub login (e.g. `"octocat"`).
    ///
    /// Unique key of a [`crate::Profile`]; also the owner segment of every
    /// artifact URL probed for that user's repositories.
    Username
}

string_id! {
    /// The name of a repository owned by the analysed user (without the owner
    /// prefix).
    RepositoryName
}

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

/// A bearer token used to authenticate against the GitHub APIs.
///
/// The value is never printed: both `Debug` and `Display` render a fixed
/// placeholder, so a token that ends up in a span field or an error message
/// does not leak. Use [`AccessToken::expose`] only when building a request.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a token, returning `None` if the value is empty or whitespace.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let v = value.into();
        if v.trim().is_empty() {
            None
        } else {
            Some(Self(v))
        }
    }

    /// Returns the raw secret for use in an `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

impl std::fmt::Display for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<redacted>")
    }
}

// ---------------------------------------------------------------------------
// Identifiers: UUID-backed (internally generated)
// ---------------------------------------------------------------------------

/// Identifies a single analysis run (one invocation of `analyze`).
///
/// Generated fresh for every call; recorded on the analysis span so the query
/// and every probe event from one run can be correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisId(Uuid);

impl AnalysisId {
    /// Generates a new random analysis identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
