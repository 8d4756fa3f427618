//! Value types for the career-signal domain.
//!
//! Two families live here. The *query* types ([`Profile`],
//! [`ContributionCalendar`], [`RepoDescriptor`]) are immutable snapshots of a
//! single profile query response. The *summary* types ([`Activity`],
//! [`ArtifactPresence`], [`RepoReport`], [`AnalysisSummary`]) are produced by
//! one analysis and handed to the caller; nothing here outlives that call.

use chrono::{DateTime, NaiveDate, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::{RepositoryName, Username};

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// Public profile fields of the analysed user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    /// Display name; `None` when the user has not set one.
    pub name: Option<String>,
    /// Login, the unique key of the profile.
    pub username: Username,
    pub bio: Option<String>,
    pub location: Option<String>,
    /// Account creation time.
    pub created_at: DateTime<Utc>,
    /// Total follower count.
    pub followers: u64,
    /// Total count of accounts this user follows.
    pub following: u64,
}

// ---------------------------------------------------------------------------
// Contribution calendar (aggregator input)
// ---------------------------------------------------------------------------

/// The server-provided contribution calendar, in wire shape.
///
/// Values are kept raw (string dates, signed counts) so that a malformed
/// entry is dropped by the aggregator instead of failing the whole query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributionCalendar {
    /// Total as reported by the server. Informational only; the summary total
    /// is always recomputed from the daily series.
    pub total_contributions: Option<u64>,
    /// Weeks, oldest first.
    pub weeks: Vec<ContributionWeek>,
}

/// One calendar week (up to seven days; the first and last week of the
/// window may be partial).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributionWeek {
    pub days: Vec<CalendarDay>,
}

/// One calendar cell as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    /// ISO date string, `YYYY-MM-DD`.
    pub date: String,
    /// Day of week, 0 = Sunday.
    pub weekday: Option<u8>,
    pub contribution_count: i64,
}

// ---------------------------------------------------------------------------
// Activity (aggregator output)
// ---------------------------------------------------------------------------

/// Contribution count for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u64,
}

/// Contributions summed per year-month, in first-occurrence order.
///
/// Serialises as a JSON object (`{"2024-05": 3, "2024-06": 3}`) whose key
/// order is the insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyRollup {
    entries: Vec<(String, u64)>,
}

impl MonthlyRollup {
    /// Creates an empty rollup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` to `month`, appending the key if it has not been seen.
    pub fn add(&mut self, month: &str, count: u64) {
        match self.entries.iter_mut().find(|(key, _)| key == month) {
            Some((_, total)) => *total += count,
            None => self.entries.push((month.to_owned(), count)),
        }
    }

    /// Returns the summed count for `month`, if present.
    pub fn get(&self, month: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(key, _)| key == month)
            .map(|(_, count)| *count)
    }

    /// Iterates `(month, count)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// Sum over all months.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for MonthlyRollup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (month, count) in &self.entries {
            map.serialize_entry(month, count)?;
        }
        map.end()
    }
}

/// Daily series plus monthly rollup derived from one contribution calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Activity {
    /// One entry per valid calendar day, oldest first.
    pub daily: Vec<ContributionDay>,
    pub monthly: MonthlyRollup,
    /// Sum of `daily`; always equal to `monthly.total()`.
    pub total_contributions: u64,
}

// ---------------------------------------------------------------------------
// Repositories
// ---------------------------------------------------------------------------

/// One owned repository as returned by the profile query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoDescriptor {
    pub name: RepositoryName,
    pub stars: u64,
    pub forks: u64,
    pub archived: bool,
    pub issues_enabled: bool,
    /// Commit count on the default branch; `None` for an empty repository.
    pub commit_count: Option<u64>,
}

/// Everything one profile query returns.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileQueryResult {
    pub profile: Profile,
    pub calendar: ContributionCalendar,
    /// Owned repositories ordered by star count, descending (server order).
    pub repositories: Vec<RepoDescriptor>,
}

// ---------------------------------------------------------------------------
// Artifacts
// ---------------------------------------------------------------------------

/// A well-known repository artifact whose presence is probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Readme,
    Contributing,
    License,
    Docs,
}

impl ArtifactKind {
    /// Every kind, in the order they appear in a summary.
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Readme,
        ArtifactKind::Contributing,
        ArtifactKind::License,
        ArtifactKind::Docs,
    ];

    /// Lower-case key used in summaries and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::Readme => "readme",
            ArtifactKind::Contributing => "contributing",
            ArtifactKind::License => "license",
            ArtifactKind::Docs => "docs",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Found/not-found flag for each [`ArtifactKind`] of one repository.
///
/// Exactly one flag per kind exists by construction. `false` means "not
/// confirmed present": genuine absence, missing permission and a failed
/// request are indistinguishable here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactPresence {
    pub readme: bool,
    pub contributing: bool,
    pub license: bool,
    pub docs: bool,
}

impl ArtifactPresence {
    /// All four artifacts absent.
    pub fn absent() -> Self {
        Self::default()
    }

    /// Builds a presence map from `(kind, found)` pairs; kinds not listed
    /// stay absent.
    pub fn from_checks(checks: impl IntoIterator<Item = (ArtifactKind, bool)>) -> Self {
        let mut presence = Self::absent();
        for (kind, found) in checks {
            presence.set(kind, found);
        }
        presence
    }

    pub fn get(&self, kind: ArtifactKind) -> bool {
        match kind {
            ArtifactKind::Readme => self.readme,
            ArtifactKind::Contributing => self.contributing,
            ArtifactKind::License => self.license,
            ArtifactKind::Docs => self.docs,
        }
    }

    pub fn set(&mut self, kind: ArtifactKind, found: bool) {
        match kind {
            ArtifactKind::Readme => self.readme = found,
            ArtifactKind::Contributing => self.contributing = found,
            ArtifactKind::License => self.license = found,
            ArtifactKind::Docs => self.docs = found,
        }
    }

    /// Number of artifacts found.
    pub fn found_count(&self) -> usize {
        ArtifactKind::ALL.iter().filter(|kind| self.get(**kind)).count()
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Artifact presence for one repository, keyed by its name.
///
/// Serialises flattened: `{"name": "alpha", "readme": true, ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoReport {
    pub name: RepositoryName,
    #[serde(flatten)]
    pub presence: ArtifactPresence,
}

/// Result of one analysis: profile, activity, and per-repository artifact
/// presence in the query's repository order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    pub profile: Profile,
    pub activity: Activity,
    pub repos: Vec<RepoReport>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn monthly_rollup_keeps_first_occurrence_order() {
        let mut rollup = MonthlyRollup::new();
        rollup.add("2024-06", 2);
        rollup.add("2024-05", 1);
        rollup.add("2024-06", 3);

        let keys: Vec<&str> = rollup.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["2024-06", "2024-05"]);
        assert_eq!(rollup.get("2024-06"), Some(5));
        assert_eq!(rollup.total(), 6);
    }

    #[test]
    fn monthly_rollup_serialises_as_ordered_object() {
        let mut rollup = MonthlyRollup::new();
        rollup.add("2024-05", 3);
        rollup.add("2024-06", 3);
        assert_eq!(
            serde_json::to_string(&rollup).unwrap(),
            r#"{"2024-05":3,"2024-06":3}"#
        );
    }

    #[test]
    fn presence_from_checks_defaults_unlisted_kinds_to_absent() {
        let presence = ArtifactPresence::from_checks([
            (ArtifactKind::Readme, true),
            (ArtifactKind::License, true),
        ]);
        assert!(presence.get(ArtifactKind::Readme));
        assert!(presence.get(ArtifactKind::License));
        assert!(!presence.get(ArtifactKind::Contributing));
        assert!(!presence.get(ArtifactKind::Docs));
        assert_eq!(presence.found_count(), 2);
    }

    #[test]
    fn repo_report_serialises_flat_with_all_four_keys() {
        let report = RepoReport {
            name: RepositoryName::new("alpha").unwrap(),
            presence: ArtifactPresence::absent(),
        };
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "name": "alpha",
                "readme": false,
                "contributing": false,
                "license": false,
                "docs": false,
            })
        );
    }

    #[test]
    fn artifact_kinds_use_summary_keys() {
        let keys: Vec<&str> = ArtifactKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["readme", "contributing", "license", "docs"]);
        assert_eq!(ArtifactKind::Docs.to_string(), "docs");
    }
}
