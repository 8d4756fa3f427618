//! The profile query document and its response model.
//!
//! The response is decoded into private wire structs mirroring the query,
//! then converted into [`signals`] domain types by [`into_query_result`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use signals::{
    AnalysisError, CalendarDay, ContributionCalendar, ContributionWeek, Profile,
    ProfileQueryResult, QueryError, RepoDescriptor, RepositoryName, Username,
};
use tracing::warn;

/// Maximum number of owned repositories returned by the query.
pub const MAX_REPOSITORIES: u32 = 100;

/// The single structured query issued per analysis.
///
/// `$login` is the only variable. Repositories are owner-affiliated only and
/// ordered by stargazer count, descending.
pub const PROFILE_QUERY: &str = r#"query($login: String!) {
  user(login: $login) {
    name
    login
    bio
    location
    createdAt
    followers { totalCount }
    following { totalCount }
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            date
            weekday
            contributionCount
          }
        }
      }
    }
    repositories(first: 100, ownerAffiliations: OWNER, orderBy: {field: STARGAZERS, direction: DESC}) {
      nodes {
        name
        stargazerCount
        forkCount
        isArchived
        hasIssuesEnabled
        defaultBranchRef {
          target {
            ... on Commit {
              history(first: 100) {
                totalCount
              }
            }
          }
        }
      }
    }
  }
}"#;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct QueryRequest<'a> {
    query: &'static str,
    variables: QueryVariables<'a>,
}

#[derive(Debug, Serialize)]
struct QueryVariables<'a> {
    login: &'a str,
}

impl<'a> QueryRequest<'a> {
    pub(crate) fn profile(login: &'a Username) -> Self {
        Self {
            query: PROFILE_QUERY,
            variables: QueryVariables {
                login: login.as_str(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Response (wire shape)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct QueryResponse {
    #[serde(default)]
    data: Option<ResponseData>,
    // Kept as raw JSON: an entry without a `message` must still be surfaced.
    #[serde(default)]
    errors: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    user: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserNode {
    name: Option<String>,
    login: String,
    bio: Option<String>,
    location: Option<String>,
    created_at: DateTime<Utc>,
    followers: TotalCount,
    following: TotalCount,
    // Decoded separately so that a malformed calendar degrades to "no
    // contributions" instead of failing the query.
    #[serde(default)]
    contributions_collection: Option<serde_json::Value>,
    #[serde(default)]
    repositories: Option<RepositoryConnection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TotalCount {
    total_count: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionsCollection {
    contribution_calendar: Option<CalendarNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarNode {
    total_contributions: Option<u64>,
    #[serde(default)]
    weeks: Vec<WeekNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WeekNode {
    #[serde(default)]
    contribution_days: Vec<DayNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DayNode {
    date: String,
    weekday: Option<u8>,
    contribution_count: i64,
}

#[derive(Debug, Deserialize)]
struct RepositoryConnection {
    #[serde(default)]
    nodes: Vec<Option<RepositoryNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryNode {
    name: String,
    stargazer_count: u64,
    fork_count: u64,
    is_archived: bool,
    has_issues_enabled: bool,
    default_branch_ref: Option<BranchRef>,
}

#[derive(Debug, Deserialize)]
struct BranchRef {
    target: Option<CommitTarget>,
}

// Non-commit targets (e.g. an annotated tag) decode as an empty object.
#[derive(Debug, Deserialize)]
struct CommitTarget {
    #[serde(default)]
    history: Option<TotalCount>,
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

/// Converts a decoded response into the domain result.
///
/// # Errors
///
/// - [`QueryError::GraphQl`] when the response carries any error entry.
/// - [`QueryError::UserNotFound`] when no user is present.
/// - [`QueryError::Decode`] when a name the domain requires is empty.
pub(crate) fn into_query_result(
    response: QueryResponse,
    login: &Username,
) -> Result<ProfileQueryResult, AnalysisError> {
    if !response.errors.is_empty() {
        return Err(QueryError::GraphQl {
            messages: response.errors.iter().map(error_message).collect(),
        }
        .into());
    }

    let user = response
        .data
        .and_then(|data| data.user)
        .ok_or_else(|| QueryError::UserNotFound {
            login: login.clone(),
        })?;

    let username = Username::new(user.login).ok_or_else(|| QueryError::Decode {
        message: "user login is empty".to_owned(),
    })?;

    let calendar = user
        .contributions_collection
        .map(calendar_from_value)
        .unwrap_or_default();

    let repositories = user
        .repositories
        .map(|connection| connection.nodes)
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .map(repo_descriptor)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ProfileQueryResult {
        profile: Profile {
            name: user.name,
            username,
            bio: user.bio,
            location: user.location,
            created_at: user.created_at,
            followers: user.followers.total_count,
            following: user.following.total_count,
        },
        calendar,
        repositories,
    })
}

/// The entry's `message`, or the whole entry when it carries none.
fn error_message(entry: &serde_json::Value) -> String {
    entry
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map_or_else(|| entry.to_string(), str::to_owned)
}

fn calendar_from_value(value: serde_json::Value) -> ContributionCalendar {
    let collection: ContributionsCollection = match serde_json::from_value(value) {
        Ok(collection) => collection,
        Err(err) => {
            warn!(error = %err, "Contribution calendar is malformed; treating as empty");
            return ContributionCalendar::default();
        }
    };

    let Some(calendar) = collection.contribution_calendar else {
        return ContributionCalendar::default();
    };

    ContributionCalendar {
        total_contributions: calendar.total_contributions,
        weeks: calendar
            .weeks
            .into_iter()
            .map(|week| ContributionWeek {
                days: week
                    .contribution_days
                    .into_iter()
                    .map(|day| CalendarDay {
                        date: day.date,
                        weekday: day.weekday,
                        contribution_count: day.contribution_count,
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn repo_descriptor(node: RepositoryNode) -> Result<RepoDescriptor, QueryError> {
    let name = RepositoryName::new(node.name).ok_or_else(|| QueryError::Decode {
        message: "repository name is empty".to_owned(),
    })?;

    Ok(RepoDescriptor {
        name,
        stars: node.stargazer_count,
        forks: node.fork_count,
        archived: node.is_archived,
        issues_enabled: node.has_issues_enabled,
        commit_count: node
            .default_branch_ref
            .and_then(|branch| branch.target)
            .and_then(|target| target.history)
            .map(|history| history.total_count),
    })
}
