//! REST endpoints used to detect repository artifacts.
//!
//! Each [`ArtifactKind`] maps to one GET endpoint scoped by owner and
//! repository. Only the status code of the response matters.

use signals::{ArtifactKind, RepositoryName, Username};

/// Path of the existence endpoint for `kind`, relative to the repository.
pub(crate) fn endpoint_path(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::Readme => "readme",
        ArtifactKind::Contributing => "contents/CONTRIBUTING.md",
        ArtifactKind::License => "license",
        ArtifactKind::Docs => "contents/docs",
    }
}

/// Full URL of the existence endpoint for `kind` in `owner/repository`.
pub(crate) fn artifact_url(
    rest_url: &str,
    owner: &Username,
    repository: &RepositoryName,
    kind: ArtifactKind,
) -> String {
    format!(
        "{}/repos/{}/{}/{}",
        rest_url.trim_end_matches('/'),
        owner,
        repository,
        endpoint_path(kind)
    )
}
