//! Full analyses through the real adapter and orchestrator.

mod support;

use std::sync::Arc;
use std::time::Duration;

use analyzer::{Analyzer, ProbeConfig};
use github::{GithubClient, GithubConfig};
use pretty_assertions::assert_eq;
use serde_json::json;
use signals::{AccessToken, ArtifactPresence, Username};
use support::{profile_response, MockServer, Route};

fn analyzer_for(server: &MockServer, config: ProbeConfig) -> Analyzer {
    let client = Arc::new(
        GithubClient::new(GithubConfig {
            graphql_url: server.url("/graphql"),
            rest_url: server.base_url(),
            ..GithubConfig::default()
        })
        .unwrap(),
    );
    Analyzer::new(client.clone(), client, config).unwrap()
}

fn login() -> (Username, AccessToken) {
    (
        Username::new("octocat").unwrap(),
        AccessToken::new("t0ken").unwrap(),
    )
}

#[tokio::test]
async fn summary_combines_profile_activity_and_artifacts() {
    let server = MockServer::start(vec![
        Route::new("POST", "/graphql", 200).json(&profile_response(&["alpha", "beta"])),
        Route::new("GET", "/repos/octocat/alpha/readme", 200).json(&json!({})),
        Route::new("GET", "/repos/octocat/alpha/license", 200).json(&json!({})),
        Route::new("GET", "/repos/octocat/alpha/contents/docs", 503),
        Route::new("GET", "/repos/octocat/beta/contents/docs", 200).json(&json!([])),
    ])
    .await;
    let analyzer = analyzer_for(&server, ProbeConfig::default());
    let (username, token) = login();

    let summary = analyzer.analyze(&username, &token).await.unwrap();

    assert_eq!(
        serde_json::to_value(&summary).unwrap(),
        json!({
            "profile": {
                "name": "The Octocat",
                "username": "octocat",
                "bio": "Friendly mascot",
                "location": "San Francisco",
                "created_at": "2011-01-25T18:44:36Z",
                "followers": 1200,
                "following": 9
            },
            "activity": {
                "daily": [
                    { "date": "2024-05-27", "count": 1 },
                    { "date": "2024-05-28", "count": 0 },
                    { "date": "2024-05-29", "count": 2 },
                    { "date": "2024-05-30", "count": 0 },
                    { "date": "2024-05-31", "count": 0 },
                    { "date": "2024-06-01", "count": 3 },
                    { "date": "2024-06-02", "count": 0 }
                ],
                "monthly": { "2024-05": 3, "2024-06": 3 },
                "total_contributions": 6
            },
            "repos": [
                { "name": "alpha", "readme": true, "contributing": false, "license": true, "docs": false },
                { "name": "beta", "readme": false, "contributing": false, "license": false, "docs": true }
            ]
        })
    );
    assert_eq!(server.requests_to("/repos/").len(), 8);
}

#[tokio::test]
async fn rejected_credentials_issue_no_probes() {
    let server = MockServer::start(vec![Route::new("POST", "/graphql", 401)
        .json(&json!({ "message": "Bad credentials" }))])
    .await;
    let analyzer = analyzer_for(&server, ProbeConfig::default());
    let (username, token) = login();

    let err = analyzer.analyze(&username, &token).await.unwrap_err();

    assert!(err.is_auth());
    assert!(server.requests_to("/repos/").is_empty());
}

#[tokio::test]
async fn slow_artifact_endpoint_times_out_to_absent() {
    let server = MockServer::start(vec![
        Route::new("POST", "/graphql", 200).json(&profile_response(&["alpha"])),
        Route::new("GET", "/repos/octocat/alpha/readme", 200)
            .json(&json!({}))
            .delayed(Duration::from_secs(3)),
        Route::new("GET", "/repos/octocat/alpha/license", 200).json(&json!({})),
    ])
    .await;
    let analyzer = analyzer_for(
        &server,
        ProbeConfig {
            max_concurrent_repositories: Some(1),
            probe_timeout: Some(Duration::from_millis(300)),
        },
    );
    let (username, token) = login();

    let summary = analyzer.analyze(&username, &token).await.unwrap();

    assert_eq!(
        summary.repos[0].presence,
        ArtifactPresence {
            readme: false,
            contributing: false,
            license: true,
            docs: false,
        }
    );
}
