//! wiremock-based GitHub mock server for testing.
//!
//! Provides `GitHubMockServer` for HTTP-level mocking of GitHub API calls.
//!
//! # Usage
//!
//! Use the builder pattern via `mock.repo(owner, repo)` for a fluent API:
//!
//! ```ignore
//! let mock = GitHubMockServer::start().await;
//! let ctx = mock.repo("owner", "repo");
//!
//! ctx.list_issues(&[(5, "Bug"), (9, "Feature")]).await;
//! ctx.graphql_open_issues(&[(1, "Hello")]).await;
//! ctx.issue(5).create_comment("hi").await;
//! ctx.issue(5).close().await;
//! ```

use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use super::client::OctocrabClient;

/// Create a mock issue JSON object shaped like the REST issues endpoint.
fn mock_issue(owner: &str, repo: &str, number: u64, title: &str, state: &str) -> serde_json::Value {
    json!({
        "id": number * 1000,
        "node_id": format!("I_{number}"),
        "url": format!("https://api.github.com/repos/{owner}/{repo}/issues/{number}"),
        "html_url": format!("https://github.com/{owner}/{repo}/issues/{number}"),
        "number": number,
        "title": title,
        "state": state,
        "body": null,
        "user": {"login": "testuser", "id": 1},
        "labels": [],
        "comments": 0
    })
}

/// wiremock-based GitHub mock server for testing.
///
/// This provides HTTP-level mocking for GitHub API endpoints, allowing tests
/// to verify actual HTTP requests rather than mocking at the trait level.
pub struct GitHubMockServer {
    server: MockServer,
}

impl GitHubMockServer {
    /// Start a new mock server.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get an OctocrabClient configured to use this mock server.
    pub fn client(&self) -> OctocrabClient {
        OctocrabClient::with_base_url(&self.server.uri(), "test-token").unwrap()
    }

    /// Create a repository context for building mocks.
    pub fn repo<'a>(&'a self, owner: &'a str, repo: &'a str) -> MockRepoContext<'a> {
        MockRepoContext {
            server: &self.server,
            owner,
            repo,
        }
    }

    /// Mock any GraphQL request to answer with the given `data` payload.
    pub async fn graphql_data(&self, data: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": data })))
            .mount(&self.server)
            .await;
    }

    /// Mock any GraphQL request to answer with a GraphQL-level error.
    pub async fn graphql_error(&self, message: &str) {
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": null,
                "errors": [{"type": "NOT_FOUND", "message": message}]
            })))
            .mount(&self.server)
            .await;
    }

    /// Requests received so far, in arrival order.
    pub async fn received_requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}

/// Repository context for building mocks.
///
/// Created via `GitHubMockServer::repo()`.
pub struct MockRepoContext<'a> {
    server: &'a MockServer,
    owner: &'a str,
    repo: &'a str,
}

impl<'a> MockRepoContext<'a> {
    /// Create an issue mock builder.
    pub fn issue(&self, number: u64) -> MockIssueBuilder<'_> {
        MockIssueBuilder {
            server: self.server,
            owner: self.owner,
            repo: self.repo,
            number,
        }
    }

    /// Mock GET /repos/{owner}/{repo}/issues?per_page=100.
    pub async fn list_issues(&self, issues: &[(u64, &str)]) {
        let body: Vec<serde_json::Value> = issues
            .iter()
            .map(|(number, title)| mock_issue(self.owner, self.repo, *number, title, "open"))
            .collect();

        Mock::given(method("GET"))
            .and(path(format!("/repos/{}/{}/issues", self.owner, self.repo)))
            .and(query_param("per_page", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(self.server)
            .await;
    }

    /// Mock GET /repos/{owner}/{repo}/issues failing with the given status.
    pub async fn list_issues_error(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/repos/{}/{}/issues", self.owner, self.repo)))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "message": "Not Found",
                "documentation_url": "https://docs.github.com/rest"
            })))
            .mount(self.server)
            .await;
    }

    /// Mock the GraphQL open-issues query for this repository.
    pub async fn graphql_open_issues(&self, issues: &[(u64, &str)]) {
        let nodes: Vec<serde_json::Value> = issues
            .iter()
            .map(|(number, title)| json!({"number": number, "title": title}))
            .collect();

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(body_string_contains("states: [OPEN]"))
            .and(body_string_contains(format!("\"owner\":\"{}\"", self.owner)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "repository": {
                        "issues": {
                            "nodes": nodes
                        }
                    }
                }
            })))
            .mount(self.server)
            .await;
    }
}

/// Builder for mocking single-issue endpoints.
pub struct MockIssueBuilder<'a> {
    server: &'a MockServer,
    owner: &'a str,
    repo: &'a str,
    number: u64,
}

impl MockIssueBuilder<'_> {
    /// Mock POST /repos/{owner}/{repo}/issues/{number}/comments expecting `body`.
    pub async fn create_comment(self, body: &str) {
        let (owner, repo, number) = (self.owner, self.repo, self.number);
        Mock::given(method("POST"))
            .and(path(format!("/repos/{owner}/{repo}/issues/{number}/comments")))
            .and(body_json(json!({ "body": body })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 1,
                "node_id": "IC_test",
                "url": format!("https://api.github.com/repos/{owner}/{repo}/issues/comments/1"),
                "html_url": format!("https://github.com/{owner}/{repo}/issues/{number}#issuecomment-1"),
                "body": body,
                "user": {"login": "testuser", "id": 1},
                "created_at": "2024-01-02T00:00:00Z"
            })))
            .mount(self.server)
            .await;
    }

    /// Mock POST /repos/{owner}/{repo}/issues/{number}/comments failing with `status`.
    pub async fn create_comment_error(self, status: u16) {
        Mock::given(method("POST"))
            .and(path(format!(
                "/repos/{}/{}/issues/{}/comments",
                self.owner, self.repo, self.number
            )))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "message": "Server Error",
                "documentation_url": "https://docs.github.com/rest"
            })))
            .mount(self.server)
            .await;
    }

    /// Mock PATCH /repos/{owner}/{repo}/issues/{number} with `{"state": "closed"}`.
    pub async fn close(self) {
        let (owner, repo, number) = (self.owner, self.repo, self.number);
        Mock::given(method("PATCH"))
            .and(path(format!("/repos/{owner}/{repo}/issues/{number}")))
            .and(body_json(json!({ "state": "closed" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(mock_issue(owner, repo, number, "Test Issue", "closed")),
            )
            .mount(self.server)
            .await;
    }

    /// Mock PATCH /repos/{owner}/{repo}/issues/{number} failing with 403.
    pub async fn close_forbidden(self) {
        Mock::given(method("PATCH"))
            .and(path(format!(
                "/repos/{}/{}/issues/{}",
                self.owner, self.repo, self.number
            )))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "message": "Must have admin rights to Repository.",
                "documentation_url": "https://docs.github.com/rest"
            })))
            .mount(self.server)
            .await;
    }
}
