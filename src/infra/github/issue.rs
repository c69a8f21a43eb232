//! Issue operations.

use indoc::indoc;
use serde::{Deserialize, Serialize};

use super::client::OctocrabClient;
use super::error::{GitHubError, Result};
use crate::infra::git::RepoId;

/// Page size used when listing issues over REST. Only the first page is read.
const REST_PAGE_SIZE: u8 = 100;

/// Number of issues requested by the GraphQL listing.
const GRAPHQL_ISSUE_LIMIT: u8 = 25;

/// The parts of an issue (or pull request) this tool cares about.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueSummary {
    pub number: u64,
    #[serde(default)]
    pub title: String,
}

/// Trait for issue operations.
#[async_trait::async_trait]
pub trait IssueClient: Send + Sync {
    /// List the first page of open issues and pull requests over REST.
    async fn list_open_issues(&self, repo: &RepoId) -> Result<Vec<IssueSummary>>;

    /// Query the first open issues with GraphQL.
    async fn query_open_issues(&self, repo: &RepoId) -> Result<Vec<IssueSummary>>;

    /// Post a new comment on an issue.
    async fn create_comment(&self, repo: &RepoId, issue_number: u64, body: &str) -> Result<()>;

    /// Transition an issue to the closed state.
    async fn close_issue(&self, repo: &RepoId, issue_number: u64) -> Result<()>;
}

#[derive(Serialize)]
struct ListIssuesParams {
    per_page: u8,
}

#[derive(Serialize)]
struct CreateCommentBody<'a> {
    body: &'a str,
}

#[derive(Serialize)]
struct UpdateStateBody {
    state: &'static str,
}

#[derive(Debug, Deserialize)]
struct OpenIssuesData {
    repository: Option<RepositoryData>,
}

#[derive(Debug, Deserialize)]
struct RepositoryData {
    issues: IssueConnection,
}

#[derive(Debug, Deserialize)]
struct IssueConnection {
    nodes: Vec<IssueSummary>,
}

const OPEN_ISSUES_QUERY: &str = indoc! {"
    query Issues($owner: String!, $name: String!, $first: Int!) {
        repository(owner: $owner, name: $name) {
            issues(first: $first, states: [OPEN]) {
                nodes {
                    title
                    number
                }
            }
        }
    }
"};

#[async_trait::async_trait]
impl IssueClient for OctocrabClient {
    async fn list_open_issues(&self, repo: &RepoId) -> Result<Vec<IssueSummary>> {
        let route = format!("/repos/{}/{}/issues", repo.owner, repo.name);
        let params = ListIssuesParams {
            per_page: REST_PAGE_SIZE,
        };
        let issues: Vec<IssueSummary> = self
            .client
            .get(route, Some(&params))
            .await
            .map_err(GitHubError::from)?;
        Ok(issues)
    }

    async fn query_open_issues(&self, repo: &RepoId) -> Result<Vec<IssueSummary>> {
        let variables = serde_json::json!({
            "owner": repo.owner,
            "name": repo.name,
            "first": GRAPHQL_ISSUE_LIMIT,
        });

        let data: OpenIssuesData = self.graphql(OPEN_ISSUES_QUERY, variables).await?;
        let repository = data.repository.ok_or_else(|| {
            GitHubError::GraphQLError(format!("Could not resolve to a Repository {repo}"))
        })?;
        Ok(repository.issues.nodes)
    }

    async fn create_comment(&self, repo: &RepoId, issue_number: u64, body: &str) -> Result<()> {
        let route = format!(
            "/repos/{}/{}/issues/{issue_number}/comments",
            repo.owner, repo.name
        );
        let _comment: serde_json::Value = self
            .client
            .post(route, Some(&CreateCommentBody { body }))
            .await
            .map_err(GitHubError::from)?;
        Ok(())
    }

    async fn close_issue(&self, repo: &RepoId, issue_number: u64) -> Result<()> {
        let route = format!("/repos/{}/{}/issues/{issue_number}", repo.owner, repo.name);
        let _issue: serde_json::Value = self
            .client
            .patch(route, Some(&UpdateStateBody { state: "closed" }))
            .await
            .map_err(GitHubError::from)?;
        Ok(())
    }
}
