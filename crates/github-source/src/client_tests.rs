//! Unit tests for GitHubClient using wiremock

#[cfg(test)]
mod tests {
    use crate::client::GitHubClient;
    use crate::error::GitHubError;
    use importer_core::{IssueSource, RepoId};
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Helper to create a mock GitHub issue response
    fn mock_github_issue(number: u64, title: &str, comments: u64) -> serde_json::Value {
        serde_json::json!({
            "id": 1000 + number,
            "number": number,
            "title": title,
            "state": "open",
            "comments": comments,
            "labels": [
                {"name": "bug"},
                {"name": "enhancement"}
            ],
            "user": {"login": "reporter", "id": 2},
            "created_at": "2024-01-15T10:30:00Z",
            "updated_at": "2024-01-15T12:00:00Z",
            "pull_request": null
        })
    }

    /// Helper to create a mock GitHub PR disguised as issue
    fn mock_github_pr(number: u64, title: &str) -> serde_json::Value {
        serde_json::json!({
            "id": 2000 + number,
            "number": number,
            "title": title,
            "state": "open",
            "comments": 0,
            "labels": [],
            "user": {"login": "developer", "id": 3},
            "created_at": "2024-01-15T10:30:00Z",
            "updated_at": "2024-01-15T12:00:00Z",
            "pull_request": {
                "url": "https://api.github.com/repos/owner/repo/pulls/99"
            }
        })
    }

    #[tokio::test]
    async fn test_list_issues_single_page() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/issues"))
            .and(query_param("state", "open"))
            .and(query_param("per_page", "30"))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("Accept", "application/vnd.github+json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                mock_github_issue(1, "Found a bug", 3),
                mock_github_issue(2, "Another bug", 0)
            ])))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri(), Some("test-token"));
        let page = client.list_issues(&RepoId::new("owner/repo")).unwrap();

        assert_eq!(page.issues.len(), 2);
        assert!(page.next_url.is_none());
    }

    #[tokio::test]
    async fn test_list_issues_without_token_sends_no_auth() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/issues"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri(), None);
        let page = client.list_issues(&RepoId::new("owner/repo")).unwrap();
        assert!(page.issues.is_empty());

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_state_filter_is_forwarded() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/issues"))
            .and(query_param("state", "all"))
            .and(query_param("per_page", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri(), None)
            .state("all")
            .per_page(100);
        let page = client.list_issues(&RepoId::new("owner/repo")).unwrap();
        assert!(page.issues.is_empty());
    }

    #[tokio::test]
    async fn test_pagination_follows_link_header() {
        let mock_server = MockServer::start().await;
        let next_url = format!("{}/repositories/1296269/issues?page=2", mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/issues"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([mock_github_issue(1, "First", 3)]))
                    .insert_header(
                        "link",
                        format!("<{}>; rel=\"next\", <{}>; rel=\"last\"", next_url, next_url)
                            .as_str(),
                    ),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/repositories/1296269/issues"))
            .and(query_param("page", "2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([mock_github_issue(2, "Second", 7)])),
            )
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri(), None);
        let repo = RepoId::new("owner/repo");

        let first = client.first_page(&repo).unwrap();
        assert_eq!(first.issues.len(), 1);
        assert_eq!(first.issues[0].number, 1);
        let token = first.next.expect("next token expected");

        let second = client.next_page(&token).unwrap();
        assert_eq!(second.issues.len(), 1);
        assert_eq!(second.issues[0].number, 2);
        assert!(second.next.is_none());
    }

    #[tokio::test]
    async fn test_first_page_filters_pull_requests() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/issues"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                mock_github_issue(1, "Real issue", 3),
                mock_github_pr(99, "A pull request"),
                mock_github_issue(2, "Another issue", 0)
            ])))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri(), None);
        let page = client.first_page(&RepoId::new("owner/repo")).unwrap();

        assert_eq!(page.issues.len(), 2);
        assert_eq!(page.issues[0].number, 1);
        assert_eq!(page.issues[1].number, 2);
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/issues"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "message": "Bad credentials"
            })))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri(), Some("bad-token"));
        let err = client.list_issues(&RepoId::new("owner/repo")).unwrap_err();
        assert!(matches!(err, GitHubError::Unauthorized));
    }

    #[tokio::test]
    async fn test_rate_limit_detection() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/issues"))
            .respond_with(
                ResponseTemplate::new(403)
                    .insert_header("x-ratelimit-remaining", "0")
                    .set_body_json(serde_json::json!({
                        "message": "API rate limit exceeded"
                    })),
            )
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri(), None);
        let err = client.list_issues(&RepoId::new("owner/repo")).unwrap_err();
        assert!(matches!(err, GitHubError::RateLimited));
    }

    #[tokio::test]
    async fn test_api_error_carries_github_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/issues"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "message": "Server Error"
            })))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri(), None);
        let err = client.list_issues(&RepoId::new("owner/repo")).unwrap_err();
        match err {
            GitHubError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Server Error");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_issue_fails_the_page() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/issues"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "title": "missing everything else"}
            ])))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri(), None);
        let err = client.first_page(&RepoId::new("owner/repo")).unwrap_err();
        assert!(matches!(err, importer_core::ImportError::Parse(_)));
    }
}
