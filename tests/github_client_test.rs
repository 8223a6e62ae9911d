use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pr_report::models::ReviewState;
use pr_report::{Error, GitHubClient, PullRequestSource};

fn pull(number: u64, login: &str, created_at: &str) -> serde_json::Value {
    json!({
        "number": number,
        "state": "open",
        "user": { "login": login },
        "created_at": created_at
    })
}

#[tokio::test]
async fn test_list_pull_requests_pages_until_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/x/y/pulls"))
        .and(query_param("state", "all"))
        .and(query_param("page", "1"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("accept", "application/vnd.github+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            pull(3, "alice", "2024-05-03T10:00:00Z"),
            pull(2, "bob", "2024-05-02T10:00:00Z"),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/x/y/pulls"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            pull(1, "carol", "2023-01-01T00:00:00Z"),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/x/y/pulls"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GitHubClient::with_base_url("test-token", &mock_server.uri())
        .unwrap()
        .with_page_size(2);

    let prs = client.list_pull_requests("x/y").await.unwrap();
    let numbers: Vec<u64> = prs.iter().map(|pr| pr.number).collect();

    // All pages come back in order; window filtering is left to the caller.
    assert_eq!(numbers, vec![3, 2, 1]);
    assert_eq!(prs[2].author(), "carol");
}

#[tokio::test]
async fn test_list_pull_requests_fails_on_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/x/y/pulls"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found"
        })))
        .mount(&mock_server)
        .await;

    let client = GitHubClient::with_base_url("test-token", &mock_server.uri()).unwrap();
    let result = client.list_pull_requests("x/y").await;

    match result {
        Err(Error::GitHubApi(message)) => assert!(message.contains("404")),
        other => panic!("expected GitHubApi error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_reviews() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/x/y/pulls/7/reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "user": { "login": "bob" }, "state": "APPROVED" },
            { "id": 2, "user": { "login": "eve" }, "state": "PENDING" }
        ])))
        .mount(&mock_server)
        .await;

    let client = GitHubClient::with_base_url("test-token", &mock_server.uri()).unwrap();
    let reviews = client.list_reviews("x/y", 7).await.unwrap();

    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].reviewer(), "bob");
    assert_eq!(reviews[0].state, ReviewState::Approved);
    assert_eq!(reviews[1].state, ReviewState::Other);
}

#[tokio::test]
async fn test_list_reviews_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/x/y/pulls/7/reviews"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let client = GitHubClient::with_base_url("test-token", &mock_server.uri()).unwrap();
    assert!(client.list_reviews("x/y", 7).await.is_err());
}
