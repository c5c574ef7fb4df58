use crate::support::{credentials, html, login_page, mount_accepting_login, test_config, TOKEN};
use fantasydata_scraper::scrape::{Endpoints, Session};
use fantasydata_scraper::ScrapeError;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn authenticate(server: &MockServer) -> Result<Session, ScrapeError> {
    let config = test_config(server, "");
    let endpoints = Endpoints::from_config(&config.provider).expect("Failed to build endpoints");
    Session::authenticate(
        &config.user_agent,
        &endpoints.login,
        &config.provider.token_field,
        &credentials(),
    )
    .await
}

#[tokio::test]
async fn test_login_redirect_away_succeeds() {
    let mock_server = MockServer::start().await;
    mount_accepting_login(&mock_server).await;

    let session = authenticate(&mock_server).await.expect("Login should succeed");
    assert_eq!(session.landing_url().path(), "/dashboard");
}

#[tokio::test]
async fn test_login_posts_credentials_and_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/login"))
        .respond_with(html(login_page(Some(TOKEN))))
        .mount(&mock_server)
        .await;

    // Only a POST carrying all three fields is accepted
    Mock::given(method("POST"))
        .and(path("/user/login"))
        .and(body_string_contains("email=user%40example.com"))
        .and(body_string_contains("password=correct-horse"))
        .and(body_string_contains(format!("csrf_token={}", TOKEN)))
        .respond_with(ResponseTemplate::new(303).insert_header("location", "/dashboard"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/dashboard"))
        .respond_with(html("<html>ok</html>".to_string()))
        .mount(&mock_server)
        .await;

    assert!(authenticate(&mock_server).await.is_ok());
}

#[tokio::test]
async fn test_login_landing_on_login_page_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/login"))
        .respond_with(html(login_page(Some(TOKEN))))
        .mount(&mock_server)
        .await;

    // Rejected credentials re-render the form at the same URL
    Mock::given(method("POST"))
        .and(path("/user/login"))
        .respond_with(html(login_page(Some(TOKEN))))
        .mount(&mock_server)
        .await;

    let result = authenticate(&mock_server).await;
    assert!(
        matches!(result, Err(ScrapeError::AuthFailure { .. })),
        "Expected AuthFailure, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_login_page_without_token_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/login"))
        .respond_with(html(login_page(None)))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/user/login"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/dashboard"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = authenticate(&mock_server).await;
    assert!(matches!(result, Err(ScrapeError::Parse { .. })));
}

#[tokio::test]
async fn test_login_page_server_error_is_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/login"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let result = authenticate(&mock_server).await;
    assert!(matches!(result, Err(ScrapeError::Http { .. })));
}
