use fantasydata_scraper::config::{parse_config, Config, Credentials};
use fantasydata_scraper::scrape::{Endpoints, Session};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "tok-5f2a";
pub const SESSION_COOKIE: &str = "fd_session=abc123";

/// Config pointing every endpoint at the mock server
///
/// `query` lines are added to the `[query]` table (season is 2023).
pub fn test_config(server: &MockServer, query: &str) -> Config {
    let content = format!(
        r#"
[provider]
base-url = "{}"
login-path = "/user/login"
stats-path = "/nfl/fantasy-football-leaders"
projections-path = "/nfl/fantasy-football-weekly-projections"
salaries-path = "/nfl/daily-fantasy-football-salary-and-projection-tool"

[user-agent]
name = "TestScraper"
version = "1.0.0"

[query]
season = 2023
{}
"#,
        server.uri(),
        query
    );
    parse_config(&content).expect("Failed to parse test config")
}

pub fn credentials() -> Credentials {
    Credentials::new("user@example.com", "correct-horse")
}

pub fn login_page(token: Option<&str>) -> String {
    let token_input = token
        .map(|t| format!(r#"<input type="hidden" name="csrf_token" value="{}">"#, t))
        .unwrap_or_default();
    format!(
        r#"<html><body><form method="post" action="/user/login">
        {}
        <input type="email" name="email"><input type="password" name="password">
        </form></body></html>"#,
        token_input
    )
}

/// A listing page whose table has `rows` players tagged with `tag`
pub fn table_page(tag: &str, rows: usize) -> String {
    let body: String = (0..rows)
        .map(|i| format!("<tr><td>{}-{}</td><td>{}</td></tr>", tag, i, i * 10))
        .collect();
    format!(
        r#"<html><body><table class="stats">
        <thead><tr><th>Name</th><th>Salary</th></tr></thead>
        <tbody>{}</tbody></table></body></html>"#,
        body
    )
}

/// A listing page past the last page of data
pub fn no_table_page() -> String {
    "<html><body><p>No results found.</p></body></html>".to_string()
}

pub fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html")
}

/// Mounts a login form that accepts any POST and redirects to /dashboard
pub async fn mount_accepting_login(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/user/login"))
        .respond_with(html(login_page(Some(TOKEN))))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/user/login"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/dashboard"))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/dashboard"))
        .respond_with(
            html("<html><body>Welcome back</body></html>".to_string())
                .insert_header("set-cookie", format!("{}; Path=/", SESSION_COOKIE).as_str()),
        )
        .mount(server)
        .await;
}

/// Logs in against a server prepared with `mount_accepting_login`
pub async fn login(config: &Config) -> (Session, Endpoints) {
    let endpoints = Endpoints::from_config(&config.provider).expect("Failed to build endpoints");
    let session = Session::authenticate(
        &config.user_agent,
        &endpoints.login,
        &config.provider.token_field,
        &credentials(),
    )
    .await
    .expect("Login failed");
    (session, endpoints)
}
