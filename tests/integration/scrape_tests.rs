use crate::support::{
    html, login, mount_accepting_login, no_table_page, table_page, test_config, SESSION_COOKIE,
};
use fantasydata_scraper::config::Position;
use fantasydata_scraper::scrape::{fetch_all_pages, Assembler, PagePolicy, WEEK_COLUMN};
use fantasydata_scraper::{QueryParams, ScrapeError, TableSource};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STATS: &str = "/nfl/fantasy-football-leaders";
const SALARIES: &str = "/nfl/daily-fantasy-football-salary-and-projection-tool";

#[tokio::test]
async fn test_fetch_page_sends_params_and_session_cookie() {
    let mock_server = MockServer::start().await;
    mount_accepting_login(&mock_server).await;

    Mock::given(method("GET"))
        .and(path(STATS))
        .and(query_param("position", "qb"))
        .and(query_param("page", "1"))
        .and(header("cookie", SESSION_COOKIE))
        .respond_with(html(table_page("qb", 3)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server, "");
    let (session, endpoints) = login(&config).await;

    let params = QueryParams::new().with("position", "qb").with_page(1);
    let table = session
        .fetch_page(&endpoints.stats, &params)
        .await
        .expect("Fetch failed");

    assert_eq!(table.row_count(), 3);
    assert_eq!(
        table.column("Name").expect("Name column"),
        vec!["qb-0", "qb-1", "qb-2"]
    );
}

#[tokio::test]
async fn test_page_without_table_is_empty() {
    let mock_server = MockServer::start().await;
    mount_accepting_login(&mock_server).await;

    Mock::given(method("GET"))
        .and(path(STATS))
        .respond_with(html(no_table_page()))
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server, "");
    let (session, endpoints) = login(&config).await;

    let table = session
        .fetch_page(&endpoints.stats, &QueryParams::new())
        .await
        .expect("Fetch failed");
    assert!(table.is_empty());
}

#[tokio::test]
async fn test_error_status_is_http_error() {
    let mock_server = MockServer::start().await;
    mount_accepting_login(&mock_server).await;

    Mock::given(method("GET"))
        .and(path(STATS))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server, "");
    let (session, endpoints) = login(&config).await;

    let result = session.fetch_page(&endpoints.stats, &QueryParams::new()).await;
    assert!(matches!(result, Err(ScrapeError::Http { .. })));
}

#[tokio::test]
async fn test_pagination_stops_at_first_page_without_table() {
    let mock_server = MockServer::start().await;
    mount_accepting_login(&mock_server).await;

    Mock::given(method("GET"))
        .and(path(STATS))
        .and(query_param("page", "1"))
        .respond_with(html(table_page("p1", 2)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(STATS))
        .and(query_param("page", "2"))
        .respond_with(html(no_table_page()))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Would have data, but must never be reached
    Mock::given(method("GET"))
        .and(path(STATS))
        .and(query_param("page", "3"))
        .respond_with(html(table_page("p3", 2)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server, "");
    let (session, endpoints) = login(&config).await;

    let pages = fetch_all_pages(
        &session,
        &endpoints.stats,
        &QueryParams::new(),
        PagePolicy::default(),
    )
    .await
    .expect("Pagination failed");

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].row_count(), 2);
}

#[tokio::test]
async fn test_salaries_end_to_end() {
    let mock_server = MockServer::start().await;
    mount_accepting_login(&mock_server).await;

    for (week, rows) in [(1u8, 3usize), (2, 2)] {
        let spw = format!("2023_REG_{}", week);

        Mock::given(method("GET"))
            .and(path(SALARIES))
            .and(query_param("spw", spw.as_str()))
            .and(query_param("operator", "fanduel"))
            .and(query_param("page", "1"))
            .respond_with(html(table_page(&format!("w{}", week), rows)))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path(SALARIES))
            .and(query_param("spw", spw.as_str()))
            .and(query_param("page", "2"))
            .respond_with(html(no_table_page()))
            .mount(&mock_server)
            .await;
    }

    let config = test_config(&mock_server, "week-from = 1\nweek-to = 2");
    let (session, endpoints) = login(&config).await;
    let assembler =
        Assembler::from_config(&session, &endpoints, &config.query, &config.pagination);

    let salaries = assembler
        .salaries(config.query.season, config.query.weeks())
        .await
        .expect("Salaries failed");

    assert_eq!(salaries.row_count(), 5);
    assert_eq!(
        salaries.column(WEEK_COLUMN).expect("week column"),
        vec!["1", "1", "1", "2", "2"]
    );
    assert_eq!(
        salaries.column("Name").expect("Name column"),
        vec!["w1-0", "w1-1", "w1-2", "w2-0", "w2-1"]
    );
}

#[tokio::test]
async fn test_defense_stats_stop_at_first_empty_week() {
    let mock_server = MockServer::start().await;
    mount_accepting_login(&mock_server).await;

    Mock::given(method("GET"))
        .and(path(STATS))
        .and(query_param("position", "dst"))
        .and(query_param("week_from", "1"))
        .respond_with(html(table_page("dst1", 32)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(STATS))
        .and(query_param("position", "dst"))
        .and(query_param("week_from", "2"))
        .respond_with(html(no_table_page()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(STATS))
        .and(query_param("position", "dst"))
        .and(query_param("week_from", "3"))
        .respond_with(html(table_page("dst3", 32)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server, "week-from = 1\nweek-to = 3\npositions = [\"dst\"]");
    let (session, endpoints) = login(&config).await;
    let assembler =
        Assembler::from_config(&session, &endpoints, &config.query, &config.pagination);

    let stats = assembler
        .stats(config.query.season, config.query.weeks(), &config.query.positions)
        .await
        .expect("Stats failed");

    let defense = stats.get(&Position::Dst).expect("dst dataset");
    assert_eq!(defense.row_count(), 32);
    assert!(!defense.has_grouped_columns());
}
