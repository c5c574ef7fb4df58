//! Authenticated HTTP session
//!
//! This module handles:
//! - Building the cookie-carrying HTTP client
//! - The login handshake (anti-forgery token + credential POST)
//! - Fetching listing pages as tables

use crate::config::{Credentials, UserAgentConfig};
use crate::scrape::{QueryParams, TableSource};
use crate::table::{first_table, Table};
use crate::{Result, ScrapeError};
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Builds an HTTP client with a cookie store and the configured user agent
///
/// # Example
///
/// ```no_run
/// use fantasydata_scraper::config::UserAgentConfig;
/// use fantasydata_scraper::scrape::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .cookie_store(true)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Finds the value of `<input name="{field}">` in the login page markup
pub fn extract_token(html: &str, field: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(&format!(r#"input[name="{}"]"#, field)).ok()?;

    document
        .select(&selector)
        .next()
        .and_then(|input| input.value().attr("value"))
        .map(str::to_string)
}

/// A logged-in session with the provider
///
/// Only obtainable through [`Session::authenticate`], so holding one means
/// the login succeeded.
#[derive(Debug, Clone)]
pub struct Session {
    client: Client,
    landing_url: Url,
}

impl Session {
    /// Logs in with a web form protected by an anti-forgery token
    ///
    /// # Login Flow
    ///
    /// 1. GET `login_url` and read the hidden `token_field` input
    /// 2. POST `email`, `password` and the token back to `login_url`
    /// 3. Follow redirects; landing anywhere other than `login_url` means
    ///    the credentials were accepted
    ///
    /// # Returns
    ///
    /// * `Ok(Session)` - Login accepted
    /// * `Err(ScrapeError::AuthFailure)` - Login page came back again
    /// * `Err(ScrapeError::Parse)` - Login page has no token input
    /// * `Err(ScrapeError::Http)` - Transport failure or error status
    pub async fn authenticate(
        agent: &UserAgentConfig,
        login_url: &Url,
        token_field: &str,
        credentials: &Credentials,
    ) -> Result<Session> {
        let client = build_http_client(agent)?;

        let login_page = get_text(&client, login_url, None).await?;
        let token = extract_token(&login_page, token_field).ok_or_else(|| ScrapeError::Parse {
            url: login_url.to_string(),
            message: format!("no input named '{}' with a value", token_field),
        })?;
        debug!("Found anti-forgery token field '{}'", token_field);

        let payload = [
            ("email", credentials.email.as_str()),
            ("password", credentials.password.as_str()),
            (token_field, token.as_str()),
        ];

        let response = client
            .post(login_url.clone())
            .form(&payload)
            .send()
            .await
            .map_err(|source| ScrapeError::Http {
                url: login_url.to_string(),
                source,
            })?;

        let landing_url = response.url().clone();
        if landing_url == *login_url {
            warn!("Login not successful for {}", credentials.email);
            return Err(ScrapeError::AuthFailure {
                url: login_url.to_string(),
            });
        }

        info!("Login successful, landed on {}", landing_url);
        Ok(Session {
            client,
            landing_url,
        })
    }

    /// Where the login redirect ended
    pub fn landing_url(&self) -> &Url {
        &self.landing_url
    }
}

impl TableSource for Session {
    async fn fetch_page(&self, url: &Url, params: &QueryParams) -> Result<Table> {
        let body = get_text(&self.client, url, Some(params)).await?;
        let table = first_table(&body);
        debug!(
            url = %url,
            page = ?params.page(),
            rows = table.row_count(),
            "Fetched page"
        );
        Ok(table)
    }
}

/// GETs a URL and returns the body, treating non-2xx statuses as errors
async fn get_text(client: &Client, url: &Url, params: Option<&QueryParams>) -> Result<String> {
    let http_error = |source: reqwest::Error| ScrapeError::Http {
        url: url.to_string(),
        source,
    };

    let mut request = client.get(url.clone());
    if let Some(params) = params {
        request = request.query(params.as_pairs());
    }

    request
        .send()
        .await
        .map_err(http_error)?
        .error_for_status()
        .map_err(http_error)?
        .text()
        .await
        .map_err(http_error)
}
