use serde::Deserialize;
use std::fmt;
use std::ops::RangeInclusive;

/// Main configuration structure for a scraping run
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    pub query: QueryConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Provider endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Scheme and host every path below is joined onto
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    #[serde(rename = "login-path", default = "default_login_path")]
    pub login_path: String,

    #[serde(rename = "stats-path", default = "default_stats_path")]
    pub stats_path: String,

    #[serde(rename = "projections-path", default = "default_projections_path")]
    pub projections_path: String,

    #[serde(rename = "salaries-path", default = "default_salaries_path")]
    pub salaries_path: String,

    /// Name attribute of the hidden anti-forgery input on the login form
    #[serde(rename = "token-field", default = "default_token_field")]
    pub token_field: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            login_path: default_login_path(),
            stats_path: default_stats_path(),
            projections_path: default_projections_path(),
            salaries_path: default_salaries_path(),
            token_field: default_token_field(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    #[serde(default = "default_agent_name")]
    pub name: String,

    #[serde(default = "default_agent_version")]
    pub version: String,

    /// URL with information about the scraper operator
    #[serde(rename = "contact-url", default)]
    pub contact_url: Option<String>,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            version: default_agent_version(),
            contact_url: None,
        }
    }
}

impl UserAgentConfig {
    /// Formats the header value: `Name/Version` or `Name/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        match &self.contact_url {
            Some(url) => format!("{}/{} (+{})", self.name, self.version, url),
            None => format!("{}/{}", self.name, self.version),
        }
    }
}

/// What to scrape
#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    pub season: u16,

    #[serde(rename = "week-from", default = "default_week_from")]
    pub week_from: u8,

    #[serde(rename = "week-to", default = "default_week_to")]
    pub week_to: u8,

    #[serde(default = "Position::defaults")]
    pub positions: Vec<Position>,

    /// Fantasy scoring system used to rank the tables
    #[serde(default = "default_scoring")]
    pub scoring: String,

    /// DFS operator for the salary listing
    #[serde(default = "default_operator")]
    pub operator: String,

    #[serde(rename = "season-type", default = "default_season_type")]
    pub season_type: String,
}

impl QueryConfig {
    pub fn weeks(&self) -> WeekRange {
        WeekRange::new(self.week_from, self.week_to)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationConfig {
    /// How many times an empty page is re-requested before it is taken as
    /// the end of the listing. Zero stops on the first empty page.
    #[serde(rename = "empty-page-retries", default)]
    pub empty_page_retries: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_directory")]
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}

/// Player position as understood by the provider's `position` query key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Qb,
    Rb,
    Wr,
    Te,
    K,
    /// Team defense and special teams
    Dst,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::Qb,
        Position::Rb,
        Position::Wr,
        Position::Te,
        Position::K,
        Position::Dst,
    ];

    /// Positions scraped when the config does not list any
    pub fn defaults() -> Vec<Position> {
        vec![
            Position::Qb,
            Position::Rb,
            Position::Wr,
            Position::Te,
            Position::Dst,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Qb => "qb",
            Position::Rb => "rb",
            Position::Wr => "wr",
            Position::Te => "te",
            Position::K => "k",
            Position::Dst => "dst",
        }
    }

    pub fn is_defense(&self) -> bool {
        matches!(self, Position::Dst)
    }

    pub fn parse(value: &str) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive range of regular-season weeks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    pub from: u8,
    pub to: u8,
}

impl WeekRange {
    pub fn new(from: u8, to: u8) -> Self {
        Self { from, to }
    }

    pub fn single(week: u8) -> Self {
        Self::new(week, week)
    }

    pub fn iter(&self) -> RangeInclusive<u8> {
        self.from..=self.to
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.from > self.to
    }
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "weeks {}-{}", self.from, self.to)
    }
}

fn default_base_url() -> String {
    "https://fantasydata.com".to_string()
}

fn default_login_path() -> String {
    "/user/login".to_string()
}

fn default_stats_path() -> String {
    "/nfl/fantasy-football-leaders".to_string()
}

fn default_projections_path() -> String {
    "/nfl/fantasy-football-weekly-projections".to_string()
}

fn default_salaries_path() -> String {
    "/nfl/daily-fantasy-football-salary-and-projection-tool".to_string()
}

fn default_token_field() -> String {
    "csrf_token".to_string()
}

fn default_agent_name() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

fn default_agent_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_week_from() -> u8 {
    1
}

fn default_week_to() -> u8 {
    17
}

fn default_scoring() -> String {
    "fpts_fanduel".to_string()
}

fn default_operator() -> String {
    "fanduel".to_string()
}

fn default_season_type() -> String {
    "REG".to_string()
}

fn default_output_directory() -> String {
    "./data".to_string()
}
