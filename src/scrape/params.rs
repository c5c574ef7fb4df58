use std::fmt;

pub const SCOPE: &str = "scope";
pub const SEASON: &str = "sp";
pub const SEASON_WEEK: &str = "spw";
pub const WEEK_FROM: &str = "week_from";
pub const WEEK_TO: &str = "week_to";
pub const POSITION: &str = "position";
pub const SCORING: &str = "scoring";
pub const OPERATOR: &str = "operator";
pub const PAGE: &str = "page";

/// Ordered query-string parameters for one request
///
/// Values are never changed in place: `with` consumes and returns a new
/// set, `with_page` derives a copy for a single page request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing an earlier value for the same key
    pub fn with(mut self, key: &str, value: impl fmt::Display) -> Self {
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
        self
    }

    /// A copy of these parameters requesting page `page`
    pub fn with_page(&self, page: u32) -> Self {
        self.clone().with(PAGE, page)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn page(&self) -> Option<u32> {
        self.get(PAGE).and_then(|p| p.parse().ok())
    }

    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}
