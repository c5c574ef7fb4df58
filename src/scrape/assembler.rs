use crate::config::{PaginationConfig, Position, QueryConfig};
use crate::scrape::{params, Endpoints, PagePolicy, QueryParams, TableSource};
use crate::table::Table;
use std::ops::Index;

/// One dataset per position, in the order the positions were requested
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionDatasets {
    entries: Vec<(Position, Table)>,
}

impl PositionDatasets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dataset, replacing any earlier one for the same position in place
    pub fn insert(&mut self, position: Position, table: Table) {
        match self.entries.iter_mut().find(|(p, _)| *p == position) {
            Some(entry) => entry.1 = table,
            None => self.entries.push((position, table)),
        }
    }

    pub fn get(&self, position: &Position) -> Option<&Table> {
        self.entries
            .iter()
            .find(|(p, _)| p == position)
            .map(|(_, table)| table)
    }

    pub fn contains_key(&self, position: &Position) -> bool {
        self.get(position).is_some()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.entries.iter().map(|(p, _)| *p)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (Position, Table)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<&Position> for PositionDatasets {
    type Output = Table;

    fn index(&self, position: &Position) -> &Table {
        match self.get(position) {
            Some(table) => table,
            None => panic!("no dataset for position {}", position),
        }
    }
}

impl<'a> IntoIterator for &'a PositionDatasets {
    type Item = &'a (Position, Table);
    type IntoIter = std::slice::Iter<'a, (Position, Table)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Query values shared by every request of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySettings {
    pub scoring: String,
    pub operator: String,
    pub season_type: String,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            scoring: "fpts_fanduel".to_string(),
            operator: "fanduel".to_string(),
            season_type: "REG".to_string(),
        }
    }
}

impl From<&QueryConfig> for QuerySettings {
    fn from(config: &QueryConfig) -> Self {
        Self {
            scoring: config.scoring.clone(),
            operator: config.operator.clone(),
            season_type: config.season_type.clone(),
        }
    }
}

/// Builds stats, projections and salary datasets from a table source
///
/// Every request is awaited before the next one is sent. Any error ends the
/// whole assembly; datasets collected so far are dropped.
pub struct Assembler<'a, S> {
    pub(crate) source: &'a S,
    pub(crate) endpoints: &'a Endpoints,
    pub(crate) settings: QuerySettings,
    pub(crate) policy: PagePolicy,
}

impl<'a, S: TableSource> Assembler<'a, S> {
    pub fn new(
        source: &'a S,
        endpoints: &'a Endpoints,
        settings: QuerySettings,
        policy: PagePolicy,
    ) -> Self {
        Self {
            source,
            endpoints,
            settings,
            policy,
        }
    }

    pub fn from_config(
        source: &'a S,
        endpoints: &'a Endpoints,
        query: &QueryConfig,
        pagination: &PaginationConfig,
    ) -> Self {
        Self::new(
            source,
            endpoints,
            QuerySettings::from(query),
            PagePolicy::from_config(pagination),
        )
    }

    /// `scope=game` plus the scoring system
    pub(crate) fn base_params(&self) -> QueryParams {
        QueryParams::new()
            .with(params::SCOPE, "game")
            .with(params::SCORING, &self.settings.scoring)
    }

    /// Season key, e.g. `2023_REG`
    pub(crate) fn season_key(&self, season: u16) -> String {
        format!("{}_{}", season, self.settings.season_type)
    }

    /// Season-and-week key, e.g. `2023_REG_4`
    pub(crate) fn season_week_key(&self, season: u16, week: u8) -> String {
        format!("{}_{}_{}", season, self.settings.season_type, week)
    }
}

/// Upper-case plural used in progress messages, e.g. `QBs`
pub(crate) fn plural_label(position: Position) -> String {
    format!("{}s", position.as_str().to_uppercase())
}
