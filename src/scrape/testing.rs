//! In-memory table sources for unit tests

use crate::scrape::{Endpoints, QueryParams, TableSource};
use crate::table::{ColumnName, Table};
use crate::Result;
use std::sync::Mutex;
use url::Url;

/// Answers each request from a closure of (call index, params)
pub(crate) struct ScriptedSource<F> {
    respond: F,
    calls: Mutex<Vec<(Url, QueryParams)>>,
}

impl<F> ScriptedSource<F>
where
    F: Fn(usize, &QueryParams) -> Result<Table>,
{
    pub(crate) fn new(respond: F) -> Self {
        Self {
            respond,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<QueryParams> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, params)| params.clone())
            .collect()
    }

    pub(crate) fn urls(&self) -> Vec<Url> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl<F> TableSource for ScriptedSource<F>
where
    F: Fn(usize, &QueryParams) -> Result<Table>,
{
    async fn fetch_page(&self, url: &Url, params: &QueryParams) -> Result<Table> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((url.clone(), params.clone()));
            calls.len() - 1
        };
        (self.respond)(index, params)
    }
}

/// Returns the given tables in call order, then empty tables
pub(crate) fn sequence(
    tables: Vec<Table>,
) -> ScriptedSource<impl Fn(usize, &QueryParams) -> Result<Table>> {
    ScriptedSource::new(move |index, _| Ok(tables.get(index).cloned().unwrap_or_default()))
}

/// A flat `Name`/`FPTS` table whose names are `{tag}-{i}`
pub(crate) fn table(tag: &str, rows: usize) -> Table {
    Table::new(
        vec![ColumnName::flat("Name"), ColumnName::flat("FPTS")],
        (0..rows)
            .map(|i| vec![format!("{}-{}", tag, i), format!("{}.5", i)])
            .collect(),
    )
}

/// A two-level table like the provider's stat listings
pub(crate) fn grouped_table(tag: &str, rows: usize) -> Table {
    Table::new(
        vec![
            ColumnName::grouped("Unnamed: 0_level_0", "Name"),
            ColumnName::grouped("Passing", "YDS"),
        ],
        (0..rows)
            .map(|i| vec![format!("{}-{}", tag, i), format!("{}", 100 + i)])
            .collect(),
    )
}

pub(crate) fn endpoints() -> Endpoints {
    let base = Url::parse("https://fantasydata.test").unwrap();
    Endpoints {
        login: base.join("/user/login").unwrap(),
        stats: base.join("/stats").unwrap(),
        projections: base.join("/projections").unwrap(),
        salaries: base.join("/salaries").unwrap(),
    }
}
