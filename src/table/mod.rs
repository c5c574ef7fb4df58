//! Tabular record sets parsed from provider pages
//!
//! This module contains:
//! - The `Table` type (named columns, ordered string rows)
//! - HTML table extraction
//! - Column-name flattening for two-level headers

mod normalize;
mod parser;

pub use normalize::{flatten, flatten_label, is_placeholder, PLACEHOLDER_MARKER};
pub use parser::{first_table, parse_tables};

use std::fmt;

/// A column header, either single-level or (group, sub) two-level
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnName {
    Flat(String),
    Grouped { group: String, sub: String },
}

impl ColumnName {
    pub fn flat(label: impl Into<String>) -> Self {
        ColumnName::Flat(label.into())
    }

    pub fn grouped(group: impl Into<String>, sub: impl Into<String>) -> Self {
        ColumnName::Grouped {
            group: group.into(),
            sub: sub.into(),
        }
    }

    /// The header as a (group, sub) pair; flat labels become `(label, "")`
    pub fn as_pair(&self) -> (&str, &str) {
        match self {
            ColumnName::Flat(label) => (label, ""),
            ColumnName::Grouped { group, sub } => (group, sub),
        }
    }

    pub fn is_grouped(&self) -> bool {
        matches!(self, ColumnName::Grouped { .. })
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnName::Flat(label) => f.write_str(label),
            ColumnName::Grouped { group, sub } => write!(f, "{} / {}", group, sub),
        }
    }
}

/// Ordered rows under named columns
///
/// Every row holds exactly one cell per column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<ColumnName>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Builds a table, padding short rows with empty cells and truncating long ones
    pub fn new(columns: Vec<ColumnName>, rows: Vec<Vec<String>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// A table with no columns and no rows
    pub fn empty() -> Self {
        Self::default()
    }

    /// A table is empty when it has no data rows, even if it has headers
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> &[ColumnName] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn has_grouped_columns(&self) -> bool {
        self.columns.iter().any(ColumnName::is_grouped)
    }

    /// Cells of the first column whose display name equals `name`
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.columns.iter().position(|c| c.to_string() == name)?;
        Some(self.rows.iter().map(|row| row[index].as_str()).collect())
    }

    /// Appends the rows of `other` below the rows of `self`
    ///
    /// Columns are matched by name. Columns new to `self` are added on the
    /// right and back-filled with empty cells; cells missing from `other`
    /// are left empty. Row order is preserved.
    pub fn append(&mut self, other: Table) {
        if self.columns.is_empty() && self.rows.is_empty() {
            *self = other;
            return;
        }

        let mut claimed = vec![false; self.columns.len()];
        let mut mapping = Vec::with_capacity(other.columns.len());

        for column in other.columns {
            let existing = self
                .columns
                .iter()
                .enumerate()
                .position(|(i, c)| !claimed.get(i).copied().unwrap_or(true) && *c == column);

            let index = match existing {
                Some(i) => i,
                None => {
                    self.columns.push(column);
                    for row in &mut self.rows {
                        row.push(String::new());
                    }
                    self.columns.len() - 1
                }
            };

            if index >= claimed.len() {
                claimed.resize(index + 1, false);
            }
            claimed[index] = true;
            mapping.push(index);
        }

        let width = self.columns.len();
        for row in other.rows {
            let mut aligned = vec![String::new(); width];
            for (cell, &index) in row.into_iter().zip(&mapping) {
                aligned[index] = cell;
            }
            self.rows.push(aligned);
        }
    }

    /// Concatenates tables in order
    pub fn concat<I>(tables: I) -> Table
    where
        I: IntoIterator<Item = Table>,
    {
        tables.into_iter().fold(Table::empty(), |mut acc, table| {
            acc.append(table);
            acc
        })
    }

    /// Sets a flat column to the same value on every row
    ///
    /// An existing flat column with that name is overwritten; otherwise the
    /// column is added on the right.
    pub fn with_column(mut self, name: impl Into<String>, value: impl fmt::Display) -> Table {
        let name = name.into();
        let value = value.to_string();

        let existing = self
            .columns
            .iter()
            .position(|c| matches!(c, ColumnName::Flat(label) if *label == name));

        match existing {
            Some(index) => {
                for row in &mut self.rows {
                    row[index] = value.clone();
                }
            }
            None => {
                self.columns.push(ColumnName::Flat(name));
                for row in &mut self.rows {
                    row.push(value.clone());
                }
            }
        }
        self
    }

    /// Replaces every header with its flattened single-level name
    pub fn flattened(self) -> Table {
        let pairs: Vec<(&str, &str)> = self.columns.iter().map(ColumnName::as_pair).collect();
        let columns = flatten(&pairs).into_iter().map(ColumnName::Flat).collect();
        Table {
            columns,
            rows: self.rows,
        }
    }
}
