//! JSON export of tables
//!
//! Tables are written as an array of records, one object per row keyed by
//! column name. Repeated column names get a `.1`, `.2`, ... suffix so no
//! cell is lost.

use crate::table::Table;
use crate::Result;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Unique record keys for the table's columns, in column order
pub fn record_keys(table: &Table) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    table
        .columns()
        .iter()
        .map(|column| {
            let name = column.to_string();
            let count = seen.entry(name.clone()).or_insert(0);
            let key = if *count == 0 {
                name
            } else {
                format!("{}.{}", name, count)
            };
            *count += 1;
            key
        })
        .collect()
}

/// Converts each row to a JSON object
pub fn table_records(table: &Table) -> Vec<Map<String, Value>> {
    let keys = record_keys(table);

    table
        .rows()
        .iter()
        .map(|row| {
            keys.iter()
                .zip(row)
                .map(|(key, cell)| (key.clone(), Value::String(cell.clone())))
                .collect()
        })
        .collect()
}

/// Writes the table to `path` as pretty-printed JSON records
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &table_records(table))?;
    writer.flush()?;
    Ok(())
}
