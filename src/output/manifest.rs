use crate::config::{Position, WeekRange};
use crate::output::json::write_table;
use crate::scrape::PositionDatasets;
use crate::table::Table;
use crate::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const MANIFEST_FILE: &str = "manifest.json";

/// One exported dataset file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub dataset: String,
    pub position: Option<String>,
    pub file: String,
    pub rows: usize,
}

/// Record of what a run exported
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub season: u16,
    pub week_from: u8,
    pub week_to: u8,
    pub config_hash: String,
    pub generated_at: DateTime<Utc>,
    pub files: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn total_rows(&self) -> usize {
        self.files.iter().map(|f| f.rows).sum()
    }
}

/// Writes datasets into one output directory and tracks them for the manifest
pub struct DatasetWriter {
    directory: PathBuf,
    entries: Vec<ManifestEntry>,
}

impl DatasetWriter {
    /// Creates the output directory if needed
    pub fn new(directory: &Path) -> Result<Self> {
        fs::create_dir_all(directory)?;
        Ok(Self {
            directory: directory.to_path_buf(),
            entries: Vec::new(),
        })
    }

    /// Writes one `<dataset>_<position>.json` per position
    pub fn write_positions(&mut self, dataset: &str, data: &PositionDatasets) -> Result<()> {
        for (position, table) in data {
            self.write(dataset, Some(*position), table)?;
        }
        Ok(())
    }

    /// Writes `<dataset>.json`
    pub fn write_table(&mut self, dataset: &str, table: &Table) -> Result<()> {
        self.write(dataset, None, table)
    }

    fn write(&mut self, dataset: &str, position: Option<Position>, table: &Table) -> Result<()> {
        let file = match position {
            Some(position) => format!("{}_{}.json", dataset, position),
            None => format!("{}.json", dataset),
        };
        let path = self.directory.join(&file);

        write_table(table, &path)?;
        info!("Wrote {} rows to {}", table.row_count(), path.display());

        self.entries.push(ManifestEntry {
            dataset: dataset.to_string(),
            position: position.map(|p| p.to_string()),
            file,
            rows: table.row_count(),
        });
        Ok(())
    }

    /// Writes `manifest.json` and returns the manifest
    pub fn finish(self, season: u16, weeks: WeekRange, config_hash: &str) -> Result<Manifest> {
        let manifest = Manifest {
            season,
            week_from: weeks.from,
            week_to: weeks.to,
            config_hash: config_hash.to_string(),
            generated_at: Utc::now(),
            files: self.entries,
        };

        let path = self.directory.join(MANIFEST_FILE);
        fs::write(&path, serde_json::to_string_pretty(&manifest)?)?;
        info!("Wrote manifest to {}", path.display());

        Ok(manifest)
    }
}
