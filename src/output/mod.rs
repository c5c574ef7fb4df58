//! Output module for exported datasets
//!
//! This module handles:
//! - Writing tables as JSON record files
//! - Recording what a run produced in a manifest
//! - Printing a summary of the run

mod json;
mod manifest;
mod summary;

pub use json::{record_keys, table_records, write_table};
pub use manifest::{DatasetWriter, Manifest, ManifestEntry, MANIFEST_FILE};
pub use summary::{format_summary, print_summary};
