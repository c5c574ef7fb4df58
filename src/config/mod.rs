//! Configuration module
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files, and reading account credentials from the environment.
//!
//! # Example
//!
//! ```no_run
//! use fantasydata_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("fantasydata.toml")).unwrap();
//! println!("Scraping season {}", config.query.season);
//! ```

mod credentials;
mod parser;
mod types;
mod validation;

// Re-export types
pub use credentials::{Credentials, EMAIL_VAR, PASSWORD_VAR};
pub use types::{
    Config, OutputConfig, PaginationConfig, Position, ProviderConfig, QueryConfig,
    UserAgentConfig, WeekRange,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
