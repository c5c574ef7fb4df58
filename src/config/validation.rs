use crate::config::types::{
    Config, OutputConfig, PaginationConfig, ProviderConfig, QueryConfig, UserAgentConfig,
};
use crate::ConfigError;
use std::collections::HashSet;
use url::Url;

/// Highest week number the provider publishes for a season
pub const MAX_WEEK: u8 = 22;

const MAX_EMPTY_PAGE_RETRIES: u32 = 10;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_provider_config(&config.provider)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_query_config(&config.query)?;
    validate_pagination_config(&config.pagination)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates provider endpoints
fn validate_provider_config(config: &ProviderConfig) -> Result<(), ConfigError> {
    let base = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;

    if base.scheme() != "https" && base.scheme() != "http" {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url must use http or https, got '{}'",
            config.base_url
        )));
    }

    for (name, path) in [
        ("login_path", &config.login_path),
        ("stats_path", &config.stats_path),
        ("projections_path", &config.projections_path),
        ("salaries_path", &config.salaries_path),
    ] {
        if !path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "{} must start with '/', got '{}'",
                name, path
            )));
        }
    }

    if config.token_field.trim().is_empty() {
        return Err(ConfigError::Validation(
            "token_field cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "user agent name cannot be empty".to_string(),
        ));
    }

    if !config
        .name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "user agent name must contain only alphanumeric characters, hyphens and underscores, got '{}'",
            config.name
        )));
    }

    if let Some(contact_url) = &config.contact_url {
        Url::parse(contact_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;
    }

    Ok(())
}

/// Validates season, week range, positions and query keys
fn validate_query_config(config: &QueryConfig) -> Result<(), ConfigError> {
    if !(1990..=2100).contains(&config.season) {
        return Err(ConfigError::Validation(format!(
            "season must be between 1990 and 2100, got {}",
            config.season
        )));
    }

    if config.week_from < 1 || config.week_to > MAX_WEEK {
        return Err(ConfigError::Validation(format!(
            "weeks must be between 1 and {}, got {}-{}",
            MAX_WEEK, config.week_from, config.week_to
        )));
    }

    if config.week_from > config.week_to {
        return Err(ConfigError::Validation(format!(
            "week_from ({}) must not be after week_to ({})",
            config.week_from, config.week_to
        )));
    }

    if config.positions.is_empty() {
        return Err(ConfigError::Validation(
            "positions cannot be empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for position in &config.positions {
        if !seen.insert(position) {
            return Err(ConfigError::Validation(format!(
                "position '{}' is listed more than once",
                position
            )));
        }
    }

    for (name, value) in [
        ("scoring", &config.scoring),
        ("operator", &config.operator),
        ("season_type", &config.season_type),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::Validation(format!("{} cannot be empty", name)));
        }
    }

    Ok(())
}

fn validate_pagination_config(config: &PaginationConfig) -> Result<(), ConfigError> {
    if config.empty_page_retries > MAX_EMPTY_PAGE_RETRIES {
        return Err(ConfigError::Validation(format!(
            "empty_page_retries must be <= {}, got {}",
            MAX_EMPTY_PAGE_RETRIES, config.empty_page_retries
        )));
    }
    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.directory.is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }
    Ok(())
}
