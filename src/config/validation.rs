use crate::config::types::{
    Config, EnrichmentConfig, HttpConfig, SiteConfig, QUERY_PLACEHOLDER,
};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_http_config(&config.http)?;
    validate_enrichment_config(&config.enrichment)?;
    Ok(())
}

/// Validates the target site and endpoint templates
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url '{}' must use http or https",
            config.base_url
        )));
    }

    validate_template("search-path", &config.search_path)?;
    validate_template("feed-path", &config.feed_path)?;

    Ok(())
}

/// Validates that an endpoint template interpolates the search term
fn validate_template(name: &str, template: &str) -> Result<(), ConfigError> {
    if !template.contains(QUERY_PLACEHOLDER) {
        return Err(ConfigError::Validation(format!(
            "{} must contain {}, got '{}'",
            name, QUERY_PLACEHOLDER, template
        )));
    }

    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 || config.connect_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be between 1 and timeout-secs ({}), got {}",
            config.timeout_secs, config.connect_timeout_secs
        )));
    }

    Ok(())
}

/// Validates enrichment configuration
fn validate_enrichment_config(config: &EnrichmentConfig) -> Result<(), ConfigError> {
    if config.max_concurrent < 1 || config.max_concurrent > 32 {
        return Err(ConfigError::Validation(format!(
            "max-concurrent must be between 1 and 32, got {}",
            config.max_concurrent
        )));
    }

    Ok(())
}
