use crate::config::types::{BackendConfig, ClientConfig, Config};
use crate::{ConfigError, ConfigResult};
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_backend_config(&config.backend)?;
    validate_client_config(&config.client)?;
    Ok(())
}

/// Validates backend configuration
fn validate_backend_config(config: &BackendConfig) -> ConfigResult<()> {
    validate_endpoint(&config.endpoint)?;

    if config.timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "timeout-secs must be > 0 when set".to_string(),
        ));
    }

    if config.connect_timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "connect-timeout-secs must be > 0 when set".to_string(),
        ));
    }

    Ok(())
}

/// Validates an endpoint address: http(s) scheme with a host
pub(crate) fn validate_endpoint(endpoint: &str) -> ConfigResult<()> {
    let url = Url::parse(endpoint)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid endpoint '{}': {}", endpoint, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Endpoint '{}' must use http or https",
            endpoint
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "Endpoint '{}' has no host",
            endpoint
        )));
    }

    Ok(())
}

/// Validates client configuration
fn validate_client_config(config: &ClientConfig) -> ConfigResult<()> {
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "client name cannot be empty".to_string(),
        ));
    }

    if !config
        .name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "client name must contain only alphanumeric characters and hyphens, got '{}'",
            config.name
        )));
    }

    if config.version.is_empty() {
        return Err(ConfigError::Validation(
            "client version cannot be empty".to_string(),
        ));
    }

    Ok(())
}
