use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if `SERPAPI_API_KEY` is missing or a numeric value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if `SERPAPI_API_KEY` is missing or a numeric value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    // An empty key is as useless as an absent one.
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let serpapi_api_key = require("SERPAPI_API_KEY")?;
    let serpapi_base_url = or_default("PROSPECTOR_SERPAPI_BASE_URL", "https://serpapi.com/search");

    let request_timeout_secs = parse_u64("PROSPECTOR_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PROSPECTOR_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let inter_request_delay_ms = parse_u64("PROSPECTOR_INTER_REQUEST_DELAY_MS", "1000")?;
    let max_retries = parse_u32("PROSPECTOR_MAX_RETRIES", "0")?;
    let retry_backoff_base_ms = parse_u64("PROSPECTOR_RETRY_BACKOFF_BASE_MS", "1000")?;
    let retry_max_delay_ms = parse_u64("PROSPECTOR_RETRY_MAX_DELAY_MS", "60000")?;
    let user_agent = or_default("PROSPECTOR_USER_AGENT", "prospector/0.1 (profile-search)");

    Ok(AppConfig {
        serpapi_api_key,
        serpapi_base_url,
        request_timeout_secs,
        inter_request_delay_ms,
        max_retries,
        retry_backoff_base_ms,
        retry_max_delay_ms,
        user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
