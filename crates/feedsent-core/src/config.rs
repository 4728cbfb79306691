use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let bind_addr = parse_addr("FEEDSENT_BIND_ADDR", "0.0.0.0:5000")?;
    let log_level = or_default("FEEDSENT_LOG_LEVEL", "info");

    let neutral_threshold = parse_threshold(&or_default("FEEDSENT_NEUTRAL_THRESHOLD", "0.05"))?;

    let classifier_url = lookup("FEEDSENT_CLASSIFIER_URL")
        .ok()
        .map(|url| url.trim().trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty());

    let request_timeout_secs = parse_u64("FEEDSENT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("FEEDSENT_USER_AGENT", "feedsent/0.1 (rss-sentiment)");

    let article_limit = parse_usize("FEEDSENT_ARTICLE_LIMIT", "50")?;
    if article_limit == 0 {
        return Err(invalid(
            "FEEDSENT_ARTICLE_LIMIT",
            "must be at least 1".to_string(),
        ));
    }

    Ok(AppConfig {
        bind_addr,
        log_level,
        neutral_threshold,
        classifier_url,
        request_timeout_secs,
        user_agent,
        article_limit,
    })
}

/// Parse the neutral threshold. Must be a finite number in `[0.0, 1.0]`.
fn parse_threshold(raw: &str) -> Result<f64, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        var: "FEEDSENT_NEUTRAL_THRESHOLD".to_string(),
        reason,
    };

    let value = raw.trim().parse::<f64>().map_err(|e| invalid(e.to_string()))?;
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(invalid(format!("{value} is outside [0.0, 1.0]")));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
