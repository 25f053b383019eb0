use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
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

    let bff_base_url = require("VARDECK_BFF_BASE_URL")?;

    // Treat an empty token the same as an unset one; a blank Authorization
    // header is never what the operator meant.
    let bff_bearer_token = lookup("VARDECK_BFF_BEARER_TOKEN")
        .ok()
        .filter(|s| !s.is_empty());

    let log_level = or_default("VARDECK_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("VARDECK_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("VARDECK_USER_AGENT", "vardeck/0.1 (admin-console)");
    let max_retries = parse_u32("VARDECK_MAX_RETRIES", "3")?;
    let retry_backoff_base_ms = parse_u64("VARDECK_RETRY_BACKOFF_BASE_MS", "500")?;

    Ok(AppConfig {
        bff_base_url,
        bff_bearer_token,
        log_level,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_ms,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid defaults.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("VARDECK_BFF_BASE_URL", "https://admin.example.com");
        m
    }

    #[test]
    fn build_app_config_fails_without_bff_base_url() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "VARDECK_BFF_BASE_URL"),
            "expected MissingEnvVar(VARDECK_BFF_BASE_URL), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_all_required_vars() {
        let map = full_env();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert_eq!(cfg.bff_base_url, "https://admin.example.com");
        assert!(cfg.bff_bearer_token.is_none());
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "vardeck/0.1 (admin-console)");
        assert_eq!(cfg.max_retries, 3);
        assert_eq!(cfg.retry_backoff_base_ms, 500);
    }

    #[test]
    fn bearer_token_present_when_set() {
        let mut map = full_env();
        map.insert("VARDECK_BFF_BEARER_TOKEN", "secret-token");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.bff_bearer_token.as_deref(), Some("secret-token"));
    }

    #[test]
    fn bearer_token_empty_is_treated_as_absent() {
        let mut map = full_env();
        map.insert("VARDECK_BFF_BEARER_TOKEN", "");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.bff_bearer_token.is_none());
    }

    #[test]
    fn request_timeout_secs_override() {
        let mut map = full_env();
        map.insert("VARDECK_REQUEST_TIMEOUT_SECS", "60");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.request_timeout_secs, 60);
    }

    #[test]
    fn request_timeout_secs_invalid() {
        let mut map = full_env();
        map.insert("VARDECK_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VARDECK_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(VARDECK_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn log_level_override() {
        let mut map = full_env();
        map.insert("VARDECK_LOG_LEVEL", "debug");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn user_agent_override() {
        let mut map = full_env();
        map.insert("VARDECK_USER_AGENT", "custom-agent/2.0");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.user_agent, "custom-agent/2.0");
    }

    #[test]
    fn max_retries_override() {
        let mut map = full_env();
        map.insert("VARDECK_MAX_RETRIES", "5");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.max_retries, 5);
    }

    #[test]
    fn max_retries_invalid() {
        let mut map = full_env();
        map.insert("VARDECK_MAX_RETRIES", "three");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VARDECK_MAX_RETRIES"),
            "expected InvalidEnvVar(VARDECK_MAX_RETRIES), got: {result:?}"
        );
    }

    #[test]
    fn retry_backoff_base_ms_override() {
        let mut map = full_env();
        map.insert("VARDECK_RETRY_BACKOFF_BASE_MS", "1000");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.retry_backoff_base_ms, 1000);
    }

    #[test]
    fn retry_backoff_base_ms_invalid() {
        let mut map = full_env();
        map.insert("VARDECK_RETRY_BACKOFF_BASE_MS", "fast");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VARDECK_RETRY_BACKOFF_BASE_MS"),
            "expected InvalidEnvVar(VARDECK_RETRY_BACKOFF_BASE_MS), got: {result:?}"
        );
    }

    #[test]
    fn debug_output_redacts_bearer_token() {
        let mut map = full_env();
        map.insert("VARDECK_BFF_BEARER_TOKEN", "secret-token");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(rendered.contains("[redacted]"), "got: {rendered}");
        assert!(!rendered.contains("secret-token"), "got: {rendered}");
    }
}
