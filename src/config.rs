//! Configuration constants and utilities for propline
//!
//! The option catalogs the search form offers are fixed at compile time;
//! their order here is the canonical display order of the controls. Runtime
//! configuration is limited to the log level.

/// Bedroom option cards, in display order
pub const BEDROOM_OPTIONS: [&str; 6] = ["Studio", "1", "2", "3", "4", "5"];

/// Bathroom option cards, in display order
pub const BATHROOM_OPTIONS: [&str; 5] = ["1", "2", "3", "4", "5"];

/// Price steps offered by the min/max selects
pub const PRICE_STEPS: [u64; 3] = [10, 20, 30];

/// Currency the price steps are denominated in
pub const PRICE_CURRENCY: &str = "EGP";

/// Area steps offered by the min/max selects
pub const AREA_STEPS: [u64; 3] = [10, 20, 30];

/// Unit the area steps are measured in
pub const AREA_UNIT: &str = "sqft";

/// Default log level for the demo shell
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Environment variable name for overriding the log level
pub const LOG_LEVEL_ENV_VAR: &str = "PROPLINE_LOG_LEVEL";

/// Get the log level, checking environment variable first, then falling back to default
pub fn get_log_level() -> String {
    std::env::var_os(LOG_LEVEL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
        .to_lowercase()
}

/// Whether a token is one of the bedroom option cards
pub fn is_bedroom_option(token: &str) -> bool {
    BEDROOM_OPTIONS
        .iter()
        .any(|option| option.eq_ignore_ascii_case(token))
}

/// Whether a token is one of the bathroom option cards
pub fn is_bathroom_option(token: &str) -> bool {
    BATHROOM_OPTIONS
        .iter()
        .any(|option| option.eq_ignore_ascii_case(token))
}

/// Canonical spelling of a bedroom token, if it names an option card
pub fn canonical_bedroom_token(token: &str) -> Option<&'static str> {
    BEDROOM_OPTIONS
        .iter()
        .find(|option| option.eq_ignore_ascii_case(token))
        .copied()
}

/// Canonical spelling of a bathroom token, if it names an option card
pub fn canonical_bathroom_token(token: &str) -> Option<&'static str> {
    BATHROOM_OPTIONS
        .iter()
        .find(|option| option.eq_ignore_ascii_case(token))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_display_order() {
        assert_eq!(BEDROOM_OPTIONS[0], "Studio");
        assert_eq!(BEDROOM_OPTIONS[5], "5");
        assert_eq!(BATHROOM_OPTIONS[0], "1");
    }

    #[test]
    fn test_env_var_name() {
        assert_eq!(LOG_LEVEL_ENV_VAR, "PROPLINE_LOG_LEVEL");
    }

    #[test]
    fn test_get_log_level_default() {
        // Save current env var state
        let original = std::env::var_os(LOG_LEVEL_ENV_VAR);

        // Remove env var if set
        std::env::remove_var(LOG_LEVEL_ENV_VAR);
        assert_eq!(get_log_level(), DEFAULT_LOG_LEVEL);

        // Restore original state
        if let Some(val) = original {
            std::env::set_var(LOG_LEVEL_ENV_VAR, val);
        }
    }

    #[test]
    fn test_get_log_level_env_override() {
        // Save current env var state
        let original = std::env::var_os(LOG_LEVEL_ENV_VAR);

        std::env::set_var(LOG_LEVEL_ENV_VAR, "DEBUG");
        assert_eq!(get_log_level(), "debug");

        // Restore original state
        match original {
            Some(val) => std::env::set_var(LOG_LEVEL_ENV_VAR, val),
            None => std::env::remove_var(LOG_LEVEL_ENV_VAR),
        }
    }

    #[test]
    fn test_canonical_tokens() {
        assert_eq!(canonical_bedroom_token("studio"), Some("Studio"));
        assert_eq!(canonical_bedroom_token("2"), Some("2"));
        assert_eq!(canonical_bedroom_token("6"), None);
        assert!(is_bathroom_option("5"));
        assert!(!is_bathroom_option("Studio"));
    }
}
