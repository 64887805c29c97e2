use std::env;

/// Environment variable naming the puzzle service root.
const API_URL_VAR: &str = "NINEFOLD_API_URL";

/// Puzzle service root used when [`API_URL_VAR`] is unset.
const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";

/// Runtime configuration for the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the puzzle generator/solver service.
    pub api_base_url: String,
}

impl AppConfig {
    /// Reads configuration from the environment.
    #[must_use]
    pub fn load() -> Self {
        Self::from_env_value(env::var(API_URL_VAR).ok())
    }

    fn from_env_value(value: Option<String>) -> Self {
        let api_base_url = value
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        Self { api_base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_the_default_url() {
        assert_eq!(
            AppConfig::from_env_value(None).api_base_url,
            DEFAULT_API_URL
        );
        assert_eq!(
            AppConfig::from_env_value(Some(String::new())).api_base_url,
            DEFAULT_API_URL
        );
        assert_eq!(
            AppConfig::from_env_value(Some("   ".to_owned())).api_base_url,
            DEFAULT_API_URL
        );
    }

    #[test]
    fn uses_the_configured_url_trimmed() {
        let config = AppConfig::from_env_value(Some("  https://puzzles.example  ".to_owned()));
        assert_eq!(config.api_base_url, "https://puzzles.example");
    }
}
