use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Nothing is required: without an API key the service runs template-only.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub llm_advice_enabled: bool,
    pub llm_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            llm_advice_enabled: match optional_env("LLM_ADVICE_ENABLED") {
                Some(v) => parse_flag(&v)
                    .with_context(|| format!("LLM_ADVICE_ENABLED must be true or false, got '{v}'"))?,
                None => true,
            },
            llm_timeout: Duration::from_secs(
                std::env::var("LLM_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "60".to_string())
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// The API key to use, if generated advice is configured and enabled.
    pub fn llm_api_key(&self) -> Option<&str> {
        if !self.llm_advice_enabled {
            return None;
        }
        self.anthropic_api_key.as_deref()
    }
}

/// Unset and blank both count as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(key: Option<&str>, enabled: bool) -> Config {
        Config {
            anthropic_api_key: key.map(str::to_string),
            llm_advice_enabled: enabled,
            llm_timeout: Duration::from_secs(60),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_llm_key_requires_key_and_flag() {
        assert_eq!(config(Some("sk-test"), true).llm_api_key(), Some("sk-test"));
        assert_eq!(config(Some("sk-test"), false).llm_api_key(), None);
        assert_eq!(config(None, true).llm_api_key(), None);
    }
}
