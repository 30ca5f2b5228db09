//! Configuration management for the contact book.
//!
//! This module handles loading configuration from environment variables.
//! It avoids polluting stdout (which carries command replies) by loading
//! any `.env` file silently via `dotenvy`.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default REPL prompt.
const DEFAULT_PROMPT: &str = "> ";

/// Default tracing filter when neither RUST_LOG nor LOG_LEVEL is set.
const DEFAULT_LOG_LEVEL: &str = "error";

/// Configuration for an interactive session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt written before each input line (default: "> ")
    pub prompt: String,

    /// Log level used as the tracing filter fallback (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PROMPT`: REPL prompt string (default: `"> "`)
    /// - `LOG_LEVEL`: Logging level (default: `"error"`); `RUST_LOG`
    ///   takes precedence at subscriber setup
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for values that would break
    /// the line-oriented protocol (a prompt containing a newline) or an
    /// empty log level.
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let prompt = env::var("CONTACT_BOOK_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());
        if prompt.contains('\n') {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_PROMPT".to_string(),
                reason: "must not contain a newline".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(Config { prompt, log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("CONTACT_BOOK_PROMPT");
        env::remove_var("LOG_LEVEL");
    }

    #[test]
    #[serial]
    fn test_defaults_when_env_unset() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_prompt_from_env() {
        clear_env();
        env::set_var("CONTACT_BOOK_PROMPT", "contacts> ");
        let config = Config::from_env().unwrap();
        assert_eq!(config.prompt, "contacts> ");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_prompt_with_newline_rejected() {
        clear_env();
        env::set_var("CONTACT_BOOK_PROMPT", "bad\nprompt");
        let result = Config::from_env();
        assert!(result.is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_empty_log_level_rejected() {
        clear_env();
        env::set_var("LOG_LEVEL", "  ");
        let result = Config::from_env();
        assert!(result.is_err());
        clear_env();
    }
}
