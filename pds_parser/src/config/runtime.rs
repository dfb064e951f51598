// RUNTIME PREFERENCES (User Experience)

use crate::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalPreferences {
    /// Whether to log token counts when the scanner reaches end of input
    pub log_token_metrics: bool,

    /// Whether to log string literal length statistics
    pub log_string_statistics: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            log_token_metrics: env::var("PDS_LEXICAL_TOKEN_METRICS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_string_statistics: env::var("PDS_LEXICAL_LOG_STRING_STATS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Whether to enable console output (user preference)
    pub enable_console_logging: bool,

    /// User preferred minimum log level
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            enable_console_logging: env::var("PDS_LOGGING_ENABLE_CONSOLE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            min_log_level: env::var("PDS_LOGGING_MIN_LEVEL")
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Warning),
        }
    }
}

/// Parse log level from string (used for environment variables)
pub fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Lexical
    pub const LEXICAL_TOKEN_METRICS: &str = "PDS_LEXICAL_TOKEN_METRICS";
    pub const LEXICAL_LOG_STRING_STATS: &str = "PDS_LEXICAL_LOG_STRING_STATS";

    // Logging
    pub const LOGGING_ENABLE_CONSOLE: &str = "PDS_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "PDS_LOGGING_MIN_LEVEL";
}
