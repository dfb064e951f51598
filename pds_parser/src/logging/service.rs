//! Logging service implementation

use super::events::{LogEvent, LogLevel};
use crate::config::runtime::LoggingPreferences;
use std::sync::{Arc, Mutex};

/// Simple logger trait
pub trait Logger: Send + Sync {
    fn log(&self, event: &LogEvent);
}

/// Main logging service with configuration awareness
pub struct LoggingService {
    logger: Arc<dyn Logger>,
    min_level: LogLevel,
}

impl LoggingService {
    /// Create new logging service with specified logger and minimum level
    pub fn new(logger: Arc<dyn Logger>, min_level: LogLevel) -> Self {
        Self { logger, min_level }
    }

    /// Create service from runtime preferences
    pub fn with_preferences(preferences: &LoggingPreferences) -> Self {
        let logger: Arc<dyn Logger> = if preferences.enable_console_logging {
            Arc::new(ConsoleLogger)
        } else {
            Arc::new(SilentLogger)
        };
        Self::new(logger, preferences.min_log_level)
    }

    /// Check if level should be logged
    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= self.min_level
    }

    /// Log an event
    pub fn log_event(&self, event: LogEvent) {
        if self.should_log(event.level) {
            self.logger.log(&event);
        }
    }
}

/// Create a service configured from the environment
pub fn create_configured_service() -> LoggingService {
    LoggingService::with_preferences(&LoggingPreferences::default())
}

/// Console logger: errors to stderr, everything else to stdout
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, event: &LogEvent) {
        let mut line = format!(
            "[{} {}] {}",
            event.level.as_str(),
            event.code,
            event.message
        );
        if let Some(span) = event.span {
            line.push_str(&format!(" at {}", span));
        }
        let mut keys: Vec<&String> = event.context.keys().collect();
        keys.sort();
        for key in keys {
            line.push_str(&format!(" {}={}", key, event.context[key]));
        }
        if event.is_error() {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

/// Logger that discards everything (console logging disabled)
pub struct SilentLogger;

impl Logger for SilentLogger {
    fn log(&self, _event: &LogEvent) {}
}

/// In-memory logger for tests and diagnostics
#[derive(Default)]
pub struct MemoryLogger {
    events: Mutex<Vec<LogEvent>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of captured events
    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().expect("memory logger poisoned").clone()
    }

    pub fn error_count(&self) -> usize {
        self.events().iter().filter(|e| e.is_error()).count()
    }

    pub fn clear(&self) {
        self.events.lock().expect("memory logger poisoned").clear();
    }
}

impl Logger for MemoryLogger {
    fn log(&self, event: &LogEvent) {
        self.events
            .lock()
            .expect("memory logger poisoned")
            .push(event.clone());
    }
}
