//! Logging configuration: runtime preferences bounded by compile-time limits

use super::events::LogLevel;
use crate::config::compile_time::logging::{LOG_BUFFER_SIZE, MAX_LOG_MESSAGE_LENGTH};
use crate::config::runtime::LoggingPreferences;
use std::sync::OnceLock;

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();
static DEFAULT_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Install logging preferences; only the first call wins
pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| "Runtime preferences already initialized".to_string())
}

/// Installed preferences, falling back to environment defaults read once
fn get_runtime_preferences() -> &'static LoggingPreferences {
    RUNTIME_PREFERENCES
        .get()
        .unwrap_or_else(|| DEFAULT_PREFERENCES.get_or_init(LoggingPreferences::default))
}

pub fn get_min_log_level() -> LogLevel {
    get_runtime_preferences().min_log_level
}

pub fn use_structured_logging() -> bool {
    get_runtime_preferences().use_structured_logging
}

pub fn use_console_logging() -> bool {
    get_runtime_preferences().enable_console_logging
}

pub fn include_file_context() -> bool {
    get_runtime_preferences().include_file_context
}

pub fn get_error_buffer_size() -> usize {
    LOG_BUFFER_SIZE
}

/// Check the compile-time limits the logging system relies on
pub fn validate_config() -> Result<(), String> {
    if LOG_BUFFER_SIZE < 100 {
        return Err(format!(
            "LOG_BUFFER_SIZE ({}) is below the minimum of 100",
            LOG_BUFFER_SIZE
        ));
    }
    if MAX_LOG_MESSAGE_LENGTH == 0 {
        return Err("MAX_LOG_MESSAGE_LENGTH must be positive".to_string());
    }
    Ok(())
}

/// Human-readable summary used by `--version`
pub fn get_config_summary() -> String {
    format!(
        "Logging: min_level={} structured={} console={} buffer={} ({})",
        get_min_log_level().as_str(),
        use_structured_logging(),
        use_console_logging(),
        get_error_buffer_size(),
        crate::config::build_info::source_info()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_time_limits_validate() {
        assert!(validate_config().is_ok());
        assert_eq!(get_error_buffer_size(), LOG_BUFFER_SIZE);
    }

    #[test]
    fn test_fallback_preferences_are_cached() {
        let first = get_runtime_preferences();
        let second = get_runtime_preferences();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_summary_mentions_level_and_profile() {
        let summary = get_config_summary();
        assert!(summary.contains("min_level="));
        assert!(summary.contains(crate::config::build_info::profile()));
    }
}
