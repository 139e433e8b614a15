// RUNTIME PREFERENCES (User Experience)
//
// Every preference defaults from a `RAT23S_*` environment variable. A TOML
// preferences file, when given, overrides individual fields.

use crate::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Read a boolean preference from the environment
fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProcessorPreferences {
    /// Whether to reject sources without a `.rat` extension
    pub require_rat_extension: bool,

    /// Whether to log read timings for each source file
    pub enable_performance_logging: bool,
}

impl Default for FileProcessorPreferences {
    fn default() -> Self {
        Self {
            require_rat_extension: env_flag(env_vars::REQUIRE_RAT_EXTENSION, false),
            enable_performance_logging: env_flag(env_vars::ENABLE_PERFORMANCE_LOGGING, true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalPreferences {
    /// Skip a leading UTF-8 byte-order mark before lexing
    pub skip_byte_order_mark: bool,

    /// Run a full-file lexical pass before parsing and stop on the first error token
    pub lexical_precheck: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            skip_byte_order_mark: env_flag(env_vars::LEXICAL_SKIP_BOM, true),
            lexical_precheck: env_flag(env_vars::LEXICAL_PRECHECK, true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxPreferences {
    /// Echo the fatal `<line>: ERROR - <message>` line to stderr as well as the trace sink
    pub echo_errors_to_console: bool,
}

impl Default for SyntaxPreferences {
    fn default() -> Self {
        Self {
            echo_errors_to_console: env_flag(env_vars::SYNTAX_ECHO_ERRORS, true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Whether log events are written to stderr at all
    pub enable_console_logging: bool,

    /// Minimum level that reaches the logger
    pub min_log_level: LogLevel,

    /// Whether to attach the current source file to log events
    pub include_file_context: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env_flag(env_vars::LOGGING_USE_STRUCTURED, false),
            enable_console_logging: env_flag(env_vars::LOGGING_ENABLE_CONSOLE, false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
            include_file_context: env_flag(env_vars::LOGGING_INCLUDE_FILE_CONTEXT, true),
        }
    }
}

/// Parse log level from string (used for environment variables)
pub fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.trim().to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

/// Errors raised while loading a preferences file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read configuration file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration in '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub file_processor: FileProcessorPreferences,
    pub lexical: LexicalPreferences,
    pub syntax: SyntaxPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Load preferences from TOML text; missing tables and fields keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load preferences from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // File Processor
    pub const REQUIRE_RAT_EXTENSION: &str = "RAT23S_REQUIRE_RAT_EXTENSION";
    pub const ENABLE_PERFORMANCE_LOGGING: &str = "RAT23S_ENABLE_PERFORMANCE_LOGGING";

    // Lexical
    pub const LEXICAL_SKIP_BOM: &str = "RAT23S_LEXICAL_SKIP_BOM";
    pub const LEXICAL_PRECHECK: &str = "RAT23S_LEXICAL_PRECHECK";

    // Syntax
    pub const SYNTAX_ECHO_ERRORS: &str = "RAT23S_SYNTAX_ECHO_ERRORS";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "RAT23S_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "RAT23S_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "RAT23S_LOGGING_MIN_LEVEL";
    pub const LOGGING_INCLUDE_FILE_CONTEXT: &str = "RAT23S_LOGGING_INCLUDE_FILE_CONTEXT";
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("ERROR"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("0"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("warn"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("warning"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("1"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level(" info "), Some(LogLevel::Info));
        assert_eq!(parse_log_level("2"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("3"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("verbose"), None);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let defaults = RuntimeConfig::default();
        let config = RuntimeConfig::from_toml_str(
            r#"
            [lexical]
            lexical_precheck = false

            [logging]
            min_log_level = "debug"
            "#,
        )
        .unwrap();

        assert!(!config.lexical.lexical_precheck);
        assert_eq!(
            config.lexical.skip_byte_order_mark,
            defaults.lexical.skip_byte_order_mark
        );
        assert_eq!(config.logging.min_log_level, LogLevel::Debug);
        assert_eq!(
            config.syntax.echo_errors_to_console,
            defaults.syntax.echo_errors_to_console
        );
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let result = RuntimeConfig::from_toml_str("[lexical]\nlexical_precheck = \"maybe\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[syntax]\necho_errors_to_console = false").unwrap();

        let config = RuntimeConfig::from_toml_file(&path).unwrap();
        assert!(!config.syntax.echo_errors_to_console);

        let missing = RuntimeConfig::from_toml_file(dir.path().join("absent.toml"));
        assert_matches!(missing, Err(ConfigError::Io { .. }));
    }

    #[test]
    fn test_env_var_names_are_prefixed() {
        for name in [
            env_vars::REQUIRE_RAT_EXTENSION,
            env_vars::LEXICAL_PRECHECK,
            env_vars::SYNTAX_ECHO_ERRORS,
            env_vars::LOGGING_MIN_LEVEL,
        ] {
            assert!(name.starts_with("RAT23S_"));
        }
    }
}
