//! Syntax errors
//!
//! Only committed failures become errors. A probe that misses its first
//! symbol is reported as [`Outcome::Failed`](super::parser::Outcome) instead.

use crate::logging::{codes, Code};

pub type SyntaxResult<T> = Result<T, SyntaxError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// A required symbol or construct was absent after the production committed
    #[error("{line}: {message}")]
    Expected { message: String, line: usize },

    #[error("{line}: maximum nesting depth of {limit} exceeded")]
    MaxRecursionDepth { limit: usize, line: usize },

    #[error("Trace output failed: {message}")]
    Sink { message: String },
}

impl SyntaxError {
    pub fn expected(message: impl Into<String>, line: usize) -> Self {
        Self::Expected {
            message: message.into(),
            line,
        }
    }

    pub fn max_recursion_depth(limit: usize, line: usize) -> Self {
        Self::MaxRecursionDepth { limit, line }
    }

    pub fn sink(error: &std::io::Error) -> Self {
        Self::Sink {
            message: error.to_string(),
        }
    }

    pub fn error_code(&self) -> Code {
        match self {
            Self::Expected { .. } => codes::syntax::EXPECTED_SYMBOL,
            Self::MaxRecursionDepth { .. } => codes::syntax::MAX_RECURSION_DEPTH,
            Self::Sink { .. } => codes::syntax::TRACE_SINK_FAILURE,
        }
    }

    /// Line of the last successfully matched token, when known
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Expected { line, .. } | Self::MaxRecursionDepth { line, .. } => Some(*line),
            Self::Sink { .. } => None,
        }
    }

    /// Text written after `<line>: ERROR - ` in the trace
    pub fn report_message(&self) -> String {
        match self {
            Self::Expected { message, .. } => message.clone(),
            Self::MaxRecursionDepth { limit, .. } => {
                format!("maximum nesting depth of {} exceeded", limit)
            }
            Self::Sink { message } => message.clone(),
        }
    }

    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }
}
