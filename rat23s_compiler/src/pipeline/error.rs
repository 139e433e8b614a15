use crate::file_processor::FileProcessorError;
use crate::lexical::LexerError;
use crate::logging::{codes, Code};
use crate::syntax::SyntaxError;
use std::io;
use std::path::PathBuf;

/// Pipeline processing errors
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("File processing failed: {0}")]
    FileProcessing(#[from] FileProcessorError),

    #[error("Lexical analysis failed: {0}")]
    LexicalAnalysis(#[from] LexerError),

    #[error("Syntax analysis failed: {0}")]
    SyntaxAnalysis(#[from] SyntaxError),

    #[error("Cannot open output file {}: {source}", .path.display())]
    OutputUnavailable { path: PathBuf, source: io::Error },

    #[error("Failed to write output: {source}")]
    Output { source: io::Error },

    #[error("Pipeline error: {message}")]
    Pipeline { message: String },
}

impl PipelineError {
    pub fn pipeline_error(message: &str) -> Self {
        Self::Pipeline {
            message: message.to_string(),
        }
    }

    pub fn output(source: io::Error) -> Self {
        Self::Output { source }
    }

    pub fn error_code(&self) -> Code {
        match self {
            Self::FileProcessing(e) => e.error_code(),
            Self::LexicalAnalysis(e) => e.error_code(),
            Self::SyntaxAnalysis(e) => e.error_code(),
            Self::OutputUnavailable { .. } | Self::Output { .. } => {
                codes::file_processing::OUTPUT_UNAVAILABLE
            }
            Self::Pipeline { .. } => codes::system::INTERNAL_ERROR,
        }
    }

    /// `<line>: ERROR - <message>` for errors tied to a source line
    pub fn source_report(&self) -> Option<String> {
        match self {
            Self::LexicalAnalysis(e) => Some(format!("{}: ERROR - {}", e.line(), e)),
            Self::SyntaxAnalysis(e) => e
                .line()
                .map(|line| format!("{}: ERROR - {}", line, e.report_message())),
            _ => None,
        }
    }
}
