//! Rat23S front end: lexical analysis and backtracking recursive-descent parsing
//!
//! ```text
//! file_processor -> source -> lexical -> syntax -> trace sink
//! ```

pub mod config;
pub mod file_processor;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod source;
pub mod syntax;
pub mod tokens;

// Re-export key types for library consumers
pub use lexical::{Lexer, LexerError};
pub use pipeline::{PipelineError, PipelineResult};
pub use syntax::{ParseSummary, Parser, SyntaxError, TraceSink, WriterSink};
pub use tokens::{Token, TokenKind};
