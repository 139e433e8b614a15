//! Backtracking recursive-descent engine
//!
//! Every grammar procedure takes a [`Mode`]. In [`Mode::Probe`] a miss on the
//! first symbol returns [`Outcome::Failed`] and the caller restores the trace
//! and tries its next alternative. In [`Mode::Commit`] the same miss is fatal:
//! the error is written to the sink, both streams are closed and a
//! [`SyntaxError`] unwinds to [`Parser::parse`].

use super::error::{SyntaxError, SyntaxResult};
use super::sink::TraceSink;
use super::terminal::Terminal;
use super::trace::{ProductionTrace, TraceMark};
use crate::config::compile_time::syntax::MAX_PARSE_DEPTH;
use crate::lexical::Lexer;
use crate::logging::codes;
use crate::tokens::Token;
use crate::{log_debug, log_error, log_info, log_success};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Failure to match the first symbol is recoverable
    Probe,
    /// Failure is a fatal syntax error
    Commit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Matched,
    Failed,
}

impl Outcome {
    pub fn is_matched(self) -> bool {
        self == Outcome::Matched
    }

    pub fn is_failed(self) -> bool {
        self == Outcome::Failed
    }
}

/// Statistics for a successful parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseSummary {
    pub tokens_matched: usize,
    pub productions_emitted: usize,
    pub max_depth: usize,
    pub final_line: usize,
}

pub struct Parser<S: TraceSink> {
    lexer: Lexer,
    sink: S,
    trace: ProductionTrace,
    lookahead: Option<Token>,
    /// Line of the last matched terminal, cited by fatal errors
    err_line: usize,
    depth: usize,
    depth_limit: usize,
    max_depth: usize,
    tokens_matched: usize,
    productions_emitted: usize,
    closed: bool,
}

impl<S: TraceSink> Parser<S> {
    pub fn new(lexer: Lexer, sink: S) -> Self {
        Self {
            lexer,
            sink,
            trace: ProductionTrace::new(),
            lookahead: None,
            err_line: 1,
            depth: 0,
            depth_limit: MAX_PARSE_DEPTH,
            max_depth: 0,
            tokens_matched: 0,
            productions_emitted: 0,
            closed: false,
        }
    }

    /// Override the nesting bound for statements and parenthesized expressions
    pub fn with_depth_limit(mut self, limit: usize) -> Self {
        self.depth_limit = limit;
        self
    }

    /// Run `<Rat23S>` to completion or to the first fatal error
    ///
    /// The character source and the sink are closed in both cases.
    pub fn parse(&mut self) -> SyntaxResult<ParseSummary> {
        log_info!("Starting syntax analysis", "depth_limit" => self.depth_limit);

        self.rat23s()?;
        self.finish()?;

        let summary = ParseSummary {
            tokens_matched: self.tokens_matched,
            productions_emitted: self.productions_emitted,
            max_depth: self.max_depth,
            final_line: self.lexer.line_number(),
        };

        log_success!(codes::success::SYNTAX_VALIDATION_PASSED, "Syntax analysis passed",
            "tokens" => summary.tokens_matched,
            "productions" => summary.productions_emitted,
            "max_depth" => summary.max_depth);

        Ok(summary)
    }

    pub fn lexer(&self) -> &Lexer {
        &self.lexer
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    // ========================================================================
    // TERMINAL MATCHING
    // ========================================================================

    /// Match the lookahead against `expected`
    ///
    /// A match writes the pending trace and the token, clears both and records
    /// the current line. A miss keeps the lookahead for the next alternative.
    pub(super) fn check_symbol(&mut self, expected: Terminal, mode: Mode) -> SyntaxResult<Outcome> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.next_significant_token(),
        };

        if !expected.matches(&token) {
            self.lookahead = Some(token);
            return match mode {
                Mode::Probe => Ok(Outcome::Failed),
                Mode::Commit => Err(self.expected_failure(expected.expectation())),
            };
        }

        if let Err(error) = self.sink.emit(self.trace.labels(), &token) {
            return Err(self.sink_failure(&error));
        }
        self.productions_emitted += self.trace.len();
        self.tokens_matched += 1;
        self.trace.clear();
        self.err_line = self.lexer.line_number();

        log_debug!("Matched terminal", "token" => &token, "line" => self.err_line);
        Ok(Outcome::Matched)
    }

    fn next_significant_token(&mut self) -> Token {
        loop {
            let token = self.lexer.get_token();
            if !token.is_comment() {
                return token;
            }
        }
    }

    // ========================================================================
    // TRACE BOOKKEEPING
    // ========================================================================

    pub(super) fn push(&mut self, label: &'static str) {
        self.trace.push(label);
    }

    pub(super) fn snapshot(&self) -> TraceMark {
        self.trace.snapshot()
    }

    pub(super) fn restore(&mut self, mark: TraceMark) {
        self.trace.restore(mark);
    }

    /// Every alternative missed: fail quietly, or report `message` when committed
    pub(super) fn no_alternative(
        &mut self,
        mode: Mode,
        combined_label: &'static str,
        message: &str,
    ) -> SyntaxResult<Outcome> {
        match mode {
            Mode::Probe => Ok(Outcome::Failed),
            Mode::Commit => {
                self.push(combined_label);
                Err(self.expected_failure(message))
            }
        }
    }

    // ========================================================================
    // NESTING
    // ========================================================================

    pub(super) fn descend(&mut self) -> SyntaxResult<()> {
        if self.depth >= self.depth_limit {
            let error = SyntaxError::max_recursion_depth(self.depth_limit, self.err_line);
            return Err(self.fatal(error));
        }
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        Ok(())
    }

    pub(super) fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    // ========================================================================
    // TERMINATION
    // ========================================================================

    fn expected_failure(&mut self, message: impl Into<String>) -> SyntaxError {
        let error = SyntaxError::expected(message, self.err_line);
        self.fatal(error)
    }

    /// Report `error` to the sink, close both streams, and hand the error back
    fn fatal(&mut self, error: SyntaxError) -> SyntaxError {
        let line = error.line().unwrap_or(self.err_line);
        let message = error.report_message();

        if let Err(io) = self
            .sink
            .fatal(line, &message, self.trace.labels(), self.lookahead.as_ref())
        {
            log_error!(codes::syntax::TRACE_SINK_FAILURE, "Failed to write syntax error",
                "error" => io);
        }
        self.trace.clear();
        self.close_streams();

        let found = self
            .lookahead
            .as_ref()
            .map(|token| token.to_string())
            .unwrap_or_default();
        log_error!(error.error_code(), &message, line = line, "found" => found);

        error
    }

    fn sink_failure(&mut self, io: &std::io::Error) -> SyntaxError {
        let error = SyntaxError::sink(io);
        self.close_streams();
        log_error!(error.error_code(), &error.to_string(), line = self.err_line);
        error
    }

    fn close_streams(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.lexer.close();
        if let Err(io) = self.sink.close() {
            log_error!(codes::syntax::TRACE_SINK_FAILURE, "Failed to close trace output",
                "error" => io);
        }
    }

    /// Close both streams after a successful parse
    fn finish(&mut self) -> SyntaxResult<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.lexer.close();
        self.sink.close().map_err(|io| SyntaxError::sink(&io))
    }
}
