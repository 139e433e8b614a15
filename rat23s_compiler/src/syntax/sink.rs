//! Destination for the production trace
//!
//! Every matched terminal is written as its pending trace lines, each indented
//! with a tab, followed by the token line. A fatal error writes the error line,
//! the pending trace and the offending token, after which the sink is closed.

use crate::tokens::Token;
use std::io::{self, Write};

pub trait TraceSink {
    /// Pending production labels, then the matched token
    fn emit(&mut self, trace: &[&str], token: &Token) -> io::Result<()>;

    /// `<line>: ERROR - <message>`, then the pending trace and the current token if any
    fn fatal(
        &mut self,
        line: usize,
        message: &str,
        trace: &[&str],
        token: Option<&Token>,
    ) -> io::Result<()>;

    /// Flush and stop accepting output; later calls are no-ops
    fn close(&mut self) -> io::Result<()>;

    fn is_closed(&self) -> bool;
}

/// [`TraceSink`] over any [`Write`]
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    closed: bool,
    lines_written: usize,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            closed: false,
            lines_written: 0,
        }
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn ensure_open(&self) -> io::Result<()> {
        if self.closed {
            Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "trace output already closed",
            ))
        } else {
            Ok(())
        }
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.lines_written += 1;
        Ok(())
    }

    fn write_trace(&mut self, trace: &[&str]) -> io::Result<()> {
        for label in trace {
            writeln!(self.writer, "\t{}", label)?;
            self.lines_written += 1;
        }
        Ok(())
    }
}

impl<W: Write> TraceSink for WriterSink<W> {
    fn emit(&mut self, trace: &[&str], token: &Token) -> io::Result<()> {
        self.ensure_open()?;
        self.write_trace(trace)?;
        self.write_line(&token.trace_line())
    }

    fn fatal(
        &mut self,
        line: usize,
        message: &str,
        trace: &[&str],
        token: Option<&Token>,
    ) -> io::Result<()> {
        self.ensure_open()?;
        self.write_line(&format!("{}: ERROR - {}", line, message))?;
        self.write_trace(trace)?;
        if let Some(token) = token {
            self.write_line(&format!("\t{}", token.trace_line()))?;
        }
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.writer.flush()
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

impl WriterSink<Vec<u8>> {
    /// Everything written so far, for in-memory sinks
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.writer).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenKind;
    use assert_matches::assert_matches;

    #[test]
    fn test_emit_writes_trace_before_token() {
        let mut sink = WriterSink::new(Vec::new());
        sink.emit(
            &["<Rat23S> -> x", "<Opt Function Definitions> -> <Empty>"],
            &Token::new(TokenKind::Separator, "#"),
        )
        .unwrap();

        assert_eq!(
            sink.contents(),
            "\t<Rat23S> -> x\n\t<Opt Function Definitions> -> <Empty>\nToken: separator\tLexeme: #\n"
        );
        assert_eq!(sink.lines_written(), 3);
    }

    #[test]
    fn test_fatal_layout() {
        let mut sink = WriterSink::new(Vec::new());
        sink.fatal(
            3,
            "expected ';'",
            &["<Assign> -> <Identifier> = <Expression Start> ;"],
            Some(&Token::new(TokenKind::Identifier, "y")),
        )
        .unwrap();

        assert_eq!(
            sink.contents(),
            "3: ERROR - expected ';'\n\
             \t<Assign> -> <Identifier> = <Expression Start> ;\n\
             \tToken: identifier\tLexeme: y\n"
        );
    }

    #[test]
    fn test_writes_after_close_fail() {
        let mut sink = WriterSink::new(Vec::new());
        sink.close().unwrap();
        sink.close().unwrap();
        assert!(sink.is_closed());
        assert_matches!(
            sink.emit(&[], &Token::end_of_input()),
            Err(ref e) if e.kind() == io::ErrorKind::BrokenPipe
        );
    }
}
