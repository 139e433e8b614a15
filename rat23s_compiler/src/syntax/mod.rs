//! Syntax analysis for Rat23S
//!
//! A backtracking recursive-descent [`Parser`] pulls tokens from the
//! [`Lexer`](crate::lexical::Lexer) one at a time, tries grammar alternatives
//! in a fixed order and writes the productions used to reach each terminal to
//! a [`TraceSink`]. The first committed failure is reported once and ends the
//! parse.

pub mod error;
pub mod parser;
pub mod productions;
pub mod sink;
pub mod terminal;
pub mod trace;

pub use error::{SyntaxError, SyntaxResult};
pub use parser::{Mode, Outcome, ParseSummary, Parser};
pub use sink::{TraceSink, WriterSink};
pub use terminal::Terminal;
pub use trace::{ProductionTrace, TraceMark};

use crate::lexical::Lexer;

/// Parse `text` into an in-memory trace
pub fn parse_text(text: &str) -> (SyntaxResult<ParseSummary>, String) {
    let mut parser = Parser::new(Lexer::from_text(text), WriterSink::new(Vec::new()));
    let result = parser.parse();
    (result, parser.into_sink().contents())
}

#[cfg(test)]
mod tests {
    use super::productions::{
        labels, EXPECTED_PRIMARY, EXPECTED_QUALIFIER, EXPECTED_RELOP, EXPECTED_RETURN_CONT,
    };
    use super::*;
    use assert_matches::assert_matches;
    use std::io::{self, Write};

    const MINIMAL_TRACE: &str = "\
\t<Rat23S> -> <Opt Function Definitions> # <Opt Declaration List> # <Statement List Start>
\t<Opt Function Definitions> -> <Empty>
Token: separator\tLexeme: #
\t<Opt Declaration List> -> <Empty>
Token: separator\tLexeme: #
\t<Statement List Start> -> <Statement> <Statement List Cont>
\t<Statement> -> <Print>
\t<Print> -> put ( <Expression Start> ) ;
Token: keyword\t\tLexeme: put
Token: separator\tLexeme: (
\t<Expression Start> -> <Term Start> <Expression Cont>
\t<Term Start> -> <Factor> <Term Cont>
\t<Factor> -> <Primary>
\t<Primary Start> -> <Integer>
Token: integer\t\tLexeme: 1
\t<Term Cont> -> <Empty>
\t<Expression Cont> -> <Empty>
Token: separator\tLexeme: )
Token: separator\tLexeme: ;
\t<Statement List Cont> -> <Empty>
Token: EOF\t\tLexeme: 
";

    #[test]
    fn test_minimal_program_trace() {
        let (result, trace) = parse_text("# # put(1);");
        let summary = result.unwrap();

        assert_eq!(trace, MINIMAL_TRACE);
        assert_eq!(summary.tokens_matched, 8);
        assert_eq!(summary.productions_emitted, 13);
        assert_eq!(summary.final_line, 1);
    }

    #[test]
    fn test_streams_closed_after_success() {
        let mut parser = Parser::new(
            Lexer::from_text("# # put(1 + 2);"),
            WriterSink::new(Vec::new()),
        );
        parser.parse().unwrap();

        assert!(parser.is_closed());
        assert!(parser.lexer().is_closed());
        assert!(parser.sink().is_closed());
    }

    #[test]
    fn test_missing_fi_is_reported_once() {
        let (result, trace) = parse_text("#\n#\nif (1 == 1)\n  put(1);\n");

        assert_matches!(
            result,
            Err(SyntaxError::Expected { ref message, line: 4 }) if message == "expected 'fi' or 'else'"
        );
        let report = trace
            .split_once("4: ERROR - ")
            .map(|(_, report)| report)
            .unwrap();
        assert_eq!(
            report,
            "expected 'fi' or 'else'\n\t<If Cont> -> fi | else <Statement> fi\n\tToken: EOF\t\tLexeme: \n"
        );
        assert_eq!(trace.matches("ERROR").count(), 1);
    }

    #[test]
    fn test_fatal_closes_streams() {
        let mut parser = Parser::new(Lexer::from_text("# # x = ;"), WriterSink::new(Vec::new()));
        assert!(parser.parse().is_err());
        assert!(parser.lexer().is_closed());
        assert!(parser.sink().is_closed());
    }

    #[test]
    fn test_discarded_alternative_leaves_no_trace() {
        let (result, trace) = parse_text("# # x = 1;");
        result.unwrap();

        assert!(trace.contains(
            "\t<Statement> -> <Assign>\n\
             \t<Assign> -> <Identifier> = <Expression Start> ;\n\
             Token: identifier\tLexeme: x\n"
        ));
        assert!(!trace.contains(labels::STATEMENT_COMPOUND));
        assert!(!trace.contains(labels::COMPOUND));
        assert!(!trace.contains(labels::STATEMENT_ANY));
    }

    #[test]
    fn test_keywords_match_regardless_of_case() {
        let (result, trace) = parse_text("# # IF (a < b) PUT(a); Fi");
        result.unwrap();
        assert!(trace.contains("Token: keyword\t\tLexeme: IF\n"));
        assert!(trace.contains("Token: keyword\t\tLexeme: Fi\n"));
    }

    #[test]
    fn test_comments_are_invisible() {
        let (result, trace) = parse_text("[* c *] # [* d *] # get(x, y); [* end *]");
        result.unwrap();
        assert!(!trace.contains("comment"));
        assert!(trace.contains(labels::IDS_CONT));
    }

    #[test]
    fn test_full_program() {
        let source = "\
[* temperature table *]
function convert (fahr int)
{
    return 5 * (fahr - 32) / 9;
}
#
int low, high, step;
real ratio;
#
get(low, high, step);
while (low <= high) {
    put(convert(low));
    low = low + step;
} endwhile
if (ratio => 1.5) ratio = -ratio; else ratio = true; fi
return;
";
        let (result, trace) = parse_text(source);
        let summary = result.unwrap();

        assert_eq!(summary.final_line, 17);
        assert!(summary.max_depth >= 3);
        for label in [
            labels::FUNCTION,
            labels::PARAMETER,
            labels::QUALIFIER_INT,
            labels::QUALIFIER_REAL,
            labels::DECLARATION_LIST_CONT,
            labels::WHILE,
            labels::PRIMARY_CONT_CALL,
            labels::RELOP_ARROW,
            labels::RELOP_LESS_EQUAL,
            labels::FACTOR_NEGATE,
            labels::IF_CONT_ELSE,
            labels::PRIMARY_TRUE,
            labels::RETURN_CONT_EMPTY,
            labels::RETURN_CONT_EXPRESSION,
            labels::TERM_CONT_DIVIDE,
        ] {
            assert!(trace.contains(label), "missing {}", label);
        }
        assert!(trace.ends_with("Token: EOF\t\tLexeme: \n"));
    }

    #[test]
    fn test_missing_semicolon_reports_previous_line() {
        let (result, trace) = parse_text("# # x = 1\ny = 2;");
        assert_matches!(result, Err(SyntaxError::Expected { line: 1, .. }));
        assert!(trace.ends_with(
            "1: ERROR - expected ';'\n\
             \t<Term Cont> -> <Empty>\n\
             \t<Expression Cont> -> <Empty>\n\
             \tToken: identifier\tLexeme: y\n"
        ));
    }

    #[test]
    fn test_lexical_error_token_reaches_report() {
        let (result, trace) = parse_text("# # x = 1.;");
        assert_matches!(result, Err(SyntaxError::Expected { ref message, .. }) if message == EXPECTED_PRIMARY);
        assert!(trace.contains(labels::FACTOR_ANY));
        assert!(trace.ends_with("\tToken: ERROR\t\tLexeme: 1. is an invalid integer/real value.\n"));
    }

    #[test]
    fn test_trailing_tokens_expect_eof() {
        let (result, trace) = parse_text("# # put(1); }");
        assert_matches!(result, Err(SyntaxError::Expected { ref message, .. }) if message == "expected EOF");
        assert!(trace.ends_with("\tToken: separator\tLexeme: }\n"));
    }

    #[test]
    fn test_empty_statement_list_is_fatal() {
        let (result, trace) = parse_text("# #");
        assert_matches!(result, Err(SyntaxError::Expected { ref message, line: 1 }) if message == "expected statement");
        assert!(trace.contains(labels::STATEMENT_ANY));
    }

    #[test]
    fn test_nesting_limit() {
        let mut parser = Parser::new(
            Lexer::from_text("# # {{{{ x = 1; }}}}"),
            WriterSink::new(Vec::new()),
        )
        .with_depth_limit(3);

        assert_matches!(
            parser.parse(),
            Err(SyntaxError::MaxRecursionDepth { limit: 3, line: 1 })
        );
        let trace = parser.into_sink().contents();
        assert!(trace.contains("1: ERROR - maximum nesting depth of 3 exceeded\n"));
    }

    #[test]
    fn test_return_without_expression_at_depth_limit() {
        let mut parser = Parser::new(
            Lexer::from_text("# # { return; }"),
            WriterSink::new(Vec::new()),
        )
        .with_depth_limit(2);

        let summary = parser.parse().unwrap();
        assert_eq!(summary.max_depth, 2);
    }

    #[test]
    fn test_parenthesized_expressions_count_toward_depth() {
        let mut parser = Parser::new(
            Lexer::from_text("# # x = ((1));"),
            WriterSink::new(Vec::new()),
        )
        .with_depth_limit(2);

        assert_matches!(
            parser.parse(),
            Err(SyntaxError::MaxRecursionDepth { limit: 2, line: 1 })
        );
    }

    /// Everything after the `<line>: ERROR - ` marker
    fn fatal_report(trace: &str, line: usize) -> String {
        let marker = format!("{}: ERROR - ", line);
        let (_, report) = trace.split_once(&marker).unwrap();
        report.to_string()
    }

    #[test]
    fn test_parameter_without_qualifier() {
        let (result, trace) = parse_text("function f(a) { put(a); } # # put(1);");

        assert_matches!(
            result,
            Err(SyntaxError::Expected { ref message, line: 1 }) if message == EXPECTED_QUALIFIER
        );
        assert_eq!(
            fatal_report(&trace, 1),
            format!(
                "{}\n\t{}\n\t{}\n\tToken: separator\tLexeme: )\n",
                EXPECTED_QUALIFIER,
                labels::IDS_CONT_EMPTY,
                labels::QUALIFIER_ANY
            )
        );
    }

    #[test]
    fn test_condition_without_relational_operator() {
        let (result, trace) = parse_text("# # while (a b) put(a); endwhile");

        assert_matches!(
            result,
            Err(SyntaxError::Expected { ref message, line: 1 }) if message == EXPECTED_RELOP
        );
        assert_eq!(
            fatal_report(&trace, 1),
            format!(
                "{}\n\t{}\n\t{}\n\t{}\n\t{}\n\tToken: identifier\tLexeme: b\n",
                EXPECTED_RELOP,
                labels::PRIMARY_CONT_EMPTY,
                labels::TERM_CONT_EMPTY,
                labels::EXPRESSION_CONT_EMPTY,
                labels::RELOP_ANY
            )
        );
    }

    #[test]
    fn test_return_followed_by_stray_separator() {
        let (result, trace) = parse_text("# # return )");

        assert_matches!(
            result,
            Err(SyntaxError::Expected { ref message, line: 1 }) if message == EXPECTED_RETURN_CONT
        );
        assert_eq!(
            fatal_report(&trace, 1),
            format!(
                "{}\n\t{}\n\tToken: separator\tLexeme: )\n",
                EXPECTED_RETURN_CONT,
                labels::RETURN_CONT_ANY
            )
        );
    }

    #[test]
    fn test_scan_requires_identifiers() {
        let (result, trace) = parse_text("# # get(1);");

        assert_matches!(
            result,
            Err(SyntaxError::Expected { ref message, line: 1 }) if message == "expected <identifier>"
        );
        assert_eq!(
            fatal_report(&trace, 1),
            format!(
                "expected <identifier>\n\t{}\n\tToken: integer\t\tLexeme: 1\n",
                labels::IDS_START
            )
        );
    }

    #[test]
    fn test_function_header_missing_close_paren() {
        let (result, trace) = parse_text("function f( {");

        assert_matches!(
            result,
            Err(SyntaxError::Expected { ref message, line: 1 }) if message == "expected ')'"
        );
        assert_eq!(
            fatal_report(&trace, 1),
            format!(
                "expected ')'\n\t{}\n\tToken: separator\tLexeme: {{\n",
                labels::OPT_PARAMETER_LIST_EMPTY
            )
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_failure_stops_parse() {
        let mut parser = Parser::new(Lexer::from_text("# # put(1);"), WriterSink::new(BrokenPipe));
        assert_matches!(parser.parse(), Err(SyntaxError::Sink { .. }));
        assert!(parser.is_closed());
    }
}
