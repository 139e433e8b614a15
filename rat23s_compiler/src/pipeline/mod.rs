mod error;
mod info;
mod result;
mod validation;

// Re-export public types
pub use error::PipelineError;
pub use info::{get_pipeline_info, PipelineInfo};
pub use result::PipelineResult;
pub use validation::validate_pipeline;

use crate::config::runtime::{LexicalPreferences, RuntimeConfig};
use crate::file_processor::create_processor_from_preferences;
use crate::lexical::{collect_token_table, token_table_json, write_token_table, LexicalMetrics, Lexer};
use crate::logging::{self, codes};
use crate::source::SourceBuffer;
use crate::syntax::{ParseSummary, Parser, TraceSink, WriterSink};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Read, pre-check and parse a source file, writing the production trace to `output`
pub fn process_file<W: Write>(
    file_path: &str,
    output: W,
    config: &RuntimeConfig,
) -> Result<PipelineResult, PipelineError> {
    process_file_with(file_path, || Ok(output), config)
}

/// Like [`process_file`], but the output is opened only once the source file is accepted
pub fn process_file_with<W, F>(
    file_path: &str,
    open: F,
    config: &RuntimeConfig,
) -> Result<PipelineResult, PipelineError>
where
    W: Write,
    F: FnOnce() -> Result<W, PipelineError>,
{
    let start_time = Instant::now();

    logging::with_file_context(PathBuf::from(file_path), || {
        crate::log_info!("Starting Rat23S front end", "file" => file_path);

        // Stage 1: File processing
        let file_result =
            create_processor_from_preferences(&config.file_processor).process_file(file_path)?;
        let output = open()?;

        // Stages 2 and 3: Lexical pre-check and syntax analysis
        let (lexical_metrics, parse_summary) =
            process_source(file_result.source, output, &config.lexical)?;

        let result = PipelineResult::new(
            file_result.metadata,
            lexical_metrics,
            parse_summary,
            start_time.elapsed(),
        );
        result.log_success(file_path);

        Ok(result)
    })
}

/// Pre-check and parse in-memory source bytes
pub fn process_source<W: Write>(
    bytes: Vec<u8>,
    output: W,
    preferences: &LexicalPreferences,
) -> Result<(Option<LexicalMetrics>, ParseSummary), PipelineError> {
    let source = prepare_source(bytes, preferences);
    let mut sink = WriterSink::new(output);

    let lexical_metrics = if preferences.lexical_precheck {
        match Lexer::new(source.clone()).analyze() {
            Ok(metrics) => Some(metrics),
            Err(error) => {
                report_lexical_failure(&mut sink, &error.to_string(), error.line());
                return Err(error.into());
            }
        }
    } else {
        None
    };

    let summary = Parser::new(Lexer::new(source), sink).parse()?;
    Ok((lexical_metrics, summary))
}

/// Write the token table (or its JSON form) for a source file; returns the row count
pub fn list_tokens<W: Write>(
    file_path: &str,
    output: W,
    json: bool,
    config: &RuntimeConfig,
) -> Result<usize, PipelineError> {
    list_tokens_with(file_path, || Ok(output), json, config)
}

/// Like [`list_tokens`], but the output is opened only once the source file is accepted
pub fn list_tokens_with<W, F>(
    file_path: &str,
    open: F,
    json: bool,
    config: &RuntimeConfig,
) -> Result<usize, PipelineError>
where
    W: Write,
    F: FnOnce() -> Result<W, PipelineError>,
{
    logging::with_file_context(PathBuf::from(file_path), || {
        crate::log_info!("Listing tokens", "file" => file_path, "json" => json);

        let file_result =
            create_processor_from_preferences(&config.file_processor).process_file(file_path)?;
        let mut output = open()?;
        let mut lexer = Lexer::new(prepare_source(file_result.source, &config.lexical));
        let listing = collect_token_table(&mut lexer);
        lexer.close();
        let tokens = listing?;

        if json {
            let text = token_table_json(&tokens)
                .map_err(|e| PipelineError::pipeline_error(&e.to_string()))?;
            writeln!(output, "{}", text)
                .and_then(|_| output.flush())
                .map_err(PipelineError::output)?;
        } else {
            write_token_table(&mut output, &tokens).map_err(PipelineError::output)?;
        }

        crate::log_success!(codes::success::TOKEN_LISTING_COMPLETE, "Token listing written",
            "file" => file_path,
            "tokens" => tokens.len());

        Ok(tokens.len())
    })
}

/// Output file, or stdout when no path is given
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, PipelineError> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| PipelineError::OutputUnavailable {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn prepare_source(bytes: Vec<u8>, preferences: &LexicalPreferences) -> SourceBuffer {
    let mut source = SourceBuffer::new(bytes);
    if preferences.skip_byte_order_mark && source.skip_byte_order_mark() {
        crate::log_debug!("Skipped byte-order mark");
    }
    source
}

fn report_lexical_failure<W: Write>(sink: &mut WriterSink<W>, message: &str, line: usize) {
    let written = sink.fatal(line, message, &[], None).and_then(|_| sink.close());
    if let Err(error) = written {
        crate::log_error!(codes::syntax::TRACE_SINK_FAILURE, "Failed to write lexical error",
            "error" => error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::LexerError;
    use crate::syntax::SyntaxError;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::tempdir;

    fn preferences(precheck: bool) -> LexicalPreferences {
        LexicalPreferences {
            skip_byte_order_mark: true,
            lexical_precheck: precheck,
        }
    }

    #[test]
    fn test_process_file_writes_trace() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sample.rat");
        fs::write(&path, "#\n#\nput(1 + 2);\n").unwrap();

        let mut output = Vec::new();
        let result = process_file(
            path.to_str().unwrap(),
            &mut output,
            &RuntimeConfig::default(),
        )
        .unwrap();

        let trace = String::from_utf8(output).unwrap();
        assert!(trace.starts_with("\t<Rat23S> ->"));
        assert!(trace.ends_with("Token: EOF\t\tLexeme: \n"));
        assert_eq!(result.parse_summary.tokens_matched, 10);
        assert_eq!(result.file_metadata.line_count, 3);
    }

    #[test]
    fn test_precheck_stops_before_parsing() {
        let mut output = Vec::new();
        let error = process_source(
            b"#\n#\nput(1);\nx = 3 $ 4;\n".to_vec(),
            &mut output,
            &preferences(true),
        )
        .unwrap_err();

        assert_matches!(
            error,
            PipelineError::LexicalAnalysis(LexerError::UnrecognizedSymbol { line: 4, .. })
        );
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "4: ERROR - $ is an unrecognized symbol.\n"
        );
    }

    #[test]
    fn test_without_precheck_parser_reports_error_token() {
        let mut output = Vec::new();
        let error = process_source(
            b"# # x = 3 $ 4;".to_vec(),
            &mut output,
            &preferences(false),
        )
        .unwrap_err();

        assert_matches!(error, PipelineError::SyntaxAnalysis(SyntaxError::Expected { .. }));
        let trace = String::from_utf8(output).unwrap();
        assert!(trace.contains("1: ERROR - expected ';'"));
        assert!(trace.ends_with("\tToken: ERROR\t\tLexeme: $ is an unrecognized symbol.\n"));
    }

    #[test]
    fn test_byte_order_mark_skipped() {
        let mut bytes = crate::source::BYTE_ORDER_MARK.to_vec();
        bytes.extend_from_slice(b"# # put(true);");

        let mut output = Vec::new();
        let (metrics, summary) = process_source(bytes, &mut output, &preferences(true)).unwrap();
        assert_eq!(metrics.map(|m| m.keywords), Some(2));
        assert_eq!(summary.tokens_matched, 8);
    }

    #[test]
    fn test_list_tokens_table_and_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tokens.rat");
        fs::write(&path, "[* header *]\nint x;\n").unwrap();
        let path = path.to_str().unwrap();

        let mut table = Vec::new();
        let count = list_tokens(path, &mut table, false, &RuntimeConfig::default()).unwrap();
        assert_eq!(count, 3);
        assert_eq!(
            String::from_utf8(table).unwrap(),
            "Token\t\tLexeme\nkeyword\t\tint\nidentifier\tx\nseparator\t;\n"
        );

        let mut json = Vec::new();
        list_tokens(path, &mut json, true, &RuntimeConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value[1]["kind"], "identifier");
    }

    #[test]
    fn test_list_tokens_stops_at_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.rat");
        fs::write(&path, "x = 1;\n[* open").unwrap();

        let mut table = Vec::new();
        let error = list_tokens(
            path.to_str().unwrap(),
            &mut table,
            false,
            &RuntimeConfig::default(),
        )
        .unwrap_err();
        assert_matches!(
            error,
            PipelineError::LexicalAnalysis(LexerError::UnclosedComment { line: 2 })
        );
        assert!(table.is_empty());
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.rat");
        let error = process_file(path.to_str().unwrap(), Vec::new(), &RuntimeConfig::default())
            .unwrap_err();
        assert_matches!(error, PipelineError::FileProcessing(_));
    }

    #[test]
    fn test_open_output_reports_bad_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.txt");
        assert!(matches!(
            open_output(Some(&path)),
            Err(PipelineError::OutputUnavailable { .. })
        ));
    }

    #[test]
    fn test_missing_input_leaves_no_output_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("absent.rat");
        let output = dir.path().join("trace.txt");
        let config = RuntimeConfig::default();

        let error =
            process_file_with(input.to_str().unwrap(), || open_output(Some(&output)), &config)
                .unwrap_err();
        assert_matches!(error, PipelineError::FileProcessing(_));

        let error = list_tokens_with(
            input.to_str().unwrap(),
            || open_output(Some(&output)),
            false,
            &config,
        )
        .unwrap_err();
        assert_matches!(error, PipelineError::FileProcessing(_));
        assert!(!output.exists());
    }

    #[test]
    fn test_output_opened_after_input_accepted() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("ok.rat");
        fs::write(&input, "# # put(1);").unwrap();
        let output = dir.path().join("trace.txt");

        process_file_with(
            input.to_str().unwrap(),
            || open_output(Some(&output)),
            &RuntimeConfig::default(),
        )
        .unwrap();
        assert!(fs::read_to_string(&output).unwrap().ends_with("Token: EOF\t\tLexeme: \n"));
    }

    #[test]
    fn test_validate_pipeline() {
        assert!(validate_pipeline().is_ok());
    }
}
