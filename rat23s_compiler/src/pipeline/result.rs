use crate::file_processor::FileMetadata;
use crate::lexical::LexicalMetrics;
use crate::syntax::ParseSummary;
use std::time::Duration;

/// Outcome of a successful parse run
#[derive(Debug)]
pub struct PipelineResult {
    pub file_metadata: FileMetadata,
    /// Present when the lexical pre-check ran
    pub lexical_metrics: Option<LexicalMetrics>,
    pub parse_summary: ParseSummary,
    pub processing_duration: Duration,
}

impl PipelineResult {
    pub fn new(
        file_metadata: FileMetadata,
        lexical_metrics: Option<LexicalMetrics>,
        parse_summary: ParseSummary,
        processing_duration: Duration,
    ) -> Self {
        Self {
            file_metadata,
            lexical_metrics,
            parse_summary,
            processing_duration,
        }
    }

    pub fn log_success(&self, file_path: &str) {
        let seconds = self.processing_duration.as_secs_f64();
        crate::log_success!(
            crate::logging::codes::success::PIPELINE_COMPLETE,
            "Rat23S front end completed",
            "file" => file_path,
            "lines" => self.parse_summary.final_line,
            "tokens" => self.parse_summary.tokens_matched,
            "duration_ms" => format!("{:.2}", seconds * 1000.0),
            "processing_rate_tokens_per_sec" => format!("{:.0}",
                self.parse_summary.tokens_matched as f64 / seconds.max(f64::EPSILON))
        );
    }
}
