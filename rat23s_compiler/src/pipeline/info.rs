use crate::config::compile_time::{file_processing, lexical, syntax};
use crate::file_processor::RAT_EXTENSION;

/// Information about pipeline capabilities
#[derive(Debug, Clone)]
pub struct PipelineInfo {
    pub pipeline_stages: usize,
    pub max_file_size: u64,
    pub max_token_count: usize,
    pub max_parse_depth: usize,
    pub supported_extensions: Vec<String>,
    pub build_profile: &'static str,
}

impl PipelineInfo {
    pub fn report(&self) -> String {
        format!(
            "Rat23S Front End:\n\
             - Pipeline Stages: {}\n\
             - Max File Size: {} KB\n\
             - Max Tokens (pre-check): {}\n\
             - Max Nesting Depth: {}\n\
             - Supported Extensions: {}\n\
             - Build Profile: {}",
            self.pipeline_stages,
            self.max_file_size / 1024,
            self.max_token_count,
            self.max_parse_depth,
            self.supported_extensions.join(", "),
            self.build_profile
        )
    }
}

/// Get pipeline capabilities information
pub fn get_pipeline_info() -> PipelineInfo {
    PipelineInfo {
        pipeline_stages: 3,
        max_file_size: file_processing::MAX_FILE_SIZE,
        max_token_count: lexical::MAX_TOKEN_COUNT,
        max_parse_depth: syntax::MAX_PARSE_DEPTH,
        supported_extensions: vec![RAT_EXTENSION.to_string()],
        build_profile: crate::config::build_info::profile(),
    }
}
