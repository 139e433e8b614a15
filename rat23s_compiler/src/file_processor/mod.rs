//! Source file intake: path checks, size and line limits, raw byte reads

mod processor;

use crate::config::runtime::FileProcessorPreferences;
pub use processor::{
    FileMetadata, FileProcessingResult, FileProcessor, FileProcessorError, RAT_EXTENSION,
};

/// Read a source file with preferences taken from the environment
pub fn process_file(file_path: &str) -> Result<FileProcessingResult, FileProcessorError> {
    create_processor_from_preferences(&FileProcessorPreferences::default()).process_file(file_path)
}

pub fn create_processor_from_preferences(prefs: &FileProcessorPreferences) -> FileProcessor {
    FileProcessor::from_preferences(prefs)
}
