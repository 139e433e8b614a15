//! Error and success codes with their classification metadata
//!
//! Every `Code` used by the front end is registered here together with its
//! category, severity and recommended action.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Code shared by error and success events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
}

/// File intake error codes
pub mod file_processing {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const INVALID_EXTENSION: Code = Code::new("E006");
    pub const FILE_TOO_LARGE: Code = Code::new("E007");
    pub const TOO_MANY_LINES: Code = Code::new("E008");
    pub const PERMISSION_DENIED: Code = Code::new("E009");
    pub const IO_ERROR: Code = Code::new("E011");
    pub const INVALID_PATH: Code = Code::new("E012");
    pub const OUTPUT_UNAVAILABLE: Code = Code::new("E013");
}

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const INVALID_IDENTIFIER: Code = Code::new("E020");
    pub const UNRECOGNIZED_SYMBOL: Code = Code::new("E021");
    pub const INVALID_NUMBER: Code = Code::new("E022");
    pub const UNCLOSED_COMMENT: Code = Code::new("E023");
    pub const TOO_MANY_TOKENS: Code = Code::new("E027");
}

/// Syntax analysis error codes
pub mod syntax {
    use super::Code;

    pub const EXPECTED_SYMBOL: Code = Code::new("E050");
    pub const MAX_RECURSION_DEPTH: Code = Code::new("E087");
    pub const TRACE_SINK_FAILURE: Code = Code::new("E088");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const PIPELINE_COMPLETE: Code = Code::new("I001");
    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const FILE_PROCESSING_SUCCESS: Code = Code::new("I006");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const TOKEN_LISTING_COMPLETE: Code = Code::new("I021");
    pub const SYNTAX_VALIDATION_PASSED: Code = Code::new("I041");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

const REGISTERED_CODES: &[ErrorMetadata] = &[
    // System
    ErrorMetadata::new(
        "ERR001",
        "System",
        Severity::Critical,
        false,
        true,
        "Critical internal system error",
        "File a bug report with the input that triggered it",
    ),
    // File processing
    ErrorMetadata::new(
        "E005",
        "FileProcessing",
        Severity::High,
        false,
        true,
        "Source file not found",
        "Verify the input path",
    ),
    ErrorMetadata::new(
        "E006",
        "FileProcessing",
        Severity::Medium,
        false,
        true,
        "Source file has an unexpected extension",
        "Rename the file to use the .rat extension or disable the extension check",
    ),
    ErrorMetadata::new(
        "E007",
        "FileProcessing",
        Severity::High,
        false,
        true,
        "Source file exceeds the configured size limit",
        "Split the program or raise max_file_size in the build profile",
    ),
    ErrorMetadata::new(
        "E008",
        "FileProcessing",
        Severity::High,
        false,
        true,
        "Source file exceeds the configured line limit",
        "Split the program or raise max_line_count_for_analysis",
    ),
    ErrorMetadata::new(
        "E009",
        "FileProcessing",
        Severity::High,
        false,
        true,
        "Permission denied while reading the source file",
        "Check file permissions",
    ),
    ErrorMetadata::new(
        "E011",
        "FileProcessing",
        Severity::High,
        false,
        true,
        "I/O error while reading the source file",
        "Check disk health and retry",
    ),
    ErrorMetadata::new(
        "E012",
        "FileProcessing",
        Severity::Medium,
        false,
        true,
        "Source path is not a regular file",
        "Pass the path of a source file, not a directory",
    ),
    ErrorMetadata::new(
        "E013",
        "FileProcessing",
        Severity::High,
        false,
        true,
        "Output destination cannot be opened",
        "Check that the output directory exists and is writable",
    ),
    // Lexical
    ErrorMetadata::new(
        "E020",
        "Lexical",
        Severity::High,
        false,
        true,
        "Identifier contains characters outside letters, digits and underscore",
        "Rename the identifier",
    ),
    ErrorMetadata::new(
        "E021",
        "Lexical",
        Severity::High,
        false,
        true,
        "Character is not part of the Rat23S alphabet",
        "Remove or replace the character",
    ),
    ErrorMetadata::new(
        "E022",
        "Lexical",
        Severity::High,
        false,
        true,
        "Malformed integer or real literal",
        "Write integers as digits and reals as digits.digits",
    ),
    ErrorMetadata::new(
        "E023",
        "Lexical",
        Severity::High,
        false,
        true,
        "Comment opened with [* is never closed",
        "Close the comment with *]",
    ),
    ErrorMetadata::new(
        "E027",
        "Lexical",
        Severity::High,
        false,
        true,
        "Source produces more tokens than the configured limit",
        "Split the program or raise max_token_count",
    ),
    // Syntax
    ErrorMetadata::new(
        "E050",
        "Syntax",
        Severity::High,
        false,
        true,
        "Required grammar symbol is missing",
        "Insert the expected symbol at the reported line",
    ),
    ErrorMetadata::new(
        "E087",
        "Syntax",
        Severity::High,
        false,
        true,
        "Statement or expression nesting exceeds the configured depth",
        "Reduce nesting or raise max_parse_depth",
    ),
    ErrorMetadata::new(
        "E088",
        "Syntax",
        Severity::High,
        false,
        true,
        "Writing the production trace failed",
        "Check the output destination",
    ),
    // Success
    ErrorMetadata::new(
        "I001",
        "Pipeline",
        Severity::Low,
        true,
        false,
        "Source accepted by the Rat23S grammar",
        "No action required",
    ),
    ErrorMetadata::new(
        "I004",
        "System",
        Severity::Low,
        true,
        false,
        "Logging system initialized",
        "No action required",
    ),
    ErrorMetadata::new(
        "I006",
        "FileProcessing",
        Severity::Low,
        true,
        false,
        "Source file read successfully",
        "No action required",
    ),
    ErrorMetadata::new(
        "I020",
        "Lexical",
        Severity::Low,
        true,
        false,
        "Lexical pre-check completed without error tokens",
        "No action required",
    ),
    ErrorMetadata::new(
        "I021",
        "Lexical",
        Severity::Low,
        true,
        false,
        "Token table written",
        "No action required",
    ),
    ErrorMetadata::new(
        "I041",
        "Syntax",
        Severity::Low,
        true,
        false,
        "Token stream matches the grammar",
        "No action required",
    ),
];

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        REGISTERED_CODES
            .iter()
            .map(|metadata| (metadata.code, metadata.clone()))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

pub fn get_severity(code: &str) -> Severity {
    get_error_metadata(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

pub fn is_recoverable(code: &str) -> bool {
    get_error_metadata(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

pub fn requires_halt(code: &str) -> bool {
    get_error_metadata(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

pub fn get_description(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

pub fn get_action(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

pub fn get_category(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_constant_is_registered() {
        let codes = [
            system::INTERNAL_ERROR,
            file_processing::FILE_NOT_FOUND,
            file_processing::INVALID_EXTENSION,
            file_processing::FILE_TOO_LARGE,
            file_processing::TOO_MANY_LINES,
            file_processing::PERMISSION_DENIED,
            file_processing::IO_ERROR,
            file_processing::INVALID_PATH,
            file_processing::OUTPUT_UNAVAILABLE,
            lexical::INVALID_IDENTIFIER,
            lexical::UNRECOGNIZED_SYMBOL,
            lexical::INVALID_NUMBER,
            lexical::UNCLOSED_COMMENT,
            lexical::TOO_MANY_TOKENS,
            syntax::EXPECTED_SYMBOL,
            syntax::MAX_RECURSION_DEPTH,
            syntax::TRACE_SINK_FAILURE,
            success::PIPELINE_COMPLETE,
            success::SYSTEM_INITIALIZATION_COMPLETED,
            success::FILE_PROCESSING_SUCCESS,
            success::TOKENIZATION_COMPLETE,
            success::TOKEN_LISTING_COMPLETE,
            success::SYNTAX_VALIDATION_PASSED,
        ];

        for code in codes {
            assert!(
                get_error_metadata(code.as_str()).is_some(),
                "missing metadata for {}",
                code
            );
        }
        assert_eq!(get_error_registry().len(), codes.len());
    }

    #[test]
    fn test_classification_lookups() {
        assert_eq!(get_category("E050"), "Syntax");
        assert_eq!(get_severity("ERR001"), Severity::Critical);
        assert!(requires_halt("E023"));
        assert!(!requires_halt("I041"));
        assert!(is_recoverable("I001"));
    }

    #[test]
    fn test_unknown_code_defaults() {
        assert_eq!(get_description("Z999"), "Unknown error");
        assert_eq!(get_action("Z999"), "No specific action available");
        assert_eq!(get_category("Z999"), "Unknown");
        assert_eq!(get_severity("Z999"), Severity::Medium);
    }
}
