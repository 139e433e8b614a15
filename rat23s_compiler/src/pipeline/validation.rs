use crate::tokens::{SymbolTable, KEYWORDS, OPERATORS, SEPARATORS};

/// Validate that the pipeline is properly configured
pub fn validate_pipeline() -> Result<(), String> {
    crate::log_debug!("Validating pipeline configuration");

    crate::logging::config::validate_config()?;

    let symbols = SymbolTable::new();
    let expected = KEYWORDS.len() + OPERATORS.len() + SEPARATORS.len();
    if symbols.len() != expected {
        return Err(format!(
            "Symbol table holds {} entries, expected {}",
            symbols.len(),
            expected
        ));
    }

    crate::log_success!(
        crate::logging::codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Pipeline validation succeeded",
        "symbols" => symbols.len(),
        "build_profile" => crate::config::build_info::profile()
    );

    Ok(())
}
