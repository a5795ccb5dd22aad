use anyhow::{Context, Result};
use records_core::ValidationContext;
use records_parser::{parse_input_file, parse_schema_file};
use records_validator::RecordValidator;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(schema_path: &str, input_path: &str, strict: bool, format: &str) -> Result<()> {
    info!("Validating {} against schema {}", input_path, schema_path);
    info!("Strict mode: {}", strict);

    let schema = parse_schema_file(Path::new(schema_path))
        .with_context(|| format!("Failed to parse schema file: {}", schema_path))?;
    let input = parse_input_file(Path::new(input_path))
        .with_context(|| format!("Failed to parse input file: {}", input_path))?;

    if format != "json" {
        output::print_info(&format!(
            "Schema loaded: {} ({} fields), input has {} keys",
            schema.name(),
            schema.len(),
            input.len()
        ));
    }

    let context = ValidationContext::new().with_strict(strict);
    let mut validator = RecordValidator::with_context(context);
    let (result, report) = validator.validate_with_report(&schema, &input);

    output::print_validation_report(&report, result.as_ref().ok(), format)?;

    if !report.passed {
        std::process::exit(1);
    }

    Ok(())
}
