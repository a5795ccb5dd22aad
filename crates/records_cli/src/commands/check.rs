use anyhow::{Context, Result};
use records_parser::parse_schema_file;
use records_validator::RecordValidator;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(schema_path: &str, format: &str, json_schema: bool) -> Result<()> {
    info!("Checking schema: {}", schema_path);

    let path = Path::new(schema_path);
    let schema = parse_schema_file(path)
        .with_context(|| format!("Failed to parse schema file: {}", schema_path))?;

    if json_schema {
        let doc = records_llm::json_schema(&schema);
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    let report = RecordValidator::new().validate_definition(&schema);

    if format != "json" {
        output::print_info(&format!(
            "Schema loaded: {} ({} fields)",
            schema.name(),
            schema.len()
        ));
        if report.passed {
            output::print_success("Schema definition is valid");
        }
        output::print_schema_summary(&schema);
    }

    output::print_validation_report(&report, None, format)?;

    if !report.passed {
        std::process::exit(1);
    }

    Ok(())
}
