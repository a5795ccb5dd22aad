use anyhow::{Context, Result};
use records_core::Shape;
use records_parser::{parse_input_file, parse_schema_file};
use std::path::Path;
use tracing::info;

use crate::output;

/// Prints the input annotated with the schema's shape. Never validates.
pub fn execute(schema_path: &str, input_path: &str) -> Result<()> {
    info!("Annotating {} with shape {}", input_path, schema_path);

    let schema = parse_schema_file(Path::new(schema_path))
        .with_context(|| format!("Failed to parse schema file: {}", schema_path))?;
    let input = parse_input_file(Path::new(input_path))
        .with_context(|| format!("Failed to parse input file: {}", input_path))?;

    let shape = Shape::from(&schema);
    output::print_shaped(&shape.annotate(input));

    Ok(())
}
