use anyhow::{Context, Result};
use records_core::{ValidationContext, ValidationReport};
use records_llm::{GenerationError, GeneratorConfig, OpenAiGenerator, StructuredGenerator};
use records_parser::parse_schema_file;
use std::path::Path;
use tracing::info;

use crate::output;

pub async fn execute(
    schema_path: &str,
    prompt: Option<String>,
    prompt_file: Option<&str>,
    strict: bool,
    format: &str,
) -> Result<()> {
    let schema = parse_schema_file(Path::new(schema_path))
        .with_context(|| format!("Failed to parse schema file: {}", schema_path))?;

    let prompt = match (prompt, prompt_file) {
        (Some(prompt), _) => prompt,
        (None, Some(file)) => std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read prompt file: {}", file))?,
        (None, None) => anyhow::bail!("either --prompt or --prompt-file is required"),
    };

    let config = GeneratorConfig::from_env().context("Failed to load generator configuration")?;
    info!("Generating {} with model {}", schema.name(), config.model);

    let model = OpenAiGenerator::new(config)?
        .with_structured_output(schema)
        .with_context(ValidationContext::new().with_strict(strict));

    match model.invoke(&prompt).await {
        Ok(record) => {
            if format == "json" {
                println!("{}", record.to_json_pretty()?);
            } else {
                output::print_success(&format!("Generated a valid {}", record.schema_name()));
                println!("  {}", record);
                println!("{}", record.to_json_pretty()?);
            }
            Ok(())
        }
        Err(GenerationError::Validation(errors)) => {
            output::print_error("Model output failed validation");
            let mut report = ValidationReport::success();
            report.stats.fields_checked = model.schema().len();
            for error in &errors {
                report.add_error(error.to_string());
            }
            output::print_validation_report(&report, None, format)?;
            std::process::exit(1);
        }
        Err(e) => Err(e).context("Structured generation failed"),
    }
}
