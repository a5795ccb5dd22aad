use anyhow::Result;
use colored::*;
use records_core::{RecordSchema, Shaped, ValidationReport};
use records_validator::Record;
use serde_json::json;

pub fn print_validation_report(
    report: &ValidationReport,
    record: Option<&Record>,
    format: &str,
) -> Result<()> {
    match format {
        "json" => print_json_report(report, record),
        _ => {
            print_text_report(report, record)?;
            Ok(())
        }
    }
}

fn print_text_report(report: &ValidationReport, record: Option<&Record>) -> Result<()> {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if report.passed {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    if let Some(record) = record {
        println!("\n{}", "Record:".bold());
        println!("  {}", record);
        for line in record.to_json_pretty()?.lines() {
            println!("  {}", line);
        }
    }

    if !report.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for (i, error) in report.errors.iter().enumerate() {
            println!("  {}. {}", i + 1, error.red());
        }
    }

    if !report.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for (i, warning) in report.warnings.iter().enumerate() {
            println!("  {}. {}", i + 1, warning.yellow());
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Total errors:   {}", report.errors.len());
    println!("  Total warnings: {}", report.warnings.len());
    println!("  Fields checked: {}", report.stats.fields_checked);
    println!("  Constraints:    {}", report.stats.constraints_evaluated);
    println!("  Duration:       {} ms", report.stats.duration_ms);
    println!("{}", "═".repeat(60));
    Ok(())
}

fn print_json_report(report: &ValidationReport, record: Option<&Record>) -> Result<()> {
    let record = match record {
        Some(record) => serde_json::to_value(record)?,
        None => serde_json::Value::Null,
    };

    let output = json!({
        "passed": report.passed,
        "record": record,
        "errors": report.errors,
        "warnings": report.warnings,
        "summary": {
            "error_count": report.errors.len(),
            "warning_count": report.warnings.len(),
            "fields_checked": report.stats.fields_checked,
            "constraints_evaluated": report.stats.constraints_evaluated,
            "duration_ms": report.stats.duration_ms,
        }
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_schema_summary(schema: &RecordSchema) {
    println!("\nSchema Summary:");
    println!("  Name:        {}", schema.name());
    println!(
        "  Description: {}",
        schema.description().unwrap_or("N/A")
    );
    println!("  Fields:      {}", schema.len());

    for field in schema.fields() {
        let mut notes = Vec::new();
        if !field.required {
            notes.push("not required".to_string());
        }
        if let Some(default) = &field.default {
            notes.push(format!("default {}", default));
        }
        for bounds in field.bounds() {
            notes.push(format!("range {}", bounds));
        }
        for constraint in &field.constraints {
            if let records_core::FieldConstraint::Pattern { regex } = constraint {
                notes.push(format!("pattern {}", regex));
            }
        }

        let notes = if notes.is_empty() {
            String::new()
        } else {
            format!(" ({})", notes.join(", "))
        };
        println!("    - {}: {}{}", field.name.bold(), field.field_type, notes);
    }
}

pub fn print_shaped(shaped: &Shaped<'_>) {
    println!("{} {}", shaped.shape_name().bold(), shaped);

    let missing = shaped.missing_keys();
    if !missing.is_empty() {
        println!("  {} {}", "not set:".dimmed(), missing.join(", "));
    }

    let undocumented = shaped.undocumented_keys();
    if !undocumented.is_empty() {
        println!("  {} {}", "undocumented:".dimmed(), undocumented.join(", "));
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
