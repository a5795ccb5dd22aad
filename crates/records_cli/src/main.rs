mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "records")]
#[command(version, about = "Structured Records CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an input file against a schema
    Validate {
        /// Path to the schema file (YAML or TOML)
        schema: String,

        /// Path to the input file (JSON or YAML)
        input: String,

        /// Enable strict validation mode (reject undeclared fields)
        #[arg(short, long)]
        strict: bool,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check a schema definition without validating data
    Check {
        /// Path to the schema file (YAML or TOML)
        schema: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Print the JSON Schema used for structured output requests
        #[arg(long)]
        json_schema: bool,
    },

    /// Annotate an input file with a schema's shape, without validation
    Shape {
        /// Path to the schema file (YAML or TOML)
        schema: String,

        /// Path to the input file (JSON or YAML)
        input: String,
    },

    /// Ask a chat model for a record and validate the response
    Generate {
        /// Path to the schema file (YAML or TOML)
        schema: String,

        /// Prompt text
        #[arg(short, long, conflicts_with = "prompt_file", required_unless_present = "prompt_file")]
        prompt: Option<String>,

        /// Read the prompt from a file
        #[arg(long)]
        prompt_file: Option<String>,

        /// Enable strict validation mode (reject undeclared fields)
        #[arg(short, long)]
        strict: bool,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            schema,
            input,
            strict,
            format,
        } => commands::validate::execute(&schema, &input, strict, &format),

        Commands::Check {
            schema,
            format,
            json_schema,
        } => commands::check::execute(&schema, &format, json_schema),

        Commands::Shape { schema, input } => commands::shape::execute(&schema, &input),

        Commands::Generate {
            schema,
            prompt,
            prompt_file,
            strict,
            format,
        } => {
            commands::generate::execute(&schema, prompt, prompt_file.as_deref(), strict, &format)
                .await
        }
    }
}
