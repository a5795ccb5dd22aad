//! Structured review extraction with a chat model.
//!
//! Requires `OPENAI_API_KEY`; see `GeneratorConfig::from_env` for the other
//! variables.
//!
//! Run with: cargo run -p records_llm --example review

use records_core::{FieldBuilder, FieldType, SchemaBuilder};
use records_llm::{GeneratorConfig, OpenAiGenerator, StructuredGenerator};

const REVIEW: &str = include_str!("review.txt");

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().compact().init();

    let schema = SchemaBuilder::new("Review")
        .field(
            FieldBuilder::new("key_themes", FieldType::list(FieldType::String))
                .description("list of key themes discussed in the review in a list")
                .build(),
        )
        .field(
            FieldBuilder::new("sentiment", FieldType::enumeration(["pos", "neg"]))
                .description("return sentiment of the review either positive ,negative or neutral")
                .build(),
        )
        .field(
            FieldBuilder::new("summary", FieldType::String)
                .description("a detailed summary of the review")
                .build(),
        )
        .field(
            FieldBuilder::new("pros", FieldType::optional(FieldType::list(FieldType::String)))
                .optional()
                .description("write down all the pros mentioned in the review in a list")
                .build(),
        )
        .field(
            FieldBuilder::new("cons", FieldType::optional(FieldType::list(FieldType::String)))
                .optional()
                .description("write down all the cons mentioned in the review in a list")
                .build(),
        )
        .field(
            FieldBuilder::new("name", FieldType::optional(FieldType::String))
                .optional()
                .description("name of the reviewer if mentioned in the review")
                .build(),
        )
        .build()?;

    let model = OpenAiGenerator::new(GeneratorConfig::from_env()?)?.with_structured_output(schema);
    let review = model.invoke(REVIEW).await?;

    println!("{}", review.to_json_pretty()?);
    Ok(())
}
