//! HTTP client for OpenAI-compatible chat completions.

use crate::{json_schema, schema_name, GenerationError, GeneratorConfig, StructuredModel};
use records_core::{DataMap, RecordSchema, Value};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};

const ENDPOINT: &str = "POST /chat/completions";

/// Produces an untrusted key/value mapping shaped like a schema.
///
/// The mapping is not trusted: callers validate it before use, which
/// [`StructuredModel`] does.
pub trait StructuredGenerator {
    /// Asks the collaborator for an object following `schema`.
    fn generate_structured(
        &self,
        prompt: &str,
        schema: &RecordSchema,
    ) -> impl Future<Output = Result<DataMap, GenerationError>> + Send;

    /// Binds this generator to a schema, validating every response.
    fn with_structured_output(self, schema: RecordSchema) -> StructuredModel<Self>
    where
        Self: Sized,
    {
        StructuredModel::new(self, schema)
    }
}

/// Generator backed by an OpenAI-compatible `chat/completions` endpoint.
///
/// Requests use a `json_schema` response format built from the record
/// schema. Failures are returned as they happen; no request is retried.
#[derive(Debug, Clone)]
pub struct OpenAiGenerator {
    http: reqwest::Client,
    url: String,
    config: GeneratorConfig,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
    json_schema: JsonSchemaFormat,
}

#[derive(Serialize)]
struct JsonSchemaFormat {
    name: String,
    schema: serde_json::Value,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

impl OpenAiGenerator {
    /// Create a new generator from configuration.
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::AUTHORIZATION,
                    reqwest::header::HeaderValue::from_str(&format!("Bearer {}", config.api_key))
                        .map_err(|_| {
                            GenerationError::Config("API key is not a valid header value".to_string())
                        })?,
                );
                headers
            })
            .build()
            .map_err(|e| GenerationError::UpstreamRequest {
                endpoint: "client_init".into(),
                source: e,
            })?;

        let url = format!(
            "{}/chat/completions",
            config.base_url.as_str().trim_end_matches('/')
        );

        Ok(Self { http, url, config })
    }

    /// The configuration this generator was created with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn request_body<'a>(&'a self, prompt: &'a str, schema: &RecordSchema) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            temperature: self.config.temperature,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            response_format: ResponseFormat {
                kind: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: schema_name(schema),
                    schema: json_schema(schema),
                },
            },
        }
    }
}

impl StructuredGenerator for OpenAiGenerator {
    async fn generate_structured(
        &self,
        prompt: &str,
        schema: &RecordSchema,
    ) -> Result<DataMap, GenerationError> {
        let body = self.request_body(prompt, schema);
        info!(
            model = %self.config.model,
            schema = schema.name(),
            "Requesting structured output"
        );

        let resp = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::UpstreamRequest {
                endpoint: ENDPOINT.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            warn!(status, "Model endpoint returned an error");
            return Err(GenerationError::UpstreamStatus {
                endpoint: ENDPOINT.into(),
                status,
                body,
            });
        }

        let response: ChatResponse = resp
            .json()
            .await
            .map_err(|e| GenerationError::UpstreamFormat(e.to_string()))?;

        let message = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or_else(|| GenerationError::UpstreamFormat("response has no choices".to_string()))?;

        let content = match (message.content, message.refusal) {
            (Some(content), _) => content,
            (None, Some(refusal)) => {
                return Err(GenerationError::UpstreamFormat(format!(
                    "model refused: {}",
                    refusal
                )));
            }
            (None, None) => {
                return Err(GenerationError::UpstreamFormat(
                    "message has no content".to_string(),
                ));
            }
        };
        debug!(bytes = content.len(), "Received structured output");

        parse_object(&content)
    }
}

/// Parses message content as a JSON object.
fn parse_object(content: &str) -> Result<DataMap, GenerationError> {
    let parsed: serde_json::Value = serde_json::from_str(content.trim())
        .map_err(|e| GenerationError::UpstreamFormat(format!("content is not JSON: {}", e)))?;

    match Value::from(parsed) {
        Value::Map(map) => Ok(map),
        other => Err(GenerationError::UpstreamFormat(format!(
            "expected a JSON object, found {}",
            other.type_name()
        ))),
    }
}
