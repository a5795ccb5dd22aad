//! Tests for OpenAiGenerator against a mocked chat completions endpoint.
//!
//! These tests use wiremock to simulate an OpenAI-compatible API. The
//! endpoint answers with a chat completion whose message content is the
//! structured JSON object.

use records_core::{FieldBuilder, FieldType, RecordSchema, SchemaBuilder, Value};
use records_llm::{GenerationError, GeneratorConfig, OpenAiGenerator, StructuredGenerator};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a generator pointed at a wiremock server.
fn test_generator(mock_server: &MockServer) -> OpenAiGenerator {
    let config = GeneratorConfig::builder()
        .base_url(format!("{}/v1", mock_server.uri()).parse().unwrap())
        .api_key("test-key")
        .timeout_secs(5)
        .build()
        .unwrap();
    OpenAiGenerator::new(config).unwrap()
}

fn review_schema() -> RecordSchema {
    SchemaBuilder::new("Review")
        .field(FieldBuilder::new("key_themes", FieldType::list(FieldType::String)).build())
        .field(FieldBuilder::new("summary", FieldType::String).build())
        .field(FieldBuilder::new("sentiment", FieldType::enumeration(["pos", "neg"])).build())
        .field(
            FieldBuilder::new("cons", FieldType::optional(FieldType::list(FieldType::String)))
                .optional()
                .build(),
        )
        .build()
        .unwrap()
}

fn completion(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "model": "gpt-3.5-turbo",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn generate_sends_schema_and_returns_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(serde_json::json!({
            "model": "gpt-3.5-turbo",
            "temperature": 0.0,
            "response_format": {
                "type": "json_schema",
                "json_schema": { "name": "Review" }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(
            r#"{"key_themes": ["camera", "battery"], "summary": "Solid phone", "sentiment": "pos"}"#,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let generator = test_generator(&mock_server);
    let output = generator
        .generate_structured("Review the Galaxy S24", &review_schema())
        .await
        .unwrap();

    assert_eq!(output["summary"], Value::from("Solid phone"));
    assert_eq!(output["key_themes"], Value::from(vec!["camera", "battery"]));
}

#[tokio::test]
async fn invoke_returns_validated_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(
            r#"{"key_themes": ["price"], "summary": "Too expensive", "sentiment": "neg", "cons": ["price"]}"#,
        )))
        .mount(&mock_server)
        .await;

    let model = test_generator(&mock_server).with_structured_output(review_schema());
    let record = model.invoke("Review the Galaxy S24").await.unwrap();

    assert_eq!(record.get("sentiment"), Some(&Value::from("neg")));
    assert_eq!(record.get("cons"), Some(&Value::from(vec!["price"])));
    assert_eq!(record.len(), 4);
}

#[tokio::test]
async fn invoke_rejects_output_that_fails_validation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(
            r#"{"key_themes": "camera", "sentiment": "neutral"}"#,
        )))
        .mount(&mock_server)
        .await;

    let model = test_generator(&mock_server).with_structured_output(review_schema());
    let err = model.invoke("Review the Galaxy S24").await.unwrap_err();

    match err {
        GenerationError::Validation(errors) => {
            let fields: Vec<&str> = errors.iter().map(|e| e.field()).collect();
            assert_eq!(fields, vec!["key_themes", "summary", "sentiment"]);
        }
        other => panic!("expected validation error, got {other}"),
    }
}

#[tokio::test]
async fn generate_handles_401_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = test_generator(&mock_server)
        .generate_structured("hi", &review_schema())
        .await
        .unwrap_err();

    match err {
        GenerationError::UpstreamStatus { status, body, .. } => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("expected status error, got {other}"),
    }
}

#[tokio::test]
async fn generate_is_not_retried_on_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = test_generator(&mock_server)
        .generate_structured("hi", &review_schema())
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::UpstreamStatus { status: 503, .. }));
}

#[tokio::test]
async fn generate_rejects_non_json_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion("Here is your review summary.")),
        )
        .mount(&mock_server)
        .await;

    let err = test_generator(&mock_server)
        .generate_structured("hi", &review_schema())
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::UpstreamFormat(_)));
}

#[tokio::test]
async fn generate_rejects_unexpected_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })))
        .mount(&mock_server)
        .await;

    let err = test_generator(&mock_server)
        .generate_structured("hi", &review_schema())
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::UpstreamFormat(msg) if msg.contains("no choices")));
}

#[tokio::test]
async fn generate_reports_refusal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{
                "message": { "role": "assistant", "content": null, "refusal": "I can't help with that." }
            }]
        })))
        .mount(&mock_server)
        .await;

    let err = test_generator(&mock_server)
        .generate_structured("hi", &review_schema())
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::UpstreamFormat(msg) if msg.contains("refused")));
}

#[tokio::test]
async fn generate_reports_unreachable_endpoint() {
    let config = GeneratorConfig::builder()
        .base_url("http://127.0.0.1:9/v1".parse().unwrap())
        .api_key("test-key")
        .timeout_secs(2)
        .build()
        .unwrap();
    let generator = OpenAiGenerator::new(config).unwrap();

    let err = generator
        .generate_structured("hi", &review_schema())
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::UpstreamRequest { .. }));
}
