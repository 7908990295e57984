/// LLM Client: the single point of entry for all text-generation calls.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// Advisors only see the `TextGenerator` trait; `LlmClient` is its production backend.
///
/// Model: claude-sonnet-4-5 (hardcoded)
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

pub const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for every advisor call.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

impl LlmError {
    /// Rate limits, server errors and transport failures may succeed on a later attempt.
    fn is_retryable(&self) -> bool {
        match self {
            LlmError::Http(e) => !e.is_decode(),
            LlmError::Api { status, .. } => *status == 429 || *status >= 500,
            LlmError::EmptyContent => false,
        }
    }
}

/// The external text-generation capability: one prompt in, one text out.
///
/// Carried by every advisor as `Arc<dyn TextGenerator>` so tests can script responses.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Wraps the Anthropic Messages API.
///
/// `max_attempts == 1` gives the plain single-call behaviour; higher values retry
/// 429, 5xx and transport failures with exponential backoff.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
    max_attempts: u32,
}

impl LlmClient {
    pub fn new(api_key: String, api_url: String, max_attempts: u32) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key,
            api_url,
            max_attempts: max_attempts.max(1),
        })
    }

    /// Makes a raw call to the Messages API, returning the full response object.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut attempt = 1;
        loop {
            match self.send(&request_body).await {
                Ok(response) => return Ok(response),
                Err(e) if attempt < self.max_attempts && e.is_retryable() => {
                    // Exponential backoff: 1s, 2s, 4s, ...
                    let delay = Duration::from_millis(1000 * (1 << (attempt - 1).min(6)));
                    warn!(
                        "LLM call attempt {} failed ({}), retrying after {}ms...",
                        attempt,
                        e,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn send(&self, request_body: &AnthropicRequest<'_>) -> Result<LlmResponse, LlmError> {
        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("LLM API returned {}: {}", status, body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: error_message(body),
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            llm_response.usage.input_tokens, llm_response.usage.output_tokens
        );

        Ok(llm_response)
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(prompt, prompts::ADVISOR_SYSTEM).await?;
        match response.text() {
            Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
            _ => Err(LlmError::EmptyContent),
        }
    }
}

/// Pulls `error.message` out of an API error body, falling back to the raw body.
fn error_message(body: String) -> String {
    serde_json::from_str::<AnthropicError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::HeaderMap, http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    use super::*;

    #[derive(Clone)]
    struct Stub {
        status: StatusCode,
        reply: Value,
        hits: Arc<AtomicUsize>,
        seen: Arc<Mutex<Vec<(Option<String>, Value)>>>,
    }

    async fn messages(
        State(stub): State<Stub>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        stub.hits.fetch_add(1, Ordering::SeqCst);
        let key = headers
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        stub.seen.lock().unwrap().push((key, body));
        (stub.status, Json(stub.reply.clone()))
    }

    /// Serves a canned Messages API reply on an ephemeral local port.
    async fn spawn_stub(status: StatusCode, reply: Value) -> (String, Stub) {
        let stub = Stub {
            status,
            reply,
            hits: Arc::new(AtomicUsize::new(0)),
            seen: Arc::new(Mutex::new(Vec::new())),
        };
        let app = Router::new()
            .route("/v1/messages", post(messages))
            .with_state(stub.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}/v1/messages"), stub)
    }

    fn text_reply(text: &str) -> Value {
        json!({
            "content": [{"type": "text", "text": text}],
            "usage": {"input_tokens": 12, "output_tokens": 34}
        })
    }

    #[test]
    fn test_response_text_skips_non_text_blocks() {
        let response: LlmResponse = serde_json::from_value(json!({
            "content": [
                {"type": "thinking"},
                {"type": "text", "text": "근로계약서를 먼저 확인하세요."}
            ],
            "usage": {"input_tokens": 1, "output_tokens": 1}
        }))
        .unwrap();
        assert_eq!(response.text(), Some("근로계약서를 먼저 확인하세요."));
    }

    #[test]
    fn test_error_message_falls_back_to_raw_body() {
        assert_eq!(error_message("gateway timeout".into()), "gateway timeout");
        let parsed = error_message(r#"{"error": {"message": "invalid x-api-key"}}"#.into());
        assert_eq!(parsed, "invalid x-api-key");
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_and_returns_text() {
        let (url, stub) = spawn_stub(StatusCode::OK, text_reply("정책 분석 결과")).await;
        let client = LlmClient::new("test-key".into(), url, 1).unwrap();

        let text = client.generate("연봉 협상 질문").await.unwrap();
        assert_eq!(text, "정책 분석 결과");

        let seen = stub.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (key, body) = &seen[0];
        assert_eq!(key.as_deref(), Some("test-key"));
        assert_eq!(body["model"], MODEL);
        assert_eq!(body["system"], prompts::ADVISOR_SYSTEM);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "연봉 협상 질문");
    }

    #[tokio::test]
    async fn test_blank_text_is_empty_content() {
        let (url, _stub) = spawn_stub(StatusCode::OK, text_reply("   ")).await;
        let client = LlmClient::new("k".into(), url, 1).unwrap();
        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }

    #[tokio::test]
    async fn test_client_error_is_not_retried() {
        let reply = json!({
            "error": {"type": "authentication_error", "message": "invalid x-api-key"}
        });
        let (url, stub) = spawn_stub(StatusCode::UNAUTHORIZED, reply).await;
        let client = LlmClient::new("bad".into(), url, 3).unwrap();

        let err = client.generate("prompt").await.unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid x-api-key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(stub.hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_single_attempt_does_not_retry_server_errors() {
        let reply = json!({"error": {"message": "overloaded"}});
        let (url, stub) = spawn_stub(StatusCode::SERVICE_UNAVAILABLE, reply).await;
        let client = LlmClient::new("k".into(), url, 1).unwrap();

        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 503, .. }));
        assert_eq!(stub.hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_server_errors_retried_up_to_max_attempts() {
        let reply = json!({"error": {"message": "overloaded"}});
        let (url, stub) = spawn_stub(StatusCode::SERVICE_UNAVAILABLE, reply).await;
        let client = LlmClient::new("k".into(), url, 2).unwrap();

        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 503, .. }));
        assert_eq!(stub.hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_zero_attempts_still_reports_api_error() {
        let reply = json!({"error": {"message": "overloaded"}});
        let (url, stub) = spawn_stub(StatusCode::SERVICE_UNAVAILABLE, reply).await;
        let client = LlmClient::new("k".into(), url, 0).unwrap();

        let err = client.generate("prompt").await.unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "overloaded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        assert_eq!(stub.hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_only_rate_limits_and_server_errors_are_retryable() {
        let api = |status| LlmError::Api {
            status,
            message: String::new(),
        };
        assert!(api(429).is_retryable());
        assert!(api(529).is_retryable());
        assert!(!api(400).is_retryable());
        assert!(!LlmError::EmptyContent.is_retryable());
    }
}
