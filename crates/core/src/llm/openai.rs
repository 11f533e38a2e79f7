// crates/core/src/llm/openai.rs
//! OpenAI-compatible chat-completions provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::config::LlmConfig;
use super::provider::CompletionProvider;
use super::types::{CompletionRequest, CompletionResponse, LlmError};

/// Completion provider speaking the chat-completions wire format.
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiProvider {
    /// Build a provider from configuration; `None` when no usable credential
    /// is set.
    pub fn from_config(config: &LlmConfig) -> Option<Self> {
        let api_key = config.api_key.clone()?;
        Some(Self {
            client: reqwest::Client::new(),
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatCompletionReply {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Deserialize)]
struct ChatReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = ChatCompletionBody {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user_prompt,
                },
            ],
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Completion provider error");
            return Err(LlmError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let reply: ChatCompletionReply = response
            .json()
            .await
            .map_err(|e| LlmError::Payload(e.to_string()))?;
        let content = reply
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .unwrap_or_default()
            .trim()
            .to_string();

        Ok(CompletionResponse {
            content,
            model: reply.model,
        })
    }

    fn name(&self) -> &str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CompletionRequest {
        CompletionRequest {
            system_prompt: "be brief".to_string(),
            user_prompt: "write a report".to_string(),
            temperature: 0.3,
        }
    }

    fn provider_for(url: &str) -> OpenAiProvider {
        OpenAiProvider::from_config(&LlmConfig {
            api_key: Some("sk-test".to_string()),
            model: "gpt-4o-mini".to_string(),
            base_url: url.to_string(),
        })
        .expect("credential is set")
    }

    #[test]
    fn no_credential_means_no_provider() {
        let config = LlmConfig {
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            base_url: "http://localhost".to_string(),
        };
        assert!(OpenAiProvider::from_config(&config).is_none());
    }

    #[tokio::test]
    async fn completes_against_mock_endpoint() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"model":"gpt-4o-mini","choices":[{"message":{"content":" [1, 2] "}}]}"#,
            )
            .create_async()
            .await;

        let provider = provider_for(&server.url());
        let response = provider.complete(request()).await.unwrap();
        assert_eq!(response.content, "[1, 2]");
        assert_eq!(response.model.as_deref(), Some("gpt-4o-mini"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn surfaces_upstream_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body(r#"{"error":{"message":"invalid key"}}"#)
            .create_async()
            .await;

        let provider = provider_for(&server.url());
        let err = provider.complete(request()).await.unwrap_err();
        match err {
            LlmError::Upstream { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("invalid key"));
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_choices_yield_empty_content() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let provider = provider_for(&server.url());
        let response = provider.complete(request()).await.unwrap();
        assert_eq!(response.content, "");
    }
}
