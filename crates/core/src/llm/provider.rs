// crates/core/src/llm/provider.rs
//! CompletionProvider trait defining the interface to text-completion services.

use async_trait::async_trait;

use super::types::{CompletionRequest, CompletionResponse, LlmError};

/// A text-completion collaborator.
///
/// Implementations:
/// - `OpenAiProvider` — chat-completions over HTTP
/// - test stubs returning canned replies
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Run one completion with a system + user prompt.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;

    /// Provider name for logging (e.g. "openai").
    fn name(&self) -> &str;
}
