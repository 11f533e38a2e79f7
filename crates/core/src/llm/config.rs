// crates/core/src/llm/config.rs
//! Environment-driven completion-provider configuration.

/// Sample keys shipped in `.env` templates start with this prefix; they do
/// not count as a configured credential.
const PLACEHOLDER_PREFIX: &str = "your-";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for the completion provider.
///
/// `api_key` is `None` when the credential is missing, empty, or a
/// placeholder; breakdown requests then fail before any upstream call.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl LlmConfig {
    /// Read configuration from `OPENAI_API_KEY`, `OPENAI_MODEL`, and
    /// `OPENAI_BASE_URL`.
    pub fn from_env() -> Self {
        Self {
            api_key: sanitize_api_key(std::env::var("OPENAI_API_KEY").ok().as_deref()),
            model: std::env::var("OPENAI_MODEL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: std::env::var("OPENAI_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Treat missing, blank, and placeholder values as unconfigured.
fn sanitize_api_key(raw: Option<&str>) -> Option<String> {
    let key = raw?.trim();
    if key.is_empty() || key.starts_with(PLACEHOLDER_PREFIX) {
        return None;
    }
    Some(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_blank_keys_are_unconfigured() {
        assert_eq!(sanitize_api_key(None), None);
        assert_eq!(sanitize_api_key(Some("")), None);
        assert_eq!(sanitize_api_key(Some("   ")), None);
    }

    #[test]
    fn placeholder_key_is_unconfigured() {
        assert_eq!(sanitize_api_key(Some("your-api-key-here")), None);
    }

    #[test]
    fn real_key_is_kept_trimmed() {
        assert_eq!(
            sanitize_api_key(Some("  sk-live-123  ")),
            Some("sk-live-123".to_string())
        );
    }
}
