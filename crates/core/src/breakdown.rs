// crates/core/src/breakdown.rs
//! Task breakdown: turn one vague task into concrete steps with estimates.

use regex_lite::Regex;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::llm::{CompletionProvider, CompletionRequest, LlmError};

/// Instruction sent ahead of the user's task text. The 3-7 step count and
/// 15-60 minute granularity are guidance for the model, not enforced on its
/// output.
pub const BREAKDOWN_SYSTEM: &str = r#"You are a deep work coach. The user will give you a vague or high-level task.
Your job is to break it into 3–7 concrete, actionable steps that someone can do in focused blocks.
For each step:
- Use a short, clear title (e.g. "Outline the introduction", "Draft section 2").
- Give a realistic estimated_minutes (typically 15–60 per step).
Reply with ONLY a JSON array of objects, no other text. Each object must have exactly:
"title" (string) and "estimated_minutes" (integer).
Example: [{"title": "Read the brief", "estimated_minutes": 10}, {"title": "Draft outline", "estimated_minutes": 25}]"#;

/// Estimate substituted when the model omits `estimated_minutes`.
const DEFAULT_ESTIMATED_MINUTES: i64 = 25;

/// One actionable step. Never persisted; built fresh per request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct BreakdownStep {
    pub title: String,
    pub estimated_minutes: i64,
}

#[derive(Debug, Error)]
pub enum BreakdownError {
    /// The reply was empty, not a JSON array, or had uncoercible fields.
    #[error("could not parse model reply: {0}")]
    Format(String),

    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// Ask the completion collaborator to decompose `task` and parse its reply.
pub async fn decompose(
    provider: &dyn CompletionProvider,
    task: &str,
) -> Result<Vec<BreakdownStep>, BreakdownError> {
    let request = CompletionRequest {
        system_prompt: BREAKDOWN_SYSTEM.to_string(),
        user_prompt: task.to_string(),
        temperature: 0.3,
    };
    let response = provider.complete(request).await?;
    parse_steps(&response.content)
}

/// Extract a JSON array of steps from a model reply.
///
/// The reply may wrap the array in a markdown fence; the first fenced block
/// (optionally tagged `json`) wins. Element coercion is defensive: a missing
/// `title` becomes `""`, a missing `estimated_minutes` becomes 25, but a
/// present-and-unconvertible value fails the whole call.
pub fn parse_steps(content: &str) -> Result<Vec<BreakdownStep>, BreakdownError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(BreakdownError::Format("empty reply from model".to_string()));
    }

    let text = if content.contains("```") {
        let fence = Regex::new(r"```(?:json)?\s*([\s\S]*?)```").expect("fence regex");
        match fence.captures(content).and_then(|caps| caps.get(1)) {
            Some(inner) => inner.as_str().trim(),
            None => content,
        }
    } else {
        content
    };

    let value: Value = serde_json::from_str(text)
        .map_err(|e| BreakdownError::Format(format!("invalid JSON in model reply: {e}")))?;
    let Value::Array(items) = value else {
        return Err(BreakdownError::Format(
            "expected a JSON array of steps".to_string(),
        ));
    };

    items.iter().map(coerce_step).collect()
}

fn coerce_step(item: &Value) -> Result<BreakdownStep, BreakdownError> {
    let Some(obj) = item.as_object() else {
        return Err(BreakdownError::Format(format!(
            "step is not an object: {item}"
        )));
    };

    let title = obj
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let estimated_minutes = match obj.get("estimated_minutes") {
        None => DEFAULT_ESTIMATED_MINUTES,
        Some(value) => coerce_minutes(value).ok_or_else(|| {
            BreakdownError::Format(format!("estimated_minutes is not an integer: {value}"))
        })?,
    };

    Ok(BreakdownStep {
        title,
        estimated_minutes,
    })
}

/// Integer coercion matching what the upstream reply may contain: integral
/// numbers, floats (truncated), and integer strings.
fn coerce_minutes(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
