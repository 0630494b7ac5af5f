use serde::{Deserialize, Serialize};

use crate::types::{ChatMessage, Model};

/// Parameters for a chat-completion request.
///
/// The message list is sent verbatim; callers own any context policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionParams {
    /// The model identifier to route the request to.
    pub model: Model,

    /// Ordered conversation context, role + content pairs only.
    pub messages: Vec<ChatMessage>,
}

impl ChatCompletionParams {
    /// Create new completion parameters from a model and message list.
    pub fn new(model: Model, messages: Vec<ChatMessage>) -> Self {
        Self { model, messages }
    }
}

/// Token accounting reported by the API for one request.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Usage {
    /// Tokens consumed by the prompt.
    #[serde(default)]
    pub prompt_tokens: u64,

    /// Tokens generated in the completion.
    #[serde(default)]
    pub completion_tokens: u64,

    /// Total tokens billed for the request.
    #[serde(default)]
    pub total_tokens: u64,
}

/// A single completion choice returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Choice {
    /// The generated message.
    pub message: ResponseMessage,
}

/// The message body inside a completion choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseMessage {
    /// Generated text. The API may return null content.
    pub content: Option<String>,
}

/// Response body for a chat-completion request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionResponse {
    /// The completion choices. Only the first is consumed.
    pub choices: Vec<Choice>,

    /// Token accounting, when the API reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

impl ChatCompletionResponse {
    /// Returns the first choice's content, the only field this application
    /// consumes from a response.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}
