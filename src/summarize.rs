//! Request construction for the text summarizer tool.
//!
//! A summarize request is always exactly two messages: a fixed system
//! instruction and a user instruction wrapping the pasted document. The
//! "exactly 3 lines" constraint lives in the prompt text only; the model's
//! output is displayed verbatim with no line-count validation.

use crate::types::{ChatCompletionParams, ChatMessage, Model};

/// The fixed system instruction for the summarizer.
pub const SUMMARIZER_SYSTEM_PROMPT: &str = "You are an expert summarizer. Your goal is to \
     extract the key points and main ideas from the provided text.";

/// Builds the user instruction wrapping the pasted document.
pub fn summary_prompt(text: &str) -> String {
    format!(
        "Please provide a concise summary of the following text in exactly 3 lines:\n\n---\n\n{text}"
    )
}

/// Builds the complete two-message request for summarizing `text`.
///
/// The document never enters any transcript; the returned parameters are
/// self-contained.
pub fn summary_request(model: Model, text: &str) -> ChatCompletionParams {
    ChatCompletionParams::new(
        model,
        vec![
            ChatMessage::system(SUMMARIZER_SYSTEM_PROMPT),
            ChatMessage::user(summary_prompt(text)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[test]
    fn request_is_exactly_two_messages() {
        let params = summary_request(Model::default_model(), "Lorem ipsum...");
        assert_eq!(params.messages.len(), 2);
        assert_eq!(params.messages[0].role, Role::System);
        assert_eq!(params.messages[0].content, SUMMARIZER_SYSTEM_PROMPT);
        assert_eq!(params.messages[1].role, Role::User);
    }

    #[test]
    fn prompt_wraps_document_verbatim() {
        let prompt = summary_prompt("The quick brown fox.");
        assert!(prompt.starts_with(
            "Please provide a concise summary of the following text in exactly 3 lines:"
        ));
        assert!(prompt.ends_with("---\n\nThe quick brown fox."));
    }
}
