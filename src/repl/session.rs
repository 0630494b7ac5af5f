//! Core session management.
//!
//! This module provides the `Session` struct which owns the conversation
//! transcript, the active tool, and the request orchestration for both the
//! chatbot and the summarizer.

use crate::client::CompletionBackend;
use crate::error::{Error, Result};
use crate::observability;
use crate::repl::{Mode, ReplConfig};
use crate::summarize;
use crate::transcript::Transcript;
use crate::types::{ChatCompletionParams, ChatMessage, Model, Usage};

/// An interactive session holding the transcript, the active tool, and the
/// fixed model identifier.
///
/// A session is an explicit object owned by its caller rather than ambient
/// state, so multiple sessions can coexist and tests can drive one against
/// a stub backend.
pub struct Session<C: CompletionBackend> {
    client: C,
    config: ReplConfig,
    transcript: Transcript,
    mode: Mode,
    usage_totals: Usage,
    last_turn_usage: Option<Usage>,
    request_count: u64,
}

/// Aggregated stats for a session.
#[derive(Debug, Clone)]
pub struct SessionStats {
    /// The model used for the session.
    pub model: Model,
    /// The active tool.
    pub mode: Mode,
    /// The number of messages in the conversation.
    pub message_count: usize,
    /// Total prompt tokens across all requests.
    pub total_prompt_tokens: u64,
    /// Total completion tokens across all requests.
    pub total_completion_tokens: u64,
    /// Total number of API requests made.
    pub total_requests: u64,
    /// Prompt tokens for the last turn, if reported.
    pub last_turn_prompt_tokens: Option<u64>,
    /// Completion tokens for the last turn, if reported.
    pub last_turn_completion_tokens: Option<u64>,
}

impl<C: CompletionBackend> Session<C> {
    /// Creates a new session with the given backend and configuration.
    pub fn new(client: C, config: ReplConfig) -> Self {
        Self {
            client,
            config,
            transcript: Transcript::new(),
            mode: Mode::default(),
            usage_totals: Usage::default(),
            last_turn_usage: None,
            request_count: 0,
        }
    }

    /// Sends a user chat message and returns the assistant's reply.
    ///
    /// This method:
    /// 1. Returns `Ok(None)` for empty (after trimming) input, touching
    ///    nothing and issuing no request.
    /// 2. Appends the user message to the transcript.
    /// 3. Sends the full transcript as context in one request.
    /// 4. On success, appends the assistant reply and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response carries no
    /// content. The user message appended in step 2 stays in the transcript
    /// either way; no assistant message is appended for a failed turn, and
    /// no retry is attempted.
    pub async fn chat(&mut self, input: &str) -> Result<Option<String>> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        observability::CHAT_TURNS.click();
        self.transcript.append(ChatMessage::user(input));

        let params = ChatCompletionParams::new(
            self.config.model.clone(),
            self.transcript.all().to_vec(),
        );

        let outcome = self.client.complete(params).await.and_then(|response| {
            let content = response.first_content().ok_or_else(|| {
                Error::serialization("response contained no completion content", None)
            })?;
            Ok((content.to_string(), response.usage))
        });

        match outcome {
            Ok((reply, usage)) => {
                self.transcript.append(ChatMessage::assistant(&reply));
                self.record_usage(usage);
                Ok(Some(reply))
            }
            Err(err) => {
                observability::CHAT_TURN_ERRORS.click();
                Err(err)
            }
        }
    }

    /// Summarizes a pasted document with a single standalone request.
    ///
    /// The document never enters the transcript; regardless of success or
    /// failure, the conversation history is untouched.
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty (after trimming) input without
    /// issuing a request, or a request error on any completion failure. No
    /// partial result is kept.
    pub async fn summarize(&mut self, document: &str) -> Result<String> {
        if document.trim().is_empty() {
            return Err(Error::validation(
                "Please paste some text to summarize.",
                Some("text".to_string()),
            ));
        }

        observability::SUMMARIZE_REQUESTS.click();
        let params = summarize::summary_request(self.config.model.clone(), document);

        let outcome = self.client.complete(params).await.and_then(|response| {
            let content = response.first_content().ok_or_else(|| {
                Error::serialization("response contained no completion content", None)
            })?;
            Ok((content.to_string(), response.usage))
        });

        match outcome {
            Ok((summary, usage)) => {
                self.record_usage(usage);
                Ok(summary)
            }
            Err(err) => {
                observability::SUMMARIZE_ERRORS.click();
                Err(err)
            }
        }
    }

    /// Clears the conversation history.
    pub fn clear(&mut self) {
        self.transcript.clear();
    }

    /// Returns the conversation transcript.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Returns the completion backend.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Returns the number of messages in the conversation.
    pub fn message_count(&self) -> usize {
        self.transcript.len()
    }

    /// Returns the active tool.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switches the active tool.
    ///
    /// Switching never clears the transcript; it stays in the background
    /// for when the user switches back to chat.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Returns the model used for requests.
    pub fn model(&self) -> &Model {
        &self.config.model
    }

    /// Returns the current session statistics snapshot.
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            model: self.config.model.clone(),
            mode: self.mode,
            message_count: self.message_count(),
            total_prompt_tokens: self.usage_totals.prompt_tokens,
            total_completion_tokens: self.usage_totals.completion_tokens,
            total_requests: self.request_count,
            last_turn_prompt_tokens: self.last_turn_usage.map(|usage| usage.prompt_tokens),
            last_turn_completion_tokens: self.last_turn_usage.map(|usage| usage.completion_tokens),
        }
    }

    fn record_usage(&mut self, usage: Option<Usage>) {
        self.request_count = self.request_count.saturating_add(1);
        self.last_turn_usage = usage;
        if let Some(usage) = usage {
            self.usage_totals.prompt_tokens = self
                .usage_totals
                .prompt_tokens
                .saturating_add(usage.prompt_tokens);
            self.usage_totals.completion_tokens = self
                .usage_totals
                .completion_tokens
                .saturating_add(usage.completion_tokens);
            self.usage_totals.total_tokens = self
                .usage_totals
                .total_tokens
                .saturating_add(usage.total_tokens);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChatCompletionResponse, Choice, ResponseMessage, Role};
    use std::sync::Mutex;

    /// Backend that replies with a fixed string and records request counts.
    struct FixedBackend {
        reply: &'static str,
        requests: Mutex<Vec<ChatCompletionParams>>,
    }

    impl FixedBackend {
        fn new(reply: &'static str) -> Self {
            Self {
                reply,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait::async_trait]
    impl CompletionBackend for FixedBackend {
        async fn complete(&self, params: ChatCompletionParams) -> Result<ChatCompletionResponse> {
            self.requests.lock().unwrap().push(params);
            Ok(ChatCompletionResponse {
                choices: vec![Choice {
                    message: ResponseMessage {
                        content: Some(self.reply.to_string()),
                    },
                }],
                usage: Some(Usage {
                    prompt_tokens: 10,
                    completion_tokens: 5,
                    total_tokens: 15,
                }),
            })
        }
    }

    fn session(reply: &'static str) -> Session<FixedBackend> {
        Session::new(FixedBackend::new(reply), ReplConfig::default())
    }

    #[tokio::test]
    async fn chat_appends_user_then_assistant() {
        let mut session = session("Hi!");
        let reply = session.chat("Hello").await.unwrap();
        assert_eq!(reply.as_deref(), Some("Hi!"));

        let all = session.transcript().all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].role, Role::User);
        assert_eq!(all[1].role, Role::Assistant);
    }

    #[tokio::test]
    async fn chat_sends_full_transcript_as_context() {
        let mut session = session("ok");
        session.chat("one").await.unwrap();
        session.chat("two").await.unwrap();

        let requests = session.client.requests.lock().unwrap();
        // Second request carries the whole conversation so far.
        assert_eq!(requests[1].messages.len(), 3);
        assert_eq!(requests[1].messages[0].content, "one");
        assert_eq!(requests[1].messages[1].content, "ok");
        assert_eq!(requests[1].messages[2].content, "two");
    }

    #[tokio::test]
    async fn empty_chat_input_is_a_no_op() {
        let mut session = session("unused");
        assert!(session.chat("").await.unwrap().is_none());
        assert!(session.chat("   \n\t ").await.unwrap().is_none());
        assert!(session.transcript().is_empty());
        assert_eq!(session.client.request_count(), 0);
    }

    #[tokio::test]
    async fn mode_switch_keeps_transcript() {
        let mut session = session("hello");
        session.chat("hi").await.unwrap();
        assert_eq!(session.message_count(), 2);

        session.set_mode(Mode::Summarize);
        assert_eq!(session.mode(), Mode::Summarize);
        assert_eq!(session.message_count(), 2);

        session.set_mode(Mode::Chat);
        assert_eq!(session.message_count(), 2);
    }

    #[tokio::test]
    async fn summarize_empty_input_is_validation_error() {
        let mut session = session("unused");
        let err = session.summarize("  \n ").await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(session.client.request_count(), 0);
    }

    #[tokio::test]
    async fn stats_accumulate_usage() {
        let mut session = session("fine");
        session.chat("how are you?").await.unwrap();
        session.summarize("some document").await.unwrap();

        let stats = session.stats();
        assert_eq!(stats.total_requests, 2);
        assert_eq!(stats.total_prompt_tokens, 20);
        assert_eq!(stats.total_completion_tokens, 10);
        assert_eq!(stats.last_turn_prompt_tokens, Some(10));
        assert_eq!(stats.message_count, 2);
    }

    #[tokio::test]
    async fn clear_empties_transcript() {
        let mut session = session("yes");
        session.chat("a").await.unwrap();
        session.chat("b").await.unwrap();
        assert_eq!(session.message_count(), 4);

        session.clear();
        assert_eq!(session.message_count(), 0);
    }
}
