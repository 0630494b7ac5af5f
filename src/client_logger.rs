//! Logging trait for OpenRouter client operations.
//!
//! This module provides the [`ClientLogger`] trait that allows users to
//! capture and log all API interactions passing through the
//! [`OpenRouter`](crate::OpenRouter) client.

use crate::types::{ChatCompletionParams, ChatCompletionResponse};

/// A trait for logging OpenRouter client operations.
///
/// Implement this trait to capture and record all API interactions. The
/// client invokes the hooks synchronously around each `send` call, so
/// implementations should be cheap or hand off to their own sink.
///
/// # Example
///
/// ```rust,ignore
/// use std::io::Write;
/// use std::sync::Mutex;
/// use sidekick::{ChatCompletionParams, ChatCompletionResponse, ClientLogger};
///
/// struct FileLogger {
///     file: Mutex<std::fs::File>,
/// }
///
/// impl ClientLogger for FileLogger {
///     fn log_request(&self, params: &ChatCompletionParams) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "Request: {}", serde_json::to_string(params).unwrap()).unwrap();
///     }
///
///     fn log_response(&self, response: &ChatCompletionResponse) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "Response: {}", serde_json::to_string(response).unwrap()).unwrap();
///     }
/// }
/// ```
pub trait ClientLogger: Send + Sync {
    /// Log the outbound parameters of a `send` call.
    ///
    /// This method is called once per request, before the request is issued.
    fn log_request(&self, params: &ChatCompletionParams);

    /// Log a complete response from a successful `send` call.
    ///
    /// This method is called once per successful request with the parsed
    /// [`ChatCompletionResponse`].
    fn log_response(&self, response: &ChatCompletionResponse);
}
