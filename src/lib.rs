// Public modules
pub mod client;
pub mod client_logger;
pub mod error;
pub mod observability;
pub mod render;
pub mod repl;
pub mod summarize;
pub mod transcript;
pub mod types;

// Re-exports
pub use client::{CompletionBackend, OpenRouter};
pub use client_logger::ClientLogger;
pub use error::{Error, Result};
pub use render::{PlainTextRenderer, Renderer};
pub use transcript::Transcript;
pub use types::*;
