// Public modules
pub mod completion;
pub mod message;
pub mod model;

// Re-exports
pub use completion::{ChatCompletionParams, ChatCompletionResponse, Choice, ResponseMessage, Usage};
pub use message::{ChatMessage, Role};
pub use model::{KnownModel, Model};
