//! Interactive assistant module.
//!
//! This module provides the REPL-facing pieces of sidekick: the two-tool
//! mode selector, slash commands for session control, configuration, and
//! the session that orchestrates chat and summarize requests.
//!
//! # Architecture
//!
//! - [`mode`]: the Chat/Summarize tool selector
//! - [`commands`]: slash command parsing and handling
//! - [`config`]: CLI argument parsing and configuration
//! - [`session`]: transcript ownership and request orchestration

mod commands;
mod config;
mod mode;
mod session;

pub use commands::{ReplCommand, help_text, parse_command, parse_command_for};
pub use config::{ReplArgs, ReplConfig};
pub use mode::{CHAT_GREETING, Mode};
pub use session::{Session, SessionStats};
