//! Configuration types for the interactive assistant.
//!
//! This module provides CLI argument parsing via `arrrg` and the resolved
//! configuration for a session. The model identifier is fixed; there is no
//! user-facing selection path.

use arrrg_derive::CommandLine;

use crate::types::Model;

/// Command-line arguments for the sidekick binary.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ReplArgs {
    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

/// Configuration for an interactive session.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments with appropriate defaults.
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// The fixed model used for all requests.
    pub model: Model,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,
}

impl ReplConfig {
    /// Creates a new ReplConfig with default values.
    ///
    /// Defaults:
    /// - Model: deepseek/deepseek-r1-0528-qwen3-8b:free
    /// - Color: enabled
    pub fn new() -> Self {
        Self {
            model: Model::default_model(),
            use_color: true,
        }
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ReplArgs> for ReplConfig {
    fn from(args: ReplArgs) -> Self {
        ReplConfig {
            use_color: !args.no_color,
            ..ReplConfig::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ReplConfig::new();
        assert_eq!(config.model, Model::default_model());
        assert!(config.use_color);
    }

    #[test]
    fn config_from_args() {
        let args = ReplArgs { no_color: true };
        let config = ReplConfig::from(args);
        assert!(!config.use_color);
        assert_eq!(config.model, Model::default_model());
    }

    #[test]
    fn without_color() {
        let config = ReplConfig::new().without_color();
        assert!(!config.use_color);
    }
}
