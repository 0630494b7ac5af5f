//! Output rendering for the interactive tools.
//!
//! This module provides a renderer trait and a plain-text implementation
//! with optional ANSI styling for per-role transcript display, summaries,
//! and inline status messages.

use std::io::{self, Stdout, Write};

use crate::types::Role;

/// ANSI escape code for dim text (used for system messages and hints).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// ANSI escape code for cyan text (used for user role labels).
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for green text (used for assistant role labels).
const ANSI_GREEN: &str = "\x1b[32m";

/// ANSI escape code for yellow text (used for warnings).
const ANSI_YELLOW: &str = "\x1b[33m";

/// ANSI escape code for red text (used for errors).
const ANSI_RED: &str = "\x1b[31m";

/// Trait for rendering tool output.
///
/// This abstraction allows for different rendering strategies:
/// - Plain text with ANSI styling
/// - Plain text without styling (for piping/redirecting)
/// - Capturing renderers in tests
pub trait Renderer: Send {
    /// Print a block of response text.
    fn print_text(&mut self, text: &str);

    /// Print one transcript message with its role label.
    fn print_message(&mut self, role: Role, content: &str);

    /// Print an error message.
    fn print_error(&mut self, error: &str);

    /// Print a validation warning.
    fn print_warning(&mut self, warning: &str);

    /// Print an informational message.
    fn print_info(&mut self, info: &str);
}

/// Plain text renderer with optional ANSI styling.
///
/// This renderer outputs text directly to stdout with optional ANSI escape
/// codes for role labels, warnings, and errors.
pub struct PlainTextRenderer {
    stdout: Stdout,
    use_color: bool,
}

impl PlainTextRenderer {
    /// Creates a new PlainTextRenderer with ANSI colors enabled.
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            use_color: true,
        }
    }

    /// Creates a new PlainTextRenderer with specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
        }
    }

    /// Flushes stdout to ensure immediate display.
    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }

    fn role_label(&self, role: Role) -> String {
        let label = match role {
            Role::System => "system",
            Role::User => "You",
            Role::Assistant => "Assistant",
        };
        if self.use_color {
            let color = match role {
                Role::System => ANSI_DIM,
                Role::User => ANSI_CYAN,
                Role::Assistant => ANSI_GREEN,
            };
            format!("{color}{label}:{ANSI_RESET}")
        } else {
            format!("{label}:")
        }
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn print_text(&mut self, text: &str) {
        println!("{text}");
        self.flush();
    }

    fn print_message(&mut self, role: Role, content: &str) {
        println!("{} {}", self.role_label(role), content);
        self.flush();
    }

    fn print_error(&mut self, error: &str) {
        if self.use_color {
            eprintln!("{ANSI_RED}Error:{ANSI_RESET} {error}");
        } else {
            eprintln!("Error: {error}");
        }
    }

    fn print_warning(&mut self, warning: &str) {
        if self.use_color {
            println!("{ANSI_YELLOW}Warning:{ANSI_RESET} {warning}");
        } else {
            println!("Warning: {warning}");
        }
        self.flush();
    }

    fn print_info(&mut self, info: &str) {
        if self.use_color {
            println!("{ANSI_DIM}{info}{ANSI_RESET}");
        } else {
            println!("{info}");
        }
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_default_has_color() {
        let renderer = PlainTextRenderer::new();
        assert!(renderer.use_color);
    }

    #[test]
    fn renderer_without_color() {
        let renderer = PlainTextRenderer::with_color(false);
        assert!(!renderer.use_color);
    }

    #[test]
    fn role_labels_without_color() {
        let renderer = PlainTextRenderer::with_color(false);
        assert_eq!(renderer.role_label(Role::User), "You:");
        assert_eq!(renderer.role_label(Role::Assistant), "Assistant:");
        assert_eq!(renderer.role_label(Role::System), "system:");
    }
}
