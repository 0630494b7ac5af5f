//! Slash command parsing for the interactive assistant.
//!
//! This module handles parsing of special commands that start with `/`,
//! allowing users to control the session without sending text to the API.

use crate::repl::Mode;

/// A parsed REPL command.
///
/// These commands control the session and are never sent to the API.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Switch the active tool.
    Mode(Mode),

    /// Clear the conversation history (chat mode only).
    Clear,

    /// Display the conversation history.
    History,

    /// Display session statistics (message count, usage totals, etc.).
    Stats,

    /// Display help information.
    Help,

    /// Exit the application.
    Quit,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Parses user input for slash commands.
///
/// Returns `Some(ReplCommand)` if the input is a command, or `None` if it
/// should be treated as regular text for the active tool.
///
/// # Examples
///
/// ```
/// # use sidekick::repl::parse_command;
/// assert!(parse_command("/quit").is_some());
/// assert!(parse_command("/mode summarize").is_some());
/// assert!(parse_command("Hello there!").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<ReplCommand> {
    let input = input.trim();

    if !input.starts_with('/') {
        return None;
    }

    let mut parts = input[1..].splitn(2, ' ');
    let command = parts.next()?.to_lowercase();
    let argument = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

    let result = match command.as_str() {
        "mode" => match argument {
            Some(arg) => match arg.parse::<Mode>() {
                Ok(mode) => ReplCommand::Mode(mode),
                Err(err) => ReplCommand::Invalid(err),
            },
            None => ReplCommand::Invalid("/mode requires 'chat' or 'summarize'".to_string()),
        },
        // Shortcuts for the two tools.
        "chat" => ReplCommand::Mode(Mode::Chat),
        "summarize" => ReplCommand::Mode(Mode::Summarize),
        "clear" => ReplCommand::Clear,
        "history" => ReplCommand::History,
        "stats" | "status" => ReplCommand::Stats,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" | "q" => ReplCommand::Quit,
        _ => ReplCommand::Invalid(format!("Unknown command: /{}", command)),
    };

    Some(result)
}

/// Parses user input for slash commands, honoring the active tool.
///
/// In summarize mode the input is pasted text, and a line that merely
/// starts with `/` (a Unix path, say) is not a command. Only input that
/// parses cleanly is intercepted there; anything else begins the document.
pub fn parse_command_for(input: &str, mode: Mode) -> Option<ReplCommand> {
    let cmd = parse_command(input)?;
    match (&cmd, mode) {
        (ReplCommand::Invalid(_), Mode::Summarize) => None,
        _ => Some(cmd),
    }
}

/// Returns help text describing available commands.
pub fn help_text() -> &'static str {
    r#"Available commands:
  /mode <chat|summarize> Switch the active tool
  /chat                  Shortcut for /mode chat
  /summarize             Shortcut for /mode summarize
  /clear                 Clear conversation history (chat mode only)
  /history               Show the conversation so far
  /stats                 Show session statistics
  /help                  Show this help message
  /quit                  Exit the assistant"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_commands() {
        assert_eq!(parse_command("/quit"), Some(ReplCommand::Quit));
        assert_eq!(parse_command("/exit"), Some(ReplCommand::Quit));
        assert_eq!(parse_command("/q"), Some(ReplCommand::Quit));
        assert_eq!(parse_command("  /quit  "), Some(ReplCommand::Quit));
    }

    #[test]
    fn parse_clear() {
        assert_eq!(parse_command("/clear"), Some(ReplCommand::Clear));
        assert_eq!(parse_command("/CLEAR"), Some(ReplCommand::Clear));
    }

    #[test]
    fn parse_mode() {
        assert_eq!(
            parse_command("/mode chat"),
            Some(ReplCommand::Mode(Mode::Chat))
        );
        assert_eq!(
            parse_command("/mode summarize"),
            Some(ReplCommand::Mode(Mode::Summarize))
        );
        assert_eq!(
            parse_command("/summarize"),
            Some(ReplCommand::Mode(Mode::Summarize))
        );
        assert_eq!(parse_command("/chat"), Some(ReplCommand::Mode(Mode::Chat)));
        assert!(matches!(
            parse_command("/mode"),
            Some(ReplCommand::Invalid(msg)) if msg.contains("requires")
        ));
        assert!(matches!(
            parse_command("/mode translate"),
            Some(ReplCommand::Invalid(msg)) if msg.contains("Unknown mode")
        ));
    }

    #[test]
    fn parse_history_and_stats() {
        assert_eq!(parse_command("/history"), Some(ReplCommand::History));
        assert_eq!(parse_command("/stats"), Some(ReplCommand::Stats));
        assert_eq!(parse_command("/status"), Some(ReplCommand::Stats));
    }

    #[test]
    fn unknown_command_is_invalid() {
        assert!(matches!(
            parse_command("/model gpt-4o"),
            Some(ReplCommand::Invalid(msg)) if msg.contains("Unknown command")
        ));
    }

    #[test]
    fn non_commands() {
        assert_eq!(parse_command("Hello there!"), None);
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
    }

    #[test]
    fn pasted_slash_lines_are_text_in_summarize_mode() {
        // A document may well start with a path or an option flag.
        assert_eq!(parse_command_for("/usr/bin/env bash", Mode::Summarize), None);
        assert_eq!(parse_command_for("/etc/hosts holds:", Mode::Summarize), None);

        // Real commands still work while summarizing.
        assert_eq!(
            parse_command_for("/quit", Mode::Summarize),
            Some(ReplCommand::Quit)
        );
        assert_eq!(
            parse_command_for("/mode chat", Mode::Summarize),
            Some(ReplCommand::Mode(Mode::Chat))
        );

        // Chat mode keeps rejecting typos loudly.
        assert!(matches!(
            parse_command_for("/usr/bin/env bash", Mode::Chat),
            Some(ReplCommand::Invalid(_))
        ));
    }

    #[test]
    fn help_text_not_empty() {
        let help = help_text();
        assert!(!help.is_empty());
        assert!(help.contains("/quit"));
        assert!(help.contains("/clear"));
        assert!(help.contains("/mode"));
    }
}
