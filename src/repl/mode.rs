//! The tool selector.
//!
//! Two mutually exclusive tools share one session: the chatbot and the text
//! summarizer. Switching is a pure selection; it never clears the
//! transcript, which simply stays in the background until the user switches
//! back to chat.

use std::fmt;
use std::str::FromStr;

/// The canned assistant greeting shown when chat starts fresh.
pub const CHAT_GREETING: &str = "Hello! How can I help you today?";

/// The currently active tool.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    /// Conversational chat against the full transcript.
    #[default]
    Chat,

    /// One-shot document summarization.
    Summarize,
}

impl Mode {
    /// Returns the greeting to show when this tool becomes active.
    ///
    /// Chat greets only while nothing has been said yet; once the
    /// transcript has content (or after switching to the summarizer)
    /// there is no greeting.
    pub fn greeting(self, transcript_empty: bool) -> Option<&'static str> {
        match self {
            Mode::Chat if transcript_empty => Some(CHAT_GREETING),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Chat => write!(f, "chat"),
            Mode::Summarize => write!(f, "summarize"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chat" | "chatbot" => Ok(Mode::Chat),
            "summarize" | "summarizer" | "summary" => Ok(Mode::Summarize),
            _ => Err(format!("Unknown mode: {} (use chat or summarize)", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_modes() {
        assert_eq!("chat".parse::<Mode>(), Ok(Mode::Chat));
        assert_eq!("Chatbot".parse::<Mode>(), Ok(Mode::Chat));
        assert_eq!("summarize".parse::<Mode>(), Ok(Mode::Summarize));
        assert_eq!("SUMMARY".parse::<Mode>(), Ok(Mode::Summarize));
        assert!("translate".parse::<Mode>().is_err());
    }

    #[test]
    fn default_is_chat() {
        assert_eq!(Mode::default(), Mode::Chat);
    }

    #[test]
    fn chat_greets_only_a_fresh_transcript() {
        assert_eq!(Mode::Chat.greeting(true), Some(CHAT_GREETING));
        assert_eq!(Mode::Chat.greeting(false), None);
        assert_eq!(Mode::Summarize.greeting(true), None);
        assert_eq!(Mode::Summarize.greeting(false), None);
    }

    #[test]
    fn display_round_trips() {
        assert_eq!(Mode::Chat.to_string().parse::<Mode>(), Ok(Mode::Chat));
        assert_eq!(
            Mode::Summarize.to_string().parse::<Mode>(),
            Ok(Mode::Summarize)
        );
    }
}
