use serde::{Deserialize, Serialize};

/// Role type for a chat message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System role.
    System,

    /// User role.
    User,

    /// Assistant role.
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single role-tagged message in a conversation.
///
/// This is the only field pair the chat-completions wire format requires;
/// messages are immutable once created and their ordering is significant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// The role of the message.
    pub role: Role,

    /// The content of the message.
    pub content: String,
}

impl ChatMessage {
    /// Create a new `ChatMessage` with the given role and content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a new system `ChatMessage`.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a new user `ChatMessage`.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create a new assistant `ChatMessage`.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

impl From<&str> for ChatMessage {
    fn from(content: &str) -> Self {
        Self::user(content)
    }
}

impl From<String> for ChatMessage {
    fn from(content: String) -> Self {
        Self::user(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn message_serialization() {
        let message = ChatMessage::user("Hello!");
        let json = to_value(&message).unwrap();

        assert_eq!(
            json,
            json!({
                "role": "user",
                "content": "Hello!"
            })
        );
    }

    #[test]
    fn system_role_is_lowercase() {
        let message = ChatMessage::system("You are an expert summarizer.");
        let json = to_value(&message).unwrap();
        assert_eq!(json["role"], "system");
    }

    #[test]
    fn message_from_str() {
        let message: ChatMessage = "Hello!".into();
        assert_eq!(message.role, Role::User);

        let message = ChatMessage::from("Hello from string".to_string());
        assert_eq!(message.role, Role::User);
    }

    #[test]
    fn message_deserialization() {
        let json = json!({
            "role": "assistant",
            "content": "Hi there."
        });

        let message: ChatMessage = serde_json::from_value(json).unwrap();
        assert_eq!(message.role, Role::Assistant);
        assert_eq!(message.content, "Hi there.");
    }

    #[test]
    fn role_display() {
        assert_eq!(Role::System.to_string(), "system");
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }
}
