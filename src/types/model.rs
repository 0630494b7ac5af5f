use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents an OpenRouter model identifier.
///
/// This can be a predefined model version or a custom string value for
/// models routed under identifiers this crate does not know about. On the
/// wire a model is always its plain identifier string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Known model versions
    Known(KnownModel),

    /// Custom model identifier
    Custom(String),
}

/// Known OpenRouter model versions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum KnownModel {
    /// DeepSeek R1 0528 distilled onto Qwen3 8B (free tier).
    DeepseekR1Qwen3_8bFree,

    /// DeepSeek V3 chat (free tier).
    DeepseekChatV3Free,
}

impl KnownModel {
    /// The wire identifier for this model.
    pub fn as_str(&self) -> &'static str {
        match self {
            KnownModel::DeepseekR1Qwen3_8bFree => "deepseek/deepseek-r1-0528-qwen3-8b:free",
            KnownModel::DeepseekChatV3Free => "deepseek/deepseek-chat-v3-0324:free",
        }
    }

    fn from_id(id: &str) -> Option<Self> {
        match id {
            "deepseek/deepseek-r1-0528-qwen3-8b:free" => Some(KnownModel::DeepseekR1Qwen3_8bFree),
            "deepseek/deepseek-chat-v3-0324:free" => Some(KnownModel::DeepseekChatV3Free),
            _ => None,
        }
    }
}

impl Model {
    /// The fixed model this application ships with.
    pub fn default_model() -> Self {
        Model::Known(KnownModel::DeepseekR1Qwen3_8bFree)
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::default_model()
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Known(known_model) => write!(f, "{}", known_model),
            Model::Custom(custom) => write!(f, "{}", custom),
        }
    }
}

impl fmt::Display for KnownModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Model {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        if id.is_empty() {
            return Err(de::Error::custom("model identifier must not be empty"));
        }
        Ok(match KnownModel::from_id(&id) {
            Some(known) => Model::Known(known),
            None => Model::Custom(id),
        })
    }
}

impl From<KnownModel> for Model {
    fn from(model: KnownModel) -> Self {
        Model::Known(model)
    }
}

impl From<String> for Model {
    fn from(model: String) -> Self {
        Model::Custom(model)
    }
}

impl From<&str> for Model {
    fn from(model: &str) -> Self {
        Model::Custom(model.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_model_serialization() {
        let model = Model::default_model();
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#""deepseek/deepseek-r1-0528-qwen3-8b:free""#);
    }

    #[test]
    fn custom_model_serialization() {
        let model = Model::Custom("mistralai/mistral-7b-instruct".to_string());
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#""mistralai/mistral-7b-instruct""#);
    }

    #[test]
    fn model_deserialization() {
        let json = r#""deepseek/deepseek-r1-0528-qwen3-8b:free""#;
        let model: Model = serde_json::from_str(json).unwrap();
        assert_eq!(model, Model::Known(KnownModel::DeepseekR1Qwen3_8bFree));

        let json = r#""qwen/qwen3-8b""#;
        let model: Model = serde_json::from_str(json).unwrap();
        assert_eq!(model, Model::Custom("qwen/qwen3-8b".to_string()));
    }

    #[test]
    fn display() {
        let model = Model::default_model();
        assert_eq!(model.to_string(), "deepseek/deepseek-r1-0528-qwen3-8b:free");

        let model = Model::Custom("mistralai/mistral-7b-instruct".to_string());
        assert_eq!(model.to_string(), "mistralai/mistral-7b-instruct");
    }
}
