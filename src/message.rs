// src/message.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry in the chat transcript. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// The models installed on the local Ollama instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Model {
    Llama31,
    #[default]
    Gemma3,
    Llama3,
}

impl Model {
    pub const ALL: [Model; 3] = [Model::Llama31, Model::Gemma3, Model::Llama3];

    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Llama31 => "llama3.1",
            Model::Gemma3 => "gemma3",
            Model::Llama3 => "llama3",
        }
    }

    pub fn from_name(name: &str) -> Option<Model> {
        Model::ALL.into_iter().find(|m| m.as_str() == name)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize)]
pub struct ChatRequest {
    pub model: Option<String>,
    pub messages: Option<Vec<Message>>,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
    pub hint: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_names_round_trip() {
        for model in Model::ALL {
            assert_eq!(Model::from_name(model.as_str()), Some(model));
        }
        assert_eq!(Model::from_name("gpt-4"), None);
        assert_eq!(Model::default(), Model::Gemma3);
    }

    #[test]
    fn roles_serialize_lowercase() {
        let msg = Message {
            role: Role::Assistant,
            content: "hi".to_string(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"hi"}"#);
    }
}
