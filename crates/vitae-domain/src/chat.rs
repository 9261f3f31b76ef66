//! Chat wire types and the outbound transport boundary
//!
//! The generation collaborator is reached through exactly one trait,
//! [`ChatTransport`]. The wire types mirror the common chat-completions
//! shape: a request carries ordered messages whose last user turn holds
//! the document; a response carries choices whose first message holds
//! the answer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One conversational turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Turn role: "system", "user", or "assistant"
    pub role: String,

    /// Turn text
    pub content: String,
}

impl ChatMessage {
    /// Create a user turn
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create a system turn
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create an assistant turn
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }

    /// Whether this turn came from the user
    pub fn is_user(&self) -> bool {
        self.role == "user"
    }
}

/// Outbound generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Target model name
    pub model: String,

    /// Ordered conversation turns
    pub messages: Vec<ChatMessage>,

    /// Completion length cap, when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Sampling temperature, when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl ChatRequest {
    /// Create a request with a single user turn
    pub fn user(model: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::user(content)],
            max_tokens: None,
            temperature: None,
        }
    }

    /// Content of the last user turn, if any
    pub fn last_user_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.is_user())
            .map(|m| m.content.as_str())
    }

    /// Replace the content of the last user turn
    ///
    /// Returns false (and changes nothing) when the request has no user
    /// turn.
    pub fn set_last_user_content(&mut self, content: impl Into<String>) -> bool {
        match self.messages.iter_mut().rev().find(|m| m.is_user()) {
            Some(message) => {
                message.content = content.into();
                true
            }
            None => false,
        }
    }
}

/// One candidate answer in a response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatChoice {
    /// The answer turn
    pub message: ChatMessage,
}

/// Generation response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Candidate answers; the first is authoritative
    pub choices: Vec<ChatChoice>,
}

impl ChatResponse {
    /// Build a single-choice assistant response
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            choices: vec![ChatChoice {
                message: ChatMessage::assistant(content),
            }],
        }
    }

    /// Content of the first choice, if any
    pub fn content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

/// Trait for the outbound generation call
///
/// Implemented by the infrastructure layer (vitae-llm) and by decorators
/// that rewrite requests in flight (vitae-augment).
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Error type for transport operations
    type Error;

    /// Send one request and await the collaborator's response
    async fn send(&self, request: ChatRequest) -> Result<ChatResponse, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_user_content_skips_trailing_assistant() {
        let request = ChatRequest {
            model: "gpt-4".to_string(),
            messages: vec![
                ChatMessage::system("Tu es un assistant RH."),
                ChatMessage::user("CV CONTENT: ..."),
                ChatMessage::assistant("Understood."),
            ],
            max_tokens: None,
            temperature: None,
        };

        assert_eq!(request.last_user_content(), Some("CV CONTENT: ..."));
    }

    #[test]
    fn test_set_last_user_content_targets_last_user_turn() {
        let mut request = ChatRequest {
            model: "gpt-4".to_string(),
            messages: vec![
                ChatMessage::user("first"),
                ChatMessage::assistant("ack"),
                ChatMessage::user("second"),
            ],
            max_tokens: None,
            temperature: None,
        };

        assert!(request.set_last_user_content("rewritten"));
        assert_eq!(request.messages[0].content, "first");
        assert_eq!(request.messages[2].content, "rewritten");
    }

    #[test]
    fn test_set_last_user_content_without_user_turn() {
        let mut request = ChatRequest {
            model: "gpt-4".to_string(),
            messages: vec![ChatMessage::system("only system")],
            max_tokens: None,
            temperature: None,
        };

        assert!(!request.set_last_user_content("rewritten"));
        assert_eq!(request.messages[0].content, "only system");
    }

    #[test]
    fn test_response_content_first_choice() {
        let response = ChatResponse::assistant("{\"skills\": []}");
        assert_eq!(response.content(), Some("{\"skills\": []}"));

        let empty = ChatResponse { choices: Vec::new() };
        assert_eq!(empty.content(), None);
    }

    #[test]
    fn test_request_serialization_omits_unset_options() {
        let request = ChatRequest::user("gpt-4", "hello");
        let json = serde_json::to_string(&request).unwrap();

        assert!(!json.contains("max_tokens"));
        assert!(!json.contains("temperature"));
    }
}
