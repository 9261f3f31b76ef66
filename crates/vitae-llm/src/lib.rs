//! Vitae LLM Transport Layer
//!
//! Implementations of the `ChatTransport` trait from `vitae-domain`.
//!
//! # Transports
//!
//! - `MockTransport`: deterministic mock for testing; scripts
//!   responses and captures requests so tests can assert rewrites
//! - `OpenAiTransport`: HTTP client for an OpenAI-compatible
//!   chat-completions endpoint
//!
//! # Examples
//!
//! ```
//! use vitae_llm::MockTransport;
//! use vitae_domain::{ChatRequest, ChatTransport};
//!
//! # async fn example() {
//! let transport = MockTransport::new("{}");
//! let response = transport.send(ChatRequest::user("gpt-4", "hello")).await.unwrap();
//! assert_eq!(response.content(), Some("{}"));
//! assert_eq!(transport.call_count(), 1);
//! # }
//! ```

#![warn(missing_docs)]

pub mod openai;

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use vitae_domain::{ChatRequest, ChatResponse, ChatTransport};

pub use openai::OpenAiTransport;

/// Errors that can occur during transport operations
#[derive(Error, Debug)]
pub enum TransportError {
    /// Network or HTTP communication error
    #[error("HTTP error: {0}")]
    Http(String),

    /// The endpoint answered with a non-success status
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Body or reason text
        message: String,
    },

    /// The response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The response carried no answer content
    #[error("Empty response content")]
    EmptyContent,
}

enum ScriptedReply {
    Response(ChatResponse),
    Error(String),
}

struct MockState {
    scripted: VecDeque<ScriptedReply>,
    requests: Vec<ChatRequest>,
    call_count: usize,
}

/// Deterministic transport for testing
///
/// Returns the default response unless replies were scripted; every
/// request is captured so tests can assert what was actually sent.
/// Cloning shares state.
#[derive(Clone)]
pub struct MockTransport {
    default_response: ChatResponse,
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    /// Create a mock answering every request with `content`
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            default_response: ChatResponse::assistant(content),
            state: Arc::new(Mutex::new(MockState {
                scripted: VecDeque::new(),
                requests: Vec::new(),
                call_count: 0,
            })),
        }
    }

    /// Queue a one-shot response, consumed before the default
    pub fn push_response(&self, content: impl Into<String>) {
        self.state
            .lock()
            .unwrap()
            .scripted
            .push_back(ScriptedReply::Response(ChatResponse::assistant(content)));
    }

    /// Queue a one-shot transport error
    pub fn push_error(&self, message: impl Into<String>) {
        self.state
            .lock()
            .unwrap()
            .scripted
            .push_back(ScriptedReply::Error(message.into()));
    }

    /// Number of requests sent so far
    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().call_count
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<ChatRequest> {
        self.state.lock().unwrap().requests.last().cloned()
    }

    /// All captured requests, in order
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    /// A well-formed structured-CV response body, for tests
    pub fn cv_fixture() -> String {
        r#"{
  "personal_info": {
    "name": "Marie Dupont",
    "email": "marie.dupont@example.com",
    "phone": "06 12 34 56 78"
  },
  "work_experience": [
    {
      "title": "Assistante de direction",
      "company": "Altair Conseil",
      "start_date": "2019",
      "end_date": "2022",
      "description": "Gestion d'agenda et coordination des équipes"
    },
    {
      "title": "Secrétaire polyvalente",
      "company": "Cabinet Bernard",
      "start_date": "2016",
      "end_date": "2019",
      "description": "Accueil et gestion administrative"
    },
    {
      "title": "Assistante administrative",
      "company": "Mairie de Lyon",
      "start_date": "2014",
      "end_date": "2016",
      "description": "Saisie et classement"
    }
  ],
  "skills": ["Organisation", "Pack Office"],
  "education": [
    { "degree": "BTS Assistant Manager", "institution": "Lycée Carnot", "year": "2013" }
  ],
  "languages": [ { "language": "Anglais", "level": "Courant" } ],
  "software": ["Excel", "Outlook"]
}"#
        .to_string()
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    type Error = TransportError;

    async fn send(&self, request: ChatRequest) -> Result<ChatResponse, Self::Error> {
        let mut state = self.state.lock().unwrap();
        state.call_count += 1;
        state.requests.push(request);

        match state.scripted.pop_front() {
            Some(ScriptedReply::Response(response)) => Ok(response),
            Some(ScriptedReply::Error(message)) => Err(TransportError::Http(message)),
            None => Ok(self.default_response.clone()),
        }
    }
}
