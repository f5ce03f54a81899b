//! Completion provider trait and implementations.
//!
//! The agent treats the language model as a stateless text-completion
//! collaborator: every call carries the full prompt and returns plain text.

pub mod http;
pub mod ollama;

pub use ollama::OllamaProvider;

use async_trait::async_trait;
use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Message, Role};

/// Prefix for tool output replayed to the model.
pub const TOOL_RESULT_PREFIX: &str = "TOOL_RESULT: ";
/// Prefix for dispatch failures replayed to the model.
pub const TOOL_ERROR_PREFIX: &str = "TOOL_ERROR: ";

/// Role as understood by chat-completion APIs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// A message in the provider's wire vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

impl From<&Message> for ChatMessage {
    /// Tool output is attributed to the user side so the model reads it
    /// as fresh input on the next turn.
    fn from(message: &Message) -> Self {
        match message.role() {
            Role::User => Self::user(message.content()),
            Role::Assistant => Self::assistant(message.content()),
            Role::ToolResult => Self::user(format!("{TOOL_RESULT_PREFIX}{}", message.content())),
            Role::ToolError => Self::user(format!("{TOOL_ERROR_PREFIX}{}", message.content())),
        }
    }
}

/// A request sent to a completion provider.
#[derive(Debug, Clone, Builder, Serialize)]
pub struct CompletionRequest {
    #[builder(into)]
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Text returned by a completion provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub content: String,
}

impl Completion {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Core trait implemented by all completion providers.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name (e.g., "ollama").
    fn provider_name(&self) -> &str;

    /// Run one stateless completion over the full message list.
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion>;
}
