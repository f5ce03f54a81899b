//! Error types for Jarvis.

use thiserror::Error;

/// Primary error type for all Jarvis operations.
#[derive(Error, Debug)]
pub enum JarvisError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The completion provider answered with something unusable.
    #[error("Provider error: {provider} — {message}")]
    Provider { provider: String, message: String },

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for tool '{tool}': {message}")]
    ArgumentDecode { tool: String, message: String },

    #[error("Malformed tool call: {0}")]
    MalformedToolCall(String),

    #[error("Tool execution error: {tool_name} — {message}")]
    ToolExecution { tool_name: String, message: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Tool dispatch loop exceeded {limit} iterations without a final answer")]
    DispatchLoopExceeded { limit: usize },
}

/// Broad error category for routing recovery logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Provider,
    Network,
    Configuration,
    Dispatch,
    ToolExecution,
    Serialization,
    Unknown,
}

impl JarvisError {
    /// Create an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a tool execution error.
    pub fn tool(tool_name: impl Into<String>, message: impl ToString) -> Self {
        Self::ToolExecution {
            tool_name: tool_name.into(),
            message: message.to_string(),
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Api { .. } | Self::Provider { .. } => ErrorCategory::Provider,
            Self::Network(_) | Self::Io(_) => ErrorCategory::Network,
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Serialization(_) => ErrorCategory::Serialization,
            Self::UnknownTool(_)
            | Self::ArgumentDecode { .. }
            | Self::MalformedToolCall(_)
            | Self::InvalidArgument(_) => ErrorCategory::Dispatch,
            Self::ToolExecution { .. } => ErrorCategory::ToolExecution,
            Self::DispatchLoopExceeded { .. } => ErrorCategory::Unknown,
        }
    }

    /// Whether the agent loop turns this error into a `tool_error` message
    /// instead of failing the request.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Dispatch | ErrorCategory::ToolExecution
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, JarvisError>;
