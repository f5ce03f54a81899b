//! Convenience re-exports.

pub use crate::agent::{parse_reply, Agent, ParsedReply, ToolCall};
pub use crate::config::JarvisConfig;
pub use crate::error::{JarvisError, Result};
pub use crate::memory::TrimmingSession;
pub use crate::provider::{
    ChatMessage, ChatRole, Completion, CompletionProvider, CompletionRequest, OllamaProvider,
};
pub use crate::tools::builtin::{default_registry, ReminderStore};
pub use crate::tools::{AgentTool, Tool, ToolArguments, ToolRegistry};
pub use crate::types::{Message, Role};
