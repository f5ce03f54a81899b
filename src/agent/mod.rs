//! Agent loop: prompt assembly, tool-call parsing and dispatch.
//!
//! One request runs as a small state machine:
//! 1. Build the prompt from the registry and the memory snapshot
//! 2. Ask the completion provider for a reply
//! 3. If the reply is a tool directive, dispatch it and record the outcome
//! 4. Repeat until the reply is a plain answer or the iteration bound is hit

pub mod agent;
pub mod parse;
pub mod prompt;

pub use agent::Agent;
pub use parse::{parse_reply, ParsedReply, ToolCall, TOOL_MARKER};
pub use prompt::{build_messages, build_system_prompt};
