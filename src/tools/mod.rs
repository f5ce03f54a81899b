//! Tool system: named capabilities the agent can dispatch to.

pub mod arguments;
pub mod builtin;
pub mod registry;
pub mod tool;

pub use arguments::ToolArguments;
pub use registry::ToolRegistry;
pub use tool::{AgentTool, Tool};
