//! The conversational agent that owns one session.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::config::JarvisConfig;
use crate::error::{JarvisError, Result};
use crate::memory::TrimmingSession;
use crate::provider::{CompletionProvider, CompletionRequest};
use crate::tools::ToolRegistry;
use crate::types::Role;

use super::parse::{parse_reply, ParsedReply, ToolCall};
use super::prompt::build_messages;

/// A single-session assistant.
///
/// The registry is shared and read-only; the memory belongs to this agent
/// alone. Several agents may share one registry without seeing each
/// other's history.
pub struct Agent {
    provider: Arc<dyn CompletionProvider>,
    registry: Arc<ToolRegistry>,
    memory: TrimmingSession,
    model: String,
    max_tool_iterations: usize,
}

impl Agent {
    /// Create an agent with empty memory sized from `config.max_turns`.
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        registry: Arc<ToolRegistry>,
        config: &JarvisConfig,
    ) -> Self {
        info!(
            model = %config.model,
            provider = provider.provider_name(),
            max_turns = config.max_turns,
            "agent initialized"
        );
        Self {
            provider,
            registry,
            memory: TrimmingSession::new(config.max_turns),
            model: config.model.clone(),
            max_tool_iterations: config.max_tool_iterations,
        }
    }

    pub fn memory(&self) -> &TrimmingSession {
        &self.memory
    }

    /// Resolve one user query, running tool calls until the model answers.
    ///
    /// Only provider failures and the iteration bound surface as errors.
    /// Dispatch failures become `tool_error` entries the model sees on the
    /// next iteration. Memory written before a failure is kept.
    pub async fn process_query(&mut self, query: &str) -> Result<String> {
        self.memory.add(Role::User, query);

        for iteration in 0..self.max_tool_iterations {
            let request = CompletionRequest::builder()
                .model(self.model.as_str())
                .messages(build_messages(&self.registry, &self.memory))
                .build();

            debug!(iteration, messages = request.messages.len(), "calling provider");
            let reply = self.provider.complete(&request).await?.content;

            match parse_reply(&reply) {
                ParsedReply::Answer => {
                    self.memory.add(Role::Assistant, reply.as_str());
                    return Ok(reply);
                }
                ParsedReply::ToolCall(call) => match self.dispatch(&call).await {
                    Ok(output) => {
                        self.memory.add(Role::Assistant, reply);
                        self.memory.add(Role::ToolResult, output);
                    }
                    Err(e) => {
                        warn!(tool = %call.name, error = %e, "tool dispatch failed");
                        self.memory.add(Role::ToolError, e.to_string());
                    }
                },
                ParsedReply::Malformed(e) => {
                    warn!(error = %e, "malformed tool call");
                    self.memory.add(Role::ToolError, e.to_string());
                }
            }
        }

        error!(
            limit = self.max_tool_iterations,
            "no final answer within the iteration limit"
        );
        Err(JarvisError::DispatchLoopExceeded {
            limit: self.max_tool_iterations,
        })
    }

    /// Any failure a tool reports comes back as a recoverable error.
    async fn dispatch(&self, call: &ToolCall) -> Result<String> {
        let tool = self.registry.get(&call.name)?;
        info!(tool = %call.name, "dispatching tool");
        tool.execute(&call.arguments).await.map_err(|e| {
            if e.is_recoverable() {
                e
            } else {
                JarvisError::tool(&call.name, e)
            }
        })
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("provider", &self.provider.provider_name())
            .field("model", &self.model)
            .field("registry", &self.registry)
            .field("memory_len", &self.memory.len())
            .finish()
    }
}
