//! Tool trait and closure-based tool wrapper.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;

use super::arguments::ToolArguments;
use crate::error::JarvisError;

/// Core tool trait. Implement it to create custom tools.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (must match what the model writes after `TOOL:`).
    fn name(&self) -> &str;

    /// Natural-language description shown to the model in the prompt.
    fn description(&self) -> &str;

    /// Execute the tool and return the text handed back to the model.
    async fn execute(&self, args: &ToolArguments) -> Result<String, JarvisError>;
}

type ToolHandler = dyn Fn(ToolArguments) -> Pin<Box<dyn Future<Output = Result<String, JarvisError>> + Send>>
    + Send
    + Sync;

/// Closure-based tool for quick tool creation.
pub struct AgentTool {
    name: String,
    description: String,
    handler: Arc<ToolHandler>,
}

impl AgentTool {
    /// Create a tool from a closure.
    pub fn new<F, Fut>(name: impl Into<String>, description: impl Into<String>, handler: F) -> Self
    where
        F: Fn(ToolArguments) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, JarvisError>> + Send + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            handler: Arc::new(move |args| Box::pin(handler(args))),
        }
    }
}

#[async_trait]
impl Tool for AgentTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn execute(&self, args: &ToolArguments) -> Result<String, JarvisError> {
        (self.handler)(args.clone()).await
    }
}

impl std::fmt::Debug for AgentTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn closure_tool_receives_arguments() {
        let tool = AgentTool::new("greet", "Greet a person", |args| async move {
            let name = args.get_str("name")?;
            Ok(format!("Hello, {name}!"))
        });

        assert_eq!(tool.name(), "greet");
        assert_eq!(tool.description(), "Greet a person");

        let args = ToolArguments::from_value(serde_json::json!({"name": "World"})).unwrap();
        assert_eq!(tool.execute(&args).await.unwrap(), "Hello, World!");
    }

    #[tokio::test]
    async fn closure_tool_propagates_errors() {
        let tool = AgentTool::new("greet", "Greet a person", |args| async move {
            Ok(args.get_str("name")?.to_string())
        });

        let err = tool.execute(&ToolArguments::default()).await.unwrap_err();
        assert!(matches!(err, JarvisError::InvalidArgument(_)));
    }
}
