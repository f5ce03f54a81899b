//! Shared test helpers and mock provider.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use jarvis::config::JarvisConfig;
use jarvis::error::JarvisError;
use jarvis::provider::{Completion, CompletionProvider, CompletionRequest};
use jarvis::tools::ToolRegistry;

/// A provider that replays scripted replies and records every request.
#[derive(Default)]
pub struct MockProvider {
    replies: Mutex<VecDeque<Result<String, JarvisError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a text reply.
    pub fn queue_reply(&self, text: &str) {
        self.replies.lock().unwrap().push_back(Ok(text.to_string()));
    }

    /// Queue several replies in order.
    pub fn queue_replies(&self, texts: &[&str]) {
        for text in texts {
            self.queue_reply(text);
        }
    }

    /// Queue a provider failure.
    pub fn queue_error(&self, err: JarvisError) {
        self.replies.lock().unwrap().push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    fn provider_name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, JarvisError> {
        self.requests.lock().unwrap().push(request.clone());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(Completion::new(text)),
            Some(Err(e)) => Err(e),
            None => Ok(Completion::new("Mock response")),
        }
    }
}

/// Config with small, test-friendly limits.
pub fn test_config(max_turns: usize) -> JarvisConfig {
    JarvisConfig::default()
        .with_model("test-model")
        .with_max_turns(max_turns)
        .with_max_tool_iterations(5)
}

/// Registry with a weather stand-in, an always-failing tool and an echo tool.
pub fn stub_registry() -> Arc<ToolRegistry> {
    let mut registry = ToolRegistry::new();
    registry
        .register_fn(
            "get_weather_for_city",
            "Fetches the current weather for a given city.",
            |args| async move {
                let city = args.get_str("city_name")?;
                Ok(format!("The current weather in {city} is 18°C with Clear skies."))
            },
        )
        .register_fn("flaky", "Always fails.", |_| async {
            Err(JarvisError::tool("flaky", "service unavailable"))
        })
        .register_fn("echo", "Repeats text.", |args| async move {
            Ok(args.get_str("text")?.to_string())
        });
    Arc::new(registry)
}
