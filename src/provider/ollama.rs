//! Ollama chat provider (`POST /api/chat`, non-streaming).

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::JarvisConfig;
use crate::error::{JarvisError, Result};

use super::http::{build_client, status_to_error};
use super::{Completion, CompletionProvider, CompletionRequest};

pub struct OllamaProvider {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: Option<OllamaMessage>,
}

#[derive(Debug, Deserialize)]
struct OllamaMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OllamaProvider {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &JarvisConfig) -> Result<Self> {
        let client = build_client(config.request_timeout())?;
        Ok(Self::new(client, config.ollama_base_url.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn malformed(&self, message: impl Into<String>) -> JarvisError {
        JarvisError::Provider {
            provider: self.provider_name().to_string(),
            message: message.into(),
        }
    }
}

#[async_trait]
impl CompletionProvider for OllamaProvider {
    fn provider_name(&self) -> &str {
        "ollama"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<Completion> {
        let url = format!("{}/api/chat", self.base_url);
        let body = serde_json::json!({
            "model": request.model,
            "messages": request.messages,
            "stream": false,
        });

        debug!(model = %request.model, messages = request.messages.len(), "Ollama complete");

        let resp = self.client.post(&url).json(&body).send().await?;

        let status = resp.status().as_u16();
        if !(200..300).contains(&status) {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let raw = resp.text().await?;
        let data: OllamaChatResponse = serde_json::from_str(&raw)
            .map_err(|e| self.malformed(format!("invalid chat response: {e}")))?;

        data.message
            .and_then(|m| m.content)
            .map(Completion::new)
            .ok_or_else(|| self.malformed("response has no message content"))
    }
}
