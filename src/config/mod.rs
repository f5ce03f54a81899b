//! Configuration system (layered: code > env > `.env` file > defaults).

use std::str::FromStr;
use std::time::Duration;

use crate::error::{JarvisError, Result};

pub const DEFAULT_MODEL: &str = "llama3.2:3b";
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_MAX_TURNS: usize = 5;
pub const DEFAULT_MAX_TOOL_ITERATIONS: usize = 8;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_WIKIPEDIA_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Runtime configuration for the agent, its provider and the built-in tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JarvisConfig {
    /// Model name passed to the completion provider.
    pub model: String,
    pub ollama_base_url: String,
    /// Conversation turns kept in memory (capacity is twice this).
    pub max_turns: usize,
    /// Provider calls allowed per request before giving up.
    pub max_tool_iterations: usize,
    pub request_timeout_secs: u64,
    pub geocoding_base_url: String,
    pub forecast_base_url: String,
    pub wikipedia_api_url: String,
}

impl Default for JarvisConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            ollama_base_url: DEFAULT_OLLAMA_BASE_URL.to_string(),
            max_turns: DEFAULT_MAX_TURNS,
            max_tool_iterations: DEFAULT_MAX_TOOL_ITERATIONS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            geocoding_base_url: DEFAULT_GEOCODING_URL.to_string(),
            forecast_base_url: DEFAULT_FORECAST_URL.to_string(),
            wikipedia_api_url: DEFAULT_WIKIPEDIA_URL.to_string(),
        }
    }
}

impl JarvisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from environment variables (`JARVIS_MODEL`, `OLLAMA_BASE_URL`, ...).
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let string_mappings: [(&str, &mut String); 5] = [
            ("JARVIS_MODEL", &mut config.model),
            ("OLLAMA_BASE_URL", &mut config.ollama_base_url),
            ("JARVIS_GEOCODING_URL", &mut config.geocoding_base_url),
            ("JARVIS_FORECAST_URL", &mut config.forecast_base_url),
            ("JARVIS_WIKIPEDIA_URL", &mut config.wikipedia_api_url),
        ];
        for (env_var, slot) in string_mappings {
            if let Some(value) = lookup(env_var).filter(|v| !v.trim().is_empty()) {
                *slot = value.trim().to_string();
            }
        }

        if let Some(turns) = parse_var(&lookup, "JARVIS_MAX_TURNS")? {
            config.max_turns = turns;
        }
        if let Some(iterations) = parse_var(&lookup, "JARVIS_MAX_TOOL_ITERATIONS")? {
            config.max_tool_iterations = iterations;
        }
        if let Some(secs) = parse_var(&lookup, "JARVIS_REQUEST_TIMEOUT_SECS")? {
            config.request_timeout_secs = secs;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check invariants that the agent loop relies on.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(JarvisError::Configuration("model must not be empty".into()));
        }
        if self.max_turns == 0 {
            return Err(JarvisError::Configuration(
                "max_turns must be at least 1".into(),
            ));
        }
        if self.max_tool_iterations == 0 {
            return Err(JarvisError::Configuration(
                "max_tool_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_ollama_base_url(mut self, url: impl Into<String>) -> Self {
        self.ollama_base_url = url.into();
        self
    }

    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn with_max_tool_iterations(mut self, max_tool_iterations: usize) -> Self {
        self.max_tool_iterations = max_tool_iterations;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|e| {
            JarvisError::Configuration(format!("{key}: cannot parse '{raw}': {e}"))
        }),
    }
}
