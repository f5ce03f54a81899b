//! Jarvis: a minimal conversational agent loop.
//!
//! Free-text input goes through a stateless completion provider. Replies
//! that start with `TOOL:` are parsed and dispatched to a named tool, the
//! result is written back into a bounded conversation memory, and the
//! provider is asked again until it produces a plain answer.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use jarvis::prelude::*;
//!
//! # async fn example() -> jarvis::error::Result<()> {
//! let config = JarvisConfig::from_env()?;
//! let registry = Arc::new(default_registry(&config, ReminderStore::new())?);
//! let provider = Arc::new(OllamaProvider::from_config(&config)?);
//!
//! let mut agent = Agent::new(provider, registry, &config);
//! let answer = agent.process_query("What's the weather in Paris?").await?;
//! println!("{answer}");
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod memory;
pub mod prelude;
pub mod provider;
pub mod tools;
pub mod types;
