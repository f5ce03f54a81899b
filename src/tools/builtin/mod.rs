//! Built-in assistant tools.
//!
//! Provides `get_weather_for_city` (Open-Meteo), `set_reminder` and
//! `get_reminders` (backed by an injected [`ReminderStore`]) and
//! `web_search` (MediaWiki search). [`default_registry`] registers them in
//! that order, which is the order the model sees them in the prompt.
//!
//! # Usage
//!
//! ```rust,no_run
//! use jarvis::config::JarvisConfig;
//! use jarvis::tools::builtin::{default_registry, ReminderStore};
//!
//! # fn example() -> jarvis::error::Result<()> {
//! let registry = default_registry(&JarvisConfig::default(), ReminderStore::new())?;
//! assert_eq!(registry.len(), 4);
//! # Ok(())
//! # }
//! ```

pub mod reminders;
pub mod search;
pub mod weather;

pub use reminders::{get_reminders_tool, set_reminder_tool, ReminderStore};
pub use search::web_search_tool;
pub use weather::WeatherTool;

use std::sync::Arc;

use crate::config::JarvisConfig;
use crate::error::Result;
use crate::provider::http::build_client;
use crate::tools::registry::ToolRegistry;

/// Build the registry with every built-in tool.
pub fn default_registry(config: &JarvisConfig, reminders: ReminderStore) -> Result<ToolRegistry> {
    let client = build_client(config.request_timeout())?;

    let mut registry = ToolRegistry::new();
    registry
        .register(Arc::new(WeatherTool::new(
            client.clone(),
            config.geocoding_base_url.clone(),
            config.forecast_base_url.clone(),
        )))
        .register(set_reminder_tool(reminders.clone()))
        .register(get_reminders_tool(reminders))
        .register(web_search_tool(client, config.wikipedia_api_url.clone()));
    Ok(registry)
}
