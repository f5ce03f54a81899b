//! Session-scoped reminder list and the tools that read and write it.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::Deserialize;

use crate::tools::tool::{AgentTool, Tool};

pub const SET_REMINDER: &str = "set_reminder";
pub const GET_REMINDERS: &str = "get_reminders";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SetReminderArgs {
    reminder_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NoArgs {}

/// Shared handle to an in-memory reminder list.
///
/// Cloning yields another handle to the same list. Each agent that should
/// see its own reminders gets its own `ReminderStore::new()`.
#[derive(Debug, Clone, Default)]
pub struct ReminderStore {
    reminders: Arc<Mutex<Vec<String>>>,
}

impl ReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.reminders
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn add(&self, text: impl Into<String>) {
        self.lock().push(text.into());
    }

    pub fn list(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Numbered listing as shown to the user.
    pub fn render(&self) -> String {
        let reminders = self.lock();
        if reminders.is_empty() {
            return "You have no pending reminders.".to_string();
        }
        let mut out = String::from("Here are your pending reminders:");
        for (i, reminder) in reminders.iter().enumerate() {
            out.push_str(&format!("\n{}. {}", i + 1, reminder));
        }
        out
    }
}

/// `set_reminder({"reminder_text": ...})`
pub fn set_reminder_tool(store: ReminderStore) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        SET_REMINDER,
        r#"Sets a reminder for the user. Arguments: {"reminder_text": string}"#,
        move |args| {
            let store = store.clone();
            async move {
                let SetReminderArgs { reminder_text } = args.deserialize()?;
                let reply = format!("Reminder set: '{reminder_text}'.");
                store.add(reminder_text);
                Ok(reply)
            }
        },
    ))
}

/// `get_reminders('{}')`
pub fn get_reminders_tool(store: ReminderStore) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        GET_REMINDERS,
        "Retrieves all of the user's pending reminders. Arguments: {}",
        move |args| {
            let store = store.clone();
            async move {
                let NoArgs {} = args.deserialize()?;
                Ok(store.render())
            }
        },
    ))
}
