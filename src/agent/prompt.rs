//! System prompt template and per-iteration message assembly.

use crate::memory::TrimmingSession;
use crate::provider::ChatMessage;
use crate::tools::ToolRegistry;

/// Fixed text preceding the tool listing.
pub const SYSTEM_PROMPT_HEADER: &str = r#"
You are J.A.R.V.I.S., a helpful and intelligent assistant.

You have access to the following tools. When you believe a tool is necessary to answer a user's question, you must respond in the following format, with the arguments as a valid JSON object:

TOOL: <tool_name>('{<json_arguments>}')

For example, to get the weather in London, you would respond with:

TOOL: get_weather_for_city('{"city_name": "London"}')

Here are the available tools:

"#;

/// Fixed text following the tool listing.
pub const SYSTEM_PROMPT_TRAILER: &str = r#"

If you can answer the user's question without using a tool, you should respond directly in a conversational manner.
"#;

/// Render the system prompt: header, one `- <name>: <description>` line per tool, trailer.
pub fn build_system_prompt(registry: &ToolRegistry) -> String {
    format!(
        "{SYSTEM_PROMPT_HEADER}{}{SYSTEM_PROMPT_TRAILER}",
        registry.describe_all()
    )
}

/// The full prompt for one provider call: system prompt, then the memory snapshot.
pub fn build_messages(registry: &ToolRegistry, memory: &TrimmingSession) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(memory.len() + 1);
    messages.push(ChatMessage::system(build_system_prompt(registry)));
    messages.extend(memory.iter().map(ChatMessage::from));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ChatRole;
    use crate::types::Role;

    fn registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry
            .register_fn("get_weather_for_city", "Fetches the weather.", |_| async {
                Ok(String::new())
            })
            .register_fn("get_reminders", "Lists reminders.", |_| async {
                Ok(String::new())
            });
        registry
    }

    #[test]
    fn system_prompt_lists_tools_between_header_and_trailer() {
        let prompt = build_system_prompt(&registry());
        let expected_listing =
            "Here are the available tools:\n\n- get_weather_for_city: Fetches the weather.\n- get_reminders: Lists reminders.\n\n\nIf you can answer";
        assert!(prompt.starts_with("\nYou are J.A.R.V.I.S."));
        assert!(prompt.contains(expected_listing), "{prompt}");
        assert!(prompt.ends_with("in a conversational manner.\n"));
    }

    #[test]
    fn messages_start_with_system_then_replay_memory() {
        let mut memory = TrimmingSession::new(3);
        memory.add(Role::User, "weather in Paris?");
        memory.add(Role::Assistant, "TOOL: get_weather_for_city('{\"city_name\": \"Paris\"}')");
        memory.add(Role::ToolResult, "Sunny");

        let messages = build_messages(&registry(), &memory);
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, ChatRole::System);
        assert_eq!(messages[1].content, "weather in Paris?");
        assert_eq!(messages[2].role, ChatRole::Assistant);
        assert_eq!(messages[3].role, ChatRole::User);
        assert_eq!(messages[3].content, "TOOL_RESULT: Sunny");
    }
}
