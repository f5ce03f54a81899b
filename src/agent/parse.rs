//! Tool-call directive parsing.
//!
//! A reply is a tool call when, after trimming, it starts with `TOOL:` and
//! the rest begins with `<tool_name>('<json-object>')`. Text after the
//! closing parenthesis is ignored. Anything without the marker is a final
//! answer. Text with the marker that does not fit the
//! grammar is reported as malformed so the loop can feed the error back.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::JarvisError;
use crate::tools::arguments::{json_kind, ToolArguments};

/// Literal prefix that turns a reply into a tool-call directive.
pub const TOOL_MARKER: &str = "TOOL:";

static CALL_HEAD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^([A-Za-z_][A-Za-z0-9_\-\.]*)\s*\((.*)$")
        .expect("tool call regex must compile")
});

/// A parsed tool invocation. Consumed immediately by the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCall {
    pub name: String,
    pub arguments: ToolArguments,
}

/// Outcome of inspecting one completion reply.
#[derive(Debug)]
pub enum ParsedReply {
    /// No tool marker: the reply is the answer.
    Answer,
    /// A well-formed directive.
    ToolCall(ToolCall),
    /// The marker was present but the directive could not be decoded.
    Malformed(JarvisError),
}

/// Classify a completion reply.
pub fn parse_reply(reply: &str) -> ParsedReply {
    let Some(rest) = reply.trim().strip_prefix(TOOL_MARKER) else {
        return ParsedReply::Answer;
    };
    match parse_directive(rest.trim()) {
        Ok(call) => ParsedReply::ToolCall(call),
        Err(err) => ParsedReply::Malformed(err),
    }
}

fn parse_directive(directive: &str) -> Result<ToolCall, JarvisError> {
    let caps = CALL_HEAD_RE.captures(directive).ok_or_else(|| {
        JarvisError::MalformedToolCall(format!(
            "expected `<tool_name>('<json-object>')` after `{TOOL_MARKER}`, got `{directive}`"
        ))
    })?;

    let name = caps[1].to_string();
    let arguments = parse_arguments(&name, &caps[2])?;
    Ok(ToolCall { name, arguments })
}

/// Decode the text following the opening parenthesis.
///
/// Anything after the closing `')` is commentary and ignored. Each `')`
/// is tried in turn, so the first one that closes a valid JSON object wins.
fn parse_arguments(tool: &str, rest: &str) -> Result<ToolArguments, JarvisError> {
    let rest = rest.trim_start();
    if rest.starts_with(')') {
        return Ok(ToolArguments::default());
    }

    let body = rest
        .strip_prefix('\'')
        .ok_or_else(|| decode_error(tool, "arguments must be a single-quoted JSON object"))?;

    let mut last_err = None;
    for (idx, _) in body.match_indices('\'') {
        if !body[idx + 1..].trim_start().starts_with(')') {
            continue;
        }
        match decode_object(tool, &body[..idx]) {
            Ok(arguments) => return Ok(arguments),
            Err(e) => last_err = Some(e),
        }
    }

    Err(last_err.unwrap_or_else(|| {
        decode_error(tool, "arguments must be a single-quoted JSON object")
    }))
}

fn decode_object(tool: &str, json: &str) -> Result<ToolArguments, JarvisError> {
    match serde_json::from_str::<Value>(json) {
        Ok(Value::Object(map)) => Ok(ToolArguments::new(map)),
        Ok(other) => Err(decode_error(
            tool,
            format!("expected a JSON object, got {}", json_kind(&other)),
        )),
        Err(e) => Err(decode_error(tool, format!("invalid JSON: {e}"))),
    }
}

fn decode_error(tool: &str, message: impl Into<String>) -> JarvisError {
    JarvisError::ArgumentDecode {
        tool: tool.to_string(),
        message: message.into(),
    }
}
