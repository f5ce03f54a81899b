//! Typed access to tool call arguments.

use serde_json::{Map, Value};

use crate::error::JarvisError;

/// Named arguments of a tool call, always a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArguments {
    values: Map<String, Value>,
}

impl ToolArguments {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Wrap a JSON value, rejecting anything that is not an object.
    pub fn from_value(value: Value) -> Result<Self, JarvisError> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(JarvisError::InvalidArgument(format!(
                "arguments must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.values)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get a string argument by key.
    pub fn get_str(&self, key: &str) -> Result<&str, JarvisError> {
        self.values
            .get(key)
            .and_then(|v| v.as_str())
            .ok_or_else(|| JarvisError::InvalidArgument(format!("Missing string argument: {key}")))
    }

    /// Deserialize the entire arguments into a typed struct.
    pub fn deserialize<T: serde::de::DeserializeOwned>(&self) -> Result<T, JarvisError> {
        serde_json::from_value(Value::Object(self.values.clone())).map_err(|e| {
            JarvisError::InvalidArgument(format!("Failed to deserialize arguments: {e}"))
        })
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
