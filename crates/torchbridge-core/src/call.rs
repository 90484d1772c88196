//! Host call object and call outcome

use crate::{PluginError, PluginResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single method invocation from the host shell
///
/// Options arrive as a JSON object. The typed getters follow the host's
/// defaulting rules: a missing key or a value of the wrong JSON type yields
/// the caller-supplied default instead of an error.
#[derive(Debug, Clone)]
pub struct PluginCall {
    call_id: u64,
    method: String,
    options: Value,
}

impl PluginCall {
    /// Create a call with the given options
    ///
    /// Non-object options are replaced by an empty object.
    pub fn new(call_id: u64, method: impl Into<String>, options: Value) -> Self {
        let options = if options.is_object() {
            options
        } else {
            Value::Object(Map::new())
        };
        Self {
            call_id,
            method: method.into(),
            options,
        }
    }

    /// Parse call options from JSON bytes
    ///
    /// Empty input means "no options".
    pub fn from_json(call_id: u64, method: impl Into<String>, bytes: &[u8]) -> PluginResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::new(call_id, method, Value::Null));
        }
        let options: Value = serde_json::from_slice(bytes)?;
        if !options.is_object() && !options.is_null() {
            return Err(PluginError::SerializationError(
                "call options must be a JSON object".to_string(),
            ));
        }
        Ok(Self::new(call_id, method, options))
    }

    pub fn call_id(&self) -> u64 {
        self.call_id
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn options(&self) -> &Value {
        &self.options
    }

    /// Boolean option, or `default` when absent or not a boolean
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.options
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }

    /// Integer option, or `default` when absent, not an integer, or outside `i32`
    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        self.options
            .get(key)
            .and_then(Value::as_i64)
            .and_then(|v| i32::try_from(v).ok())
            .unwrap_or(default)
    }
}

/// Result delivered back to the host for one call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CallOutcome {
    /// The call succeeded; `data` is an empty object for acknowledgment-only methods
    Resolved { data: Value },
    /// The call failed with a human-readable message
    Rejected { message: String, code: u32 },
}

impl CallOutcome {
    /// Resolve with an empty acknowledgment
    pub fn resolved_empty() -> Self {
        CallOutcome::Resolved {
            data: Value::Object(Map::new()),
        }
    }

    /// Reject from a plugin error
    pub fn rejected(err: &PluginError) -> Self {
        CallOutcome::Rejected {
            message: err.to_string(),
            code: err.error_code(),
        }
    }

    /// Convert a handler result into the host-facing outcome
    pub fn from_result(result: PluginResult<Value>) -> Self {
        match result {
            Ok(data) => CallOutcome::Resolved { data },
            Err(err) => Self::rejected(&err),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, CallOutcome::Resolved { .. })
    }

    /// Data of a resolved call
    pub fn data(&self) -> Option<&Value> {
        match self {
            CallOutcome::Resolved { data } => Some(data),
            CallOutcome::Rejected { .. } => None,
        }
    }

    /// Message of a rejected call
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            CallOutcome::Resolved { .. } => None,
            CallOutcome::Rejected { message, .. } => Some(message),
        }
    }
}
