use anyhow::{bail, Result};
use serde_json::Value;

/// The three shapes a collaborator payload can take, checked in this order.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResponse {
    /// An object carrying a truthy `error` field. `raw` is `None` when the
    /// field is absent and renders as `undefined`.
    ApplicationError { error: Value, raw: Option<Value> },
    /// A bare JSON string, shown verbatim.
    PlainText(String),
    /// Anything else, shown as pretty-printed JSON.
    StructuredValue(Value),
}

impl AnalysisResponse {
    /// Classifies a parsed payload. A top-level `null` has no fields to
    /// inspect and is rejected like any other failed exchange.
    pub fn decode(payload: Value) -> Result<Self> {
        match payload {
            Value::Null => bail!("backend returned a null payload"),
            Value::Object(mut map) if map.get("error").is_some_and(is_truthy) => {
                let error = map.remove("error").unwrap_or(Value::Null);
                let raw = map.remove("raw");
                Ok(Self::ApplicationError { error, raw })
            }
            Value::String(text) => Ok(Self::PlainText(text)),
            other => Ok(Self::StructuredValue(other)),
        }
    }

    pub fn render(&self) -> serde_json::Result<String> {
        match self {
            Self::ApplicationError { error, raw } => {
                let raw = match raw {
                    Some(raw) => pretty(raw)?,
                    None => "undefined".to_string(),
                };
                Ok(format!("Error: {}\n{raw}", coerce_to_string(error)))
            }
            Self::PlainText(text) => Ok(text.clone()),
            Self::StructuredValue(value) => pretty(value),
        }
    }
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// Largest integer an f64 holds exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Two-space pretty JSON with whole floats written as integers (`2.0` -> `2`).
fn pretty(value: &Value) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&normalize_numbers(value.clone()))
}

fn normalize_numbers(value: Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < MAX_SAFE_INTEGER => Value::from(f as i64),
            _ => Value::Number(n),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, normalize_numbers(v)))
                .collect(),
        ),
        other => other,
    }
}

/// String coercion of the `error` field: objects become `[object Object]`,
/// arrays join their items with `,` and `null` items become empty.
fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            // f64's Display already drops a trailing `.0`
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce_to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
