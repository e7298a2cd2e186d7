//! Request and response bodies for the HTTP API.

use crate::history::HistoryEntry;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Body of `POST /api/eval`.
#[derive(Debug, Default, Deserialize)]
pub struct EvalRequest {
    #[serde(default)]
    pub expr: String,
}

/// Body of `POST /api/calc`. Operands may be JSON numbers or strings.
#[derive(Debug, Default, Deserialize)]
pub struct CalcRequest {
    #[serde(default)]
    pub a: Option<JsonValue>,
    #[serde(default)]
    pub op: Option<JsonValue>,
    #[serde(default)]
    pub b: Option<JsonValue>,
}

/// Parses a request body, treating anything unreadable as an empty object.
pub fn parse_lenient<T: DeserializeOwned + Default>(body: &[u8]) -> T {
    serde_json::from_slice(body).unwrap_or_default()
}

/// Text form of a JSON operand.
///
/// Strings are taken verbatim and numbers use their JSON spelling. Any
/// other value, including a missing one, yields text that no decimal parser
/// accepts.
pub fn operand_text(value: Option<&JsonValue>) -> String {
    match value {
        Some(JsonValue::String(s)) => s.clone(),
        Some(JsonValue::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
        None => "null".to_string(),
    }
}

/// Envelope for evaluation results and all errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn success(result: String) -> Self {
        Self {
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(error: String) -> Self {
        Self {
            ok: false,
            result: None,
            error: Some(error),
        }
    }
}

/// Body of `GET /api/history`.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    pub ok: bool,
    pub items: Vec<HistoryEntry>,
}
