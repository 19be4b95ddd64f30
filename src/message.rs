// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields stay loosely typed so a wrong-typed but empty value reads as absent
/// instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub system_prompt: Option<Value>,
}

impl ChatRequest {
    /// The user message, if one was sent and it is not empty or falsy.
    pub fn message(&self) -> Option<&Value> {
        self.message.as_ref().filter(|v| is_truthy(v))
    }

    /// The caller's persona rendered as text, if one was sent and it is not
    /// empty or falsy.
    pub fn system_prompt(&self) -> Option<String> {
        self.system_prompt
            .as_ref()
            .filter(|v| is_truthy(v))
            .map(render_text)
    }
}

/// `null`, `false`, zero, `""`, `[]` and `{}` count as nothing sent.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn render_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub usage: String,
}
