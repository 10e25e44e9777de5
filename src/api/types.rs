use serde::Deserialize;
use serde_json::Value;

/// Every JSON endpoint wraps its payload as `{code, message, data}`.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub code: i64,
    #[serde(default, alias = "msg")]
    pub message: String,
    pub data: Option<Value>,
    pub result: Option<Value>,
}

impl ApiEnvelope {
    /// The payload: `data`, else `result`, else `null`.
    pub fn into_payload(self) -> Value {
        self.data.or(self.result).unwrap_or(Value::Null)
    }
}
