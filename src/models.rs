use serde::{Deserialize, Serialize};

/// Persisted counter document.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CounterData {
    pub count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
