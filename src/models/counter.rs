use serde::{Deserialize, Serialize};

/// Body of `POST /redis/incr`. `value` is the signed delta to add.
#[derive(Debug, Clone, Deserialize)]
pub struct CounterRequest {
    pub key: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterResponse {
    pub value: i64,
}

impl CounterRequest {
    /// Both fields are required; an empty key or a zero delta counts as absent.
    pub fn validate(&self) -> Result<(), String> {
        if self.key.is_empty() {
            return Err("Key cannot be empty".to_string());
        }

        if self.value == 0 {
            return Err("Value must be a non-zero integer".to_string());
        }

        Ok(())
    }
}
