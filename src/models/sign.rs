use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SignRequest {
    pub text: String,
    pub key: String,
}

/// `signature` is the lowercase hex encoding of the MAC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignResponse {
    pub signature: String,
}

impl SignRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.text.is_empty() {
            return Err("Text cannot be empty".to_string());
        }

        if self.key.is_empty() {
            return Err("Key cannot be empty".to_string());
        }

        Ok(())
    }
}
