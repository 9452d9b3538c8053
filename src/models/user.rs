use serde::{Deserialize, Serialize};

/// Payload accepted by the user creation endpoint.
/// `age` maps onto an `INT` column, so values outside `i32` are rejected
/// during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRequest {
    pub name: String,
    // i32 to match the INT column: an out-of-range age is a 400 here rather
    // than a database error (500) at insert time
    pub age: i32,
}

/// Identifier generated by the database for the inserted row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
}

impl UserRequest {
    /// Presence checks only. Duplicate names are allowed and negative ages
    /// are passed through unchanged.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Name cannot be empty".to_string());
        }

        if self.age == 0 {
            return Err("Age must be a non-zero integer".to_string());
        }

        Ok(())
    }
}
