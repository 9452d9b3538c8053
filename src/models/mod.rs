// Models module
// Request and response bodies for the three endpoints

pub mod counter;
pub mod sign;
pub mod user;

// Re-export commonly used types
pub use counter::{CounterRequest, CounterResponse};
pub use sign::{SignRequest, SignResponse};
pub use user::{UserRequest, UserResponse};
