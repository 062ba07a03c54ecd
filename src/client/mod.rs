pub mod api;

// Re-export the client items so code outside can do
// "use crate::client::{ApiClient, LoginProvider};".
pub use api::{ApiClient, ApiConfig, ApiError, LoginProvider};
