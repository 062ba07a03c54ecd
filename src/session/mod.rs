pub mod error;
pub mod store;

// Re-export the session items so code outside can do
// "use crate::session::{Session, SessionError};".
pub use error::SessionError;
pub use store::Session;
