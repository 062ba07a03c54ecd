pub mod identity;
pub mod roles;

// Re-export the identity type so code outside can do
// "use crate::models::Identity;".
pub use identity::Identity;
