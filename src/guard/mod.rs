pub mod base;
pub mod routes;

// Re-export the guard items so code outside can do
// "use crate::guard::{AccessGuard, Decision};".
pub use base::{AccessGuard, Decision};
pub use routes::RouteRule;
