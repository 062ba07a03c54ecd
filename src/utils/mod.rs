pub mod logger;

// Re-export so code outside can do "use crate::utils::init_logging;".
pub use logger::init_logging;
