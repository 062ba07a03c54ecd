//! Library exports for cepex-session, shared between the binary and tests.

pub mod client;
pub mod config;
pub mod guard;
pub mod models;
pub mod session;
pub mod storage;
pub mod token;
pub mod utils;
