pub mod claims;
pub mod decode;

// Re-export the primary decoding items so code outside can do
// "use crate::token::{decode_identity, TokenDecodeError};".
pub use claims::Claims;
pub use decode::{decode_claims, decode_identity, TokenDecodeError};
