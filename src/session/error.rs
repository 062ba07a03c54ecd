use thiserror::Error;

use crate::storage::StorageError;
use crate::token::TokenDecodeError;

/// Failures surfaced by `Session::login`. Bootstrap never returns these: a
/// stale stored token is routine and handled in place, while a freshly
/// issued token that will not decode is a contract violation the caller
/// must see.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("login token could not be decoded: {0}")]
    TokenDecode(#[from] TokenDecodeError),

    #[error("token slot could not be written: {0}")]
    Storage(#[from] StorageError),
}
