use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::models::Identity;
use crate::storage::TokenStorage;
use crate::token::decode_identity;

use super::error::SessionError;

/// The client-side session: the bearer token and the identity decoded from
/// it, owned together and replaced together. There is one of these per
/// running client; everything that needs an authorization answer reads it,
/// only login and logout write it.
pub struct Session {
    storage: Arc<dyn TokenStorage>,
    state: Option<(String, Identity)>,
}

impl Session {
    /// Hydrates a session from whatever the storage slot holds. This is the
    /// only constructor, so nothing can consult the session before it has
    /// looked at the slot.
    ///
    /// A missing or unreadable slot starts the session logged out. A stored
    /// token that no longer decodes is purged from the slot so it is not
    /// retried on every start. Never fails outward.
    pub fn bootstrap(storage: Arc<dyn TokenStorage>) -> Self {
        debug!("Hydrating session from the token slot...");

        let token = match storage.load() {
            Ok(token) => token,
            Err(e) => {
                warn!("Could not read the token slot, starting logged out: {}", e);
                None
            }
        };

        let state = token.and_then(|token| match decode_identity(&token) {
            Ok(identity) => {
                info!("Session restored for user '{}'", identity.login);
                Some((token, identity))
            }
            Err(e) => {
                warn!("Stored token does not decode, purging it: {}", e);
                if let Err(e) = storage.clear() {
                    warn!("Could not purge the stale token slot: {}", e);
                }
                None
            }
        });

        if state.is_none() {
            info!("No usable stored token, session starts logged out");
        }

        Session { storage, state }
    }

    /// Installs a freshly issued token: decode it, persist it, then replace
    /// the in-memory state as one unit.
    ///
    /// A token that does not decode or a slot that cannot be written leaves
    /// the session exactly as it was, slot included. A logged-in session
    /// that logs in again is simply replaced.
    pub fn login(&mut self, token: &str) -> Result<&Identity, SessionError> {
        debug!("Decoding login token...");
        let identity = decode_identity(token)?;

        self.storage.save(token)?;

        info!("User '{}' logged in", identity.login);
        let (_, identity) = self.state.insert((token.to_string(), identity));
        Ok(identity)
    }

    /// Drops the token and identity, then clears the slot. Memory is
    /// cleared before the slot is touched, so no reader can observe a
    /// logged-out slot with a logged-in session. A slot that cannot be
    /// cleared is logged and left for the next bootstrap to purge.
    /// Idempotent.
    pub fn logout(&mut self) {
        match self.state.take() {
            Some((_, identity)) => info!("User '{}' logged out", identity.login),
            None => debug!("Logout on an already logged-out session"),
        }

        if let Err(e) = self.storage.clear() {
            warn!("Could not clear the token slot on logout: {}", e);
        }
    }

    /// True iff the identity holds at least one of the candidate roles.
    /// A logged-out session holds no roles.
    pub fn has_role<I, S>(&self, candidates: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match &self.state {
            Some((_, identity)) => identity.has_any_role(candidates),
            None => false,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.state.as_ref().map(|(_, identity)| identity)
    }

    pub fn token(&self) -> Option<&str> {
        self.state.as_ref().map(|(token, _)| token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_some()
    }
}
