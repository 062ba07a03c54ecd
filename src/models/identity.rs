use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The `Identity` struct is the decoded, in-memory representation of who is
/// logged in. It is derived entirely from the bearer token and recomputed
/// whenever the token changes; it is never stored on its own.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// The user-id claim of the token.
    pub id: String,
    /// The login name (subject claim) of the token.
    pub login: String,
    /// The role names granted to this identity. Unordered; membership order
    /// must never affect an authorization decision.
    pub roles: HashSet<String>,
}

impl Identity {
    /// Construct a new `Identity` from its parts.
    pub fn new<I, S>(id: impl Into<String>, login: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Identity {
            id: id.into(),
            login: login.into(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if any of the candidate role names is held by this
    /// identity. Comparison is by name; unknown roles simply never match.
    pub fn has_any_role<I, S>(&self, candidate_roles: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        candidate_roles
            .into_iter()
            .any(|role| self.roles.contains(role.as_ref()))
    }
}
