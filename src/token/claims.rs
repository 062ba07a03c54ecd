use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Identity;

/// Helper struct to read claims from the bearer token payload.
///
/// `sub`, `userId` and `role` are the claims this client requires; a token
/// missing any of them does not decode. Everything else the backend puts in
/// the payload is ignored.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Login name of the account.
    pub sub: String,
    /// Stable user id, distinct from the login name.
    #[serde(rename = "userId")]
    pub user_id: String,
    /// One role name, or one comma-joined string for multi-role accounts
    /// (e.g. "ADMIN,PROFESSOR").
    pub role: String,
    /// Expiry as seconds since the epoch. Read for display only; the backend
    /// enforces expiry on every request, this client never does.
    pub exp: Option<i64>,
}

impl Claims {
    /// Parse the role claim into a set of role names. This is the only place
    /// the comma-joined form is split; everything downstream works on the
    /// set. Surrounding whitespace is trimmed and empty elements dropped.
    pub fn roles(&self) -> HashSet<String> {
        self.role
            .split(',')
            .map(str::trim)
            .filter(|role| !role.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// The expiry claim as a timestamp, when present and representable.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    /// Build the in-memory identity these claims describe.
    pub fn into_identity(self) -> Identity {
        let roles = self.roles();
        Identity {
            id: self.user_id,
            login: self.sub,
            roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_with_role(role: &str) -> Claims {
        Claims {
            sub: "jdoe".to_string(),
            user_id: "u1".to_string(),
            role: role.to_string(),
            exp: None,
        }
    }

    #[test]
    fn test_single_role_claim() {
        let roles = claims_with_role("STUDENT").roles();
        assert_eq!(roles.len(), 1);
        assert!(roles.contains("STUDENT"));
    }

    #[test]
    fn test_comma_joined_role_claim() {
        let roles = claims_with_role("ADMIN,PROFESSOR").roles();
        assert_eq!(roles.len(), 2);
        assert!(roles.contains("ADMIN"));
        assert!(roles.contains("PROFESSOR"));
    }

    #[test]
    fn test_role_claim_whitespace_and_trailing_commas() {
        let roles = claims_with_role(" ADMIN , PROFESSOR ,").roles();
        assert_eq!(roles.len(), 2);
        assert!(roles.contains("ADMIN"));
        assert!(roles.contains("PROFESSOR"));
    }

    #[test]
    fn test_empty_role_claim_yields_empty_set() {
        assert!(claims_with_role("").roles().is_empty());
    }

    #[test]
    fn test_expires_at_maps_epoch_seconds() {
        let mut claims = claims_with_role("STUDENT");
        claims.exp = Some(4102444800);
        let expires_at = claims.expires_at().expect("expiry should be representable");
        assert_eq!(expires_at.to_rfc3339(), "2100-01-01T00:00:00+00:00");

        claims.exp = None;
        assert!(claims.expires_at().is_none());
    }

    #[test]
    fn test_into_identity_carries_all_claims() {
        let identity = claims_with_role("ADMIN,SECRETARY").into_identity();
        assert_eq!(identity.id, "u1");
        assert_eq!(identity.login, "jdoe");
        assert_eq!(identity.roles.len(), 2);
    }
}
