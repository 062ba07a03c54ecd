use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One view in the route table.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone)]
pub struct RouteRule {
    /// The view path, e.g. "/usuarios".
    pub path: String,

    /// Roles allowed into the view. Empty or omitted means any
    /// authenticated identity may enter.
    #[serde(default)]
    pub roles: HashSet<String>,

    /// Public views are reachable without a session (the login page
    /// must stay reachable while logged out).
    #[serde(default)]
    pub public: bool,
}

impl RouteRule {
    /// A protected view open to any authenticated identity.
    pub fn protected(path: impl Into<String>) -> Self {
        RouteRule {
            path: path.into(),
            roles: HashSet::new(),
            public: false,
        }
    }

    /// A protected view restricted to the given roles.
    pub fn restricted<I, S>(path: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RouteRule {
            path: path.into(),
            roles: roles.into_iter().map(Into::into).collect(),
            public: false,
        }
    }

    /// A view outside the guard, like the login page.
    pub fn public(path: impl Into<String>) -> Self {
        RouteRule {
            path: path.into(),
            roles: HashSet::new(),
            public: true,
        }
    }
}
