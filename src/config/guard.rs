use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::guard::routes::RouteRule;

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_default_path() -> String {
    "/".to_string()
}

/// The route table plus the two surfaces the guard redirects to. An empty
/// table still guards: every unknown path needs an authenticated session.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
pub struct GuardConfig {
    /// Where unauthenticated navigations land.
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Where authenticated-but-unauthorized navigations land.
    #[serde(default = "default_default_path")]
    pub default_path: String,

    #[serde(default)]
    pub routes: Vec<RouteRule>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        GuardConfig {
            login_path: default_login_path(),
            default_path: default_default_path(),
            routes: Vec::new(),
        }
    }
}
