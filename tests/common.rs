use std::sync::Arc;

use base64::{engine::general_purpose, Engine as _};
use cepex_session::config::{Config, ConfigV1};
use cepex_session::session::Session;
use cepex_session::storage::file_storage::{FileStorage, FileStorageConfig};
use cepex_session::storage::memory_storage::MemoryStorage;
use figment::{
    providers::{Format, Yaml},
    Figment,
};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tempfile::TempDir;

pub const TEST_SECRET: &str = "test-secret";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub role: String,
    pub exp: i64,
}

pub const TEST_CONFIG: &str = r#"
version: "1.0.0"
logging:
  level: "debug"
  format: "json"
storage:
  enabled: false
guard:
  login_path: "/login"
  default_path: "/"
  routes:
    - path: "/login"
      public: true
    - path: "/"
    - path: "/usuarios"
      roles: ["ADMIN"]
    - path: "/atividades"
    - path: "/monitorias"
    - path: "/projetos-pesquisa"
    - path: "/projetos-extensao"
    - path: "/aprovacoes"
    - path: "/certificados"
"#;

pub fn load_test_config() -> ConfigV1 {
    let config: Config = Figment::new()
        .merge(Yaml::string(TEST_CONFIG))
        .extract()
        .expect("Failed to parse test config YAML");

    match config {
        Config::ConfigV1(cfg) => cfg,
    }
}

/// A signed, well-formed bearer token the way the backend issues them.
pub fn issue_token(sub: &str, user_id: &str, role: &str) -> String {
    let claims = Claims {
        sub: sub.to_string(),
        user_id: user_id.to_string(),
        role: role.to_string(),
        exp: 4102444800,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_ref()),
    )
    .expect("JWT should encode")
}

/// A structurally valid token carrying an arbitrary payload, for exercising
/// the missing-claim failure modes.
pub fn token_with_payload(payload: &Value) -> String {
    let header = general_purpose::URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = general_purpose::URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{payload}.fake-signature")
}

/// A file-backed token slot in a fresh temp directory. Keep the `TempDir`
/// alive for the duration of the test.
pub fn file_slot() -> (TempDir, Arc<FileStorage>) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let storage = FileStorage::new(&FileStorageConfig {
        path: dir.path().join("token").display().to_string(),
    });
    (dir, Arc::new(storage))
}

pub fn logged_out_session() -> Session {
    Session::bootstrap(Arc::new(MemoryStorage::new()))
}

pub fn authenticated_session(sub: &str, user_id: &str, role_claim: &str) -> Session {
    let mut session = logged_out_session();
    session
        .login(&issue_token(sub, user_id, role_claim))
        .expect("fixture token should decode");
    session
}
