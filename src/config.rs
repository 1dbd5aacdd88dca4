//! Runtime configuration, built once at startup and passed by reference.
//!
//! Every knob is an environment variable (optionally via `.env`), merged
//! over serde defaults with figment's `Env` provider. There is no global
//! config state; `main` owns the struct and hands it to the router.

use std::path::PathBuf;

use axum_extra::extract::cookie::Key;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::SoapboxError;

/// Minimum length of `SECRET_KEY`; anything shorter cannot key the
/// session cookie cipher.
const MIN_SECRET_KEY_BYTES: usize = 32;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Comma-separated CORS allow-list; `*` allows any origin.
    pub allowed_origins: String,
    /// Key material for signing/encrypting the session cookie.
    pub secret_key: String,
    /// Static bypass secret for automation. Empty disables the bypass.
    pub bearer_token: String,
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    /// Sentinel file: if it reads `1` at startup, the admin credential is
    /// force-reset to the default and the file is rewritten to `0`.
    pub reset_sentinel: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_string(),
            secret_key: String::new(),
            bearer_token: String::new(),
            database_url: "sqlite:data.db".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            reset_sentinel: PathBuf::from("is_reset_password.txt"),
        }
    }
}

impl Config {
    /// Load from the environment, falling back to defaults field by field.
    pub fn load() -> Result<Self, SoapboxError> {
        let cfg: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&[
                "ALLOWED_ORIGINS",
                "SECRET_KEY",
                "BEARER_TOKEN",
                "DATABASE_URL",
                "LISTEN_ADDR",
                "LOGLEVEL",
                "RESET_SENTINEL",
            ]))
            .extract()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), SoapboxError> {
        if self.secret_key.len() < MIN_SECRET_KEY_BYTES {
            return Err(SoapboxError::InvalidConfig(format!(
                "SECRET_KEY must be at least {MIN_SECRET_KEY_BYTES} bytes"
            )));
        }
        Ok(())
    }

    /// Derive the private-cookie key from `SECRET_KEY`.
    ///
    /// Callers must have validated the key length first; `derive_from`
    /// panics below 32 bytes.
    pub fn cookie_key(&self) -> Key {
        Key::derive_from(self.secret_key.as_bytes())
    }

    /// Parsed CORS allow-list. `None` means wildcard.
    pub fn origins(&self) -> Option<Vec<String>> {
        if self.allowed_origins.trim() == "*" {
            return None;
        }
        let list: Vec<String> = self
            .allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if list.is_empty() { None } else { Some(list) }
    }
}
