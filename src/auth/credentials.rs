//! Credential management for XUMM API authentication.

use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};

use crate::error::XummError;

/// Default environment variable holding the API key.
pub const API_KEY_VAR: &str = "XUMM_APIKEY";
/// Default environment variable holding the API secret.
pub const API_SECRET_VAR: &str = "XUMM_APISECRET";

static UUID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}$")
        .expect("static pattern compiles")
});

/// Check that a credential is a lowercase 8-4-4-4-12 hex identifier.
pub fn is_valid_credential(value: &str) -> bool {
    UUID_RE.is_match(value)
}

/// API credentials containing the key and secret.
///
/// Both values are validated on construction and never change afterwards.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret.
    ///
    /// Returns [`XummError::InvalidCredentials`] unless both values are
    /// lowercase UUIDs.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self, XummError> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if !is_valid_credential(&api_key) || !is_valid_credential(&api_secret) {
            return Err(XummError::InvalidCredentials);
        }

        Ok(Self {
            api_key,
            api_secret: SecretString::from(api_secret),
        })
    }

    /// The API key (sent as `x-api-key`).
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the API secret (sent as `x-api-secret`).
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize where credentials come from,
/// for example a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

impl CredentialsProvider for Credentials {
    fn get_credentials(&self) -> &Credentials {
        self
    }
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self, XummError> {
        Ok(Self {
            credentials: Credentials::new(api_key, api_secret)?,
        })
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads from `XUMM_APIKEY` and `XUMM_APISECRET`.
#[derive(Debug)]
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from the default environment variables.
    pub fn from_env() -> Result<Self, XummError> {
        Self::from_env_vars(API_KEY_VAR, API_SECRET_VAR)
    }

    /// Create credentials from custom environment variable names.
    ///
    /// Returns [`XummError::MissingCredentials`] if either variable is unset
    /// and [`XummError::InvalidCredentials`] if a value is malformed.
    pub fn from_env_vars(key_var: &str, secret_var: &str) -> Result<Self, XummError> {
        let read = |var: &str| {
            std::env::var(var).map_err(|_| {
                XummError::MissingCredentials(format!("environment variable {var} not set"))
            })
        };
        let api_key = read(key_var)?;
        let api_secret = read(secret_var)?;

        Ok(Self {
            credentials: Credentials::new(api_key.trim(), api_secret.trim())?,
        })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}
