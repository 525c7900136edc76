//! Authentication module for the XUMM API.
//!
//! XUMM authenticates every platform call with a static key/secret pair sent
//! as `x-api-key` and `x-api-secret` headers. This module provides:
//! - Credential validation (both values must be lowercase UUIDs)
//! - Secure secret storage
//! - Providers for static and environment-based credentials

mod credentials;

pub use credentials::{
    API_KEY_VAR, API_SECRET_VAR, Credentials, CredentialsProvider, EnvCredentials,
    StaticCredentials, is_valid_credential,
};
