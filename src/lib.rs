//! # XUMM Client
//!
//! An async Rust client library for the XUMM platform REST API.
//!
//! ## Features
//!
//! - Credential validation up front (key and secret must be UUIDs)
//! - Application details, curated assets, rates, KYC status and XRPL
//!   transaction lookups
//! - Strong typing for all request/response types
//! - Error markers surfaced as typed errors
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use xumm_api_client::platform::XummRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = XummRestClient::from_env()?;
//!     let status = client.get_kyc_status("rPEPPER7kfTD9w2To4CQk6UCfuHM9c6GDY").await?;
//!     println!("KYC: {}", status);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod platform;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, XummError};
pub use platform::{XummApi, XummRestClient};
pub use types::common::KycStatus;

/// Result type alias using XummError
pub type Result<T> = std::result::Result<T, XummError>;
