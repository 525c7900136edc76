//! Common types used across the XUMM client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;
