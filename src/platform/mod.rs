//! XUMM platform REST API client.
//!
//! Provides the request dispatcher ([`XummRestClient::call`]) and the meta
//! endpoints built on it.
//!
//! # Trait-based API
//!
//! The [`XummApi`] trait abstracts the endpoint operations, enabling mock
//! implementations for testing.

mod client;
pub mod endpoints;
pub mod meta;
mod request;
mod response;
mod traits;

pub use client::{API_KEY_HEADER, API_SECRET_HEADER, XummRestClient, XummRestClientBuilder};
pub use request::{HttpMethod, Request, RequestBody};
pub use response::ApiResponse;
pub use traits::XummApi;
