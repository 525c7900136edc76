//! Trait definition for the XUMM platform API.
//!
//! The [`XummApi`] trait abstracts the platform operations so code using the
//! client can be tested against a mock implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use xumm_api_client::platform::XummApi;
//!
//! async fn require_kyc<C: XummApi>(client: &C, account: &str) -> Result<bool, xumm_api_client::XummError> {
//!     Ok(client.get_kyc_status(account).await?.is_successful())
//! }
//! ```

use std::future::Future;

use crate::error::XummError;
use crate::platform::XummRestClient;
use crate::platform::meta::{
    ApplicationDetails, CuratedAssetsResponse, RatesResponse, XrplTransaction,
};
use crate::types::KycStatus;

/// Trait defining the XUMM platform operations.
///
/// All methods are async and return `Result<T, XummError>`.
pub trait XummApi: Send + Sync {
    /// Check the credentials and get the application details.
    fn ping(&self) -> impl Future<Output = Result<ApplicationDetails, XummError>> + Send;

    /// Get the curated issuers and currencies.
    fn get_curated_assets(
        &self,
    ) -> impl Future<Output = Result<CuratedAssetsResponse, XummError>> + Send;

    /// Get rates for a currency code.
    fn get_rates(
        &self,
        currency_code: &str,
    ) -> impl Future<Output = Result<RatesResponse, XummError>> + Send;

    /// Get the KYC status of a user token or account.
    fn get_kyc_status(
        &self,
        user_token_or_account: &str,
    ) -> impl Future<Output = Result<KycStatus, XummError>> + Send;

    /// Get an XRPL transaction by hash.
    fn get_transaction(
        &self,
        tx_hash: &str,
    ) -> impl Future<Output = Result<XrplTransaction, XummError>> + Send;
}

impl XummApi for XummRestClient {
    async fn ping(&self) -> Result<ApplicationDetails, XummError> {
        XummRestClient::ping(self).await
    }

    async fn get_curated_assets(&self) -> Result<CuratedAssetsResponse, XummError> {
        XummRestClient::get_curated_assets(self).await
    }

    async fn get_rates(&self, currency_code: &str) -> Result<RatesResponse, XummError> {
        XummRestClient::get_rates(self, currency_code).await
    }

    async fn get_kyc_status(&self, user_token_or_account: &str) -> Result<KycStatus, XummError> {
        XummRestClient::get_kyc_status(self, user_token_or_account).await
    }

    async fn get_transaction(&self, tx_hash: &str) -> Result<XrplTransaction, XummError> {
        XummRestClient::get_transaction(self, tx_hash).await
    }
}
