//! Platform meta endpoints: ping, curated assets, rates, KYC and transactions.

mod types;

pub use types::*;

use crate::error::XummError;
use crate::platform::XummRestClient;
use crate::platform::endpoints;
use crate::platform::request::Request;
use crate::types::{KycStatus, looks_like_account};

impl XummRestClient {
    /// Check the credentials and get details about the calling application.
    ///
    /// Fails with [`XummError::Api`] when the platform answers with an error
    /// marker and with [`XummError::UnexpectedResponse`] when the answer has
    /// no application details.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use xumm_api_client::platform::XummRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = XummRestClient::from_env()?;
    ///     let details = client.ping().await?;
    ///     println!("{} ({})", details.application.name, details.application.uuidv4);
    ///     Ok(())
    /// }
    /// ```
    pub async fn ping(&self) -> Result<ApplicationDetails, XummError> {
        let pong: Pong = self
            .call_checked(&Request::get(endpoints::PING))
            .await?
            .into_result()?;

        pong.auth.ok_or_else(|| {
            XummError::UnexpectedResponse("Unexpected response for ping request".to_string())
        })
    }

    /// Get the curated issuers and currencies.
    pub async fn get_curated_assets(&self) -> Result<CuratedAssetsResponse, XummError> {
        self.call_checked(&Request::get(endpoints::CURATED_ASSETS))
            .await?
            .into_result()
    }

    /// Get USD and XRP rates for a currency.
    ///
    /// # Arguments
    ///
    /// * `currency_code` - ISO code, trimmed and uppercased before use (`" eur "` becomes `EUR`)
    pub async fn get_rates(&self, currency_code: &str) -> Result<RatesResponse, XummError> {
        let code = currency_code.trim().to_uppercase();
        let endpoint = format!("{}/{}", endpoints::RATES, code);
        self.call_checked(&Request::get(endpoint))
            .await?
            .into_result()
    }

    /// Get the KYC status of a user token or an XRPL account.
    ///
    /// Input starting with `r` is treated as an account and looked up with a
    /// GET; an approved account maps to [`KycStatus::Successful`], anything
    /// else to [`KycStatus::None`]. Any other input is sent as a user token
    /// with a POST and the reported status is returned, [`KycStatus::None`]
    /// when missing or empty. Any JSON body is accepted on the account path;
    /// a body without a truthy `kycApproved` reads as not approved.
    ///
    /// # Arguments
    ///
    /// * `user_token_or_account` - A XUMM user token or an `r...` account address
    pub async fn get_kyc_status(
        &self,
        user_token_or_account: &str,
    ) -> Result<KycStatus, XummError> {
        if looks_like_account(user_token_or_account) {
            let endpoint = format!(
                "{}/{}",
                endpoints::KYC_STATUS,
                user_token_or_account.trim()
            );
            let body = self.call_json(&Request::get(endpoint)).await?;
            Ok(KycStatus::from(KycInfoResponse::from_body(&body).kyc_approved))
        } else {
            let payload = KycStatusRequest {
                user_token: user_token_or_account,
            };
            let request = Request::post(endpoints::KYC_STATUS, &payload)?;
            let status: Option<KycStatusResponse> = self.call(&request).await?;
            Ok(status
                .and_then(|s| s.kyc_status)
                .filter(|s| !s.as_str().is_empty())
                .unwrap_or_default())
        }
    }

    /// Get an XRPL transaction with its balance changes.
    ///
    /// # Arguments
    ///
    /// * `tx_hash` - Transaction hash, trimmed before use
    pub async fn get_transaction(&self, tx_hash: &str) -> Result<XrplTransaction, XummError> {
        let endpoint = format!("{}/{}", endpoints::XRPL_TX, tx_hash.trim());
        self.call_checked(&Request::get(endpoint))
            .await?
            .into_result()
    }
}
