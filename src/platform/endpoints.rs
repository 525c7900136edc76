//! XUMM platform REST API endpoint constants.

/// Base URL for the XUMM platform REST API.
pub const XUMM_BASE_URL: &str = "https://xumm.app/api/v1/platform/";

/// Application details and credential check.
pub const PING: &str = "ping";
/// Curated issuers and currencies.
pub const CURATED_ASSETS: &str = "curated-assets";
/// Exchange rates, followed by `/{CURRENCY}`.
pub const RATES: &str = "rates";
/// KYC status, POST with a user token or GET followed by `/{account}`.
pub const KYC_STATUS: &str = "kyc-status";
/// XRPL transaction lookup, followed by `/{hash}`.
pub const XRPL_TX: &str = "xrpl-tx";
