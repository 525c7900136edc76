//! Types for the platform meta endpoints.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::KycStatus;
use crate::types::serde_helpers::{default_on_error, is_truthy, truthy};

/// Details about the calling application, returned by `ping`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationDetails {
    /// Usage quota, shape defined by the platform.
    #[serde(default)]
    pub quota: Value,
    /// The application the credentials belong to.
    pub application: Application,
    /// Identifier of this call.
    pub call: CallInfo,
}

/// Application registered in the XUMM developer console.
#[derive(Debug, Clone, Deserialize)]
pub struct Application {
    /// Application UUID.
    pub uuidv4: String,
    /// Application name.
    pub name: String,
    /// Configured webhook URL.
    #[serde(default)]
    pub webhookurl: Option<String>,
    /// Non-zero when the application is disabled.
    #[serde(default)]
    pub disabled: i64,
}

impl Application {
    /// Whether the application has been disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled != 0
    }
}

/// Per-call identifier.
#[derive(Debug, Clone, Deserialize)]
pub struct CallInfo {
    /// UUID of the call.
    pub uuidv4: String,
}

/// Raw `ping` response.
#[derive(Debug, Clone, Deserialize)]
pub struct Pong {
    /// Always `true` on success.
    #[serde(default)]
    pub pong: bool,
    /// Application details.
    #[serde(default)]
    pub auth: Option<ApplicationDetails>,
}

/// Curated issuers and currencies.
#[derive(Debug, Clone, Deserialize)]
pub struct CuratedAssetsResponse {
    /// Issuer names.
    #[serde(default)]
    pub issuers: Vec<String>,
    /// Currency codes.
    #[serde(default)]
    pub currencies: Vec<String>,
    /// Issuer details keyed by issuer name.
    #[serde(default)]
    pub details: HashMap<String, CuratedIssuer>,
}

/// A curated issuer.
#[derive(Debug, Clone, Deserialize)]
pub struct CuratedIssuer {
    /// Issuer id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Issuer domain.
    #[serde(default)]
    pub domain: Option<String>,
    /// Avatar URL.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Non-zero when shortlisted.
    #[serde(default)]
    pub shortlist: i64,
    /// Currencies keyed by currency code.
    #[serde(default)]
    pub currencies: HashMap<String, CuratedCurrency>,
}

/// A curated currency of an issuer.
#[derive(Debug, Clone, Deserialize)]
pub struct CuratedCurrency {
    /// Currency id.
    pub id: i64,
    /// Owning issuer id.
    pub issuer_id: i64,
    /// Issuer account address.
    pub issuer: String,
    /// Currency code.
    pub currency: String,
    /// Display name.
    pub name: String,
    /// Avatar URL.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Non-zero when shortlisted.
    #[serde(default)]
    pub shortlist: i64,
}

/// Exchange rates for a currency.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesResponse {
    /// Value of one USD in the requested currency.
    #[serde(rename = "USD")]
    pub usd: Decimal,
    /// Value of one XRP in the requested currency.
    #[serde(rename = "XRP")]
    pub xrp: Decimal,
    /// Metadata about the requested currency.
    #[serde(rename = "__meta")]
    pub meta: RatesMeta,
}

/// Rates metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesMeta {
    /// The requested currency.
    pub currency: RatesCurrency,
}

/// Currency description attached to rates.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatesCurrency {
    /// English name.
    pub en: String,
    /// ISO code.
    pub code: String,
    /// Display symbol.
    pub symbol: String,
    /// Number of decimals.
    pub iso_decimals: u32,
}

/// KYC lookup by account address.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycInfoResponse {
    /// The account that was looked up.
    #[serde(default)]
    pub account: Option<String>,
    /// Whether the account owner passed KYC.
    #[serde(default, deserialize_with = "truthy::deserialize")]
    pub kyc_approved: bool,
}

impl KycInfoResponse {
    /// Read an account lookup from any decoded body.
    ///
    /// Bodies that are not objects, or that carry an error marker instead of
    /// the lookup fields, read as not approved.
    pub fn from_body(body: &Value) -> Self {
        Self {
            account: body
                .get("account")
                .and_then(Value::as_str)
                .map(str::to_string),
            kyc_approved: body.get("kycApproved").is_some_and(is_truthy),
        }
    }
}

/// KYC lookup by user token.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycStatusResponse {
    /// Current status.
    #[serde(default, deserialize_with = "default_on_error::deserialize")]
    pub kyc_status: Option<KycStatus>,
    /// Descriptions of every status, keyed by status name.
    #[serde(default)]
    pub possible_statuses: HashMap<String, String>,
}

/// Payload of a KYC lookup by user token.
#[derive(Debug, Clone, Serialize)]
pub struct KycStatusRequest<'a> {
    /// The XUMM user token.
    pub user_token: &'a str,
}

/// An XRPL transaction with computed balance changes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XrplTransaction {
    /// Transaction hash.
    pub txid: String,
    /// Node the transaction was fetched from.
    pub node: String,
    /// Raw transaction JSON.
    pub transaction: Value,
    /// Balance changes keyed by account.
    #[serde(default)]
    pub balance_changes: HashMap<String, Vec<BalanceChange>>,
}

/// A single balance change of an account.
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceChange {
    /// Counterparty (issuer) of the change, empty for XRP.
    #[serde(default)]
    pub counterparty: String,
    /// Currency code.
    pub currency: String,
    /// Signed amount as reported.
    pub value: String,
    /// Human readable amount.
    #[serde(default)]
    pub formatted: Option<FormattedAmount>,
}

/// Human readable amount.
#[derive(Debug, Clone, Deserialize)]
pub struct FormattedAmount {
    /// Formatted value.
    pub value: String,
    /// Formatted currency.
    pub currency: String,
}
