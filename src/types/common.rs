//! Common domain types for the XUMM API.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// KYC verification status of a XUMM user or account.
///
/// Statuses the platform does not document yet are kept verbatim in
/// [`KycStatus::Other`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum KycStatus {
    /// No KYC performed (or not approved)
    #[default]
    None,
    /// KYC flow started but not finished
    InProgress,
    /// KYC was rejected
    Rejected,
    /// KYC completed successfully
    Successful,
    /// Any other status reported by the platform
    Other(String),
}

impl KycStatus {
    /// The wire representation of this status.
    pub fn as_str(&self) -> &str {
        match self {
            KycStatus::None => "NONE",
            KycStatus::InProgress => "IN_PROGRESS",
            KycStatus::Rejected => "REJECTED",
            KycStatus::Successful => "SUCCESSFUL",
            KycStatus::Other(s) => s,
        }
    }

    /// Whether KYC has been completed successfully.
    pub fn is_successful(&self) -> bool {
        matches!(self, KycStatus::Successful)
    }
}

impl std::fmt::Display for KycStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KycStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "NONE" => KycStatus::None,
            "IN_PROGRESS" => KycStatus::InProgress,
            "REJECTED" => KycStatus::Rejected,
            "SUCCESSFUL" => KycStatus::Successful,
            other => KycStatus::Other(other.to_string()),
        })
    }
}

impl From<bool> for KycStatus {
    /// Map an approval flag to `SUCCESSFUL` or `NONE`.
    fn from(approved: bool) -> Self {
        if approved {
            KycStatus::Successful
        } else {
            KycStatus::None
        }
    }
}

impl Serialize for KycStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for KycStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let Ok(status) = s.parse::<KycStatus>();
        Ok(status)
    }
}

/// Check whether a string looks like an XRPL account address (classic `r...` form).
///
/// Only the leading character is inspected; no checksum validation is done.
pub fn looks_like_account(value: &str) -> bool {
    value.trim().starts_with('r')
}
