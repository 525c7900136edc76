//! Custom serde helpers for XUMM's loosely typed response fields.
//!
//! The platform API is consumed by JavaScript clients first, so some flags
//! arrive as numbers or strings rather than booleans. These modules provide
//! reusable serde helpers for those fields.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Evaluate a JSON value the way a JavaScript condition would.
///
/// `null`, `false`, `0`, `NaN` and `""` are falsy; everything else,
/// including empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Deserialize any JSON value into a `bool` using JavaScript truthiness.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use xumm_api_client::types::serde_helpers::truthy;
///
/// #[derive(Deserialize, Debug)]
/// struct Info {
///     #[serde(deserialize_with = "truthy::deserialize", default)]
///     approved: bool,
/// }
///
/// let info: Info = serde_json::from_str(r#"{"approved":1}"#).unwrap();
/// assert!(info.approved);
///
/// let info: Info = serde_json::from_str(r#"{"approved":""}"#).unwrap();
/// assert!(!info.approved);
///
/// let info: Info = serde_json::from_str("{}").unwrap();
/// assert!(!info.approved);
/// ```
pub mod truthy {
    use super::*;

    /// Deserialize a value of any JSON type into its truthiness.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(is_truthy(&value))
    }
}

/// Deserialize to `None` instead of failing on invalid/unexpected data.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use xumm_api_client::types::serde_helpers::default_on_error;
/// use xumm_api_client::types::KycStatus;
///
/// #[derive(Deserialize, Debug)]
/// struct Response {
///     #[serde(deserialize_with = "default_on_error::deserialize", default)]
///     status: Option<KycStatus>,
/// }
///
/// let response: Response = serde_json::from_str(r#"{"status":42}"#).unwrap();
/// assert!(response.status.is_none());
/// ```
pub mod default_on_error {
    use super::*;

    /// Deserialize a value, returning None if deserialization fails.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: serde::de::DeserializeOwned,
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(serde_json::from_value(value).ok())
    }
}
