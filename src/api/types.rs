//! Analytics payload schema
//!
//! The backend's JSON is validated into these records at the boundary. Required
//! fields fail deserialization when missing; optional fields and sequences
//! tolerate both absence and `null`.

use serde::{Deserialize, Deserializer, Serialize};

/// One row of the strike-level open interest window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrikeRow {
    pub strike: f64,
    #[serde(rename = "callOI")]
    pub call_oi: f64,
    #[serde(rename = "putOI")]
    pub put_oi: f64,
}

/// Options-chain analytics for one symbol, as returned by `/api/data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub symbol: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub expiry: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub underlying: Option<String>,
    pub pcr: f64,
    pub recommendation: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub supports: Vec<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resistances: Vec<f64>,
    #[serde(
        rename = "strikesWindow",
        default,
        deserialize_with = "null_as_default"
    )]
    pub strikes_window: Vec<StrikeRow>,
}

/// Body shape the backend uses to report failures.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a string or a number; empty strings count as absent.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(
        match Option::<TextOrNumber>::deserialize(deserializer)? {
            Some(TextOrNumber::Text(text)) if !text.is_empty() => Some(text),
            Some(TextOrNumber::Number(number)) => Some(number.to_string()),
            _ => None,
        },
    )
}
