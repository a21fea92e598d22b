//! BFHL API Client
//!
//! Payload parsing/validation and the POST to the remote endpoint.

use gloo_net::http::Request;
use serde_json::Value;
use thiserror::Error;

use crate::models::BfhlResponse;

/// Remote classification endpoint
pub const API_URL: &str = "https://bajaj-seven-jet.vercel.app/bfhl";

const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Why a submission failed. All variants surface as a one-line banner.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Input text is not valid JSON
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
    /// Valid JSON but no array-typed `data` field
    #[error("Invalid JSON format. Must contain a 'data' array.")]
    Validation,
    /// Request failed or the remote returned an unusable response
    #[error("{0}")]
    Network(String),
}

impl From<gloo_net::Error> for SubmitError {
    fn from(err: gloo_net::Error) -> Self {
        let msg = err.to_string();
        if msg.is_empty() {
            SubmitError::Network(UNKNOWN_ERROR.to_string())
        } else {
            SubmitError::Network(msg)
        }
    }
}

/// Decode the raw textarea contents and check the required shape.
///
/// The full decoded object is returned so extra fields the user typed are
/// forwarded to the endpoint untouched. No network call happens here.
pub fn parse_payload(raw: &str) -> Result<Value, SubmitError> {
    let payload: Value = serde_json::from_str(raw)?;
    match payload.get("data") {
        Some(Value::Array(_)) => Ok(payload),
        _ => Err(SubmitError::Validation),
    }
}

/// POST the validated payload and decode the response body.
pub async fn process_data(payload: &Value) -> Result<BfhlResponse, SubmitError> {
    let response = Request::post(API_URL).json(payload)?.send().await?;
    if !response.ok() {
        return Err(SubmitError::Network(format!(
            "Request failed with status {}",
            response.status()
        )));
    }
    Ok(response.json::<BfhlResponse>().await?)
}
