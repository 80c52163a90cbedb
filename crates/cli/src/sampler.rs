//! Payload acquisition: fetch one JSON document and pick a sample value.
//!
//! The run controller drives these three steps in order so the progress
//! reporter can update its stage message between them: fetch the body,
//! parse it as JSON, then extract the representative sample.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::GenError;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Build the HTTP client used for the single GET request of a run.
pub fn build_client() -> Result<reqwest::Client, GenError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|err| GenError::Fetch(format!("could not build HTTP client: {err}")))
}

/// GET the endpoint and return the response body as text.
///
/// Non-2xx statuses are failures; the body is not inspected in that case.
pub async fn fetch_body(client: &reqwest::Client, url: &Url) -> Result<String, GenError> {
    debug!(%url, "fetching API payload");
    let response = client
        .get(url.as_str())
        .send()
        .await
        .map_err(|err| GenError::Fetch(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(GenError::Fetch(format!(
            "{url} responded with status {status}"
        )));
    }

    response
        .text()
        .await
        .map_err(|err| GenError::Fetch(format!("could not read response body: {err}")))
}

/// Parse the response body as JSON.
pub fn parse_payload(body: &str) -> Result<Value, GenError> {
    serde_json::from_str(body).map_err(|err| GenError::Parse(err.to_string()))
}

/// Pick the representative value type inference will run on.
///
/// Arrays are sampled by their first element, everything else is used
/// as-is. An empty array has nothing to sample and is an error.
pub fn extract_sample(payload: Value) -> Result<Value, GenError> {
    match payload {
        Value::Array(mut items) => {
            if items.is_empty() {
                return Err(GenError::EmptySample);
            }
            debug!(list_len = items.len(), "sampling first element of array payload");
            Ok(items.remove(0))
        }
        other => Ok(other),
    }
}
