//! API response type and status-code classification.
//!
//! Every operation funnels its outcome through [`classify`]: transport
//! failures are surfaced before this point, so the classifier only decides
//! whether an HTTP status code resolves or rejects the call.

use serde::de::DeserializeOwned;

use crate::error::Error;

/// Response to a webhook-management API call.
///
/// `status_text` is the canonical reason phrase for the status code. Codes
/// without a registered phrase (for example 600) carry `None`, which renders
/// as the literal `null` in a `StatusCodeError` message.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code
    pub status_code: u16,

    /// Reason phrase for the status code, if one is registered
    pub status_text: Option<String>,

    /// Raw response body
    pub body: String,
}

impl ApiResponse {
    /// Read a `reqwest` response into an owned `ApiResponse`.
    ///
    /// A body that cannot be read counts as a transport failure.
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self, reqwest::Error> {
        let status = response.status();
        let body = response.text().await?;

        Ok(ApiResponse {
            status_code: status.as_u16(),
            status_text: status.canonical_reason().map(str::to_owned),
            body,
        })
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    pub(crate) fn status_text_or_null(&self) -> &str {
        self.status_text.as_deref().unwrap_or("null")
    }
}

/// Whether a status code falls in the error range `[400, 600)`.
///
/// The upper bound is exclusive: exactly 600 is not an error status.
fn is_error_status(status_code: u16) -> bool {
    (400..600).contains(&status_code)
}

/// Resolve or reject a response according to the caller's rejection policy.
///
/// With `reject_on_error_status` unset the response always resolves and the
/// caller inspects the status code itself. With it set, status codes in
/// `[400, 600)` reject with [`Error::Status`] carrying the full response.
pub(crate) fn classify(
    response: ApiResponse,
    reject_on_error_status: bool,
) -> Result<ApiResponse, Error> {
    if reject_on_error_status && is_error_status(response.status_code) {
        return Err(Error::Status { response });
    }

    Ok(response)
}
