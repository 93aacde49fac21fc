//! CRC challenge-response computation.
//!
//! Twitter verifies ownership of a webhook endpoint by sending a Challenge
//! Response Check: a GET request carrying a `crc_token` query parameter. The
//! endpoint must answer with an HMAC-SHA256 digest of the token, keyed by the
//! consumer secret, proving possession of the secret without transmitting it.

use base64::{engine::general_purpose::STANDARD, Engine};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Body a webhook endpoint returns to a CRC request.
///
/// Serializes to the exact wire shape the API expects:
/// `{"response_token":"sha256=<base64 digest>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrcResponse {
    pub response_token: String,
}

/// Compute the CRC acknowledgement for a challenge token.
///
/// Pure function of its inputs: identical `(crc_token, consumer_secret)`
/// pairs always produce an identical token. Empty strings are accepted and
/// produce the well-defined digest for those inputs.
///
/// # Example
///
/// ```no_run
/// use activity_webhooks::crc::response_token;
///
/// // Inside the GET handler of your webhook endpoint:
/// let crc_token = "challenge-from-twitter";
/// let body = response_token(crc_token, "your consumer secret");
/// // reply with `200 OK` and `body` serialized as JSON
/// ```
pub fn response_token(crc_token: &str, consumer_secret: &str) -> CrcResponse {
    let mut mac = HmacSha256::new_from_slice(consumer_secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(crc_token.as_bytes());

    let digest = STANDARD.encode(mac.finalize().into_bytes());

    CrcResponse {
        response_token: format!("sha256={digest}"),
    }
}
