//! OAuth 1.0a credentials and request signing.
//!
//! Signing is delegated to the `oauth1-request` crate; this module only owns
//! the credential set and hands back `Authorization` header values. Secrets
//! never appear in logs or `Debug` output.

use std::env;
use std::fmt;

use oauth1_request as oauth;

use crate::error::Error;

/// OAuth 1.0a credential set for the registered application and user.
#[derive(Clone)]
pub struct OAuthCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub token: String,
    pub token_secret: String,
}

impl OAuthCredentials {
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token: token.into(),
            token_secret: token_secret.into(),
        }
    }

    /// Load credentials from environment variables.
    ///
    /// Reads `TWITTER_CONSUMER_KEY`, `TWITTER_CONSUMER_SECRET`,
    /// `TWITTER_ACCESS_TOKEN` and `TWITTER_ACCESS_TOKEN_SECRET`.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            consumer_key: required_var("TWITTER_CONSUMER_KEY")?,
            consumer_secret: required_var("TWITTER_CONSUMER_SECRET")?,
            token: required_var("TWITTER_ACCESS_TOKEN")?,
            token_secret: required_var("TWITTER_ACCESS_TOKEN_SECRET")?,
        })
    }

    fn as_token(&self) -> oauth::Token<&str, &str> {
        oauth::Token::from_parts(
            self.consumer_key.as_str(),
            self.consumer_secret.as_str(),
            self.token.as_str(),
            self.token_secret.as_str(),
        )
    }

    pub(crate) fn sign_get(&self, uri: &str) -> String {
        oauth::get(uri, &(), &self.as_token(), oauth::HMAC_SHA1)
    }

    pub(crate) fn sign_post<R: oauth::Request>(&self, uri: &str, request: &R) -> String {
        oauth::post(uri, request, &self.as_token(), oauth::HMAC_SHA1)
    }

    pub(crate) fn sign_put(&self, uri: &str) -> String {
        oauth::put(uri, &(), &self.as_token(), oauth::HMAC_SHA1)
    }

    pub(crate) fn sign_delete(&self, uri: &str) -> String {
        oauth::delete(uri, &(), &self.as_token(), oauth::HMAC_SHA1)
    }
}

impl fmt::Debug for OAuthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthCredentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("token", &self.token)
            .field("token_secret", &"<redacted>")
            .finish()
    }
}

fn required_var(name: &str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::Config(format!("missing environment variable {name}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> OAuthCredentials {
        OAuthCredentials::new("ck", "cs", "t", "ts")
    }

    #[test]
    fn test_authorization_header_shape() {
        let header = credentials().sign_get("https://example.com/webhooks.json");

        assert!(header.starts_with("OAuth oauth_consumer_key=\"ck\""));
        assert!(header.contains("oauth_signature_method=\"HMAC-SHA1\""));
        assert!(header.contains("oauth_token=\"t\""));
        // The secrets only ever participate in the signature, never as params.
        assert!(!header.contains("oauth_consumer_secret"));
        assert!(!header.contains("oauth_token_secret"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let debug = format!("{:?}", credentials());

        assert!(debug.contains("ck"));
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("\"cs\""));
        assert!(!debug.contains("\"ts\""));
    }

    #[test]
    fn test_from_env_missing_variable() {
        env::remove_var("TWITTER_CONSUMER_KEY");
        let result = OAuthCredentials::from_env();

        assert!(matches!(result, Err(Error::Config(_))));
    }
}
