//! Webhook-management API operations.
//!
//! Each operation builds one signed request, sends it, and pipes the outcome
//! through the status classifier. Calls are fully independent: no shared
//! mutable state, no ordering guarantees, no retries. Timeouts belong to the
//! underlying `reqwest` client.

use std::time::Duration;

use oauth1_request as oauth;
use reqwest::{header, Client, RequestBuilder};
use tracing::{debug, info};
use url::Url;

use crate::auth::OAuthCredentials;
use crate::config::Config;
use crate::error::Error;
use crate::response::{classify, ApiResponse};

/// Form parameters for `POST webhooks.json`.
///
/// Deriving `oauth::Request` keeps the form body and the OAuth signature
/// base string in agreement on parameter encoding.
#[derive(oauth::Request)]
struct RegisterWebhook<'a> {
    url: &'a str,
}

/// Client for the Account Activity webhook-management endpoints.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: Client,
    credentials: OAuthCredentials,
    base_url: String,
}

impl WebhookClient {
    /// Create a client with the default configuration.
    pub fn new(credentials: OAuthCredentials) -> Result<Self, Error> {
        Self::with_config(credentials, Config::default())
    }

    /// Create a client with an explicit configuration.
    pub fn with_config(credentials: OAuthCredentials, config: Config) -> Result<Self, Error> {
        let base = Url::parse(&config.api_base_url).map_err(|e| {
            Error::Config(format!(
                "invalid API base URL {:?}: {e}",
                config.api_base_url
            ))
        })?;

        let http = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .user_agent(concat!("activity-webhooks/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            credentials,
            base_url: base.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Request: `POST webhooks.json`
    ///
    /// Registers `webhook_url` for the provided application. Twitter answers
    /// the registration with an immediate CRC request to that URL.
    pub async fn create_webhook(
        &self,
        webhook_url: &str,
        reject_on_error_status: bool,
    ) -> Result<ApiResponse, Error> {
        let endpoint = format!("{}/webhooks.json", self.base_url);
        let form = RegisterWebhook { url: webhook_url };
        let authorization = self.credentials.sign_post(&endpoint, &form);

        info!(webhook_url = %webhook_url, "create_webhook_request");

        let request = self
            .http
            .post(&endpoint)
            .header(header::AUTHORIZATION, authorization)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(oauth::to_form(&form));

        self.execute(request, reject_on_error_status).await
    }

    /// Request: `DELETE webhooks/:webhook_id.json`
    pub async fn delete_webhook(
        &self,
        webhook_id: &str,
        reject_on_error_status: bool,
    ) -> Result<ApiResponse, Error> {
        let endpoint = format!("{}/webhooks/{}.json", self.base_url, webhook_id);
        let authorization = self.credentials.sign_delete(&endpoint);

        info!(webhook_id = %webhook_id, "delete_webhook_request");

        let request = self
            .http
            .delete(&endpoint)
            .header(header::AUTHORIZATION, authorization);

        self.execute(request, reject_on_error_status).await
    }

    /// Request: `GET webhooks.json`
    ///
    /// Lists all webhook configurations registered to the application.
    pub async fn get_webhooks(&self, reject_on_error_status: bool) -> Result<ApiResponse, Error> {
        let endpoint = format!("{}/webhooks.json", self.base_url);
        let authorization = self.credentials.sign_get(&endpoint);

        info!("get_webhooks_request");

        let request = self
            .http
            .get(&endpoint)
            .header(header::AUTHORIZATION, authorization);

        self.execute(request, reject_on_error_status).await
    }

    /// Request: `POST webhooks/:webhook_id/subscriptions.json`
    ///
    /// Subscribes the authorizing user's events to the webhook.
    pub async fn add_subscription(
        &self,
        webhook_id: &str,
        reject_on_error_status: bool,
    ) -> Result<ApiResponse, Error> {
        let endpoint = format!("{}/webhooks/{}/subscriptions.json", self.base_url, webhook_id);
        let authorization = self.credentials.sign_post(&endpoint, &());

        info!(webhook_id = %webhook_id, "add_subscription_request");

        let request = self
            .http
            .post(&endpoint)
            .header(header::AUTHORIZATION, authorization);

        self.execute(request, reject_on_error_status).await
    }

    /// Request: `DELETE webhooks/:webhook_id/subscriptions.json`
    pub async fn delete_subscription(
        &self,
        webhook_id: &str,
        reject_on_error_status: bool,
    ) -> Result<ApiResponse, Error> {
        let endpoint = format!("{}/webhooks/{}/subscriptions.json", self.base_url, webhook_id);
        let authorization = self.credentials.sign_delete(&endpoint);

        info!(webhook_id = %webhook_id, "delete_subscription_request");

        let request = self
            .http
            .delete(&endpoint)
            .header(header::AUTHORIZATION, authorization);

        self.execute(request, reject_on_error_status).await
    }

    /// Request: `GET webhooks/:webhook_id/subscriptions.json`
    ///
    /// Checks whether the authorizing user has an active subscription on the
    /// webhook. The interesting outcomes are status codes (204, 404, 401),
    /// so callers usually leave `reject_on_error_status` unset here.
    pub async fn get_subscription(
        &self,
        webhook_id: &str,
        reject_on_error_status: bool,
    ) -> Result<ApiResponse, Error> {
        let endpoint = format!("{}/webhooks/{}/subscriptions.json", self.base_url, webhook_id);
        let authorization = self.credentials.sign_get(&endpoint);

        info!(webhook_id = %webhook_id, "get_subscription_request");

        let request = self
            .http
            .get(&endpoint)
            .header(header::AUTHORIZATION, authorization);

        self.execute(request, reject_on_error_status).await
    }

    /// Request: `PUT webhooks/:webhook_id.json`
    ///
    /// Asks Twitter to re-run the CRC validation of the webhook and mark it
    /// valid again on success.
    pub async fn trigger_crc(
        &self,
        webhook_id: &str,
        reject_on_error_status: bool,
    ) -> Result<ApiResponse, Error> {
        let endpoint = format!("{}/webhooks/{}.json", self.base_url, webhook_id);
        let authorization = self.credentials.sign_put(&endpoint);

        info!(webhook_id = %webhook_id, "trigger_crc_request");

        let request = self
            .http
            .put(&endpoint)
            .header(header::AUTHORIZATION, authorization);

        self.execute(request, reject_on_error_status).await
    }

    /// Send a built request and classify its outcome.
    ///
    /// Transport failures reject unconditionally; status codes go through
    /// the rejection policy.
    async fn execute(
        &self,
        request: RequestBuilder,
        reject_on_error_status: bool,
    ) -> Result<ApiResponse, Error> {
        let response = request.send().await?;
        let response = ApiResponse::read(response).await?;

        debug!(
            status_code = response.status_code,
            body_length = response.body.len(),
            "api_response_received"
        );

        classify(response, reject_on_error_status)
    }
}
