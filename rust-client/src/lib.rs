//! Async client for the Twitter Account Activity webhook-management API.
//!
//! This library covers the webhook lifecycle end to end:
//! - register, list and delete webhook configurations
//! - add, remove and inspect event subscriptions
//! - trigger the server-side CRC validation of a registered webhook
//! - compute the signed response an endpoint must return to a CRC challenge
//!
//! ## Architecture
//!
//! ```text
//! WebhookClient -> OAuth-signed request -> HTTP transport -> status classifier -> ApiResponse | Error
//! ```
//!
//! Every operation takes a `reject_on_error_status` flag: when set, status
//! codes in `[400, 600)` reject with an error that carries the full response;
//! when unset, every response resolves and the caller inspects the status
//! code itself. Transport failures always reject.
//!
//! ```no_run
//! use activity_webhooks::{OAuthCredentials, WebhookClient};
//!
//! # async fn run() -> Result<(), activity_webhooks::Error> {
//! let credentials = OAuthCredentials::from_env()?;
//! let client = WebhookClient::new(credentials)?;
//!
//! let response = client
//!     .create_webhook("https://your.domain/webhook", true)
//!     .await?;
//! println!("registered: {}", response.body);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod crc;
pub mod error;
pub mod message;
pub mod response;

// Re-export commonly used types
pub use auth::OAuthCredentials;
pub use client::WebhookClient;
pub use config::Config;
pub use crc::{response_token, CrcResponse};
pub use error::Error;
pub use response::ApiResponse;
