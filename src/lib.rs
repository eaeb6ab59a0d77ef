//! Typed Rust client for the Sinch REST APIs.
//!
//! The crate is organized in layers: a domain layer of validated types, a
//! transport layer for wire-format details, an auth layer covering the
//! platform's two credential schemes (OAuth2 client-credentials bearer
//! tokens and application-signed requests), and a client layer orchestrating
//! requests. Inbound webhook callbacks are verified with the validators in
//! [`webhooks`] and [`ApplicationSigner::verify_request`].
//!
//! ```rust,no_run
//! use sinch::transport::sms::{BatchRequest, TextBatchRequest};
//! use sinch::SinchClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sinch::Error> {
//!     let client = SinchClient::builder()
//!         .client_credentials("key-id", "key-secret")?
//!         .project_id("project-id")?
//!         .build()?;
//!
//!     let request = BatchRequest::Text(TextBatchRequest {
//!         to: vec!["+15551234567".to_owned()],
//!         from: None,
//!         body: "hello".to_owned(),
//!         delivery_report: None,
//!     });
//!     let batch = client.sms()?.send_batch(&request).await?;
//!     println!("sent batch {}", batch.id());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

mod auth;
mod clock;
pub mod client;
pub mod domain;
pub mod transport;
pub mod webhooks;

pub use auth::{ApplicationSigner, AuthError, SIGNED_SCHEME, TIMESTAMP_HEADER};
pub use client::{
    Error, NumbersClient, SinchClient, SinchClientBuilder, SmsClient, VerificationClient,
};
pub use domain::{
    AppKey, AppSecret, BearerToken, KeyId, KeySecret, PageStart, Password, ProjectId, Region,
    Username, ValidationError, is_last_page, is_last_page_by_count,
};
pub use transport::{ApiErrorDetails, EmptyResponse};
