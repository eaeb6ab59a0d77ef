//! Transport layer: HTTP plumbing and wire-format details.

mod error_body;
pub(crate) mod http;
pub(crate) mod oauth_token;
pub mod numbers;
pub mod sms;
pub mod verification;

pub use error_body::ApiErrorDetails;
pub(crate) use error_body::decode_error_body;

use serde::Deserialize;

/// Marker type for endpoints whose success response carries no body.
///
/// Deserializes from any JSON value (including `null`, which the dispatcher
/// substitutes for an absent body), so callers never see a parse error for an
/// intentionally empty response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyResponse;

impl<'de> Deserialize<'de> for EmptyResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde::de::IgnoredAny::deserialize(deserializer)?;
        Ok(Self)
    }
}
