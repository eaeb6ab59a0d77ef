//! Nonce-based webhook signature validation (Conversation-style callbacks).

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::auth::header_value;

type HmacSha256 = Hmac<Sha256>;

pub const NONCE_HEADER: &str = "x-sinch-webhook-signature-nonce";
pub const TIMESTAMP_HEADER: &str = "x-sinch-webhook-signature-timestamp";
pub const SIGNATURE_HEADER: &str = "x-sinch-webhook-signature";

/// Validate a nonce-signed webhook callback.
///
/// The platform signs `body.nonce.timestamp` (joined with `.`) with
/// HMAC-SHA256 keyed by the UTF-8 shared secret and sends the base64 result
/// in [`SIGNATURE_HEADER`]. Header lookup is case-insensitive; a missing
/// header means the callback cannot be attributed and yields `false`, never
/// an error.
pub fn validate_nonce_signature(secret: &str, body: &str, headers: &[(String, String)]) -> bool {
    let Some(nonce) = header_value(headers, NONCE_HEADER) else {
        tracing::warn!("webhook rejected: missing {NONCE_HEADER} header");
        return false;
    };
    let Some(timestamp) = header_value(headers, TIMESTAMP_HEADER) else {
        tracing::warn!("webhook rejected: missing {TIMESTAMP_HEADER} header");
        return false;
    };
    let Some(signature) = header_value(headers, SIGNATURE_HEADER) else {
        tracing::warn!("webhook rejected: missing {SIGNATURE_HEADER} header");
        return false;
    };

    let signed = format!("{body}.{nonce}.{timestamp}");
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(signed.as_bytes());
    let computed = BASE64.encode(mac.finalize().into_bytes());

    bool::from(computed.as_bytes().ct_eq(signature.as_bytes()))
}
