//! Single-header webhook signature validation (Numbers-style callbacks).

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::auth::header_value;

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_HEADER: &str = "x-sinch-signature";

/// Validate a single-secret webhook callback.
///
/// The platform sends a hex-encoded HMAC-SHA256 of the raw body, keyed by the
/// shared secret, in [`SIGNATURE_HEADER`]. Missing secret, missing body, or a
/// missing/undecodable header yields `false`, never an error.
pub fn validate_secret_signature(secret: &str, body: &[u8], headers: &[(String, String)]) -> bool {
    if secret.is_empty() {
        tracing::warn!("webhook rejected: no shared secret configured");
        return false;
    }
    if body.is_empty() {
        tracing::warn!("webhook rejected: empty body");
        return false;
    }
    let Some(signature) = header_value(headers, SIGNATURE_HEADER) else {
        tracing::warn!("webhook rejected: missing {SIGNATURE_HEADER} header");
        return false;
    };
    let Ok(presented) = hex::decode(signature) else {
        tracing::warn!("webhook rejected: {SIGNATURE_HEADER} is not valid hex");
        return false;
    };

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(body);
    let computed = mac.finalize().into_bytes();

    bool::from(computed.as_slice().ct_eq(&presented))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "numbers-shared-secret";
    const BODY: &[u8] = br#"{"eventId":"abc123","phoneNumber":"+12025550134"}"#;
    const SIGNATURE: &str = "c83372f787d2a7f069aedbbf8bf3575e377037e7e45aeaf7e1bff9deab30aec8";

    fn headers() -> Vec<(String, String)> {
        vec![(SIGNATURE_HEADER.to_owned(), SIGNATURE.to_owned())]
    }

    #[test]
    fn valid_signature_is_accepted() {
        assert!(validate_secret_signature(SECRET, BODY, &headers()));
    }

    #[test]
    fn hex_decoding_is_case_insensitive() {
        // The comparison happens on decoded bytes, not on hex text.
        let headers = vec![(SIGNATURE_HEADER.to_owned(), SIGNATURE.to_uppercase())];
        assert!(validate_secret_signature(SECRET, BODY, &headers));
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let headers = vec![("X-Sinch-Signature".to_owned(), SIGNATURE.to_owned())];
        assert!(validate_secret_signature(SECRET, BODY, &headers));
    }

    #[test]
    fn missing_secret_body_or_header_yields_false() {
        assert!(!validate_secret_signature("", BODY, &headers()));
        assert!(!validate_secret_signature(SECRET, b"", &headers()));
        assert!(!validate_secret_signature(SECRET, BODY, &[]));
    }

    #[test]
    fn undecodable_signature_yields_false() {
        let headers = vec![(SIGNATURE_HEADER.to_owned(), "not-hex!".to_owned())];
        assert!(!validate_secret_signature(SECRET, BODY, &headers));
    }

    #[test]
    fn tampered_body_or_wrong_secret_is_rejected() {
        let mut tampered = BODY.to_vec();
        tampered[2] = b'E';
        assert!(!validate_secret_signature(SECRET, &tampered, &headers()));
        assert!(!validate_secret_signature("other-secret", BODY, &headers()));
    }
}
