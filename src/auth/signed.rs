//! Application-signed requests: HMAC-SHA256 over verb, body digest,
//! content-type, timestamp, and path.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use md5::{Digest, Md5};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::domain::{AppKey, AppSecret};

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the signing timestamp on signed requests and callbacks.
pub const TIMESTAMP_HEADER: &str = "x-timestamp";

/// Scheme token of the signed `Authorization` header. Case-sensitive.
pub const SIGNED_SCHEME: &str = "application";

/// Signs outbound requests and verifies inbound callbacks for one
/// application key/secret pair.
///
/// Signing is synchronous and performs no I/O; the HMAC key is the
/// base64-decoded application secret (decoded once at [`AppSecret`]
/// construction).
#[derive(Debug, Clone)]
pub struct ApplicationSigner {
    app_key: AppKey,
    app_secret: AppSecret,
}

impl ApplicationSigner {
    pub fn new(app_key: AppKey, app_secret: AppSecret) -> Self {
        Self {
            app_key,
            app_secret,
        }
    }

    pub fn app_key(&self) -> &AppKey {
        &self.app_key
    }

    /// Compute the `{app_key}:{signature}` pair for one request.
    ///
    /// `timestamp` is the full signed timestamp field, i.e.
    /// `x-timestamp:<value>`. Empty fields keep their newline separators.
    pub fn sign(
        &self,
        body: &[u8],
        verb: &str,
        path: &str,
        timestamp: &str,
        content_type: &str,
    ) -> String {
        let encoded_body = if body.is_empty() {
            String::new()
        } else {
            BASE64.encode(Md5::digest(body))
        };

        let to_sign = format!(
            "{}\n{}\n{}\n{}\n{}",
            verb.to_uppercase(),
            encoded_body,
            content_type,
            timestamp,
            path
        );

        let mut mac = HmacSha256::new_from_slice(self.app_secret.key_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(to_sign.as_bytes());
        let signature = BASE64.encode(mac.finalize().into_bytes());

        format!("{}:{}", self.app_key.as_str(), signature)
    }

    /// Full `Authorization` header value for an outbound signed request.
    pub fn authorization_header(
        &self,
        body: &[u8],
        verb: &str,
        path: &str,
        timestamp: &str,
        content_type: &str,
    ) -> String {
        format!(
            "{SIGNED_SCHEME} {}",
            self.sign(body, verb, path, timestamp, content_type)
        )
    }

    /// Verify an inbound signed callback.
    ///
    /// Recomputes the signature from the raw received body and the request's
    /// `x-timestamp` and `content-type` headers, then compares constant-time
    /// against the `authorization` header. Missing or malformed headers
    /// degrade to `false`; nothing here throws.
    pub fn verify_request(
        &self,
        verb: &str,
        path: &str,
        headers: &[(String, String)],
        body: &[u8],
    ) -> bool {
        let Some(authorization) = header_value(headers, "authorization") else {
            tracing::warn!("signed callback rejected: missing authorization header");
            return false;
        };
        let Some(timestamp) = header_value(headers, TIMESTAMP_HEADER) else {
            tracing::warn!("signed callback rejected: missing {TIMESTAMP_HEADER} header");
            return false;
        };

        let Some(presented) = authorization
            .strip_prefix(SIGNED_SCHEME)
            .and_then(|rest| rest.strip_prefix(' '))
        else {
            tracing::warn!("signed callback rejected: malformed authorization scheme");
            return false;
        };

        let content_type = header_value(headers, "content-type").unwrap_or("");
        let timestamp_field = format!("{TIMESTAMP_HEADER}:{timestamp}");
        let expected = self.sign(body, verb, path, &timestamp_field, content_type);

        bool::from(expected.as_bytes().ct_eq(presented.as_bytes()))
    }
}

pub(crate) fn header_value<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(header, _)| header.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}
