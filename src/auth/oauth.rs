//! OAuth2 client-credentials token provider with an expiry-aware cache.

use std::sync::{Arc, PoisonError, RwLock};

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Duration, Utc};

use crate::clock::Clock;
use crate::domain::{KeyId, KeySecret};
use crate::transport::http::{
    HttpBody, HttpMethod, HttpRequest, HttpTransport, TransportFailure,
};
use crate::transport::oauth_token::{decode_token_error, decode_token_response};

/// Seconds subtracted from the server-declared token lifetime so a token is
/// never presented right at its expiry instant. Only applied when the declared
/// lifetime exceeds the margin.
const EXPIRY_MARGIN_SECONDS: i64 = 5;

#[derive(Debug, thiserror::Error)]
/// Failure modes of the OAuth token endpoint.
pub enum AuthError {
    /// The token endpoint answered with a non-success HTTP status.
    ///
    /// The four optional fields mirror the endpoint's error payload; any of
    /// them may be absent, including all at once for non-JSON bodies.
    #[error("token endpoint returned HTTP {status}: {}", .error.as_deref().unwrap_or("no error payload"))]
    TokenEndpoint {
        status: u16,
        error: Option<String>,
        error_verbose: Option<String>,
        error_description: Option<String>,
        error_hint: Option<String>,
    },

    /// The token endpoint reported success but its body was unparsable.
    #[error("token endpoint returned an unparsable success body: {0}")]
    InvalidTokenResponse(#[source] serde_json::Error),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] TransportFailure),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CachedToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

/// Holds the current bearer token behind a lock that is never held across
/// I/O. Concurrent refreshes may race; the last writer wins, and readers
/// always observe a consistent token/expiry pair.
#[derive(Debug, Default)]
pub(crate) struct TokenCache {
    current: RwLock<Option<CachedToken>>,
}

impl TokenCache {
    fn unexpired(&self, now: DateTime<Utc>) -> Option<String> {
        let guard = self
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        guard
            .as_ref()
            .filter(|token| token.expires_at > now)
            .map(|token| token.value.clone())
    }

    fn store(&self, token: CachedToken) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Some(token);
    }

    pub(crate) fn invalidate(&self) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }
}

/// Fetches and caches client-credentials access tokens.
///
/// The hot path (`token(false)` with an unexpired cached value) performs no
/// I/O. A forced call always goes to the network and replaces the cache.
pub(crate) struct OAuthTokenProvider {
    key_id: KeyId,
    key_secret: KeySecret,
    token_url: String,
    http: Arc<dyn HttpTransport>,
    clock: Arc<dyn Clock>,
    cache: TokenCache,
}

impl OAuthTokenProvider {
    pub(crate) fn new(
        key_id: KeyId,
        key_secret: KeySecret,
        token_url: String,
        http: Arc<dyn HttpTransport>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            key_id,
            key_secret,
            token_url,
            http,
            clock,
            cache: TokenCache::default(),
        }
    }

    pub(crate) async fn token(&self, force: bool) -> Result<String, AuthError> {
        let now = self.clock.now_utc();
        if !force {
            if let Some(token) = self.cache.unexpired(now) {
                return Ok(token);
            }
        }

        tracing::debug!(forced = force, "fetching OAuth access token");

        let basic = BASE64.encode(format!(
            "{}:{}",
            self.key_id.as_str(),
            self.key_secret.as_str()
        ));
        let request = HttpRequest {
            method: HttpMethod::Post,
            url: self.token_url.clone(),
            headers: vec![("authorization".to_owned(), format!("Basic {basic}"))],
            body: Some(HttpBody::Form(vec![(
                "grant_type".to_owned(),
                "client_credentials".to_owned(),
            )])),
        };

        let response = self
            .http
            .execute(request)
            .await
            .map_err(AuthError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let payload = decode_token_error(&response.body);
            return Err(AuthError::TokenEndpoint {
                status: response.status,
                error: payload.error,
                error_verbose: payload.error_verbose,
                error_description: payload.error_description,
                error_hint: payload.error_hint,
            });
        }

        let payload =
            decode_token_response(&response.body).map_err(AuthError::InvalidTokenResponse)?;

        let lifetime = if payload.expires_in > EXPIRY_MARGIN_SECONDS {
            payload.expires_in - EXPIRY_MARGIN_SECONDS
        } else {
            payload.expires_in
        };
        self.cache.store(CachedToken {
            value: payload.access_token.clone(),
            expires_at: now + Duration::seconds(lifetime),
        });

        Ok(payload.access_token)
    }

    /// Drop the cached token so no caller is served a credential that is
    /// already known to be rejected.
    pub(crate) fn invalidate(&self) {
        self.cache.invalidate();
    }
}
