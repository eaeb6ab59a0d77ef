//! Authentication schemes: static bearer, static basic, OAuth
//! client-credentials, and application-signed requests.
//!
//! The dispatcher only sees [`Authenticator`]; each variant knows how to turn
//! one request into the headers that authenticate it.

mod oauth;
mod signed;

pub use oauth::AuthError;
pub(crate) use oauth::OAuthTokenProvider;
pub use signed::{ApplicationSigner, SIGNED_SCHEME, TIMESTAMP_HEADER};
pub(crate) use signed::header_value;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::clock::Clock;
use crate::domain::{BearerToken, Password, Username};

/// Per-request values an authenticator may need. Only the signed scheme reads
/// them; the other schemes authenticate independently of the request.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestContext<'a> {
    pub verb: &'a str,
    pub path: &'a str,
    pub body: &'a [u8],
    pub content_type: &'a str,
}

pub(crate) enum Authenticator {
    Bearer(BearerToken),
    Basic {
        username: Username,
        password: Password,
    },
    OAuth(OAuthTokenProvider),
    Signed(ApplicationSigner),
}

impl Authenticator {
    /// Whether a forced re-authentication can produce a different credential.
    /// Drives the dispatcher's retry-on-401 decision.
    pub(crate) fn can_refresh(&self) -> bool {
        matches!(self, Self::OAuth(_))
    }

    /// Drop any cached credential known to be rejected, so concurrent
    /// callers stop being served it while the forced refresh is in flight.
    pub(crate) fn invalidate_cached(&self) {
        if let Self::OAuth(provider) = self {
            provider.invalidate();
        }
    }

    /// Headers that authenticate the described request.
    pub(crate) async fn request_headers(
        &self,
        ctx: &RequestContext<'_>,
        force: bool,
        clock: &dyn Clock,
    ) -> Result<Vec<(String, String)>, AuthError> {
        match self {
            Self::Bearer(token) => Ok(vec![(
                "authorization".to_owned(),
                format!("Bearer {}", token.as_str()),
            )]),
            Self::Basic { username, password } => {
                let encoded =
                    BASE64.encode(format!("{}:{}", username.as_str(), password.as_str()));
                Ok(vec![(
                    "authorization".to_owned(),
                    format!("Basic {encoded}"),
                )])
            }
            Self::OAuth(provider) => {
                let token = provider.token(force).await?;
                Ok(vec![(
                    "authorization".to_owned(),
                    format!("Bearer {token}"),
                )])
            }
            Self::Signed(signer) => {
                let timestamp = clock
                    .now_utc()
                    .format("%Y-%m-%dT%H:%M:%SZ")
                    .to_string();
                let timestamp_field = format!("{TIMESTAMP_HEADER}:{timestamp}");
                let header = signer.authorization_header(
                    ctx.body,
                    ctx.verb,
                    ctx.path,
                    &timestamp_field,
                    ctx.content_type,
                );
                Ok(vec![
                    ("authorization".to_owned(), header),
                    (TIMESTAMP_HEADER.to_owned(), timestamp),
                ])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClock;
    use crate::domain::{AppKey, AppSecret};

    fn ctx<'a>() -> RequestContext<'a> {
        RequestContext {
            verb: "POST",
            path: "/verification/v1/verifications",
            body: b"{}",
            content_type: "application/json",
        }
    }

    #[tokio::test]
    async fn bearer_scheme_formats_the_header() {
        let auth = Authenticator::Bearer(BearerToken::new("tok").unwrap());
        let headers = auth
            .request_headers(&ctx(), false, &MockClock::at("2025-01-01T00:00:00Z"))
            .await
            .unwrap();
        assert_eq!(
            headers,
            vec![("authorization".to_owned(), "Bearer tok".to_owned())]
        );
    }

    #[tokio::test]
    async fn basic_scheme_base64_encodes_the_pair() {
        let auth = Authenticator::Basic {
            username: Username::new("user").unwrap(),
            password: Password::new("pass").unwrap(),
        };
        let headers = auth
            .request_headers(&ctx(), false, &MockClock::at("2025-01-01T00:00:00Z"))
            .await
            .unwrap();
        // base64("user:pass")
        assert_eq!(
            headers,
            vec![(
                "authorization".to_owned(),
                "Basic dXNlcjpwYXNz".to_owned()
            )]
        );
    }

    #[tokio::test]
    async fn signed_scheme_stamps_and_signs_the_request() {
        let signer = ApplicationSigner::new(
            AppKey::new("669E367E-6BBA-48AB-AF15-266871C28135").unwrap(),
            AppSecret::new("BeIukql3pTKJ8RGL5zo0DA==").unwrap(),
        );
        let auth = Authenticator::Signed(signer.clone());
        let clock = MockClock::at("2014-09-24T10:59:41Z");

        let headers = auth.request_headers(&ctx(), false, &clock).await.unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[1].0, TIMESTAMP_HEADER);
        assert_eq!(headers[1].1, "2014-09-24T10:59:41Z");

        let expected = signer.authorization_header(
            b"{}",
            "POST",
            "/verification/v1/verifications",
            "x-timestamp:2014-09-24T10:59:41Z",
            "application/json",
        );
        assert_eq!(headers[0], ("authorization".to_owned(), expected));
    }

    #[test]
    fn only_oauth_can_refresh() {
        assert!(!Authenticator::Bearer(BearerToken::new("t").unwrap()).can_refresh());
        assert!(
            !Authenticator::Basic {
                username: Username::new("u").unwrap(),
                password: Password::new("p").unwrap(),
            }
            .can_refresh()
        );
    }
}
