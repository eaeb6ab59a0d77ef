//! Client layer: credential wiring, host resolution, and the product
//! sub-clients.

mod dispatch;
mod numbers;
mod sms;
mod verification;

pub use numbers::NumbersClient;
pub use sms::SmsClient;
pub use verification::VerificationClient;

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::{ApplicationSigner, AuthError, Authenticator, OAuthTokenProvider};
use crate::clock::{Clock, SystemClock};
use crate::domain::{
    AppKey, AppSecret, BearerToken, KeyId, KeySecret, Password, ProjectId, Region, Username,
    ValidationError,
};
use crate::transport::ApiErrorDetails;
use crate::transport::http::{HttpTransport, ReqwestTransport};
use self::dispatch::Dispatcher;

const DEFAULT_AUTH_BASE: &str = "https://auth.sinch.com";
const DEFAULT_NUMBERS_BASE: &str = "https://numbers.api.sinch.com";
const DEFAULT_VERIFICATION_BASE: &str = "https://verification.api.sinch.com";

fn default_sms_base(region: Region) -> String {
    format!("https://{}.sms.api.sinch.com", region.as_str())
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SinchClient`] and its product sub-clients.
///
/// This error preserves:
/// - HTTP-level failures (non-2xx status, structured error body),
/// - token-endpoint failures,
/// - transport failures and parse failures,
/// - validation failures from the domain constructors.
pub enum Error {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The OAuth token endpoint rejected the credentials.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// A product endpoint returned a non-success HTTP status.
    ///
    /// `message` is the combined single-line message; `details` carries the
    /// structured fields parsed from the response body (possibly all empty).
    #[error("API error: HTTP {status}: {message}")]
    Api {
        status: u16,
        message: String,
        details: ApiErrorDetails,
    },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// A request URL could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The requested product API needs credentials the client was not built
    /// with.
    #[error("missing credentials: {0}")]
    MissingCredentials(&'static str),
}

#[derive(Debug, Clone)]
/// Authentication material for the OAuth-secured product APIs.
pub(crate) enum ApiCredentials {
    /// OAuth2 client credentials; tokens are fetched and cached on demand.
    ClientCredentials { key_id: KeyId, key_secret: KeySecret },
    /// Pre-issued bearer token used as-is (no refresh on 401).
    Bearer(BearerToken),
}

#[derive(Debug, Clone)]
/// Authentication material for the application-secured product APIs
/// (Verification, Voice).
pub(crate) enum AppCredentials {
    /// Per-request HMAC signing with the application key/secret pair.
    Signed { app_key: AppKey, app_secret: AppSecret },
    /// Static basic auth; the platform accepts it as a simpler alternative
    /// to signing.
    Basic { username: Username, password: Password },
}

#[derive(Debug, Clone, Default)]
/// Builder for [`SinchClient`].
///
/// Use this to supply credentials and to customize region, per-product base
/// URLs, timeout, or user-agent.
pub struct SinchClientBuilder {
    api_credentials: Option<ApiCredentials>,
    app_credentials: Option<AppCredentials>,
    project_id: Option<ProjectId>,
    region: Region,
    auth_base: Option<String>,
    sms_base: Option<String>,
    numbers_base: Option<String>,
    verification_base: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SinchClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// OAuth client credentials for the SMS and Numbers APIs.
    pub fn client_credentials(
        mut self,
        key_id: impl Into<String>,
        key_secret: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        self.api_credentials = Some(ApiCredentials::ClientCredentials {
            key_id: KeyId::new(key_id)?,
            key_secret: KeySecret::new(key_secret)?,
        });
        Ok(self)
    }

    /// Pre-issued bearer token for the SMS and Numbers APIs.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Result<Self, ValidationError> {
        self.api_credentials = Some(ApiCredentials::Bearer(BearerToken::new(token)?));
        Ok(self)
    }

    /// Application key/secret pair for the Verification API (signed requests).
    pub fn application_credentials(
        mut self,
        app_key: impl Into<String>,
        app_secret: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        self.app_credentials = Some(AppCredentials::Signed {
            app_key: AppKey::new(app_key)?,
            app_secret: AppSecret::new(app_secret)?,
        });
        Ok(self)
    }

    /// Static basic-auth pair for the Verification API.
    pub fn basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        self.app_credentials = Some(AppCredentials::Basic {
            username: Username::new(username)?,
            password: Password::new(password)?,
        });
        Ok(self)
    }

    /// Project id scoping the SMS and Numbers URL spaces.
    pub fn project_id(mut self, project_id: impl Into<String>) -> Result<Self, ValidationError> {
        self.project_id = Some(ProjectId::new(project_id)?);
        Ok(self)
    }

    /// Select the hosting region for regionalized APIs.
    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Override the OAuth token endpoint's base URL.
    pub fn auth_base_url(mut self, base: impl Into<String>) -> Self {
        self.auth_base = Some(base.into());
        self
    }

    /// Override the SMS API base URL (wins over the region template).
    pub fn sms_base_url(mut self, base: impl Into<String>) -> Self {
        self.sms_base = Some(base.into());
        self
    }

    /// Override the Numbers API base URL.
    pub fn numbers_base_url(mut self, base: impl Into<String>) -> Self {
        self.numbers_base = Some(base.into());
        self
    }

    /// Override the Verification API base URL.
    pub fn verification_base_url(mut self, base: impl Into<String>) -> Self {
        self.verification_base = Some(base.into());
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SinchClient`].
    pub fn build(self) -> Result<SinchClient, Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder
            .build()
            .map_err(|err| Error::Transport(Box::new(err)))?;

        let http: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport { client });
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let auth_base = self
            .auth_base
            .unwrap_or_else(|| DEFAULT_AUTH_BASE.to_owned());
        let api_auth = self.api_credentials.map(|credentials| {
            Arc::new(match credentials {
                ApiCredentials::ClientCredentials { key_id, key_secret } => {
                    Authenticator::OAuth(OAuthTokenProvider::new(
                        key_id,
                        key_secret,
                        format!("{auth_base}/oauth2/token"),
                        Arc::clone(&http),
                        Arc::clone(&clock),
                    ))
                }
                ApiCredentials::Bearer(token) => Authenticator::Bearer(token),
            })
        });
        let app_auth = self.app_credentials.map(|credentials| {
            Arc::new(match credentials {
                AppCredentials::Signed { app_key, app_secret } => {
                    Authenticator::Signed(ApplicationSigner::new(app_key, app_secret))
                }
                AppCredentials::Basic { username, password } => {
                    Authenticator::Basic { username, password }
                }
            })
        });

        Ok(SinchClient {
            http,
            clock,
            api_auth,
            app_auth,
            project_id: self.project_id,
            sms_base: self
                .sms_base
                .unwrap_or_else(|| default_sms_base(self.region)),
            numbers_base: self
                .numbers_base
                .unwrap_or_else(|| DEFAULT_NUMBERS_BASE.to_owned()),
            verification_base: self
                .verification_base
                .unwrap_or_else(|| DEFAULT_VERIFICATION_BASE.to_owned()),
        })
    }
}

#[derive(Clone)]
/// Top-level client handing out product sub-clients.
///
/// One client owns one connection-pooled transport and one token cache per
/// auth scheme; sub-clients share both, so a token fetched for an SMS call is
/// reused by Numbers calls.
pub struct SinchClient {
    http: Arc<dyn HttpTransport>,
    clock: Arc<dyn Clock>,
    api_auth: Option<Arc<Authenticator>>,
    app_auth: Option<Arc<Authenticator>>,
    project_id: Option<ProjectId>,
    sms_base: String,
    numbers_base: String,
    verification_base: String,
}

impl SinchClient {
    /// Start building a client.
    pub fn builder() -> SinchClientBuilder {
        SinchClientBuilder::new()
    }

    fn api_dispatcher(&self) -> Result<Dispatcher, Error> {
        let auth = self.api_auth.as_ref().ok_or(Error::MissingCredentials(
            "client credentials or a bearer token are required for this API",
        ))?;
        Ok(Dispatcher {
            http: Arc::clone(&self.http),
            auth: Arc::clone(auth),
            clock: Arc::clone(&self.clock),
        })
    }

    fn require_project_id(&self) -> Result<ProjectId, Error> {
        self.project_id.clone().ok_or(Error::MissingCredentials(
            "a project id is required for this API",
        ))
    }

    /// SMS API sub-client. Requires OAuth/bearer credentials and a project id.
    pub fn sms(&self) -> Result<SmsClient, Error> {
        Ok(SmsClient::new(
            self.api_dispatcher()?,
            self.sms_base.clone(),
            self.require_project_id()?,
        ))
    }

    /// Numbers API sub-client. Requires OAuth/bearer credentials and a
    /// project id.
    pub fn numbers(&self) -> Result<NumbersClient, Error> {
        Ok(NumbersClient::new(
            self.api_dispatcher()?,
            self.numbers_base.clone(),
            self.require_project_id()?,
        ))
    }

    /// Verification API sub-client. Requires application (or basic)
    /// credentials.
    pub fn verification(&self) -> Result<VerificationClient, Error> {
        let auth = self.app_auth.as_ref().ok_or(Error::MissingCredentials(
            "application or basic credentials are required for the Verification API",
        ))?;
        Ok(VerificationClient::new(
            Dispatcher {
                http: Arc::clone(&self.http),
                auth: Arc::clone(auth),
                clock: Arc::clone(&self.clock),
            },
            self.verification_base.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_builder() -> SinchClientBuilder {
        SinchClient::builder()
            .client_credentials("key-id", "key-secret")
            .unwrap()
            .application_credentials("app-key", "BeIukql3pTKJ8RGL5zo0DA==")
            .unwrap()
            .project_id("proj-1")
            .unwrap()
    }

    #[test]
    fn builder_wires_all_product_clients() {
        let client = full_builder().build().unwrap();
        assert!(client.sms().is_ok());
        assert!(client.numbers().is_ok());
        assert!(client.verification().is_ok());
    }

    #[test]
    fn region_selects_the_sms_host_template() {
        let client = full_builder().region(Region::Eu).build().unwrap();
        assert_eq!(client.sms_base, "https://eu.sms.api.sinch.com");

        let client = full_builder()
            .region(Region::Eu)
            .sms_base_url("https://example.invalid/sms")
            .build()
            .unwrap();
        assert_eq!(client.sms_base, "https://example.invalid/sms");
    }

    #[test]
    fn missing_api_credentials_fail_at_accessor_time() {
        let client = SinchClient::builder()
            .application_credentials("app-key", "BeIukql3pTKJ8RGL5zo0DA==")
            .unwrap()
            .build()
            .unwrap();
        assert!(matches!(client.sms(), Err(Error::MissingCredentials(_))));
        assert!(matches!(
            client.numbers(),
            Err(Error::MissingCredentials(_))
        ));
        assert!(client.verification().is_ok());
    }

    #[test]
    fn missing_app_credentials_fail_at_accessor_time() {
        let client = SinchClient::builder()
            .bearer_token("tok")
            .unwrap()
            .project_id("proj-1")
            .unwrap()
            .build()
            .unwrap();
        assert!(client.sms().is_ok());
        assert!(matches!(
            client.verification(),
            Err(Error::MissingCredentials(_))
        ));
    }

    #[test]
    fn missing_project_id_fails_at_accessor_time() {
        let client = SinchClient::builder()
            .bearer_token("tok")
            .unwrap()
            .build()
            .unwrap();
        assert!(matches!(client.sms(), Err(Error::MissingCredentials(_))));
    }

    #[test]
    fn builder_validates_credential_inputs() {
        assert!(SinchClient::builder().client_credentials("  ", "s").is_err());
        assert!(SinchClient::builder().bearer_token("").is_err());
        assert!(
            SinchClient::builder()
                .application_credentials("k", "not base64!!!")
                .is_err()
        );
        assert!(SinchClient::builder().project_id(" ").is_err());
    }
}
