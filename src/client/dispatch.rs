//! The generic typed-request/typed-response engine shared by every product
//! client: attaches the credential, sends, retries once on 401 with a forced
//! refresh, and maps failures into [`Error`](crate::Error).

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use url::{Position, Url};

use crate::auth::{Authenticator, RequestContext};
use crate::client::Error;
use crate::clock::Clock;
use crate::transport::decode_error_body;
use crate::transport::http::{HttpBody, HttpMethod, HttpRequest, HttpResponse, HttpTransport};

#[derive(Clone)]
pub(crate) struct Dispatcher {
    pub(crate) http: Arc<dyn HttpTransport>,
    pub(crate) auth: Arc<Authenticator>,
    pub(crate) clock: Arc<dyn Clock>,
}

impl Dispatcher {
    /// Send a bodyless request.
    pub(crate) async fn request<R>(&self, method: HttpMethod, url: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        self.dispatch(method, url, None).await
    }

    /// Send a request with a JSON body.
    pub(crate) async fn request_with<B, R>(
        &self,
        method: HttpMethod,
        url: &str,
        body: &B,
    ) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let bytes = serde_json::to_vec(body).map_err(|err| Error::Parse(Box::new(err)))?;
        self.dispatch(method, url, Some(bytes)).await
    }

    async fn dispatch<R>(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let url = Url::parse(url)?;

        let first = self.attempt(method, &url, body.as_deref(), false).await?;
        let response = if first.status == 401 && self.auth.can_refresh() {
            tracing::debug!(url = %url, "unauthorized; retrying once with a forced token refresh");
            self.auth.invalidate_cached();
            self.attempt(method, &url, body.as_deref(), true).await?
        } else {
            first
        };

        if !(200..=299).contains(&response.status) {
            let details = decode_error_body(&response.body);
            let message = details.combined_message();
            return Err(Error::Api {
                status: response.status,
                message,
                details,
            });
        }

        decode_success(&response.body)
    }

    async fn attempt(
        &self,
        method: HttpMethod,
        url: &Url,
        body: Option<&[u8]>,
        force: bool,
    ) -> Result<HttpResponse, Error> {
        // Signed requests cover the path and query, not the host.
        let path = &url[Position::BeforePath..];
        let content_type = if body.is_some() { "application/json" } else { "" };
        let ctx = RequestContext {
            verb: method.as_str(),
            path,
            body: body.unwrap_or_default(),
            content_type,
        };

        let mut headers = self
            .auth
            .request_headers(&ctx, force, self.clock.as_ref())
            .await?;
        if body.is_some() {
            headers.push(("content-type".to_owned(), "application/json".to_owned()));
        }

        let request = HttpRequest {
            method,
            url: url.to_string(),
            headers,
            body: body.map(|bytes| HttpBody::Json(bytes.to_vec())),
        };

        self.http.execute(request).await.map_err(Error::Transport)
    }
}

fn decode_success<R>(body: &str) -> Result<R, Error>
where
    R: DeserializeOwned,
{
    let trimmed = body.trim();
    // An absent body is legal for endpoints typed as EmptyResponse.
    let effective = if trimmed.is_empty() { "null" } else { trimmed };
    serde_json::from_str(effective).map_err(|err| Error::Parse(Box::new(err)))
}
