//! HTTP plumbing: a minimal transport trait so the client and the token
//! provider can be exercised against fakes, plus the reqwest implementation.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

pub(crate) type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub(crate) type TransportFailure = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(value: HttpMethod) -> Self {
        match value {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum HttpBody {
    /// Raw JSON bytes; the caller supplies the `content-type` header.
    Json(Vec<u8>),
    /// URL-encoded form pairs (the OAuth token endpoint).
    Form(Vec<(String, String)>),
}

#[derive(Debug, Clone)]
pub(crate) struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<HttpBody>,
}

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub status: u16,
    pub body: String,
}

pub(crate) trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>>;
}

#[derive(Debug, Clone)]
pub(crate) struct ReqwestTransport {
    pub(crate) client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
        Box::pin(async move {
            let mut builder = self
                .client
                .request(request.method.into(), request.url.as_str());
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            builder = match request.body {
                Some(HttpBody::Json(bytes)) => builder.body(bytes),
                Some(HttpBody::Form(params)) => builder.form(&params),
                None => builder,
            };
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! Scripted transport fake shared by auth and client tests.

    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use super::{BoxFuture, HttpRequest, HttpResponse, HttpTransport, TransportFailure};

    #[derive(Debug, Clone)]
    pub(crate) struct FakeTransport {
        state: Arc<Mutex<FakeState>>,
    }

    #[derive(Debug)]
    struct FakeState {
        responses: VecDeque<HttpResponse>,
        requests: Vec<HttpRequest>,
    }

    impl FakeTransport {
        /// Transport that replays the given responses in order; the last one
        /// repeats once the script runs out.
        pub(crate) fn scripted<S: Into<String>>(
            responses: impl IntoIterator<Item = (u16, S)>,
        ) -> Self {
            let responses = responses
                .into_iter()
                .map(|(status, body)| HttpResponse {
                    status,
                    body: body.into(),
                })
                .collect();
            Self {
                state: Arc::new(Mutex::new(FakeState {
                    responses,
                    requests: Vec::new(),
                })),
            }
        }

        pub(crate) fn request_count(&self) -> usize {
            self.state.lock().unwrap().requests.len()
        }

        pub(crate) fn requests(&self) -> Vec<HttpRequest> {
            self.state.lock().unwrap().requests.clone()
        }
    }

    impl HttpTransport for FakeTransport {
        fn execute<'a>(
            &'a self,
            request: HttpRequest,
        ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
            Box::pin(async move {
                let mut state = self.state.lock().unwrap();
                state.requests.push(request);
                let response = if state.responses.len() > 1 {
                    state.responses.pop_front()
                } else {
                    state.responses.front().cloned()
                };
                response.ok_or_else(|| "no scripted response".into())
            })
        }
    }

    /// Case-insensitive header lookup on a recorded request.
    pub(crate) fn request_header<'a>(request: &'a HttpRequest, name: &str) -> Option<&'a str> {
        request
            .headers
            .iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
