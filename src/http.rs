use http::header;
pub use http::HeaderMap;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::error::{ApiError, Error, Result};

static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// Client is a wrapper around `reqwest::Client` which provides automatically
/// prepending the base url.
///
/// Every request is a single attempt: a non-2xx response or a transport
/// failure is reported to the caller as-is, without retries.
#[derive(Debug, Clone)]
pub(crate) struct Client {
    base_url: Url,
    inner: reqwest::Client,
    in_flight: Arc<AtomicUsize>,
}

pub(crate) enum Body {
    Empty,
    Json(serde_json::Value),
    Multipart(reqwest::multipart::Form),
}

impl Client {
    /// Creates a new client. The token is optional; public endpoints
    /// (sign-in, registration) work without one.
    pub(crate) fn new<U, T>(base_url: U, token: T) -> Result<Self>
    where
        U: AsRef<str>,
        T: Into<Option<String>>,
    {
        let base_url = Url::parse(base_url.as_ref()).map_err(Error::InvalidUrl)?;

        let mut default_headers = header::HeaderMap::new();
        if let Some(token) = token.into() {
            let token_header_value = header::HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_e| Error::InvalidToken)?;
            default_headers.insert(header::AUTHORIZATION, token_header_value);
        }

        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(default_headers)
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(Error::HttpClientSetup)?;

        Ok(Self {
            base_url,
            inner: http_client,
            in_flight: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Whether this client instance currently has a request on the wire.
    ///
    /// The flag is shared by all clones of this instance (one per top-level
    /// client), not global across clients.
    pub(crate) fn in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    async fn execute<P, H>(
        &self,
        method: http::Method,
        path: P,
        body: Body,
        headers: H,
    ) -> Result<Response>
    where
        P: AsRef<str>,
        H: Into<Option<HeaderMap>>,
    {
        let url = self
            .base_url
            .join(path.as_ref().trim_start_matches('/'))
            .map_err(Error::InvalidUrl)?;

        // Raised before the request is issued, released on every exit path.
        let _guard = InFlightGuard::acquire(&self.in_flight);

        let mut req = self.inner.request(method.clone(), url);
        if let Some(headers) = headers.into() {
            req = req.headers(headers);
        }
        match body {
            Body::Empty => {}
            Body::Json(value) => req = req.json(&value),
            Body::Multipart(form) => req = req.multipart(form),
        }
        let res = self
            .inner
            .execute(req.build().map_err(Error::Transport)?)
            .await
            .map(|res| Response::new(res, method, path.as_ref().to_string()))
            .map_err(Error::Transport)?;

        Ok(res)
    }

    /// GET never carries a body. Query parameters are encoded into the path
    /// by the caller (see `serde_qs` use in the sub-clients).
    pub(crate) async fn get<S>(&self, path: S) -> Result<Response>
    where
        S: AsRef<str>,
    {
        self.execute(http::Method::GET, path.as_ref(), Body::Empty, None)
            .await
    }

    pub(crate) async fn post<S, P>(&self, path: S, payload: P) -> Result<Response>
    where
        S: AsRef<str>,
        P: Serialize,
    {
        self.execute(
            http::Method::POST,
            path,
            Body::Json(serde_json::to_value(payload).map_err(Error::Serialize)?),
            None,
        )
        .await
    }

    /// POST with no body at all, for endpoints that take their input as
    /// query parameters.
    pub(crate) async fn post_empty<S>(&self, path: S) -> Result<Response>
    where
        S: AsRef<str>,
    {
        self.execute(http::Method::POST, path, Body::Empty, None)
            .await
    }

    /// POST a multipart form, letting the transport pick its own
    /// content-type boundary.
    pub(crate) async fn post_form<S>(
        &self,
        path: S,
        form: reqwest::multipart::Form,
    ) -> Result<Response>
    where
        S: AsRef<str>,
    {
        self.execute(http::Method::POST, path, Body::Multipart(form), None)
            .await
    }

    pub(crate) async fn put<S, P>(&self, path: S, payload: P) -> Result<Response>
    where
        S: AsRef<str>,
        P: Serialize,
    {
        self.execute(
            http::Method::PUT,
            path,
            Body::Json(serde_json::to_value(payload).map_err(Error::Serialize)?),
            None,
        )
        .await
    }

    pub(crate) async fn delete<S>(&self, path: S) -> Result<Response>
    where
        S: AsRef<str>,
    {
        self.execute(http::Method::DELETE, path, Body::Empty, None)
            .await
    }
}

/// Scoped release of the in-flight counter.
struct InFlightGuard<'a>(&'a AtomicUsize);

impl<'a> InFlightGuard<'a> {
    fn acquire(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[derive(Debug)]
pub(crate) struct Response {
    inner: reqwest::Response,
    method: http::Method,
    path: String,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response, method: http::Method, path: String) -> Self {
        Self {
            inner,
            method,
            path,
        }
    }

    /// Deserializing into the caller's model is also the response-shape
    /// check: a payload that doesn't match fails here instead of leaking
    /// missing fields further up.
    pub(crate) async fn json<T: DeserializeOwned>(self) -> Result<T> {
        self.check_error()
            .await?
            .inner
            .json::<T>()
            .await
            .map_err(Error::Deserialize)
    }

    pub(crate) async fn check_error(self) -> Result<Response> {
        let status = self.inner.status();
        if !status.is_success() {
            // Try to decode the error
            let e = match self.inner.json::<ApiError>().await {
                Ok(mut e) => {
                    e.status = status.as_u16();
                    e.method = self.method;
                    e.path = self.path;
                    Error::Api(e)
                }
                Err(_e) => {
                    // Decoding failed, we still want an ApiError
                    Error::Api(ApiError::new(status.as_u16(), self.method, self.path))
                }
            };
            return Err(e);
        }

        Ok(self)
    }
}
