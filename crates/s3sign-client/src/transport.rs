//! HTTP transport seam.
//!
//! The client never talks to the network directly; it hands a fully signed
//! `http::Request` to a [`Transport`]. The trait uses `#[async_trait]` so it
//! stays object-safe for `Arc<dyn Transport>`.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::error::ClientResult;

/// Executes signed requests.
#[async_trait]
pub trait Transport: fmt::Debug + Send + Sync {
    /// Send the request and return whatever the server answered.
    ///
    /// Non-2xx statuses are returned as responses, not errors.
    async fn execute(&self, request: http::Request<Bytes>) -> ClientResult<http::Response<Bytes>>;
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> ClientResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Wrap an existing `reqwest` client.
    #[must_use]
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: http::Request<Bytes>) -> ClientResult<http::Response<Bytes>> {
        let (parts, body) = request.into_parts();
        let carries_body = !body.is_empty()
            || parts.method == http::Method::PUT
            || parts.method == http::Method::POST;

        let mut builder = self
            .client
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers);
        if carries_body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let version = response.version();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        debug!(%status, bytes = body.len(), "Received response");

        let mut out = http::Response::new(body);
        *out.status_mut() = status;
        *out.version_mut() = version;
        *out.headers_mut() = headers;
        Ok(out)
    }
}
