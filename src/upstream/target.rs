//! Upstream origin parsing and URI rewriting.

use std::str::FromStr;

use axum::http::header::HeaderValue;
use axum::http::uri::{Authority, Scheme};
use axum::http::Uri;
use thiserror::Error;
use url::Url;

/// Errors for an unusable upstream target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("not a valid URL: {0}")]
    Url(String),

    #[error("unsupported scheme `{0}`, expected http or https")]
    Scheme(String),

    #[error("URL has no host")]
    MissingHost,

    #[error("invalid authority: {0}")]
    Authority(String),
}

/// The upstream origin every proxied request is rewritten to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamTarget {
    scheme: Scheme,
    authority: Authority,
    base_path: String,
    host_header: HeaderValue,
}

impl UpstreamTarget {
    /// Parse an absolute `http` or `https` URL.
    ///
    /// A path on the target (e.g. `http://backend/v2`) is kept as a base
    /// path that every forwarded request path is appended to.
    pub fn parse(target: &str) -> Result<Self, TargetError> {
        let url = Url::parse(target).map_err(|e| TargetError::Url(e.to_string()))?;

        let scheme = match url.scheme() {
            "http" => Scheme::HTTP,
            "https" => Scheme::HTTPS,
            other => return Err(TargetError::Scheme(other.to_string())),
        };

        let host = url.host_str().ok_or(TargetError::MissingHost)?;
        let authority = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        let authority =
            Authority::from_str(&authority).map_err(|e| TargetError::Authority(e.to_string()))?;
        let host_header = HeaderValue::from_str(authority.as_str())
            .map_err(|e| TargetError::Authority(e.to_string()))?;

        Ok(Self {
            scheme,
            authority,
            base_path: url.path().trim_end_matches('/').to_string(),
            host_header,
        })
    }

    /// Value for the `Host` header on forwarded requests.
    pub fn host_header(&self) -> &HeaderValue {
        &self.host_header
    }

    /// Rewrite an inbound request URI to point at the upstream.
    pub fn rewrite(&self, original: &Uri) -> Result<Uri, axum::http::Error> {
        let path_and_query = original
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");

        Uri::builder()
            .scheme(self.scheme.clone())
            .authority(self.authority.clone())
            .path_and_query(format!("{}{}", self.base_path, path_and_query))
            .build()
    }
}

impl std::fmt::Display for UpstreamTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.authority, self.base_path)
    }
}
