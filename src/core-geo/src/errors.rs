//! Error types for the GEO endpoint library.
//!
//! None of these reach an HTTP client directly: every I/O call site matches on
//! the `Result` and substitutes its documented fallback.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while obtaining sitemap XML from an upstream source.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Upstream answered with a non-2xx status
    #[error("{url} returned HTTP {status}")]
    UpstreamStatus { url: String, status: u16 },

    /// The CMS client failed
    #[error("Content source failed: {0}")]
    ContentError(#[from] ContentError),
}

/// Failure of the CMS collaborator.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    UpstreamStatus { url: String, status: u16 },

    /// The GraphQL response carried errors or no data
    #[error("GraphQL query failed: {0}")]
    GraphQlError(String),

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    UrlParseError(#[from] url::ParseError),

    /// Required setting is missing for this request
    #[error("Content source is not configured: {0}")]
    NotConfigured(&'static str),

    /// The implementation does not serve this kind of content
    #[error("Content source does not provide {0}")]
    Unsupported(&'static str),
}

/// A custom allow/deny pattern failed to compile.
#[derive(Debug, Error)]
#[error("Invalid URL pattern '{pattern}': {source}")]
pub struct FilterError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// Start-up configuration failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse {}: {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An environment variable holds a value that cannot be used
    #[error("Invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },

    #[error("Invalid site host pattern: {0}")]
    GlobError(#[from] globset::Error),

    #[error("Failed to load TLS certificate and key: {0}")]
    TlsError(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClientError(#[from] reqwest::Error),
}
