use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

// Sitemap Types

/// A single `<url>` record of a sitemap, either parsed from upstream XML or synthesized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapEntry {
    /// Absolute URL of the page
    pub loc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<String>,
    /// Kept as text: priority is never range-validated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl SitemapEntry {
    /// An entry with only a location.
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            lastmod: None,
            changefreq: None,
            priority: None,
        }
    }

    pub fn with_lastmod(mut self, lastmod: impl Into<String>) -> Self {
        self.lastmod = Some(lastmod.into());
        self
    }

    pub fn with_changefreq(mut self, changefreq: impl Into<String>) -> Self {
        self.changefreq = Some(changefreq.into());
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}

// Site Types

fn default_host_name() -> String {
    "*".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

/// One entry of `sites.json`.
///
/// `host_name` may be `*`, a single host, or a `|` / `,` separated list of host
/// patterns that may contain `*` wildcards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    #[serde(rename = "hostName", default = "default_host_name")]
    pub host_name: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl SiteInfo {
    pub fn new(name: impl Into<String>, host_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            host_name: host_name.into(),
            language: default_language(),
        }
    }
}

// AI Payload Types

/// A question and answer pair served from `/ai/faq.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

impl FaqItem {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// True when both the question and the answer carry non-blank text.
    pub fn is_complete(&self) -> bool {
        !self.question.trim().is_empty() && !self.answer.trim().is_empty()
    }
}

/// A service or capability offered by the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub category: String,
}

/// Title and description of the site as authored in the CMS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryItem {
    pub title: String,
    pub description: String,
}

/// Response body of `/ai/summary.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryPayload {
    pub title: String,
    /// Never longer than 800 characters
    pub description: String,
    /// RFC 3339 timestamp
    #[serde(rename = "lastModified")]
    pub last_modified: String,
}

/// Response body of `/ai/service.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub services: Vec<ServiceItem>,
    /// RFC 3339 timestamp
    #[serde(rename = "lastModified")]
    pub last_modified: String,
}

// API Error Types

/// Errors surfaced directly to HTTP clients of the machine-readable endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum EndpointError {
    /// Only GET (and HEAD) are served
    #[serde(rename = "Method not allowed")]
    MethodNotAllowed,
    /// No route matches the request path
    #[serde(rename = "Not found")]
    NotFound,
}

impl IntoResponse for EndpointError {
    fn into_response(self) -> axum::response::Response {
        match self {
            EndpointError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET")], Json(self)).into_response()
            }
            EndpointError::NotFound => (StatusCode::NOT_FOUND, Json(self)).into_response(),
        }
    }
}
