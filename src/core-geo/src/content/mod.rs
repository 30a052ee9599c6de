pub mod edge;
#[cfg(any(test, feature = "test-helpers"))]
pub mod mock;
pub mod site;
pub mod static_content;

use async_trait::async_trait;
use data_model_geo::models::{FaqItem, ServiceItem, SummaryItem};

pub use edge::{EdgeClient, EdgeConfig};
#[cfg(any(test, feature = "test-helpers"))]
pub use mock::MockContent;
pub use site::SiteResolver;
pub use static_content::StaticContent;

use crate::errors::ContentError;

/// Per-request facts a content source needs to pick the right site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapRequest {
    /// Scheme and host the request was made against, without trailing slash
    pub base_url: String,
    pub site_name: String,
    pub language: String,
}

impl SitemapRequest {
    pub fn new(base_url: impl Into<String>, site_name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            site_name: site_name.into(),
            language: language.into(),
        }
    }
}

/// Interface to the CMS that owns the site's pages and AI configuration items.
#[async_trait]
pub trait ContentClient: Send + Sync {
    /// Raw sitemap XML (a urlset or a sitemap index) for the requested site.
    async fn get_sitemap(&self, request: &SitemapRequest) -> Result<String, ContentError>;

    /// The robots.txt the CMS publishes for the requested site.
    async fn get_robots(&self, request: &SitemapRequest) -> Result<String, ContentError>;

    /// `Ok(None)` when the CMS has no summary item in the request's language.
    async fn get_summary(&self, request: &SitemapRequest) -> Result<Option<SummaryItem>, ContentError>;

    async fn get_faq(&self, request: &SitemapRequest) -> Result<Vec<FaqItem>, ContentError>;

    async fn get_services(&self, request: &SitemapRequest) -> Result<Vec<ServiceItem>, ContentError>;
}
