use std::sync::Arc;

use async_trait::async_trait;
use data_model_geo::models::{FaqItem, ServiceItem, SummaryItem};
use data_model_geo::profile::SiteProfile;

use super::{ContentClient, SitemapRequest};
use crate::errors::ContentError;

/// Content source used when no CMS is configured: everything comes from the site profile.
#[derive(Debug, Clone)]
pub struct StaticContent {
    profile: Arc<SiteProfile>,
}

impl StaticContent {
    pub fn new(profile: Arc<SiteProfile>) -> Self {
        Self { profile }
    }
}

#[async_trait]
impl ContentClient for StaticContent {
    async fn get_sitemap(&self, _request: &SitemapRequest) -> Result<String, ContentError> {
        Err(ContentError::Unsupported("sitemaps"))
    }

    async fn get_robots(&self, _request: &SitemapRequest) -> Result<String, ContentError> {
        Err(ContentError::Unsupported("robots.txt"))
    }

    async fn get_summary(&self, _request: &SitemapRequest) -> Result<Option<SummaryItem>, ContentError> {
        Ok(Some(self.profile.summary()))
    }

    async fn get_faq(&self, _request: &SitemapRequest) -> Result<Vec<FaqItem>, ContentError> {
        Ok(self.profile.faq.clone())
    }

    async fn get_services(&self, _request: &SitemapRequest) -> Result<Vec<ServiceItem>, ContentError> {
        Ok(self.profile.services.clone())
    }
}
