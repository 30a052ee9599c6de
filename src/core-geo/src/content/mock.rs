//! Mock content source for testing
//!
//! Can be configured to return predefined documents and AI items, or to fail
//! every call, without making real HTTP requests.

use std::sync::Mutex;

use async_trait::async_trait;
use data_model_geo::models::{FaqItem, ServiceItem, SummaryItem};

use super::{ContentClient, SitemapRequest};
use crate::errors::ContentError;

#[derive(Debug, Default)]
pub struct MockContent {
    sitemap: Option<String>,
    robots: Option<String>,
    summary: Option<SummaryItem>,
    faq: Vec<FaqItem>,
    services: Vec<ServiceItem>,
    /// If true, every call returns an error
    should_fail: bool,
    /// Requests passed to any call, in call order
    requests: Mutex<Vec<SitemapRequest>>,
}

impl MockContent {
    /// Create a mock with no content: sitemap and robots calls fail, AI items are empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that always fails with an error
    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn with_sitemap(mut self, xml: impl Into<String>) -> Self {
        self.sitemap = Some(xml.into());
        self
    }

    pub fn with_robots(mut self, robots: impl Into<String>) -> Self {
        self.robots = Some(robots.into());
        self
    }

    pub fn with_summary(mut self, summary: SummaryItem) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_faq(mut self, faq: Vec<FaqItem>) -> Self {
        self.faq = faq;
        self
    }

    pub fn with_services(mut self, services: Vec<ServiceItem>) -> Self {
        self.services = services;
        self
    }

    /// Requests seen so far
    pub fn requests(&self) -> Vec<SitemapRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    fn record(&self, request: &SitemapRequest) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
    }

    fn check(&self) -> Result<(), ContentError> {
        if self.should_fail {
            return Err(ContentError::GraphQlError("Mock content configured to fail".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentClient for MockContent {
    async fn get_sitemap(&self, request: &SitemapRequest) -> Result<String, ContentError> {
        self.record(request);
        self.check()?;
        self.sitemap.clone().ok_or(ContentError::Unsupported("sitemaps"))
    }

    async fn get_robots(&self, request: &SitemapRequest) -> Result<String, ContentError> {
        self.record(request);
        self.check()?;
        self.robots.clone().ok_or(ContentError::Unsupported("robots.txt"))
    }

    async fn get_summary(&self, request: &SitemapRequest) -> Result<Option<SummaryItem>, ContentError> {
        self.record(request);
        self.check()?;
        Ok(self.summary.clone())
    }

    async fn get_faq(&self, request: &SitemapRequest) -> Result<Vec<FaqItem>, ContentError> {
        self.record(request);
        self.check()?;
        Ok(self.faq.clone())
    }

    async fn get_services(&self, request: &SitemapRequest) -> Result<Vec<ServiceItem>, ContentError> {
        self.record(request);
        self.check()?;
        Ok(self.services.clone())
    }
}
