//! Configuration options for LLM sitemap aggregation.

use std::fmt;
use std::str::FromStr;

use crate::common::cache::{CacheControl, HOUR};
use crate::common::upstream::DEFAULT_FETCH_CONCURRENCY;
use crate::errors::ConfigError;
use crate::sitemap::filter::UrlFilter;

/// Which preset the `/sitemap-llm.xml` endpoint serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SitemapPolicy {
    /// Only the home page, read from the site's own sitemap.xml
    HomeOnly,
    /// Every content page from the CMS sitemap, plus the AI endpoints
    AllPages,
}

impl FromStr for SitemapPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home-only" => Ok(SitemapPolicy::HomeOnly),
            "all-pages" => Ok(SitemapPolicy::AllPages),
            _ => Err(ConfigError::InvalidValue {
                var: "SITEMAP_POLICY",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SitemapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SitemapPolicy::HomeOnly => write!(f, "home-only"),
            SitemapPolicy::AllPages => write!(f, "all-pages"),
        }
    }
}

/// Where the source sitemap XML comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SitemapSource {
    /// GET `{base}/sitemap.xml` of the requesting site
    HttpSibling,
    /// Ask the CMS client for the site's sitemap
    ContentClient,
    /// GET a fixed URL
    Url(String),
}

/// Options for building an LLM sitemap.
#[derive(Debug, Clone)]
pub struct LlmSitemapOptions {
    pub source: SitemapSource,
    pub filter: UrlFilter,
    /// Follow `<sitemap>` records when the source has no `<url>` records
    pub expand_index: bool,
    /// Append the `/ai/*.json` endpoints when any page survives filtering
    pub include_ai_entries: bool,
    /// Emit the base URL alone when the source yields nothing
    pub fallback_to_base: bool,
    pub cache_control: CacheControl,
    /// Maximum number of child sitemaps fetched at once
    pub fetch_concurrency: usize,
}

impl LlmSitemapOptions {
    pub fn home_only() -> Self {
        Self {
            source: SitemapSource::HttpSibling,
            filter: UrlFilter::home_only(),
            expand_index: false,
            include_ai_entries: false,
            fallback_to_base: true,
            cache_control: CacheControl::public(HOUR).s_maxage(HOUR),
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
        }
    }

    pub fn all_pages() -> Self {
        Self {
            source: SitemapSource::ContentClient,
            filter: UrlFilter::deny_only(),
            expand_index: true,
            include_ai_entries: true,
            fallback_to_base: false,
            cache_control: CacheControl::public(300).s_maxage(300).stale_while_revalidate(HOUR),
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
        }
    }

    pub fn for_policy(policy: SitemapPolicy) -> Self {
        match policy {
            SitemapPolicy::HomeOnly => Self::home_only(),
            SitemapPolicy::AllPages => Self::all_pages(),
        }
    }

    /// Creates a builder starting from the given preset.
    pub fn builder(policy: SitemapPolicy) -> LlmSitemapOptionsBuilder {
        LlmSitemapOptionsBuilder {
            options: Self::for_policy(policy),
        }
    }
}

/// Builder for LlmSitemapOptions.
#[derive(Debug, Clone)]
pub struct LlmSitemapOptionsBuilder {
    options: LlmSitemapOptions,
}

impl LlmSitemapOptionsBuilder {
    pub fn source(mut self, source: SitemapSource) -> Self {
        self.options.source = source;
        self
    }

    pub fn filter(mut self, filter: UrlFilter) -> Self {
        self.options.filter = filter;
        self
    }

    pub fn expand_index(mut self, expand: bool) -> Self {
        self.options.expand_index = expand;
        self
    }

    pub fn include_ai_entries(mut self, include: bool) -> Self {
        self.options.include_ai_entries = include;
        self
    }

    pub fn fallback_to_base(mut self, fallback: bool) -> Self {
        self.options.fallback_to_base = fallback;
        self
    }

    pub fn cache_control(mut self, cache_control: CacheControl) -> Self {
        self.options.cache_control = cache_control;
        self
    }

    /// Sets the number of simultaneous child sitemap requests.
    pub fn fetch_concurrency(mut self, concurrency: usize) -> Self {
        self.options.fetch_concurrency = concurrency;
        self
    }

    pub fn build(self) -> LlmSitemapOptions {
        self.options
    }
}
