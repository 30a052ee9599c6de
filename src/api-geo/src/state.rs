use std::sync::Arc;

use axum::http::HeaderMap;
use core_geo::common::base_url::{request_host, resolve_announced_site_url, resolve_base_url};
use core_geo::common::config::{AppConfig, load_profile, load_sites};
use core_geo::content::{ContentClient, EdgeClient, SiteResolver, SitemapRequest, StaticContent};
use core_geo::errors::ConfigError;
use core_geo::sitemap::LlmSitemapOptions;
use data_model_geo::profile::SiteProfile;

const FALLBACK_SITE_NAME: &str = "default";
const FALLBACK_LANGUAGE: &str = "en";

/// Read-only state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub sitemap_options: Arc<LlmSitemapOptions>,
    pub sites: Arc<SiteResolver>,
    pub profile: Arc<SiteProfile>,
    pub content: Arc<dyn ContentClient>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        sites: SiteResolver,
        profile: SiteProfile,
        content: Arc<dyn ContentClient>,
        http: reqwest::Client,
    ) -> Self {
        let sitemap_options = LlmSitemapOptions::builder(config.sitemap_policy)
            .fetch_concurrency(config.fetch_concurrency)
            .build();
        Self {
            config: Arc::new(config),
            sitemap_options: Arc::new(sitemap_options),
            sites: Arc::new(sites),
            profile: Arc::new(profile),
            content,
            http,
        }
    }

    /// Loads the site list and profile named by `config` and picks the content source.
    pub fn from_config(config: AppConfig) -> Result<Self, ConfigError> {
        let sites = SiteResolver::new(load_sites(&config.sites_file)?)?;
        let profile = load_profile(&config.site_profile)?;
        let http = config.http_client()?;

        let content: Arc<dyn ContentClient> = match &config.edge {
            Some(edge) => {
                tracing::info!("Serving content from the CMS at {}", edge.url);
                Arc::new(EdgeClient::new(edge.clone(), http.clone()))
            }
            None => {
                tracing::info!("No CMS configured, serving content from the site profile");
                Arc::new(StaticContent::new(Arc::new(profile.clone())))
            }
        };

        Ok(Self::new(config, sites, profile, content, http))
    }

    /// Scheme and host to build absolute links with.
    pub fn base_url(&self, headers: &HeaderMap) -> String {
        resolve_base_url(headers, self.config.site_url.as_deref())
    }

    /// Site URL announced in ai.txt.
    pub fn announced_site_url(&self, headers: &HeaderMap) -> String {
        resolve_announced_site_url(headers, self.sites.first_concrete_host(), self.config.site_url.as_deref())
    }

    /// The site and base URL a request is for.
    pub fn sitemap_request(&self, headers: &HeaderMap) -> SitemapRequest {
        let base_url = self.base_url(headers);
        match self.sites.get_by_host(request_host(headers)) {
            Some(site) => SitemapRequest::new(base_url, site.name.clone(), site.language.clone()),
            None => SitemapRequest::new(base_url, FALLBACK_SITE_NAME, FALLBACK_LANGUAGE),
        }
    }
}
