//! Process configuration, read once at start-up from the environment.

use std::path::{Path, PathBuf};
use std::time::Duration;

use data_model_geo::models::SiteInfo;
use data_model_geo::profile::SiteProfile;

use crate::common::upstream::{fetch_concurrency_or_default, upstream_timeout};
use crate::content::EdgeConfig;
use crate::errors::ConfigError;
use crate::sitemap::SitemapPolicy;

pub const DEFAULT_SITES_FILE: &str = "sites.json";
pub const DEFAULT_SITE_PROFILE: &str = "site-profile.json";

const USER_AGENT: &str = concat!("geo-endpoints/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL used when a request carries no usable host
    pub site_url: Option<String>,
    pub sites_file: PathBuf,
    pub site_profile: PathBuf,
    pub sitemap_policy: SitemapPolicy,
    /// When set, content comes from the CMS instead of the static profile
    pub edge: Option<EdgeConfig>,
    pub upstream_timeout: Duration,
    pub fetch_concurrency: usize,
}

/// Value of an environment variable, or None when unset or blank.
pub fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let sitemap_policy = match optional_var("SITEMAP_POLICY") {
            Some(v) => v.parse::<SitemapPolicy>()?,
            None => SitemapPolicy::AllPages,
        };

        let upstream_timeout = upstream_timeout().map_err(|_| ConfigError::InvalidValue {
            var: "UPSTREAM_TIMEOUT_S",
            value: std::env::var("UPSTREAM_TIMEOUT_S").unwrap_or_default(),
        })?;

        let fetch_concurrency = fetch_concurrency_or_default().map_err(|_| ConfigError::InvalidValue {
            var: "SITEMAP_FETCH_CONCURRENCY",
            value: std::env::var("SITEMAP_FETCH_CONCURRENCY").unwrap_or_default(),
        })?;

        Ok(Self {
            site_url: optional_var("SITE_URL"),
            sites_file: optional_var("SITES_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SITES_FILE)),
            site_profile: optional_var("SITE_PROFILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SITE_PROFILE)),
            sitemap_policy,
            edge: EdgeConfig::from_env(),
            upstream_timeout,
            fetch_concurrency,
        })
    }

    /// The shared HTTP client for every upstream call.
    pub fn http_client(&self) -> Result<reqwest::Client, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(self.upstream_timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(client)
    }
}

/// Loads the site list. A missing file yields a single catch-all site.
pub fn load_sites(path: &Path) -> Result<Vec<SiteInfo>, ConfigError> {
    if !path.exists() {
        tracing::info!("{} not found, serving every host as one site", path.display());
        return Ok(vec![SiteInfo::new("default", "*")]);
    }
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the site profile. A missing file yields the built-in default profile.
pub fn load_profile(path: &Path) -> Result<SiteProfile, ConfigError> {
    if !path.exists() {
        tracing::info!("{} not found, using the default site profile", path.display());
        return Ok(SiteProfile::default());
    }
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}
