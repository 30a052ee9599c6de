//! Maps a request's Host header to one of the configured sites.

use data_model_geo::models::SiteInfo;
use globset::{GlobBuilder, GlobMatcher};

use crate::errors::ConfigError;

#[derive(Debug, Clone)]
enum HostPattern {
    Any,
    Exact(String),
    Wildcard(GlobMatcher),
}

#[derive(Debug, Clone)]
struct CompiledSite {
    info: SiteInfo,
    patterns: Vec<HostPattern>,
}

/// Resolves hosts to sites: exact host patterns win over wildcard patterns,
/// which win over a `*` catch-all site, which wins over the first site listed.
#[derive(Debug, Clone)]
pub struct SiteResolver {
    sites: Vec<CompiledSite>,
}

fn compile_patterns(host_name: &str) -> Result<Vec<HostPattern>, ConfigError> {
    host_name
        .split(['|', ','])
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .map(|p| {
            if p == "*" {
                Ok(HostPattern::Any)
            } else if p.contains('*') {
                let glob = GlobBuilder::new(&p).case_insensitive(true).build()?;
                Ok(HostPattern::Wildcard(glob.compile_matcher()))
            } else {
                Ok(HostPattern::Exact(p))
            }
        })
        .collect()
}

/// Lowercased host without a port suffix.
fn normalize_host(host: &str) -> String {
    let host = host.trim().to_lowercase();
    // Bracketed IPv6 literal
    if let Some(rest) = host.strip_prefix('[') {
        return match rest.split_once(']') {
            Some((addr, _)) => format!("[{}]", addr),
            None => host,
        };
    }
    match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name.to_string(),
        _ => host,
    }
}

impl SiteResolver {
    /// # Errors
    ///
    /// Returns an error when a wildcard host pattern is not a valid glob.
    pub fn new(sites: Vec<SiteInfo>) -> Result<Self, ConfigError> {
        let sites = sites
            .into_iter()
            .map(|info| {
                let patterns = compile_patterns(&info.host_name)?;
                Ok(CompiledSite { info, patterns })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Ok(Self { sites })
    }

    pub fn sites(&self) -> impl Iterator<Item = &SiteInfo> {
        self.sites.iter().map(|s| &s.info)
    }

    /// The site serving `host`. None only when no sites are configured.
    pub fn get_by_host(&self, host: Option<&str>) -> Option<&SiteInfo> {
        if let Some(host) = host.map(normalize_host).filter(|h| !h.is_empty()) {
            let exact = self.sites.iter().find(|site| {
                site.patterns
                    .iter()
                    .any(|p| matches!(p, HostPattern::Exact(name) if *name == host))
            });
            if let Some(site) = exact {
                return Some(&site.info);
            }

            let wildcard = self.sites.iter().find(|site| {
                site.patterns
                    .iter()
                    .any(|p| matches!(p, HostPattern::Wildcard(glob) if glob.is_match(&host)))
            });
            if let Some(site) = wildcard {
                return Some(&site.info);
            }
        }

        self.sites
            .iter()
            .find(|site| site.patterns.iter().any(|p| matches!(p, HostPattern::Any)))
            .or_else(|| self.sites.first())
            .map(|site| &site.info)
    }

    /// First host name that is a concrete host rather than a pattern.
    pub fn first_concrete_host(&self) -> Option<&str> {
        self.sites.iter().find_map(|site| {
            site.patterns.iter().find_map(|p| match p {
                HostPattern::Exact(name) => Some(name.as_str()),
                _ => None,
            })
        })
    }
}
