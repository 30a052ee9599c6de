//! Path-based inclusion rules for LLM sitemap entries.

use std::sync::OnceLock;

use data_model_geo::models::SitemapEntry;
use regex::{Regex, RegexBuilder};
use url::Url;

use crate::errors::FilterError;

/// Paths never worth listing for an LLM crawler: error pages, APIs, framework
/// internals, other sitemaps, static assets and anything carrying a query.
pub const DEFAULT_DENY_PATTERNS: [&str; 10] = [
    r"/404",
    r"/api/",
    r"/500$",
    r"/error",
    r"/_",
    r"sitemap",
    r"/robots",
    r"\.xml$",
    r"\.(json|txt|css|js|ico|png|jpg|jpeg|gif|svg|woff|woff2|ttf|eot)$",
    r"\?",
];

/// Home page only.
pub const DEFAULT_ALLOW_PATTERNS: [&str; 1] = [r"^/$"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPolicy {
    /// Include only paths matching an allow pattern and no deny pattern
    AllowList,
    /// Include every path matching no deny pattern
    DenyOnly,
}

/// Case-insensitive allow/deny rules evaluated against a URL's path.
#[derive(Debug, Clone)]
pub struct UrlFilter {
    policy: FilterPolicy,
    allow: Vec<Regex>,
    deny: Vec<Regex>,
}

fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Regex>, FilterError> {
    patterns
        .iter()
        .map(|p| {
            RegexBuilder::new(p.as_ref())
                .case_insensitive(true)
                .build()
                .map_err(|source| FilterError {
                    pattern: p.as_ref().to_string(),
                    source,
                })
        })
        .collect()
}

impl UrlFilter {
    /// Builds a filter from custom pattern lists.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first pattern that is not a valid regular expression.
    pub fn new<A: AsRef<str>, D: AsRef<str>>(policy: FilterPolicy, allow: &[A], deny: &[D]) -> Result<Self, FilterError> {
        Ok(Self {
            policy,
            allow: compile(allow)?,
            deny: compile(deny)?,
        })
    }

    /// Allow-list policy with the default home-page allow set and the default deny set.
    pub fn home_only() -> Self {
        static FILTER: OnceLock<UrlFilter> = OnceLock::new();
        FILTER
            .get_or_init(|| {
                UrlFilter::new(FilterPolicy::AllowList, &DEFAULT_ALLOW_PATTERNS, &DEFAULT_DENY_PATTERNS)
                    .expect("default URL patterns are valid")
            })
            .clone()
    }

    /// Deny-list-only policy with the default deny set.
    pub fn deny_only() -> Self {
        static FILTER: OnceLock<UrlFilter> = OnceLock::new();
        FILTER
            .get_or_init(|| {
                UrlFilter::new::<&str, &str>(FilterPolicy::DenyOnly, &[], &DEFAULT_DENY_PATTERNS)
                    .expect("default URL patterns are valid")
            })
            .clone()
    }

    pub fn policy(&self) -> FilterPolicy {
        self.policy
    }

    fn is_denied(&self, path: &str) -> bool {
        self.deny.iter().any(|re| re.is_match(path))
    }

    /// True if the URL belongs in the LLM sitemap. Unparsable URLs never do.
    pub fn should_include(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        let path = parsed.path();

        match self.policy {
            FilterPolicy::AllowList => {
                // Already covered by the default deny set; kept so custom deny sets cannot drop it
                if path.to_lowercase().contains("sitemap") {
                    return false;
                }
                !self.is_denied(path) && self.allow.iter().any(|re| re.is_match(path))
            }
            FilterPolicy::DenyOnly => !self.is_denied(path),
        }
    }

    /// Keeps the entries whose `loc` passes, preserving order.
    pub fn filter_entries(&self, entries: Vec<SitemapEntry>) -> Vec<SitemapEntry> {
        entries.into_iter().filter(|e| self.should_include(&e.loc)).collect()
    }
}
