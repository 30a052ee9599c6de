//! Builds the LLM sitemap: fetch, expand, parse, filter, extend, serialize.
//!
//! Upstream failures never escape; the worst case is an empty `urlset`.

use std::collections::HashSet;

use data_model_geo::models::SitemapEntry;
use url::Url;

use crate::content::{ContentClient, SitemapRequest};
use crate::errors::SitemapError;
use crate::sitemap::config::{LlmSitemapOptions, SitemapSource};
use crate::sitemap::fetch::{fetch_child_entries, fetch_sitemap_xml};
use crate::sitemap::parse::{parse_sitemap_index_locs, parse_url_entries};
use crate::sitemap::serialize::{serialize_urlset, today};

/// Machine-readable endpoints listed after the page entries.
pub const AI_ENDPOINT_PATHS: [&str; 3] = ["/ai/faq.json", "/ai/summary.json", "/ai/service.json"];

const AI_ENTRY_CHANGEFREQ: &str = "weekly";
const AI_ENTRY_PRIORITY: &str = "0.8";
const FALLBACK_PRIORITY: &str = "1.0";

async fn fetch_source(
    request: &SitemapRequest,
    options: &LlmSitemapOptions,
    http: &reqwest::Client,
    content: &dyn ContentClient,
) -> Result<String, SitemapError> {
    match &options.source {
        SitemapSource::HttpSibling => fetch_sitemap_xml(http, &format!("{}/sitemap.xml", request.base_url)).await,
        SitemapSource::Url(url) => fetch_sitemap_xml(http, url).await,
        SitemapSource::ContentClient => Ok(content.get_sitemap(request).await?),
    }
}

/// `scheme://host[:port]` of an absolute URL, if it has one.
fn origin_of(url: &str) -> Option<String> {
    let origin = Url::parse(url).ok()?.origin();
    origin.is_tuple().then(|| origin.ascii_serialization())
}

fn ai_entries(origin: &str, today: &str) -> Vec<SitemapEntry> {
    AI_ENDPOINT_PATHS
        .iter()
        .map(|path| {
            SitemapEntry::new(format!("{}{}", origin, path))
                .with_lastmod(today)
                .with_changefreq(AI_ENTRY_CHANGEFREQ)
                .with_priority(AI_ENTRY_PRIORITY)
        })
        .collect()
}

/// Keeps the first entry for each `loc`.
fn dedup_by_loc(entries: Vec<SitemapEntry>) -> Vec<SitemapEntry> {
    let mut seen = HashSet::new();
    entries.into_iter().filter(|e| seen.insert(e.loc.clone())).collect()
}

/// The entries of the LLM sitemap, in output order.
pub async fn collect_llm_entries(
    request: &SitemapRequest,
    options: &LlmSitemapOptions,
    http: &reqwest::Client,
    content: &dyn ContentClient,
) -> Vec<SitemapEntry> {
    let today = today();

    let xml = match fetch_source(request, options, http, content).await {
        Ok(xml) => Some(xml),
        Err(e) => {
            tracing::warn!("Could not fetch source sitemap for {}: {}", request.base_url, e);
            None
        }
    };

    let mut parsed = xml.as_deref().map(parse_url_entries).unwrap_or_default();

    if parsed.is_empty() && options.expand_index {
        if let Some(xml) = xml.as_deref() {
            let locs = parse_sitemap_index_locs(xml);
            if !locs.is_empty() {
                tracing::debug!("Expanding sitemap index with {} children", locs.len());
                parsed = fetch_child_entries(http, locs, options.fetch_concurrency).await;
            }
        }
    }

    if parsed.is_empty() {
        if options.fallback_to_base {
            tracing::info!("Source sitemap is empty, falling back to {}", request.base_url);
            return vec![
                SitemapEntry::new(request.base_url.clone())
                    .with_lastmod(today)
                    .with_priority(FALLBACK_PRIORITY),
            ];
        }
        return Vec::new();
    }

    let origin = parsed
        .first()
        .and_then(|e| origin_of(&e.loc))
        .unwrap_or_else(|| request.base_url.clone());

    let parsed_count = parsed.len();
    let mut entries = options.filter.filter_entries(parsed);
    tracing::debug!("Kept {} of {} sitemap entries", entries.len(), parsed_count);

    if !entries.is_empty() && options.include_ai_entries {
        entries.extend(ai_entries(&origin, &today));
    }

    dedup_by_loc(entries)
}

/// Builds the LLM sitemap document. Always returns a well-formed `urlset`.
pub async fn build_llm_sitemap(
    request: &SitemapRequest,
    options: &LlmSitemapOptions,
    http: &reqwest::Client,
    content: &dyn ContentClient,
) -> String {
    let entries = collect_llm_entries(request, options, http, content).await;
    serialize_urlset(&entries, &today())
}
