use data_model_geo::models::SitemapEntry;
use reqwest::header::ACCEPT;

use crate::errors::SitemapError;
use crate::sitemap::batch::process_in_order;
use crate::sitemap::parse::parse_url_entries;

/// GETs a sitemap document. Non-2xx statuses are errors.
pub async fn fetch_sitemap_xml(client: &reqwest::Client, url: &str) -> Result<String, SitemapError> {
    tracing::debug!("Fetching sitemap {}", url);
    let response = client.get(url).header(ACCEPT, "application/xml").send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SitemapError::UpstreamStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response.text().await?)
}

/// Fetches the child sitemaps of an index and concatenates their entries in index order.
///
/// Children that fail or answer non-2xx are logged and skipped.
pub async fn fetch_child_entries(client: &reqwest::Client, locs: Vec<String>, concurrency: usize) -> Vec<SitemapEntry> {
    let per_child = process_in_order(
        locs,
        |loc, index| async move {
            match fetch_sitemap_xml(client, &loc).await {
                Ok(xml) => Some(parse_url_entries(&xml)),
                Err(e) => {
                    tracing::warn!("Skipping child sitemap {} ({}): {}", index, loc, e);
                    None
                }
            }
        },
        concurrency,
    )
    .await;

    per_child.into_iter().flatten().collect()
}
