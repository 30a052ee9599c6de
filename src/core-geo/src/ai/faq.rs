use data_model_geo::models::FaqItem;
use data_model_geo::profile::SiteProfile;
use tracing::warn;

use crate::common::cache::{CacheControl, DAY};
use crate::content::{ContentClient, SitemapRequest};

/// Fewer complete items than this and the endpoint serves an empty list.
pub const MIN_FAQ_ITEMS: usize = 3;
pub const MAX_FAQ_ITEMS: usize = 10;

pub const FAQ_CACHE: CacheControl = CacheControl::public(DAY);

/// The first ten complete items as given, or nothing when fewer than three are complete.
///
/// Incomplete items are dropped before the cap, the same way the CMS client drops them on fetch.
pub fn select_faq_items(items: Vec<FaqItem>) -> Vec<FaqItem> {
    let selected: Vec<FaqItem> = items
        .into_iter()
        .filter(FaqItem::is_complete)
        .take(MAX_FAQ_ITEMS)
        .collect();
    if selected.len() < MIN_FAQ_ITEMS { Vec::new() } else { selected }
}

/// Payload of `/ai/faq.json`: CMS items when it has any, otherwise the profile's.
pub async fn load_faq(content: &dyn ContentClient, request: &SitemapRequest, profile: &SiteProfile) -> Vec<FaqItem> {
    let items = match content.get_faq(request).await {
        Ok(items) if items.iter().any(FaqItem::is_complete) => items,
        Ok(_) => profile.faq.clone(),
        Err(e) => {
            warn!(error = %e, "Failed to load FAQ from CMS, using site profile");
            profile.faq.clone()
        }
    };
    select_faq_items(items)
}
