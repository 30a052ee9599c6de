use data_model_geo::models::SummaryPayload;
use data_model_geo::profile::SiteProfile;
use tracing::{debug, warn};

use super::{MAX_DESCRIPTION_LENGTH, ensure_description_length, last_modified_now};
use crate::common::cache::{CacheControl, DAY};
use crate::content::{ContentClient, SitemapRequest};

pub const SUMMARY_CACHE: CacheControl = CacheControl::public(DAY);

/// Payload of `/ai/summary.json`.
///
/// Blank CMS fields are filled from the profile; a CMS failure falls back to the profile entirely.
pub async fn load_summary(content: &dyn ContentClient, request: &SitemapRequest, profile: &SiteProfile) -> SummaryPayload {
    let fallback = profile.summary();
    let summary = match content.get_summary(request).await {
        Ok(Some(item)) => item,
        Ok(None) => {
            debug!("CMS has no summary item, using site profile");
            fallback.clone()
        }
        Err(e) => {
            warn!(error = %e, "Failed to load summary from CMS, using site profile");
            fallback.clone()
        }
    };

    let title = if summary.title.trim().is_empty() { fallback.title } else { summary.title };
    let description = if summary.description.trim().is_empty() {
        fallback.description
    } else {
        summary.description
    };

    SummaryPayload {
        title: title.trim().to_string(),
        description: ensure_description_length(&description, MAX_DESCRIPTION_LENGTH),
        last_modified: last_modified_now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MockContent;
    use data_model_geo::models::SummaryItem;
    use data_model_geo::test_helpers::sample_profile;

    fn request() -> SitemapRequest {
        SitemapRequest::new("https://sync.example.com", "default", "en")
    }

    #[tokio::test]
    async fn test_prefers_cms_summary() {
        let content = MockContent::new().with_summary(SummaryItem {
            title: "From CMS".to_string(),
            description: "CMS description".to_string(),
        });
        let payload = load_summary(&content, &request(), &sample_profile()).await;
        assert_eq!(payload.title, "From CMS");
        assert_eq!(payload.description, "CMS description");
    }

    #[tokio::test]
    async fn test_falls_back_to_profile_on_error() {
        let payload = load_summary(&MockContent::with_failure(), &request(), &sample_profile()).await;
        assert_eq!(payload.title, "SYNC");
        assert_eq!(payload.description, "SYNC sells speakers and headphones.");
    }

    #[tokio::test]
    async fn test_blank_cms_fields_use_profile() {
        let content = MockContent::new().with_summary(SummaryItem {
            title: "From CMS".to_string(),
            description: "   ".to_string(),
        });
        let payload = load_summary(&content, &request(), &sample_profile()).await;
        assert_eq!(payload.title, "From CMS");
        assert_eq!(payload.description, "SYNC sells speakers and headphones.");
    }

    #[tokio::test]
    async fn test_long_description_is_capped() {
        let content = MockContent::new().with_summary(SummaryItem {
            title: "T".to_string(),
            description: "x".repeat(2000),
        });
        let payload = load_summary(&content, &request(), &sample_profile()).await;
        assert_eq!(payload.description.chars().count(), MAX_DESCRIPTION_LENGTH);
    }

    #[test]
    fn test_cache_header() {
        assert_eq!(SUMMARY_CACHE.header_value(), "public, max-age=86400");
    }
}
