use data_model_geo::models::{ServiceItem, ServiceResponse};
use data_model_geo::profile::SiteProfile;
use tracing::warn;

use super::last_modified_now;
use crate::common::cache::{CacheControl, DAY, HOUR};
use crate::content::{ContentClient, SitemapRequest};

pub const SERVICE_CACHE: CacheControl = CacheControl::public(HOUR).s_maxage(HOUR).stale_while_revalidate(DAY);

/// Payload of `/ai/service.json`: CMS services when it has any, otherwise the profile's.
pub async fn load_services(content: &dyn ContentClient, request: &SitemapRequest, profile: &SiteProfile) -> ServiceResponse {
    let services = match content.get_services(request).await {
        Ok(services) if !services.is_empty() => services,
        Ok(_) => profile.services.clone(),
        Err(e) => {
            warn!(error = %e, "Failed to load services from CMS, using site profile");
            profile.services.clone()
        }
    };

    ServiceResponse {
        services: services.into_iter().filter(|s| !s.name.trim().is_empty()).collect::<Vec<ServiceItem>>(),
        last_modified: last_modified_now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MockContent;
    use data_model_geo::test_helpers::sample_profile;

    fn request() -> SitemapRequest {
        SitemapRequest::new("https://sync.example.com", "default", "en")
    }

    fn service(name: &str) -> ServiceItem {
        ServiceItem {
            name: name.to_string(),
            description: format!("{name} description"),
            category: "Support".to_string(),
        }
    }

    #[tokio::test]
    async fn test_prefers_cms_services() {
        let content = MockContent::new().with_services(vec![service("Repairs"), service("")]);
        let response = load_services(&content, &request(), &sample_profile()).await;
        assert_eq!(response.services, vec![service("Repairs")]);
    }

    #[tokio::test]
    async fn test_falls_back_to_profile() {
        let response = load_services(&MockContent::with_failure(), &request(), &sample_profile()).await;
        assert_eq!(response.services.len(), 1);
        assert_eq!(response.services[0].name, "Product Catalog");

        let response = load_services(&MockContent::new(), &request(), &sample_profile()).await;
        assert_eq!(response.services[0].category, "Commerce");
    }

    #[test]
    fn test_cache_header() {
        assert_eq!(
            SERVICE_CACHE.header_value(),
            "public, max-age=3600, s-maxage=3600, stale-while-revalidate=86400"
        );
    }
}
