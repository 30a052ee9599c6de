//! Editorial metadata of a site, loaded from `site-profile.json`.
//!
//! The profile feeds the templated text documents (llms.txt) and is the
//! fallback source for the AI JSON payloads whenever the CMS has nothing to say.

use serde::{Deserialize, Serialize};

use crate::models::{FaqItem, ServiceItem, SummaryItem};

/// A page listed under `## Key pages` in llms.txt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPage {
    pub title: String,
    /// Site-relative path, e.g. `/products`
    pub path: String,
    #[serde(default)]
    pub description: String,
}

/// Publisher information for the Organization node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationProfile {
    pub name: String,
    pub logo: Option<String>,
    pub same_as: Vec<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteProfile {
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub details: String,
    pub key_pages: Vec<KeyPage>,
    pub faq: Vec<FaqItem>,
    pub services: Vec<ServiceItem>,
    pub organization: OrganizationProfile,
    /// Search URL containing `{search_term_string}`, relative or absolute
    pub search_url_template: Option<String>,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            title: "Website".to_string(),
            tagline: "A headless CMS powered website.".to_string(),
            description: "A content-driven website delivered headlessly from a CMS.".to_string(),
            details: "Content is managed in the CMS and delivered to this front-end over HTTP.".to_string(),
            key_pages: vec![KeyPage {
                title: "Home".to_string(),
                path: "/".to_string(),
                description: "Landing page".to_string(),
            }],
            faq: Vec::new(),
            services: Vec::new(),
            organization: OrganizationProfile {
                name: "Website".to_string(),
                ..Default::default()
            },
            search_url_template: None,
        }
    }
}

impl SiteProfile {
    /// The profile's own title and description as a summary.
    pub fn summary(&self) -> SummaryItem {
        SummaryItem {
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }

    /// Organization name, falling back to the site title when none is configured.
    pub fn organization_name(&self) -> &str {
        if self.organization.name.trim().is_empty() {
            &self.title
        } else {
            &self.organization.name
        }
    }
}
