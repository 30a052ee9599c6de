//! Test utilities shared by the workspace crates.
//!
//! Provides sample profiles, site lists and sitemap documents so tests do not
//! have to repeat XML boilerplate.

use crate::models::{FaqItem, ServiceItem, SiteInfo};
use crate::profile::{KeyPage, OrganizationProfile, SiteProfile};

/// A profile with enough FAQ items and services to exercise every endpoint.
pub fn sample_profile() -> SiteProfile {
    SiteProfile {
        title: "SYNC".to_string(),
        tagline: "Audio gear for people who listen.".to_string(),
        description: "SYNC sells speakers and headphones.".to_string(),
        details: "The site showcases audio products and video content.".to_string(),
        key_pages: vec![
            KeyPage {
                title: "Home".to_string(),
                path: "/".to_string(),
                description: "Brand landing and featured products".to_string(),
            },
            KeyPage {
                title: "Speakers".to_string(),
                path: "/Speakers".to_string(),
                description: "Speaker catalog".to_string(),
            },
        ],
        faq: vec![
            FaqItem::new("What do you sell?", "Speakers and headphones."),
            FaqItem::new("Do you ship abroad?", "Yes, to most countries."),
            FaqItem::new("Is there a warranty?", "Two years on all products."),
        ],
        services: vec![ServiceItem {
            name: "Product Catalog".to_string(),
            description: "Browse the full speaker lineup.".to_string(),
            category: "Commerce".to_string(),
        }],
        organization: OrganizationProfile {
            name: "SYNC Audio".to_string(),
            logo: Some("https://sync.example.com/logo.png".to_string()),
            same_as: vec!["https://social.example.com/sync".to_string()],
            email: None,
            telephone: None,
        },
        search_url_template: Some("/search?q={search_term_string}".to_string()),
    }
}

/// Two sites: an exact host and a wildcard catch-all.
pub fn sample_sites() -> Vec<SiteInfo> {
    vec![
        SiteInfo::new("shop", "shop.example.com"),
        SiteInfo::new("main", "*"),
    ]
}

/// A `urlset` document with one bare `<url>` per location.
pub fn sample_sitemap_xml(locs: &[&str]) -> String {
    let urls: String = locs
        .iter()
        .map(|loc| format!("  <url>\n    <loc>{loc}</loc>\n  </url>\n"))
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{urls}</urlset>"
    )
}

/// A `sitemapindex` document pointing at the given child sitemaps.
pub fn sample_sitemap_index_xml(locs: &[&str]) -> String {
    let sitemaps: String = locs
        .iter()
        .map(|loc| format!("  <sitemap>\n    <loc>{loc}</loc>\n  </sitemap>\n"))
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<sitemapindex xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{sitemaps}</sitemapindex>"
    )
}
