//! Site-level nodes: WebSite, Organization, WebPage, Person, BreadcrumbList.

use serde::{Deserialize, Serialize};

use super::non_empty_list;
use crate::jsonld::SCHEMA_CONTEXT;
use crate::jsonld::text::non_blank;

const SEARCH_QUERY_INPUT: &str = "required name=search_term_string";
const DEFAULT_CONTACT_TYPE: &str = "Customer Service";

// WebSite

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebSiteInput {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    /// Absolute search URL containing `{search_term_string}`
    pub search_url_template: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryPoint {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "urlTemplate")]
    pub url_template: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchAction {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub target: EntryPoint,
    #[serde(rename = "query-input")]
    pub query_input: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebSiteSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "potentialAction", skip_serializing_if = "Option::is_none")]
    pub potential_action: Option<SearchAction>,
}

pub fn build_website(input: &WebSiteInput) -> WebSiteSchema {
    WebSiteSchema {
        context: SCHEMA_CONTEXT,
        kind: "WebSite",
        name: input.name.clone(),
        url: input.url.clone(),
        description: non_blank(input.description.as_deref()),
        potential_action: non_blank(input.search_url_template.as_deref()).map(|template| SearchAction {
            kind: "SearchAction",
            target: EntryPoint {
                kind: "EntryPoint",
                url_template: template,
            },
            query_input: SEARCH_QUERY_INPUT,
        }),
    }
}

// Organization

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactPointInput {
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub contact_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrganizationInput {
    pub name: String,
    pub url: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub same_as: Vec<String>,
    pub contact_point: Option<ContactPointInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactPoint {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "contactType")]
    pub contact_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "sameAs", skip_serializing_if = "Option::is_none")]
    pub same_as: Option<Vec<String>>,
    #[serde(rename = "contactPoint", skip_serializing_if = "Option::is_none")]
    pub contact_point: Option<ContactPoint>,
}

pub fn build_organization(input: &OrganizationInput) -> OrganizationSchema {
    // A contact point without any way to get in touch is dropped
    let contact_point = input.contact_point.as_ref().and_then(|cp| {
        let telephone = non_blank(cp.telephone.as_deref());
        let email = non_blank(cp.email.as_deref());
        if telephone.is_none() && email.is_none() {
            return None;
        }
        Some(ContactPoint {
            kind: "ContactPoint",
            telephone,
            email,
            contact_type: non_blank(cp.contact_type.as_deref()).unwrap_or_else(|| DEFAULT_CONTACT_TYPE.to_string()),
        })
    });

    OrganizationSchema {
        context: SCHEMA_CONTEXT,
        kind: "Organization",
        name: input.name.clone(),
        url: non_blank(input.url.as_deref()),
        logo: non_blank(input.logo.as_deref()),
        description: non_blank(input.description.as_deref()),
        same_as: non_empty_list(&input.same_as),
        contact_point,
    }
}

// WebPage

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebPageInput {
    pub name: String,
    pub url: Option<String>,
    pub description: Option<String>,
    pub in_language: Option<String>,
    /// Name and URL of the containing site
    pub site_name: Option<String>,
    pub site_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebSiteRef {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebPageSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "inLanguage", skip_serializing_if = "Option::is_none")]
    pub in_language: Option<String>,
    #[serde(rename = "isPartOf", skip_serializing_if = "Option::is_none")]
    pub is_part_of: Option<WebSiteRef>,
}

pub fn build_web_page(input: &WebPageInput) -> WebPageSchema {
    let is_part_of = match (non_blank(input.site_name.as_deref()), non_blank(input.site_url.as_deref())) {
        (Some(name), Some(url)) => Some(WebSiteRef {
            kind: "WebSite",
            name,
            url,
        }),
        _ => None,
    };

    WebPageSchema {
        context: SCHEMA_CONTEXT,
        kind: "WebPage",
        name: input.name.clone(),
        url: non_blank(input.url.as_deref()),
        description: non_blank(input.description.as_deref()),
        in_language: non_blank(input.in_language.as_deref()),
        is_part_of,
    }
}

// Person

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonInput {
    pub name: String,
    pub job_title: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
    pub same_as: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(rename = "jobTitle", skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "sameAs", skip_serializing_if = "Option::is_none")]
    pub same_as: Option<Vec<String>>,
}

pub fn build_person(input: &PersonInput) -> PersonSchema {
    PersonSchema {
        context: SCHEMA_CONTEXT,
        kind: "Person",
        name: input.name.clone(),
        job_title: non_blank(input.job_title.as_deref()),
        image: non_blank(input.image.as_deref()),
        url: non_blank(input.url.as_deref()),
        same_as: non_empty_list(&input.same_as),
    }
}

// BreadcrumbList

/// One crumb, already in trail order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbInput {
    pub name: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: usize,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreadcrumbListSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "itemListElement")]
    pub item_list_element: Vec<ListItem>,
}

/// Positions are 1-based in input order. None for an empty trail.
pub fn build_breadcrumb_list(crumbs: &[BreadcrumbInput]) -> Option<BreadcrumbListSchema> {
    if crumbs.is_empty() {
        return None;
    }
    Some(BreadcrumbListSchema {
        context: SCHEMA_CONTEXT,
        kind: "BreadcrumbList",
        item_list_element: crumbs
            .iter()
            .enumerate()
            .map(|(index, crumb)| ListItem {
                kind: "ListItem",
                position: index + 1,
                name: crumb.name.clone(),
                item: non_blank(crumb.url.as_deref()),
            })
            .collect(),
    })
}

/// A page in the navigation hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailPage {
    pub title: String,
    pub url: Option<String>,
}

/// Crumbs for a page: its ancestors root-first, then the page itself.
///
/// A page without ancestors gets a single `Home` crumb linked to the site origin.
pub fn breadcrumb_trail(ancestors: &[TrailPage], current: &TrailPage, origin: &str) -> Vec<BreadcrumbInput> {
    if ancestors.is_empty() {
        return vec![BreadcrumbInput {
            name: "Home".to_string(),
            url: Some(origin.to_string()),
        }];
    }

    ancestors
        .iter()
        .chain(std::iter::once(current))
        .map(|page| BreadcrumbInput {
            name: page.title.clone(),
            url: page.url.clone(),
        })
        .collect()
}
