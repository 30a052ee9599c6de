//! schema.org JSON-LD builders and their script-safe serializer.

pub mod schema;
pub mod text;

use data_model_geo::profile::SiteProfile;
use serde::Serialize;

use schema::{
    ArticleSchema, BreadcrumbListSchema, ContactPointInput, FaqPageSchema, OrganizationInput, OrganizationSchema, PersonSchema,
    PlaceSchema, ProductSchema, ReviewSchema, WebPageSchema, WebSiteInput, WebSiteSchema, build_organization,
    build_website,
};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Any node the builders produce.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StructuredData {
    WebSite(WebSiteSchema),
    Organization(OrganizationSchema),
    WebPage(WebPageSchema),
    Person(PersonSchema),
    Product(ProductSchema),
    Place(PlaceSchema),
    Review(ReviewSchema),
    Article(ArticleSchema),
    FaqPage(FaqPageSchema),
    BreadcrumbList(BreadcrumbListSchema),
}

/// Escapes `<` so the output can sit inside a `<script>` element.
fn escape_script(json: String) -> String {
    json.replace('<', "\\u003c")
}

/// Compact JSON with every `<` written as `\u003c`.
pub fn to_json_ld_string<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value).map(escape_script)
}

/// Indented variant of [`to_json_ld_string`].
pub fn to_json_ld_string_pretty<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value).map(escape_script)
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// `<script type="application/ld+json">` element for `node`.
///
/// Renders an empty string for `null` or an empty object.
pub fn render_script_tag<T: Serialize>(id: &str, node: &T) -> Result<String, serde_json::Error> {
    let value = serde_json::to_value(node)?;
    let empty = match &value {
        serde_json::Value::Null => true,
        serde_json::Value::Object(map) => map.is_empty(),
        _ => false,
    };
    if empty {
        return Ok(String::new());
    }

    Ok(format!(
        r#"<script id="{}" type="application/ld+json">{}</script>"#,
        escape_attribute(id),
        to_json_ld_string(&value)?
    ))
}

/// WebSite and Organization nodes describing the whole site.
///
/// A relative search template is made absolute against `base_url`.
pub fn site_structured_data(profile: &SiteProfile, base_url: &str) -> Vec<StructuredData> {
    let base = base_url.trim_end_matches('/');

    let search_url_template = profile.search_url_template.as_deref().map(|template| {
        if template.starts_with('/') {
            format!("{base}{template}")
        } else {
            template.to_string()
        }
    });

    let website = build_website(&WebSiteInput {
        name: profile.title.clone(),
        url: format!("{base}/"),
        description: Some(profile.description.clone()),
        search_url_template,
    });

    let organization = &profile.organization;
    let organization = build_organization(&OrganizationInput {
        name: profile.organization_name().to_string(),
        url: Some(format!("{base}/")),
        logo: organization.logo.clone(),
        same_as: organization.same_as.clone(),
        contact_point: Some(ContactPointInput {
            telephone: organization.telephone.clone(),
            email: organization.email.clone(),
            contact_type: None,
        }),
        ..Default::default()
    });

    vec![StructuredData::WebSite(website), StructuredData::Organization(organization)]
}
