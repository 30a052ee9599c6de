//! schema.org node types and their builders.
//!
//! Each builder takes a plain input struct (deserializable, so it can come from a
//! JSON file) and returns a closed output struct whose optional fields are skipped
//! when absent. Blank strings count as absent.

pub mod commerce;
pub mod content;
pub mod site;

use serde::{Deserialize, Serialize};

pub use commerce::{
    AggregateRatingInput, OfferNode, PlaceInput, PlaceKind, PlaceSchema, ProductInput, ProductSchema, ReviewInput, ReviewSchema,
    build_place, build_product, build_review,
};
pub use content::{ArticleInput, ArticleSchema, FaqPageInput, FaqPageSchema, build_article, build_faq_page};
pub use site::{
    BreadcrumbInput, BreadcrumbListSchema, ContactPointInput, OrganizationInput, OrganizationSchema, PersonInput,
    PersonSchema, TrailPage, WebPageInput, WebPageSchema, WebSiteInput, WebSiteSchema, breadcrumb_trail,
    build_breadcrumb_list, build_organization, build_person, build_web_page, build_website,
};

use crate::jsonld::text::non_blank;

/// A value schema.org accepts either alone or as a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

/// A `Person` nested inside another node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonNode {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "jobTitle", skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
}

impl PersonNode {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            kind: "Person",
            name: name.into(),
            url: None,
            image: None,
            job_title: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: String,
}

impl ImageObject {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            kind: "ImageObject",
            url: url.into(),
        }
    }
}

/// Postal address fields as they arrive from content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddressInput {
    pub street_address: Option<String>,
    pub address_locality: Option<String>,
    pub address_region: Option<String>,
    pub postal_code: Option<String>,
    pub address_country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "streetAddress", skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(rename = "addressLocality", skip_serializing_if = "Option::is_none")]
    pub address_locality: Option<String>,
    #[serde(rename = "addressRegion", skip_serializing_if = "Option::is_none")]
    pub address_region: Option<String>,
    #[serde(rename = "postalCode", skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(rename = "addressCountry", skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
}

impl PostalAddress {
    /// None when every field is blank.
    pub fn from_input(input: &AddressInput) -> Option<Self> {
        let address = Self {
            kind: "PostalAddress",
            street_address: non_blank(input.street_address.as_deref()),
            address_locality: non_blank(input.address_locality.as_deref()),
            address_region: non_blank(input.address_region.as_deref()),
            postal_code: non_blank(input.postal_code.as_deref()),
            address_country: non_blank(input.address_country.as_deref()),
        };
        let empty = address.street_address.is_none()
            && address.address_locality.is_none()
            && address.address_region.is_none()
            && address.postal_code.is_none()
            && address.address_country.is_none();
        if empty { None } else { Some(address) }
    }

    pub fn street(street_address: String) -> Self {
        Self {
            kind: "PostalAddress",
            street_address: Some(street_address),
            address_locality: None,
            address_region: None,
            postal_code: None,
            address_country: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoCoordinates {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinates {
    /// Only when both coordinates are known and finite.
    pub fn from_pair(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        Some(Self {
            kind: "GeoCoordinates",
            latitude: latitude.filter(|v| v.is_finite())?,
            longitude: longitude.filter(|v| v.is_finite())?,
        })
    }
}

/// `Option<Vec<_>>` that is None for an empty list.
pub(crate) fn non_empty_list(values: &[String]) -> Option<Vec<String>> {
    let kept: Vec<String> = values.iter().filter_map(|v| non_blank(Some(v.as_str()))).collect();
    if kept.is_empty() { None } else { Some(kept) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_or_many_deserializes_both_shapes() {
        let one: OneOrMany<String> = serde_json::from_str(r#""a.png""#).unwrap();
        let many: OneOrMany<String> = serde_json::from_str(r#"["a.png", "b.png"]"#).unwrap();
        assert_eq!(one.into_vec(), vec!["a.png"]);
        assert_eq!(many.into_vec(), vec!["a.png", "b.png"]);
    }

    #[test]
    fn test_blank_address_is_none() {
        let input = AddressInput {
            street_address: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(PostalAddress::from_input(&input).is_none());
    }

    #[test]
    fn test_geo_needs_both_coordinates() {
        assert!(GeoCoordinates::from_pair(Some(1.0), None).is_none());
        let geo = GeoCoordinates::from_pair(Some(45.5), Some(-73.6)).unwrap();
        assert_eq!(
            serde_json::to_value(geo).unwrap(),
            serde_json::json!({"@type": "GeoCoordinates", "latitude": 45.5, "longitude": -73.6})
        );
    }

    #[test]
    fn test_geo_skips_non_finite_coordinates() {
        assert!(GeoCoordinates::from_pair(Some(f64::NAN), Some(2.0)).is_none());
        assert!(GeoCoordinates::from_pair(Some(1.0), Some(f64::INFINITY)).is_none());
        assert!(GeoCoordinates::from_pair(Some(f64::NEG_INFINITY), Some(f64::NAN)).is_none());
    }

    #[test]
    fn test_non_empty_list_drops_blanks() {
        assert_eq!(non_empty_list(&["".to_string()]), None);
        assert_eq!(
            non_empty_list(&["https://a".to_string(), " ".to_string()]),
            Some(vec!["https://a".to_string()])
        );
    }
}
