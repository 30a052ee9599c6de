//! Product, Place / LocalBusiness and Review nodes.

use serde::{Deserialize, Serialize};

use super::{AddressInput, GeoCoordinates, OneOrMany, PersonNode, PostalAddress};
use crate::jsonld::SCHEMA_CONTEXT;
use crate::jsonld::text::{extract_address_text, non_blank, sanitize_price, strip_html};

const DEFAULT_CURRENCY: &str = "USD";
const IN_STOCK: &str = "https://schema.org/InStock";
const DEFAULT_BEST_RATING: u32 = 5;

// Product

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AggregateRatingInput {
    pub rating_value: f64,
    pub review_count: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    /// Plain text or rich-text HTML
    pub description: Option<String>,
    pub image: Option<OneOrMany<String>>,
    pub url: Option<String>,
    /// Display price, e.g. `$1,299.00`
    pub price: Option<String>,
    pub price_currency: Option<String>,
    pub brand: Option<String>,
    pub aggregate_rating: Option<AggregateRatingInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferNode {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub price: String,
    #[serde(rename = "priceCurrency")]
    pub price_currency: String,
    pub availability: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandNode {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRatingNode {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "ratingValue")]
    pub rating_value: f64,
    #[serde(rename = "reviewCount", skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<OneOrMany<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offers: Option<OfferNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<BrandNode>,
    #[serde(rename = "aggregateRating", skip_serializing_if = "Option::is_none")]
    pub aggregate_rating: Option<AggregateRatingNode>,
}

pub fn build_product(input: &ProductInput) -> ProductSchema {
    let offers = input
        .price
        .as_deref()
        .map(sanitize_price)
        .filter(|p| !p.is_empty())
        .map(|price| OfferNode {
            kind: "Offer",
            price,
            price_currency: non_blank(input.price_currency.as_deref()).unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            availability: IN_STOCK,
        });

    let image = match &input.image {
        Some(OneOrMany::One(url)) => non_blank(Some(url.as_str())).map(OneOrMany::One),
        Some(OneOrMany::Many(urls)) => super::non_empty_list(urls).map(OneOrMany::Many),
        None => None,
    };

    ProductSchema {
        context: SCHEMA_CONTEXT,
        kind: "Product",
        name: input.name.clone(),
        description: input.description.as_deref().map(strip_html).filter(|d| !d.is_empty()),
        image,
        url: non_blank(input.url.as_deref()),
        offers,
        brand: non_blank(input.brand.as_deref()).map(|name| BrandNode { kind: "Brand", name }),
        aggregate_rating: input.aggregate_rating.as_ref().map(|rating| AggregateRatingNode {
            kind: "AggregateRating",
            rating_value: rating.rating_value,
            review_count: rating.review_count,
        }),
    }
}

// Place

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceKind {
    #[default]
    Place,
    LocalBusiness,
}

impl PlaceKind {
    fn as_str(self) -> &'static str {
        match self {
            PlaceKind::Place => "Place",
            PlaceKind::LocalBusiness => "LocalBusiness",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaceInput {
    pub kind: PlaceKind,
    pub name: String,
    pub address: Option<AddressInput>,
    /// Rich text searched for an `<address>` element when `address` is absent
    pub html: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub telephone: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub address: PostalAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoCoordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// None when no address can be determined from the fields or the HTML.
pub fn build_place(input: &PlaceInput) -> Option<PlaceSchema> {
    let address = input
        .address
        .as_ref()
        .and_then(PostalAddress::from_input)
        .or_else(|| {
            input
                .html
                .as_deref()
                .and_then(extract_address_text)
                .map(PostalAddress::street)
        })?;

    Some(PlaceSchema {
        context: SCHEMA_CONTEXT,
        kind: input.kind.as_str(),
        name: input.name.clone(),
        address,
        geo: GeoCoordinates::from_pair(input.latitude, input.longitude),
        telephone: non_blank(input.telephone.as_deref()),
        url: non_blank(input.url.as_deref()),
    })
}

// Review

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReviewInput {
    pub author_name: String,
    /// Plain text or rich-text HTML
    pub review_body: Option<String>,
    pub rating_value: Option<f64>,
    pub best_rating: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingNode {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "ratingValue")]
    pub rating_value: f64,
    #[serde(rename = "bestRating")]
    pub best_rating: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub author: PersonNode,
    #[serde(rename = "reviewBody", skip_serializing_if = "Option::is_none")]
    pub review_body: Option<String>,
    #[serde(rename = "reviewRating", skip_serializing_if = "Option::is_none")]
    pub review_rating: Option<RatingNode>,
}

pub fn build_review(input: &ReviewInput) -> ReviewSchema {
    ReviewSchema {
        context: SCHEMA_CONTEXT,
        kind: "Review",
        author: PersonNode::named(input.author_name.clone()),
        review_body: input.review_body.as_deref().map(strip_html).filter(|b| !b.is_empty()),
        review_rating: input.rating_value.map(|rating_value| RatingNode {
            kind: "Rating",
            rating_value,
            best_rating: input.best_rating.unwrap_or(DEFAULT_BEST_RATING),
        }),
    }
}
