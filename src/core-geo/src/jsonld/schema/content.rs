//! Editorial nodes: Article and FAQPage.

use data_model_geo::models::FaqItem;
use serde::{Deserialize, Serialize};

use super::{ImageObject, OneOrMany, PersonNode, non_empty_list};
use crate::jsonld::SCHEMA_CONTEXT;
use crate::jsonld::text::{extract_faq_from_html, non_blank, strip_html};

// Article

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthorInput {
    pub name: String,
    pub url: Option<String>,
    pub image: Option<String>,
    pub job_title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublisherInput {
    pub name: String,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArticleInput {
    pub headline: String,
    pub description: Option<String>,
    pub image: Option<OneOrMany<String>>,
    pub date_published: Option<String>,
    pub date_modified: Option<String>,
    pub author: Option<AuthorInput>,
    pub publisher: Option<PublisherInput>,
    pub url: Option<String>,
    /// Rich-text HTML of the body
    pub article_body: Option<String>,
    pub in_language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublisherNode {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebPageRef {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<String>>,
    #[serde(rename = "datePublished", skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(rename = "dateModified", skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<PersonNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<PublisherNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "mainEntityOfPage", skip_serializing_if = "Option::is_none")]
    pub main_entity_of_page: Option<WebPageRef>,
    #[serde(rename = "articleBody", skip_serializing_if = "Option::is_none")]
    pub article_body: Option<String>,
    #[serde(rename = "inLanguage", skip_serializing_if = "Option::is_none")]
    pub in_language: Option<String>,
}

pub fn build_article(input: &ArticleInput) -> ArticleSchema {
    let url = non_blank(input.url.as_deref());

    let author = input
        .author
        .as_ref()
        .filter(|a| !a.name.trim().is_empty())
        .map(|a| PersonNode {
            url: non_blank(a.url.as_deref()),
            image: non_blank(a.image.as_deref()),
            job_title: non_blank(a.job_title.as_deref()),
            ..PersonNode::named(a.name.trim())
        });

    let publisher = input
        .publisher
        .as_ref()
        .filter(|p| !p.name.trim().is_empty())
        .map(|p| PublisherNode {
            kind: "Organization",
            name: p.name.trim().to_string(),
            logo: non_blank(p.logo.as_deref()).map(ImageObject::new),
        });

    ArticleSchema {
        context: SCHEMA_CONTEXT,
        kind: "Article",
        headline: input.headline.clone(),
        description: non_blank(input.description.as_deref()),
        image: input.image.clone().and_then(|images| non_empty_list(&images.into_vec())),
        date_published: non_blank(input.date_published.as_deref()),
        date_modified: non_blank(input.date_modified.as_deref()),
        author,
        publisher,
        main_entity_of_page: url.clone().map(|id| WebPageRef { kind: "WebPage", id }),
        url,
        article_body: input.article_body.as_deref().map(strip_html).filter(|b| !b.is_empty()),
        in_language: non_blank(input.in_language.as_deref()),
    }
}

// FAQPage

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqPageInput {
    /// Explicit items; when absent they are extracted from `html`
    pub items: Option<Vec<FaqItem>>,
    /// Rich text containing `<details><summary>` blocks
    pub html: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerNode {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionNode {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(rename = "acceptedAnswer")]
    pub accepted_answer: AnswerNode,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqPageSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "mainEntity")]
    pub main_entity: Vec<QuestionNode>,
}

/// None when there are no questions to list.
pub fn build_faq_page(input: &FaqPageInput) -> Option<FaqPageSchema> {
    let items: Vec<FaqItem> = match &input.items {
        Some(items) => items.iter().filter(|item| item.is_complete()).cloned().collect(),
        None => input.html.as_deref().map(extract_faq_from_html).unwrap_or_default(),
    };
    if items.is_empty() {
        return None;
    }

    Some(FaqPageSchema {
        context: SCHEMA_CONTEXT,
        kind: "FAQPage",
        main_entity: items
            .into_iter()
            .map(|item| QuestionNode {
                kind: "Question",
                name: item.question,
                accepted_answer: AnswerNode {
                    kind: "Answer",
                    text: strip_html(&item.answer),
                },
            })
            .collect(),
    })
}
