//! HTTP client for the CMS delivery API.
//!
//! AI configuration items are read through the GraphQL endpoint; the site's
//! sitemap and robots.txt are plain GETs with the site name as `sc_site`.

use async_trait::async_trait;
use data_model_geo::models::{FaqItem, ServiceItem, SummaryItem};
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use url::Url;

use super::{ContentClient, SitemapRequest};
use crate::common::config::optional_var;
use crate::errors::ContentError;

const GRAPHQL_PATH: &str = "/api/graphql/v1";
const API_KEY_HEADER: &str = "sc_apikey";

const SUMMARY_PATH_SUFFIX: &str = "/Data/AI Config/Summary";
const FAQ_PATH_SUFFIX: &str = "/Data/AI Config/FAQ";
const SERVICES_PATH_SUFFIX: &str = "/Data/AI Config/Services";

const SUMMARY_QUERY: &str = r#"
query SummaryQuery($path: String!, $language: String!) {
  item(path: $path, language: $language) {
    ... on AISummary {
      title { jsonValue }
      description { jsonValue }
    }
  }
}"#;

const FAQ_QUERY: &str = r#"
query FaqQuery($path: String!, $language: String!) {
  item(path: $path, language: $language) {
    children(first: 20) {
      results {
        ... on AIFAQItem {
          question { jsonValue }
          answer { jsonValue }
        }
      }
    }
  }
}"#;

const SERVICES_QUERY: &str = r#"
query ServiceQuery($path: String!, $language: String!) {
  item(path: $path, language: $language) {
    children(first: 30) {
      results {
        ... on AIService {
          name
          description { jsonValue }
          category { jsonValue }
        }
      }
    }
  }
}"#;

/// Connection settings for the CMS, read from `EDGE_*` variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeConfig {
    /// Base URL of the delivery host, without trailing slash
    pub url: String,
    pub api_key: String,
    /// Item path of the site root, e.g. `/sitecore/content/sync/main`
    pub content_root: Option<String>,
    pub language: String,
}

impl EdgeConfig {
    /// Some only when both `EDGE_URL` and `EDGE_API_KEY` are set.
    pub fn from_env() -> Option<Self> {
        let url = optional_var("EDGE_URL")?;
        let api_key = optional_var("EDGE_API_KEY")?;
        Some(Self {
            url: url.trim_end_matches('/').to_string(),
            api_key,
            content_root: optional_var("EDGE_CONTENT_ROOT").map(|r| r.trim_end_matches('/').to_string()),
            language: optional_var("EDGE_LANGUAGE").unwrap_or_else(|| "en".to_string()),
        })
    }
}

// GraphQL response shapes

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorMessage {
    message: String,
}

/// A CMS field; `jsonValue` is either the raw string or `{ "value": "…" }`.
#[derive(Debug, Default, Deserialize)]
struct EdgeField {
    #[serde(rename = "jsonValue")]
    json_value: Option<Value>,
}

impl EdgeField {
    fn text(&self) -> String {
        match &self.json_value {
            Some(Value::String(s)) => s.trim().to_string(),
            Some(Value::Object(map)) => map
                .get("value")
                .and_then(Value::as_str)
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }
}

fn field_text(field: &Option<EdgeField>) -> String {
    field.as_ref().map(EdgeField::text).unwrap_or_default()
}

#[derive(Debug, Deserialize)]
struct ItemData<T> {
    item: Option<T>,
}

#[derive(Debug, Deserialize)]
struct SummaryResult {
    title: Option<EdgeField>,
    description: Option<EdgeField>,
}

#[derive(Debug, Deserialize)]
struct ChildrenItem<T> {
    children: Option<ChildResults<T>>,
}

#[derive(Debug, Deserialize)]
struct ChildResults<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct FaqResult {
    question: Option<EdgeField>,
    answer: Option<EdgeField>,
}

#[derive(Debug, Deserialize)]
struct ServiceResult {
    name: Option<String>,
    description: Option<EdgeField>,
    category: Option<EdgeField>,
}

fn child_results<T>(data: ItemData<ChildrenItem<T>>) -> Vec<T> {
    data.item
        .and_then(|item| item.children)
        .map(|children| children.results)
        .unwrap_or_default()
}

/// `ContentClient` backed by the CMS delivery API.
#[derive(Debug, Clone)]
pub struct EdgeClient {
    config: EdgeConfig,
    http: reqwest::Client,
}

impl EdgeClient {
    pub fn new(config: EdgeConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    fn item_path(&self, suffix: &str) -> Result<String, ContentError> {
        let root = self
            .config
            .content_root
            .as_deref()
            .ok_or(ContentError::NotConfigured("EDGE_CONTENT_ROOT"))?;
        Ok(format!("{}{}", root, suffix))
    }

    /// The site's language, or `EDGE_LANGUAGE` when the site has none.
    fn language<'a>(&'a self, request: &'a SitemapRequest) -> &'a str {
        let language = request.language.trim();
        if language.is_empty() { self.config.language.as_str() } else { language }
    }

    async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        path: &str,
        request: &SitemapRequest,
    ) -> Result<T, ContentError> {
        let url = format!("{}{}", self.config.url, GRAPHQL_PATH);
        let body = json!({
            "query": query,
            "variables": { "path": path, "language": self.language(request) },
        });

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::UpstreamStatus {
                url,
                status: status.as_u16(),
            });
        }

        let parsed: GraphQlResponse<T> = response.json().await?;
        if !parsed.errors.is_empty() {
            let messages: Vec<String> = parsed.errors.into_iter().map(|e| e.message).collect();
            return Err(ContentError::GraphQlError(messages.join("; ")));
        }
        parsed
            .data
            .ok_or_else(|| ContentError::GraphQlError("response has no data".to_string()))
    }

    /// GETs a site-scoped document such as `/sitemap.xml`.
    async fn get_site_document(&self, path: &str, accept: &str, request: &SitemapRequest) -> Result<String, ContentError> {
        let mut url = Url::parse(&format!("{}{}", self.config.url, path))?;
        url.query_pairs_mut().append_pair("sc_site", &request.site_name);

        let response = self
            .http
            .get(url.clone())
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(ACCEPT, accept)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::UpstreamStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl ContentClient for EdgeClient {
    async fn get_sitemap(&self, request: &SitemapRequest) -> Result<String, ContentError> {
        self.get_site_document("/sitemap.xml", "application/xml", request).await
    }

    async fn get_robots(&self, request: &SitemapRequest) -> Result<String, ContentError> {
        self.get_site_document("/robots.txt", "text/plain", request).await
    }

    async fn get_summary(&self, request: &SitemapRequest) -> Result<Option<SummaryItem>, ContentError> {
        let path = self.item_path(SUMMARY_PATH_SUFFIX)?;
        let data: ItemData<SummaryResult> = self.query(SUMMARY_QUERY, &path, request).await?;

        let Some(item) = data.item else {
            return Ok(None);
        };
        let title = field_text(&item.title);
        let description = field_text(&item.description);
        if title.is_empty() && description.is_empty() {
            return Ok(None);
        }
        Ok(Some(SummaryItem { title, description }))
    }

    async fn get_faq(&self, request: &SitemapRequest) -> Result<Vec<FaqItem>, ContentError> {
        let path = self.item_path(FAQ_PATH_SUFFIX)?;
        let data: ItemData<ChildrenItem<FaqResult>> = self.query(FAQ_QUERY, &path, request).await?;

        Ok(child_results(data)
            .into_iter()
            .map(|child| FaqItem::new(field_text(&child.question), field_text(&child.answer)))
            .filter(FaqItem::is_complete)
            .collect())
    }

    async fn get_services(&self, request: &SitemapRequest) -> Result<Vec<ServiceItem>, ContentError> {
        let path = self.item_path(SERVICES_PATH_SUFFIX)?;
        let data: ItemData<ChildrenItem<ServiceResult>> = self.query(SERVICES_QUERY, &path, request).await?;

        Ok(child_results(data)
            .into_iter()
            .map(|child| ServiceItem {
                name: child.name.unwrap_or_default().trim().to_string(),
                description: field_text(&child.description),
                category: field_text(&child.category),
            })
            .filter(|s| !s.name.is_empty() && !s.description.is_empty())
            .collect())
    }
}
