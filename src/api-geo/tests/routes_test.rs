//! Integration tests for API route handlers
//!
//! Tests key endpoints:
//! - GET /sitemap-llm.xml - LLM sitemap under both policies
//! - GET /llms.txt, /.well-known/ai.txt, /robots.txt - text documents
//! - GET /ai/summary.json, /ai/faq.json, /ai/service.json, /ai/structured-data.json
//! - Internal rewrite targets under /api/
//! - Non-GET methods and unknown paths

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use core_geo::common::config::AppConfig;
use core_geo::content::{ContentClient, MockContent, SiteResolver, StaticContent};
use core_geo::sitemap::SitemapPolicy;
use data_model_geo::models::{FaqItem, ServiceResponse, SummaryPayload};
use data_model_geo::test_helpers::{sample_profile, sample_sitemap_xml, sample_sites};
use http_body_util::BodyExt;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use api_geo::{AppState, routes::router};

const SITE: &str = "sync.example.com";

fn test_config(policy: SitemapPolicy) -> AppConfig {
    AppConfig {
        site_url: Some("https://sync.example.com".to_string()),
        sites_file: PathBuf::from("sites.json"),
        site_profile: PathBuf::from("site-profile.json"),
        sitemap_policy: policy,
        edge: None,
        upstream_timeout: Duration::from_secs(2),
        fetch_concurrency: 2,
    }
}

/// Helper to create a router around the given content source
fn test_router(policy: SitemapPolicy, content: Arc<dyn ContentClient>) -> Router {
    let config = test_config(policy);
    let http = config.http_client().unwrap();
    let sites = SiteResolver::new(sample_sites()).unwrap();
    let state = AppState::new(config, sites, sample_profile(), content, http);
    router().with_state(state)
}

/// Router serving the sample profile without a CMS
fn static_router() -> Router {
    test_router(SitemapPolicy::AllPages, Arc::new(StaticContent::new(Arc::new(sample_profile()))))
}

fn get(uri: &str, host: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::HOST, host)
        .body(Body::empty())
        .unwrap()
}

fn header_of<'a>(response: &'a Response<Body>, name: header::HeaderName) -> &'a str {
    response.headers().get(name).unwrap().to_str().unwrap()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Helper to parse JSON response body
async fn response_json<T: serde::de::DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

//
// Routing
//

#[tokio::test]
async fn test_health() {
    let response = static_router().oneshot(get("/health", SITE)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "healthy");
}

#[tokio::test]
async fn test_post_is_method_not_allowed() {
    for uri in ["/llms.txt", "/api/ai/faq", "/sitemap-llm.xml"] {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::HOST, SITE)
            .body(Body::empty())
            .unwrap();
        let response = static_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{uri}");
        assert_eq!(header_of(&response, header::ALLOW), "GET");
        let body: serde_json::Value = response_json(response).await;
        assert_eq!(body, serde_json::json!({"error": "Method not allowed"}));
    }
}

#[tokio::test]
async fn test_head_follows_get() {
    let request = Request::builder()
        .method("HEAD")
        .uri("/llms.txt")
        .header(header::HOST, SITE)
        .body(Body::empty())
        .unwrap();
    let response = static_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header_of(&response, header::CONTENT_TYPE), "text/markdown; charset=utf-8");
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let response = static_router().oneshot(get("/nope", SITE)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rewrite_targets_serve_the_same_documents() {
    let public = body_text(static_router().oneshot(get("/llms.txt", SITE)).await.unwrap()).await;
    let internal = body_text(static_router().oneshot(get("/api/llms-txt", SITE)).await.unwrap()).await;
    assert_eq!(public, internal);

    let response = static_router().oneshot(get("/api/well-known/ai-txt", SITE)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let response = static_router().oneshot(get("/api/ai/structured-data", SITE)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

//
// Text documents
//

#[tokio::test]
async fn test_llms_txt() {
    let response = static_router().oneshot(get("/llms.txt", SITE)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header_of(&response, header::CACHE_CONTROL), "public, max-age=3600, s-maxage=3600");

    let body = body_text(response).await;
    assert!(body.starts_with("# SYNC\n\n> Audio gear for people who listen.\n"));
    assert!(body.contains("- [Speakers](https://sync.example.com/Speakers): Speaker catalog\n"));
    assert!(body.contains("- [LLM Sitemap](https://sync.example.com/sitemap-llm.xml)"));
}

#[tokio::test]
async fn test_ai_txt() {
    let response = static_router().oneshot(get("/.well-known/ai.txt", SITE)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header_of(&response, header::CONTENT_TYPE), "text/plain; charset=utf-8");
    assert_eq!(header_of(&response, header::CACHE_CONTROL), "public, max-age=86400, s-maxage=86400");
    assert_eq!(header_of(&response, header::X_CONTENT_TYPE_OPTIONS), "nosniff");

    let body = body_text(response).await;
    assert!(body.starts_with("# AI Crawler Permissions for https://sync.example.com\n"));
    assert!(body.contains("AI-Endpoint: https://sync.example.com/ai/service.json\n"));
}

#[tokio::test]
async fn test_ai_txt_prefers_host_over_forwarded_host() {
    let request = Request::builder()
        .uri("/.well-known/ai.txt")
        .header(header::HOST, "direct.example.com")
        .header("x-forwarded-host", "proxy.example.com")
        .body(Body::empty())
        .unwrap();
    let body = body_text(static_router().oneshot(request).await.unwrap()).await;
    assert!(body.starts_with("# AI Crawler Permissions for https://direct.example.com\n"));
}

#[tokio::test]
async fn test_robots_without_cms_is_permissive() {
    let response = static_router().oneshot(get("/robots.txt", SITE)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header_of(&response, header::CONTENT_TYPE), "text/plain");

    let body = body_text(response).await;
    assert!(body.starts_with("# Robots.txt for https://sync.example.com\n"));
    assert!(body.contains("User-agent: GPTBot\nAllow: /"));
    assert!(body.ends_with("Sitemap: https://sync.example.com/sitemap.xml\n"));
}

#[tokio::test]
async fn test_robots_merges_cms_document_for_resolved_site() {
    let mock = Arc::new(MockContent::new().with_robots("User-agent: *\nDisallow: /private"));
    let app = test_router(SitemapPolicy::AllPages, mock.clone());

    let response = app.oneshot(get("/robots.txt", "shop.example.com:8443")).await.unwrap();
    let body = body_text(response).await;

    assert!(body.starts_with("User-agent: *\nDisallow: /private\n\n"));
    assert!(body.contains("User-agent: ClaudeBot\nAllow: /"));
    assert!(body.ends_with("Sitemap: https://shop.example.com:8443/sitemap.xml"));

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].site_name, "shop");
}

//
// AI JSON payloads
//

#[tokio::test]
async fn test_summary_json() {
    let response = static_router().oneshot(get("/ai/summary.json", SITE)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header_of(&response, header::CONTENT_TYPE), "application/json; charset=utf-8");
    assert_eq!(header_of(&response, header::CACHE_CONTROL), "public, max-age=86400");

    let payload: SummaryPayload = response_json(response).await;
    assert_eq!(payload.title, "SYNC");
    assert!(payload.description.chars().count() <= 800);
    assert!(chrono::DateTime::parse_from_rfc3339(&payload.last_modified).is_ok());
}

#[tokio::test]
async fn test_faq_json_from_profile() {
    let response = static_router().oneshot(get("/ai/faq.json", SITE)).await.unwrap();
    assert_eq!(header_of(&response, header::CACHE_CONTROL), "public, max-age=86400");
    let faq: Vec<FaqItem> = response_json(response).await;
    assert_eq!(faq.len(), 3);
}

#[tokio::test]
async fn test_faq_json_with_too_few_items_is_empty() {
    let mock = MockContent::new().with_faq(vec![FaqItem::new("Only?", "One.")]);
    let mut profile_faq_free = sample_profile();
    profile_faq_free.faq.clear();

    let config = test_config(SitemapPolicy::AllPages);
    let http = config.http_client().unwrap();
    let state = AppState::new(
        config,
        SiteResolver::new(sample_sites()).unwrap(),
        profile_faq_free,
        Arc::new(mock),
        http,
    );

    let response = router().with_state(state).oneshot(get("/ai/faq.json", SITE)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "[]");
}

#[tokio::test]
async fn test_ai_payloads_ask_cms_in_site_language() {
    let mock = Arc::new(MockContent::new());
    let mut sites = sample_sites();
    sites[0].language = "fr-FR".to_string();

    let config = test_config(SitemapPolicy::AllPages);
    let http = config.http_client().unwrap();
    let state = AppState::new(config, SiteResolver::new(sites).unwrap(), sample_profile(), mock.clone(), http);
    let app = router().with_state(state);

    for uri in ["/ai/summary.json", "/ai/faq.json", "/ai/service.json"] {
        let response = app.clone().oneshot(get(uri, "shop.example.com")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let requests = mock.requests();
    assert_eq!(requests.len(), 3);
    assert!(requests.iter().all(|r| r.site_name == "shop" && r.language == "fr-FR"));
}

#[tokio::test]
async fn test_service_json() {
    let response = static_router().oneshot(get("/ai/service.json", SITE)).await.unwrap();
    assert_eq!(
        header_of(&response, header::CACHE_CONTROL),
        "public, max-age=3600, s-maxage=3600, stale-while-revalidate=86400"
    );
    let payload: ServiceResponse = response_json(response).await;
    assert_eq!(payload.services.len(), 1);
    assert_eq!(payload.services[0].name, "Product Catalog");
}

#[tokio::test]
async fn test_structured_data_json() {
    let response = static_router().oneshot(get("/ai/structured-data.json", SITE)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let graph: serde_json::Value = response_json(response).await;
    let nodes = graph.as_array().unwrap();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0]["@type"], "WebSite");
    assert_eq!(nodes[1]["@type"], "Organization");
}

//
// LLM sitemap
//

#[tokio::test]
async fn test_sitemap_llm_all_pages() {
    let xml = sample_sitemap_xml(&[
        "https://sync.example.com/",
        "https://sync.example.com/Speakers",
        "https://sync.example.com/api/editing/config",
        "https://sync.example.com/404",
    ]);
    let app = test_router(SitemapPolicy::AllPages, Arc::new(MockContent::new().with_sitemap(xml)));

    let response = app.oneshot(get("/sitemap-llm.xml", SITE)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header_of(&response, header::CONTENT_TYPE), "application/xml; charset=utf-8");
    assert_eq!(
        header_of(&response, header::CACHE_CONTROL),
        "public, max-age=300, s-maxage=300, stale-while-revalidate=3600"
    );

    let body = body_text(response).await;
    assert!(body.contains("<loc>https://sync.example.com/Speakers</loc>"));
    assert!(body.contains("<loc>https://sync.example.com/ai/faq.json</loc>"));
    assert!(!body.contains("/api/editing/"));
    assert!(!body.contains("/404"));
    assert_eq!(body.matches("<url>").count(), 5);
}

#[tokio::test]
async fn test_sitemap_llm_cms_failure_is_empty_urlset() {
    let app = test_router(SitemapPolicy::AllPages, Arc::new(MockContent::with_failure()));
    let response = app.oneshot(get("/sitemap-llm.xml", SITE)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n</urlset>"
    );
}

#[tokio::test]
async fn test_sitemap_llm_home_only_reads_sibling_sitemap() {
    let server = MockServer::start().await;
    let origin = server.uri();
    let home = format!("{origin}/");
    let speakers = format!("{origin}/Speakers");
    let xml = sample_sitemap_xml(&[home.as_str(), speakers.as_str()]);
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(xml))
        .mount(&server)
        .await;

    let host = origin.trim_start_matches("http://").to_string();
    let request = Request::builder()
        .uri("/sitemap-llm.xml")
        .header(header::HOST, host)
        .header("x-forwarded-proto", "http")
        .body(Body::empty())
        .unwrap();

    let app = test_router(SitemapPolicy::HomeOnly, Arc::new(MockContent::new()));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(header_of(&response, header::CACHE_CONTROL), "public, max-age=3600, s-maxage=3600");

    let body = body_text(response).await;
    assert!(body.contains(&format!("<loc>{origin}/</loc>")));
    assert!(!body.contains("Speakers"));
    assert!(!body.contains("/ai/"));
}

#[tokio::test]
async fn test_sitemap_llm_home_only_falls_back_to_base() {
    let request = Request::builder()
        .uri("/sitemap-llm.xml")
        .header(header::HOST, "127.0.0.1:9")
        .header("x-forwarded-proto", "http")
        .body(Body::empty())
        .unwrap();

    let app = test_router(SitemapPolicy::HomeOnly, Arc::new(MockContent::new()));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert_eq!(body.matches("<url>").count(), 1);
    assert!(body.contains("<loc>http://127.0.0.1:9</loc>"));
    assert!(body.contains("<priority>1.0</priority>"));
}
