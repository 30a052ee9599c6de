use axum::{
    Router,
    http::{HeaderValue, header},
    middleware,
    response::{IntoResponse, Response},
    routing::{MethodRouter, get},
};
use core_geo::CacheControl;
use core_geo::common::health::health_check;
use data_model_geo::models::EndpointError;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod ai_json;
pub mod logging_middleware;
pub mod sitemap_llm;
pub mod text_docs;

//
// Router
//

/// Public path and the internal rewrite target of every machine-readable endpoint.
pub const ENDPOINTS: [(&str, &str); 8] = [
    ("/sitemap-llm.xml", "/api/sitemap-llm"),
    ("/llms.txt", "/api/llms-txt"),
    ("/.well-known/ai.txt", "/api/well-known/ai-txt"),
    ("/robots.txt", "/api/robots"),
    ("/ai/summary.json", "/api/ai/summary"),
    ("/ai/faq.json", "/api/ai/faq"),
    ("/ai/service.json", "/api/ai/service"),
    ("/ai/structured-data.json", "/api/ai/structured-data"),
];

fn get_only(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.fallback(method_not_allowed)
}

pub fn router() -> Router<AppState> {
    let handlers: [MethodRouter<AppState>; 8] = [
        get(sitemap_llm::get_sitemap_llm),
        get(text_docs::get_llms_txt),
        get(text_docs::get_ai_txt),
        get(text_docs::get_robots_txt),
        get(ai_json::get_summary),
        get(ai_json::get_faq),
        get(ai_json::get_service),
        get(ai_json::get_structured_data),
    ];

    let mut router = Router::new().route("/health", get(health_check));
    for ((public, rewrite), handler) in ENDPOINTS.into_iter().zip(handlers) {
        router = router
            .route(public, get_only(handler.clone()))
            .route(rewrite, get_only(handler));
    }

    router
        .fallback(not_found)
        // Custom route access logging
        .layer(middleware::from_fn(logging_middleware::log_route_access))
        // Tracing middleware
        .layer(TraceLayer::new_for_http())
}

async fn method_not_allowed() -> EndpointError {
    EndpointError::MethodNotAllowed
}

async fn not_found() -> EndpointError {
    EndpointError::NotFound
}

/// Sets `Content-Type` and `Cache-Control` on a successful response.
pub(crate) fn cached(content_type: &'static str, cache: CacheControl, body: impl IntoResponse) -> Response {
    let mut response = body.into_response();
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    if let Ok(value) = HeaderValue::from_str(&cache.header_value()) {
        headers.insert(header::CACHE_CONTROL, value);
    }
    response
}
