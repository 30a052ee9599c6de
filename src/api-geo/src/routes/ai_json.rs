use axum::{Json, extract::State, http::HeaderMap, response::Response};
use core_geo::ai::{FAQ_CACHE, SERVICE_CACHE, SUMMARY_CACHE, load_faq, load_services, load_summary};
use core_geo::common::cache::{CacheControl, DAY};
use core_geo::jsonld::site_structured_data;

use crate::routes::cached;
use crate::state::AppState;

const JSON: &str = "application/json; charset=utf-8";

const STRUCTURED_DATA_CACHE: CacheControl = CacheControl::public(DAY);

/// GET /ai/summary.json
pub async fn get_summary(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let request = state.sitemap_request(&headers);
    let payload = load_summary(state.content.as_ref(), &request, &state.profile).await;
    cached(JSON, SUMMARY_CACHE, Json(payload))
}

/// GET /ai/faq.json - between 3 and 10 items, or an empty list
pub async fn get_faq(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let request = state.sitemap_request(&headers);
    let faq = load_faq(state.content.as_ref(), &request, &state.profile).await;
    cached(JSON, FAQ_CACHE, Json(faq))
}

/// GET /ai/service.json
pub async fn get_service(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let request = state.sitemap_request(&headers);
    let services = load_services(state.content.as_ref(), &request, &state.profile).await;
    cached(JSON, SERVICE_CACHE, Json(services))
}

/// GET /ai/structured-data.json - WebSite and Organization nodes as a JSON array
pub async fn get_structured_data(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let graph = site_structured_data(&state.profile, &state.base_url(&headers));
    cached(JSON, STRUCTURED_DATA_CACHE, Json(graph))
}
