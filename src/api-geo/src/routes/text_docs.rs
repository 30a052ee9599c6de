use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, header},
    response::Response,
};
use core_geo::discovery::{
    AI_TXT_CACHE, LLMS_TXT_CACHE, ROBOTS_CACHE, generate_ai_txt, generate_llms_txt, load_robots,
};
use core_geo::sitemap::serialize::today;

use crate::routes::cached;
use crate::state::AppState;

/// GET /llms.txt
pub async fn get_llms_txt(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let base_url = state.base_url(&headers);
    cached(
        "text/markdown; charset=utf-8",
        LLMS_TXT_CACHE,
        generate_llms_txt(&state.profile, &base_url),
    )
}

/// GET /.well-known/ai.txt
pub async fn get_ai_txt(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let site_url = state.announced_site_url(&headers);
    let mut response = cached(
        "text/plain; charset=utf-8",
        AI_TXT_CACHE,
        generate_ai_txt(&site_url, &today()),
    );
    response
        .headers_mut()
        .insert(header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    response
}

/// GET /robots.txt - the CMS robots.txt with AI crawler rules merged in
pub async fn get_robots_txt(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let request = state.sitemap_request(&headers);
    let robots = load_robots(state.content.as_ref(), &request).await;
    cached("text/plain", ROBOTS_CACHE, robots)
}
