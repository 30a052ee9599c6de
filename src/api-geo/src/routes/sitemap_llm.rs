use axum::{extract::State, http::HeaderMap, response::Response};
use core_geo::sitemap::build_llm_sitemap;

use crate::routes::cached;
use crate::state::AppState;

/// GET /sitemap-llm.xml - LLM sitemap of the requesting site
///
/// Never fails: upstream problems degrade to an empty `urlset` (or the base URL
/// alone under the home-only policy).
pub async fn get_sitemap_llm(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let request = state.sitemap_request(&headers);
    tracing::debug!(site = %request.site_name, base_url = %request.base_url, "Building LLM sitemap");

    let xml = build_llm_sitemap(&request, &state.sitemap_options, &state.http, state.content.as_ref()).await;
    cached("application/xml; charset=utf-8", state.sitemap_options.cache_control, xml)
}
