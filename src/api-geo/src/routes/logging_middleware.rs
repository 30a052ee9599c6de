use axum::{
    extract::Request,
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

fn header_text(headers: &HeaderMap, name: header::HeaderName) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string()
}

/// Middleware that logs each route access with its result.
///
/// The user agent is recorded since most callers of these endpoints are crawlers.
pub async fn log_route_access(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let user_agent = header_text(request.headers(), header::USER_AGENT);
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    match status {
        400..=499 => tracing::warn!(%method, %path, status, duration_ms, %user_agent),
        500..=599 => tracing::error!(%method, %path, status, duration_ms, %user_agent),
        _ => tracing::info!(%method, %path, status, duration_ms, %user_agent),
    }

    response
}
