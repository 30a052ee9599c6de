//! Resolving the public origin of the site from an inbound request.

use axum::http::HeaderMap;

const LOCALHOST: &str = "localhost";

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// First item of `X-Forwarded-Proto`, which proxies may send as a comma separated chain.
pub fn forwarded_proto(headers: &HeaderMap) -> Option<&str> {
    header(headers, "x-forwarded-proto")
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// The host the client asked for: `X-Forwarded-Host` first, then `Host`.
pub fn request_host(headers: &HeaderMap) -> Option<&str> {
    header(headers, "x-forwarded-host").or_else(|| header(headers, "host"))
}

/// Scheme to use for a host when no proxy told us: `http` for localhost, `https` otherwise.
pub fn default_scheme(host: &str) -> &'static str {
    if host.contains(LOCALHOST) { "http" } else { "https" }
}

/// Effective base URL (scheme + host, no trailing slash) for building absolute links.
///
/// Order: forwarded host or `Host`, then the configured default site URL, then `localhost`.
pub fn resolve_base_url(headers: &HeaderMap, default_site_url: Option<&str>) -> String {
    if let Some(host) = request_host(headers) {
        let scheme = forwarded_proto(headers).unwrap_or_else(|| default_scheme(host));
        return format!("{}://{}", scheme, host);
    }

    if let Some(site_url) = default_site_url.map(str::trim).filter(|s| !s.is_empty()) {
        return site_url.trim_end_matches('/').to_string();
    }

    format!("http://{}", LOCALHOST)
}

/// Site URL announced in ai.txt.
///
/// Prefers the `Host` header over `X-Forwarded-Host`, then the first site with a concrete
/// host name, then the configured default site URL.
pub fn resolve_announced_site_url(
    headers: &HeaderMap,
    first_site_host: Option<&str>,
    default_site_url: Option<&str>,
) -> String {
    if let Some(host) = header(headers, "host").or_else(|| header(headers, "x-forwarded-host")) {
        let scheme = forwarded_proto(headers).unwrap_or("https");
        return format!("{}://{}", scheme, host);
    }

    if let Some(host) = first_site_host.filter(|h| !h.is_empty() && !h.contains('*')) {
        return format!("https://{}", host);
    }

    resolve_base_url(headers, default_site_url)
}
