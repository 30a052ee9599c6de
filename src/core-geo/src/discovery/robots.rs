use indoc::formatdoc;
use tracing::{debug, warn};

use crate::common::cache::{CacheControl, HOUR};
use crate::content::{ContentClient, SitemapRequest};

pub const ROBOTS_CACHE: CacheControl = CacheControl::public(HOUR).s_maxage(HOUR);

/// AI crawlers that must be named in any served robots.txt.
const AI_CRAWLERS: [&str; 5] = ["GPTBot", "ClaudeBot", "PerplexityBot", "ChatGPT-User", "anthropic-ai"];

/// True when the document disallows the whole site (`Disallow: /`) and allows nothing back.
pub fn is_blocking_robots(robots: &str) -> bool {
    let mut disallow_all = false;
    for line in robots.lines().map(str::trim) {
        let lower = line.to_ascii_lowercase();
        if lower.starts_with("allow:") {
            return false;
        }
        if lower.strip_prefix("disallow:").is_some_and(|path| path.trim() == "/") {
            disallow_all = true;
        }
    }
    disallow_all
}

/// robots.txt that lets AI and search crawlers in, used when the CMS has no usable one.
pub fn permissive_robots_txt(base_url: &str) -> String {
    formatdoc! {"
        # Robots.txt for {base_url}
        # This file controls access for web crawlers and AI bots

        # ==============================================
        # AI Crawlers - Explicitly Allowed
        # ==============================================

        # OpenAI GPTBot
        User-agent: GPTBot
        Allow: /

        # OpenAI ChatGPT-User
        User-agent: ChatGPT-User
        Allow: /

        # Anthropic ClaudeBot
        User-agent: ClaudeBot
        Allow: /
        User-agent: Claude-Web
        Allow: /
        User-agent: anthropic-ai
        Allow: /

        # Perplexity AI
        User-agent: PerplexityBot
        Allow: /

        # Google Gemini (Extended)
        User-agent: Google-Extended
        Allow: /

        # Meta AI
        User-agent: FacebookBot
        Allow: /

        # Cohere AI
        User-agent: cohere-ai
        Allow: /

        # ==============================================
        # Search Engine Crawlers - Allowed
        # ==============================================

        # Google
        User-agent: Googlebot
        Allow: /
        User-agent: Googlebot-Image
        Allow: /
        User-agent: Googlebot-News
        Allow: /
        User-agent: Googlebot-Video
        Allow: /

        # Bing
        User-agent: Bingbot
        Allow: /
        User-agent: msnbot
        Allow: /

        # DuckDuckGo
        User-agent: DuckDuckBot
        Allow: /

        # Yahoo
        User-agent: Slurp
        Allow: /

        # Yandex
        User-agent: YandexBot
        Allow: /

        # Baidu
        User-agent: Baiduspider
        Allow: /

        # ==============================================
        # Default Rules for All Other Bots
        # ==============================================

        User-agent: *
        Allow: /

        # ==============================================
        # Sitemap Location
        # ==============================================

        Sitemap: {base_url}/sitemap.xml
        ",
        base_url = base_url.trim_end_matches('/'),
    }
}

/// Appends `Allow: /` rules for AI crawlers the document never mentions, and a
/// `Sitemap:` line when it has none.
pub fn ensure_ai_crawler_access(existing: &str, base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let missing: Vec<&str> = AI_CRAWLERS.into_iter().filter(|c| !existing.contains(c)).collect();

    let mut enhanced = existing.to_string();
    if !missing.is_empty() {
        let rules: Vec<String> = missing
            .iter()
            .map(|crawler| format!("\n# AI Crawler - {crawler}\nUser-agent: {crawler}\nAllow: /"))
            .collect();
        enhanced.push_str("\n\n# ==============================================\n");
        enhanced.push_str("# AI Crawlers - Added for discoverability\n");
        enhanced.push_str("# ==============================================\n");
        enhanced.push_str(&rules.join("\n"));
    }

    if !existing.to_ascii_lowercase().contains("sitemap:") {
        enhanced.push_str(&format!("\n\n# Sitemap\nSitemap: {base}/sitemap.xml"));
    }
    enhanced
}

/// robots.txt to serve for a request: the CMS document with AI rules merged in,
/// or the permissive template when the CMS blocks everything or cannot be reached.
pub async fn load_robots(content: &dyn ContentClient, request: &SitemapRequest) -> String {
    match content.get_robots(request).await {
        Ok(robots) if is_blocking_robots(&robots) => {
            debug!(site = %request.site_name, "CMS robots.txt blocks all crawlers, serving permissive rules");
            permissive_robots_txt(&request.base_url)
        }
        Ok(robots) => ensure_ai_crawler_access(&robots, &request.base_url),
        Err(e) => {
            warn!(error = %e, site = %request.site_name, "Failed to load robots.txt from CMS, serving permissive rules");
            permissive_robots_txt(&request.base_url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MockContent;

    const BASE: &str = "https://sync.example.com";

    fn request() -> SitemapRequest {
        SitemapRequest::new(BASE, "main", "en")
    }

    #[test]
    fn test_blocking_detection() {
        assert!(is_blocking_robots("User-agent: *\nDisallow: /\n"));
        assert!(is_blocking_robots("User-agent: *\n  disallow:   /  \n"));
        assert!(!is_blocking_robots("User-agent: *\nDisallow: /\nAllow: /public\n"));
        assert!(!is_blocking_robots("User-agent: *\nDisallow: /admin\n"));
        assert!(!is_blocking_robots(""));
    }

    #[test]
    fn test_permissive_template() {
        let robots = permissive_robots_txt("https://sync.example.com/");
        assert!(robots.starts_with("# Robots.txt for https://sync.example.com\n"));
        assert!(robots.ends_with("Sitemap: https://sync.example.com/sitemap.xml\n"));
        for crawler in AI_CRAWLERS {
            assert!(robots.contains(&format!("User-agent: {crawler}\nAllow: /")));
        }
        assert!(!is_blocking_robots(&robots));
    }

    #[test]
    fn test_appends_missing_crawlers_and_sitemap() {
        let existing = "User-agent: *\nDisallow: /admin\n\nUser-agent: GPTBot\nAllow: /";
        let merged = ensure_ai_crawler_access(existing, BASE);

        assert!(merged.starts_with(existing));
        assert!(merged.contains("# AI Crawlers - Added for discoverability"));
        assert!(!merged.contains("# AI Crawler - GPTBot"));
        for crawler in ["ClaudeBot", "PerplexityBot", "ChatGPT-User", "anthropic-ai"] {
            assert!(merged.contains(&format!("# AI Crawler - {crawler}\nUser-agent: {crawler}\nAllow: /")));
        }
        assert!(merged.ends_with("# Sitemap\nSitemap: https://sync.example.com/sitemap.xml"));
    }

    #[test]
    fn test_complete_document_is_untouched() {
        let existing = "User-agent: GPTBot\nUser-agent: ClaudeBot\nUser-agent: PerplexityBot\n\
                        User-agent: ChatGPT-User\nUser-agent: anthropic-ai\nAllow: /\nSITEMAP: https://x/s.xml";
        assert_eq!(ensure_ai_crawler_access(existing, BASE), existing);
    }

    #[tokio::test]
    async fn test_load_robots_merges_cms_document() {
        let content = MockContent::new().with_robots("User-agent: *\nAllow: /");
        let robots = load_robots(&content, &request()).await;
        assert!(robots.starts_with("User-agent: *\nAllow: /\n\n# ====="));
        assert_eq!(content.requests(), vec![request()]);
    }

    #[tokio::test]
    async fn test_load_robots_replaces_blocking_document() {
        let content = MockContent::new().with_robots("User-agent: *\nDisallow: /");
        let robots = load_robots(&content, &request()).await;
        assert_eq!(robots, permissive_robots_txt(BASE));
    }

    #[tokio::test]
    async fn test_load_robots_on_error() {
        let robots = load_robots(&MockContent::with_failure(), &request()).await;
        assert_eq!(robots, permissive_robots_txt(BASE));
    }
}
