use indoc::formatdoc;

use crate::common::cache::{CacheControl, DAY};

pub const AI_TXT_CACHE: CacheControl = CacheControl::public(DAY).s_maxage(DAY);

/// Crawlers granted `Allow: /`, in output order.
const AGENTS: [&str; 7] = [
    "*",
    "GPTBot",
    "Claude-Web",
    "Anthropic-AI",
    "Google-Extended",
    "CCBot",
    "PerplexityBot",
];

/// Renders `/.well-known/ai.txt` for `site_url`, stamped with `last_modified` (`YYYY-MM-DD`).
pub fn generate_ai_txt(site_url: &str, last_modified: &str) -> String {
    let site = site_url.trim_end_matches('/');
    let agents: String = AGENTS
        .iter()
        .map(|agent| format!("User-Agent: {agent}\nAllow: /\n\n"))
        .collect();

    formatdoc! {"
        # AI Crawler Permissions for {site}

        {agents}Disallow: /api/editing/
        Disallow: /sitecore/

        AI-Endpoint: {site}/ai/summary.json
        AI-Endpoint: {site}/ai/faq.json
        AI-Endpoint: {site}/ai/service.json

        Sitemap: {site}/sitemap-llm.xml
        Sitemap: {site}/sitemap.xml

        Last-Modified: {last_modified}
        ",
        site = site,
        agents = agents,
        last_modified = last_modified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_txt_sections() {
        let doc = generate_ai_txt("https://sync.example.com", "2025-06-01");
        assert!(doc.starts_with("# AI Crawler Permissions for https://sync.example.com\n\nUser-Agent: *\nAllow: /\n\n"));
        assert!(doc.contains("User-Agent: PerplexityBot\nAllow: /\n\nDisallow: /api/editing/\nDisallow: /sitecore/\n"));
        assert!(doc.contains("AI-Endpoint: https://sync.example.com/ai/faq.json\n"));
        assert!(doc.contains("Sitemap: https://sync.example.com/sitemap-llm.xml\nSitemap: https://sync.example.com/sitemap.xml\n"));
        assert!(doc.ends_with("Last-Modified: 2025-06-01\n"));
    }

    #[test]
    fn test_every_agent_is_allowed() {
        let doc = generate_ai_txt("https://a.example", "2025-06-01");
        for agent in AGENTS {
            assert!(doc.contains(&format!("User-Agent: {agent}\nAllow: /\n")), "missing {agent}");
        }
        assert_eq!(doc.matches("User-Agent:").count(), AGENTS.len());
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        let doc = generate_ai_txt("https://a.example/", "2025-06-01");
        assert!(doc.contains("AI-Endpoint: https://a.example/ai/summary.json"));
    }
}
