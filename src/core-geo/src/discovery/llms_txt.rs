use std::fmt::Write;

use data_model_geo::profile::{KeyPage, SiteProfile};
use indoc::formatdoc;

use crate::common::cache::{CacheControl, HOUR};

pub const LLMS_TXT_CACHE: CacheControl = CacheControl::public(HOUR).s_maxage(HOUR);

/// Machine-readable documents every site exposes, listed under `## Optional`.
const OPTIONAL_LINKS: [(&str, &str, &str); 7] = [
    ("Sitemap", "/sitemap.xml", "Full XML sitemap for search engines"),
    ("LLM Sitemap", "/sitemap-llm.xml", "LLM-optimized sitemap for AI crawlers"),
    ("Robots", "/robots.txt", "Crawler and bot access rules"),
    ("AI metadata", "/.well-known/ai.txt", "AI crawler and LLM metadata (ai.txt)"),
    ("FAQ (JSON)", "/ai/faq.json", "Frequently asked questions"),
    ("Summary (JSON)", "/ai/summary.json", "Site summary for AI consumption"),
    ("Service (JSON)", "/ai/service.json", "Service information for AI consumption"),
];

fn link_line(out: &mut String, base: &str, title: &str, path: &str, description: &str) {
    let separator = if path.starts_with('/') { "" } else { "/" };
    let _ = write!(out, "- [{title}]({base}{separator}{path})");
    if !description.trim().is_empty() {
        let _ = write!(out, ": {}", description.trim());
    }
    out.push('\n');
}

fn key_page_lines(base: &str, pages: &[KeyPage]) -> String {
    let mut out = String::new();
    for page in pages {
        link_line(&mut out, base, &page.title, &page.path, &page.description);
    }
    out
}

/// Renders llms.txt (https://llmstxt.org/) for the site at `base_url`.
pub fn generate_llms_txt(profile: &SiteProfile, base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');

    let mut optional = String::new();
    for (title, path, description) in OPTIONAL_LINKS {
        link_line(&mut optional, base, title, path, description);
    }

    let mut doc = format!("# {}\n\n", profile.title.trim());
    if !profile.tagline.trim().is_empty() {
        let _ = writeln!(doc, "> {}\n", profile.tagline.trim());
    }
    if !profile.details.trim().is_empty() {
        let _ = writeln!(doc, "{}\n", profile.details.trim());
    }
    if !profile.key_pages.is_empty() {
        doc.push_str(&formatdoc! {"
            ## Key pages

            {pages}
            ",
            pages = key_page_lines(base, &profile.key_pages),
        });
    }
    doc.push_str(&formatdoc! {"
        ## Optional

        {optional}",
        optional = optional,
    });
    doc
}
