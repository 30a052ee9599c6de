use data_model_geo::models::SitemapEntry;
use quick_xml::escape::partial_escape;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

pub const DEFAULT_CHANGEFREQ: &str = "weekly";
pub const DEFAULT_PRIORITY: &str = "0.5";

/// Escapes `&`, `<` and `>` in XML text content.
pub fn escape_xml(text: &str) -> String {
    partial_escape(text).into_owned()
}

/// Today's date in `YYYY-MM-DD` form (UTC).
pub fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

/// Renders entries as a sitemap `urlset`.
///
/// Missing fields get defaults: `lastmod` = `today`, `changefreq` = `weekly`, `priority` = `0.5`.
pub fn serialize_urlset(entries: &[SitemapEntry], today: &str) -> String {
    let mut lines = Vec::with_capacity(entries.len() * 6 + 3);
    lines.push(r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string());
    lines.push(format!(r#"<urlset xmlns="{}">"#, SITEMAP_NAMESPACE));

    for entry in entries {
        lines.push("  <url>".to_string());
        lines.push(format!("    <loc>{}</loc>", escape_xml(&entry.loc)));
        lines.push(format!(
            "    <lastmod>{}</lastmod>",
            escape_xml(entry.lastmod.as_deref().unwrap_or(today))
        ));
        lines.push(format!(
            "    <changefreq>{}</changefreq>",
            escape_xml(entry.changefreq.as_deref().unwrap_or(DEFAULT_CHANGEFREQ))
        ));
        lines.push(format!(
            "    <priority>{}</priority>",
            escape_xml(entry.priority.as_deref().unwrap_or(DEFAULT_PRIORITY))
        ));
        lines.push("  </url>".to_string());
    }

    lines.push("</urlset>".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sitemap::parse::parse_url_entries;

    #[test]
    fn test_empty_urlset() {
        assert_eq!(
            serialize_urlset(&[], "2024-05-01"),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n</urlset>"
        );
    }

    #[test]
    fn test_defaults_are_filled() {
        let xml = serialize_urlset(&[SitemapEntry::new("https://example.com/")], "2024-05-01");
        assert!(xml.contains("  <url>\n    <loc>https://example.com/</loc>\n"));
        assert!(xml.contains("<lastmod>2024-05-01</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.5</priority>"));
    }

    #[test]
    fn test_escapes_text() {
        let xml = serialize_urlset(&[SitemapEntry::new("https://example.com/?a=1&b=<2>")], "2024-05-01");
        assert!(xml.contains("<loc>https://example.com/?a=1&amp;b=&lt;2&gt;</loc>"));
    }

    #[test]
    fn test_escape_xml_leaves_quotes() {
        assert_eq!(escape_xml(r#"a "b" & 'c'"#), r#"a "b" &amp; 'c'"#);
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_serialize_then_parse_is_stable() {
        let entries = vec![
            SitemapEntry::new("https://example.com/")
                .with_lastmod("2024-01-01")
                .with_changefreq("daily")
                .with_priority("1.0"),
            SitemapEntry::new("https://example.com/search?q=a&b"),
        ];
        let first = serialize_urlset(&entries, "2024-05-01");
        let reparsed = parse_url_entries(&first);

        assert_eq!(reparsed.len(), 2);
        assert_eq!(reparsed[0], entries[0]);
        assert_eq!(reparsed[1].loc, "https://example.com/search?q=a&b");
        assert_eq!(serialize_urlset(&reparsed, "2024-05-01"), first);
    }

    #[test]
    fn test_today_format() {
        let today = today();
        assert_eq!(today.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }
}
