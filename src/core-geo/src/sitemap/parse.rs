//! Streaming extraction of `<url>` and `<sitemap>` records from sitemap XML.
//!
//! Parsing never fails: on malformed input the records completed before the
//! error are returned.

use data_model_geo::models::SitemapEntry;
use quick_xml::Reader;
use quick_xml::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Loc,
    Lastmod,
    Changefreq,
    Priority,
}

impl Field {
    fn from_tag(local_name: &[u8]) -> Option<Self> {
        match local_name {
            b"loc" => Some(Field::Loc),
            b"lastmod" => Some(Field::Lastmod),
            b"changefreq" => Some(Field::Changefreq),
            b"priority" => Some(Field::Priority),
            _ => None,
        }
    }
}

/// Text collected from the direct children of one record element.
#[derive(Debug, Default)]
struct Block {
    loc: String,
    lastmod: String,
    changefreq: String,
    priority: String,
}

impl Block {
    fn push(&mut self, field: Field, text: &str) {
        let target = match field {
            Field::Loc => &mut self.loc,
            Field::Lastmod => &mut self.lastmod,
            Field::Changefreq => &mut self.changefreq,
            Field::Priority => &mut self.priority,
        };
        target.push_str(text);
    }

    fn into_entry(self) -> Option<SitemapEntry> {
        let loc = non_blank(self.loc)?;
        Some(SitemapEntry {
            loc,
            lastmod: non_blank(self.lastmod),
            changefreq: non_blank(self.changefreq),
            priority: non_blank(self.priority),
        })
    }
}

fn non_blank(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}

/// Walks the document and returns one `Block` per `record_tag` element, in document order.
///
/// Only direct children of the record are read, so nested extension elements such as
/// `<image:image><image:loc>` do not leak into the record's own `<loc>`.
fn collect_blocks(xml: &str, record_tag: &[u8]) -> Vec<Block> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut blocks = Vec::new();
    let mut current: Option<Block> = None;
    // Element depth inside the current record; 1 means the record element itself.
    let mut depth = 0usize;
    let mut field: Option<Field> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if current.is_some() {
                    depth += 1;
                    field = if depth == 2 { Field::from_tag(e.local_name().as_ref()) } else { None };
                } else if e.local_name().as_ref() == record_tag {
                    current = Some(Block::default());
                    depth = 1;
                    field = None;
                }
            }
            Ok(Event::Text(ref text)) => {
                if let (Some(block), Some(f)) = (current.as_mut(), field) {
                    match text.unescape() {
                        Ok(value) => block.push(f, &value),
                        Err(e) => {
                            tracing::debug!("Stopping sitemap parse at invalid text: {}", e);
                            break;
                        }
                    }
                }
            }
            Ok(Event::CData(ref data)) => {
                if let (Some(block), Some(f)) = (current.as_mut(), field) {
                    block.push(f, &String::from_utf8_lossy(data));
                }
            }
            Ok(Event::End(_)) => {
                if current.is_some() {
                    if depth <= 1 {
                        if let Some(block) = current.take() {
                            blocks.push(block);
                        }
                        depth = 0;
                    } else {
                        depth -= 1;
                    }
                    field = None;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                tracing::debug!("Stopping sitemap parse at malformed XML: {}", e);
                break;
            }
            _ => {}
        }
        buf.clear();
    }

    blocks
}

/// Extracts every `<url>` record. Records without a `<loc>` are skipped; absent fields stay `None`.
pub fn parse_url_entries(xml: &str) -> Vec<SitemapEntry> {
    collect_blocks(xml, b"url")
        .into_iter()
        .filter_map(Block::into_entry)
        .collect()
}

/// Extracts the `<loc>` of every `<sitemap>` record of a sitemap index.
pub fn parse_sitemap_index_locs(xml: &str) -> Vec<String> {
    collect_blocks(xml, b"sitemap")
        .into_iter()
        .filter_map(|block| non_blank(block.loc))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_model_geo::test_helpers::{sample_sitemap_index_xml, sample_sitemap_xml};

    #[test]
    fn test_parse_url_entries_in_order() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>https://example.com/</loc>
    <lastmod>2024-01-01</lastmod>
    <changefreq>daily</changefreq>
    <priority>1.0</priority>
  </url>
  <url>
    <loc>https://example.com/about</loc>
  </url>
</urlset>"#;

        let entries = parse_url_entries(xml);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].loc, "https://example.com/");
        assert_eq!(entries[0].lastmod.as_deref(), Some("2024-01-01"));
        assert_eq!(entries[0].changefreq.as_deref(), Some("daily"));
        assert_eq!(entries[0].priority.as_deref(), Some("1.0"));
        assert_eq!(entries[1].loc, "https://example.com/about");
        assert_eq!(entries[1].lastmod, None);
        assert_eq!(entries[1].changefreq, None);
        assert_eq!(entries[1].priority, None);
    }

    #[test]
    fn test_three_blocks_one_without_loc() {
        let xml = r#"<urlset>
  <url><loc>https://example.com/a</loc></url>
  <url><lastmod>2024-01-01</lastmod></url>
  <url><loc>https://example.com/b</loc></url>
</urlset>"#;

        let locs: Vec<String> = parse_url_entries(xml).into_iter().map(|e| e.loc).collect();
        assert_eq!(locs, vec!["https://example.com/a", "https://example.com/b"]);
    }

    #[test]
    fn test_unescapes_text() {
        let xml = "<urlset><url><loc>https://example.com/?a=1&amp;b=2</loc></url></urlset>";
        let entries = parse_url_entries(xml);
        assert_eq!(entries[0].loc, "https://example.com/?a=1&b=2");
    }

    #[test]
    fn test_namespace_prefix_and_cdata() {
        let xml = r#"<sm:urlset xmlns:sm="http://www.sitemaps.org/schemas/sitemap/0.9">
  <sm:url><sm:loc><![CDATA[https://example.com/cdata]]></sm:loc></sm:url>
</sm:urlset>"#;
        let entries = parse_url_entries(xml);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].loc, "https://example.com/cdata");
    }

    #[test]
    fn test_nested_image_loc_is_ignored() {
        let xml = r#"<urlset>
  <url>
    <loc>https://example.com/gallery</loc>
    <image:image><image:loc>https://cdn.example.com/1.png</image:loc></image:image>
  </url>
</urlset>"#;
        let entries = parse_url_entries(xml);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].loc, "https://example.com/gallery");
    }

    #[test]
    fn test_empty_and_garbage_input() {
        assert!(parse_url_entries("").is_empty());
        assert!(parse_url_entries("this is not xml").is_empty());
        assert!(parse_url_entries(&sample_sitemap_xml(&[])).is_empty());
    }

    #[test]
    fn test_malformed_keeps_entries_before_error() {
        let xml = "<urlset><url><loc>https://example.com/ok</loc></url><url><loc>https://example.com/broken</lo";
        let entries = parse_url_entries(xml);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].loc, "https://example.com/ok");
    }

    #[test]
    fn test_parse_sitemap_index_locs() {
        let xml = sample_sitemap_index_xml(&["https://example.com/sitemap-1.xml", "https://example.com/sitemap-2.xml"]);
        assert_eq!(
            parse_sitemap_index_locs(&xml),
            vec!["https://example.com/sitemap-1.xml", "https://example.com/sitemap-2.xml"]
        );
        // A urlset has no index records
        assert!(parse_sitemap_index_locs(&sample_sitemap_xml(&["https://example.com/"])).is_empty());
    }

    #[test]
    fn test_index_has_no_url_entries() {
        let xml = sample_sitemap_index_xml(&["https://example.com/sitemap-1.xml"]);
        assert!(parse_url_entries(&xml).is_empty());
    }
}
