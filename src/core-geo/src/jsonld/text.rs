//! Plain-text extraction from rich-text HTML fields.

use data_model_geo::models::FaqItem;
use scraper::{ElementRef, Html, Selector};

/// Collapses every run of whitespace to one space and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trimmed text, or None when blank.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

/// Keeps only digits and dots: `$1,299.00` becomes `1299.00`.
pub fn sanitize_price(price: &str) -> String {
    price.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect()
}

/// Text under `root`, skipping anything inside an element named in `excluded`.
fn text_excluding(root: ElementRef<'_>, excluded: &[&str]) -> String {
    let mut out = String::new();
    for node in root.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node
            .ancestors()
            .take_while(|a| a.id() != root.id())
            .any(|a| a.value().as_element().is_some_and(|e| excluded.contains(&e.name())));
        if !hidden {
            out.push(' ');
            out.push_str(text);
        }
    }
    collapse_whitespace(&out)
}

/// Visible text of an HTML fragment: script and style removed, tags removed, whitespace collapsed.
pub fn strip_html(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    text_excluding(fragment.root_element(), &["script", "style"])
}

/// Question and answer pairs from `<details><summary>Q</summary>A</details>` blocks.
///
/// Blocks with an empty question or answer are skipped.
pub fn extract_faq_from_html(html: &str) -> Vec<FaqItem> {
    let (Ok(details), Ok(summary)) = (Selector::parse("details"), Selector::parse("summary")) else {
        return Vec::new();
    };
    let fragment = Html::parse_fragment(html);

    fragment
        .select(&details)
        .filter_map(|block| {
            let question = block.select(&summary).next().map(|s| text_excluding(s, &["script", "style"]))?;
            let answer = text_excluding(block, &["summary", "script", "style"]);
            let item = FaqItem::new(question, answer);
            item.is_complete().then_some(item)
        })
        .collect()
}

/// Text of the first `<address>` element, if any.
pub fn extract_address_text(html: &str) -> Option<String> {
    let selector = Selector::parse("address").ok()?;
    let fragment = Html::parse_fragment(html);
    let address = fragment.select(&selector).next()?;
    non_blank(Some(text_excluding(address, &["script", "style"]).as_str()))
}
