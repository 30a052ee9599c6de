//! JSON payloads served under `/ai/` for answer engines.
//!
//! Every loader prefers the CMS and falls back to the site profile when the CMS
//! errors or has nothing to offer.

pub mod faq;
pub mod service;
pub mod summary;

use chrono::{SecondsFormat, Utc};

pub use faq::{FAQ_CACHE, MAX_FAQ_ITEMS, MIN_FAQ_ITEMS, load_faq, select_faq_items};
pub use service::{SERVICE_CACHE, load_services};
pub use summary::{SUMMARY_CACHE, load_summary};

/// Upper bound on the length, in characters, of a served description.
pub const MAX_DESCRIPTION_LENGTH: usize = 800;

const ELLIPSIS: &str = "...";

/// Trims `description` and cuts it to `max_length` characters, ending in `...` when cut.
pub fn ensure_description_length(description: &str, max_length: usize) -> String {
    let trimmed = description.trim();
    if trimmed.chars().count() <= max_length {
        return trimmed.to_string();
    }
    let keep = max_length.saturating_sub(ELLIPSIS.len());
    let mut out: String = trimmed.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Current time as RFC 3339 with millisecond precision, e.g. `2025-01-01T00:00:00.000Z`.
pub fn last_modified_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
