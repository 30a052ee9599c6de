//! LLM sitemap pipeline.

pub mod aggregate;
pub mod batch;
pub mod config;
pub mod fetch;
pub mod filter;
pub mod parse;
pub mod serialize;

pub use aggregate::{AI_ENDPOINT_PATHS, build_llm_sitemap, collect_llm_entries};
pub use config::{LlmSitemapOptions, LlmSitemapOptionsBuilder, SitemapPolicy, SitemapSource};
pub use filter::{FilterPolicy, UrlFilter};
pub use parse::{parse_sitemap_index_locs, parse_url_entries};
pub use serialize::serialize_urlset;
