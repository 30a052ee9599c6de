pub mod ai;
pub mod common;
pub mod content;
pub mod discovery;
pub mod errors;
pub mod jsonld;
pub mod sitemap;

pub use common::cache::CacheControl;
pub use common::config::AppConfig;
pub use common::hostname::{HostPortError, get_api_base_url};
pub use common::logging::{DEFAULT_LOG_SETTINGS, setup_logging};
pub use content::{ContentClient, SitemapRequest};
pub use errors::{ConfigError, ContentError, FilterError, SitemapError};
