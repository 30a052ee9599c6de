//! Plain-text discovery documents: llms.txt, ai.txt and robots.txt.

pub mod ai_txt;
pub mod llms_txt;
pub mod robots;

pub use ai_txt::{AI_TXT_CACHE, generate_ai_txt};
pub use llms_txt::{LLMS_TXT_CACHE, generate_llms_txt};
pub use robots::{ROBOTS_CACHE, ensure_ai_crawler_access, is_blocking_robots, load_robots, permissive_robots_txt};
