//! Content module - loads markdown sources into content records

mod error;
mod frontmatter;
pub mod loader;
mod markdown;
pub mod read_time;
mod record;

pub use error::ContentError;
pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use record::{ContentId, ContentRecord};
