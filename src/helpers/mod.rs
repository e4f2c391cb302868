//! Helper functions shared by the loader, the projector and the templates

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
