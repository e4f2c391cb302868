//! Content loading errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("path `{path}` is claimed by both {first} and {second}")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },
}
