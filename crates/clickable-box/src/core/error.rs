//! Error types for element tokens and the story catalog.

use thiserror::Error;

/// Failure parsing an element type token such as `"span"` or `"my-widget"`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ElementTypeError {
    /// Token was empty or whitespace only.
    #[error("element type token is empty")]
    Empty,
    /// Token is not a syntactically valid tag name.
    #[error("invalid tag name")]
    InvalidTagName {
        /// Token provided by the caller.
        value: String,
    },
}

/// Primary error type for loading the story catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog document was not valid JSON for the story schema.
    #[error("failed to parse story catalog")]
    Parse {
        /// Underlying deserialisation error.
        #[source]
        source: serde_json::Error,
    },
    /// Catalog contained no stories.
    #[error("story catalog is empty")]
    Empty,
    /// Two stories share the same name.
    #[error("duplicate story name")]
    DuplicateStory {
        /// Name that appeared more than once.
        name: String,
    },
    /// A story referenced an element type that could not be parsed.
    #[error("story has an invalid element type")]
    InvalidElement {
        /// Story that carried the token.
        story: String,
        /// Parse failure detail.
        #[source]
        source: ElementTypeError,
    },
}
