//! Story catalog used by the demo page for manual inspection.
//!
//! # Design
//! - Stories are data: a JSON document bundled at compile time.
//! - Validation happens once at load so the page never renders a half-valid catalog.

use std::collections::HashSet;

use serde::Deserialize;

use crate::core::a11y::DEFAULT_TAB_INDEX;
use crate::core::attrs::PassThrough;
use crate::core::element::ElementType;
use crate::core::error::CatalogError;

const BUNDLED_STORIES: &str = include_str!("../../stories.json");

const fn default_tab_index() -> i32 {
    DEFAULT_TAB_INDEX
}

/// One example configuration of the clickable box.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Story {
    /// Unique story name shown as the heading.
    pub name: String,
    /// Text rendered inside the box.
    pub label: String,
    /// Element type token; `span` when absent.
    #[serde(default)]
    pub is: Option<String>,
    /// Disabled flag.
    #[serde(default)]
    pub disabled: bool,
    /// Requested tab index.
    #[serde(default = "default_tab_index")]
    pub tab_index: i32,
    /// Pass-through attributes.
    #[serde(default)]
    pub attrs: PassThrough,
    /// The story's key handler prevents the default on Enter, so `onclick` never sees Enter.
    #[serde(default)]
    pub veto_enter: bool,
}

impl Story {
    /// Resolve the element type token.
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidElement`] when the token is not a valid tag name.
    pub fn element(&self) -> Result<ElementType, CatalogError> {
        self.is.as_deref().map_or_else(
            || Ok(ElementType::default()),
            |token| {
                token
                    .parse()
                    .map_err(|source| CatalogError::InvalidElement {
                        story: self.name.clone(),
                        source,
                    })
            },
        )
    }
}

/// Validated, ordered list of stories.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoryCatalog {
    /// Stories in display order.
    pub stories: Vec<Story>,
}

impl StoryCatalog {
    /// Parse and validate a catalog document.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when the document is malformed, empty, repeats a story name, or
    /// references an invalid element type.
    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let catalog: Self =
            serde_json::from_str(document).map_err(|source| CatalogError::Parse { source })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load the catalog bundled with the crate.
    ///
    /// # Errors
    /// Returns [`CatalogError`] if the bundled document fails validation.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_STORIES)
    }

    /// Find a story by name.
    #[must_use]
    pub fn story(&self, name: &str) -> Option<&Story> {
        self.stories.iter().find(|story| story.name == name)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.stories.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for story in &self.stories {
            if !seen.insert(story.name.as_str()) {
                return Err(CatalogError::DuplicateStory {
                    name: story.name.clone(),
                });
            }
            story.element()?;
        }
        Ok(())
    }
}
