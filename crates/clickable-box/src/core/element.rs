//! Element selection for polymorphic rendering.
//!
//! # Design
//! - Well-known tags are an enum so the common case never allocates.
//! - Any other tag name is carried verbatim in [`ElementType::Custom`]; it is not validated here and
//!   an unrenderable name fails inside the renderer.
//! - Only string tokens (catalog data) go through [`FromStr`], which checks tag-name syntax.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::core::error::ElementTypeError;

/// Well-known tags the clickable box is commonly rendered as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Tag {
    /// Generic inline container (the default).
    #[default]
    Span,
    /// Generic block container.
    Div,
    /// Native button.
    Button,
    /// Anchor.
    A,
    /// List item.
    Li,
    /// Form label.
    Label,
    /// Table data cell.
    Td,
    /// Table header cell.
    Th,
    /// Paragraph.
    P,
    /// Section landmark.
    Section,
    /// Article landmark.
    Article,
    /// Image.
    Img,
    /// Inline SVG root.
    Svg,
}

impl Tag {
    /// Every well-known tag, used for token lookup.
    pub const ALL: [Self; 13] = [
        Self::Span,
        Self::Div,
        Self::Button,
        Self::A,
        Self::Li,
        Self::Label,
        Self::Td,
        Self::Th,
        Self::P,
        Self::Section,
        Self::Article,
        Self::Img,
        Self::Svg,
    ];

    /// Lowercase HTML tag name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Span => "span",
            Self::Div => "div",
            Self::Button => "button",
            Self::A => "a",
            Self::Li => "li",
            Self::Label => "label",
            Self::Td => "td",
            Self::Th => "th",
            Self::P => "p",
            Self::Section => "section",
            Self::Article => "article",
            Self::Img => "img",
            Self::Svg => "svg",
        }
    }

    fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == name)
    }
}

/// Concrete element the clickable box renders as.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// One of the well-known tags.
    Tag(Tag),
    /// Any other tag name, e.g. a custom element such as `my-card`.
    Custom(String),
}

impl Default for ElementType {
    fn default() -> Self {
        Self::Tag(Tag::default())
    }
}

impl From<Tag> for ElementType {
    fn from(tag: Tag) -> Self {
        Self::Tag(tag)
    }
}

impl ElementType {
    /// Wraps an arbitrary tag name without validation.
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    /// Tag name as it is handed to the renderer.
    #[must_use]
    pub fn tag_name(&self) -> &str {
        match self {
            Self::Tag(tag) => tag.as_str(),
            Self::Custom(name) => name,
        }
    }

    /// Owned tag name suitable for virtual DOM construction.
    #[must_use]
    pub fn to_tag_name(&self) -> Cow<'static, str> {
        match self {
            Self::Tag(tag) => Cow::Borrowed(tag.as_str()),
            Self::Custom(name) => Cow::Owned(name.clone()),
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_name())
    }
}

impl FromStr for ElementType {
    type Err = ElementTypeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ElementTypeError::Empty);
        }
        let mut chars = token.chars();
        let starts_with_letter = chars.next().is_some_and(|ch| ch.is_ascii_alphabetic());
        let rest_valid = chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '-');
        if !starts_with_letter || !rest_valid {
            return Err(ElementTypeError::InvalidTagName {
                value: token.to_string(),
            });
        }
        let name = token.to_ascii_lowercase();
        Ok(Tag::lookup(&name).map_or(Self::Custom(name), Self::Tag))
    }
}
