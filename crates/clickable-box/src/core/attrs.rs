//! Pass-through attributes forwarded verbatim to the rendered element.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Prop names owned by the clickable box itself, compared ASCII case-insensitively.
///
/// Covers both the DOM spelling (`tabindex`) and the camel-case spelling (`tabIndex`).
pub const RESERVED_PROPS: [&str; 7] = [
    "is",
    "onclick",
    "onkeypress",
    "disabled",
    "tabindex",
    "ref",
    "innerref",
];

/// Returns `true` when `name` is owned by the clickable box and must not be forwarded.
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    RESERVED_PROPS
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(name))
}

/// Ordered caller attributes; later inserts of the same name replace the value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassThrough(IndexMap<String, String>);

/// Result of subtracting the reserved names from a [`PassThrough`] set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitAttrs<'a> {
    /// Attributes that reach the rendered element, in caller order.
    pub forwarded: Vec<(&'a str, &'a str)>,
    /// Reserved names the caller tried to pass as plain attributes.
    pub dropped: Vec<&'a str>,
}

impl PassThrough {
    /// Empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace an attribute.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Look up an attribute by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Number of attributes, reserved ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no attributes were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Caller-supplied `role`, which overrides the derived one.
    ///
    /// Case variants (`role`, `ROLE`) all render as `role`, so the last one supplied wins.
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case("role"))
            .last()
            .map(|(_, value)| value)
    }

    /// Subtract [`RESERVED_PROPS`] from the set.
    #[must_use]
    pub fn split_reserved(&self) -> SplitAttrs<'_> {
        let mut split = SplitAttrs::default();
        for (name, value) in self.iter() {
            if is_reserved(name) {
                split.dropped.push(name);
            } else {
                split.forwarded.push((name, value));
            }
        }
        split
    }
}

impl<K, V> FromIterator<(K, V)> for PassThrough
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}
