//! Accessibility attributes derived from the disabled flag and caller overrides.

/// Role applied when the caller does not supply one.
pub const DEFAULT_ROLE: &str = "button";

/// Tab index applied when the caller does not supply one.
pub const DEFAULT_TAB_INDEX: i32 = 0;

/// Static attributes and listener wiring for one render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessibilityAttrs {
    /// Value of the `role` attribute; always present.
    pub role: String,
    /// Value of `tabindex`, `None` when the attribute must be omitted.
    pub tab_index: Option<i32>,
    /// Value of `aria-disabled`, `None` when the attribute must be omitted.
    pub aria_disabled: Option<&'static str>,
    /// Whether click and key listeners may be attached at all.
    pub interactive: bool,
}

impl AccessibilityAttrs {
    /// Derive the attributes for a render.
    ///
    /// A disabled box gets no `tabindex` at all (not `-1`, which stays script-focusable) and no
    /// listeners. The role is kept in both states; a caller-supplied role wins.
    #[must_use]
    pub fn derive(disabled: bool, tab_index: i32, role_override: Option<&str>) -> Self {
        Self {
            role: role_override.unwrap_or(DEFAULT_ROLE).to_string(),
            tab_index: (!disabled).then_some(tab_index),
            aria_disabled: disabled.then_some("true"),
            interactive: !disabled,
        }
    }

    /// Attribute pairs in render order, skipping omitted ones.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("role", self.role.clone())];
        if let Some(index) = self.tab_index {
            pairs.push(("tabindex", index.to_string()));
        }
        if let Some(flag) = self.aria_disabled {
            pairs.push(("aria-disabled", flag.to_string()));
        }
        pairs
    }
}
