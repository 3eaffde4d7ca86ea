//! DOM-free render plan for the clickable box.
//!
//! The component turns a [`RenderPlan`] into a virtual DOM node; everything that decides what ends
//! up on the element lives here so it can be tested natively.

use indexmap::IndexMap;
use tracing::debug;

use crate::core::a11y::AccessibilityAttrs;
use crate::core::attrs::PassThrough;

/// Prop values that influence the rendered attributes and listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderInput<'a> {
    /// Disabled flag.
    pub disabled: bool,
    /// Requested tab index.
    pub tab_index: i32,
    /// Whether an `onclick` callback was supplied.
    pub has_on_click: bool,
    /// Caller attributes, reserved names included.
    pub attrs: &'a PassThrough,
}

/// Listeners to attach to the element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Listeners {
    /// Attach a click listener forwarding to `onclick`.
    pub click: bool,
    /// Attach the key press dispatcher.
    pub key_press: bool,
}

/// Attributes and listeners for one render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderPlan {
    /// Attributes in render order.
    pub attributes: IndexMap<String, String>,
    /// Listener wiring.
    pub listeners: Listeners,
}

impl RenderPlan {
    /// Look up a planned attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Build the render plan.
///
/// Derived accessibility attributes come first; forwarded caller attributes follow and replace a
/// derived value of the same name, so a caller `role` always wins.
#[must_use]
pub fn plan_render(input: RenderInput<'_>) -> RenderPlan {
    let a11y = AccessibilityAttrs::derive(input.disabled, input.tab_index, input.attrs.role());
    let split = input.attrs.split_reserved();
    if !split.dropped.is_empty() {
        debug!(dropped = ?split.dropped, "reserved attributes not forwarded");
    }

    let mut attributes: IndexMap<String, String> = a11y
        .to_pairs()
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();
    for (name, value) in split.forwarded {
        let name = if name.eq_ignore_ascii_case("role") {
            "role"
        } else {
            name
        };
        attributes.insert(name.to_string(), value.to_string());
    }

    RenderPlan {
        attributes,
        listeners: Listeners {
            click: a11y.interactive && input.has_on_click,
            key_press: a11y.interactive,
        },
    }
}
