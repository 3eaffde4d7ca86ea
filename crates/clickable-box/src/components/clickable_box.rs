//! The `ClickableBox` Yew component.
//!
//! # Design
//! - Attribute and listener decisions come from [`plan_render`]; this module only builds nodes.
//! - The element type is resolved once per render into a single `VTag`, or handed to a caller
//!   render callback together with the derived parts.
//! - The caller's [`NodeRef`] is bound to the rendered node and never touched afterwards.

use std::borrow::Cow;

use indexmap::IndexMap;
use yew::prelude::*;
use yew::virtual_dom::{Attributes, VNode};

use crate::core::a11y::DEFAULT_TAB_INDEX;
use crate::core::activation::{Handlers, dispatch_click, dispatch_key_press};
use crate::core::attrs::PassThrough;
use crate::core::element::{ElementType, Tag};
use crate::core::render::{RenderInput, plan_render};

/// Event handed to `onclick`: the pointer click or the key press that activated the box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Pointer click.
    Pointer(MouseEvent),
    /// Space or Enter key press.
    Key(KeyboardEvent),
}

impl Activation {
    /// Prevent the default action of the underlying event.
    pub fn prevent_default(&self) {
        match self {
            Self::Pointer(event) => event.prevent_default(),
            Self::Key(event) => event.prevent_default(),
        }
    }

    /// Whether the activation came from the keyboard.
    #[must_use]
    pub const fn is_keyboard(&self) -> bool {
        matches!(self, Self::Key(_))
    }
}

/// What the clickable box renders as.
#[derive(Clone, PartialEq)]
pub enum Is {
    /// A DOM element.
    Element(ElementType),
    /// A caller render function receiving the derived attributes, listeners, ref and children.
    Component(Callback<ClickableParts, Html>),
}

impl Default for Is {
    fn default() -> Self {
        Self::Element(ElementType::default())
    }
}

impl From<ElementType> for Is {
    fn from(element: ElementType) -> Self {
        Self::Element(element)
    }
}

impl From<Tag> for Is {
    fn from(tag: Tag) -> Self {
        Self::Element(ElementType::Tag(tag))
    }
}

/// Everything derived for one render, ready to be placed on an element.
pub struct ClickableParts {
    /// Attributes in render order.
    pub attributes: IndexMap<AttrValue, AttrValue>,
    /// Click listener; `None` when disabled or no `onclick` was supplied.
    pub onclick: Option<Callback<MouseEvent>>,
    /// Key press listener; `None` when disabled.
    pub onkeypress: Option<Callback<KeyboardEvent>>,
    /// Caller reference to bind to the rendered node.
    pub node_ref: NodeRef,
    /// Content.
    pub children: Children,
}

impl ClickableParts {
    /// Render the parts as a DOM element with the given tag name.
    #[must_use]
    pub fn into_element(self, tag: impl Into<Cow<'static, str>>) -> Html {
        let Self {
            attributes,
            onclick,
            onkeypress,
            node_ref,
            children,
        } = self;
        let tag: Cow<'static, str> = tag.into();
        let mut node = html! {
            <@{tag} ref={node_ref} onclick={onclick} onkeypress={onkeypress}>
                { for children.iter() }
            </@>
        };
        if let VNode::VTag(vtag) = &mut node {
            vtag.attributes = Attributes::IndexMap(attributes);
        }
        node
    }
}

/// Props for [`ClickableBox`].
#[derive(Properties, PartialEq)]
pub struct ClickableBoxProps {
    /// Element to render as; `span` by default.
    #[prop_or_default]
    pub is: Is,
    /// Activation handler for pointer clicks and Space/Enter.
    #[prop_or_default]
    pub onclick: Option<Callback<Activation>>,
    /// Caller key handler; owns Space when present and may veto Enter via `prevent_default`.
    #[prop_or_default]
    pub onkeypress: Option<Callback<KeyboardEvent>>,
    /// Disables activation and removes the box from the tab order.
    #[prop_or_default]
    pub disabled: bool,
    /// Tab order while enabled.
    #[prop_or(DEFAULT_TAB_INDEX)]
    pub tab_index: i32,
    /// Reference bound to the rendered node.
    #[prop_or_default]
    pub node_ref: NodeRef,
    /// Attributes forwarded verbatim, except reserved names.
    #[prop_or_default]
    pub attrs: PassThrough,
    /// Content.
    #[prop_or_default]
    pub children: Children,
}

/// Accessible element that activates like a native button.
#[function_component(ClickableBox)]
pub fn clickable_box(props: &ClickableBoxProps) -> Html {
    let plan = plan_render(RenderInput {
        disabled: props.disabled,
        tab_index: props.tab_index,
        has_on_click: props.onclick.is_some(),
        attrs: &props.attrs,
    });
    let listeners = plan.listeners;

    let onclick = props
        .onclick
        .clone()
        .filter(|_| listeners.click)
        .map(|onclick| {
            Callback::from(move |event: MouseEvent| {
                let emit = |activation: &Activation| onclick.emit(activation.clone());
                dispatch_click(&Activation::Pointer(event), Some(&emit));
            })
        });

    let onkeypress = listeners.key_press.then(|| {
        let onclick = props.onclick.clone();
        let onkeypress = props.onkeypress.clone();
        Callback::from(move |event: KeyboardEvent| {
            let key_press = onkeypress
                .as_ref()
                .map(|callback| move |event: &KeyboardEvent| callback.emit(event.clone()));
            let click = onclick.as_ref().map(|callback| {
                move |event: &KeyboardEvent| callback.emit(Activation::Key(event.clone()))
            });
            dispatch_key_press(
                &event,
                Handlers {
                    on_key_press: key_press
                        .as_ref()
                        .map(|handler| handler as &dyn Fn(&KeyboardEvent)),
                    on_click: click
                        .as_ref()
                        .map(|handler| handler as &dyn Fn(&KeyboardEvent)),
                },
            );
        })
    });

    let parts = ClickableParts {
        attributes: plan
            .attributes
            .into_iter()
            .map(|(name, value)| (AttrValue::from(name), AttrValue::from(value)))
            .collect(),
        onclick,
        onkeypress,
        node_ref: props.node_ref.clone(),
        children: props.children.clone(),
    };

    match &props.is {
        Is::Element(element) => parts.into_element(element.to_tag_name()),
        Is::Component(render) => render.emit(parts),
    }
}
