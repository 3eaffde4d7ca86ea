//! Yew components.

mod clickable_box;
mod web_event;

pub use clickable_box::{Activation, ClickableBox, ClickableBoxProps, ClickableParts, Is};
