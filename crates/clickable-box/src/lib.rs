#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Accessible, polymorphic clickable primitive for Yew.
//!
//! `ClickableBox` renders as any element while behaving like a native button: it is focusable,
//! activates on Space and Enter, and honours a disabled state. The activation rules and attribute
//! derivation live in [`core`] and are tested without a browser; the Yew component is only built
//! for wasm32.

pub mod core;

pub use crate::core::activation::{ActivationKey, KeyDispatch, KeyPress};
pub use crate::core::attrs::PassThrough;
pub use crate::core::element::{ElementType, Tag};
pub use crate::core::error::{CatalogError, ElementTypeError};

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
pub mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
#[cfg(target_arch = "wasm32")]
pub use components::{Activation, ClickableBox, ClickableBoxProps, ClickableParts, Is};
