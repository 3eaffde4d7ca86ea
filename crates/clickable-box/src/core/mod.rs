//! Core, DOM-free primitives for the clickable box.
pub mod a11y;
pub mod activation;
pub mod attrs;
pub mod catalog;
pub mod element;
pub mod error;
pub mod render;
