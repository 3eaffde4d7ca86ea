//! Activation dispatch for key presses and pointer clicks.
//!
//! # Design
//! - Pure functions over a [`KeyPress`] abstraction so the rules run without a DOM.
//! - No state survives an event; every call decides from the key and the supplied handlers.
//! - Handler panics are not caught.
//!
//! Space always suppresses the default action (page scroll) and hands the activation to
//! `onkeypress` alone when the caller supplied one. Enter runs `onkeypress` first and then
//! `onclick`, unless `onkeypress` prevented the default.

use tracing::trace;

/// Key identifiers for the space bar, modern first then legacy (`Spacebar`).
pub const SPACE_KEYS: [&str; 2] = [" ", "Spacebar"];

/// Key identifier for the enter key.
pub const ENTER_KEY: &str = "Enter";

/// Minimal view of a keyboard event needed for dispatch.
pub trait KeyPress {
    /// Key identifier as reported by `KeyboardEvent.key`.
    fn key(&self) -> String;
    /// Mark the default action as prevented.
    fn prevent_default(&self);
    /// Whether any handler has prevented the default action.
    fn default_prevented(&self) -> bool;
}

/// Keys that activate the clickable box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationKey {
    /// Space bar.
    Space,
    /// Enter / Return.
    Enter,
}

impl ActivationKey {
    /// Classify a key identifier; `None` for keys that do not activate.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        if SPACE_KEYS.contains(&key) {
            Some(Self::Space)
        } else if key == ENTER_KEY {
            Some(Self::Enter)
        } else {
            None
        }
    }
}

/// Which callbacks ran for a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyDispatch {
    /// Not an activation key; the event was left untouched.
    Ignored,
    /// Activation key but neither callback was supplied.
    Unhandled,
    /// Only `onkeypress` ran.
    KeyPress,
    /// Only `onclick` ran.
    Click,
    /// `onkeypress` ran, then `onclick`.
    KeyPressThenClick,
    /// Enter: `onkeypress` ran and prevented the default, so `onclick` was skipped.
    Vetoed,
}

/// Which callbacks ran for a pointer click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickDispatch {
    /// `onclick` ran.
    Click,
    /// No `onclick` supplied.
    Unhandled,
}

/// Borrowed caller callbacks for one event.
pub struct Handlers<'a, E: ?Sized> {
    /// Caller key handler.
    pub on_key_press: Option<&'a dyn Fn(&E)>,
    /// Caller activation handler.
    pub on_click: Option<&'a dyn Fn(&E)>,
}

impl<E: ?Sized> Clone for Handlers<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ?Sized> Copy for Handlers<'_, E> {}

impl<E: ?Sized> Default for Handlers<'_, E> {
    fn default() -> Self {
        Self {
            on_key_press: None,
            on_click: None,
        }
    }
}

impl<E: ?Sized> std::fmt::Debug for Handlers<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handlers")
            .field("on_key_press", &self.on_key_press.is_some())
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// Dispatch a key press to the caller callbacks.
///
/// Only install this for an enabled box; a disabled box gets no key listener at all.
pub fn dispatch_key_press<E>(event: &E, handlers: Handlers<'_, E>) -> KeyDispatch
where
    E: KeyPress + ?Sized,
{
    let key = event.key();
    let outcome = match ActivationKey::from_key(&key) {
        None => KeyDispatch::Ignored,
        Some(ActivationKey::Space) => {
            event.prevent_default();
            if let Some(on_key_press) = handlers.on_key_press {
                on_key_press(event);
                KeyDispatch::KeyPress
            } else if let Some(on_click) = handlers.on_click {
                on_click(event);
                KeyDispatch::Click
            } else {
                KeyDispatch::Unhandled
            }
        }
        Some(ActivationKey::Enter) => dispatch_enter(event, handlers),
    };
    trace!(key = %key, outcome = ?outcome, "clickable key press dispatched");
    outcome
}

fn dispatch_enter<E>(event: &E, handlers: Handlers<'_, E>) -> KeyDispatch
where
    E: KeyPress + ?Sized,
{
    let ran_key_press = match handlers.on_key_press {
        Some(on_key_press) => {
            on_key_press(event);
            if event.default_prevented() {
                return KeyDispatch::Vetoed;
            }
            true
        }
        None => false,
    };
    match (ran_key_press, handlers.on_click) {
        (true, Some(on_click)) => {
            on_click(event);
            KeyDispatch::KeyPressThenClick
        }
        (false, Some(on_click)) => {
            on_click(event);
            KeyDispatch::Click
        }
        (true, None) => KeyDispatch::KeyPress,
        (false, None) => KeyDispatch::Unhandled,
    }
}

/// Dispatch a pointer click straight to `onclick`.
pub fn dispatch_click<E: ?Sized>(event: &E, on_click: Option<&dyn Fn(&E)>) -> ClickDispatch {
    let outcome = on_click.map_or(ClickDispatch::Unhandled, |on_click| {
        on_click(event);
        ClickDispatch::Click
    });
    trace!(outcome = ?outcome, "clickable click dispatched");
    outcome
}
