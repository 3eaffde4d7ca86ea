//! Browser keyboard events as dispatcher input.

use crate::core::activation::KeyPress;

impl KeyPress for web_sys::KeyboardEvent {
    fn key(&self) -> String {
        web_sys::KeyboardEvent::key(self)
    }

    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }

    fn default_prevented(&self) -> bool {
        web_sys::Event::default_prevented(self)
    }
}
