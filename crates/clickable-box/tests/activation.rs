use std::cell::{Cell, RefCell};

use clickable_box::core::activation::{
    ClickDispatch, Handlers, KeyDispatch, dispatch_click, dispatch_key_press,
};
use clickable_box::core::render::{RenderInput, RenderPlan, plan_render};
use clickable_box::{KeyPress, PassThrough};

struct FakeKey {
    key: &'static str,
    prevented: Cell<bool>,
}

impl FakeKey {
    fn press(key: &'static str) -> Self {
        Self {
            key,
            prevented: Cell::new(false),
        }
    }
}

impl KeyPress for FakeKey {
    fn key(&self) -> String {
        self.key.to_string()
    }

    fn prevent_default(&self) {
        self.prevented.set(true);
    }

    fn default_prevented(&self) -> bool {
        self.prevented.get()
    }
}

#[derive(Default)]
struct Recorder {
    calls: RefCell<Vec<&'static str>>,
}

impl Recorder {
    fn count(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|call| **call == name).count()
    }
}

/// Simulates a rendered box: listeners exist only where the plan attaches them.
struct Mounted<'a> {
    plan: RenderPlan,
    on_click: Option<&'a dyn Fn(&FakeKey)>,
    on_key_press: Option<&'a dyn Fn(&FakeKey)>,
}

impl<'a> Mounted<'a> {
    fn new(
        disabled: bool,
        on_click: Option<&'a dyn Fn(&FakeKey)>,
        on_key_press: Option<&'a dyn Fn(&FakeKey)>,
    ) -> Self {
        let plan = plan_render(RenderInput {
            disabled,
            tab_index: 0,
            has_on_click: on_click.is_some(),
            attrs: &PassThrough::new(),
        });
        Self {
            plan,
            on_click,
            on_key_press,
        }
    }

    fn press(&self, key: &'static str) -> Option<KeyDispatch> {
        self.plan.listeners.key_press.then(|| {
            dispatch_key_press(
                &FakeKey::press(key),
                Handlers {
                    on_key_press: self.on_key_press,
                    on_click: self.on_click,
                },
            )
        })
    }

    fn click(&self) -> Option<ClickDispatch> {
        self.plan
            .listeners
            .click
            .then(|| dispatch_click(&FakeKey::press(""), self.on_click))
    }
}

#[test]
fn disabled_box_never_activates() {
    let recorder = Recorder::default();
    let on_click = |_: &FakeKey| recorder.calls.borrow_mut().push("click");
    let on_key_press = |_: &FakeKey| recorder.calls.borrow_mut().push("keypress");
    let mounted = Mounted::new(true, Some(&on_click), Some(&on_key_press));

    assert_eq!(mounted.click(), None);
    assert_eq!(mounted.press(" "), None);
    assert_eq!(mounted.press("Enter"), None);
    assert!(recorder.calls.borrow().is_empty());

    assert_eq!(mounted.plan.attribute("tabindex"), None);
    assert_eq!(mounted.plan.attribute("aria-disabled"), Some("true"));
    assert_eq!(mounted.plan.attribute("role"), Some("button"));
}

#[test]
fn click_only_box_activates_once_per_input() {
    let recorder = Recorder::default();
    let on_click = |_: &FakeKey| recorder.calls.borrow_mut().push("click");
    let mounted = Mounted::new(false, Some(&on_click), None);

    assert_eq!(mounted.press(" "), Some(KeyDispatch::Click));
    assert_eq!(recorder.count("click"), 1);
    assert_eq!(mounted.press("Enter"), Some(KeyDispatch::Click));
    assert_eq!(recorder.count("click"), 2);
    assert_eq!(mounted.click(), Some(ClickDispatch::Click));
    assert_eq!(recorder.count("click"), 3);
    assert_eq!(mounted.press("a"), Some(KeyDispatch::Ignored));
    assert_eq!(mounted.press("Escape"), Some(KeyDispatch::Ignored));
    assert_eq!(recorder.count("click"), 3);
}

#[test]
fn space_goes_to_key_press_only_when_both_supplied() {
    let recorder = Recorder::default();
    let on_click = |_: &FakeKey| recorder.calls.borrow_mut().push("click");
    let on_key_press = |_: &FakeKey| recorder.calls.borrow_mut().push("keypress");
    let mounted = Mounted::new(false, Some(&on_click), Some(&on_key_press));

    assert_eq!(mounted.press(" "), Some(KeyDispatch::KeyPress));
    assert_eq!(mounted.press("Spacebar"), Some(KeyDispatch::KeyPress));
    assert_eq!(*recorder.calls.borrow(), vec!["keypress", "keypress"]);
}

#[test]
fn enter_runs_key_press_then_click() {
    let recorder = Recorder::default();
    let on_click = |_: &FakeKey| recorder.calls.borrow_mut().push("click");
    let on_key_press = |_: &FakeKey| recorder.calls.borrow_mut().push("keypress");
    let mounted = Mounted::new(false, Some(&on_click), Some(&on_key_press));

    assert_eq!(mounted.press("Enter"), Some(KeyDispatch::KeyPressThenClick));
    assert_eq!(*recorder.calls.borrow(), vec!["keypress", "click"]);
}

#[test]
fn enter_key_press_can_veto_click() {
    let recorder = Recorder::default();
    let on_click = |_: &FakeKey| recorder.calls.borrow_mut().push("click");
    let on_key_press = |event: &FakeKey| {
        recorder.calls.borrow_mut().push("keypress");
        event.prevent_default();
    };
    let mounted = Mounted::new(false, Some(&on_click), Some(&on_key_press));

    assert_eq!(mounted.press("Enter"), Some(KeyDispatch::Vetoed));
    assert_eq!(recorder.count("click"), 0);
    assert_eq!(recorder.count("keypress"), 1);
}

#[test]
fn space_prevents_default_even_without_handlers() {
    let event = FakeKey::press(" ");
    let outcome = dispatch_key_press(&event, Handlers::default());
    assert_eq!(outcome, KeyDispatch::Unhandled);
    assert!(event.default_prevented());

    let enter = FakeKey::press("Enter");
    dispatch_key_press(&enter, Handlers::default());
    assert!(!enter.default_prevented());
}

#[test]
fn role_is_button_unless_overridden() {
    for disabled in [false, true] {
        let plain = plan_render(RenderInput {
            disabled,
            tab_index: 0,
            has_on_click: false,
            attrs: &PassThrough::new(),
        });
        assert_eq!(plain.attribute("role"), Some("button"));

        let attrs = PassThrough::new().with("role", "link");
        let overridden = plan_render(RenderInput {
            disabled,
            tab_index: 0,
            has_on_click: false,
            attrs: &attrs,
        });
        assert_eq!(overridden.attribute("role"), Some("link"));
    }
}

#[test]
fn unreserved_attributes_are_forwarded_unchanged() {
    let attrs = PassThrough::new()
        .with("title", "Open settings")
        .with("data-testid", "goose")
        .with("onKeyPress", "alert(1)")
        .with("tabIndex", "9");
    let plan = plan_render(RenderInput {
        disabled: false,
        tab_index: 0,
        has_on_click: true,
        attrs: &attrs,
    });
    assert_eq!(plan.attribute("title"), Some("Open settings"));
    assert_eq!(plan.attribute("data-testid"), Some("goose"));
    assert_eq!(plan.attribute("onKeyPress"), None);
    assert_eq!(plan.attribute("tabIndex"), None);
    assert_eq!(plan.attribute("tabindex"), Some("0"));
    let names: Vec<&str> = plan.attributes.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["role", "tabindex", "title", "data-testid"]);
}

#[test]
fn custom_tab_index_only_applies_while_enabled() {
    let attrs = PassThrough::new();
    let enabled = plan_render(RenderInput {
        disabled: false,
        tab_index: -100,
        has_on_click: false,
        attrs: &attrs,
    });
    assert_eq!(enabled.attribute("tabindex"), Some("-100"));

    let disabled = plan_render(RenderInput {
        disabled: true,
        tab_index: -100,
        has_on_click: false,
        attrs: &attrs,
    });
    assert_eq!(disabled.attribute("tabindex"), None);
}

#[test]
fn space_with_only_key_press_runs_it_and_prevents_scroll() {
    let recorder = Recorder::default();
    let on_key_press = |_: &FakeKey| recorder.calls.borrow_mut().push("keypress");
    let event = FakeKey::press(" ");
    let outcome = dispatch_key_press(
        &event,
        Handlers {
            on_key_press: Some(&on_key_press),
            on_click: None,
        },
    );
    assert_eq!(outcome, KeyDispatch::KeyPress);
    assert_eq!(recorder.count("keypress"), 1);
    assert!(event.default_prevented());
}

#[test]
fn enter_with_only_key_press_runs_it_without_touching_default() {
    let recorder = Recorder::default();
    let on_key_press = |_: &FakeKey| recorder.calls.borrow_mut().push("keypress");
    let event = FakeKey::press("Enter");
    let outcome = dispatch_key_press(
        &event,
        Handlers {
            on_key_press: Some(&on_key_press),
            on_click: None,
        },
    );
    assert_eq!(outcome, KeyDispatch::KeyPress);
    assert_eq!(recorder.count("keypress"), 1);
    assert!(!event.default_prevented());
}
