use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event};

use crate::dom;

const SLIDE_IN_DELAY_MS: u32 = 100;
const SLIDE_OUT_MS: u32 = 300;
const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
    Info,
}

impl NotifyKind {
    fn class_suffix(&self) -> &'static str {
        match self {
            NotifyKind::Success => "success",
            NotifyKind::Error => "error",
            NotifyKind::Info => "info",
        }
    }

    fn background(&self) -> &'static str {
        match self {
            NotifyKind::Success => "var(--brand-accent)",
            NotifyKind::Error => "#ff4757",
            NotifyKind::Info => "var(--brand-accent-light)",
        }
    }

    fn foreground(&self) -> &'static str {
        match self {
            NotifyKind::Success => "var(--brand-bg)",
            NotifyKind::Error | NotifyKind::Info => "white",
        }
    }
}

struct Toast {
    root: Element,
    _close: EventListener,
    _slide_in: Timeout,
    _auto_dismiss: Timeout,
}

thread_local! {
    static ACTIVE: RefCell<Option<Rc<Toast>>> = RefCell::new(None);
}

/// Shows a toast in the single notification slot, evicting any live one.
/// Auto-dismisses unless the close button gets there first.
pub fn show(kind: NotifyKind, message: &str) {
    if let Some(previous) = ACTIVE.with(|slot| slot.borrow_mut().take()) {
        previous.root.remove();
    }
    let toast = build_toast(kind, message);
    ACTIVE.with(|slot| {
        *slot.borrow_mut() = Some(toast);
    });
}

// Slide out, then remove. Only the slot's current occupant is dismissed;
// a stale auto-dismiss timer no-ops. The future owns the toast from here,
// keeping its listeners and timers from being dropped inside their own
// callbacks.
fn begin_dismiss(root: &Element) {
    let toast = ACTIVE.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.as_ref().map(|toast| toast.root == *root) == Some(true) {
            slot.take()
        } else {
            None
        }
    });
    let Some(toast) = toast else {
        return;
    };
    dom::set_style(&toast.root, "transform", "translateX(100%)");
    spawn_local(async move {
        TimeoutFuture::new(SLIDE_OUT_MS).await;
        toast.root.remove();
    });
}

fn build_toast(kind: NotifyKind, message: &str) -> Rc<Toast> {
    let document = dom::document();
    let root = document.create_element("div").expect("create notification");
    root.set_class_name(&format!(
        "notification notification-{}",
        kind.class_suffix()
    ));
    let _ = root.set_attribute("style", &toast_style(kind));

    let content = document
        .create_element("div")
        .expect("create notification content");
    content.set_class_name("notification-content");
    let text = document
        .create_element("span")
        .expect("create notification message");
    text.set_class_name("notification-message");
    text.set_text_content(Some(message));
    let close = document
        .create_element("button")
        .expect("create notification close");
    close.set_class_name("notification-close");
    close.set_text_content(Some("×"));
    let _ = content.append_child(&text);
    let _ = content.append_child(&close);
    let _ = root.append_child(&content);

    let body = document.body().expect("body available");
    let _ = body.append_child(&root);

    let close_listener = EventListener::new(&close, "click", {
        let root = root.clone();
        move |_event: &Event| {
            begin_dismiss(&root);
        }
    });
    let slide_in = Timeout::new(SLIDE_IN_DELAY_MS, {
        let root = root.clone();
        move || {
            dom::set_style(&root, "transform", "translateX(0)");
        }
    });
    let auto_dismiss = Timeout::new(AUTO_DISMISS_MS, {
        let root = root.clone();
        move || {
            begin_dismiss(&root);
        }
    });

    Rc::new(Toast {
        root,
        _close: close_listener,
        _slide_in: slide_in,
        _auto_dismiss: auto_dismiss,
    })
}

fn toast_style(kind: NotifyKind) -> String {
    format!(
        "position: fixed; top: 20px; right: 20px; background: {}; color: {}; \
         padding: 1rem 1.5rem; border-radius: var(--border-radius); \
         box-shadow: 0 4px 20px rgba(0, 0, 0, 0.3); z-index: 10000; \
         transform: translateX(100%); transition: transform 0.3s ease; \
         max-width: 400px;",
        kind.background(),
        kind.foreground()
    )
}
