use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use js_sys::{Array, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use thumbcrafter_core::scroll::reveal_triggered;

use crate::dom;

const OBSERVER_THRESHOLD: f64 = 0.1;
const OBSERVER_ROOT_MARGIN: &str = "0px 0px -50px 0px";
const HERO_STAGGER_SECS: f64 = 0.2;

pub(crate) struct ScrollReveal {
    _mode: RevealMode,
}

#[allow(dead_code)]
enum RevealMode {
    Observer {
        observer: IntersectionObserver,
        callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    },
    Polling {
        listeners: Vec<EventListener>,
    },
}

impl ScrollReveal {
    pub(crate) fn install() -> Self {
        let elements = dom::query_all(".fade-in-up");
        stagger_hero_delays(&elements);
        let mode = if supports_intersection_observer() {
            observer_mode(&elements)
        } else {
            polling_mode(elements)
        };
        Self { _mode: mode }
    }
}

fn supports_intersection_observer() -> bool {
    Reflect::has(
        dom::window().as_ref(),
        &JsValue::from_str("IntersectionObserver"),
    )
    .unwrap_or(false)
}

fn stagger_hero_delays(elements: &[Element]) {
    for (index, element) in elements.iter().enumerate() {
        if element.closest(".hero").ok().flatten().is_some() {
            let delay = format!("{}s", index as f64 * HERO_STAGGER_SECS);
            dom::set_style(element, "transition-delay", &delay);
        }
    }
}

// The observer delivers initial intersection state on observe(), which
// doubles as the eager startup pass.
fn observer_mode(elements: &[Element]) -> RevealMode {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1("visible");
                }
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(OBSERVER_THRESHOLD));
    options.set_root_margin(OBSERVER_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .expect("intersection observer constructible");
    for element in elements {
        observer.observe(element);
    }
    RevealMode::Observer { observer, callback }
}

fn polling_mode(elements: Vec<Element>) -> RevealMode {
    let elements = Rc::new(elements);
    let frame = Rc::new(RefCell::new(None::<AnimationFrame>));

    // Above-the-fold elements reveal without waiting for a scroll event.
    run_reveal_pass(&elements);

    let window = dom::window();
    let mut listeners = Vec::new();
    for event_type in ["scroll", "resize"] {
        let elements = Rc::clone(&elements);
        let frame = Rc::clone(&frame);
        let listener = EventListener::new(&window, event_type, move |_event: &Event| {
            schedule_reveal_pass(&elements, &frame);
        });
        listeners.push(listener);
    }
    RevealMode::Polling { listeners }
}

// One pending animation frame at a time; scroll events arriving in between
// fold into the already-scheduled pass.
fn schedule_reveal_pass(elements: &Rc<Vec<Element>>, frame: &Rc<RefCell<Option<AnimationFrame>>>) {
    if frame.borrow().is_some() {
        return;
    }
    let elements = Rc::clone(elements);
    let frame_slot = Rc::clone(frame);
    let handle = request_animation_frame(move |_timestamp| {
        frame_slot.borrow_mut().take();
        run_reveal_pass(&elements);
    });
    *frame.borrow_mut() = Some(handle);
}

fn run_reveal_pass(elements: &[Element]) {
    let viewport_height = dom::viewport_height();
    for element in elements {
        let top = element.get_bounding_client_rect().top();
        if reveal_triggered(top, viewport_height) {
            let _ = element.class_list().add_1("visible");
        }
    }
}
