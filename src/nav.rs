use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, Node, ScrollBehavior, ScrollToOptions};

use crate::dom;

// Scroll target offset compensating for the fixed navbar height.
pub(crate) const NAV_SCROLL_OFFSET: f64 = 70.0;

pub(crate) struct NavMenu {
    _listeners: Vec<EventListener>,
}

impl NavMenu {
    pub(crate) fn install() -> Self {
        let hamburger = dom::query(".hamburger").expect("hamburger control present");
        let menu = dom::query(".nav-menu").expect("nav menu present");

        let mut listeners = Vec::new();

        let listener = EventListener::new(&hamburger, "click", {
            let hamburger = hamburger.clone();
            let menu = menu.clone();
            move |_event: &Event| {
                let _ = hamburger.class_list().toggle("active");
                let _ = menu.class_list().toggle("active");
            }
        });
        listeners.push(listener);

        for link in dom::query_all(".nav-link") {
            let listener = EventListener::new_with_options(
                &link,
                "click",
                EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: false,
                },
                {
                    let hamburger = hamburger.clone();
                    let menu = menu.clone();
                    let link = link.clone();
                    move |event: &Event| {
                        event.prevent_default();
                        close_menu(&hamburger, &menu);
                        let section = link
                            .get_attribute("href")
                            .filter(|href| href.starts_with('#'))
                            .and_then(|href| dom::query(&href));
                        if let Some(section) = section {
                            scroll_to_section(&section);
                        }
                    }
                },
            );
            listeners.push(listener);
        }

        // A click landing inside neither element closes the menu.
        let listener = EventListener::new(&dom::document(), "click", {
            let hamburger = hamburger.clone();
            let menu = menu.clone();
            move |event: &Event| {
                let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                    return;
                };
                if hamburger.contains(Some(&target)) || menu.contains(Some(&target)) {
                    return;
                }
                close_menu(&hamburger, &menu);
            }
        });
        listeners.push(listener);

        Self {
            _listeners: listeners,
        }
    }
}

fn close_menu(hamburger: &Element, menu: &Element) {
    let _ = hamburger.class_list().remove_1("active");
    let _ = menu.class_list().remove_1("active");
}

fn scroll_to_section(section: &Element) {
    let Some(section) = section.dyn_ref::<HtmlElement>() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(section.offset_top() as f64 - NAV_SCROLL_OFFSET);
    options.set_behavior(ScrollBehavior::Smooth);
    dom::window().scroll_to_with_scroll_to_options(&options);
}
