use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement};

use thumbcrafter_core::scroll::NavbarState;

use crate::dom;

const NAVBAR_BG_SOLID: &str = "rgba(1, 20, 38, 0.98)";
const NAVBAR_BG_BASE: &str = "rgba(1, 20, 38, 0.95)";

pub(crate) struct NavbarEffect {
    _listener: EventListener,
}

impl NavbarEffect {
    pub(crate) fn install() -> Self {
        let navbar = dom::query(".navbar")
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .expect("navbar present");
        let mut state = NavbarState::new();
        let listener = EventListener::new(&dom::window(), "scroll", move |_event: &Event| {
            let phase = state.observe(dom::scroll_offset());
            let background = if phase.opaque {
                NAVBAR_BG_SOLID
            } else {
                NAVBAR_BG_BASE
            };
            let _ = navbar.style().set_property("background", background);
            let transform = if phase.hidden {
                "translateY(-100%)"
            } else {
                "translateY(0)"
            };
            let _ = navbar.style().set_property("transform", transform);
        });
        Self {
            _listener: listener,
        }
    }
}
