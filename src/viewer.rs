use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, HtmlImageElement, KeyboardEvent, MouseEvent, TouchEvent, TouchList, WheelEvent,
};

use thumbcrafter_core::viewer::{pinch_distance, DragGate, ViewerSession};

use crate::dom;

/// Fullscreen modal viewer for showcase images: click toggles between 1x
/// and 2x, pinch and wheel adjust the scale continuously, dragging pans
/// while zoomed. All zoom/pan state lives in the [`ViewerSession`].
pub struct ImageViewer {
    modal: Element,
    image: HtmlImageElement,
    session: RefCell<ViewerSession>,
    drag_gate: RefCell<Option<DragGate>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl ImageViewer {
    pub fn install() -> Rc<Self> {
        let document = dom::document();
        let modal = document
            .get_element_by_id("imageModal")
            .expect("image modal present");
        let image = document
            .get_element_by_id("modalImage")
            .and_then(|element| element.dyn_into::<HtmlImageElement>().ok())
            .expect("modal image present");

        let viewer = Rc::new(Self {
            modal,
            image,
            session: RefCell::new(ViewerSession::new()),
            drag_gate: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        viewer.install_listeners();
        viewer
    }

    fn install_listeners(self: &Rc<Self>) {
        let document = dom::document();
        let window = dom::window();
        let mut listeners = Vec::new();

        for source in dom::query_all(".showcase img, .slide img") {
            dom::set_style(&source, "cursor", "pointer");
            let viewer = Rc::clone(self);
            let clicked = source.clone();
            listeners.push(EventListener::new(&source, "click", move |_event: &Event| {
                viewer.open(&clicked);
            }));
        }

        let close = document
            .get_element_by_id("closeModal")
            .expect("modal close control present");
        let viewer = Rc::clone(self);
        listeners.push(EventListener::new(&close, "click", move |_event: &Event| {
            viewer.close();
        }));

        // Backdrop click: only when the click lands on the modal itself,
        // not on the image inside it.
        let modal = self.modal.clone();
        let viewer = Rc::clone(self);
        listeners.push(EventListener::new(&modal, "click", move |event: &Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if target == viewer.modal {
                viewer.close();
            }
        }));

        let viewer = Rc::clone(self);
        listeners.push(EventListener::new(
            &document,
            "keydown",
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if event.key() == "Escape" && viewer.modal.class_list().contains("active") {
                    viewer.close();
                }
            },
        ));

        let viewer = Rc::clone(self);
        let image = self.image.clone();
        listeners.push(EventListener::new(&image, "click", move |_event: &Event| {
            // A click that ends a real pan keeps the zoom as-is.
            let panned = viewer
                .drag_gate
                .borrow_mut()
                .take()
                .map(|gate| gate.moved())
                .unwrap_or(false);
            if panned {
                return;
            }
            viewer.session.borrow_mut().toggle_click_zoom();
            viewer.apply_transform();
        }));

        let viewer = Rc::clone(self);
        let image = self.image.clone();
        listeners.push(EventListener::new(
            &image,
            "touchstart",
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                if let Some(distance) = two_touch_distance(&event.touches()) {
                    viewer.session.borrow_mut().begin_pinch(distance);
                }
            },
        ));

        let viewer = Rc::clone(self);
        let image = self.image.clone();
        listeners.push(EventListener::new_with_options(
            &image,
            "touchmove",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                let Some(distance) = two_touch_distance(&event.touches()) else {
                    return;
                };
                let applied = viewer.session.borrow_mut().pinch_to(distance);
                if applied {
                    viewer.apply_transform();
                    event.prevent_default();
                }
            },
        ));

        // Gesture state clears on every exit path, including cancellation.
        for event_type in ["touchend", "touchcancel"] {
            let viewer = Rc::clone(self);
            listeners.push(EventListener::new(
                &window,
                event_type,
                move |_event: &Event| {
                    let mut session = viewer.session.borrow_mut();
                    session.end_pinch();
                    session.end_drag();
                },
            ));
        }

        let viewer = Rc::clone(self);
        let image = self.image.clone();
        listeners.push(EventListener::new(
            &image,
            "mousedown",
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let x = event.client_x() as f64;
                let y = event.client_y() as f64;
                let mut session = viewer.session.borrow_mut();
                if !session.is_zoomed() {
                    return;
                }
                session.begin_drag(x, y);
                *viewer.drag_gate.borrow_mut() = Some(DragGate::new(x, y));
            },
        ));

        // Window-level so the drag survives the pointer leaving the image;
        // liveness is gated by the session's drag anchor.
        let viewer = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &window,
            "mousemove",
            EventListenerOptions {
                phase: EventListenerPhase::Capture,
                passive: false,
            },
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let x = event.client_x() as f64;
                let y = event.client_y() as f64;
                let applied = viewer.session.borrow_mut().drag_to(x, y);
                if !applied {
                    return;
                }
                if let Some(gate) = viewer.drag_gate.borrow_mut().as_mut() {
                    gate.update(x, y);
                }
                viewer.apply_transform();
                event.prevent_default();
            },
        ));

        let viewer = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &window,
            "mouseup",
            EventListenerOptions {
                phase: EventListenerPhase::Capture,
                passive: false,
            },
            move |_event: &Event| {
                viewer.session.borrow_mut().end_drag();
            },
        ));

        let viewer = Rc::clone(self);
        let image = self.image.clone();
        listeners.push(EventListener::new_with_options(
            &image,
            "wheel",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<WheelEvent>() else {
                    return;
                };
                event.prevent_default();
                viewer.session.borrow_mut().wheel_zoom(event.delta_y());
                viewer.apply_transform();
            },
        ));

        *self.listeners.borrow_mut() = listeners;
    }

    pub fn open(&self, source: &Element) {
        let Some(source) = source.dyn_ref::<HtmlImageElement>() else {
            return;
        };
        self.image.set_src(&source.src());
        self.image.set_alt(&source.alt());
        let _ = self.modal.class_list().add_1("active");
        if let Some(body) = dom::document().body() {
            let _ = body.style().set_property("overflow", "hidden");
        }
        self.session.borrow_mut().reset();
        self.drag_gate.borrow_mut().take();
        self.apply_transform();
    }

    pub fn close(&self) {
        let _ = self.modal.class_list().remove_1("active");
        if let Some(body) = dom::document().body() {
            let _ = body.style().remove_property("overflow");
        }
        self.session.borrow_mut().reset();
        self.drag_gate.borrow_mut().take();
        self.apply_transform();
    }

    fn apply_transform(&self) {
        let session = self.session.borrow();
        let _ = self
            .image
            .style()
            .set_property("transform", &session.transform());
        let _ = self
            .image
            .class_list()
            .toggle_with_force("zoomed", session.is_zoomed());
    }
}

fn two_touch_distance(touches: &TouchList) -> Option<f64> {
    if touches.length() != 2 {
        return None;
    }
    let a = touches.item(0)?;
    let b = touches.item(1)?;
    Some(pinch_distance(
        a.client_x() as f64,
        a.client_y() as f64,
        b.client_x() as f64,
        b.client_y() as f64,
    ))
}
