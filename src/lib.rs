mod contact;
mod dom;
mod nav;
mod navbar;
pub mod notify;
mod reveal;
mod slider;
pub mod viewer;

use std::cell::RefCell;
use std::rc::Rc;

#[allow(dead_code)]
struct Page {
    nav: nav::NavMenu,
    navbar: navbar::NavbarEffect,
    reveal: reveal::ScrollReveal,
    contact: Option<contact::ContactForm>,
    slider: Option<slider::SliderHints>,
    viewer: Rc<viewer::ImageViewer>,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = RefCell::new(None);
}

/// Wires every page component once. The components own their event
/// listeners; parking them in the thread-local slot keeps the wiring alive
/// for the page lifetime.
pub fn start() {
    console_error_panic_hook::set_once();
    let page = Page {
        nav: nav::NavMenu::install(),
        navbar: navbar::NavbarEffect::install(),
        reveal: reveal::ScrollReveal::install(),
        contact: contact::ContactForm::install(),
        slider: slider::SliderHints::install(),
        viewer: viewer::ImageViewer::install(),
    };
    PAGE.with(|slot| {
        *slot.borrow_mut() = Some(page);
    });
    gloo::console::log!("page behavior installed");
}
