#![cfg(target_arch = "wasm32")]

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, HtmlImageElement};

use thumbcrafter::notify::{self, NotifyKind};
use thumbcrafter::viewer::ImageViewer;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .expect("window missing")
        .document()
        .expect("document missing")
}

#[wasm_bindgen_test]
fn new_toast_evicts_previous() {
    notify::show(NotifyKind::Info, "first");
    notify::show(NotifyKind::Success, "second");

    let toasts = document()
        .query_selector_all(".notification")
        .expect("query notifications");
    assert_eq!(toasts.length(), 1);

    let message = document()
        .query_selector(".notification-message")
        .expect("query message")
        .expect("message span present");
    assert_eq!(message.text_content().as_deref(), Some("second"));
}

#[wasm_bindgen_test]
async fn close_button_slides_out_and_removes() {
    notify::show(NotifyKind::Error, "going away");

    let close = document()
        .query_selector(".notification-close")
        .expect("query close")
        .expect("close button present")
        .dyn_into::<HtmlElement>()
        .expect("close is an html element");
    close.click();

    let toast = document()
        .query_selector(".notification")
        .expect("query toast")
        .expect("toast still sliding out")
        .dyn_into::<HtmlElement>()
        .expect("toast is an html element");
    let transform = toast
        .style()
        .get_property_value("transform")
        .expect("read toast transform");
    assert_eq!(transform, "translateX(100%)");

    TimeoutFuture::new(500).await;
    let gone = document()
        .query_selector(".notification")
        .expect("query toast");
    assert!(gone.is_none());
}

fn ensure_viewer_dom() {
    let document = document();
    if document.get_element_by_id("imageModal").is_some() {
        return;
    }
    let body = document.body().expect("body missing");
    let modal = document.create_element("div").expect("create modal");
    modal.set_id("imageModal");
    let image = document.create_element("img").expect("create modal image");
    image.set_id("modalImage");
    let close = document.create_element("button").expect("create close");
    close.set_id("closeModal");
    let _ = modal.append_child(&image);
    let _ = modal.append_child(&close);
    let _ = body.append_child(&modal);
}

#[wasm_bindgen_test]
fn viewer_open_and_close_reset_state() {
    ensure_viewer_dom();
    let viewer = ImageViewer::install();

    let source = document()
        .create_element("img")
        .expect("create source image")
        .dyn_into::<HtmlImageElement>()
        .expect("source is an image");
    source.set_src("showcase/sample.jpg");
    source.set_alt("sample thumbnail");

    viewer.open(&source);

    let modal = document()
        .get_element_by_id("imageModal")
        .expect("modal present");
    let image = document()
        .get_element_by_id("modalImage")
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
        .expect("modal image present");
    let body = document().body().expect("body missing");

    assert!(modal.class_list().contains("active"));
    assert_eq!(
        body.style()
            .get_property_value("overflow")
            .expect("read body overflow"),
        "hidden"
    );
    assert_eq!(image.alt(), "sample thumbnail");
    assert_eq!(image.src(), source.src());
    assert_eq!(
        image
            .style()
            .get_property_value("transform")
            .expect("read image transform"),
        "scale(1) translate(0px, 0px)"
    );

    viewer.close();
    viewer.close();

    assert!(!modal.class_list().contains("active"));
    assert_eq!(
        body.style()
            .get_property_value("overflow")
            .expect("read body overflow"),
        ""
    );
    assert_eq!(
        image
            .style()
            .get_property_value("transform")
            .expect("read image transform"),
        "scale(1) translate(0px, 0px)"
    );
    assert!(!image.class_list().contains("zoomed"));
}
