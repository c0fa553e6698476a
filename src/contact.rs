use gloo::console;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    Event, FormData, Headers, HtmlButtonElement, HtmlFormElement, RequestInit, Response,
};

use thumbcrafter_core::form::validate_submission;

use crate::dom;
use crate::notify::{self, NotifyKind};

const CONTACT_ENDPOINT: &str = "https://formspree.io/f/xanbagpw";
const SUBMIT_LABEL: &str = "Send Message";
const SUBMIT_PENDING_LABEL: &str = "Sending...";
const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

pub(crate) struct ContactForm {
    _submit: EventListener,
}

impl ContactForm {
    /// Returns None when the page ships without a contact form.
    pub(crate) fn install() -> Option<Self> {
        let form = dom::query(".contact-form")?
            .dyn_into::<HtmlFormElement>()
            .ok()?;
        let button = dom::query(".submit-btn")
            .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok());

        let target = form.clone();
        let listener = EventListener::new_with_options(
            &target,
            "submit",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                event.prevent_default();
                let Ok(fields) = FormData::new_with_form(&form) else {
                    console::warn!("contact form: unable to read form data");
                    return;
                };
                let name = fields.get("name").as_string().unwrap_or_default();
                let email = fields.get("email").as_string().unwrap_or_default();
                let message = fields.get("message").as_string().unwrap_or_default();
                if let Err(error) = validate_submission(&name, &email, &message) {
                    notify::show(NotifyKind::Error, error.message());
                    return;
                }

                if let Some(button) = button.as_ref() {
                    button.set_disabled(true);
                    button.set_text_content(Some(SUBMIT_PENDING_LABEL));
                }
                let form = form.clone();
                let button = button.clone();
                spawn_local(async move {
                    match post_submission(&fields).await {
                        Ok(true) => {
                            notify::show(NotifyKind::Success, SUCCESS_MESSAGE);
                            form.reset();
                        }
                        Ok(false) => {
                            console::warn!("contact form: endpoint rejected submission");
                            notify::show(NotifyKind::Error, FAILURE_MESSAGE);
                        }
                        Err(error) => {
                            console::warn!("contact form: submission failed", error);
                            notify::show(NotifyKind::Error, FAILURE_MESSAGE);
                        }
                    }
                    // The control comes back no matter how the call went.
                    if let Some(button) = button.as_ref() {
                        button.set_disabled(false);
                        button.set_text_content(Some(SUBMIT_LABEL));
                    }
                });
            },
        );
        Some(Self { _submit: listener })
    }
}

async fn post_submission(fields: &FormData) -> Result<bool, JsValue> {
    let headers = Headers::new()?;
    headers.append("Accept", "application/json")?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(fields.as_ref());
    init.set_headers(headers.as_ref());
    let promise = dom::window().fetch_with_str_and_init(CONTACT_ENDPOINT, &init);
    let response = JsFuture::from(promise).await?;
    let response: Response = response.dyn_into()?;
    Ok(response.ok())
}
