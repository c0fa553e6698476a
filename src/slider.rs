use gloo::events::EventListener;
use web_sys::Event;

use crate::dom;

pub(crate) struct SliderHints {
    _listeners: Vec<EventListener>,
}

impl SliderHints {
    /// GPU-friendly transform hints for the marquee track, plus pausing its
    /// animation while hovered. Returns None when the page has no slider.
    pub(crate) fn install() -> Option<Self> {
        let track = dom::query(".slider-track")?;
        dom::set_style(&track, "transform", "translate3d(0, 0, 0)");
        dom::set_style(&track, "will-change", "transform");

        let slider = dom::query(".thumbnail-slider")?;
        let mut listeners = Vec::new();
        {
            let track = track.clone();
            listeners.push(EventListener::new(
                &slider,
                "mouseenter",
                move |_event: &Event| {
                    dom::set_style(&track, "animation-play-state", "paused");
                },
            ));
        }
        {
            let track = track.clone();
            listeners.push(EventListener::new(
                &slider,
                "mouseleave",
                move |_event: &Event| {
                    dom::set_style(&track, "animation-play-state", "running");
                },
            ));
        }
        Some(Self {
            _listeners: listeners,
        })
    }
}
