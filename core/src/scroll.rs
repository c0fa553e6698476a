pub const REVEAL_VIEWPORT_FRAC: f64 = 0.8;

pub const NAVBAR_OPAQUE_PX: f64 = 50.0;
pub const NAVBAR_HIDE_PX: f64 = 100.0;

/// An element reveals once its top edge rises above 80% of the viewport
/// height. Revealing is one-way; callers never un-reveal.
pub fn reveal_triggered(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height * REVEAL_VIEWPORT_FRAC
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavbarPhase {
    pub opaque: bool,
    pub hidden: bool,
}

/// Direction-aware navbar state. Feed it each scroll offset in event order;
/// it compares against the previous one to decide hide/show.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavbarState {
    last_offset: f64,
}

impl NavbarState {
    pub fn new() -> Self {
        Self { last_offset: 0.0 }
    }

    pub fn observe(&mut self, offset: f64) -> NavbarPhase {
        let phase = NavbarPhase {
            opaque: offset > NAVBAR_OPAQUE_PX,
            hidden: offset > self.last_offset && offset > NAVBAR_HIDE_PX,
        };
        self.last_offset = offset;
        phase
    }
}
