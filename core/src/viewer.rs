pub const SCALE_MIN: f64 = 1.0;
pub const SCALE_MAX: f64 = 4.0;
pub const CLICK_ZOOM_SCALE: f64 = 2.0;

pub const WHEEL_ZOOM_IN: f64 = 1.1;
pub const WHEEL_ZOOM_OUT: f64 = 0.9;

pub const DRAG_SLOP_PX: f64 = 4.0;

pub fn pinch_distance(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = bx - ax;
    let dy = by - ay;
    (dx * dx + dy * dy).sqrt()
}

#[derive(Clone, Copy, Debug)]
struct PinchStart {
    baseline_distance: f64,
    scale_at_start: f64,
}

#[derive(Clone, Copy, Debug)]
struct DragAnchor {
    start_x: f64,
    start_y: f64,
}

/// Zoom/pan state of one open viewer image. Lives from modal open to modal
/// close; opening another image replaces it wholesale.
#[derive(Clone, Copy, Debug)]
pub struct ViewerSession {
    scale: f64,
    translate: (f64, f64),
    pinch: Option<PinchStart>,
    drag: Option<DragAnchor>,
}

impl ViewerSession {
    pub fn new() -> Self {
        Self {
            scale: SCALE_MIN,
            translate: (0.0, 0.0),
            pinch: None,
            drag: None,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn translate(&self) -> (f64, f64) {
        self.translate
    }

    pub fn is_zoomed(&self) -> bool {
        self.scale > SCALE_MIN
    }

    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    // Single mutation path for scale: clamps, and clears pan state whenever
    // the session leaves the zoomed range, no matter which gesture got it
    // there.
    fn set_scale(&mut self, value: f64) {
        self.scale = value.clamp(SCALE_MIN, SCALE_MAX);
        if !self.is_zoomed() {
            self.translate = (0.0, 0.0);
            self.drag = None;
        }
    }

    pub fn toggle_click_zoom(&mut self) {
        if self.is_zoomed() {
            self.set_scale(SCALE_MIN);
        } else {
            self.set_scale(CLICK_ZOOM_SCALE);
        }
    }

    pub fn wheel_zoom(&mut self, delta_y: f64) {
        let factor = if delta_y > 0.0 {
            WHEEL_ZOOM_OUT
        } else {
            WHEEL_ZOOM_IN
        };
        self.set_scale(self.scale * factor);
    }

    pub fn begin_pinch(&mut self, distance: f64) {
        if distance > 0.0 {
            self.pinch = Some(PinchStart {
                baseline_distance: distance,
                scale_at_start: self.scale,
            });
        }
    }

    pub fn pinch_active(&self) -> bool {
        self.pinch.is_some()
    }

    /// Applies a pinch update relative to the gesture baseline. Returns false
    /// when no pinch is active or the distance is degenerate.
    pub fn pinch_to(&mut self, distance: f64) -> bool {
        let Some(pinch) = self.pinch else {
            return false;
        };
        if distance <= 0.0 {
            return false;
        }
        self.set_scale((distance / pinch.baseline_distance) * pinch.scale_at_start);
        true
    }

    pub fn end_pinch(&mut self) {
        self.pinch = None;
    }

    pub fn begin_drag(&mut self, x: f64, y: f64) {
        if !self.is_zoomed() {
            return;
        }
        self.drag = Some(DragAnchor {
            start_x: x - self.translate.0,
            start_y: y - self.translate.1,
        });
    }

    pub fn drag_to(&mut self, x: f64, y: f64) -> bool {
        let Some(anchor) = self.drag else {
            return false;
        };
        self.translate = (x - anchor.start_x, y - anchor.start_y);
        true
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// CSS transform for the modal image. Scale is applied before translate,
    /// so pan distances are expressed in the scaled coordinate space.
    pub fn transform(&self) -> String {
        format!(
            "scale({}) translate({}px, {}px)",
            self.scale, self.translate.0, self.translate.1
        )
    }
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Press-to-release movement gate. A release counts as a click only if the
/// pointer never left the slop radius around the press point.
#[derive(Clone, Copy, Debug)]
pub struct DragGate {
    start: (f64, f64),
    moved: bool,
}

impl DragGate {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            start: (x, y),
            moved: false,
        }
    }

    pub fn update(&mut self, x: f64, y: f64) -> bool {
        if self.moved {
            return true;
        }
        let dx = x - self.start.0;
        let dy = y - self.start.1;
        if dx * dx + dy * dy > DRAG_SLOP_PX * DRAG_SLOP_PX {
            self.moved = true;
        }
        self.moved
    }

    pub fn moved(&self) -> bool {
        self.moved
    }
}
