pub mod form;
pub mod scroll;
pub mod viewer;

pub use form::{is_valid_email, validate_submission, ValidationError};
pub use scroll::{reveal_triggered, NavbarPhase, NavbarState};
pub use viewer::{pinch_distance, DragGate, ViewerSession};
