//! Gesture recognition over raw pointer events
//!
//! The host forwards pointer down/move/up/cancel in widget-local coordinates;
//! this module classifies the stream into discrete gestures:
//! - tap:   single contact, released within the slop radius
//! - pan:   single contact, moved beyond the slop radius
//! - pinch: two contacts, reports cumulative scale and moving centroid
//!
//! Each recognizer walks possible -> began -> changed* -> ended | cancelled.
//! Tap reports only at ended; pan and pinch report at began and every
//! changed. The recognizers never fire simultaneously: a single arbiter
//! decides which one owns the current contact session.

pub mod arbiter;
pub mod pointer;
pub mod set;

pub use arbiter::ActiveGesture;
pub use set::GestureSet;

/// Phase of a continuous gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// A recognized gesture report, consumed by the widget
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Discrete: fires once, at release
    Tap { x: f32, y: f32 },
    /// Continuous drag, location is the contact position
    Pan { phase: GesturePhase, x: f32, y: f32 },
    /// Continuous two-contact scale; `scale` is cumulative within the
    /// gesture (1.0 at began), location is the contact centroid
    Pinch {
        phase: GesturePhase,
        scale: f32,
        x: f32,
        y: f32,
    },
}
