//! Gesture arbitration - one recognizer owns the contact session
//!
//! The "no simultaneous recognition" rule is a single cross-cutting policy,
//! kept in one place instead of scattered through the recognizers:
//! - while a contact is still within slop, the session is merely Possible
//!   (a tap candidate);
//! - a second contact always converts the session to a pinch, cancelling an
//!   active pan and failing a pending tap;
//! - movement beyond slop converts a Possible session to a pan;
//! - once a pan or pinch has owned any part of the session, a tap can no
//!   longer fire until all contacts lift.

/// Which recognizer currently owns the contact session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveGesture {
    /// No contacts down
    None,
    /// Single contact within slop: tap still possible
    Possible,
    Pan,
    Pinch,
}

impl ActiveGesture {
    /// Whether a pan may begin from this state (movement beyond slop)
    pub fn allows_pan_start(self) -> bool {
        self == ActiveGesture::Possible
    }

    /// Whether a second contact may promote this state to a pinch
    pub fn allows_pinch_start(self) -> bool {
        matches!(self, ActiveGesture::Possible | ActiveGesture::Pan)
    }

    /// Whether releasing the contact may still complete as a tap
    pub fn allows_tap(self) -> bool {
        self == ActiveGesture::Possible
    }
}
