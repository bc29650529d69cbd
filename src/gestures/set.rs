//! The recognizer set: pointer events in, gesture events out

use super::arbiter::ActiveGesture;
use super::pointer::PointerTracker;
use super::{GestureEvent, GesturePhase};

pub const DEFAULT_TAP_SLOP: f32 = 8.0;

/// Tap + pan + pinch recognizers over one shared pointer tracker
///
/// Single-threaded by construction: every method runs to completion within
/// one host event-loop turn, and all returned events refer to the state at
/// that instant.
pub struct GestureSet {
    tracker: PointerTracker,
    active: ActiveGesture,
    /// Set once pan or pinch has owned the session; cleared when all
    /// contacts lift. Keeps a trailing finger release from reading as a tap.
    tap_disabled: bool,
    tap_slop: f32,
    /// Contact spread the pinch scale is measured against. None while the
    /// contacts are coincident; set from the first nonzero spread so the
    /// scale always starts at 1.0 instead of reading absolute pixels.
    pinch_baseline: Option<f32>,
}

impl GestureSet {
    pub fn new(tap_slop: f32) -> Self {
        Self {
            tracker: PointerTracker::new(),
            active: ActiveGesture::None,
            tap_disabled: false,
            tap_slop,
            pinch_baseline: None,
        }
    }

    pub fn active(&self) -> ActiveGesture {
        self.active
    }

    pub fn pointer_down(&mut self, id: u32, x: f32, y: f32) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        if !self.tracker.add(id, x, y) {
            return events;
        }

        match self.tracker.count() {
            1 => {
                self.active = ActiveGesture::Possible;
                self.tap_disabled = false;
            }
            2 if self.active.allows_pinch_start() => {
                if self.active == ActiveGesture::Pan {
                    // The pan contact is the one that was already tracked.
                    if let Some(p) = self.tracker.first() {
                        events.push(GestureEvent::Pan {
                            phase: GesturePhase::Cancelled,
                            x: p.x,
                            y: p.y,
                        });
                    }
                }
                self.active = ActiveGesture::Pinch;
                self.tap_disabled = true;
                let spread = self.tracker.spread();
                self.pinch_baseline = (spread > f32::EPSILON).then_some(spread);
                let (cx, cy) = self.tracker.centroid();
                events.push(GestureEvent::Pinch {
                    phase: GesturePhase::Began,
                    scale: 1.0,
                    x: cx,
                    y: cy,
                });
            }
            _ => {}
        }
        events
    }

    pub fn pointer_move(&mut self, id: u32, x: f32, y: f32) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        if !self.tracker.update(id, x, y) {
            return events;
        }

        match self.active {
            ActiveGesture::Possible => {
                let beyond_slop = self
                    .tracker
                    .find(id)
                    .map(|p| p.travel() > self.tap_slop)
                    .unwrap_or(false);
                if beyond_slop && self.active.allows_pan_start() {
                    self.active = ActiveGesture::Pan;
                    self.tap_disabled = true;
                    events.push(GestureEvent::Pan {
                        phase: GesturePhase::Began,
                        x,
                        y,
                    });
                }
            }
            ActiveGesture::Pan => {
                events.push(GestureEvent::Pan {
                    phase: GesturePhase::Changed,
                    x,
                    y,
                });
            }
            ActiveGesture::Pinch => {
                let scale = self.pinch_scale();
                let (cx, cy) = self.tracker.centroid();
                events.push(GestureEvent::Pinch {
                    phase: GesturePhase::Changed,
                    scale,
                    x: cx,
                    y: cy,
                });
            }
            ActiveGesture::None => {}
        }
        events
    }

    pub fn pointer_up(&mut self, id: u32, x: f32, y: f32) -> Vec<GestureEvent> {
        self.finish_pointer(id, x, y, GesturePhase::Ended)
    }

    /// Host-side cancellation (pointercancel, focus loss). Same teardown as
    /// a release, but a pending tap never fires.
    pub fn pointer_cancel(&mut self, id: u32, x: f32, y: f32) -> Vec<GestureEvent> {
        self.finish_pointer(id, x, y, GesturePhase::Cancelled)
    }

    /// Drop all contacts and gesture state (host lost pointer capture)
    pub fn reset(&mut self) {
        self.tracker.clear();
        self.active = ActiveGesture::None;
        self.tap_disabled = false;
        self.pinch_baseline = None;
    }

    /// Current pinch scale relative to the baseline spread. Contacts that
    /// went down coincident have no baseline yet; the first nonzero spread
    /// becomes it, and that sample reads as 1.0.
    fn pinch_scale(&mut self) -> f32 {
        let spread = self.tracker.spread();
        match self.pinch_baseline {
            Some(baseline) => spread / baseline,
            None => {
                if spread > f32::EPSILON {
                    self.pinch_baseline = Some(spread);
                }
                1.0
            }
        }
    }

    fn finish_pointer(&mut self, id: u32, x: f32, y: f32, phase: GesturePhase) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        self.tracker.update(id, x, y);

        // Pinch state must be sampled before the contact is dropped.
        let pinch_scale = self.pinch_scale();
        let (pcx, pcy) = self.tracker.centroid();

        if self.tracker.remove(id).is_none() {
            return events;
        }

        match self.active {
            ActiveGesture::Possible => {
                if phase == GesturePhase::Ended && self.active.allows_tap() && !self.tap_disabled {
                    events.push(GestureEvent::Tap { x, y });
                }
                self.active = ActiveGesture::None;
            }
            ActiveGesture::Pan => {
                events.push(GestureEvent::Pan { phase, x, y });
                self.active = ActiveGesture::None;
            }
            ActiveGesture::Pinch => {
                events.push(GestureEvent::Pinch {
                    phase,
                    scale: pinch_scale,
                    x: pcx,
                    y: pcy,
                });
                // One contact remains: it may start a fresh pan, but the
                // session can no longer complete as a tap (tap_disabled).
                self.active = ActiveGesture::Possible;
                self.pinch_baseline = None;
                self.tracker.rebase_starts();
            }
            ActiveGesture::None => {}
        }

        if self.tracker.count() == 0 {
            self.active = ActiveGesture::None;
            self.tap_disabled = false;
            self.pinch_baseline = None;
        }
        events
    }
}

impl Default for GestureSet {
    fn default() -> Self {
        Self::new(DEFAULT_TAP_SLOP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_up_within_slop_is_a_tap_at_release() {
        let mut set = GestureSet::default();
        assert!(set.pointer_down(1, 10.0, 10.0).is_empty());
        let events = set.pointer_move(1, 12.0, 11.0);
        assert!(events.is_empty());
        let events = set.pointer_up(1, 12.0, 11.0);
        assert_eq!(events, vec![GestureEvent::Tap { x: 12.0, y: 11.0 }]);
        assert_eq!(set.active(), ActiveGesture::None);
    }

    #[test]
    fn cancelled_contact_never_taps() {
        let mut set = GestureSet::default();
        set.pointer_down(1, 10.0, 10.0);
        let events = set.pointer_cancel(1, 10.0, 10.0);
        assert!(events.is_empty());
    }

    #[test]
    fn movement_beyond_slop_begins_a_pan_and_kills_the_tap() {
        let mut set = GestureSet::default();
        set.pointer_down(1, 0.0, 0.0);
        let events = set.pointer_move(1, 20.0, 0.0);
        assert_eq!(
            events,
            vec![GestureEvent::Pan {
                phase: GesturePhase::Began,
                x: 20.0,
                y: 0.0
            }]
        );
        let events = set.pointer_move(1, 25.0, 5.0);
        assert_eq!(
            events,
            vec![GestureEvent::Pan {
                phase: GesturePhase::Changed,
                x: 25.0,
                y: 5.0
            }]
        );
        let events = set.pointer_up(1, 25.0, 5.0);
        assert_eq!(
            events,
            vec![GestureEvent::Pan {
                phase: GesturePhase::Ended,
                x: 25.0,
                y: 5.0
            }]
        );
    }

    #[test]
    fn second_contact_promotes_to_pinch_and_cancels_pan() {
        let mut set = GestureSet::default();
        set.pointer_down(1, 0.0, 0.0);
        set.pointer_move(1, 30.0, 0.0); // pan began
        assert_eq!(set.active(), ActiveGesture::Pan);

        let events = set.pointer_down(2, 130.0, 0.0);
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            GestureEvent::Pan {
                phase: GesturePhase::Cancelled,
                ..
            }
        ));
        assert_eq!(
            events[1],
            GestureEvent::Pinch {
                phase: GesturePhase::Began,
                scale: 1.0,
                x: 80.0,
                y: 0.0
            }
        );
        assert_eq!(set.active(), ActiveGesture::Pinch);
    }

    #[test]
    fn pinch_scale_tracks_contact_spread() {
        let mut set = GestureSet::default();
        set.pointer_down(1, 0.0, 0.0);
        set.pointer_down(2, 100.0, 0.0);
        let events = set.pointer_move(2, 200.0, 0.0);
        assert_eq!(
            events,
            vec![GestureEvent::Pinch {
                phase: GesturePhase::Changed,
                scale: 2.0,
                x: 100.0,
                y: 0.0
            }]
        );
    }

    #[test]
    fn releasing_one_pinch_contact_ends_the_pinch_without_a_tap() {
        let mut set = GestureSet::default();
        set.pointer_down(1, 0.0, 0.0);
        set.pointer_down(2, 100.0, 0.0);
        let events = set.pointer_up(2, 100.0, 0.0);
        assert!(matches!(
            events[0],
            GestureEvent::Pinch {
                phase: GesturePhase::Ended,
                ..
            }
        ));
        // Remaining contact lifts in place: no tap, session is over.
        let events = set.pointer_up(1, 0.0, 0.0);
        assert!(events.is_empty());
        assert_eq!(set.active(), ActiveGesture::None);
    }

    #[test]
    fn remaining_contact_after_pinch_can_start_a_new_pan() {
        let mut set = GestureSet::default();
        set.pointer_down(1, 0.0, 0.0);
        set.pointer_down(2, 100.0, 0.0);
        set.pointer_up(2, 100.0, 0.0);

        // Travel is rebased at pinch end, so a fresh drag must re-earn slop.
        let events = set.pointer_move(1, 3.0, 0.0);
        assert!(events.is_empty());
        let events = set.pointer_move(1, 30.0, 0.0);
        assert_eq!(
            events,
            vec![GestureEvent::Pan {
                phase: GesturePhase::Began,
                x: 30.0,
                y: 0.0
            }]
        );
    }

    #[test]
    fn coincident_contacts_rebase_the_pinch_on_first_separation() {
        let mut set = GestureSet::default();
        set.pointer_down(1, 50.0, 50.0);
        let events = set.pointer_down(2, 50.0, 50.0);
        assert_eq!(
            events,
            vec![GestureEvent::Pinch {
                phase: GesturePhase::Began,
                scale: 1.0,
                x: 50.0,
                y: 50.0
            }]
        );

        // First nonzero spread is the baseline, not an absolute scale.
        let events = set.pointer_move(2, 150.0, 50.0);
        assert_eq!(
            events,
            vec![GestureEvent::Pinch {
                phase: GesturePhase::Changed,
                scale: 1.0,
                x: 100.0,
                y: 50.0
            }]
        );

        // Doubling that spread reads as 2x.
        let events = set.pointer_move(2, 250.0, 50.0);
        assert_eq!(
            events,
            vec![GestureEvent::Pinch {
                phase: GesturePhase::Changed,
                scale: 2.0,
                x: 150.0,
                y: 50.0
            }]
        );
    }

    #[test]
    fn third_contact_is_ignored_by_all_recognizers() {
        let mut set = GestureSet::default();
        set.pointer_down(1, 0.0, 0.0);
        set.pointer_down(2, 100.0, 0.0);
        assert!(set.pointer_down(3, 50.0, 50.0).is_empty());
        assert!(set.pointer_move(3, 60.0, 60.0).is_empty());
        assert!(set.pointer_up(3, 60.0, 60.0).is_empty());
        assert_eq!(set.active(), ActiveGesture::Pinch);
    }
}
