//! Per-gesture state: the baseline snapshot taken when the first contact
//! lands, plus the flags and fragments accumulated while the gesture runs.

use crate::compose::{DragFragment, PinchFragment};
use crate::model::{TouchContact, Transform};

/// Lives exactly as long as one gesture: allocated at the first contact,
/// dropped when the last contact lifts. Exactly one is live at a time.
#[derive(Clone, Debug)]
pub struct GestureSession {
    /// Contact set the deltas are measured against. Replaced wholesale when
    /// the contact count changes mid-gesture (re-baseline).
    pub initial_touches: Vec<TouchContact>,
    /// Transform at gesture start; drag coordinates are computed from this,
    /// not from the per-frame transform.
    pub initial_transform: Transform,
    /// Angle offset consumed so far, for incremental rotation.
    pub prev_angle: f64,
    /// Distance increase consumed so far, for incremental scaling.
    pub prev_distance: f64,

    pub multi_touching: bool,
    pub rotating: bool,
    pub scaling: bool,
    pub out_of_bounds: bool,

    /// Fragments from the last frame that computed them; they persist across
    /// re-baseline frames so the composed transform stays put.
    pub drag: Option<DragFragment>,
    pub pinch: Option<PinchFragment>,
}

impl GestureSession {
    pub fn begin(initial_touches: Vec<TouchContact>, initial_transform: Transform) -> Self {
        Self {
            initial_touches,
            initial_transform,
            prev_angle: 0.0,
            prev_distance: 0.0,
            multi_touching: false,
            rotating: false,
            scaling: false,
            out_of_bounds: false,
            drag: None,
            pinch: None,
        }
    }

    /// Adopts a new contact set without computing deltas, so a finger joining
    /// or leaving mid-gesture never produces a jump. The pinch accumulators
    /// restart from the new set; the initial transform is kept, since drag
    /// deltas are cumulative from gesture start.
    pub fn rebaseline(&mut self, touches: Vec<TouchContact>) {
        self.initial_touches = touches;
        self.prev_angle = 0.0;
        self.prev_distance = 0.0;
    }

    pub fn touch_count(&self) -> usize {
        self.initial_touches.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_takes_a_clean_snapshot() {
        let transform = Transform { left: 5.0, ..Default::default() };
        let session = GestureSession::begin(vec![TouchContact::new(1.0, 2.0)], transform);
        assert_eq!(session.touch_count(), 1);
        assert_eq!(session.initial_transform, transform);
        assert_eq!(session.prev_angle, 0.0);
        assert!(!session.multi_touching && !session.rotating && !session.scaling);
        assert!(session.drag.is_none() && session.pinch.is_none());
    }

    #[test]
    fn rebaseline_swaps_touches_and_resets_accumulators() {
        let mut session =
            GestureSession::begin(vec![TouchContact::new(0.0, 0.0)], Transform::default());
        session.prev_angle = 33.0;
        session.prev_distance = 120.0;
        session.rotating = true;

        session.rebaseline(vec![TouchContact::new(0.0, 0.0), TouchContact::new(10.0, 0.0)]);

        assert_eq!(session.touch_count(), 2);
        assert_eq!(session.prev_angle, 0.0);
        assert_eq!(session.prev_distance, 0.0);
        // Gesture-lifetime flags survive a re-baseline.
        assert!(session.rotating);
    }
}
