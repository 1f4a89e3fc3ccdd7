//! Angle and distance between the first two contacts of a touch set.

use thiserror::Error;

use crate::model::TouchContact;

/// Raised when a two-point computation is attempted with fewer than two
/// contacts. The state machine gates every call behind a multi-touch check,
/// so seeing this error means a core invariant was broken.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("geometry over a touch pair needs at least 2 contacts, got {got}")]
pub struct InsufficientContactsError {
    pub got: usize,
}

fn touch_pair(touches: &[TouchContact]) -> Result<(TouchContact, TouchContact), InsufficientContactsError> {
    match touches {
        [a, b, ..] => Ok((*a, *b)),
        _ => Err(InsufficientContactsError { got: touches.len() }),
    }
}

/// Angle in degrees of the line through the first two contacts, atan2
/// convention over page coordinates. Repeated calls on a rotating pair give a
/// continuous signal modulo the ±180° wraparound.
pub fn angle(touches: &[TouchContact]) -> Result<f64, InsufficientContactsError> {
    let (a, b) = touch_pair(touches)?;
    Ok((b.y - a.y).atan2(b.x - a.x).to_degrees())
}

/// Euclidean distance between the first two contacts.
pub fn distance(touches: &[TouchContact]) -> Result<f64, InsufficientContactsError> {
    let (a, b) = touch_pair(touches)?;
    Ok(((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(x: f64, y: f64) -> TouchContact {
        TouchContact::new(x, y)
    }

    #[test]
    fn angle_of_horizontal_pair_is_zero() {
        let touches = [t(10.0, 50.0), t(110.0, 50.0)];
        assert_eq!(angle(&touches).unwrap(), 0.0);
    }

    #[test]
    fn angle_follows_atan2_convention() {
        // Second contact straight below the first: +90° with y growing down.
        let touches = [t(0.0, 0.0), t(0.0, 30.0)];
        assert!((angle(&touches).unwrap() - 90.0).abs() < 1e-9);

        let touches = [t(0.0, 0.0), t(-40.0, 0.0)];
        assert!((angle(&touches).unwrap().abs() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn angle_is_continuous_under_small_rotation() {
        let base = angle(&[t(0.0, 0.0), t(100.0, 0.0)]).unwrap();
        let rotated = angle(&[t(0.0, 0.0), t(100.0, 5.0)]).unwrap();
        assert!(rotated > base);
        assert!(rotated - base < 5.0);
    }

    #[test]
    fn distance_is_euclidean() {
        let touches = [t(0.0, 0.0), t(3.0, 4.0)];
        assert_eq!(distance(&touches).unwrap(), 5.0);
    }

    #[test]
    fn extra_contacts_are_ignored() {
        let touches = [t(0.0, 0.0), t(3.0, 4.0), t(999.0, 999.0)];
        assert_eq!(distance(&touches).unwrap(), 5.0);
    }

    #[test]
    fn fewer_than_two_contacts_is_an_error() {
        assert_eq!(angle(&[]).unwrap_err().got, 0);
        assert_eq!(distance(&[t(1.0, 2.0)]).unwrap_err().got, 1);
    }
}
