//! Rotation delta extractor
//!
//! Frame-to-frame displacement of the secondary hand's smoothed palm.
//! The first frame after (re)acquisition reports zero so the object does
//! not spin from a stale reference.

use super::landmarks::Position;

pub struct RotationTracker {
    previous: Option<Position>,
}

impl RotationTracker {
    pub fn new() -> Self {
        Self { previous: None }
    }

    /// Delta against the last smoothed position, zero if there is none
    pub fn update(&mut self, current: Position) -> Position {
        let delta = match self.previous {
            Some(prev) => current - prev,
            None => Position::zeros(),
        };
        self.previous = Some(current);
        delta
    }

    /// Forget the reference (role acquired again, session reset)
    pub fn reset(&mut self) {
        self.previous = None;
    }
}

impl Default for RotationTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_delta_is_zero() {
        let mut r = RotationTracker::new();
        assert_eq!(r.update(Position::new(0.4, 0.6)), Position::zeros());
    }

    #[test]
    fn test_delta_is_difference() {
        let mut r = RotationTracker::new();
        r.update(Position::new(0.4, 0.6));
        let d = r.update(Position::new(0.45, 0.55));
        assert!((d - Position::new(0.05, -0.05)).norm() < 1e-6);
    }

    #[test]
    fn test_reset_suppresses_jump() {
        let mut r = RotationTracker::new();
        r.update(Position::new(0.1, 0.1));
        r.reset();
        assert_eq!(r.update(Position::new(0.9, 0.9)), Position::zeros());
    }
}
