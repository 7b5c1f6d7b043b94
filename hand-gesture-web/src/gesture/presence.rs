//! Presence debouncer
//!
//! Losing a hand is debounced, acquiring one is not: detector false negatives
//! (a hand blinking out for a frame or two) are far more common than false
//! positives.

use serde::Serialize;

/// Debounced liveness of one role
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Presence {
    Absent,
    Live,
}

/// What happened to a role this frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresenceChange {
    /// Absent -> live (smoothing must restart)
    Acquired,
    /// Seen again while live
    Seen,
    /// Not seen, still inside the grace period
    Missing,
    /// Not seen for too long: live -> absent
    Lost,
    /// Not seen and already absent
    StillAbsent,
}

/// Consecutive-miss counter with hysteresis for one role
pub struct PresenceDebouncer {
    state: Presence,
    missed_frames: u32,
    /// Role drops after MORE than this many consecutive misses
    max_missed: u32,
}

impl PresenceDebouncer {
    pub fn new(max_missed: u32) -> Self {
        Self {
            state: Presence::Absent,
            missed_frames: 0,
            max_missed,
        }
    }

    /// Feed one frame: was the role assigned a detection?
    pub fn update(&mut self, seen: bool) -> PresenceChange {
        if seen {
            self.missed_frames = 0;
            return match self.state {
                Presence::Absent => {
                    self.state = Presence::Live;
                    PresenceChange::Acquired
                }
                Presence::Live => PresenceChange::Seen,
            };
        }

        match self.state {
            Presence::Absent => PresenceChange::StillAbsent,
            Presence::Live => {
                self.missed_frames += 1;
                if self.missed_frames > self.max_missed {
                    self.state = Presence::Absent;
                    self.missed_frames = 0;
                    PresenceChange::Lost
                } else {
                    PresenceChange::Missing
                }
            }
        }
    }

    pub fn state(&self) -> Presence {
        self.state
    }

    pub fn is_live(&self) -> bool {
        self.state == Presence::Live
    }

    pub fn missed_frames(&self) -> u32 {
        self.missed_frames
    }

    pub fn reset(&mut self) {
        self.state = Presence::Absent;
        self.missed_frames = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_is_immediate() {
        let mut p = PresenceDebouncer::new(5);
        assert_eq!(p.update(true), PresenceChange::Acquired);
        assert!(p.is_live());
        assert_eq!(p.update(true), PresenceChange::Seen);
    }

    #[test]
    fn test_short_gap_never_reports_absent() {
        for gap in 1..=5 {
            let mut p = PresenceDebouncer::new(5);
            p.update(true);
            for _ in 0..gap {
                assert_eq!(p.update(false), PresenceChange::Missing);
                assert!(p.is_live());
            }
            assert_eq!(p.update(true), PresenceChange::Seen);
            assert_eq!(p.missed_frames(), 0);
        }
    }

    #[test]
    fn test_long_gap_reports_lost_once() {
        let mut p = PresenceDebouncer::new(5);
        p.update(true);
        let changes: Vec<_> = (0..12).map(|_| p.update(false)).collect();

        let lost = changes.iter().filter(|c| **c == PresenceChange::Lost).count();
        assert_eq!(lost, 1);
        assert_eq!(changes[5], PresenceChange::Lost);
        assert!(changes[6..].iter().all(|c| *c == PresenceChange::StillAbsent));
        assert_eq!(p.state(), Presence::Absent);
    }

    #[test]
    fn test_reacquire_after_loss() {
        let mut p = PresenceDebouncer::new(1);
        p.update(true);
        p.update(false);
        assert_eq!(p.update(false), PresenceChange::Lost);
        assert_eq!(p.update(true), PresenceChange::Acquired);
    }

    #[test]
    fn test_starts_absent() {
        let mut p = PresenceDebouncer::new(5);
        assert_eq!(p.state(), Presence::Absent);
        assert_eq!(p.update(false), PresenceChange::StillAbsent);
    }
}
