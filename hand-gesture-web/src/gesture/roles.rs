//! Hand role resolver
//!
//! Decides which detection drives position (primary) and which drives
//! pinch/rotation (secondary). Corrects for two detector failure modes:
//! - handedness labels mirrored by the selfie camera view
//! - one spread hand reported as two overlapping hands
//!
//! Known approximation: crossed hands or a lone hand swapping labels can still
//! be misassigned. The detector gives nothing better to go on.

use log::trace;

use super::landmarks::{FrameObservation, HandDetection, Handedness};
use super::palm::palm_center;

/// Control role a detected hand plays for one frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// User's left hand: moves the object
    Primary,
    /// User's right hand: pinch-zoom + rotation
    Secondary,
}

/// How a two-hand frame was resolved (for diagnostics)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    NoHands,
    SingleHand,
    /// Palms too close: one physical hand, secondary dropped
    SplitArtifact,
    /// Corrected labels disagree: used as-is
    ByLabel,
    /// Corrected labels agree (detector error): larger x is primary
    ByPosition,
}

/// Per-frame role assignment, borrowed from the observation
#[derive(Clone, Copy, Debug)]
pub struct RoleAssignment<'a> {
    pub primary: Option<&'a HandDetection>,
    pub secondary: Option<&'a HandDetection>,
    pub resolution: Resolution,
}

impl<'a> RoleAssignment<'a> {
    pub fn get(&self, role: Role) -> Option<&'a HandDetection> {
        match role {
            Role::Primary => self.primary,
            Role::Secondary => self.secondary,
        }
    }
}

/// Anatomical hand of the user, undoing the mirrored camera label
fn corrected_label(hand: &HandDetection) -> Handedness {
    hand.label().flipped()
}

/// Assign roles for one frame. Never fails; ambiguous cases fall through
/// to a deterministic heuristic.
pub fn resolve_roles(frame: &FrameObservation, min_separation: f32) -> RoleAssignment<'_> {
    match frame.hands() {
        [] => RoleAssignment {
            primary: None,
            secondary: None,
            resolution: Resolution::NoHands,
        },
        // A lone hand always positions; gesture role would risk false zooms
        [only] => RoleAssignment {
            primary: Some(only),
            secondary: None,
            resolution: Resolution::SingleHand,
        },
        [a, b, ..] => resolve_pair(a, b, min_separation),
    }
}

fn resolve_pair<'a>(a: &'a HandDetection, b: &'a HandDetection, min_separation: f32) -> RoleAssignment<'a> {
    let center_a = palm_center(a);
    let center_b = palm_center(b);
    let separation = (center_a - center_b).norm();

    if separation < min_separation {
        // Keep whichever half claims to be the user's left, else the first
        let keep = if corrected_label(b) == Handedness::Left && corrected_label(a) != Handedness::Left {
            b
        } else {
            a
        };
        trace!("split artifact: palms {:.3} apart, secondary dropped", separation);
        return RoleAssignment {
            primary: Some(keep),
            secondary: None,
            resolution: Resolution::SplitArtifact,
        };
    }

    let (label_a, label_b) = (corrected_label(a), corrected_label(b));
    if label_a != label_b {
        let (primary, secondary) = if label_a == Handedness::Left { (a, b) } else { (b, a) };
        return RoleAssignment {
            primary: Some(primary),
            secondary: Some(secondary),
            resolution: Resolution::ByLabel,
        };
    }

    // Both claim the same hand. In the mirrored view the user's left hand
    // shows up with the larger x.
    trace!("both hands labelled {}, falling back to x order", label_a.name());
    let (primary, secondary) = if center_a.x >= center_b.x { (a, b) } else { (b, a) };
    RoleAssignment {
        primary: Some(primary),
        secondary: Some(secondary),
        resolution: Resolution::ByPosition,
    }
}
