//! Pinch-zoom state machine
//!
//! Idle <-> Engaged with a hysteresis band (engage < release), a finger-curl
//! gate, and a clutch: opening the pinch fast releases it right away instead
//! of waiting for the distance to cross the release threshold.

use log::debug;
use serde::Serialize;

use super::config::TrackerConfig;

/// Zoom references below this are treated as degenerate (scale stays 1.0)
const MIN_ZOOM_REFERENCE: f32 = 1e-4;

/// Pinch machine state
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum PinchState {
    Idle,
    /// Holds the smoothed distance at the engage frame
    #[serde(rename_all = "camelCase")]
    Engaged { start_distance: f32 },
}

/// Coarse phase reported to the scene controller
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PinchPhase {
    Idle,
    Engaged,
}

/// Why an engaged pinch let go
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ReleaseReason {
    /// Distance rose past the release threshold
    Release,
    /// Fingers opened faster than the clutch velocity
    Clutch,
    /// Middle/ring/pinky uncurled
    GateOpened,
}

/// Edge emitted on the frame the state changes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PinchTransition {
    Engaged,
    Released(ReleaseReason),
}

/// One frame of pinch input, already smoothed
#[derive(Clone, Copy, Debug)]
pub struct PinchInput {
    /// Smoothed thumb-index distance
    pub distance: f32,
    /// Smoothed distance minus last frame's (positive = opening)
    pub velocity: f32,
    /// Strict pinch pose held (middle, ring, pinky curled)
    pub gate: bool,
}

/// Output of one machine step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchOutput {
    pub phase: PinchPhase,
    /// current / start distance while engaged, 1.0 (no change) while idle
    pub scale_factor: f32,
    pub transition: Option<PinchTransition>,
}

pub struct PinchZoom {
    state: PinchState,
    engage_below: f32,
    release_above: f32,
    clutch_velocity: f32,
}

impl PinchZoom {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            state: PinchState::Idle,
            engage_below: config.pinch_engage,
            release_above: config.pinch_release,
            clutch_velocity: config.clutch_velocity,
        }
    }

    /// Run one transition step and report the resulting scale
    pub fn update(&mut self, input: PinchInput) -> PinchOutput {
        let transition = match self.state {
            PinchState::Idle => {
                if input.gate && input.distance < self.engage_below {
                    self.state = PinchState::Engaged {
                        start_distance: input.distance,
                    };
                    debug!("pinch engaged at {:.4}", input.distance);
                    Some(PinchTransition::Engaged)
                } else {
                    None
                }
            }
            PinchState::Engaged { .. } => match self.release_reason(input) {
                Some(reason) => {
                    self.state = PinchState::Idle;
                    debug!("pinch released ({:?}) at {:.4}", reason, input.distance);
                    Some(PinchTransition::Released(reason))
                }
                None => None,
            },
        };

        PinchOutput {
            phase: self.phase(),
            scale_factor: self.scale_factor(input.distance),
            transition,
        }
    }

    fn release_reason(&self, input: PinchInput) -> Option<ReleaseReason> {
        if input.distance > self.release_above {
            Some(ReleaseReason::Release)
        } else if input.velocity > self.clutch_velocity {
            Some(ReleaseReason::Clutch)
        } else if !input.gate {
            Some(ReleaseReason::GateOpened)
        } else {
            None
        }
    }

    /// Zoom factor relative to the engage frame
    pub fn scale_factor(&self, distance: f32) -> f32 {
        match self.state {
            PinchState::Engaged { start_distance } if start_distance > MIN_ZOOM_REFERENCE => {
                distance / start_distance
            }
            _ => 1.0,
        }
    }

    pub fn state(&self) -> PinchState {
        self.state
    }

    pub fn phase(&self) -> PinchPhase {
        match self.state {
            PinchState::Idle => PinchPhase::Idle,
            PinchState::Engaged { .. } => PinchPhase::Engaged,
        }
    }

    /// Force Idle without reporting a transition (role lost, session reset)
    pub fn reset(&mut self) {
        self.state = PinchState::Idle;
    }
}
