//! Gesture module - hand landmarks to stable control signals
//!
//! Re-exports only. All logic in submodules.

mod config;
mod engine;
mod error;
mod landmarks;
mod palm;
mod pinch;
mod presence;
mod roles;
mod rotation;
mod smoothing;

#[cfg(test)]
mod test_support;

pub use config::TrackerConfig;
pub use engine::{EngineSnapshot, GestureEvent, HandGestureEngine, RoleSnapshot, SecondaryUpdate};
pub use error::{ConfigError, FrameError};
pub use landmarks::{
    FrameObservation, HandDetection, Handedness, Keypoint, Position, KEYPOINT_COUNT, MAX_HANDS,
};
pub use palm::{palm_center, pinch_distance, strict_pinch_pose};
pub use pinch::{PinchPhase, PinchState, PinchTransition, ReleaseReason};
pub use presence::Presence;
pub use roles::{resolve_roles, Resolution, Role, RoleAssignment};
pub use smoothing::SmoothingWindow;
