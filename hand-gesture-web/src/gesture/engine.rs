//! Hand gesture engine - one call per processed video frame
//!
//! Pipeline per frame:
//! 1. Role resolver picks primary/secondary detections
//! 2. Presence debouncer updates liveness per role
//! 3. Palm center -> smoothing window per role
//! 4. Secondary hand: pinch distance window -> pinch machine, rotation delta
//! 5. Live roles missed this frame repeat their held signals
//! 6. Hands-lost edge when the last live role drops
//!
//! All state is owned here and mutated in place; callers must not re-enter.

use log::debug;
use serde::Serialize;

use super::config::TrackerConfig;
use super::error::ConfigError;
use super::landmarks::{FrameObservation, HandDetection, Position};
use super::palm::{palm_center, pinch_distance, strict_pinch_pose};
use super::pinch::{PinchInput, PinchPhase, PinchState, PinchTransition, PinchZoom};
use super::presence::{Presence, PresenceChange, PresenceDebouncer};
use super::roles::{resolve_roles, Resolution, Role};
use super::rotation::RotationTracker;
use super::smoothing::SmoothingWindow;

// ============================================================================
// EVENTS
// ============================================================================

/// Secondary hand control signals for one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondaryUpdate {
    pub position: Position,
    pub pinch: PinchPhase,
    pub scale_factor: f32,
    pub rotation_delta: Position,
    pub transition: Option<PinchTransition>,
}

/// Events handed to the scene controller
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GestureEvent {
    PrimaryHandUpdate { position: Position },
    SecondaryHandUpdate(SecondaryUpdate),
    /// Fired once when both roles have gone absent
    HandsLost,
}

// ============================================================================
// DIAGNOSTICS
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSnapshot {
    pub presence: Presence,
    pub missed_frames: u32,
    pub position: Option<Position>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSnapshot {
    pub frames_processed: u64,
    pub primary: RoleSnapshot,
    pub secondary: RoleSnapshot,
    pub pinch: PinchState,
    /// Two-hand frames collapsed into one hand
    pub split_artifacts: u64,
    /// Two-hand frames resolved by x order because labels agreed
    pub label_fallbacks: u64,
}

// ============================================================================
// PER-ROLE STATE
// ============================================================================

/// Liveness + smoothed palm position for one role
struct RoleTrack {
    role: Role,
    presence: PresenceDebouncer,
    window: SmoothingWindow<Position>,
    /// Last smoothed position, kept through debounced misses
    position: Option<Position>,
}

impl RoleTrack {
    fn new(role: Role, config: &TrackerConfig) -> Self {
        Self {
            role,
            presence: PresenceDebouncer::new(config.presence_debounce_frames),
            window: SmoothingWindow::new(config.position_window),
            position: None,
        }
    }

    /// Update liveness and push the palm center if the role was seen
    fn observe(&mut self, hand: Option<&HandDetection>) -> PresenceChange {
        let change = self.presence.update(hand.is_some());
        match change {
            PresenceChange::Acquired => {
                // Never blend a stale position into a fresh acquisition
                self.window.reset();
                debug!("{:?} hand acquired", self.role);
            }
            PresenceChange::Lost => {
                self.window.reset();
                self.position = None;
                debug!("{:?} hand lost", self.role);
            }
            _ => {}
        }

        if let Some(hand) = hand {
            self.position = Some(self.window.push(palm_center(hand)));
        }
        change
    }

    fn is_live(&self) -> bool {
        self.presence.is_live()
    }

    /// Smoothed position to report this frame; held through debounced misses
    fn live_position(&self) -> Option<Position> {
        if self.is_live() {
            self.position
        } else {
            None
        }
    }

    fn snapshot(&self) -> RoleSnapshot {
        RoleSnapshot {
            presence: self.presence.state(),
            missed_frames: self.presence.missed_frames(),
            position: self.position,
        }
    }
}

/// Pinch + rotation signals derived from the secondary hand
struct GestureTrack {
    distance: SmoothingWindow<f32>,
    last_distance: Option<f32>,
    pinch: PinchZoom,
    rotation: RotationTracker,
}

impl GestureTrack {
    fn new(config: &TrackerConfig) -> Self {
        Self {
            distance: SmoothingWindow::new(config.pinch_window),
            last_distance: None,
            pinch: PinchZoom::new(config),
            rotation: RotationTracker::new(),
        }
    }

    fn restart(&mut self) {
        self.distance.reset();
        self.last_distance = None;
        self.pinch.reset();
        self.rotation.reset();
    }

    fn update(&mut self, hand: &HandDetection, position: Position) -> SecondaryUpdate {
        let distance = self.distance.push(pinch_distance(hand));
        let velocity = self.last_distance.map_or(0.0, |last| distance - last);
        self.last_distance = Some(distance);

        let out = self.pinch.update(PinchInput {
            distance,
            velocity,
            gate: strict_pinch_pose(hand),
        });

        SecondaryUpdate {
            position,
            pinch: out.phase,
            scale_factor: out.scale_factor,
            rotation_delta: self.rotation.update(position),
            transition: out.transition,
        }
    }

    /// Repeat the last known signals on a debounced miss. No window moves.
    fn hold(&self, position: Position) -> SecondaryUpdate {
        SecondaryUpdate {
            position,
            pinch: self.pinch.phase(),
            scale_factor: self.last_distance.map_or(1.0, |d| self.pinch.scale_factor(d)),
            rotation_delta: Position::zeros(),
            transition: None,
        }
    }
}

// ============================================================================
// ENGINE
// ============================================================================

pub struct HandGestureEngine {
    config: TrackerConfig,
    primary: RoleTrack,
    secondary: RoleTrack,
    gesture: GestureTrack,
    frames_processed: u64,
    split_artifacts: u64,
    label_fallbacks: u64,
}

impl HandGestureEngine {
    /// Fresh tracking session with the given calibration
    pub fn new(config: TrackerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: TrackerConfig) -> Self {
        Self {
            primary: RoleTrack::new(Role::Primary, &config),
            secondary: RoleTrack::new(Role::Secondary, &config),
            gesture: GestureTrack::new(&config),
            frames_processed: 0,
            split_artifacts: 0,
            label_fallbacks: 0,
            config,
        }
    }

    /// Process one frame's detections, return the events it produced
    pub fn process(&mut self, frame: &FrameObservation) -> Vec<GestureEvent> {
        self.frames_processed += 1;

        let roles = resolve_roles(frame, self.config.min_hand_separation);
        match roles.resolution {
            Resolution::SplitArtifact => self.split_artifacts += 1,
            Resolution::ByPosition => self.label_fallbacks += 1,
            _ => {}
        }

        let any_live_before = self.primary.is_live() || self.secondary.is_live();
        let mut events = Vec::with_capacity(2);

        self.primary.observe(roles.get(Role::Primary));
        if let Some(position) = self.primary.live_position() {
            events.push(GestureEvent::PrimaryHandUpdate { position });
        }

        let secondary_hand = roles.get(Role::Secondary);
        let change = self.secondary.observe(secondary_hand);
        if matches!(change, PresenceChange::Acquired | PresenceChange::Lost) {
            self.gesture.restart();
        }
        let update = match (secondary_hand, self.secondary.live_position()) {
            (Some(hand), Some(position)) => Some(self.gesture.update(hand, position)),
            (None, Some(position)) => Some(self.gesture.hold(position)),
            _ => None,
        };
        if let Some(update) = update {
            events.push(GestureEvent::SecondaryHandUpdate(update));
        }

        let any_live_after = self.primary.is_live() || self.secondary.is_live();
        if any_live_before && !any_live_after {
            debug!("hands lost after {} frames", self.frames_processed);
            events.push(GestureEvent::HandsLost);
        }

        events
    }

    /// Back to initial defaults (camera stream recreated)
    pub fn reset(&mut self) {
        *self = Self::with_valid_config(self.config.clone());
    }

    /// Swap calibration; starts a new session
    pub fn reconfigure(&mut self, config: TrackerConfig) -> Result<(), ConfigError> {
        config.validate()?;
        *self = Self::with_valid_config(config);
        Ok(())
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn is_live(&self, role: Role) -> bool {
        match role {
            Role::Primary => self.primary.is_live(),
            Role::Secondary => self.secondary.is_live(),
        }
    }

    pub fn pinch_state(&self) -> PinchState {
        self.gesture.pinch.state()
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            frames_processed: self.frames_processed,
            primary: self.primary.snapshot(),
            secondary: self.secondary.snapshot(),
            pinch: self.pinch_state(),
            split_artifacts: self.split_artifacts,
            label_fallbacks: self.label_fallbacks,
        }
    }
}

impl Default for HandGestureEngine {
    fn default() -> Self {
        Self::with_valid_config(TrackerConfig::default())
    }
}
