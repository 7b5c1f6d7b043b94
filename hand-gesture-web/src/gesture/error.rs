//! Errors raised at the engine boundary
//!
//! The per-frame engine update is infallible. Only malformed detector output
//! and bad calibration values are rejected, before they reach any state.

use std::fmt;

/// Contract violations by the landmark detector (fail fast, state untouched)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameError {
    KeypointCount { expected: usize, actual: usize },
    TooManyHands(usize),
    NonFiniteKeypoint { index: usize },
    UnknownHandedness(u8),
    FlatDataLength { expected: usize, actual: usize },
    UnsupportedStride(usize),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::KeypointCount { expected, actual } => {
                write!(f, "Invalid keypoint count: {} (expected {})", actual, expected)
            }
            FrameError::TooManyHands(n) => write!(f, "Too many hands in frame: {} (max 2)", n),
            FrameError::NonFiniteKeypoint { index } => {
                write!(f, "Keypoint {} has a non-finite coordinate", index)
            }
            FrameError::UnknownHandedness(code) => write!(f, "Unknown handedness code: {}", code),
            FrameError::FlatDataLength { expected, actual } => {
                write!(f, "Invalid landmark data length: {} (expected {})", actual, expected)
            }
            FrameError::UnsupportedStride(stride) => {
                write!(f, "Unsupported coordinate stride: {} (expected 2 or 3)", stride)
            }
        }
    }
}

impl std::error::Error for FrameError {}

/// Calibration values that would break the engine's invariants
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    ZeroWindow(&'static str),
    ZeroDebounce,
    NonPositive { field: &'static str, value: f32 },
    InvertedPinchBand { engage: f32, release: f32 },
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroWindow(field) => write!(f, "{} must hold at least one sample", field),
            ConfigError::ZeroDebounce => write!(f, "presenceDebounceFrames must be at least 1"),
            ConfigError::NonPositive { field, value } => {
                write!(f, "{} must be a positive finite number (got {})", field, value)
            }
            ConfigError::InvertedPinchBand { engage, release } => write!(
                f,
                "pinchEngage ({}) must be below pinchRelease ({})",
                engage, release
            ),
            ConfigError::Parse(msg) => write!(f, "Invalid tracker config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
