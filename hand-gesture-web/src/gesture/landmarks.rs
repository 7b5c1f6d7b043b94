//! Hand landmark types as delivered by the detector
//!
//! One detection = 21 keypoints in MediaPipe hand order + a raw handedness
//! label. Everything here is validated on construction so the engine only
//! ever sees well-formed frames.

use nalgebra::Vector2;

use super::error::FrameError;

/// 2D position / displacement in normalized image space
pub type Position = Vector2<f32>;

// ============================================================================
// HAND LANDMARK INDICES (MediaPipe Hands - 21 total)
// ============================================================================

pub const KEYPOINT_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_TIP: usize = 20;

/// Maximum hands per frame the detector is configured for
pub const MAX_HANDS: usize = 2;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single hand keypoint (normalized coordinates, y grows downward)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
    /// Relative depth, 0.0 for 2D detectors. Never used by the engine.
    pub z: f32,
}

impl Keypoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    pub fn with_depth(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Image-plane projection
    pub fn xy(&self) -> Position {
        Position::new(self.x, self.y)
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Handedness as labelled by the detector
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    /// Decode the bridge's label code (0 = left, 1 = right)
    pub fn from_code(code: u8) -> Result<Self, FrameError> {
        match code {
            0 => Ok(Handedness::Left),
            1 => Ok(Handedness::Right),
            other => Err(FrameError::UnknownHandedness(other)),
        }
    }

    /// The other hand. Used to undo the mirrored camera view.
    pub fn flipped(self) -> Self {
        match self {
            Handedness::Left => Handedness::Right,
            Handedness::Right => Handedness::Left,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Handedness::Left => "left",
            Handedness::Right => "right",
        }
    }
}

/// One detected hand: 21 keypoints plus the detector's (unreliable) label
#[derive(Clone, Debug, PartialEq)]
pub struct HandDetection {
    keypoints: [Keypoint; KEYPOINT_COUNT],
    label: Handedness,
}

impl HandDetection {
    /// Build a detection, rejecting anything that is not exactly 21 finite keypoints
    pub fn new(keypoints: &[Keypoint], label: Handedness) -> Result<Self, FrameError> {
        let keypoints: [Keypoint; KEYPOINT_COUNT] =
            keypoints.try_into().map_err(|_| FrameError::KeypointCount {
                expected: KEYPOINT_COUNT,
                actual: keypoints.len(),
            })?;

        if let Some(index) = keypoints.iter().position(|k| !k.is_finite()) {
            return Err(FrameError::NonFiniteKeypoint { index });
        }

        Ok(Self { keypoints, label })
    }

    /// Parse one hand from a flat `[x, y(, z)] * 21` slice
    pub fn from_flat(data: &[f32], stride: usize, label: Handedness) -> Result<Self, FrameError> {
        if !(2..=3).contains(&stride) {
            return Err(FrameError::UnsupportedStride(stride));
        }
        if data.len() != KEYPOINT_COUNT * stride {
            return Err(FrameError::FlatDataLength {
                expected: KEYPOINT_COUNT * stride,
                actual: data.len(),
            });
        }

        let keypoints: Vec<Keypoint> = data
            .chunks_exact(stride)
            .map(|c| Keypoint::with_depth(c[0], c[1], if stride == 3 { c[2] } else { 0.0 }))
            .collect();

        Self::new(&keypoints, label)
    }

    pub fn keypoint(&self, index: usize) -> Keypoint {
        self.keypoints[index]
    }

    /// Raw label exactly as the detector reported it (mirrored)
    pub fn label(&self) -> Handedness {
        self.label
    }
}

/// All hands the detector reported for one processed video frame.
/// Order between the two hands carries no meaning.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameObservation {
    hands: Vec<HandDetection>,
}

impl FrameObservation {
    pub fn new(hands: Vec<HandDetection>) -> Result<Self, FrameError> {
        if hands.len() > MAX_HANDS {
            return Err(FrameError::TooManyHands(hands.len()));
        }
        Ok(Self { hands })
    }

    /// Frame where the detector saw nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a whole frame from the bridge layout:
    /// `labels.len()` hands of `21 * stride` floats each
    pub fn from_flat(data: &[f32], labels: &[u8], stride: usize) -> Result<Self, FrameError> {
        if labels.len() > MAX_HANDS {
            return Err(FrameError::TooManyHands(labels.len()));
        }
        if !(2..=3).contains(&stride) {
            return Err(FrameError::UnsupportedStride(stride));
        }

        let per_hand = KEYPOINT_COUNT * stride;
        if data.len() != per_hand * labels.len() {
            return Err(FrameError::FlatDataLength {
                expected: per_hand * labels.len(),
                actual: data.len(),
            });
        }

        let hands = labels
            .iter()
            .zip(data.chunks_exact(per_hand))
            .map(|(&code, chunk)| HandDetection::from_flat(chunk, stride, Handedness::from_code(code)?))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(hands)
    }

    pub fn hands(&self) -> &[HandDetection] {
        &self.hands
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_wrong_keypoint_count() {
        let points = vec![Keypoint::new(0.5, 0.5); 20];
        let err = HandDetection::new(&points, Handedness::Left).unwrap_err();
        assert_eq!(err, FrameError::KeypointCount { expected: 21, actual: 20 });
    }

    #[test]
    fn test_rejects_nan_keypoint() {
        let mut points = vec![Keypoint::new(0.5, 0.5); 21];
        points[7].y = f32::NAN;
        let err = HandDetection::new(&points, Handedness::Right).unwrap_err();
        assert_eq!(err, FrameError::NonFiniteKeypoint { index: 7 });
    }

    #[test]
    fn test_rejects_three_hands() {
        let hand = HandDetection::new(&[Keypoint::new(0.5, 0.5); 21], Handedness::Left).unwrap();
        let err = FrameObservation::new(vec![hand.clone(), hand.clone(), hand]).unwrap_err();
        assert_eq!(err, FrameError::TooManyHands(3));
    }

    #[test]
    fn test_from_flat_with_depth() {
        let mut data = Vec::new();
        for i in 0..21 {
            data.extend_from_slice(&[i as f32 / 100.0, 0.5, -0.1]);
        }
        for i in 0..21 {
            data.extend_from_slice(&[0.9, i as f32 / 100.0, 0.0]);
        }

        let frame = FrameObservation::from_flat(&data, &[1, 0], 3).unwrap();
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.hands()[0].label(), Handedness::Right);
        assert_eq!(frame.hands()[1].label(), Handedness::Left);
        assert_eq!(frame.hands()[0].keypoint(INDEX_TIP), Keypoint::with_depth(0.08, 0.5, -0.1));
        assert_eq!(frame.hands()[1].keypoint(WRIST).xy(), Position::new(0.9, 0.0));
    }

    #[test]
    fn test_from_flat_length_mismatch() {
        let data = vec![0.5; 21 * 2 + 1];
        let err = FrameObservation::from_flat(&data, &[0], 2).unwrap_err();
        assert_eq!(err, FrameError::FlatDataLength { expected: 42, actual: 43 });
    }

    #[test]
    fn test_rejects_bad_stride() {
        for stride in [1, 4] {
            let data = vec![0.5; 21 * stride];
            let err = FrameObservation::from_flat(&data, &[0], stride).unwrap_err();
            assert_eq!(err, FrameError::UnsupportedStride(stride));

            let err = HandDetection::from_flat(&data, stride, Handedness::Left).unwrap_err();
            assert_eq!(err, FrameError::UnsupportedStride(stride));
        }
    }

    #[test]
    fn test_unknown_label_code() {
        let data = vec![0.5; 42];
        let err = FrameObservation::from_flat(&data, &[7], 2).unwrap_err();
        assert_eq!(err, FrameError::UnknownHandedness(7));
    }

    #[test]
    fn test_empty_frame() {
        let frame = FrameObservation::from_flat(&[], &[], 3).unwrap();
        assert!(frame.is_empty());
    }
}
