//! Palm locator and hand-shape geometry
//!
//! Palm center = mean of wrist + four MCP joints. Those points barely move
//! when the fingers do, so it is the hand's gross position.

use super::landmarks::{
    HandDetection, Position, INDEX_MCP, INDEX_TIP, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP, PINKY_MCP,
    PINKY_PIP, PINKY_TIP, RING_MCP, RING_PIP, RING_TIP, THUMB_TIP, WRIST,
};

/// Keypoints averaged into the palm center
pub const PALM_POINTS: [usize; 5] = [WRIST, INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP];

/// (tip, pip) pairs that must be curled for a strict pinch
const CURL_FINGERS: [(usize, usize); 3] = [
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

/// Unweighted centroid of wrist + MCP joints
pub fn palm_center(hand: &HandDetection) -> Position {
    let sum: Position = PALM_POINTS.iter().map(|&i| hand.keypoint(i).xy()).sum();
    sum / PALM_POINTS.len() as f32
}

/// Raw thumb-tip to index-tip distance
pub fn pinch_distance(hand: &HandDetection) -> f32 {
    (hand.keypoint(THUMB_TIP).xy() - hand.keypoint(INDEX_TIP).xy()).norm()
}

/// A finger is curled when its tip sits closer to the wrist than its PIP joint
fn is_curled(hand: &HandDetection, tip: usize, pip: usize) -> bool {
    let wrist = hand.keypoint(WRIST).xy();
    let tip_d2 = (hand.keypoint(tip).xy() - wrist).norm_squared();
    let pip_d2 = (hand.keypoint(pip).xy() - wrist).norm_squared();
    tip_d2 < pip_d2
}

/// Strict pinch gate: middle, ring and pinky all curled.
/// Rules out an open hand whose thumb and index just happen to be close.
pub fn strict_pinch_pose(hand: &HandDetection) -> bool {
    CURL_FINGERS
        .iter()
        .all(|&(tip, pip)| is_curled(hand, tip, pip))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::test_support::{open_hand, pinching_hand};
    use crate::gesture::landmarks::{Handedness, Keypoint};

    #[test]
    fn test_palm_center_is_mean_of_five_points() {
        let mut points = [Keypoint::new(0.9, 0.9); 21];
        points[WRIST] = Keypoint::new(0.5, 0.8);
        points[INDEX_MCP] = Keypoint::new(0.4, 0.6);
        points[MIDDLE_MCP] = Keypoint::new(0.5, 0.6);
        points[RING_MCP] = Keypoint::new(0.6, 0.6);
        points[PINKY_MCP] = Keypoint::new(0.5, 0.4);
        let hand = HandDetection::new(&points, Handedness::Left).unwrap();

        let center = palm_center(&hand);
        assert!((center.x - 0.5).abs() < 1e-6);
        assert!((center.y - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_palm_center_ignores_fingertips() {
        let a = open_hand(Position::new(0.3, 0.5), Handedness::Left);
        let b = pinching_hand(Position::new(0.3, 0.5), 0.01, Handedness::Left);
        assert!((palm_center(&a) - palm_center(&b)).norm() < 1e-6);
    }

    #[test]
    fn test_pinch_distance() {
        let hand = pinching_hand(Position::new(0.5, 0.5), 0.04, Handedness::Right);
        assert!((pinch_distance(&hand) - 0.04).abs() < 1e-5);
    }

    #[test]
    fn test_open_hand_fails_gate() {
        let hand = open_hand(Position::new(0.5, 0.5), Handedness::Right);
        assert!(!strict_pinch_pose(&hand));
    }

    #[test]
    fn test_curled_hand_passes_gate() {
        let hand = pinching_hand(Position::new(0.5, 0.5), 0.03, Handedness::Right);
        assert!(strict_pinch_pose(&hand));
    }
}
