//! Synthetic hands for tests
//!
//! Every builder places the palm center exactly at `palm`.

use super::landmarks::{FrameObservation, HandDetection, Handedness, Keypoint, Position};

fn at(palm: Position, dx: f32, dy: f32) -> Keypoint {
    Keypoint::new(palm.x + dx, palm.y + dy)
}

/// `curled`: middle/ring/pinky folded. `pinch_gap`: thumb-index tip distance,
/// `None` for a relaxed thumb far from the index.
pub fn build_hand(palm: Position, label: Handedness, curled: bool, pinch_gap: Option<f32>) -> HandDetection {
    let mut points = [Keypoint::default(); 21];

    points[0] = at(palm, 0.0, 0.1);

    // MCP row, symmetric around the palm so the centroid lands on `palm`
    let mcp_x = [-0.03, -0.01, 0.01, 0.03];
    for (finger, &x) in mcp_x.iter().enumerate() {
        let base = 5 + finger * 4;
        points[base] = at(palm, x, -0.025);
        let folded = finger > 0 && curled;
        if folded {
            points[base + 1] = at(palm, x, -0.06);
            points[base + 2] = at(palm, x, -0.035);
            points[base + 3] = at(palm, x, -0.005);
        } else {
            points[base + 1] = at(palm, x, -0.065);
            points[base + 2] = at(palm, x, -0.095);
            points[base + 3] = at(palm, x, -0.125);
        }
    }

    points[1] = at(palm, -0.04, 0.07);
    points[2] = at(palm, -0.06, 0.04);
    match pinch_gap {
        Some(gap) => {
            let index_tip = points[8];
            points[3] = Keypoint::new(index_tip.x - gap - 0.02, index_tip.y + 0.02);
            points[4] = Keypoint::new(index_tip.x - gap, index_tip.y);
        }
        None => {
            points[3] = at(palm, -0.075, 0.01);
            points[4] = at(palm, -0.09, -0.02);
        }
    }

    HandDetection::new(&points, label).expect("synthetic hand is well formed")
}

pub fn open_hand(palm: Position, label: Handedness) -> HandDetection {
    build_hand(palm, label, false, None)
}

/// Strict pinch pose (other fingers curled) with the given thumb-index gap
pub fn pinching_hand(palm: Position, gap: f32, label: Handedness) -> HandDetection {
    build_hand(palm, label, true, Some(gap))
}

/// Thumb and index close but the other fingers extended
pub fn loose_pinch_hand(palm: Position, gap: f32, label: Handedness) -> HandDetection {
    build_hand(palm, label, false, Some(gap))
}

pub fn frame(hands: Vec<HandDetection>) -> FrameObservation {
    FrameObservation::new(hands).expect("at most two hands")
}

pub fn pos(x: f32, y: f32) -> Position {
    Position::new(x, y)
}
