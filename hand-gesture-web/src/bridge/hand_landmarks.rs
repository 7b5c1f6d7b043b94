//! Hand landmark intake from JS
//!
//! The detector callback hands us a flat Float32Array of keypoints plus one
//! handedness code per hand. We validate, run one engine step, and return the
//! frame's events as plain JS objects for the scene controller.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::gesture::{ConfigError, FrameError, FrameObservation, HandGestureEngine, TrackerConfig};

impl From<FrameError> for JsValue {
    fn from(err: FrameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

// Thread-local storage (WASM is single-threaded).
// A re-entrant call from inside a frame callback panics on the borrow.
thread_local! {
    static ENGINE: RefCell<HandGestureEngine> = RefCell::new(HandGestureEngine::default());
}

/// Serialize to JSON, then let the JS engine build the object
fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Process one detector result.
///
/// - `flat_data`: `labels.len()` hands × 21 keypoints × `stride` floats
/// - `labels`: raw handedness per hand (0 = Left, 1 = Right), as reported
/// - `stride`: 2 for (x, y), 3 for (x, y, z)
///
/// Returns an array of events. Malformed input is rejected and the
/// tracking state is left untouched.
#[wasm_bindgen]
pub fn process_hand_frame(flat_data: &[f32], labels: &[u8], stride: usize) -> Result<JsValue, JsValue> {
    let frame = FrameObservation::from_flat(flat_data, labels, stride).map_err(|err| {
        log::warn!("rejected hand frame: {}", err);
        err
    })?;

    let events = ENGINE.with(|engine_cell| engine_cell.borrow_mut().process(&frame));
    to_js(&events)
}

/// Start a fresh tracking session (camera stream recreated)
#[wasm_bindgen]
pub fn reset_tracking() {
    ENGINE.with(|engine_cell| engine_cell.borrow_mut().reset());
    log::info!("hand tracking reset");
}

/// Apply a (partial) JSON calibration. Starts a new session.
#[wasm_bindgen]
pub fn configure_tracking(json: &str) -> Result<(), JsValue> {
    let config = TrackerConfig::from_json(json).map_err(|err| {
        log::warn!("rejected tracker config: {}", err);
        err
    })?;

    ENGINE.with(|engine_cell| engine_cell.borrow_mut().reconfigure(config))?;
    log::info!("tracker reconfigured");
    Ok(())
}

/// Active calibration as a JS object
#[wasm_bindgen]
pub fn get_tracking_config() -> Result<JsValue, JsValue> {
    ENGINE.with(|engine_cell| to_js(engine_cell.borrow().config()))
}

/// Role presence, miss counters, pinch state and artifact counters
#[wasm_bindgen]
pub fn get_tracking_debug() -> Result<JsValue, JsValue> {
    ENGINE.with(|engine_cell| to_js(&engine_cell.borrow().snapshot()))
}
