//! Hand Gesture Web - gesture interpretation for the webcam AR toy
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! The landmark detector and the 3D scene live in JS; this crate turns the
//! detector's per-frame keypoints into position / pinch-zoom / rotation events.

mod bridge;
pub mod gesture;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    configure_tracking, get_tracking_config, get_tracking_debug, process_hand_frame, reset_tracking,
};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    bridge::init_console_logging(log::LevelFilter::Info);
    log::info!("✅ Hand gesture engine loaded");
}

/// Raise console verbosity (`debug`/`trace` show per-transition detail)
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter: log::LevelFilter = level
        .parse()
        .map_err(|_| JsValue::from_str(&format!("Unknown log level: {}", level)))?;
    log::set_max_level(filter);
    Ok(())
}
