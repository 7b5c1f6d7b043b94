//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod console;
mod hand_landmarks;

pub use console::init_console_logging;

pub use hand_landmarks::{
    configure_tracking,
    get_tracking_config,
    get_tracking_debug,
    process_hand_frame,
    reset_tracking,
};
