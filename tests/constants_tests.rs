// Host-side tests for web host constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[cfg(debug_assertions)]
fn debug_builds_show_debug_messages() {
    // Reseed, resize and frame-rate summaries are logged with `debug!`
    assert_eq!(LOG_LEVEL, log::Level::Debug);
    assert!(LOG_LEVEL >= log::Level::Info);
}

#[test]
#[cfg(not(debug_assertions))]
fn release_builds_log_at_info() {
    assert_eq!(LOG_LEVEL, log::Level::Info);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn host_constants_are_sane() {
    assert!(FRAME_LOG_INTERVAL_SEC > 0.0);
    assert!(!CANVAS_ID.is_empty());
    assert!(DATA_ATTR_PREFIX.ends_with('-'));
}
