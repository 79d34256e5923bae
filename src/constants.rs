/// DOM hooks and frame-loop tuning for the web host.
///
/// Simulation defaults live in `particle_core::constants`; these only concern
/// how the page is wired up.
// Canvas the background is drawn into; its absence disables the effect
pub const CANVAS_ID: &str = "particle-network";

// Optional `data-*` attribute prefix for configuration overrides on the canvas
pub const DATA_ATTR_PREFIX: &str = "data-";

// Browser events
pub const EVENT_RESIZE: &str = "resize";
pub const EVENT_MOUSE_MOVE: &str = "mousemove";
pub const EVENT_MOUSE_LEAVE: &str = "mouseleave";
pub const EVENT_DOM_READY: &str = "DOMContentLoaded";

// Console verbosity: reseed, resize and frame-rate messages are debug-level
pub const LOG_LEVEL: log::Level = if cfg!(debug_assertions) {
    log::Level::Debug
} else {
    log::Level::Info
};

// How often the frame-rate summary is logged (seconds)
pub const FRAME_LOG_INTERVAL_SEC: f32 = 5.0;
