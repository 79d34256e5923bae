// Default tuning for the particle network. `FieldConfig::default()` is built from these.

// Population
pub const PARTICLE_COUNT: usize = 80;
pub const MAX_PARTICLE_COUNT: usize = 2000; // links are O(n^2) per frame
pub const PARTICLE_SIZE_MIN: f32 = 1.0; // px radius
pub const PARTICLE_SIZE_MAX: f32 = 3.0;

// Motion (px per tick)
pub const BASE_SPEED: f32 = 0.4; // initial velocity components span [-speed/2, speed/2]
pub const MAX_SPEED: f32 = 1.0;

// Links
pub const LINE_DISTANCE: f32 = 120.0; // px, pairs closer than this get a line
pub const LINE_WIDTH: f32 = 1.0;
pub const LINE_ALPHA_SCALE: f32 = 0.2; // alpha at zero distance for a plain line
pub const HOVER_LINE_ALPHA_SCALE: f32 = 0.4; // alpha at zero distance for a hovered line

// Pointer
pub const POINTER_RADIUS: f32 = 150.0;
pub const POINTER_PUSH_STRENGTH: f32 = 0.02;

// Palette as [r, g, b] + base alpha
pub const PARTICLE_RGB: [u8; 3] = [0, 212, 170];
pub const PARTICLE_ALPHA: f32 = 0.8;
pub const LINE_RGB: [u8; 3] = [0, 212, 170];
pub const LINE_ALPHA: f32 = 0.15;
pub const LINE_HOVER_RGB: [u8; 3] = [124, 58, 237];
pub const LINE_HOVER_ALPHA: f32 = 0.3;
