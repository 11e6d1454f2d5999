// Shared tuning constants for the morphing binary field.

// Particle field
pub const PARTICLE_COUNT: usize = 400;
pub const GLYPH_SIZE_MIN: f32 = 10.0; // px
pub const GLYPH_SIZE_SPAN: f32 = 3.0; // uniform extra on top of the minimum

// Phase durations (ms)
pub const HOLD_MS: f64 = 3000.0; // time to hold each shape
pub const SCATTER_MS: f64 = 800.0; // short, the scatter is a small neighbourhood
pub const FORM_MS: f64 = 2500.0; // time to ease into the next shape

// Binary flicker while holding the grid
pub const FLIP_INTERVAL_MS: f64 = 30.0;
pub const FLIPS_PER_TICK: usize = 8;

// Scatter neighbourhood radius (canvas px)
pub const SCATTER_RADIUS: f32 = 30.0;

// Scale unit relative to the short canvas side
pub const SCALE_FACTOR: f32 = 0.35;

// Glyph palette
pub const COLOR_ONE: &str = "#64bde3"; // sky blue for '1'
pub const COLOR_ZERO: &str = "#3d8ab3"; // darker blue for '0'

// Connection lines drawn between nearby particles during transitions
pub const LINK_MAX_DIST: f32 = 50.0; // px
pub const LINK_MAX_ALPHA: f32 = 0.12; // alpha at zero distance, fades linearly
