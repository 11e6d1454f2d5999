// Shell-side wiring constants; engine tuning lives in `core::constants`.

// The hero canvas the animation attaches to; pages without it get no
// animation and no error.
pub const CANVAS_ID: &str = "morph-canvas";

// Monospace stack for the binary glyphs
pub const GLYPH_FONT_STACK: &str = "\"SF Mono\", \"Monaco\", \"Inconsolata\", monospace";

// Connection line styling (rgb matches the '1' glyph color)
pub const LINK_RGB: &str = "100, 189, 227";
pub const LINK_LINE_WIDTH: f64 = 0.5;
