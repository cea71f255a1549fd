//! Color constants for the seven-segment display.
//!
//! The widget palette is two colors on black: a dim gray for unlit segments and
//! leading zeros, and a phosphor green for significant digits and the focus
//! outline.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! 24-bit colors are converted by dropping the low bits of each channel
//! (`r >> 3`, `g >> 2`, `b >> 3`).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black (0, 0, 0). Screen and widget background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Used by the simulator for hint text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Segment Colors
// =============================================================================

/// Unlit segment gray, `#333333`.
/// RGB565: (6, 12, 6). Used for the `888` backdrop and leading zeros.
pub const SEGMENT_DIM: Rgb565 = Rgb565::new(6, 12, 6);

/// Lit segment green, `#00ff41`.
/// RGB565: (0, 63, 8). Used for significant digits and the focus outline.
pub const SEGMENT_LIT: Rgb565 = Rgb565::new(0, 63, 8);

/// Lit green at half alpha over black, `#00ff4180`.
/// RGB565: (0, 31, 4). Low point of the focus outline pulse.
pub const SEGMENT_LIT_HALF: Rgb565 = Rgb565::new(0, 31, 4);
