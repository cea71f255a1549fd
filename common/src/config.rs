//! Widget configuration constants.
//!
//! Everything here is a compile-time constant: glyph geometry, spacing around
//! the container, the focus outline and the fixed capacities of a
//! [`Document`](crate::document::Document).

// =============================================================================
// Value Configuration
// =============================================================================

/// Number of characters shown by a display.
pub const DIGIT_COUNT: usize = 3;

/// Byte capacity of a display value (every char may take up to 4 UTF-8 bytes).
pub const VALUE_CAPACITY: usize = DIGIT_COUNT * 4;

/// Character used to left-pad short values.
pub const PAD_CHAR: char = '0';

/// Value a display shows after creation and on every focus entry.
pub const RESET_VALUE: &str = "000";

/// Backdrop layer text: every segment of every position lit.
pub const BACKDROP_TEXT: &str = "888";

// =============================================================================
// Glyph Geometry
// =============================================================================

/// Width of an upright seven-segment glyph in pixels.
pub const GLYPH_WIDTH: u32 = 36;

/// Height of a seven-segment glyph in pixels.
pub const GLYPH_HEIGHT: u32 = 60;

/// Segment stroke thickness in pixels (bold face).
pub const SEGMENT_THICKNESS: u32 = 7;

/// Horizontal shift of the glyph top relative to its bottom (italic face).
pub const GLYPH_SLANT: u32 = 7;

/// Extra space after every glyph (0.1em of the glyph height).
pub const LETTER_SPACING: u32 = GLYPH_HEIGHT / 10;

// =============================================================================
// Container Layout
// =============================================================================

/// Gap between the parent's top edge and the container.
pub const CONTAINER_MARGIN: u32 = 20;

/// Focus outline stroke width.
pub const FOCUS_OUTLINE_WIDTH: u32 = 2;

/// Gap between the container edge and the focus outline.
pub const FOCUS_OUTLINE_OFFSET: u32 = 8;

/// Full period of the focus outline pulse.
pub const FOCUS_PULSE_PERIOD_MS: u32 = 1500;

// =============================================================================
// Document Capacities
// =============================================================================

/// Maximum number of displays mounted in one document.
pub const MAX_DISPLAYS: usize = 4;

/// Document-wide listeners registered per display (click and keydown).
pub const LISTENERS_PER_DISPLAY: usize = 2;

/// Maximum number of document-wide listeners.
pub const MAX_LISTENERS: usize = MAX_DISPLAYS * LISTENERS_PER_DISPLAY;
