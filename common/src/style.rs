//! Shared presentation rules for every display in the process.
//!
//! All displays draw with the same [`DisplayStyle`]. The style is installed
//! once, the first time any document mounts a display, and is never removed:
//! destroying displays (or whole documents) leaves it in place for the next
//! display.
//!
//! # One-time Installation
//!
//! [`inject`] is guarded by a module-level atomic flag. The first call in the
//! process reports [`Injection::Installed`], every later call reports
//! [`Injection::AlreadyPresent`]. The flag is an `AtomicBool` so the guard
//! holds even for hosts that mount displays from several threads.
//!
//! # Fallback Font
//!
//! Characters the seven-segment face cannot show are drawn with
//! [`FALLBACK_FONT`], a plain monospace face. The same font is used for every
//! character when a style selects [`GlyphFace::Monospace`].

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use profont::PROFONT_24_POINT;
use tracing::debug;

use crate::colors::{BLACK, SEGMENT_DIM, SEGMENT_LIT, SEGMENT_LIT_HALF};
use crate::config::{
    CONTAINER_MARGIN,
    FOCUS_OUTLINE_OFFSET,
    FOCUS_OUTLINE_WIDTH,
    FOCUS_PULSE_PERIOD_MS,
    LETTER_SPACING,
};
use crate::segments::SegmentFont;

/// Monospace font for characters without a seven-segment glyph.
pub const FALLBACK_FONT: &MonoFont = &PROFONT_24_POINT;

/// Which face glyphs are drawn with.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GlyphFace {
    /// Seven-segment glyphs, monospace for characters the face lacks.
    Segments,
    /// Monospace for every character.
    Monospace,
}

/// Focus marker drawn around a focused container.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct OutlineStyle {
    /// Stroke width in pixels.
    pub width: u32,
    /// Gap between the container edge and the stroke.
    pub offset: u32,
    /// Color at the start and end of each pulse.
    pub color: Rgb565,
    /// Color at the middle of each pulse.
    pub pulse_color: Rgb565,
    /// Length of one pulse.
    pub period_ms: u32,
}

impl OutlineStyle {
    /// Distance from the container edge to the outside of the stroke.
    #[inline]
    pub const fn extent(&self) -> u32 { self.offset + self.width }
}

/// Presentation rules shared by every display.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DisplayStyle {
    pub face: GlyphFace,
    pub font: SegmentFont,
    /// Backdrop segments and leading zeros.
    pub dim: Rgb565,
    /// Significant digits.
    pub lit: Rgb565,
    /// Fill behind the layers and the focus outline.
    pub background: Rgb565,
    /// Extra space after every glyph.
    pub letter_spacing: u32,
    /// Gap between the parent's top edge and the container.
    pub margin: u32,
    pub outline: OutlineStyle,
}

impl DisplayStyle {
    /// Horizontal distance between consecutive glyph origins.
    #[inline]
    pub const fn advance(&self) -> u32 { self.font.cell_size().width + self.letter_spacing }

    /// Same rules with every glyph drawn in the monospace fallback font.
    pub const fn monospace(self) -> Self {
        Self {
            face: GlyphFace::Monospace,
            ..self
        }
    }
}

/// The process-wide display style.
pub static SHARED_STYLE: DisplayStyle = DisplayStyle {
    face: GlyphFace::Segments,
    font: SegmentFont::DEFAULT,
    dim: SEGMENT_DIM,
    lit: SEGMENT_LIT,
    background: BLACK,
    letter_spacing: LETTER_SPACING,
    margin: CONTAINER_MARGIN,
    outline: OutlineStyle {
        width: FOCUS_OUTLINE_WIDTH,
        offset: FOCUS_OUTLINE_OFFSET,
        color: SEGMENT_LIT,
        pulse_color: SEGMENT_LIT_HALF,
        period_ms: FOCUS_PULSE_PERIOD_MS,
    },
};

static INJECTED: AtomicBool = AtomicBool::new(false);

// =============================================================================
// Installation
// =============================================================================

/// Result of an [`inject`] call.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Injection {
    /// This call installed the shared style.
    Installed,
    /// The shared style was installed by an earlier call.
    AlreadyPresent,
}

/// Install the shared style if no display has done so yet.
pub fn inject() -> Injection {
    if INJECTED.swap(true, Ordering::AcqRel) {
        return Injection::AlreadyPresent;
    }
    debug!(
        glyph_width = SHARED_STYLE.font.glyph_size.width,
        glyph_height = SHARED_STYLE.font.glyph_size.height,
        "installed shared seven-segment style"
    );
    Injection::Installed
}

/// Whether [`inject`] has run in this process.
#[inline]
pub fn is_injected() -> bool { INJECTED.load(Ordering::Acquire) }

/// The shared style.
#[inline]
pub fn shared() -> &'static DisplayStyle { &SHARED_STYLE }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inject_is_idempotent() {
        // Other tests may have injected already; either way the next call must
        // see the style as present.
        inject();
        assert!(is_injected());
        assert_eq!(inject(), Injection::AlreadyPresent);
        assert_eq!(inject(), Injection::AlreadyPresent);
    }

    #[test]
    fn test_shared_style_palette() {
        let style = shared();
        assert_eq!(style.dim, SEGMENT_DIM);
        assert_eq!(style.lit, SEGMENT_LIT);
        assert_eq!(style.face, GlyphFace::Segments);
    }

    #[test]
    fn test_advance_includes_spacing() {
        let style = shared();
        assert_eq!(style.advance(), style.font.cell_size().width + LETTER_SPACING);
    }

    #[test]
    fn test_monospace_keeps_colors() {
        let mono = SHARED_STYLE.monospace();
        assert_eq!(mono.face, GlyphFace::Monospace);
        assert_eq!(mono.lit, SHARED_STYLE.lit);
        assert_eq!(mono.outline, SHARED_STYLE.outline);
    }

    #[test]
    fn test_outline_extent() {
        assert_eq!(SHARED_STYLE.outline.extent(), FOCUS_OUTLINE_OFFSET + FOCUS_OUTLINE_WIDTH);
    }
}
