//! Bold-italic seven-segment glyph font.
//!
//! Glyphs are described by a 7-bit segment mask and drawn as filled,
//! slanted bars:
//!
//! ```text
//!    aaaa
//!   f    b
//!   f    b
//!    gggg
//!   e    c
//!   e    c
//!    dddd
//! ```
//!
//! Bit 0 is segment `a`, bit 6 is segment `g`. The corners between segments
//! are left empty so every stroke reads as a separate segment.
//!
//! # Italic Slant
//!
//! Each point is shifted right in proportion to its distance from the glyph's
//! bottom edge, so the top of a glyph sits `slant` pixels to the right of its
//! bottom. Every segment becomes a parallelogram, drawn as two filled
//! triangles.
//!
//! # Missing Glyphs
//!
//! Characters without a segment mask are reported back to the caller
//! (`draw_glyph` returns `Ok(false)`), which then falls back to a monospace
//! font.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Triangle};

use crate::config::{GLYPH_HEIGHT, GLYPH_SLANT, GLYPH_WIDTH, SEGMENT_THICKNESS};

// =============================================================================
// Segment Masks
// =============================================================================

pub const SEG_A: u8 = 1 << 0;
pub const SEG_B: u8 = 1 << 1;
pub const SEG_C: u8 = 1 << 2;
pub const SEG_D: u8 = 1 << 3;
pub const SEG_E: u8 = 1 << 4;
pub const SEG_F: u8 = 1 << 5;
pub const SEG_G: u8 = 1 << 6;

/// Every segment lit (the glyph for `8`).
pub const ALL_SEGMENTS: u8 = SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G;

const SEGMENTS: [u8; 7] = [SEG_A, SEG_B, SEG_C, SEG_D, SEG_E, SEG_F, SEG_G];

/// Segment mask for a character, or `None` if the font has no glyph for it.
pub const fn glyph_segments(c: char) -> Option<u8> {
    let mask = match c {
        '0' | 'O' => SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,
        '1' => SEG_B | SEG_C,
        '2' => SEG_A | SEG_B | SEG_D | SEG_E | SEG_G,
        '3' => SEG_A | SEG_B | SEG_C | SEG_D | SEG_G,
        '4' => SEG_B | SEG_C | SEG_F | SEG_G,
        '5' | 'S' | 's' => SEG_A | SEG_C | SEG_D | SEG_F | SEG_G,
        '6' => SEG_A | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,
        '7' => SEG_A | SEG_B | SEG_C,
        '8' => ALL_SEGMENTS,
        '9' => SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G,
        'A' | 'a' => SEG_A | SEG_B | SEG_C | SEG_E | SEG_F | SEG_G,
        'B' | 'b' => SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,
        'C' => SEG_A | SEG_D | SEG_E | SEG_F,
        'c' => SEG_D | SEG_E | SEG_G,
        'D' | 'd' => SEG_B | SEG_C | SEG_D | SEG_E | SEG_G,
        'E' | 'e' => SEG_A | SEG_D | SEG_E | SEG_F | SEG_G,
        'F' | 'f' => SEG_A | SEG_E | SEG_F | SEG_G,
        'H' => SEG_B | SEG_C | SEG_E | SEG_F | SEG_G,
        'h' => SEG_C | SEG_E | SEG_F | SEG_G,
        'J' | 'j' => SEG_B | SEG_C | SEG_D | SEG_E,
        'L' | 'l' => SEG_D | SEG_E | SEG_F,
        'N' | 'n' => SEG_C | SEG_E | SEG_G,
        'o' => SEG_C | SEG_D | SEG_E | SEG_G,
        'P' | 'p' => SEG_A | SEG_B | SEG_E | SEG_F | SEG_G,
        'R' | 'r' => SEG_E | SEG_G,
        'T' | 't' => SEG_D | SEG_E | SEG_F | SEG_G,
        'U' => SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,
        'u' => SEG_C | SEG_D | SEG_E,
        'Y' | 'y' => SEG_B | SEG_C | SEG_D | SEG_F | SEG_G,
        '-' => SEG_G,
        '_' => SEG_D,
        ' ' => 0,
        _ => return None,
    };
    Some(mask)
}

// =============================================================================
// Segment Font
// =============================================================================

/// Geometry of the seven-segment face.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SegmentFont {
    /// Upright glyph size, before slanting.
    pub glyph_size: Size,
    /// Segment stroke thickness.
    pub thickness: u32,
    /// Horizontal offset of the glyph top relative to its bottom.
    pub slant: u32,
}

impl SegmentFont {
    /// The default bold-italic face.
    pub const DEFAULT: Self = Self {
        glyph_size: Size::new(GLYPH_WIDTH, GLYPH_HEIGHT),
        thickness: SEGMENT_THICKNESS,
        slant: GLYPH_SLANT,
    };

    /// Size of the box a slanted glyph occupies.
    #[inline]
    pub const fn cell_size(&self) -> Size { Size::new(self.glyph_size.width + self.slant, self.glyph_size.height) }

    /// Draw `c` with its cell's top-left corner at `origin`.
    ///
    /// Returns `Ok(false)` without drawing anything when the font has no glyph
    /// for `c`.
    pub fn draw_glyph<D>(
        &self,
        c: char,
        origin: Point,
        color: Rgb565,
        display: &mut D,
    ) -> Result<bool, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(mask) = glyph_segments(c) else {
            return Ok(false);
        };

        let fill = PrimitiveStyle::with_fill(color);
        for segment in SEGMENTS.into_iter().filter(|s| mask & s != 0) {
            let [tl, tr, br, bl] = self.segment_corners(segment, origin);
            Triangle::new(tl, tr, br).into_styled(fill).draw(display)?;
            Triangle::new(tl, br, bl).into_styled(fill).draw(display)?;
        }
        Ok(true)
    }

    /// Slanted corners (top-left, top-right, bottom-right, bottom-left) of a
    /// segment.
    fn segment_corners(
        &self,
        segment: u8,
        origin: Point,
    ) -> [Point; 4] {
        let w = self.glyph_size.width as i32;
        let h = self.glyph_size.height as i32;
        let t = self.thickness as i32;

        // Middle bar spans [mid_top, mid_bottom)
        let mid_top = h / 2 - t / 2;
        let mid_bottom = mid_top + t;

        // Upright bounds as [x0, x1) x [y0, y1)
        let (x0, y0, x1, y1) = match segment {
            SEG_A => (t, 0, w - t, t),
            SEG_B => (w - t, t, w, mid_top),
            SEG_C => (w - t, mid_bottom, w, h - t),
            SEG_D => (t, h - t, w - t, h),
            SEG_E => (0, mid_bottom, t, h - t),
            SEG_F => (0, t, t, mid_top),
            _ => (t, mid_top, w - t, mid_bottom),
        };

        [
            self.slanted(origin, x0, y0),
            self.slanted(origin, x1 - 1, y0),
            self.slanted(origin, x1 - 1, y1 - 1),
            self.slanted(origin, x0, y1 - 1),
        ]
    }

    #[inline]
    fn slanted(
        &self,
        origin: Point,
        x: i32,
        y: i32,
    ) -> Point {
        let h = self.glyph_size.height as i32;
        let shift = if h > 0 { self.slant as i32 * (h - 1 - y) / h } else { 0 };
        origin + Point::new(x + shift, y)
    }
}

impl Default for SegmentFont {
    fn default() -> Self { Self::DEFAULT }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::{PointsIter, Rectangle};

    use super::*;
    use crate::colors::SEGMENT_LIT;
    use crate::testing::Canvas;

    fn lit_pixels(c: char) -> usize {
        let font = SegmentFont::DEFAULT;
        let mut canvas = Canvas::new(font.cell_size());
        font.draw_glyph(c, Point::zero(), SEGMENT_LIT, &mut canvas).unwrap();
        canvas.count(SEGMENT_LIT)
    }

    #[test]
    fn test_every_digit_has_a_glyph() {
        for c in '0'..='9' {
            assert!(glyph_segments(c).is_some(), "digit {c} has no glyph");
        }
    }

    #[test]
    fn test_eight_lights_every_segment() {
        assert_eq!(glyph_segments('8'), Some(ALL_SEGMENTS));
        assert_eq!(glyph_segments('1'), Some(SEG_B | SEG_C));
    }

    #[test]
    fn test_unknown_glyph_draws_nothing() {
        let font = SegmentFont::DEFAULT;
        let mut canvas = Canvas::new(font.cell_size());
        let drawn = font.draw_glyph('%', Point::zero(), SEGMENT_LIT, &mut canvas).unwrap();
        assert!(!drawn, "'%' should not have a glyph");
        assert_eq!(canvas.count(SEGMENT_LIT), 0);
    }

    #[test]
    fn test_space_is_blank_glyph() {
        assert_eq!(glyph_segments(' '), Some(0));
        assert_eq!(lit_pixels(' '), 0);
    }

    #[test]
    fn test_eight_covers_more_than_one() {
        let eight = lit_pixels('8');
        let one = lit_pixels('1');
        assert!(one > 0, "'1' should light some pixels");
        assert!(eight > one * 2, "'8' ({eight}) should light far more than '1' ({one})");
    }

    #[test]
    fn test_glyph_stays_inside_cell() {
        let font = SegmentFont::DEFAULT;
        let cell = font.cell_size();
        // Oversized canvas, glyph drawn away from the edges
        let offset = Point::new(10, 10);
        let mut canvas = Canvas::new(cell + Size::new(20, 20));
        font.draw_glyph('8', offset, SEGMENT_LIT, &mut canvas).unwrap();

        let total = canvas.count(SEGMENT_LIT);
        let inside = Rectangle::new(offset, cell)
            .points()
            .filter(|p| canvas.pixel(*p) == Some(SEGMENT_LIT))
            .count();
        assert_eq!(inside, total, "glyph pixels leaked outside its cell");
    }

    #[test]
    fn test_slant_shifts_top_right() {
        let font = SegmentFont::DEFAULT;
        let top = font.slanted(Point::zero(), 0, 0);
        let bottom = font.slanted(Point::zero(), 0, font.glyph_size.height as i32 - 1);
        assert!(top.x > bottom.x, "top of glyph should lean right");
        assert_eq!(bottom.x, 0);
    }
}
