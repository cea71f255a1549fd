//! Layer rendering for a display.
//!
//! A display is drawn as two stacked text layers inside its container:
//!
//! 1. **Backdrop**: `888` in the dim color, so every unlit segment stays faintly
//!    visible.
//! 2. **Active layer**: the current value drawn on top. Leading zeros are dim,
//!    the significant digits (from the first `1..=9` onward) are lit.
//!
//! When focused, a pulsing outline is drawn a few pixels outside the container.
//!
//! # Significant Digit Split
//!
//! [`split_for_render`] is the pure rule deciding which part of the value is
//! lit. It is recomputed on every draw and never cached: the value is three
//! characters, so the scan is trivial.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use embedded_graphics::text::{Baseline, Text};

use crate::config::BACKDROP_TEXT;
use crate::style::{DisplayStyle, FALLBACK_FONT, GlyphFace, OutlineStyle};

// =============================================================================
// Significant Digit Split
// =============================================================================

/// A value split into its dim and lit parts.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RenderSplit<'a> {
    /// Leading zeros (the whole value when nothing is significant).
    pub dim: &'a str,
    /// From the first significant digit to the end.
    pub lit: &'a str,
}

/// Split `value` at its first `1..=9` character.
pub fn split_for_render(value: &str) -> RenderSplit<'_> {
    match value.find(|c: char| matches!(c, '1'..='9')) {
        Some(idx) => {
            let (dim, lit) = value.split_at(idx);
            RenderSplit { dim, lit }
        }
        None => RenderSplit { dim: value, lit: "" },
    }
}

// =============================================================================
// Layout Helpers
// =============================================================================

/// Size of the container for `digits` glyphs.
#[inline]
pub const fn content_size(
    digits: usize,
    style: &DisplayStyle,
) -> Size {
    Size::new(style.advance() * digits as u32, style.font.glyph_size.height)
}

/// Area covered by a container and its focus outline.
#[inline]
pub fn footprint(
    bounds: Rectangle,
    outline: &OutlineStyle,
) -> Rectangle {
    bounds.offset(outline.extent() as i32)
}

// =============================================================================
// Drawing
// =============================================================================

/// Fill `area` with the style background.
pub fn clear_area<D>(
    display: &mut D,
    area: Rectangle,
    background: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    area.into_styled(PrimitiveStyle::with_fill(background)).draw(display)
}

/// Draw one character into its glyph cell.
fn draw_glyph_cell<D>(
    display: &mut D,
    c: char,
    origin: Point,
    color: Rgb565,
    style: &DisplayStyle,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if style.face == GlyphFace::Segments && style.font.draw_glyph(c, origin, color, display)? {
        return Ok(());
    }

    // Monospace fallback, centered in the cell
    let cell = style.font.cell_size();
    let glyph = FALLBACK_FONT.character_size;
    let inset = Point::new(
        (cell.width.saturating_sub(glyph.width) / 2) as i32,
        (cell.height.saturating_sub(glyph.height) / 2) as i32,
    );

    let mut buf = [0u8; 4];
    let text = c.encode_utf8(&mut buf);
    Text::with_baseline(text, origin + inset, MonoTextStyle::new(FALLBACK_FONT, color), Baseline::Top).draw(display)?;
    Ok(())
}

/// Draw `text` one glyph per cell starting at `origin`.
///
/// Returns the origin of the cell after the last glyph.
pub fn draw_text_layer<D>(
    display: &mut D,
    text: &str,
    origin: Point,
    color: Rgb565,
    style: &DisplayStyle,
) -> Result<Point, D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let step = Point::new(style.advance() as i32, 0);
    let mut cursor = origin;
    for c in text.chars() {
        draw_glyph_cell(display, c, cursor, color, style)?;
        cursor += step;
    }
    Ok(cursor)
}

/// Draw the all-segments backdrop layer.
pub fn draw_backdrop<D>(
    display: &mut D,
    origin: Point,
    style: &DisplayStyle,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_text_layer(display, BACKDROP_TEXT, origin, style.dim, style).map(|_| ())
}

/// Draw the value layer: leading zeros dim, significant digits lit.
pub fn draw_active_layer<D>(
    display: &mut D,
    value: &str,
    origin: Point,
    style: &DisplayStyle,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let split = split_for_render(value);
    let next = draw_text_layer(display, split.dim, origin, style.dim, style)?;
    draw_text_layer(display, split.lit, next, style.lit, style)?;
    Ok(())
}

/// Draw the focus outline around `bounds`.
pub fn draw_focus_outline<D>(
    display: &mut D,
    bounds: Rectangle,
    color: Rgb565,
    outline: &OutlineStyle,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let stroke = PrimitiveStyleBuilder::new()
        .stroke_color(color)
        .stroke_width(outline.width)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    footprint(bounds, outline).into_styled(stroke).draw(display)
}

// =============================================================================
// Focus Pulse
// =============================================================================

/// Outline color `elapsed_ms` into the pulse animation.
///
/// Linear ramp from `color` to `pulse_color` over the first half of the period
/// and back over the second half.
pub fn focus_outline_color(
    elapsed_ms: u32,
    outline: &OutlineStyle,
) -> Rgb565 {
    let half = (outline.period_ms / 2).max(1);
    let phase = elapsed_ms % (half * 2);
    let ramp = if phase < half { phase } else { half * 2 - phase };
    // Fixed-point: 8 bits fractional
    let t_fixed = ramp * 256 / half;
    lerp_rgb565(outline.color, outline.pulse_color, t_fixed)
}

/// Linear interpolation between two Rgb565 colors, `t_fixed` in `0..=256`.
fn lerp_rgb565(
    from: Rgb565,
    to: Rgb565,
    t_fixed: u32,
) -> Rgb565 {
    let t = t_fixed.min(256) as i32;
    let mix = |a: u8, b: u8| -> u8 {
        let a = i32::from(a);
        let b = i32::from(b);
        (a + (b - a) * t / 256) as u8
    };
    Rgb565::new(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}
