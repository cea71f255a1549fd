//! In-memory draw target for rendering tests.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PointsIter, Rectangle};

/// Frame buffer that records the last color written to every pixel.
pub struct Canvas {
    size: Size,
    pixels: Vec<Option<Rgb565>>,
}

impl Canvas {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![None; (size.width * size.height) as usize],
        }
    }

    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<Rgb565> {
        self.index(point).and_then(|idx| self.pixels[idx])
    }

    /// Number of pixels currently holding `color`.
    pub fn count(
        &self,
        color: Rgb565,
    ) -> usize {
        self.pixels.iter().filter(|p| **p == Some(color)).count()
    }

    /// Whether any pixel inside `area` holds `color`.
    pub fn any_in(
        &self,
        area: Rectangle,
        color: Rgb565,
    ) -> bool {
        area.points().any(|p| self.pixel(p) == Some(color))
    }

    fn index(
        &self,
        point: Point,
    ) -> Option<usize> {
        let in_bounds = point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.size.width
            && (point.y as u32) < self.size.height;
        in_bounds.then(|| point.y as usize * self.size.width as usize + point.x as usize)
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for Canvas {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(idx) = self.index(point) {
                self.pixels[idx] = Some(color);
            }
        }
        Ok(())
    }
}
