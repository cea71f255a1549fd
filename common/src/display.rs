//! The seven-segment display widget.
//!
//! A [`SevenSegmentDisplay`] owns its value and focus state and knows where its
//! container sits on screen. It never reads input by itself: the hosting
//! [`Document`](crate::document::Document) forwards clicks and key presses to
//! [`handle_click`](SevenSegmentDisplay::handle_click) and
//! [`handle_key`](SevenSegmentDisplay::handle_key).
//!
//! # Redraw Tracking
//!
//! Every change to the value or focus marks the display dirty. A focused
//! display always needs redrawing because its outline pulses.

use core::fmt;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{ContainsPoint, Rectangle};
use tracing::{debug, trace};

use crate::config::DIGIT_COUNT;
use crate::event::{Key, KeyOutcome};
use crate::focus::{FocusEffect, FocusState, FocusTrigger};
use crate::render::{
    clear_area,
    content_size,
    draw_active_layer,
    draw_backdrop,
    draw_focus_outline,
    focus_outline_color,
    footprint,
};
use crate::style::DisplayStyle;
use crate::value::DisplayValue;

/// Seven-segment numeric display with keyboard entry.
#[derive(Clone, Debug)]
pub struct SevenSegmentDisplay {
    bounds: Rectangle,
    value: DisplayValue,
    focus: FocusState,
    style: &'static DisplayStyle,
    dirty: bool,
}

impl SevenSegmentDisplay {
    /// Create a display laid out inside `parent`.
    ///
    /// The container is placed `style.margin` pixels below the parent's top
    /// edge and centered horizontally.
    pub fn new(
        parent: Rectangle,
        style: &'static DisplayStyle,
    ) -> Self {
        Self {
            bounds: container_bounds(parent, style),
            value: DisplayValue::zero(),
            focus: FocusState::Unfocused,
            style,
            dirty: true,
        }
    }

    // -------------------------------------------------------------------------
    // Control API
    // -------------------------------------------------------------------------

    /// Replace the value. Input is coerced, never rejected.
    pub fn set_value<T>(
        &mut self,
        value: T,
    ) where
        T: fmt::Display,
    {
        self.value = DisplayValue::coerce(&value);
        self.dirty = true;
        debug!(value = self.value.as_str(), "display value set");
    }

    /// Current value text.
    #[inline]
    pub fn value(&self) -> &str { self.value.as_str() }

    /// Enter focus, exactly as a click on the container does.
    pub fn focus(&mut self) { self.apply(FocusTrigger::Focus); }

    /// Leave focus, exactly as an outside click or Escape does.
    pub fn blur(&mut self) { self.apply(FocusTrigger::Blur); }

    #[inline]
    pub const fn is_focused(&self) -> bool { self.focus.is_focused() }

    #[inline]
    pub const fn focus_state(&self) -> FocusState { self.focus }

    /// The container rectangle.
    #[inline]
    pub const fn bounds(&self) -> Rectangle { self.bounds }

    /// Area this display paints, container plus focus outline.
    #[inline]
    pub fn footprint(&self) -> Rectangle { footprint(self.bounds, &self.style.outline) }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// React to a click anywhere in the document.
    pub fn handle_click(
        &mut self,
        point: Point,
    ) {
        let trigger = if self.bounds.contains(point) {
            FocusTrigger::ContainerClick
        } else {
            FocusTrigger::OutsideClick
        };
        self.apply(trigger);
    }

    /// React to a key press anywhere in the document.
    pub fn handle_key(
        &mut self,
        key: Key,
    ) -> KeyOutcome {
        if !self.focus.accepts_keys() {
            return KeyOutcome::Ignored;
        }

        if let Some(digit) = key.digit() {
            self.value.shift_in(digit);
            self.dirty = true;
            trace!(digit = %digit, value = self.value.as_str(), "digit entered");
            return KeyOutcome::DefaultPrevented;
        }

        match key {
            Key::Escape => {
                self.apply(FocusTrigger::EscapeKey);
                KeyOutcome::Handled
            }
            _ => KeyOutcome::Ignored,
        }
    }

    fn apply(
        &mut self,
        trigger: FocusTrigger,
    ) {
        let (next, effect) = self.focus.on(trigger);
        self.focus = next;

        match effect {
            Some(FocusEffect::Enter) => {
                self.value = DisplayValue::zero();
                self.dirty = true;
                debug!(?trigger, "display focused");
            }
            Some(FocusEffect::Leave) => {
                self.dirty = true;
                debug!(?trigger, value = self.value.as_str(), "display blurred");
            }
            None => {}
        }
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Whether the next frame must redraw this display.
    #[inline]
    pub const fn needs_redraw(&self) -> bool { self.dirty || self.focus.is_focused() }

    /// Mark the display for redraw on the next frame.
    #[inline]
    pub fn invalidate(&mut self) { self.dirty = true; }

    /// Draw the display. `elapsed_ms` drives the focus outline pulse.
    pub fn draw<D>(
        &mut self,
        display: &mut D,
        elapsed_ms: u32,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let style = self.style;
        let origin = self.bounds.top_left;

        clear_area(display, self.footprint(), style.background)?;
        draw_backdrop(display, origin, style)?;
        draw_active_layer(display, self.value.as_str(), origin, style)?;

        if self.focus.is_focused() {
            let color = focus_outline_color(elapsed_ms, &style.outline);
            draw_focus_outline(display, self.bounds, color, &style.outline)?;
        }

        self.dirty = false;
        Ok(())
    }
}

/// Container rectangle for a display mounted in `parent`.
fn container_bounds(
    parent: Rectangle,
    style: &DisplayStyle,
) -> Rectangle {
    let size = content_size(DIGIT_COUNT, style);
    let x = parent.top_left.x + (parent.size.width.saturating_sub(size.width) / 2) as i32;
    let y = parent.top_left.y + style.margin as i32;
    Rectangle::new(Point::new(x, y), size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{SEGMENT_DIM, SEGMENT_LIT};
    use crate::style::SHARED_STYLE;
    use crate::testing::Canvas;

    const PARENT: Rectangle = Rectangle::new(Point::new(0, 0), Size::new(320, 100));

    fn display() -> SevenSegmentDisplay { SevenSegmentDisplay::new(PARENT, &SHARED_STYLE) }

    fn inside(d: &SevenSegmentDisplay) -> Point { d.bounds().center() }

    fn type_digits(
        d: &mut SevenSegmentDisplay,
        digits: &str,
    ) {
        for c in digits.chars() {
            d.handle_key(Key::from_char(c));
        }
    }

    // -------------------------------------------------------------------------
    // Layout Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_container_centered_below_margin() {
        let d = display();
        let bounds = d.bounds();
        assert_eq!(bounds.top_left.y, SHARED_STYLE.margin as i32);
        assert_eq!(bounds.size, content_size(DIGIT_COUNT, &SHARED_STYLE));

        let left_gap = bounds.top_left.x;
        let right_gap = 320 - (bounds.top_left.x + bounds.size.width as i32);
        assert!((left_gap - right_gap).abs() <= 1, "container should be centered");
    }

    #[test]
    fn test_narrow_parent_clamps_to_left_edge() {
        let parent = Rectangle::new(Point::new(5, 7), Size::new(10, 10));
        let d = SevenSegmentDisplay::new(parent, &SHARED_STYLE);
        assert_eq!(d.bounds().top_left, Point::new(5, 7 + SHARED_STYLE.margin as i32));
    }

    // -------------------------------------------------------------------------
    // Focus Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_initial_state() {
        let d = display();
        assert_eq!(d.value(), "000");
        assert!(!d.is_focused());
        assert!(d.needs_redraw(), "a new display must be drawn once");
    }

    #[test]
    fn test_click_inside_focuses_and_resets() {
        let mut d = display();
        d.set_value(123);
        d.handle_click(inside(&d));
        assert!(d.is_focused());
        assert_eq!(d.value(), "000", "entering focus resets the value");
    }

    #[test]
    fn test_click_outside_blurs_and_keeps_value() {
        let mut d = display();
        d.handle_click(inside(&d));
        type_digits(&mut d, "42");
        d.handle_click(Point::new(0, 0));
        assert!(!d.is_focused());
        assert_eq!(d.value(), "042");
    }

    #[test]
    fn test_escape_blurs_and_keeps_value() {
        let mut d = display();
        d.focus();
        type_digits(&mut d, "7");
        assert_eq!(d.handle_key(Key::Escape), KeyOutcome::Handled);
        assert!(!d.is_focused());
        assert_eq!(d.value(), "007");
    }

    #[test]
    fn test_programmatic_focus_and_blur() {
        let mut d = display();
        d.set_value(9);
        d.focus();
        assert!(d.is_focused());
        assert_eq!(d.value(), "000");
        d.set_value(12);
        d.blur();
        assert!(!d.is_focused());
        assert_eq!(d.value(), "012");
    }

    // -------------------------------------------------------------------------
    // Key Entry Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_digit_entry_sequence() {
        let mut d = display();
        d.handle_click(inside(&d));
        assert_eq!(d.handle_key(Key::Digit('5')), KeyOutcome::DefaultPrevented);
        assert_eq!(d.value(), "005");
        d.handle_key(Key::Digit('3'));
        assert_eq!(d.value(), "053");
        d.handle_key(Key::Digit('0'));
        assert_eq!(d.value(), "530");
    }

    #[test]
    fn test_keys_ignored_while_unfocused() {
        let mut d = display();
        d.set_value(321);
        assert_eq!(d.handle_key(Key::Digit('9')), KeyOutcome::Ignored);
        assert_eq!(d.handle_key(Key::Escape), KeyOutcome::Ignored);
        assert_eq!(d.value(), "321");
    }

    #[test]
    fn test_other_keys_ignored_while_focused() {
        let mut d = display();
        d.focus();
        assert_eq!(d.handle_key(Key::Other), KeyOutcome::Ignored);
        assert!(d.is_focused());
    }

    // -------------------------------------------------------------------------
    // Control API Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_set_value_coerces() {
        let mut d = display();
        d.set_value(7);
        assert_eq!(d.value(), "007");
        d.set_value(12345);
        assert_eq!(d.value(), "345");
        d.set_value("x");
        assert_eq!(d.value(), "00x");
    }

    // -------------------------------------------------------------------------
    // Rendering Tests
    // -------------------------------------------------------------------------

    fn canvas() -> Canvas { Canvas::new(PARENT.size) }

    #[test]
    fn test_draw_clears_dirty_flag() {
        let mut d = display();
        let mut canvas = canvas();
        d.draw(&mut canvas, 0).unwrap();
        assert!(!d.needs_redraw());

        d.set_value(1);
        assert!(d.needs_redraw());
    }

    #[test]
    fn test_focused_display_always_redraws() {
        let mut d = display();
        let mut canvas = canvas();
        d.focus();
        d.draw(&mut canvas, 0).unwrap();
        assert!(d.needs_redraw(), "pulsing outline needs every frame");
    }

    #[test]
    fn test_draw_unfocused_zero_is_dim_only() {
        let mut d = display();
        let mut canvas = canvas();
        d.draw(&mut canvas, 0).unwrap();
        assert!(canvas.count(SEGMENT_DIM) > 0);
        assert_eq!(canvas.count(SEGMENT_LIT), 0);
    }

    #[test]
    fn test_draw_value_lights_segments() {
        let mut d = display();
        let mut canvas = canvas();
        d.set_value(8);
        d.draw(&mut canvas, 0).unwrap();
        assert!(canvas.any_in(d.bounds(), SEGMENT_LIT));
    }

    #[test]
    fn test_outline_only_while_focused() {
        let mut d = display();
        let mut canvas = canvas();
        let corner = d.footprint().top_left;

        d.focus();
        d.draw(&mut canvas, 0).unwrap();
        assert_eq!(canvas.pixel(corner), Some(SEGMENT_LIT), "focused display has an outline");

        d.blur();
        d.draw(&mut canvas, 0).unwrap();
        assert_eq!(canvas.pixel(corner), Some(SHARED_STYLE.background), "blur removes the outline");
    }
}
