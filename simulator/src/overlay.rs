//! Event log strip below the displays.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use seven_segment_common::colors::{SEGMENT_DIM, SEGMENT_LIT, WHITE};
use seven_segment_common::event_log::EventLog;

use crate::layout::{LOG_LINE_HEIGHT, LOG_STRIP_Y, LOG_X, SCREEN_HEIGHT, SCREEN_WIDTH};

const STRIP_BG: Rgb565 = Rgb565::new(1, 2, 1);
const PROMPT_COLOR: Rgb565 = SEGMENT_LIT;
const TEXT_COLOR: Rgb565 = WHITE;
const DIVIDER_COLOR: Rgb565 = SEGMENT_DIM;

/// Baseline offset of the first line below the divider.
const FIRST_LINE_OFFSET: i32 = 11;

/// Redraw the log strip with the current log lines, oldest at the top.
pub fn draw_event_log<D>(
    display: &mut D,
    log: &EventLog,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let prompt_style = MonoTextStyle::new(&FONT_6X10, PROMPT_COLOR);
    let text_style = MonoTextStyle::new(&FONT_6X10, TEXT_COLOR);

    Rectangle::new(
        Point::new(0, LOG_STRIP_Y),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_STRIP_Y as u32),
    )
    .into_styled(PrimitiveStyle::with_fill(STRIP_BG))
    .draw(display)?;

    Line::new(Point::new(2, LOG_STRIP_Y), Point::new(SCREEN_WIDTH as i32 - 2, LOG_STRIP_Y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)?;

    let mut y = LOG_STRIP_Y + FIRST_LINE_OFFSET;
    for line in log.iter() {
        Text::new(">", Point::new(LOG_X, y), prompt_style).draw(display)?;
        Text::new(line, Point::new(LOG_X + 10, y), text_style).draw(display)?;
        y += LOG_LINE_HEIGHT;
    }
    Ok(())
}
