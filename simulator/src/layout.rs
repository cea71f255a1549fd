//! Screen layout for the simulator window.
//!
//! ```text
//! +--------------------------------+  y = 0
//! |          display region 0      |
//! +--------------------------------+  y = 100
//! |          display region 1      |
//! +--------------------------------+  y = 200
//! | > event log                    |
//! +--------------------------------+  y = 240
//! ```

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

pub const SCREEN_WIDTH: u32 = 320;
pub const SCREEN_HEIGHT: u32 = 240;

/// Height of one parent region a display is mounted into.
pub const REGION_HEIGHT: u32 = 100;

/// Parent regions, top to bottom.
pub const REGIONS: [Rectangle; 2] = [
    Rectangle::new(Point::new(0, 0), Size::new(SCREEN_WIDTH, REGION_HEIGHT)),
    Rectangle::new(Point::new(0, REGION_HEIGHT as i32), Size::new(SCREEN_WIDTH, REGION_HEIGHT)),
];

// Event log strip
pub const LOG_STRIP_Y: i32 = 2 * REGION_HEIGHT as i32;
pub const LOG_LINE_HEIGHT: i32 = 12;
pub const LOG_X: i32 = 4;
