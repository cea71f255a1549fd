//! Ring buffer of recent host events for on-screen display.
//!
//! Hosts push one short line per interesting event (display mounted, focus
//! changed, value typed) and draw the buffer in a strip below the displays.
//! Lines are stored in fixed-size `heapless` strings, so formatting a line
//! never allocates.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = EventLog::new();
//! log.push("display #1 mounted");
//! log.push_fmt(format_args!("#{} -> {}", 1, "005"));
//!
//! for line in log.iter() {
//!     println!("{}", line);
//! }
//! ```

use core::fmt::{self, Write};

use heapless::{Deque, String};

// =============================================================================
// Event Log Configuration
// =============================================================================

/// Maximum number of lines kept in the ring buffer.
pub const EVENT_LOG_LINES: usize = 3;

/// Maximum characters per line.
pub const EVENT_LOG_LINE_LENGTH: usize = 52;

// =============================================================================
// Event Log Ring Buffer
// =============================================================================

/// Last [`EVENT_LOG_LINES`] event lines, oldest first.
pub struct EventLog {
    buffer: Deque<String<EVENT_LOG_LINE_LENGTH>, EVENT_LOG_LINES>,
}

impl EventLog {
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a line, dropping the oldest one when full.
    ///
    /// Lines longer than [`EVENT_LOG_LINE_LENGTH`] bytes are cut at the last
    /// char boundary that fits.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        let mut line = LineWriter::default();
        // LineWriter truncates instead of failing
        line.write_str(msg).ok();
        self.push_line(line.text);
    }

    /// Format and push a line.
    pub fn push_fmt(
        &mut self,
        args: fmt::Arguments<'_>,
    ) {
        let mut line = LineWriter::default();
        line.write_fmt(args).ok();
        self.push_line(line.text);
    }

    /// Iterate over lines (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(heapless::string::StringInner::as_str) }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    fn push_line(
        &mut self,
        line: String<EVENT_LOG_LINE_LENGTH>,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        self.buffer.push_back(line).ok();
    }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

/// Sink that keeps as many whole chars as fit in one line.
#[derive(Default)]
struct LineWriter {
    text: String<EVENT_LOG_LINE_LENGTH>,
    full: bool,
}

impl Write for LineWriter {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.full || self.text.push(c).is_err() {
                self.full = true;
                break;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
