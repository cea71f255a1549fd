//! Seven-segment numeric display widget.
//!
//! This crate contains the platform-agnostic widget code used by the desktop
//! simulator (and any other `DrawTarget<Color = Rgb565>` host):
//!
//! - [`value`]: the fixed-width 3-character display value
//! - [`focus`]: focused/unfocused state machine
//! - [`display`]: the widget itself
//! - [`document`]: host model owning widgets and document-wide listeners
//! - [`event`]: click and key events delivered by the host
//! - [`render`]: layer rendering and the significant-digit split
//! - [`segments`]: seven-segment glyph font
//! - [`style`]: shared presentation rules, installed once per process
//! - [`colors`]: RGB565 color constants
//! - [`config`]: geometry and capacity constants
//! - [`event_log`]: on-screen ring buffer of recent events
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests and never allocates. Tests run on the
//! host with `std` enabled (via `cfg_attr`) so the standard harness is available.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod display;
pub mod document;
pub mod event;
pub mod event_log;
pub mod focus;
pub mod render;
pub mod segments;
pub mod style;
pub mod value;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use display::SevenSegmentDisplay;
pub use document::{DisplayId, Document, DocumentError, ListenerId, ListenerKind};
pub use event::{DispatchOutcome, DocumentEvent, Key, KeyOutcome};
pub use focus::{FocusEffect, FocusState, FocusTrigger};
pub use value::DisplayValue;
