//! Desktop simulator hosting seven-segment displays.
//!
//! Opens an SDL window through `embedded-graphics-simulator` and drives a
//! [`Document`](seven_segment_common::Document) from real input:
//!
//! - left mouse button release: click at the pointer position
//! - key press (auto-repeat ignored): key down, by SDL key name
//!
//! Keys whose default action no display prevented run the host shortcuts in
//! [`host::HostAction`]. Set `RUST_LOG=seven_segment_common=trace` to follow
//! listener registration and focus transitions.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod host;
mod layout;
mod overlay;
mod timing;

use std::thread;
use std::time::Instant;

use anyhow::Result;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::MouseButton;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use seven_segment_common::colors::BLACK;
use seven_segment_common::{DocumentEvent, Key};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::host::{Host, HostAction};
use crate::layout::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::timing::FRAME_TIME;

fn main() -> Result<()> {
    init_tracing();

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Seven-Segment Display", &output_settings);

    display.clear(BLACK)?;
    window.update(&display);

    let mut host = Host::new()?;
    info!(displays = host.document().len(), "simulator started");

    let start = Instant::now();

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    info!("window closed");
                    return Ok(());
                }
                SimulatorEvent::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    point,
                } => {
                    host.dispatch(DocumentEvent::Click(point));
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    let name = keycode.name();
                    let outcome = host.dispatch(DocumentEvent::KeyDown(Key::from_name(&name)));
                    if outcome.default_prevented {
                        debug!(key = %name, "default action prevented");
                        continue;
                    }
                    if let Some(action) = HostAction::from_key_name(&name)
                        && host.run(action).is_break()
                    {
                        info!("quit requested");
                        return Ok(());
                    }
                }
                _ => {}
            }
        }

        let elapsed_ms = start.elapsed().as_millis() as u32;
        host.draw(&mut display, elapsed_ms)?;
        window.update(&display);

        let frame_time = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(frame_time) {
            thread::sleep(remaining);
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
