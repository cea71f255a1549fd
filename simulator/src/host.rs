//! Simulator host: the document, its event log and the host shortcuts.
//!
//! Every event first goes to the document. Shortcuts only run when no display
//! prevented the key's default action, so digits typed into a focused display
//! never trigger them.

use std::ops::ControlFlow;

use anyhow::{Context, Result};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{ContainsPoint, Rectangle};
use seven_segment_common::event_log::EventLog;
use seven_segment_common::{DispatchOutcome, DisplayId, Document, DocumentEvent};
use tracing::{info, warn};

use crate::layout::REGIONS;
use crate::overlay::draw_event_log;

/// Increment applied by [`HostAction::SetAll`]; large enough to overflow
/// three digits after a few presses.
const COUNTER_STEP: u32 = 123;

const HELP_LINE: &str = "click=focus 0-9=type Esc=blur N D V F B Q";

/// Host default action bound to a key.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HostAction {
    Quit,
    DestroyNewest,
    Mount,
    SetAll,
    FocusFirst,
    BlurAll,
}

impl HostAction {
    /// Shortcut for an SDL key name, if any.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Q" => Some(Self::Quit),
            "D" => Some(Self::DestroyNewest),
            "N" => Some(Self::Mount),
            "V" => Some(Self::SetAll),
            "F" => Some(Self::FocusFirst),
            "B" => Some(Self::BlurAll),
            _ => None,
        }
    }
}

/// Snapshot of one display used to log what an event changed.
struct Snapshot {
    id: DisplayId,
    focused: bool,
    value: String,
}

pub struct Host {
    document: Document,
    log: EventLog,
    counter: u32,
}

impl Host {
    /// Create a document with one display in every region.
    pub fn new() -> Result<Self> {
        let mut host = Self {
            document: Document::new(),
            log: EventLog::new(),
            counter: 0,
        };
        for (index, region) in REGIONS.iter().enumerate() {
            let id = host
                .document
                .create(*region)
                .with_context(|| format!("mounting display in region {index}"))?;
            host.log.push_fmt(format_args!("{id} mounted"));
        }
        host.log.push(HELP_LINE);
        Ok(host)
    }

    pub fn document(&self) -> &Document { &self.document }

    pub fn log(&self) -> &EventLog { &self.log }

    /// Deliver an event and log focus and value changes it caused.
    pub fn dispatch(
        &mut self,
        event: DocumentEvent,
    ) -> DispatchOutcome {
        let before = self.snapshot();
        let outcome = self.document.dispatch(event);
        self.log_changes(&before);
        outcome
    }

    /// Run a host shortcut. `Break` means the simulator should exit.
    pub fn run(
        &mut self,
        action: HostAction,
    ) -> ControlFlow<()> {
        info!(?action, "host action");
        match action {
            HostAction::Quit => return ControlFlow::Break(()),
            HostAction::DestroyNewest => self.destroy_newest(),
            HostAction::Mount => self.mount_in_free_region(),
            HostAction::SetAll => self.set_all(),
            HostAction::FocusFirst => self.focus_first(),
            HostAction::BlurAll => {
                let before = self.snapshot();
                for id in self.ids() {
                    if let Some(display) = self.document.display_mut(id) {
                        display.blur();
                    }
                }
                self.log_changes(&before);
            }
        }
        ControlFlow::Continue(())
    }

    /// Draw the displays and the event log strip.
    pub fn draw<D>(
        &mut self,
        display: &mut D,
        elapsed_ms: u32,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.document.draw(display, elapsed_ms)?;
        draw_event_log(display, &self.log)
    }

    // -------------------------------------------------------------------------
    // Shortcuts
    // -------------------------------------------------------------------------

    fn destroy_newest(&mut self) {
        match self.document.ids().last() {
            Some(id) => {
                self.document.destroy(id);
                self.log.push_fmt(format_args!("{id} destroyed"));
            }
            None => self.log.push("nothing to destroy"),
        }
    }

    fn mount_in_free_region(&mut self) {
        let occupied = |region: &Rectangle| {
            self.document
                .ids()
                .filter_map(|id| self.document.display(id))
                .any(|display| region.contains(display.bounds().top_left))
        };
        let Some(region) = REGIONS.iter().find(|region| !occupied(region)).copied() else {
            self.log.push("no free region");
            return;
        };

        match self.document.create(region) {
            Ok(id) => self.log.push_fmt(format_args!("{id} mounted")),
            Err(err) => {
                warn!(%err, "mount failed");
                self.log.push_fmt(format_args!("mount failed: {err}"));
            }
        }
    }

    fn set_all(&mut self) {
        self.counter = self.counter.wrapping_add(COUNTER_STEP);
        let counter = self.counter;
        for id in self.ids() {
            if let Some(display) = self.document.display_mut(id) {
                display.set_value(counter);
                self.log.push_fmt(format_args!("{id} set {counter} -> {}", display.value()));
            }
        }
    }

    fn focus_first(&mut self) {
        let Some(id) = self.document.ids().next() else {
            self.log.push("nothing to focus");
            return;
        };
        let before = self.snapshot();
        if let Some(display) = self.document.display_mut(id) {
            display.focus();
        }
        self.log_changes(&before);
    }

    // -------------------------------------------------------------------------
    // Change log
    // -------------------------------------------------------------------------

    fn ids(&self) -> Vec<DisplayId> { self.document.ids().collect() }

    fn snapshot(&self) -> Vec<Snapshot> {
        self.document
            .ids()
            .filter_map(|id| {
                self.document.display(id).map(|display| Snapshot {
                    id,
                    focused: display.is_focused(),
                    value: display.value().to_owned(),
                })
            })
            .collect()
    }

    fn log_changes(
        &mut self,
        before: &[Snapshot],
    ) {
        for old in before {
            let Some(display) = self.document.display(old.id) else {
                continue;
            };
            if display.is_focused() != old.focused {
                let verb = if display.is_focused() { "focused" } else { "blurred" };
                self.log.push_fmt(format_args!("{} {verb}", old.id));
            }
            if display.value() != old.value {
                self.log.push_fmt(format_args!("{} {} -> {}", old.id, old.value, display.value()));
            }
        }
    }
}
