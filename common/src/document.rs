//! Host document for seven-segment displays.
//!
//! The [`Document`] plays the part of the page the displays live in:
//!
//! - it mounts displays into parent regions ([`Document::create`]),
//! - it keeps a table of document-wide listeners, one click listener and one
//!   keydown listener per display, and delivers every event to every listener
//!   of the matching kind in registration order ([`Document::dispatch`]),
//! - it draws mounted displays and erases destroyed ones ([`Document::draw`]).
//!
//! # Listener Lifetime
//!
//! Registering a listener returns a [`ListenerId`] that disposes it again.
//! [`Document::destroy`] disposes both listeners of a display before
//! unmounting it, so destroyed displays never see another event.
//!
//! # Capacity
//!
//! Tables are fixed-size `heapless` vectors ([`MAX_DISPLAYS`] displays and
//! [`MAX_LISTENERS`] listeners). Running out of room is the only error a
//! document reports, and a failed `create` leaves the document untouched.

use core::fmt;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;
use thiserror::Error;
use tracing::{debug, trace};

use crate::colors::BLACK;
use crate::config::{LISTENERS_PER_DISPLAY, MAX_DISPLAYS, MAX_LISTENERS};
use crate::display::SevenSegmentDisplay;
use crate::event::{DispatchOutcome, DocumentEvent, KeyOutcome};
use crate::render::clear_area;
use crate::style::{self, Injection};

// =============================================================================
// Identifiers
// =============================================================================

/// Handle to a display mounted in a [`Document`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DisplayId(u32);

impl fmt::Display for DisplayId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Disposer key for a registered listener.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ListenerId(u32);

/// Which events a listener receives.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ListenerKind {
    Click,
    KeyDown,
}

impl ListenerKind {
    /// Listener kind that receives `event`.
    #[inline]
    pub const fn for_event(event: &DocumentEvent) -> Self {
        match event {
            DocumentEvent::Click(_) => Self::Click,
            DocumentEvent::KeyDown(_) => Self::KeyDown,
        }
    }
}

/// Errors reported by a [`Document`].
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
pub enum DocumentError {
    #[error("document already hosts the maximum of {max} displays")]
    DisplayLimit { max: usize },

    #[error("document listener table is full ({max} listeners)")]
    ListenerLimit { max: usize },
}

// =============================================================================
// Document
// =============================================================================

#[derive(Clone, Copy, Debug)]
struct Listener {
    id: ListenerId,
    kind: ListenerKind,
    owner: DisplayId,
}

#[derive(Debug)]
struct Mounted {
    id: DisplayId,
    display: SevenSegmentDisplay,
    listeners: [ListenerId; LISTENERS_PER_DISPLAY],
}

/// Page hosting seven-segment displays.
pub struct Document {
    mounted: Vec<Mounted, MAX_DISPLAYS>,
    listeners: Vec<Listener, MAX_LISTENERS>,
    /// Footprints of destroyed displays still visible on screen.
    erased: Vec<Rectangle, MAX_DISPLAYS>,
    /// Clear the whole target on the next draw.
    full_redraw: bool,
    next_id: u32,
    background: Rgb565,
}

impl Document {
    /// Create an empty document with a black background.
    pub const fn new() -> Self {
        Self {
            mounted: Vec::new(),
            listeners: Vec::new(),
            erased: Vec::new(),
            full_redraw: true,
            next_id: 1,
            background: BLACK,
        }
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Mount a new display inside `parent`.
    ///
    /// Installs the shared display style on first use and registers the
    /// display's click and keydown listeners.
    pub fn create(
        &mut self,
        parent: Rectangle,
    ) -> Result<DisplayId, DocumentError> {
        if self.mounted.is_full() {
            return Err(DocumentError::DisplayLimit { max: MAX_DISPLAYS });
        }
        if MAX_LISTENERS - self.listeners.len() < LISTENERS_PER_DISPLAY {
            return Err(DocumentError::ListenerLimit { max: MAX_LISTENERS });
        }

        if style::inject() == Injection::Installed {
            trace!("first display mounted, shared style installed");
        }

        let id = DisplayId(self.allocate_id());
        let listeners = [
            self.add_listener(ListenerKind::Click, id)?,
            self.add_listener(ListenerKind::KeyDown, id)?,
        ];
        let display = SevenSegmentDisplay::new(parent, style::shared());
        let bounds = display.bounds();

        self.mounted
            .push(Mounted { id, display, listeners })
            .map_err(|_| DocumentError::DisplayLimit { max: MAX_DISPLAYS })?;

        debug!(%id, x = bounds.top_left.x, y = bounds.top_left.y, "display mounted");
        Ok(id)
    }

    /// Unmount a display and dispose its listeners.
    ///
    /// Returns `false` if `id` is not mounted. The shared style stays
    /// installed.
    pub fn destroy(
        &mut self,
        id: DisplayId,
    ) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };

        let mounted = self.mounted.remove(idx);
        for listener in mounted.listeners {
            self.remove_listener(listener);
        }

        if self.erased.push(mounted.display.footprint()).is_err() {
            self.full_redraw = true;
        }

        debug!(%id, listeners = self.listeners.len(), "display destroyed");
        true
    }

    // -------------------------------------------------------------------------
    // Listeners
    // -------------------------------------------------------------------------

    /// Register a document-wide listener delivering `kind` events to `owner`.
    pub fn add_listener(
        &mut self,
        kind: ListenerKind,
        owner: DisplayId,
    ) -> Result<ListenerId, DocumentError> {
        let id = ListenerId(self.allocate_id());
        self.listeners
            .push(Listener { id, kind, owner })
            .map_err(|_| DocumentError::ListenerLimit { max: MAX_LISTENERS })?;
        trace!(?kind, %owner, "listener registered");
        Ok(id)
    }

    /// Dispose a listener. Returns `false` if it was already gone.
    pub fn remove_listener(
        &mut self,
        id: ListenerId,
    ) -> bool {
        match self.listeners.iter().position(|l| l.id == id) {
            Some(idx) => {
                // Keep registration order for the remaining listeners
                self.listeners.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Number of registered listeners.
    #[inline]
    pub fn listener_count(&self) -> usize { self.listeners.len() }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Deliver `event` to every listener of the matching kind.
    pub fn dispatch(
        &mut self,
        event: DocumentEvent,
    ) -> DispatchOutcome {
        let kind = ListenerKind::for_event(&event);
        let mut outcome = DispatchOutcome::default();

        for listener in self.listeners.iter().filter(|l| l.kind == kind) {
            let Some(mounted) = self.mounted.iter_mut().find(|m| m.id == listener.owner) else {
                continue;
            };
            outcome.delivered += 1;

            match event {
                DocumentEvent::Click(point) => mounted.display.handle_click(point),
                DocumentEvent::KeyDown(key) => {
                    if mounted.display.handle_key(key) == KeyOutcome::DefaultPrevented {
                        outcome.default_prevented = true;
                    }
                }
            }
        }

        trace!(?event, delivered = outcome.delivered, prevented = outcome.default_prevented, "event dispatched");
        outcome
    }

    // -------------------------------------------------------------------------
    // Access
    // -------------------------------------------------------------------------

    pub fn display(
        &self,
        id: DisplayId,
    ) -> Option<&SevenSegmentDisplay> {
        self.mounted.iter().find(|m| m.id == id).map(|m| &m.display)
    }

    pub fn display_mut(
        &mut self,
        id: DisplayId,
    ) -> Option<&mut SevenSegmentDisplay> {
        self.mounted.iter_mut().find(|m| m.id == id).map(|m| &mut m.display)
    }

    /// Ids of mounted displays, oldest first.
    pub fn ids(&self) -> impl Iterator<Item = DisplayId> + '_ { self.mounted.iter().map(|m| m.id) }

    #[inline]
    pub fn len(&self) -> usize { self.mounted.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.mounted.is_empty() }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Clear the whole target and redraw every display on the next draw.
    pub fn invalidate(&mut self) { self.full_redraw = true; }

    /// Erase destroyed displays and redraw displays that changed.
    pub fn draw<D>(
        &mut self,
        display: &mut D,
        elapsed_ms: u32,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if self.full_redraw {
            display.clear(self.background)?;
            self.erased.clear();
            for mounted in self.mounted.iter_mut() {
                mounted.display.invalidate();
            }
            self.full_redraw = false;
        }

        for area in self.erased.iter() {
            clear_area(display, *area, self.background)?;
            // Displays overlapping an erased area must repaint their pixels
            for mounted in self.mounted.iter_mut().filter(|m| overlaps(m.display.footprint(), *area)) {
                mounted.display.invalidate();
            }
        }
        self.erased.clear();

        for mounted in self.mounted.iter_mut() {
            if mounted.display.needs_redraw() {
                mounted.display.draw(display, elapsed_ms)?;
            }
        }
        Ok(())
    }

    fn position(
        &self,
        id: DisplayId,
    ) -> Option<usize> {
        self.mounted.iter().position(|m| m.id == id)
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }
}

impl Default for Document {
    fn default() -> Self { Self::new() }
}

fn overlaps(
    a: Rectangle,
    b: Rectangle,
) -> bool {
    let common = a.intersection(&b);
    common.size.width > 0 && common.size.height > 0
}
