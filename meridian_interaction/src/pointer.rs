// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer interactions and the dispatcher that routes pointer sequences to them.
//!
//! ## Usage
//!
//! 1) Implement [`PointerInteraction`] for each gesture, or use a ready-made
//!    one such as [`crate::DragRotateAndZoom`].
//! 2) Register interactions with [`PointerDispatcher::add`].
//! 3) Feed every pointer event to [`PointerDispatcher::dispatch`] (or
//!    [`PointerDispatcher::dispatch_ui_event`]) together with the view.
//!
//! A down event is offered to the most recently added interactions first.
//! The first interaction that accepts it captures the sequence and receives
//! the following drag and up events; the others do not see them. A sequence
//! that ends without an up event ([`PointerDispatcher::cancel`]) reaches the
//! capturing interaction as [`PointerInteraction::handle_cancel`].

use alloc::{boxed::Box, vec::Vec};

use kurbo::Size;
use ui_events::pointer::PointerEvent;

use crate::event::{MapPointerEvent, PointerPhase};

/// A gesture driven by one down / drag / up pointer sequence.
///
/// `V` is the view the gesture manipulates.
pub trait PointerInteraction<V: ?Sized> {
    /// Handles a down event.
    ///
    /// Returns `true` to capture the sequence, so that subsequent drag and up
    /// events are routed here.
    fn handle_down(&mut self, event: &MapPointerEvent, view: &mut V) -> bool;

    /// Handles a drag event of a captured sequence.
    fn handle_drag(&mut self, event: &MapPointerEvent, view: &mut V);

    /// Handles an up event of a captured sequence.
    ///
    /// Returns `true` to keep the capture while other pointers are still
    /// pressed, `false` to release it.
    fn handle_up(&mut self, event: &MapPointerEvent, view: &mut V) -> bool;

    /// Handles the loss of a captured sequence that will never see its up event.
    ///
    /// Interactions that started something on the view in
    /// [`Self::handle_down`] should wind it down here.
    fn handle_cancel(&mut self, _view: &mut V) {}
}

/// Handle to an interaction registered with a [`PointerDispatcher`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InteractionId(usize);

struct Slot<V: ?Sized> {
    interaction: Box<dyn PointerInteraction<V>>,
    enabled: bool,
    capturing: bool,
}

/// Routes pointer sequences to registered [`PointerInteraction`]s.
pub struct PointerDispatcher<V: ?Sized> {
    slots: Vec<Slot<V>>,
    pressed: usize,
}

impl<V: ?Sized> core::fmt::Debug for PointerDispatcher<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PointerDispatcher")
            .field("interactions", &self.slots.len())
            .field("pressed", &self.pressed)
            .field("capturing", &self.is_capturing())
            .finish()
    }
}

impl<V: ?Sized> Default for PointerDispatcher<V> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            pressed: 0,
        }
    }
}

impl<V: ?Sized> PointerDispatcher<V> {
    /// Creates a dispatcher with no interactions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an interaction; it is enabled immediately.
    pub fn add(&mut self, interaction: impl PointerInteraction<V> + 'static) -> InteractionId {
        self.slots.push(Slot {
            interaction: Box::new(interaction),
            enabled: true,
            capturing: false,
        });
        InteractionId(self.slots.len() - 1)
    }

    /// Number of registered interactions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no interaction is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Enables or disables an interaction.
    ///
    /// Disabling a capturing interaction cancels its sequence through
    /// [`PointerInteraction::handle_cancel`]. Unknown ids are ignored.
    pub fn set_enabled(&mut self, id: InteractionId, enabled: bool, view: &mut V) {
        let Some(slot) = self.slots.get_mut(id.0) else {
            return;
        };
        slot.enabled = enabled;
        if !enabled && slot.capturing {
            slot.capturing = false;
            slot.interaction.handle_cancel(view);
            log::trace!("interaction {} disabled while capturing", id.0);
        }
    }

    /// Returns whether an interaction is enabled, or `None` for unknown ids.
    #[must_use]
    pub fn is_enabled(&self, id: InteractionId) -> Option<bool> {
        self.slots.get(id.0).map(|slot| slot.enabled)
    }

    /// Returns `true` while some interaction holds the current sequence.
    #[must_use]
    pub fn is_capturing(&self) -> bool {
        self.slots.iter().any(|slot| slot.capturing)
    }

    /// Number of pointers currently pressed, as seen by this dispatcher.
    #[must_use]
    pub fn pressed(&self) -> usize {
        self.pressed
    }

    /// Routes one event, returning `true` if an interaction consumed it.
    pub fn dispatch(&mut self, event: &MapPointerEvent, view: &mut V) -> bool {
        match event.phase {
            PointerPhase::Down => {
                self.pressed = self.pressed.saturating_add(1);
                for (index, slot) in self.slots.iter_mut().enumerate().rev() {
                    if !slot.enabled || slot.capturing {
                        continue;
                    }
                    if slot.interaction.handle_down(event, view) {
                        slot.capturing = true;
                        log::trace!("interaction {index} captured pointer sequence");
                        return true;
                    }
                }
                false
            }
            PointerPhase::Drag => {
                let mut consumed = false;
                for slot in self.slots.iter_mut().filter(|slot| slot.capturing) {
                    slot.interaction.handle_drag(event, view);
                    consumed = true;
                }
                consumed
            }
            PointerPhase::Up => {
                self.pressed = self.pressed.saturating_sub(1);
                let pressed = self.pressed;
                let mut consumed = false;
                for (index, slot) in self.slots.iter_mut().enumerate() {
                    if !slot.capturing {
                        continue;
                    }
                    consumed = true;
                    slot.capturing = slot.interaction.handle_up(event, view) && pressed > 0;
                    if !slot.capturing {
                        log::trace!("interaction {index} released pointer sequence");
                    }
                }
                consumed
            }
        }
    }

    /// Converts a `ui-events` pointer event and routes it.
    ///
    /// [`PointerEvent::Cancel`] cancels the current sequence; other events
    /// without a [`MapPointerEvent`] counterpart are ignored.
    pub fn dispatch_ui_event(&mut self, event: &PointerEvent, size: Size, view: &mut V) -> bool {
        if let PointerEvent::Cancel(_) = event {
            let was_capturing = self.is_capturing();
            self.cancel(view);
            return was_capturing;
        }
        match MapPointerEvent::from_ui_event(event, size) {
            Some(event) => self.dispatch(&event, view),
            None => false,
        }
    }

    /// Drops every capture and forgets pressed pointers.
    ///
    /// Each capturing interaction gets [`PointerInteraction::handle_cancel`]
    /// so it can hand the view back in a settled state.
    pub fn cancel(&mut self, view: &mut V) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.capturing {
                slot.capturing = false;
                slot.interaction.handle_cancel(view);
                log::trace!("interaction {index} cancelled");
            }
        }
        self.pressed = 0;
    }
}
