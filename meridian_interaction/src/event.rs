// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer events as seen by map interactions.
//!
//! A [`MapPointerEvent`] is a flattened view of a `ui-events` pointer event
//! plus the viewport size it happened in. Interactions read the pixel
//! position relative to the viewport, the device kind, the button and the
//! modifier keys from it.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use meridian_interaction::event::MapPointerEvent;
//!
//! let size = Size::new(200.0, 100.0);
//! let event = MapPointerEvent::drag(Point::new(150.0, 20.0), size);
//!
//! assert_eq!(event.viewport_center(), Point::new(100.0, 50.0));
//! // Offsets are y-up: the pointer is right of and above the center.
//! let offset = event.center_offset();
//! assert_eq!((offset.x, offset.y), (50.0, 30.0));
//! ```

use kurbo::{Point, Size, Vec2};
use ui_events::{
    keyboard::Modifiers,
    pointer::{PointerButton, PointerEvent, PointerType},
};

/// Where in a down / drag / up sequence an event sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// A button was pressed.
    Down,
    /// The pointer moved.
    Drag,
    /// A button was released.
    Up,
}

/// A pointer event delivered to map interactions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapPointerEvent {
    /// Position in the sequence.
    pub phase: PointerPhase,
    /// Pointer position in logical viewport pixels.
    pub pixel: Point,
    /// Viewport size in logical pixels.
    pub size: Size,
    /// Device that produced the event.
    pub pointer_type: PointerType,
    /// Button that changed state, if any. Moves carry `None`.
    pub button: Option<PointerButton>,
    /// Modifier keys held at the time of the event.
    pub modifiers: Modifiers,
}

impl MapPointerEvent {
    /// Creates an event from a primary mouse button with no modifiers.
    ///
    /// Drag events carry no button.
    #[must_use]
    pub fn new(phase: PointerPhase, pixel: Point, size: Size) -> Self {
        let button = match phase {
            PointerPhase::Down | PointerPhase::Up => Some(PointerButton::Primary),
            PointerPhase::Drag => None,
        };
        Self {
            phase,
            pixel,
            size,
            pointer_type: PointerType::Mouse,
            button,
            modifiers: Modifiers::empty(),
        }
    }

    /// Shorthand for [`Self::new`] with [`PointerPhase::Down`].
    #[must_use]
    pub fn down(pixel: Point, size: Size) -> Self {
        Self::new(PointerPhase::Down, pixel, size)
    }

    /// Shorthand for [`Self::new`] with [`PointerPhase::Drag`].
    #[must_use]
    pub fn drag(pixel: Point, size: Size) -> Self {
        Self::new(PointerPhase::Drag, pixel, size)
    }

    /// Shorthand for [`Self::new`] with [`PointerPhase::Up`].
    #[must_use]
    pub fn up(pixel: Point, size: Size) -> Self {
        Self::new(PointerPhase::Up, pixel, size)
    }

    /// Replaces the device kind.
    #[must_use]
    pub fn with_pointer_type(mut self, pointer_type: PointerType) -> Self {
        self.pointer_type = pointer_type;
        self
    }

    /// Replaces the button.
    #[must_use]
    pub fn with_button(mut self, button: Option<PointerButton>) -> Self {
        self.button = button;
        self
    }

    /// Replaces the modifier keys.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Converts a `ui-events` pointer event that happened in a viewport of `size`.
    ///
    /// Only down, move and up events have a counterpart; everything else
    /// yields `None`.
    #[must_use]
    pub fn from_ui_event(event: &PointerEvent, size: Size) -> Option<Self> {
        match event {
            PointerEvent::Down(e) => Some(Self {
                phase: PointerPhase::Down,
                pixel: e.state.logical_point(),
                size,
                pointer_type: e.pointer.pointer_type,
                button: e.button,
                modifiers: e.state.modifiers,
            }),
            PointerEvent::Move(e) => Some(Self {
                phase: PointerPhase::Drag,
                pixel: e.current.logical_point(),
                size,
                pointer_type: e.pointer.pointer_type,
                button: None,
                modifiers: e.current.modifiers,
            }),
            PointerEvent::Up(e) => Some(Self {
                phase: PointerPhase::Up,
                pixel: e.state.logical_point(),
                size,
                pointer_type: e.pointer.pointer_type,
                button: e.button,
                modifiers: e.state.modifiers,
            }),
            _ => None,
        }
    }

    /// Returns `true` if a mouse produced the event.
    #[must_use]
    pub fn is_mouse(&self) -> bool {
        self.pointer_type == PointerType::Mouse
    }

    /// Returns the viewport center `(width / 2, height / 2)`.
    #[must_use]
    pub fn viewport_center(&self) -> Point {
        Point::new(self.size.width / 2.0, self.size.height / 2.0)
    }

    /// Returns the vector from the viewport center to the pointer, with y pointing up.
    #[must_use]
    pub fn center_offset(&self) -> Vec2 {
        let center = self.viewport_center();
        Vec2::new(self.pixel.x - center.x, center.y - self.pixel.y)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Point, Size};
    use ui_events::{
        keyboard::Modifiers,
        pointer::{
            PointerButton, PointerButtonEvent, PointerEvent, PointerId, PointerInfo, PointerState,
            PointerType, PointerUpdate,
        },
    };

    use super::{MapPointerEvent, PointerPhase};

    fn info(pointer_type: PointerType) -> PointerInfo {
        PointerInfo {
            pointer_id: Some(PointerId::PRIMARY),
            persistent_device_id: None,
            pointer_type,
        }
    }

    /// A state at physical `(x, y)` on a display with the given scale factor.
    fn state(x: f64, y: f64, scale_factor: f64, modifiers: Modifiers) -> PointerState {
        PointerState {
            position: (x, y).into(),
            scale_factor,
            modifiers,
            ..PointerState::default()
        }
    }

    #[test]
    fn constructors_default_to_primary_mouse() {
        let size = Size::new(100.0, 100.0);
        let down = MapPointerEvent::down(Point::ZERO, size);
        assert_eq!(down.phase, PointerPhase::Down);
        assert!(down.is_mouse());
        assert_eq!(down.button, Some(PointerButton::Primary));
        assert!(down.modifiers.is_empty());

        let drag = MapPointerEvent::drag(Point::ZERO, size);
        assert_eq!(drag.phase, PointerPhase::Drag);
        assert_eq!(drag.button, None);

        let up = MapPointerEvent::up(Point::ZERO, size);
        assert_eq!(up.phase, PointerPhase::Up);
        assert_eq!(up.button, Some(PointerButton::Primary));
    }

    #[test]
    fn builders_override_defaults() {
        let event = MapPointerEvent::down(Point::ZERO, Size::new(10.0, 10.0))
            .with_pointer_type(PointerType::Touch)
            .with_button(Some(PointerButton::Secondary))
            .with_modifiers(Modifiers::SHIFT);
        assert!(!event.is_mouse());
        assert_eq!(event.button, Some(PointerButton::Secondary));
        assert!(event.modifiers.shift());
    }

    #[test]
    fn center_offset_is_y_up() {
        let size = Size::new(200.0, 200.0);
        let above = MapPointerEvent::drag(Point::new(100.0, 0.0), size).center_offset();
        assert_eq!((above.x, above.y), (0.0, 100.0));

        let right = MapPointerEvent::drag(Point::new(200.0, 100.0), size).center_offset();
        assert_eq!((right.x, right.y), (100.0, 0.0));

        let below_left = MapPointerEvent::drag(Point::new(50.0, 150.0), size).center_offset();
        assert_eq!((below_left.x, below_left.y), (-50.0, -50.0));
    }

    #[test]
    fn ui_button_events_keep_device_button_and_modifiers() {
        let size = Size::new(400.0, 300.0);
        let down = PointerEvent::Down(PointerButtonEvent {
            button: Some(PointerButton::Secondary),
            pointer: info(PointerType::Pen),
            state: state(300.0, 100.0, 2.0, Modifiers::SHIFT),
        });

        let event = MapPointerEvent::from_ui_event(&down, size).unwrap();
        assert_eq!(event.phase, PointerPhase::Down);
        // Physical pixels are scaled down to logical ones.
        assert_eq!(event.pixel, Point::new(150.0, 50.0));
        assert_eq!(event.size, size);
        assert_eq!(event.pointer_type, PointerType::Pen);
        assert_eq!(event.button, Some(PointerButton::Secondary));
        assert!(event.modifiers.shift());

        let up = PointerEvent::Up(PointerButtonEvent {
            button: Some(PointerButton::Primary),
            pointer: info(PointerType::Mouse),
            state: state(40.0, 60.0, 1.0, Modifiers::empty()),
        });
        let event = MapPointerEvent::from_ui_event(&up, size).unwrap();
        assert_eq!(event.phase, PointerPhase::Up);
        assert_eq!(event.pixel, Point::new(40.0, 60.0));
        assert_eq!(event.button, Some(PointerButton::Primary));
        assert!(event.is_mouse());
    }

    #[test]
    fn ui_move_becomes_buttonless_drag() {
        let moved = PointerEvent::Move(PointerUpdate {
            pointer: info(PointerType::Mouse),
            current: state(50.0, 80.0, 2.0, Modifiers::ALT),
            coalesced: Vec::new(),
            predicted: Vec::new(),
        });

        let event = MapPointerEvent::from_ui_event(&moved, Size::new(100.0, 100.0)).unwrap();
        assert_eq!(event.phase, PointerPhase::Drag);
        assert_eq!(event.pixel, Point::new(25.0, 40.0));
        assert_eq!(event.button, None);
        assert!(event.modifiers.alt());
    }

    #[test]
    fn other_ui_events_have_no_counterpart() {
        let size = Size::new(100.0, 100.0);
        let mouse = info(PointerType::Mouse);
        for event in [
            PointerEvent::Cancel(mouse),
            PointerEvent::Enter(mouse),
            PointerEvent::Leave(mouse),
        ] {
            assert_eq!(MapPointerEvent::from_ui_event(&event, size), None);
        }
    }
}
