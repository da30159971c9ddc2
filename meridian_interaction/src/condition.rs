// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event conditions: predicates that decide whether an interaction should
//! react to an event.
//!
//! Every predicate here has the signature of [`Condition`], so plain
//! functions can be handed to interaction builders directly:
//!
//! ```
//! use kurbo::{Point, Size};
//! use meridian_interaction::condition::{all_of, alt_key_only, mouse_only, shift_key_only};
//! use meridian_interaction::event::MapPointerEvent;
//! use ui_events::keyboard::Modifiers;
//!
//! let event = MapPointerEvent::down(Point::ZERO, Size::new(10.0, 10.0))
//!     .with_modifiers(Modifiers::SHIFT);
//! assert!(shift_key_only(&event));
//! assert!(!alt_key_only(&event));
//!
//! let shift_mouse = all_of(shift_key_only, mouse_only);
//! assert!(shift_mouse(&event));
//! ```

use ui_events::pointer::{PointerButton, PointerType};

use crate::event::MapPointerEvent;

/// Predicate over a pointer event.
pub type Condition = dyn Fn(&MapPointerEvent) -> bool;

/// Always matches.
pub fn always(_event: &MapPointerEvent) -> bool {
    true
}

/// Never matches.
pub fn never(_event: &MapPointerEvent) -> bool {
    false
}

/// Matches when no modifier key is held.
pub fn no_modifier_keys(event: &MapPointerEvent) -> bool {
    let m = event.modifiers;
    !m.shift() && !m.alt() && !m.ctrl() && !m.meta()
}

/// Matches when shift is held and alt, ctrl and meta are not.
pub fn shift_key_only(event: &MapPointerEvent) -> bool {
    let m = event.modifiers;
    m.shift() && !m.alt() && !m.ctrl() && !m.meta()
}

/// Matches when alt is held and shift, ctrl and meta are not.
pub fn alt_key_only(event: &MapPointerEvent) -> bool {
    let m = event.modifiers;
    m.alt() && !m.shift() && !m.ctrl() && !m.meta()
}

/// Matches when alt and shift are held and ctrl and meta are not.
pub fn alt_shift_keys_only(event: &MapPointerEvent) -> bool {
    let m = event.modifiers;
    m.alt() && m.shift() && !m.ctrl() && !m.meta()
}

/// Matches mouse input.
pub fn mouse_only(event: &MapPointerEvent) -> bool {
    event.pointer_type == PointerType::Mouse
}

/// Matches touch input.
pub fn touch_only(event: &MapPointerEvent) -> bool {
    event.pointer_type == PointerType::Touch
}

/// Matches pen input.
pub fn pen_only(event: &MapPointerEvent) -> bool {
    event.pointer_type == PointerType::Pen
}

/// Matches events from the primary button, and moves (which carry no button).
pub fn primary_action(event: &MapPointerEvent) -> bool {
    event.button.is_none_or(|button| button == PointerButton::Primary)
}

/// Matches primary-button mouse input; the device filter used by mouse-only interactions.
pub fn mouse_primary_only(event: &MapPointerEvent) -> bool {
    mouse_only(event) && primary_action(event)
}

/// Matches when both conditions match.
pub fn all_of<A, B>(a: A, b: B) -> impl Fn(&MapPointerEvent) -> bool
where
    A: Fn(&MapPointerEvent) -> bool,
    B: Fn(&MapPointerEvent) -> bool,
{
    move |event| a(event) && b(event)
}

/// Matches when either condition matches.
pub fn any_of<A, B>(a: A, b: B) -> impl Fn(&MapPointerEvent) -> bool
where
    A: Fn(&MapPointerEvent) -> bool,
    B: Fn(&MapPointerEvent) -> bool,
{
    move |event| a(event) || b(event)
}
