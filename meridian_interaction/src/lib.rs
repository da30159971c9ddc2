// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer interactions for map views.
//!
//! This crate turns pointer down / drag / up sequences into view changes. It
//! is split into a few small pieces:
//! - [`event::MapPointerEvent`]: the event shape interactions see, convertible
//!   from `ui-events` pointer events.
//! - [`condition`]: predicates deciding whether an interaction reacts to an event.
//! - [`PointerInteraction`] and [`PointerDispatcher`]: the down / drag / up
//!   handler protocol and the router that captures a sequence for the
//!   interaction that claims it.
//! - [`InteractionTarget`]: what an interaction needs from a view. With the
//!   `view_adapter` feature (on by default) it is implemented for
//!   `meridian_view::MapView`.
//! - [`DragRotateAndZoom`]: rotate and zoom by dragging around the viewport
//!   center.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use meridian_interaction::{DragRotateAndZoom, PointerDispatcher};
//! use meridian_interaction::event::MapPointerEvent;
//! # #[cfg(feature = "view_adapter")]
//! use meridian_view::MapView;
//! use ui_events::keyboard::Modifiers;
//!
//! # #[cfg(feature = "view_adapter")]
//! # {
//! let size = Size::new(200.0, 200.0);
//! let mut view = MapView::new(size);
//! view.set_resolution(1_000.0);
//!
//! let mut dispatcher = PointerDispatcher::<MapView>::new();
//! dispatcher.add(DragRotateAndZoom::new());
//!
//! // Shift-drag from above the center toward it: halve the distance, zoom out.
//! let down = MapPointerEvent::down(Point::new(100.0, 0.0), size).with_modifiers(Modifiers::SHIFT);
//! assert!(dispatcher.dispatch(&down, &mut view));
//! dispatcher.dispatch(&MapPointerEvent::drag(Point::new(100.0, 0.0), size), &mut view);
//! dispatcher.dispatch(&MapPointerEvent::drag(Point::new(100.0, 50.0), size), &mut view);
//! assert!(view.is_interacting());
//! assert_eq!(view.resolution(), 2_000.0);
//!
//! dispatcher.dispatch(&MapPointerEvent::up(Point::new(100.0, 50.0), size), &mut view);
//! assert!(!view.is_interacting());
//! # }
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

pub mod condition;
pub mod event;
pub mod pointer;

mod drag_rotate_and_zoom;
mod target;

pub use drag_rotate_and_zoom::{DragRotateAndZoom, DragSample};
pub use event::{MapPointerEvent, PointerPhase};
pub use pointer::{InteractionId, PointerDispatcher, PointerInteraction};
pub use target::{InteractionTarget, ReleaseDirection};
