// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Meridian View: a headless 2D map view.
//!
//! This crate provides a small model of what a map shows: a viewport size in
//! pixels, a world‑space center, a resolution (map units per pixel) and a
//! rotation. It focuses on:
//! - Coordinate conversion between map coordinates and viewport pixels.
//! - Incremental rotate / zoom while a user interaction is in progress.
//! - Settling onto discrete zoom levels and a north‑up rotation once the
//!   interaction ends.
//!
//! It does **not** render or animate. When an interaction ends, the view
//! records the target of the settling animation as a [`ViewAnimation`] and
//! callers step it however they like (or jump to it with
//! [`MapView::finish_animation`]).
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Size};
//! use meridian_view::{MapView, SnapDirection};
//!
//! let mut view = MapView::new(Size::new(800.0, 600.0));
//! view.set_center(Point::new(1_000.0, 2_000.0));
//!
//! // A user gesture: rotate a little and zoom in part of a level.
//! view.begin_interaction();
//! view.adjust_rotation(0.5);
//! view.adjust_resolution(0.75);
//! view.end_interaction(Duration::from_millis(400), SnapDirection::Coarser);
//!
//! let animation = view.take_pending_animation().unwrap();
//! assert_eq!(animation.duration, Duration::from_millis(400));
//! assert_eq!(animation.rotation, 0.5);
//! ```
//!
//! ## Design notes
//!
//! - Resolution grows when zooming out; zoom levels form a geometric ladder
//!   described by [`ResolutionConstraint`].
//! - Positive rotation turns the map clockwise on screen.
//! - Snapping only happens when the last interaction ends, so gestures are
//!   never fighting the constraints mid‑drag.
//!
//! This crate is `no_std`.

#![no_std]

mod constraints;
mod view;

pub use constraints::{ResolutionConstraint, RotationConstraint, SnapDirection};
pub use view::{MapView, MapViewDebugInfo, ViewAnimation};
