// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Affine, Point, Size};

use crate::constraints::{ResolutionConstraint, RotationConstraint, SnapDirection};

/// Target state for the animated snap that follows an interaction.
///
/// The view only records where it wants to end up; stepping the animation is
/// left to the host. See [`MapView::take_pending_animation`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewAnimation {
    /// How long the host should take to reach the target.
    pub duration: Duration,
    /// Resolution to settle on.
    pub resolution: f64,
    /// Rotation to settle on, in radians.
    pub rotation: f64,
}

/// Headless 2D map view.
///
/// `MapView` tracks a viewport size in pixels and a world‑space center,
/// resolution (map units per pixel) and rotation. It can be used to:
/// - Convert points between map coordinates and viewport pixels.
/// - Rotate and zoom incrementally while a user interaction is in progress.
/// - Settle onto the configured zoom levels and rotation once the interaction ends.
#[derive(Clone, Debug)]
pub struct MapView {
    size: Size,
    center: Point,
    resolution: f64,
    rotation: f64,
    resolution_constraint: ResolutionConstraint,
    rotation_constraint: RotationConstraint,
    interactions: u32,
    pending_animation: Option<ViewAnimation>,
    coordinate_to_pixel: Affine,
    pixel_to_coordinate: Affine,
}

impl MapView {
    /// Creates a new view of the given viewport size.
    ///
    /// - Initial center is the world origin.
    /// - Initial resolution is the coarsest level of the default
    ///   [`ResolutionConstraint`].
    /// - Initial rotation is zero.
    #[must_use]
    pub fn new(size: Size) -> Self {
        let resolution_constraint = ResolutionConstraint::default();
        let mut view = Self {
            size,
            center: Point::ZERO,
            resolution: resolution_constraint.max_resolution(),
            rotation: 0.0,
            resolution_constraint,
            rotation_constraint: RotationConstraint::default(),
            interactions: 0,
            pending_animation: None,
            coordinate_to_pixel: Affine::IDENTITY,
            pixel_to_coordinate: Affine::IDENTITY,
        };
        view.rebuild_transforms();
        view
    }

    /// Returns the viewport size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Sets the viewport size in pixels. Empty sizes are ignored.
    pub fn set_size(&mut self, size: Size) {
        if self.size == size || size.width <= 0.0 || size.height <= 0.0 {
            return;
        }
        self.pending_animation = None;
        self.size = size;
        self.rebuild_transforms();
    }

    /// Returns the map coordinate shown at the viewport center.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Recenters the view on a map coordinate.
    pub fn set_center(&mut self, center: Point) {
        if self.center == center {
            return;
        }
        self.pending_animation = None;
        self.center = center;
        self.rebuild_transforms();
    }

    /// Returns the current resolution in map units per pixel.
    #[must_use]
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Sets the resolution, clamping it into the configured range.
    ///
    /// Non‑finite or non‑positive values are ignored.
    pub fn set_resolution(&mut self, resolution: f64) {
        if !resolution.is_finite() || resolution <= 0.0 {
            return;
        }
        self.pending_animation = None;
        self.resolution = self.resolution_constraint.clamp(resolution);
        self.rebuild_transforms();
    }

    /// Returns the current rotation in radians.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Sets the rotation, applying the rotation constraint.
    pub fn set_rotation(&mut self, rotation: f64) {
        if !rotation.is_finite() {
            return;
        }
        self.pending_animation = None;
        self.rotation = self
            .rotation_constraint
            .apply(rotation, self.is_interacting());
        self.rebuild_transforms();
    }

    /// Returns the resolution constraint.
    #[must_use]
    pub fn resolution_constraint(&self) -> ResolutionConstraint {
        self.resolution_constraint
    }

    /// Replaces the resolution constraint; the current resolution is clamped
    /// into the new range.
    pub fn set_resolution_constraint(&mut self, constraint: ResolutionConstraint) {
        self.pending_animation = None;
        self.resolution_constraint = constraint;
        self.resolution = constraint.clamp(self.resolution);
        self.rebuild_transforms();
    }

    /// Returns the rotation constraint.
    #[must_use]
    pub fn rotation_constraint(&self) -> RotationConstraint {
        self.rotation_constraint
    }

    /// Replaces the rotation constraint and re‑applies it to the current rotation.
    pub fn set_rotation_constraint(&mut self, constraint: RotationConstraint) {
        self.pending_animation = None;
        self.rotation_constraint = constraint;
        self.rotation = constraint.apply(self.rotation, self.is_interacting());
        self.rebuild_transforms();
    }

    /// Marks the start of a user interaction.
    ///
    /// Interactions nest; the view counts as interacting until every
    /// [`Self::begin_interaction`] has been matched by
    /// [`Self::end_interaction`].
    pub fn begin_interaction(&mut self) {
        self.pending_animation = None;
        self.interactions = self.interactions.saturating_add(1);
    }

    /// Marks the end of a user interaction and settles the view.
    ///
    /// The resolution snaps onto a zoom level in `direction` and the rotation
    /// constraint is applied. When the settled state differs from the current
    /// one it is either applied immediately (zero `duration`) or recorded as a
    /// pending [`ViewAnimation`].
    pub fn end_interaction(&mut self, duration: Duration, direction: SnapDirection) {
        self.interactions = self.interactions.saturating_sub(1);
        self.resolve_constraints(duration, direction);
    }

    /// Returns `true` while at least one interaction is in progress.
    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.interactions > 0
    }

    /// Rotates the view by `delta` radians.
    ///
    /// No snapping happens here; see [`Self::end_interaction`].
    pub fn adjust_rotation(&mut self, delta: f64) {
        if !delta.is_finite() || self.rotation_constraint == RotationConstraint::Disabled {
            return;
        }
        self.pending_animation = None;
        self.rotation += delta;
        self.rebuild_transforms();
    }

    /// Multiplies the resolution by `ratio`, clamped into the allowed range.
    ///
    /// A ratio above one zooms out. Non‑finite or non‑positive ratios are ignored.
    pub fn adjust_resolution(&mut self, ratio: f64) {
        if !ratio.is_finite() || ratio <= 0.0 {
            return;
        }
        self.pending_animation = None;
        self.resolution = self.resolution_constraint.clamp(self.resolution * ratio);
        self.rebuild_transforms();
    }

    /// Returns the snap animation recorded by the last [`Self::end_interaction`], if any.
    #[must_use]
    pub fn pending_animation(&self) -> Option<ViewAnimation> {
        self.pending_animation
    }

    /// Hands the pending snap animation to the caller, leaving none behind.
    pub fn take_pending_animation(&mut self) -> Option<ViewAnimation> {
        self.pending_animation.take()
    }

    /// Jumps straight to the target of the pending animation.
    ///
    /// Returns `false` if nothing was pending.
    pub fn finish_animation(&mut self) -> bool {
        let Some(animation) = self.pending_animation.take() else {
            return false;
        };
        self.resolution = animation.resolution;
        self.rotation = animation.rotation;
        self.rebuild_transforms();
        true
    }

    /// Converts a map coordinate into viewport pixels.
    #[must_use]
    pub fn coordinate_to_pixel(&self, coordinate: Point) -> Point {
        self.coordinate_to_pixel * coordinate
    }

    /// Converts viewport pixels into a map coordinate.
    #[must_use]
    pub fn pixel_to_coordinate(&self, pixel: Point) -> Point {
        self.pixel_to_coordinate * pixel
    }

    /// Snapshot of the current view state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> MapViewDebugInfo {
        MapViewDebugInfo {
            size: self.size,
            center: self.center,
            resolution: self.resolution,
            rotation: self.rotation,
            min_resolution: self.resolution_constraint.min_resolution(),
            max_resolution: self.resolution_constraint.max_resolution(),
            rotation_constraint: self.rotation_constraint,
            interacting: self.is_interacting(),
            pending_animation: self.pending_animation,
        }
    }

    fn resolve_constraints(&mut self, duration: Duration, direction: SnapDirection) {
        let resolution = self.resolution_constraint.snap(self.resolution, direction);
        let rotation = self
            .rotation_constraint
            .apply(self.rotation, self.is_interacting());
        log::trace!(
            "resolving view constraints: resolution {} -> {resolution}, rotation {} -> {rotation}",
            self.resolution,
            self.rotation
        );
        if resolution == self.resolution && rotation == self.rotation {
            self.pending_animation = None;
            return;
        }
        if duration.is_zero() {
            self.pending_animation = None;
            self.resolution = resolution;
            self.rotation = rotation;
            self.rebuild_transforms();
        } else {
            self.pending_animation = Some(ViewAnimation {
                duration,
                resolution,
                rotation,
            });
        }
    }

    fn rebuild_transforms(&mut self) {
        let half = self.size.to_vec2() / 2.0;
        let scale = 1.0 / self.resolution;
        // Map → pixel: move center to the origin, rotate, scale with y flipped,
        // then move the origin to the viewport center.
        self.coordinate_to_pixel = Affine::translate(half)
            * Affine::scale_non_uniform(scale, -scale)
            * Affine::rotate(-self.rotation)
            * Affine::translate(-self.center.to_vec2());
        self.pixel_to_coordinate = self.coordinate_to_pixel.inverse();
    }
}

/// Debug snapshot of a [`MapView`] state.
#[derive(Clone, Copy, Debug)]
pub struct MapViewDebugInfo {
    /// Viewport size in pixels.
    pub size: Size,
    /// Map coordinate at the viewport center.
    pub center: Point,
    /// Current resolution in map units per pixel.
    pub resolution: f64,
    /// Current rotation in radians.
    pub rotation: f64,
    /// Finest allowed resolution.
    pub min_resolution: f64,
    /// Coarsest allowed resolution.
    pub max_resolution: f64,
    /// Active rotation constraint.
    pub rotation_constraint: RotationConstraint,
    /// Whether an interaction is in progress.
    pub interacting: bool,
    /// Pending snap animation, if any.
    pub pending_animation: Option<ViewAnimation>,
}
