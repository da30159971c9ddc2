// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The view capabilities interactions drive.

use core::time::Duration;

/// Which way the resolution was moving when a gesture was released.
///
/// Views use this to decide which zoom level to settle on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseDirection {
    /// The last adjustment scaled the resolution up (`+1`).
    Increase,
    /// The last adjustment scaled the resolution down, or there was none (`-1`).
    Decrease,
}

impl ReleaseDirection {
    /// Derives the direction from the last resolution ratio applied during a gesture.
    #[must_use]
    pub fn from_scale_delta(scale_delta: f64) -> Self {
        if scale_delta > 1.0 {
            Self::Increase
        } else {
            Self::Decrease
        }
    }

    /// Returns `+1` for [`Self::Increase`] and `-1` for [`Self::Decrease`].
    #[must_use]
    pub fn sign(self) -> i32 {
        match self {
            Self::Increase => 1,
            Self::Decrease => -1,
        }
    }
}

/// A view that pointer interactions can rotate and zoom.
///
/// Implementations own the actual rotation / resolution state and whatever
/// animation runs after [`InteractionTarget::end_interaction`].
pub trait InteractionTarget {
    /// Marks the start of a user manipulation.
    fn begin_interaction(&mut self);

    /// Marks the end of a user manipulation.
    ///
    /// `duration` is how long the settling animation should take and
    /// `direction` biases which way the resolution settles.
    fn end_interaction(&mut self, duration: Duration, direction: ReleaseDirection);

    /// Rotates by `delta` radians.
    fn adjust_rotation(&mut self, delta: f64);

    /// Multiplies the resolution by `ratio`.
    fn adjust_resolution(&mut self, ratio: f64);
}

#[cfg(feature = "view_adapter")]
impl InteractionTarget for meridian_view::MapView {
    fn begin_interaction(&mut self) {
        Self::begin_interaction(self);
    }

    /// Ends the interaction on the view.
    ///
    /// [`ReleaseDirection::Increase`] settles on the next coarser zoom level,
    /// [`ReleaseDirection::Decrease`] on the next finer one.
    fn end_interaction(&mut self, duration: Duration, direction: ReleaseDirection) {
        let snap = match direction {
            ReleaseDirection::Increase => meridian_view::SnapDirection::Coarser,
            ReleaseDirection::Decrease => meridian_view::SnapDirection::Finer,
        };
        Self::end_interaction(self, duration, snap);
    }

    fn adjust_rotation(&mut self, delta: f64) {
        Self::adjust_rotation(self, delta);
    }

    fn adjust_resolution(&mut self, ratio: f64) {
        Self::adjust_resolution(self, ratio);
    }
}
