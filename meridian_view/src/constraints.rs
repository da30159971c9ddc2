// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::{PI, TAU};

/// Relative tolerance under which a resolution counts as sitting on a zoom level.
const LEVEL_TOLERANCE: f64 = 1e-9;

/// Which way a resolution should be snapped onto the zoom level ladder.
///
/// Used by [`crate::MapView::end_interaction`] and
/// [`ResolutionConstraint::snap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SnapDirection {
    /// Snap to the closest level (in log space).
    #[default]
    Nearest,
    /// Snap to the closest level with a resolution at least as large (zoomed out).
    Coarser,
    /// Snap to the closest level with a resolution at most as large (zoomed in).
    Finer,
}

impl SnapDirection {
    /// Returns the sign convention for this direction: `+1` coarser, `-1` finer, `0` nearest.
    #[must_use]
    pub fn sign(self) -> i32 {
        match self {
            Self::Nearest => 0,
            Self::Coarser => 1,
            Self::Finer => -1,
        }
    }
}

/// Discrete ladder of resolutions a [`crate::MapView`] settles on.
///
/// Level `z` has resolution `max_resolution / zoom_factor^z`, for `z` in
/// `0..=max_zoom`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolutionConstraint {
    max_resolution: f64,
    zoom_factor: f64,
    max_zoom: u32,
}

impl ResolutionConstraint {
    /// Map units per pixel at zoom level 0 for 256 pixel Web Mercator tiles.
    pub const WEB_MERCATOR_MAX_RESOLUTION: f64 = 156_543.033_928_040_97;

    /// Default number of zoom levels below level 0.
    pub const DEFAULT_MAX_ZOOM: u32 = 28;

    /// Creates a constraint from the coarsest resolution, the ratio between
    /// adjacent levels and the deepest level.
    ///
    /// A non-positive or non-finite `max_resolution` falls back to
    /// [`Self::WEB_MERCATOR_MAX_RESOLUTION`]; a `zoom_factor` not greater than
    /// one falls back to `2.0`.
    #[must_use]
    pub fn new(max_resolution: f64, zoom_factor: f64, max_zoom: u32) -> Self {
        let max_resolution = if max_resolution.is_finite() && max_resolution > 0.0 {
            max_resolution
        } else {
            Self::WEB_MERCATOR_MAX_RESOLUTION
        };
        let zoom_factor = if zoom_factor.is_finite() && zoom_factor > 1.0 {
            zoom_factor
        } else {
            2.0
        };
        Self {
            max_resolution,
            zoom_factor,
            max_zoom,
        }
    }

    /// Coarsest allowed resolution (level 0).
    #[must_use]
    pub fn max_resolution(&self) -> f64 {
        self.max_resolution
    }

    /// Finest allowed resolution (level `max_zoom`).
    #[must_use]
    pub fn min_resolution(&self) -> f64 {
        self.level_resolution(self.max_zoom)
    }

    /// Ratio between adjacent levels.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Deepest zoom level.
    #[must_use]
    pub fn max_zoom(&self) -> u32 {
        self.max_zoom
    }

    /// Resolution of the given level; levels past `max_zoom` are clamped.
    #[must_use]
    pub fn level_resolution(&self, level: u32) -> f64 {
        let mut resolution = self.max_resolution;
        for _ in 0..level.min(self.max_zoom) {
            resolution /= self.zoom_factor;
        }
        resolution
    }

    /// Clamps a resolution into `[min_resolution, max_resolution]`.
    #[must_use]
    pub fn clamp(&self, resolution: f64) -> f64 {
        resolution.clamp(self.min_resolution(), self.max_resolution)
    }

    /// Snaps a resolution onto a level, moving in `direction` when it falls
    /// between two levels.
    #[must_use]
    pub fn snap(&self, resolution: f64, direction: SnapDirection) -> f64 {
        let resolution = self.clamp(resolution);
        let mut upper = self.max_resolution;
        for _ in 0..self.max_zoom {
            if (resolution - upper).abs() <= upper * LEVEL_TOLERANCE {
                return upper;
            }
            let lower = upper / self.zoom_factor;
            if resolution > lower * (1.0 + LEVEL_TOLERANCE) {
                return match direction {
                    SnapDirection::Coarser => upper,
                    SnapDirection::Finer => lower,
                    SnapDirection::Nearest => {
                        // Compare distances in log space without taking logs.
                        if upper / resolution <= resolution / lower {
                            upper
                        } else {
                            lower
                        }
                    }
                };
            }
            upper = lower;
        }
        upper
    }
}

impl Default for ResolutionConstraint {
    fn default() -> Self {
        Self::new(
            Self::WEB_MERCATOR_MAX_RESOLUTION,
            2.0,
            Self::DEFAULT_MAX_ZOOM,
        )
    }
}

/// How the view rotation is constrained when an interaction settles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RotationConstraint {
    /// Any rotation is allowed; settled rotations are only wrapped into `(-π, π]`.
    Free,
    /// Rotations within `tolerance` radians of north snap back to zero once no
    /// interaction is in progress.
    SnapToZero {
        /// Snap tolerance in radians.
        tolerance: f64,
    },
    /// Rotation is pinned to zero.
    Disabled,
}

impl RotationConstraint {
    /// Default snap tolerance: five degrees.
    pub const DEFAULT_SNAP_TOLERANCE: f64 = PI / 36.0;

    /// Applies the constraint to `rotation`.
    ///
    /// Once no interaction is in progress, rotations are wrapped into
    /// `(-π, π]` before [`Self::SnapToZero`] compares them with its
    /// tolerance, so whole turns do not defeat the snap. While `interacting`,
    /// rotations pass through untouched so that a gesture near north does not
    /// feel sticky.
    #[must_use]
    pub fn apply(&self, rotation: f64, interacting: bool) -> f64 {
        if *self == Self::Disabled {
            return 0.0;
        }
        if interacting {
            return rotation;
        }
        let rotation = wrap_rotation(rotation);
        match *self {
            Self::SnapToZero { tolerance } if rotation.abs() <= tolerance => 0.0,
            _ => rotation,
        }
    }
}

/// Wraps an angle into `(-π, π]`.
fn wrap_rotation(rotation: f64) -> f64 {
    let wrapped = rotation % TAU;
    if wrapped > PI {
        wrapped - TAU
    } else if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

impl Default for RotationConstraint {
    fn default() -> Self {
        Self::SnapToZero {
            tolerance: Self::DEFAULT_SNAP_TOLERANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI, TAU};

    use super::{ResolutionConstraint, RotationConstraint, SnapDirection};

    fn ladder() -> ResolutionConstraint {
        ResolutionConstraint::new(1024.0, 2.0, 10)
    }

    #[test]
    fn level_resolutions_follow_zoom_factor() {
        let c = ladder();
        assert_eq!(c.level_resolution(0), 1024.0);
        assert_eq!(c.level_resolution(3), 128.0);
        assert_eq!(c.min_resolution(), 1.0);
        // Past the deepest level is clamped.
        assert_eq!(c.level_resolution(40), 1.0);
    }

    #[test]
    fn invalid_parameters_fall_back() {
        let c = ResolutionConstraint::new(-1.0, 0.5, 4);
        assert_eq!(
            c.max_resolution(),
            ResolutionConstraint::WEB_MERCATOR_MAX_RESOLUTION
        );
        assert_eq!(c.zoom_factor(), 2.0);
    }

    #[test]
    fn snap_between_levels_honours_direction() {
        let c = ladder();
        // 96 sits between 128 and 64.
        assert_eq!(c.snap(96.0, SnapDirection::Coarser), 128.0);
        assert_eq!(c.snap(96.0, SnapDirection::Finer), 64.0);
        // 100 is closer to 128 than to 64 in log space (128/100 < 100/64).
        assert_eq!(c.snap(100.0, SnapDirection::Nearest), 128.0);
        assert_eq!(c.snap(70.0, SnapDirection::Nearest), 64.0);
    }

    #[test]
    fn snap_keeps_values_already_on_a_level() {
        let c = ladder();
        for direction in [
            SnapDirection::Nearest,
            SnapDirection::Coarser,
            SnapDirection::Finer,
        ] {
            assert_eq!(c.snap(256.0, direction), 256.0);
            assert_eq!(c.snap(256.0 * (1.0 + 1e-12), direction), 256.0);
            assert_eq!(c.snap(1.0, direction), 1.0);
            assert_eq!(c.snap(1024.0, direction), 1024.0);
        }
    }

    #[test]
    fn snap_clamps_out_of_range_values() {
        let c = ladder();
        assert_eq!(c.snap(1e9, SnapDirection::Finer), 1024.0);
        assert_eq!(c.snap(1e-9, SnapDirection::Coarser), 1.0);
    }

    #[test]
    fn snap_direction_signs() {
        assert_eq!(SnapDirection::Coarser.sign(), 1);
        assert_eq!(SnapDirection::Finer.sign(), -1);
        assert_eq!(SnapDirection::Nearest.sign(), 0);
    }

    #[test]
    fn rotation_snaps_to_zero_only_when_settled() {
        let c = RotationConstraint::default();
        let small = RotationConstraint::DEFAULT_SNAP_TOLERANCE / 2.0;
        assert_eq!(c.apply(small, true), small);
        assert_eq!(c.apply(small, false), 0.0);
        assert_eq!(c.apply(-small, false), 0.0);
        assert_eq!(c.apply(1.0, false), 1.0);

        assert_eq!(RotationConstraint::Free.apply(small, false), small);
        assert_eq!(RotationConstraint::Disabled.apply(1.0, true), 0.0);
    }

    #[test]
    fn settled_rotation_wraps_whole_turns() {
        let c = RotationConstraint::default();
        // A full turn plus a little ends up back on north.
        assert_eq!(c.apply(TAU + 0.01, false), 0.0);
        assert_eq!(c.apply(-TAU - 0.01, false), 0.0);
        // Mid-gesture the accumulated angle is left alone.
        assert_eq!(c.apply(TAU + 0.01, true), TAU + 0.01);

        let free = RotationConstraint::Free;
        assert!((free.apply(3.0 * FRAC_PI_2, false) + FRAC_PI_2).abs() < 1e-12);
        assert_eq!(free.apply(PI, false), PI);
        assert_eq!(free.apply(-PI, false), PI);
        assert!((free.apply(5.0 * TAU + 1.0, false) - 1.0).abs() < 1e-12);
    }
}
