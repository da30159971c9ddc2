// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotate and zoom a map by dragging around the viewport center.
//!
//! While the gesture is active, each drag sample is turned into a vector from
//! the viewport center to the pointer. Changes in the vector's bearing rotate
//! the view; changes in its length scale the resolution by the ratio of the
//! previous length to the current one. On release, the view is told which way
//! the resolution was last moving so it can settle on a zoom level in that
//! direction.
//!
//! The gesture only reacts to primary-button mouse input, and by default only
//! starts while shift (and no other modifier) is held.

use alloc::rc::Rc;
use core::time::Duration;

use crate::condition::{Condition, mouse_primary_only, shift_key_only};
use crate::event::MapPointerEvent;
use crate::pointer::PointerInteraction;
use crate::target::{InteractionTarget, ReleaseDirection};

/// Bearing and distance of the pointer from the viewport center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSample {
    /// Bearing in radians, counter-clockwise from the positive x axis, y up.
    pub angle: f64,
    /// Distance in pixels.
    pub magnitude: f64,
}

impl DragSample {
    /// Samples the pointer position of `event` relative to its viewport center.
    #[must_use]
    pub fn from_event(event: &MapPointerEvent) -> Self {
        let offset = event.center_offset();
        Self {
            angle: offset.atan2(),
            magnitude: offset.hypot(),
        }
    }
}

/// Drag-to-rotate-and-zoom interaction.
///
/// ```
/// use core::time::Duration;
/// use meridian_interaction::DragRotateAndZoom;
/// use meridian_interaction::condition::alt_shift_keys_only;
///
/// let interaction = DragRotateAndZoom::new()
///     .condition(alt_shift_keys_only)
///     .duration(Duration::from_millis(250));
/// assert_eq!(interaction.animation_duration(), Duration::from_millis(250));
/// assert!(interaction.last_sample().is_none());
/// ```
#[derive(Clone)]
pub struct DragRotateAndZoom {
    condition: Rc<Condition>,
    duration: Duration,
    last_sample: Option<DragSample>,
    last_scale_delta: f64,
}

impl core::fmt::Debug for DragRotateAndZoom {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DragRotateAndZoom")
            .field("condition", &"<function>")
            .field("duration", &self.duration)
            .field("last_sample", &self.last_sample)
            .field("last_scale_delta", &self.last_scale_delta)
            .finish()
    }
}

impl Default for DragRotateAndZoom {
    fn default() -> Self {
        Self {
            condition: Rc::new(shift_key_only),
            duration: Self::DEFAULT_DURATION,
            last_sample: None,
            last_scale_delta: 0.0,
        }
    }
}

impl DragRotateAndZoom {
    /// Settling animation duration used unless configured otherwise.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(400);

    /// Creates the interaction with the default condition ([`shift_key_only`])
    /// and duration ([`Self::DEFAULT_DURATION`]).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the condition a down event must satisfy to start the gesture.
    #[must_use]
    pub fn condition<F>(mut self, condition: F) -> Self
    where
        F: Fn(&MapPointerEvent) -> bool + 'static,
    {
        self.condition = Rc::new(condition);
        self
    }

    /// Replaces the duration of the settling animation requested on release.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Duration of the settling animation requested on release.
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        self.duration
    }

    /// The previous drag sample of the current gesture, if any.
    #[must_use]
    pub fn last_sample(&self) -> Option<DragSample> {
        self.last_sample
    }

    /// Bearing of the previous drag sample, in radians.
    #[must_use]
    pub fn last_angle(&self) -> Option<f64> {
        self.last_sample.map(|sample| sample.angle)
    }

    /// Distance of the previous drag sample from the viewport center, in pixels.
    #[must_use]
    pub fn last_magnitude(&self) -> Option<f64> {
        self.last_sample.map(|sample| sample.magnitude)
    }

    /// Resolution ratio applied by the most recent drag sample; `0.0` when
    /// none has been applied since the last release.
    #[must_use]
    pub fn last_scale_delta(&self) -> f64 {
        self.last_scale_delta
    }
}

impl<V: InteractionTarget + ?Sized> PointerInteraction<V> for DragRotateAndZoom {
    fn handle_down(&mut self, event: &MapPointerEvent, view: &mut V) -> bool {
        if !mouse_primary_only(event) || !(self.condition)(event) {
            return false;
        }
        view.begin_interaction();
        self.last_sample = None;
        log::debug!(
            "drag-rotate-and-zoom started in a {}x{} viewport",
            event.size.width,
            event.size.height
        );
        true
    }

    fn handle_drag(&mut self, event: &MapPointerEvent, view: &mut V) {
        if !mouse_primary_only(event) {
            return;
        }
        let sample = DragSample::from_event(event);
        if let Some(last) = self.last_sample {
            view.adjust_rotation(last.angle - sample.angle);
            let ratio = last.magnitude / sample.magnitude;
            view.adjust_resolution(ratio);
            self.last_scale_delta = ratio;
            log::trace!(
                "drag sample: angle {}, magnitude {}, ratio {ratio}",
                sample.angle,
                sample.magnitude
            );
        }
        self.last_sample = Some(sample);
    }

    fn handle_up(&mut self, event: &MapPointerEvent, view: &mut V) -> bool {
        // Non-mouse releases keep the capture alive.
        if !mouse_primary_only(event) {
            return true;
        }
        let direction = ReleaseDirection::from_scale_delta(self.last_scale_delta);
        view.end_interaction(self.duration, direction);
        self.last_scale_delta = 0.0;
        log::debug!(
            "drag-rotate-and-zoom released: direction {}, duration {:?}",
            direction.sign(),
            self.duration
        );
        false
    }

    fn handle_cancel(&mut self, view: &mut V) {
        // Settle the view as a release would, so its interaction count stays balanced.
        let direction = ReleaseDirection::from_scale_delta(self.last_scale_delta);
        view.end_interaction(self.duration, direction);
        self.last_scale_delta = 0.0;
        log::debug!(
            "drag-rotate-and-zoom cancelled: direction {}",
            direction.sign()
        );
    }
}
