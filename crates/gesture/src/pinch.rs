// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::prelude::*;

/// Maps a live magnification factor to a uniform scale.
///
/// The factor replaces the scale outright; it is never multiplied onto whatever scale the node
/// had before.  Bounds are optional and off by default.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchScale {
    pub min_scale: Option<f32>,
    pub max_scale: Option<f32>,
}

impl PinchScale {
    /// Returns the scale for `factor`, or `None` when the factor is not a usable magnification
    /// (non-finite, zero or negative).
    pub fn scale_for(&self, factor: f32) -> Option<Vec3> {
        if !factor.is_finite() || factor <= 0.0 {
            return None;
        }

        let mut factor = factor;
        if let Some(min) = self.min_scale {
            factor = factor.max(min);
        }
        if let Some(max) = self.max_scale {
            factor = factor.min(max);
        }
        Some(Vec3::splat(factor))
    }
}

/// Turns a stream of incremental magnify deltas (as delivered by touchpads) into the live,
/// per-gesture magnification factor a pinch recognizer would report.
///
/// A gesture starts at factor 1.0.  It ends when the target changes or when no delta has
/// arrived for longer than the idle timeout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnifyTracker<T> {
    idle_timeout: f32,
    session: Option<MagnifySession<T>>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct MagnifySession<T> {
    target: T,
    factor: f32,
    last_seen: f32,
}

impl<T: Copy + PartialEq> MagnifyTracker<T> {
    pub fn new(idle_timeout: f32) -> Self {
        Self {
            idle_timeout,
            session: None,
        }
    }

    /// Applies one delta at time `now` (seconds) and returns the current factor for `target`.
    pub fn accumulate(&mut self, target: T, delta: f32, now: f32) -> Option<f32> {
        if !delta.is_finite() {
            return None;
        }

        let session = match self.session {
            Some(session)
                if session.target == target && now - session.last_seen <= self.idle_timeout =>
            {
                session
            }
            _ => MagnifySession {
                target,
                factor: 1.0,
                last_seen: now,
            },
        };

        let factor = session.factor * (1.0 + delta);
        if !factor.is_finite() || factor <= 0.0 {
            return None;
        }

        self.session = Some(MagnifySession {
            target,
            factor,
            last_seen: now,
        });
        Some(factor)
    }

    /// Forgets the running gesture.
    pub fn reset(&mut self) {
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinch_sets_rather_than_multiplies() {
        let pinch = PinchScale::default();
        // The node was previously cycled up to 1.75; the pinch factor wins outright.
        assert_eq!(pinch.scale_for(0.5), Some(Vec3::splat(0.5)));
    }

    #[test]
    fn malformed_factors_are_ignored() {
        let pinch = PinchScale::default();
        assert_eq!(pinch.scale_for(f32::NAN), None);
        assert_eq!(pinch.scale_for(f32::INFINITY), None);
        assert_eq!(pinch.scale_for(0.0), None);
        assert_eq!(pinch.scale_for(-1.0), None);
    }

    #[test]
    fn optional_bounds_clamp() {
        let pinch = PinchScale {
            min_scale: Some(0.25),
            max_scale: Some(3.0),
        };
        assert_eq!(pinch.scale_for(0.1), Some(Vec3::splat(0.25)));
        assert_eq!(pinch.scale_for(10.0), Some(Vec3::splat(3.0)));
        assert_eq!(pinch.scale_for(2.0), Some(Vec3::splat(2.0)));
    }

    #[test]
    fn tracker_accumulates_within_a_gesture() {
        let mut tracker = MagnifyTracker::new(0.25);
        assert_eq!(tracker.accumulate(1u32, 0.5, 0.0), Some(1.5));
        assert_eq!(tracker.accumulate(1u32, 1.0, 0.1), Some(3.0));
    }

    #[test]
    fn tracker_restarts_after_idle_or_new_target() {
        let mut tracker = MagnifyTracker::new(0.25);
        tracker.accumulate(1u32, 1.0, 0.0);
        assert_eq!(tracker.accumulate(1u32, 0.5, 1.0), Some(1.5));
        assert_eq!(tracker.accumulate(2u32, -0.5, 1.1), Some(0.5));
        tracker.reset();
        assert_eq!(tracker.accumulate(2u32, 0.0, 1.2), Some(1.0));
    }

    #[test]
    fn tracker_rejects_collapse() {
        let mut tracker = MagnifyTracker::new(0.25);
        assert_eq!(tracker.accumulate(1u32, -1.0, 0.0), None);
        assert_eq!(tracker.accumulate(1u32, f32::NAN, 0.0), None);
        // Nothing was recorded, so the next delta starts a fresh gesture.
        assert_eq!(tracker.accumulate(1u32, 0.0, 0.0), Some(1.0));
    }
}

// End of File
