// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::prelude::*;

/// Angle added or removed per drag event, in degrees.
pub const DEFAULT_ROTATION_STEP_DEGREES: f32 = 5.0;

/// Decides whether the horizontal drag delta has to be negated before it is turned into a
/// rotation step.
///
/// Two bodies that start on opposite sides of a shared center need opposite conventions, so that
/// dragging towards the right keeps turning the visible near face rightwards after the enclosing
/// view has been spun around.  The rule is evaluated against the node's *current* world-space
/// position on every event, never a cached one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
pub enum FrameInversion {
    /// The delta is never negated.
    #[default]
    Never,
    /// Negate while the node sits at a positive world x (earth-like bodies).
    PositiveX,
    /// Negate while the node sits at a negative world x (moon-like bodies).
    NegativeX,
}

impl FrameInversion {
    pub fn applies(self, world_position: Vec3) -> bool {
        match self {
            FrameInversion::Never => false,
            FrameInversion::PositiveX => world_position.x > 0.0,
            FrameInversion::NegativeX => world_position.x < 0.0,
        }
    }
}

/// Direction of a single drag event after inversion has been applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationStep {
    Increase,
    Decrease,
    Hold,
}

impl RotationStep {
    /// Classifies a horizontal delta by its sign alone.
    pub fn from_delta(delta_x: f32) -> Self {
        if delta_x > 0.0 {
            RotationStep::Increase
        } else if delta_x < 0.0 {
            RotationStep::Decrease
        } else {
            RotationStep::Hold
        }
    }

    fn signum(self) -> i64 {
        match self {
            RotationStep::Increase => 1,
            RotationStep::Decrease => -1,
            RotationStep::Hold => 0,
        }
    }
}

/// Per-target drag state: a running Y rotation built from fixed-size steps, plus the pointer
/// location seen by the previous event.
///
/// The rotation is kept as an integer number of steps so that long sessions never accumulate
/// floating point drift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRotation {
    steps: i64,
    step: f32,
    last_location: Vec2,
}

impl Default for DragRotation {
    fn default() -> Self {
        Self::with_step(DEFAULT_ROTATION_STEP_DEGREES.to_radians())
    }
}

impl DragRotation {
    /// Creates a fresh state whose steps are `step` radians wide.
    pub fn with_step(step: f32) -> Self {
        Self {
            steps: 0,
            step,
            last_location: Vec2::ZERO,
        }
    }

    /// Net number of steps taken so far (positive minus negative events).
    pub fn steps(&self) -> i64 {
        self.steps
    }

    /// The accumulated rotation about Y, in radians.
    pub fn accumulated_rotation_y(&self) -> f32 {
        self.steps as f32 * self.step
    }

    pub fn last_location(&self) -> Vec2 {
        self.last_location
    }

    /// Orientation implied by the accumulated angle.  Only the Y axis is ever involved.
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_y(self.accumulated_rotation_y())
    }

    /// Records where a new drag begins, so the first change event of the drag is measured from
    /// the touch-down point rather than from wherever the previous drag ended.
    ///
    /// Non-finite locations are ignored.
    pub fn begin(&mut self, location: Vec2) {
        if location.is_finite() {
            self.last_location = location;
        }
    }

    /// Feeds one drag-changed event.  Returns the step that was applied, or `None` when the
    /// location was malformed and the event was skipped entirely.
    pub fn update(&mut self, location: Vec2, inverted: bool) -> Option<RotationStep> {
        if !location.is_finite() {
            return None;
        }

        let mut delta_x = location.x - self.last_location.x;
        if inverted {
            delta_x = -delta_x;
        }

        let step = RotationStep::from_delta(delta_x);
        self.steps += step.signum();
        self.last_location = location;
        Some(step)
    }
}


// End of File
