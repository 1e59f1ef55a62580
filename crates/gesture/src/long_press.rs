// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::prelude::*;

/// Recognizes a press that is held long enough without wandering off.
///
/// The recognizer exposes a single live boolean ([`LongPress::is_pressing`]); whatever is gated
/// on it should poll it once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LongPress {
    minimum_duration: f32,
    maximum_distance: f32,
    phase: Phase,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    Pending { origin: Vec2, started: f32 },
    Pressing { origin: Vec2 },
    /// Moved too far; stays here until the pointer is released.
    Failed,
}

impl LongPress {
    pub fn new(minimum_duration: f32, maximum_distance: f32) -> Self {
        Self {
            minimum_duration,
            maximum_distance,
            phase: Phase::Idle,
        }
    }

    pub fn press(&mut self, location: Vec2, now: f32) {
        self.phase = if location.is_finite() {
            Phase::Pending {
                origin: location,
                started: now,
            }
        } else {
            Phase::Failed
        };
    }

    /// Pointer movement while the press is down.
    pub fn moved(&mut self, location: Vec2) {
        let origin = match self.phase {
            Phase::Pending { origin, .. } | Phase::Pressing { origin } => origin,
            Phase::Idle | Phase::Failed => return,
        };
        if !location.is_finite() {
            return;
        }
        if location.distance(origin) > self.maximum_distance {
            self.phase = Phase::Failed;
        }
    }

    /// Advances time.  Returns the press state after the tick.
    pub fn tick(&mut self, now: f32) -> bool {
        if let Phase::Pending { origin, started } = self.phase {
            if now - started >= self.minimum_duration {
                self.phase = Phase::Pressing { origin };
            }
        }
        self.is_pressing()
    }

    pub fn release(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn is_pressing(&self) -> bool {
        matches!(self.phase, Phase::Pressing { .. })
    }
}


// End of File
