// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::prelude::*;

/// The discrete uniform scales a double-tap cycles through.
pub const DEFAULT_SCALE_LEVELS: [f32; 3] = [1.0, 1.5, 1.75];

/// How the cycle figures out where it currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
pub enum ScaleCyclePolicy {
    /// Re-derive the position from the node's current scale using exact comparison.  Any value
    /// that is not one of the levels (for instance one left behind by a pinch) sends the node
    /// back to the first level.
    #[default]
    ExactMatch,
    /// Remember the index of the last level applied and always move to the next one, whatever
    /// the node's scale happens to be.
    Indexed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScaleCycle {
    levels: Vec<f32>,
    policy: ScaleCyclePolicy,
    index: usize,
}

impl Default for ScaleCycle {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE_LEVELS.to_vec(), ScaleCyclePolicy::default())
    }
}

impl ScaleCycle {
    pub fn new(levels: Vec<f32>, policy: ScaleCyclePolicy) -> Self {
        Self {
            levels,
            policy,
            index: 0,
        }
    }

    /// Returns the scale that follows `current`.  With no levels configured the scale is left
    /// untouched.
    pub fn advance(&mut self, current: Vec3) -> Vec3 {
        if self.levels.is_empty() {
            return current;
        }

        self.index = match self.policy {
            ScaleCyclePolicy::ExactMatch => self
                .levels
                .iter()
                .position(|level| current == Vec3::splat(*level))
                .map_or(0, |index| (index + 1) % self.levels.len()),
            ScaleCyclePolicy::Indexed => (self.index + 1) % self.levels.len(),
        };

        Vec3::splat(self.levels[self.index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_double_taps_come_back_to_one() {
        let mut cycle = ScaleCycle::default();
        let mut scale = Vec3::ONE;
        scale = cycle.advance(scale);
        assert_eq!(scale, Vec3::splat(1.5));
        scale = cycle.advance(scale);
        assert_eq!(scale, Vec3::splat(1.75));
        scale = cycle.advance(scale);
        assert_eq!(scale, Vec3::ONE);
    }

    #[test]
    fn unknown_scale_resets() {
        let mut cycle = ScaleCycle::default();
        assert_eq!(cycle.advance(Vec3::splat(2.0)), Vec3::ONE);
        assert_eq!(cycle.advance(Vec3::new(1.5, 1.5, 1.0)), Vec3::ONE);
        assert_eq!(cycle.advance(Vec3::splat(1.500_001)), Vec3::ONE);
    }

    #[test]
    fn indexed_policy_ignores_drift() {
        let mut cycle = ScaleCycle::new(DEFAULT_SCALE_LEVELS.to_vec(), ScaleCyclePolicy::Indexed);
        assert_eq!(cycle.advance(Vec3::ONE), Vec3::splat(1.5));
        // A pinch moved the node somewhere in between.
        assert_eq!(cycle.advance(Vec3::splat(0.8)), Vec3::splat(1.75));
        assert_eq!(cycle.advance(Vec3::splat(3.0)), Vec3::ONE);
    }

    #[test]
    fn empty_levels_keep_scale() {
        let mut cycle = ScaleCycle::new(Vec::new(), ScaleCyclePolicy::ExactMatch);
        assert_eq!(cycle.advance(Vec3::splat(2.0)), Vec3::splat(2.0));
    }
}

// End of File
