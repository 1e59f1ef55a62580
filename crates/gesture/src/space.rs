// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::prelude::*;

/// The frame in which a drag's pointer location is measured.
///
/// A gesture that rotates an ancestor of its own target must use [`CoordinateSpace::Global`]:
/// measured in the rotating frame, the delta changes sign whenever the view angle crosses zero
/// and the rotation locks up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
pub enum CoordinateSpace {
    /// Screen coordinates, fixed at the root of the hierarchy.
    #[default]
    Global,
    /// The target node's own frame.
    Local,
}

/// A pointer sample in both of the frames a drag may be measured in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Position on screen.
    pub screen: Vec2,
    /// Point under the pointer on the plane through the node that faces the camera, if the
    /// pointer ray meets it.
    pub world: Option<Vec3>,
}

impl CoordinateSpace {
    /// Resolves `sample` to a 2D location in this space, using `node` as the local frame.
    pub fn locate(self, sample: PointerSample, node: &GlobalTransform) -> Option<Vec2> {
        match self {
            CoordinateSpace::Global => Some(sample.screen),
            CoordinateSpace::Local => {
                let world = sample.world?;
                let local = node.affine().inverse().transform_point3(world);
                Some(local.truncate())
            }
        }
    }
}


// End of File
