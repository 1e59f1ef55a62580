// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::effect::PulseEffect;
use bevy::ecs::system::EntityCommands;
use bevy::prelude::*;
use gesture::{CoordinateSpace, FrameInversion};

/// The three bodies the volume is composed of.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CelestialBody {
    Sun,
    Earth,
    Moon,
}

impl CelestialBody {
    pub const ALL: [CelestialBody; 3] = [
        CelestialBody::Sun,
        CelestialBody::Earth,
        CelestialBody::Moon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CelestialBody::Sun => "Sun",
            CelestialBody::Earth => "Earth",
            CelestialBody::Moon => "Moon",
        }
    }

    pub fn asset_path(self) -> &'static str {
        match self {
            CelestialBody::Sun => "models/sun.gltf",
            CelestialBody::Earth => "models/earth.gltf",
            CelestialBody::Moon => "models/moon.gltf",
        }
    }

    /// Where the body sits inside the view before anything has been moved.  The earth and the
    /// moon start on opposite sides of the sun.
    pub fn home_position(self) -> Vec3 {
        match self {
            CelestialBody::Sun => Vec3::ZERO,
            CelestialBody::Earth => Vec3::new(-0.3, 0.0, 0.0),
            CelestialBody::Moon => Vec3::new(0.3, 0.0, 0.0),
        }
    }

    /// Attaches the gesture behaviours this body responds to.
    pub fn insert_behaviours(self, entity: &mut EntityCommands) {
        match self {
            CelestialBody::Sun => {
                entity.insert((ViewHandle, PulseEffect::default()));
            }
            CelestialBody::Earth => {
                entity.insert((
                    Rotatable {
                        inversion: FrameInversion::PositiveX,
                        space: CoordinateSpace::Global,
                    },
                    ScaleCycling,
                ));
            }
            CelestialBody::Moon => {
                entity.insert((
                    Rotatable {
                        inversion: FrameInversion::NegativeX,
                        space: CoordinateSpace::Global,
                    },
                    Pinchable,
                ));
            }
        }
    }
}

/// The parent of everything in the volume; dragging the [`ViewHandle`] rotates it about Y.
#[derive(Component)]
pub struct ViewRoot;

/// Dragging this body rotates the whole view rather than the body itself.  The body is expected
/// to sit at the view's rotation center.
#[derive(Component)]
pub struct ViewHandle;

/// Dragging this body spins it about its own Y axis.
#[derive(Component, Clone, Copy, Debug)]
pub struct Rotatable {
    pub inversion: FrameInversion,
    pub space: CoordinateSpace,
}

/// Double-tapping this body cycles it through the discrete scale levels.
#[derive(Component)]
pub struct ScaleCycling;

/// Pinching over this body sets its scale.
#[derive(Component)]
pub struct Pinchable;

/// A small random planet added while a long press is held.
#[derive(Component)]
pub struct Decoration;

#[derive(Component)]
pub struct VolumeCamera;

// End of File
