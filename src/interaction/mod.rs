// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Routes picking events to the [`GestureTransformController`].
//!
//! Hit testing is done by `bevy_mod_picking`.  Its events target whichever mesh was hit, which
//! for a glTF body is some descendant of the entity carrying [`CelestialBody`], so every handler
//! first resolves the hit back to its body with [`BodyTargets`].

mod drag;
mod long_press;
mod pinch;
mod tap;
#[cfg(test)]
mod testing;

pub use long_press::LongPressState;
pub use pinch::HoveredBody;
pub use tap::Tapped;

use crate::{scene::CelestialBody, AppState};
use bevy::{ecs::system::SystemParam, prelude::*};
use gesture::{ControllerConfig, GestureTransformController, PinchScale, ScaleCyclePolicy};
use settings::{InteractionSettings, ScalePolicySetting};

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        let settings = app
            .world
            .get_resource_or_insert_with(InteractionSettings::default)
            .clone();

        app.insert_resource(GestureTransformController::new(controller_config(&settings)))
            .insert_resource(tap::TapState::new(&settings))
            .insert_resource(LongPressState::new(&settings))
            .insert_resource(pinch::PinchTracker::new(&settings))
            .init_resource::<HoveredBody>()
            .add_event::<Tapped>()
            .add_systems(
                Update,
                (
                    tap::recognize_taps,
                    tap::cycle_scale_on_double_tap,
                    drag::start_drags,
                    drag::drag_bodies,
                    pinch::track_hover,
                    pinch::pinch_bodies,
                    long_press::track_long_press,
                )
                    .chain()
                    .run_if(in_state(AppState::Volume)),
            );
    }
}

pub fn controller_config(settings: &InteractionSettings) -> ControllerConfig {
    ControllerConfig {
        rotation_step_degrees: settings.rotation_step_degrees,
        scale_levels: settings.scale_levels.clone(),
        scale_policy: match settings.scale_policy {
            ScalePolicySetting::ExactMatch => ScaleCyclePolicy::ExactMatch,
            ScalePolicySetting::Indexed => ScaleCyclePolicy::Indexed,
        },
        pinch: PinchScale {
            min_scale: settings.pinch_min_scale,
            max_scale: settings.pinch_max_scale,
        },
        view_drag_minimum_distance: settings.view_drag_minimum_distance,
    }
}

/// Resolves a picked entity to the body it belongs to.
#[derive(SystemParam)]
pub struct BodyTargets<'w, 's> {
    bodies: Query<'w, 's, (), With<CelestialBody>>,
    parents: Query<'w, 's, &'static Parent>,
}

impl<'w, 's> BodyTargets<'w, 's> {
    pub fn resolve(&self, entity: Entity) -> Option<Entity> {
        let mut current = entity;
        loop {
            if self.bodies.contains(current) {
                return Some(current);
            }
            current = self.parents.get(current).ok()?.get();
        }
    }
}


// End of File
