// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use super::BodyTargets;
use crate::scene::Pinchable;
use bevy::{input::touchpad::TouchpadMagnify, prelude::*};
use bevy_mod_picking::prelude::*;
use gesture::{GestureTransformController, MagnifyTracker};
use settings::InteractionSettings;

/// The body currently under the pointer, which is where pinches land.
#[derive(Resource, Default, Debug)]
pub struct HoveredBody(pub Option<Entity>);

#[derive(Resource)]
pub(crate) struct PinchTracker(MagnifyTracker<Entity>);

impl PinchTracker {
    pub(crate) fn new(settings: &InteractionSettings) -> Self {
        Self(MagnifyTracker::new(settings.pinch_idle_seconds))
    }
}

pub(crate) fn track_hover(
    targets: BodyTargets,
    mut hovered: ResMut<HoveredBody>,
    mut outs: EventReader<Pointer<Out>>,
    mut overs: EventReader<Pointer<Over>>,
) {
    for out in outs.read() {
        if hovered.0.is_some() && targets.resolve(out.target) == hovered.0 {
            hovered.0 = None;
        }
    }
    for over in overs.read() {
        if let Some(body) = targets.resolve(over.target) {
            hovered.0 = Some(body);
        }
    }
}

/// Scales the hovered pinchable body from touchpad magnify gestures or a two-finger touch pinch.
pub(crate) fn pinch_bodies(
    time: Res<Time>,
    touches: Res<Touches>,
    hovered: Res<HoveredBody>,
    mut tracker: ResMut<PinchTracker>,
    mut controller: ResMut<GestureTransformController>,
    mut bodies: Query<&mut Transform, With<Pinchable>>,
    mut magnify: EventReader<TouchpadMagnify>,
) {
    let body = match hovered.0 {
        Some(body) if bodies.contains(body) => body,
        _ => {
            magnify.clear();
            tracker.0.reset();
            return;
        }
    };
    let Ok(mut transform) = bodies.get_mut(body) else {
        return;
    };

    let now = time.elapsed_seconds();
    for TouchpadMagnify(delta) in magnify.read() {
        if let Some(factor) = tracker.0.accumulate(body, *delta, now) {
            controller.handle_pinch_changed(factor, &mut transform);
        }
    }

    let mut fingers = touches.iter();
    if let (Some(first), Some(second), None) = (fingers.next(), fingers.next(), fingers.next()) {
        let start = first.start_position().distance(second.start_position());
        let current = first.position().distance(second.position());
        if start > 0.0 {
            controller.handle_pinch_changed(current / start, &mut transform);
        }
    }
}


// End of File
