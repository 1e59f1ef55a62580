// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use super::BodyTargets;
use crate::scene::{CelestialBody, Rotatable, ViewHandle, ViewRoot, VolumeCamera};
use bevy::{math::primitives::Plane3d, prelude::*};
use bevy_mod_picking::prelude::*;
use gesture::{GestureKind, GestureTransformController, PointerSample};

type Cameras<'w, 's> =
    Query<'w, 's, (&'static Camera, &'static GlobalTransform), With<VolumeCamera>>;

/// Samples the pointer on screen and, when a camera is available, on the plane through `node`
/// that faces the camera.
fn sample_pointer(screen: Vec2, node: &GlobalTransform, cameras: &Cameras) -> PointerSample {
    let world = cameras.get_single().ok().and_then(|(camera, camera_transform)| {
        let ray = camera.viewport_to_world(camera_transform, screen)?;
        let plane = Plane3d::new(camera_transform.back());
        let distance = ray.intersect_plane(node.translation(), plane)?;
        Some(ray.get_point(distance))
    });
    PointerSample { screen, world }
}

pub(crate) fn start_drags(
    targets: BodyTargets,
    cameras: Cameras,
    bodies: Query<(&GlobalTransform, Option<&Rotatable>, Has<ViewHandle>), With<CelestialBody>>,
    mut controller: ResMut<GestureTransformController>,
    mut starts: EventReader<Pointer<DragStart>>,
) {
    for start in starts.read() {
        if start.button != PointerButton::Primary {
            continue;
        }
        let Some(body) = targets.resolve(start.target) else {
            continue;
        };
        let Ok((global, rotatable, is_view_handle)) = bodies.get(body) else {
            continue;
        };
        let screen = start.pointer_location.position;

        if let Some(rotatable) = rotatable {
            let sample = sample_pointer(screen, global, &cameras);
            if let Some(location) = rotatable.space.locate(sample, global) {
                controller.handle_drag_started(body, GestureKind::NodeDrag, location);
            }
        }
        if is_view_handle {
            // The view handle rotates its own ancestor, so its drag is always measured in the
            // root frame.
            controller.handle_drag_started(body, GestureKind::ViewDrag, screen);
        }
    }
}

#[allow(clippy::type_complexity)]
pub(crate) fn drag_bodies(
    targets: BodyTargets,
    cameras: Cameras,
    mut bodies: Query<
        (
            &GlobalTransform,
            &mut Transform,
            Option<&Parent>,
            Option<&Rotatable>,
            Has<ViewHandle>,
        ),
        (With<CelestialBody>, Without<ViewRoot>),
    >,
    mut views: Query<&mut Transform, (With<ViewRoot>, Without<CelestialBody>)>,
    mut controller: ResMut<GestureTransformController>,
    mut drags: EventReader<Pointer<Drag>>,
) {
    for drag in drags.read() {
        if drag.button != PointerButton::Primary {
            continue;
        }
        let Some(body) = targets.resolve(drag.target) else {
            continue;
        };
        let Ok((global, mut transform, parent, rotatable, is_view_handle)) = bodies.get_mut(body)
        else {
            continue;
        };
        let screen = drag.pointer_location.position;

        if let Some(rotatable) = rotatable {
            // `GlobalTransform` lags a frame behind, and a view drag earlier in this frame may
            // already have spun the body to the other side.  The view root is the top of the
            // hierarchy, so its `Transform` is its current world transform.
            let world_position = parent
                .and_then(|parent| views.get(parent.get()).ok())
                .map_or(global.translation(), |view| {
                    view.transform_point(transform.translation)
                });
            let sample = sample_pointer(screen, global, &cameras);
            if let Some(location) = rotatable.space.locate(sample, global) {
                controller.handle_drag_changed(
                    body,
                    location,
                    world_position,
                    rotatable.inversion,
                    &mut transform,
                );
            }
        }

        if is_view_handle {
            let Ok(mut view) = views.get_single_mut() else {
                continue;
            };
            // Screen coordinates: measured in the rotating view itself, the delta would flip
            // sign every time the view angle crosses zero.
            controller.handle_view_drag_changed(screen, drag.distance.length(), &mut view);
        }
    }
}


// End of File
