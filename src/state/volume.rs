// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{
    assets::CelestialAssets,
    scene::{CelestialBody, ViewRoot, VolumeCamera},
    AppState,
};
use bevy::gltf::Gltf;
use bevy::prelude::*;
use bevy_mod_picking::prelude::*;
use gesture::GestureTransformController;

pub struct VolumePlugin;

impl Plugin for VolumePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Volume), setup_volume)
            .add_systems(OnExit(AppState::Volume), cleanup_volume);
    }
}

// Tag component used to tag entities added on in the volume.
#[derive(Component)]
pub struct OnVolume;

fn setup_volume(
    mut commands: Commands,
    celestial_assets: Res<CelestialAssets>,
    gltfs: Res<Assets<Gltf>>,
) {
    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_xyz(0.0, 0.25, 1.4).looking_at(Vec3::ZERO, Vec3::Y),
            ..default()
        },
        VolumeCamera,
        OnVolume,
    ));

    commands.spawn((
        DirectionalLightBundle {
            directional_light: DirectionalLight {
                illuminance: 4000.0,
                ..default()
            },
            transform: Transform::from_xyz(1.0, 1.0, 2.0).looking_at(Vec3::ZERO, Vec3::Y),
            ..default()
        },
        OnVolume,
    ));

    let view = commands
        .spawn((SpatialBundle::default(), ViewRoot, Name::new("View"), OnVolume))
        .id();

    for body in CelestialBody::ALL {
        // A missing body is not fatal; the volume proceeds with whatever did load.
        let Some(scene) = celestial_assets.scene(body, &gltfs) else {
            warn!("{} could not be loaded; leaving it out of the volume", body.name());
            continue;
        };

        let mut entity = commands.spawn((
            SceneBundle {
                scene,
                transform: Transform::from_translation(body.home_position()),
                ..default()
            },
            PickableBundle::default(),
            Name::new(body.name()),
            body,
            OnVolume,
        ));
        body.insert_behaviours(&mut entity);
        let entity = entity.id();
        commands.entity(view).add_child(entity);
        debug!("Spawned {} as {:?}", body.name(), entity);
    }
}

fn cleanup_volume(
    mut commands: Commands,
    mut controller: ResMut<GestureTransformController>,
    bodies: Query<Entity, With<CelestialBody>>,
    roots: Query<Entity, (With<OnVolume>, Without<Parent>)>,
) {
    for body in bodies.iter() {
        controller.forget(body);
    }
    for entity in roots.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

// End of File
