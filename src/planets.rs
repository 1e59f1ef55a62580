// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{
    interaction::LongPressState,
    scene::{Decoration, ViewRoot},
    AppState,
};
use bevy::{math::primitives::Sphere, prelude::*};
use bevy_mod_picking::prelude::*;
use rand::{
    distributions::{Distribution, Uniform},
    rngs::StdRng,
    Rng, SeedableRng,
};
use settings::InteractionSettings;

pub struct PlanetPlugin;

impl Plugin for PlanetPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(PlanetRng(StdRng::from_entropy()))
            .add_systems(
                Update,
                spawn_planets.run_if(in_state(AppState::Volume)),
            );
    }
}

#[derive(Resource)]
pub struct PlanetRng(pub StdRng);

/// Samplers for the decorative planets, built from the configured ranges.
struct PlanetSampler {
    radius: Uniform<f32>,
    x: Uniform<f32>,
    y: Uniform<f32>,
    z: Uniform<f32>,
    unit: Uniform<f32>,
}

impl PlanetSampler {
    fn new(settings: &InteractionSettings) -> Self {
        let range = |(low, high): (f32, f32)| Uniform::new_inclusive(low, high);
        Self {
            radius: range(settings.spawn_radius),
            x: range(settings.spawn_x),
            y: range(settings.spawn_y),
            z: range(settings.spawn_z),
            unit: Uniform::new_inclusive(0.0, 1.0),
        }
    }
}

/// While a long press is held, adds one small random planet to the view every frame.
pub(crate) fn spawn_planets(
    mut commands: Commands,
    press: Res<LongPressState>,
    settings: Res<InteractionSettings>,
    mut rng: ResMut<PlanetRng>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    views: Query<Entity, With<ViewRoot>>,
) {
    if !press.is_pressing() {
        return;
    }
    let Ok(view) = views.get_single() else {
        return;
    };

    let sampler = PlanetSampler::new(&settings);
    let rng = &mut rng.0;
    let radius = sampler.radius.sample(rng);
    let translation = Vec3::new(
        sampler.x.sample(rng),
        sampler.y.sample(rng),
        sampler.z.sample(rng),
    );
    let material = StandardMaterial {
        base_color: Color::rgb(
            sampler.unit.sample(rng),
            sampler.unit.sample(rng),
            sampler.unit.sample(rng),
        ),
        perceptual_roughness: sampler.unit.sample(rng),
        metallic: if rng.gen_bool(0.5) { 1.0 } else { 0.0 },
        ..default()
    };

    let planet = commands
        .spawn((
            PbrBundle {
                mesh: meshes.add(Sphere::new(radius)),
                material: materials.add(material),
                transform: Transform::from_translation(translation),
                ..default()
            },
            PickableBundle::default(),
            Decoration,
            Name::new("Planet"),
        ))
        .id();
    commands.entity(view).add_child(planet);
    trace!("Spawned planet {:?} (radius {radius}) at {translation}", planet);
}


// End of File
