// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! The sun's pulse effect.
//!
//! Tapping a [`PulseEffect`] body toggles the effect.  The parameter update is resolved on the
//! async compute pool and applied once it completes, but only if no newer toggle has been issued
//! for the same body in the meantime.  Applying replaces the named mesh's material with a
//! [`PulseMaterial`] carrying the new parameters, or updates that material in place.

use crate::{interaction::Tapped, AppState};
use bevy::{
    pbr::{Material, MaterialPlugin},
    prelude::*,
    render::render_resource::{AsBindGroup, ShaderRef, ShaderType},
    tasks::{block_on, futures_lite::future, AsyncComputeTaskPool, Task},
};
use gesture::{
    effect::{EffectError, PulseParameters},
    GestureTransformController,
};

const PULSE_SHADER_PATH: &str = "shaders/pulse.wgsl";

pub struct EffectPlugin;

impl Plugin for EffectPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<PulseMaterial>::default())
            .add_systems(
                Update,
                (request_effect_updates, apply_effect_updates)
                    .chain()
                    .run_if(in_state(AppState::Volume)),
            )
            .add_systems(OnExit(AppState::Volume), cancel_effect_updates);
    }
}

/// Marks a body whose named child mesh carries the pulse effect.
#[derive(Component, Clone, Debug)]
pub struct PulseEffect {
    pub mesh_name: &'static str,
}

impl Default for PulseEffect {
    fn default() -> Self {
        Self {
            mesh_name: "Sphere",
        }
    }
}

#[derive(ShaderType, Clone, Copy, Debug, PartialEq)]
pub struct PulseUniform {
    pub base_color: Vec4,
    /// Strength of the halo at the peak of a pulse; zero disables the pulse.
    pub maximum_size: f32,
    /// Pulses per second.
    pub speed: f32,
}

#[derive(Asset, TypePath, AsBindGroup, Clone, Debug)]
pub struct PulseMaterial {
    #[uniform(0)]
    pub pulse: PulseUniform,
}

impl Material for PulseMaterial {
    fn fragment_shader() -> ShaderRef {
        PULSE_SHADER_PATH.into()
    }
}

/// Entities drawn with a material the effect can take over.
#[allow(clippy::type_complexity)]
type Surfaces<'w, 's> = Query<
    'w,
    's,
    (),
    Or<(With<Handle<StandardMaterial>>, With<Handle<PulseMaterial>>)>,
>;

/// An in-flight parameter update.
#[derive(Component)]
pub(crate) struct EffectTask {
    node: Entity,
    sequence: u64,
    task: Task<Result<PulseParameters, EffectError>>,
}

pub(crate) fn request_effect_updates(
    mut commands: Commands,
    mut taps: EventReader<Tapped>,
    mut controller: ResMut<GestureTransformController>,
    effects: Query<(), With<PulseEffect>>,
) {
    let pool = AsyncComputeTaskPool::get();
    for tap in taps.read() {
        if !effects.contains(tap.node) {
            continue;
        }
        let request = controller.handle_tap(tap.node);
        let parameters = request.parameters();
        let task = pool.spawn(async move { PulseParameters::try_from(&parameters) });
        commands.spawn(EffectTask {
            node: tap.node,
            sequence: request.sequence,
            task,
        });
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn apply_effect_updates(
    mut commands: Commands,
    controller: Res<GestureTransformController>,
    mut tasks: Query<(Entity, &mut EffectTask)>,
    effects: Query<&PulseEffect>,
    children: Query<&Children>,
    names: Query<&Name>,
    surfaces: Surfaces,
    standard_handles: Query<&Handle<StandardMaterial>>,
    pulse_handles: Query<&Handle<PulseMaterial>>,
    standard_materials: Res<Assets<StandardMaterial>>,
    mut pulse_materials: ResMut<Assets<PulseMaterial>>,
) {
    for (task_entity, mut pending) in &mut tasks {
        let Some(result) = block_on(future::poll_once(&mut pending.task)) else {
            continue;
        };
        commands.entity(task_entity).despawn();

        if !controller.is_latest_effect(pending.node, pending.sequence) {
            debug!(
                "Dropping stale effect update #{} for {:?}",
                pending.sequence, pending.node
            );
            continue;
        }

        let parameters = match result {
            Ok(parameters) => parameters,
            Err(err) if err.is_fatal() => {
                error!("{}", err);
                panic!("Failed setting parameters on the pulse material: {err}");
            }
            Err(err) => {
                debug!("Effect update abandoned: {}", err);
                continue;
            }
        };

        let Some(mesh) = effects
            .get(pending.node)
            .ok()
            .and_then(|effect| find_named(pending.node, effect.mesh_name, &children, &names))
            .and_then(|named| find_surface(named, &children, &surfaces))
        else {
            let err = EffectError::MaterialNotFound(
                effects
                    .get(pending.node)
                    .map(|effect| effect.mesh_name.to_owned())
                    .unwrap_or_default(),
            );
            debug!("Effect update abandoned: {}", err);
            continue;
        };

        if let Some(material) = pulse_handles
            .get(mesh)
            .ok()
            .and_then(|handle| pulse_materials.get_mut(handle))
        {
            material.pulse.maximum_size = parameters.maximum_size;
            material.pulse.speed = parameters.speed;
            continue;
        }

        let base_color = standard_handles
            .get(mesh)
            .ok()
            .and_then(|handle| standard_materials.get(handle))
            .map_or(Color::WHITE, |material| material.base_color);
        let handle = pulse_materials.add(PulseMaterial {
            pulse: PulseUniform {
                base_color: Vec4::from_array(base_color.as_linear_rgba_f32()),
                maximum_size: parameters.maximum_size,
                speed: parameters.speed,
            },
        });
        commands
            .entity(mesh)
            .remove::<Handle<StandardMaterial>>()
            .insert(handle);
    }
}

/// Drops every in-flight update; dropping a task cancels it.
pub(crate) fn cancel_effect_updates(
    mut commands: Commands,
    tasks: Query<Entity, With<EffectTask>>,
) {
    for entity in tasks.iter() {
        commands.entity(entity).despawn();
    }
}

/// Depth-first search below `root` for an entity called `name`.
fn find_named(
    root: Entity,
    name: &str,
    children: &Query<&Children>,
    names: &Query<&Name>,
) -> Option<Entity> {
    let mut stack = vec![root];
    while let Some(entity) = stack.pop() {
        if names.get(entity).map_or(false, |found| found.as_str() == name) {
            return Some(entity);
        }
        if let Ok(children) = children.get(entity) {
            stack.extend(children.iter().copied());
        }
    }
    None
}

/// The named entity itself if it is drawn with a material, otherwise its first descendant that
/// is.  A glTF node keeps its primitives on child entities.
fn find_surface(
    named: Entity,
    children: &Query<&Children>,
    surfaces: &Surfaces,
) -> Option<Entity> {
    let mut stack = vec![named];
    while let Some(entity) = stack.pop() {
        if surfaces.contains(entity) {
            return Some(entity);
        }
        if let Ok(children) = children.get(entity) {
            stack.extend(children.iter().copied());
        }
    }
    None
}


// End of File
