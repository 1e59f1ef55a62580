// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{
    effect::{EffectRequest, EffectToggle},
    pinch::PinchScale,
    rotation::{DragRotation, FrameInversion, RotationStep, DEFAULT_ROTATION_STEP_DEGREES},
    scale::{ScaleCycle, ScaleCyclePolicy, DEFAULT_SCALE_LEVELS},
};
use bevy::{prelude::*, utils::HashMap};

/// Which kind of delta-tracking gesture a piece of state belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Dragging a node spins the node itself.
    NodeDrag,
    /// Dragging a node spins the whole view.
    ViewDrag,
}

/// Tunables the controller is built from.
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerConfig {
    pub rotation_step_degrees: f32,
    pub scale_levels: Vec<f32>,
    pub scale_policy: ScaleCyclePolicy,
    pub pinch: PinchScale,
    pub view_drag_minimum_distance: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            rotation_step_degrees: DEFAULT_ROTATION_STEP_DEGREES,
            scale_levels: DEFAULT_SCALE_LEVELS.to_vec(),
            scale_policy: ScaleCyclePolicy::ExactMatch,
            pinch: PinchScale::default(),
            view_drag_minimum_distance: 1.0,
        }
    }
}

/// Maps gestures targeted at scene nodes onto their transforms.
///
/// All mutable gesture state is held here, keyed by node identity, rather than spread across
/// the individual handlers.  Handlers receive the node's transform explicitly and write only
/// orientation and scale.
#[derive(Resource, Debug)]
pub struct GestureTransformController {
    config: ControllerConfig,
    rotations: HashMap<(Entity, GestureKind), DragRotation>,
    view_rotation: DragRotation,
    // Set once the current view drag has travelled the minimum distance.
    view_drag_recognized: bool,
    scale_cycles: HashMap<Entity, ScaleCycle>,
    effects: HashMap<Entity, EffectToggle>,
}

impl Default for GestureTransformController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl GestureTransformController {
    pub fn new(config: ControllerConfig) -> Self {
        let view_rotation = DragRotation::with_step(config.rotation_step_degrees.to_radians());
        Self {
            config,
            rotations: HashMap::default(),
            view_rotation,
            view_drag_recognized: false,
            scale_cycles: HashMap::default(),
            effects: HashMap::default(),
        }
    }

    fn rotation_mut(&mut self, node: Entity, kind: GestureKind) -> &mut DragRotation {
        let step = self.config.rotation_step_degrees.to_radians();
        self.rotations
            .entry((node, kind))
            .or_insert_with(|| DragRotation::with_step(step))
    }

    pub fn rotation(&self, node: Entity) -> Option<&DragRotation> {
        self.rotations.get(&(node, GestureKind::NodeDrag))
    }

    pub fn view_rotation(&self) -> &DragRotation {
        &self.view_rotation
    }

    pub fn is_animated(&self, node: Entity) -> bool {
        self.effects
            .get(&node)
            .map_or(false, EffectToggle::is_animated)
    }

    /// Toggles the node's effect flag and returns the single parameter update to issue.
    pub fn handle_tap(&mut self, node: Entity) -> EffectRequest {
        let request = self.effects.entry(node).or_default().toggle();
        debug!(
            "Effect on {:?} toggled to {:?} (request #{})",
            node, request.preset, request.sequence
        );
        request
    }

    /// Whether a completed effect request should still be applied.
    pub fn is_latest_effect(&self, node: Entity, sequence: u64) -> bool {
        self.effects
            .get(&node)
            .map_or(false, |toggle| toggle.is_latest(sequence))
    }

    /// Advances the node's discrete scale.
    pub fn handle_double_tap(&mut self, node: Entity, transform: &mut Transform) {
        let levels = &self.config.scale_levels;
        let policy = self.config.scale_policy;
        let cycle = self
            .scale_cycles
            .entry(node)
            .or_insert_with(|| ScaleCycle::new(levels.clone(), policy));
        transform.scale = cycle.advance(transform.scale);
        debug!("Scale of {:?} cycled to {}", node, transform.scale.x);
    }

    /// Seeds the delta tracking of a drag that is just starting.
    pub fn handle_drag_started(&mut self, node: Entity, kind: GestureKind, location: Vec2) {
        match kind {
            GestureKind::ViewDrag => {
                self.view_drag_recognized = false;
                self.view_rotation.begin(location);
            }
            GestureKind::NodeDrag => self.rotation_mut(node, kind).begin(location),
        }
    }

    /// Steps the node's own rotation.  `world_position` must be the node's current world-space
    /// position, since the inversion rule depends on which side of the view it is on right now.
    pub fn handle_drag_changed(
        &mut self,
        node: Entity,
        location: Vec2,
        world_position: Vec3,
        inversion: FrameInversion,
        transform: &mut Transform,
    ) -> Option<RotationStep> {
        let inverted = inversion.applies(world_position);
        let rotation = self.rotation_mut(node, GestureKind::NodeDrag);
        let step = rotation.update(location, inverted)?;
        transform.rotation = rotation.orientation();
        Some(step)
    }

    /// Steps the rotation of the whole view.  `distance` is how far the pointer has travelled
    /// since the drag started.  The drag is recognized once that distance first reaches the
    /// configured minimum, and stays recognized until the next drag starts.
    pub fn handle_view_drag_changed(
        &mut self,
        location: Vec2,
        distance: f32,
        view: &mut Transform,
    ) -> Option<RotationStep> {
        if !self.view_drag_recognized {
            if distance.is_nan() || distance < self.config.view_drag_minimum_distance {
                return None;
            }
            self.view_drag_recognized = true;
        }
        let step = self.view_rotation.update(location, false)?;
        view.rotation = self.view_rotation.orientation();
        Some(step)
    }

    /// Sets the node's scale straight from the live magnification factor.
    pub fn handle_pinch_changed(&mut self, factor: f32, transform: &mut Transform) -> bool {
        match self.config.pinch.scale_for(factor) {
            Some(scale) => {
                transform.scale = scale;
                true
            }
            None => false,
        }
    }

    /// Drops all state held for a node that left the scene.
    pub fn forget(&mut self, node: Entity) {
        self.rotations.retain(|(entity, _), _| *entity != node);
        self.scale_cycles.remove(&node);
        self.effects.remove(&node);
    }
}


// End of File
