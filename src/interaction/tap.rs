// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use super::BodyTargets;
use crate::scene::ScaleCycling;
use bevy::{prelude::*, utils::HashSet};
use bevy_mod_picking::prelude::*;
use gesture::{GestureTransformController, TapCount, TapRecognizer};
use settings::InteractionSettings;

/// A body was tapped.  Every click produces one; `count` tells whether it completed a
/// double-tap.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tapped {
    pub node: Entity,
    pub count: TapCount,
}

#[derive(Resource)]
pub(crate) struct TapState {
    recognizer: TapRecognizer<Entity>,
    maximum_distance: f32,
    // Bodies whose current press wandered past the tap tolerance; releasing those is not a tap.
    dragged: HashSet<Entity>,
}

impl TapState {
    pub(crate) fn new(settings: &InteractionSettings) -> Self {
        Self {
            recognizer: TapRecognizer::new(settings.double_tap_seconds),
            maximum_distance: settings.tap_maximum_distance,
            dragged: HashSet::default(),
        }
    }
}

pub(crate) fn recognize_taps(
    time: Res<Time>,
    targets: BodyTargets,
    mut state: ResMut<TapState>,
    mut downs: EventReader<Pointer<Down>>,
    mut drags: EventReader<Pointer<Drag>>,
    mut clicks: EventReader<Pointer<Click>>,
    mut tapped: EventWriter<Tapped>,
) {
    for down in downs.read() {
        if let Some(body) = targets.resolve(down.target) {
            state.dragged.remove(&body);
        }
    }
    for drag in drags.read() {
        if drag.button != PointerButton::Primary
            || drag.distance.length() <= state.maximum_distance
        {
            continue;
        }
        if let Some(body) = targets.resolve(drag.target) {
            state.dragged.insert(body);
        }
    }

    let now = time.elapsed_seconds();
    for click in clicks.read() {
        if click.button != PointerButton::Primary {
            continue;
        }
        let Some(body) = targets.resolve(click.target) else {
            continue;
        };
        if state.dragged.contains(&body) {
            continue;
        }
        let count = state.recognizer.click(body, now);
        trace!("{:?} tapped ({:?})", body, count);
        tapped.send(Tapped { node: body, count });
    }
}

pub(crate) fn cycle_scale_on_double_tap(
    mut taps: EventReader<Tapped>,
    mut controller: ResMut<GestureTransformController>,
    mut bodies: Query<&mut Transform, With<ScaleCycling>>,
) {
    for tap in taps.read() {
        if tap.count != TapCount::Double {
            continue;
        }
        if let Ok(mut transform) = bodies.get_mut(tap.node) {
            controller.handle_double_tap(tap.node, &mut transform);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{interaction::testing, scene::CelestialBody};

    fn app() -> App {
        let mut app = App::new();
        app.insert_resource(GestureTransformController::default())
            .add_event::<Tapped>()
            .add_systems(Update, cycle_scale_on_double_tap);
        app
    }

    fn recognizing_app() -> (App, Entity) {
        let mut app = testing::app();
        app.insert_resource(TapState::new(&InteractionSettings::default()))
            .add_event::<Tapped>()
            .add_systems(Update, recognize_taps);
        let sun = app.world.spawn(CelestialBody::Sun).id();
        (app, sun)
    }

    fn taps(app: &App) -> Vec<Tapped> {
        app.world
            .resource::<Events<Tapped>>()
            .iter_current_update_events()
            .copied()
            .collect()
    }

    /// Sends a full press on `target` that wanders `travel` pixels before it is released.
    fn press(app: &mut App, target: Entity, travel: f32) {
        let origin = Vec2::new(200.0, 200.0);
        let release = origin + Vec2::new(travel, 0.0);
        app.world.send_event(testing::down(target, origin, testing::PRIMARY));
        if travel > 0.0 {
            app.world.send_event(testing::drag_start(target, origin));
            let moved = testing::drag(target, origin, release, testing::PRIMARY);
            app.world.send_event(moved);
        }
        app.world.send_event(testing::click(target, release));
        app.update();
    }

    #[test]
    fn jittery_click_still_taps() {
        let (mut app, sun) = recognizing_app();
        press(&mut app, sun, 1.0);
        assert_eq!(
            taps(&app),
            vec![Tapped {
                node: sun,
                count: TapCount::Single,
            }]
        );
    }

    #[test]
    fn click_on_a_child_mesh_taps_its_body() {
        let (mut app, sun) = recognizing_app();
        let mesh = app.world.spawn_empty().id();
        app.world.entity_mut(sun).add_child(mesh);

        press(&mut app, mesh, 0.0);
        assert_eq!(taps(&app).len(), 1);
        assert_eq!(taps(&app)[0].node, sun);
    }

    #[test]
    fn dragging_past_the_tolerance_is_not_a_tap() {
        let (mut app, sun) = recognizing_app();
        press(&mut app, sun, 40.0);
        assert!(taps(&app).is_empty());

        // The next press starts clean.
        press(&mut app, sun, 0.0);
        assert_eq!(taps(&app).len(), 1);
    }

    #[test]
    fn second_quick_click_is_a_double_tap() {
        let (mut app, sun) = recognizing_app();
        press(&mut app, sun, 0.0);
        press(&mut app, sun, 0.0);
        assert_eq!(taps(&app)[0].count, TapCount::Double);
    }

    #[test]
    fn double_taps_cycle_scale() {
        let mut app = app();
        let earth = app
            .world
            .spawn((Transform::IDENTITY, ScaleCycling))
            .id();

        for expected in [1.5, 1.75, 1.0] {
            app.world.send_event(Tapped {
                node: earth,
                count: TapCount::Double,
            });
            app.update();
            let scale = app.world.get::<Transform>(earth).unwrap().scale;
            assert_eq!(scale, Vec3::splat(expected));
        }
    }

    #[test]
    fn single_taps_and_other_bodies_are_ignored() {
        let mut app = app();
        let earth = app
            .world
            .spawn((Transform::IDENTITY, ScaleCycling))
            .id();
        let moon = app.world.spawn(Transform::IDENTITY).id();

        app.world.send_event(Tapped {
            node: earth,
            count: TapCount::Single,
        });
        app.world.send_event(Tapped {
            node: moon,
            count: TapCount::Double,
        });
        app.update();

        assert_eq!(app.world.get::<Transform>(earth).unwrap().scale, Vec3::ONE);
        assert_eq!(app.world.get::<Transform>(moon).unwrap().scale, Vec3::ONE);
    }
}

// End of File
