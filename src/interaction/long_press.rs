// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::prelude::*;
use bevy_mod_picking::{pointer::PointerId, prelude::*};
use gesture::LongPress;
use settings::InteractionSettings;

/// Live press state of the long-press gesture, which may start on any pickable entity.
#[derive(Resource, Debug)]
pub struct LongPressState {
    pub(crate) press: LongPress,
    /// The pointer holding the press; others are ignored until it lets go.
    pub(crate) pointer: Option<PointerId>,
}

impl LongPressState {
    pub fn new(settings: &InteractionSettings) -> Self {
        Self {
            press: LongPress::new(
                settings.long_press_seconds,
                settings.long_press_maximum_distance,
            ),
            pointer: None,
        }
    }

    pub fn is_pressing(&self) -> bool {
        self.press.is_pressing()
    }
}

pub(crate) fn track_long_press(
    time: Res<Time>,
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    mut state: ResMut<LongPressState>,
    mut downs: EventReader<Pointer<Down>>,
    mut drags: EventReader<Pointer<Drag>>,
    mut ups: EventReader<Pointer<Up>>,
) {
    let now = time.elapsed_seconds();
    let was_pressing = state.is_pressing();

    for down in downs.read() {
        if down.button != PointerButton::Primary || state.pointer.is_some() {
            continue;
        }
        state.pointer = Some(down.pointer_id);
        state.press.press(down.pointer_location.position, now);
    }

    let Some(pointer) = state.pointer else {
        drags.clear();
        ups.clear();
        return;
    };

    for drag in drags.read() {
        if drag.button == PointerButton::Primary && drag.pointer_id == pointer {
            state.press.moved(drag.pointer_location.position);
        }
    }

    // The pointer may be released away from any entity, in which case picking sends no `Up`.
    let lifted = ups
        .read()
        .filter(|up| up.button == PointerButton::Primary && up.pointer_id == pointer)
        .count();
    let released = lifted > 0
        || match pointer {
            PointerId::Mouse => mouse.just_released(MouseButton::Left),
            PointerId::Touch(id) => touches.just_released(id),
            PointerId::Custom(_) => false,
        };
    if released {
        state.press.release();
        state.pointer = None;
    }

    let pressing = state.press.tick(now);
    if pressing != was_pressing {
        debug!("Long press {}", if pressing { "began" } else { "ended" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::testing::{self, PRIMARY};

    fn app() -> (App, Entity) {
        let mut app = testing::app();
        app.insert_resource(LongPressState::new(&InteractionSettings::default()))
            .add_systems(Update, track_long_press);
        let body = app.world.spawn_empty().id();
        (app, body)
    }

    fn pressing(app: &App) -> bool {
        app.world.resource::<LongPressState>().is_pressing()
    }

    fn hold(app: &mut App, body: Entity) {
        app.world.send_event(testing::down(body, Vec2::new(10.0, 10.0), PRIMARY));
        app.update();
        testing::advance(app, 0.5);
        app.update();
        assert!(!pressing(app));
        testing::advance(app, 0.5);
        app.update();
    }

    #[test]
    fn held_press_turns_on_and_release_turns_off() {
        let (mut app, body) = app();
        hold(&mut app, body);
        assert!(pressing(&app));

        app.world.send_event(testing::up(body, Vec2::new(10.0, 10.0)));
        app.update();
        assert!(!pressing(&app));
    }

    #[test]
    fn wandering_press_never_turns_on() {
        let (mut app, body) = app();
        let origin = Vec2::new(10.0, 10.0);
        app.world.send_event(testing::down(body, origin, PRIMARY));
        app.world.send_event(testing::drag(
            body,
            origin,
            origin + Vec2::new(150.0, 0.0),
            PRIMARY,
        ));
        app.update();
        testing::advance(&mut app, 2.0);
        app.update();
        assert!(!pressing(&app));
    }

    #[test]
    fn secondary_drag_does_not_cancel() {
        let (mut app, body) = app();
        let origin = Vec2::new(10.0, 10.0);
        app.world.send_event(testing::down(body, origin, PRIMARY));
        app.world.send_event(testing::drag(
            body,
            origin,
            origin + Vec2::new(150.0, 0.0),
            PointerButton::Secondary,
        ));
        app.update();
        testing::advance(&mut app, 1.0);
        app.update();
        assert!(pressing(&app));
    }

    #[test]
    fn another_finger_lifting_does_not_release() {
        let (mut app, body) = app();
        hold(&mut app, body);

        let other = Up {
            button: PRIMARY,
            hit: testing::hit(),
        };
        app.world.send_event(testing::pointer(
            PointerId::Touch(1),
            body,
            Vec2::ZERO,
            other,
        ));
        app.update();
        assert!(pressing(&app));
    }
}

// End of File
