// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Builders for picking events, so the interaction systems can be driven without a window or a
//! picking backend.

use bevy::{prelude::*, render::camera::NormalizedRenderTarget};
use bevy_mod_picking::{
    backend::HitData,
    events::{Click, Down, Drag, DragStart, Out, Over, Pointer, Up},
    pointer::{Location, PointerButton, PointerId},
};
use std::time::Duration;

pub(crate) const PRIMARY: PointerButton = PointerButton::Primary;

pub(crate) fn hit() -> HitData {
    HitData::new(Entity::PLACEHOLDER, 0.0, None, None)
}

pub(crate) fn pointer<E>(id: PointerId, target: Entity, position: Vec2, event: E) -> Pointer<E>
where
    E: std::fmt::Debug + Clone + Reflect,
{
    let location = Location {
        target: NormalizedRenderTarget::Image(Handle::default()),
        position,
    };
    Pointer::new(id, location, target, event)
}

pub(crate) fn down(target: Entity, position: Vec2, button: PointerButton) -> Pointer<Down> {
    pointer(PointerId::Mouse, target, position, Down { button, hit: hit() })
}

pub(crate) fn up(target: Entity, position: Vec2) -> Pointer<Up> {
    let event = Up {
        button: PRIMARY,
        hit: hit(),
    };
    pointer(PointerId::Mouse, target, position, event)
}

pub(crate) fn drag_start(target: Entity, position: Vec2) -> Pointer<DragStart> {
    let event = DragStart {
        button: PRIMARY,
        hit: hit(),
    };
    pointer(PointerId::Mouse, target, position, event)
}

/// A drag event at `position` for a drag that began at `origin`.
pub(crate) fn drag(
    target: Entity,
    origin: Vec2,
    position: Vec2,
    button: PointerButton,
) -> Pointer<Drag> {
    let event = Drag {
        button,
        distance: position - origin,
        delta: position - origin,
    };
    pointer(PointerId::Mouse, target, position, event)
}

pub(crate) fn click(target: Entity, position: Vec2) -> Pointer<Click> {
    let event = Click {
        button: PRIMARY,
        hit: hit(),
    };
    pointer(PointerId::Mouse, target, position, event)
}

pub(crate) fn over(target: Entity) -> Pointer<Over> {
    pointer(PointerId::Mouse, target, Vec2::ZERO, Over { hit: hit() })
}

pub(crate) fn out(target: Entity) -> Pointer<Out> {
    pointer(PointerId::Mouse, target, Vec2::ZERO, Out { hit: hit() })
}

/// An app with the event channels and input resources the interaction systems read, but no
/// plugins that would feed them.  Time only moves when a test advances it.
pub(crate) fn app() -> App {
    let mut app = App::new();
    app.insert_resource(Time::<()>::default())
        .init_resource::<ButtonInput<MouseButton>>()
        .init_resource::<Touches>()
        .add_event::<Pointer<Down>>()
        .add_event::<Pointer<Up>>()
        .add_event::<Pointer<DragStart>>()
        .add_event::<Pointer<Drag>>()
        .add_event::<Pointer<Click>>()
        .add_event::<Pointer<Over>>()
        .add_event::<Pointer<Out>>();
    app
}

pub(crate) fn advance(app: &mut App, seconds: f32) {
    app.world
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(seconds));
}

// End of File
