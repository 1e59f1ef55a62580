// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! A small volumetric scene of a sun, an earth and a moon, each of which reacts to its own set of
//! pointer gestures.

use bevy::prelude::*;

mod app;
pub use app::AppPlugin;

pub mod assets;
pub mod effect;
pub mod interaction;
pub mod planets;
pub mod scene;

mod start;
pub use start::start;

mod state;

pub const APP_NAME: &str = "Touchy Volumes";

// We use States to separate logic
// See https://bevy-cheatbook.github.io/programming/states.html
// Or https://github.com/bevyengine/bevy/blob/main/examples/ecs/state.rs
#[derive(States, Default, Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub enum AppState {
    // During the loading State the LoadingPlugin will load our assets
    #[default]
    Loading,
    // Once every body has loaded (or failed to), the volume is built and made interactive.
    Volume,
}

// End of File
