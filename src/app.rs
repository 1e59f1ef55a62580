// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{
    effect::EffectPlugin,
    interaction::InteractionPlugin,
    planets::PlanetPlugin,
    state::{LoadingPlugin, VolumePlugin},
    AppState,
};
use bevy::prelude::*;
use bevy_mod_picking::DefaultPickingPlugins;
use settings::InteractionSettings;

pub struct AppPlugin;

impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        // Settings must be in place before the interaction plugin builds its recognizers.
        if !app.world.contains_resource::<InteractionSettings>() {
            app.insert_resource(InteractionSettings::load());
        }

        app.init_state::<AppState>().add_plugins((
            DefaultPickingPlugins,
            LoadingPlugin,
            VolumePlugin,
            InteractionPlugin,
            EffectPlugin,
            PlanetPlugin,
        ));
    }
}

// End of File
