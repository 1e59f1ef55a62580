// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{AppPlugin, APP_NAME};
use bevy::{asset::AssetMetaCheck, log::LogPlugin, prelude::*, window::PresentMode};

const LOG_FILTER: &str = "wgpu=error,naga=warn,touchy_volumes=debug,touchy_gesture=debug";

pub fn start() {
    let window_plugin = WindowPlugin {
        primary_window: Some(Window {
            title: APP_NAME.into(),
            present_mode: PresentMode::AutoNoVsync,
            ..default()
        }),
        ..default()
    };

    let log_plugin = LogPlugin {
        filter: LOG_FILTER.into(),
        ..default()
    };

    let default_plugins = DefaultPlugins.set(window_plugin).set(log_plugin);

    App::new()
        // Prevents the overhead of checking for meta files next to every asset.
        .insert_resource(AssetMetaCheck::Never)
        .add_plugins(default_plugins)
        .add_plugins(AppPlugin)
        .run();
}

// End of File
