// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::assets::{load_assets, AssetLibrary, CelestialAssets};
use crate::AppState;
use bevy::app::App;
use bevy::prelude::*;

pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize asset loading when entering the Loading state
            .add_systems(OnEnter(AppState::Loading), load_assets::<CelestialAssets>)
            // Continuously check if assets are ready while in the Loading state
            .add_systems(
                Update,
                check_asset_loading.run_if(in_state(AppState::Loading)),
            );
    }
}

/// System to check if every body has loaded (or failed to) and transition states when ready
fn check_asset_loading(
    mut next_state: ResMut<NextState<AppState>>,
    asset_server: Res<AssetServer>,
    celestial_assets: Res<CelestialAssets>,
) {
    if celestial_assets.all_settled(&asset_server) {
        info!("All body assets settled, transitioning to Volume state");
        next_state.set(AppState::Volume);
    }
}

// End of File
