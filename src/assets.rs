// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::scene::CelestialBody;
use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;

/// A trait for asset libraries that can be loaded and checked
pub trait AssetLibrary: Resource {
    /// Load all assets in this library
    fn load(asset_server: &AssetServer) -> Self;

    /// Check if every asset in this library has either loaded or failed to load.  A failure is
    /// not an error here: whoever uses the library decides what to do without the asset.
    fn all_settled(&self, asset_server: &AssetServer) -> bool;
}

/// Resource that holds the glTF documents of the three bodies
#[derive(Resource, Default)]
pub struct CelestialAssets {
    pub sun: Handle<Gltf>,
    pub earth: Handle<Gltf>,
    pub moon: Handle<Gltf>,
}

impl CelestialAssets {
    pub fn handle(&self, body: CelestialBody) -> &Handle<Gltf> {
        match body {
            CelestialBody::Sun => &self.sun,
            CelestialBody::Earth => &self.earth,
            CelestialBody::Moon => &self.moon,
        }
    }

    /// The scene to instantiate for `body`, or `None` if its document is missing or empty.
    pub fn scene(&self, body: CelestialBody, gltfs: &Assets<Gltf>) -> Option<Handle<Scene>> {
        let gltf = gltfs.get(self.handle(body))?;
        gltf.default_scene
            .clone()
            .or_else(|| gltf.scenes.first().cloned())
    }
}

impl AssetLibrary for CelestialAssets {
    fn load(asset_server: &AssetServer) -> Self {
        CelestialAssets {
            sun: asset_server.load(CelestialBody::Sun.asset_path()),
            earth: asset_server.load(CelestialBody::Earth.asset_path()),
            moon: asset_server.load(CelestialBody::Moon.asset_path()),
        }
    }

    fn all_settled(&self, asset_server: &AssetServer) -> bool {
        let handles = [&self.sun, &self.earth, &self.moon];

        handles.iter().all(|handle| {
            matches!(
                asset_server.get_load_state(*handle),
                Some(LoadState::Loaded) | Some(LoadState::Failed)
            )
        })
    }
}

/// Generic system to load assets using the AssetLibrary trait
pub fn load_assets<T: AssetLibrary>(mut commands: Commands, asset_server: Res<AssetServer>) {
    let assets = T::load(&asset_server);
    commands.insert_resource(assets);
}

// End of File
