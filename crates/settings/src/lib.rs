// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Interaction tunables for Touchy Volumes.
//!
//! Everything has a built-in default.  Overrides are read (never written) from a JSON file of
//! named groups in the platform configuration directory, for example on Linux
//! `~/.config/touchyvolumes/settings.json`:
//!
//! ```json
//! { "scale": { "levels": [1.0, 1.5, 1.75], "policy": "indexed" },
//!   "pinch": { "max_scale": 3.0 } }
//! ```

mod setting_value;

pub use setting_value::SettingValue;

use bevy::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub type SettingsGroup = HashMap<String, SettingValue>;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("unable to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed settings file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("setting `{group}.{name}` should be a {expected}, found {found} `{value}`")]
    WrongType {
        group: String,
        name: String,
        expected: &'static str,
        found: String,
        value: String,
    },
}

/// Where the scale cycle gets its position from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScalePolicySetting {
    #[default]
    ExactMatch,
    Indexed,
}

#[derive(Resource, Clone, Debug, PartialEq)]
pub struct InteractionSettings {
    /// Degrees added or removed per drag event.
    pub rotation_step_degrees: f32,
    /// Uniform scales a double-tap cycles through.
    pub scale_levels: Vec<f32>,
    pub scale_policy: ScalePolicySetting,
    /// Optional lower bound on pinch scale.
    pub pinch_min_scale: Option<f32>,
    /// Optional upper bound on pinch scale.
    pub pinch_max_scale: Option<f32>,
    /// Seconds without a magnify delta after which a pinch is considered over.
    pub pinch_idle_seconds: f32,
    /// Pointer travel needed before a drag on the view handle is recognized.
    pub view_drag_minimum_distance: f32,
    /// Maximum seconds between the two clicks of a double-tap.
    pub double_tap_seconds: f32,
    /// Pointer travel (in logical pixels) a press may wander and still count as a tap.
    pub tap_maximum_distance: f32,
    pub long_press_seconds: f32,
    /// Pointer travel (in logical pixels) that cancels a long press.
    pub long_press_maximum_distance: f32,
    pub spawn_radius: (f32, f32),
    pub spawn_x: (f32, f32),
    pub spawn_y: (f32, f32),
    pub spawn_z: (f32, f32),
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            rotation_step_degrees: 5.0,
            scale_levels: vec![1.0, 1.5, 1.75],
            scale_policy: ScalePolicySetting::ExactMatch,
            pinch_min_scale: None,
            pinch_max_scale: None,
            pinch_idle_seconds: 0.25,
            view_drag_minimum_distance: 1.0,
            double_tap_seconds: 0.3,
            tap_maximum_distance: 10.0,
            long_press_seconds: 1.0,
            long_press_maximum_distance: 100.0,
            spawn_radius: (0.007, 0.04),
            spawn_x: (-0.4, 0.4),
            spawn_y: (-0.4, 0.4),
            spawn_z: (0.1, 0.4),
        }
    }
}

impl InteractionSettings {
    /// Path of the optional overrides file, if the platform has a configuration directory.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "touchyvolumes", "TouchyVolumes")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
    }

    /// Loads the defaults and applies whatever overrides can be found.  Problems with the
    /// overrides file are logged and otherwise ignored.
    pub fn load() -> Self {
        let mut settings = Self::default();
        let Some(path) = Self::default_path() else {
            warn!("No configuration directory available; using default interaction settings.");
            return settings;
        };
        if !path.exists() {
            debug!("No settings file at {}; using defaults.", path.display());
            return settings;
        }
        match settings.apply_file(&path) {
            Ok(()) => info!("Loaded interaction settings from {}", path.display()),
            Err(err) => {
                error!("{}", err);
                warn!("Falling back to default interaction settings.");
                settings = Self::default();
            }
        }
        settings
    }

    pub fn apply_file(&mut self, path: &Path) -> Result<(), SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_owned(),
            source,
        })?;
        self.apply_json(&text)
    }

    pub fn apply_json(&mut self, text: &str) -> Result<(), SettingsError> {
        let groups: HashMap<String, SettingsGroup> = serde_json::from_str(text)?;
        for (group, values) in &groups {
            self.apply_group(group, values)?;
        }
        Ok(())
    }

    /// Applies one named group of overrides.  Unknown groups and names are reported but not
    /// treated as errors; values of the wrong type are.
    pub fn apply_group(
        &mut self,
        group: &str,
        values: &SettingsGroup,
    ) -> Result<(), SettingsError> {
        for (name, value) in values {
            let float = || expect(group, name, value, "float", value.as_f32());
            let range = |current: (f32, f32)| -> Result<(f32, f32), SettingsError> {
                match value.as_f32_list().as_deref() {
                    Some([min, max]) if min <= max => Ok((*min, *max)),
                    _ => expect(group, name, value, "[min, max] pair", None).map(|()| current),
                }
            };
            match (group, name.as_str()) {
                ("rotation", "step_degrees") => self.rotation_step_degrees = float()?,
                ("scale", "levels") => {
                    self.scale_levels =
                        expect(group, name, value, "float list", value.as_f32_list())?
                }
                ("scale", "policy") => {
                    self.scale_policy = match value.as_str() {
                        Some("exact") => ScalePolicySetting::ExactMatch,
                        Some("indexed") => ScalePolicySetting::Indexed,
                        _ => expect(group, name, value, "\"exact\" or \"indexed\"", None)?,
                    }
                }
                ("pinch", "min_scale") => self.pinch_min_scale = Some(float()?),
                ("pinch", "max_scale") => self.pinch_max_scale = Some(float()?),
                ("pinch", "idle_seconds") => self.pinch_idle_seconds = float()?,
                ("view_drag", "minimum_distance") => self.view_drag_minimum_distance = float()?,
                ("tap", "double_tap_seconds") => self.double_tap_seconds = float()?,
                ("tap", "maximum_distance") => self.tap_maximum_distance = float()?,
                ("long_press", "seconds") => self.long_press_seconds = float()?,
                ("long_press", "maximum_distance") => {
                    self.long_press_maximum_distance = float()?
                }
                ("spawn", "radius") => self.spawn_radius = range(self.spawn_radius)?,
                ("spawn", "x") => self.spawn_x = range(self.spawn_x)?,
                ("spawn", "y") => self.spawn_y = range(self.spawn_y)?,
                ("spawn", "z") => self.spawn_z = range(self.spawn_z)?,
                _ => warn!("Ignoring unknown setting `{}.{}`", group, name),
            }
        }
        Ok(())
    }
}

fn expect<T>(
    group: &str,
    name: &str,
    value: &SettingValue,
    expected: &'static str,
    converted: Option<T>,
) -> Result<T, SettingsError> {
    converted.ok_or_else(|| SettingsError::WrongType {
        group: group.to_owned(),
        name: name.to_owned(),
        expected,
        found: value.type_as_string().to_owned(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = InteractionSettings::default();
        assert_eq!(settings.rotation_step_degrees, 5.0);
        assert_eq!(settings.scale_levels, vec![1.0, 1.5, 1.75]);
        assert_eq!(settings.scale_policy, ScalePolicySetting::ExactMatch);
        assert_eq!(settings.pinch_min_scale, None);
        assert_eq!(settings.pinch_max_scale, None);
        assert_eq!(settings.view_drag_minimum_distance, 1.0);
        assert_eq!(settings.long_press_seconds, 1.0);
        assert_eq!(settings.long_press_maximum_distance, 100.0);
        assert_eq!(settings.tap_maximum_distance, 10.0);
    }

    #[test]
    fn json_overrides_apply() {
        let mut settings = InteractionSettings::default();
        settings
            .apply_json(
                r#"{
                    "rotation": { "step_degrees": 10 },
                    "scale": { "levels": [1.0, 2.0], "policy": "indexed" },
                    "pinch": { "min_scale": 0.25, "max_scale": 3.0 },
                    "spawn": { "z": [0.2, 0.3] },
                    "tap": { "maximum_distance": 4 }
                }"#,
            )
            .unwrap();
        assert_eq!(settings.rotation_step_degrees, 10.0);
        assert_eq!(settings.scale_levels, vec![1.0, 2.0]);
        assert_eq!(settings.scale_policy, ScalePolicySetting::Indexed);
        assert_eq!(settings.pinch_min_scale, Some(0.25));
        assert_eq!(settings.pinch_max_scale, Some(3.0));
        assert_eq!(settings.spawn_z, (0.2, 0.3));
        assert_eq!(settings.spawn_x, (-0.4, 0.4));
        assert_eq!(settings.tap_maximum_distance, 4.0);
    }

    #[test]
    fn unknown_names_are_ignored() {
        let mut settings = InteractionSettings::default();
        settings
            .apply_json(r#"{ "colors": { "sun": "yellow" }, "rotation": { "wobble": 1 } }"#)
            .unwrap();
        assert_eq!(settings, InteractionSettings::default());
    }

    #[test]
    fn wrong_types_are_rejected() {
        let mut settings = InteractionSettings::default();
        let err = settings
            .apply_json(r#"{ "long_press": { "seconds": "soon" } }"#)
            .unwrap_err();
        assert!(matches!(err, SettingsError::WrongType { .. }));
        assert!(err.to_string().contains("long_press.seconds"));

        let err = settings
            .apply_json(r#"{ "spawn": { "x": [0.4, -0.4] } }"#)
            .unwrap_err();
        assert!(matches!(err, SettingsError::WrongType { .. }));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let mut settings = InteractionSettings::default();
        assert!(matches!(
            settings.apply_json("{ not json"),
            Err(SettingsError::Json(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let mut settings = InteractionSettings::default();
        let err = settings
            .apply_file(Path::new("/nonexistent/touchy/settings.json"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}

// End of File
