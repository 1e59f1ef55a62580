// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! The tap-driven shader effect toggle.
//!
//! Every tap flips a node between two parameter presets and produces an [`EffectRequest`] that
//! is resolved asynchronously.  Requests carry a per-node sequence number so that a slow,
//! stale request can be recognised and dropped once a newer toggle has been issued.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

pub const MAXIMUM_SIZE: &str = "MaximumSize";
pub const SPEED: &str = "Speed";

/// A single value in a material parameter set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParameterValue {
    Float(f32),
    Bool(bool),
}

impl ParameterValue {
    fn type_name(&self) -> &'static str {
        match self {
            ParameterValue::Float(_) => "float",
            ParameterValue::Bool(_) => "bool",
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Float(value) => write!(f, "{}", value),
            ParameterValue::Bool(value) => write!(f, "{}", value),
        }
    }
}

/// Named parameters handed to the material system.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParameterSet(BTreeMap<String, ParameterValue>);

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: ParameterValue) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// The two fixed presets the effect switches between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectPreset {
    Animated,
    Resting,
}

impl EffectPreset {
    pub fn for_state(animated: bool) -> Self {
        if animated {
            EffectPreset::Animated
        } else {
            EffectPreset::Resting
        }
    }

    pub fn parameters(self) -> ParameterSet {
        let (maximum_size, speed) = match self {
            EffectPreset::Animated => (5.0, 0.5),
            EffectPreset::Resting => (0.0, 1.0),
        };
        ParameterSet::new()
            .with(MAXIMUM_SIZE, ParameterValue::Float(maximum_size))
            .with(SPEED, ParameterValue::Float(speed))
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EffectError {
    /// The material, or the node that should carry it, could not be found.  Not fatal: the
    /// update is simply abandoned.
    #[error("effect material `{0}` not found")]
    MaterialNotFound(String),
    /// The material refused a parameter.  This means the assets and the code disagree, and
    /// cannot be recovered from at runtime.
    #[error("material parameter `{name}` rejected: {reason}")]
    ParameterRejected { name: String, reason: String },
}

impl EffectError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, EffectError::ParameterRejected { .. })
    }
}

/// Typed parameters of the pulse effect, validated from a [`ParameterSet`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseParameters {
    pub maximum_size: f32,
    pub speed: f32,
}

impl TryFrom<&ParameterSet> for PulseParameters {
    type Error = EffectError;

    fn try_from(parameters: &ParameterSet) -> Result<Self, Self::Error> {
        let mut maximum_size = None;
        let mut speed = None;

        for (name, value) in parameters.iter() {
            let slot = match name {
                MAXIMUM_SIZE => &mut maximum_size,
                SPEED => &mut speed,
                _ => {
                    return Err(EffectError::ParameterRejected {
                        name: name.to_owned(),
                        reason: "no such parameter".to_owned(),
                    })
                }
            };
            match value {
                ParameterValue::Float(value) if value.is_finite() => *slot = Some(*value),
                other => {
                    return Err(EffectError::ParameterRejected {
                        name: name.to_owned(),
                        reason: format!(
                            "expected a finite float, got {} `{}`",
                            other.type_name(),
                            other
                        ),
                    })
                }
            }
        }

        let missing = |name: &str| EffectError::ParameterRejected {
            name: name.to_owned(),
            reason: "missing".to_owned(),
        };
        Ok(Self {
            maximum_size: maximum_size.ok_or_else(|| missing(MAXIMUM_SIZE))?,
            speed: speed.ok_or_else(|| missing(SPEED))?,
        })
    }
}

/// One issued parameter update.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectRequest {
    pub sequence: u64,
    pub preset: EffectPreset,
}

impl EffectRequest {
    pub fn parameters(&self) -> ParameterSet {
        self.preset.parameters()
    }
}

/// Per-node effect state: OFF initially, every tap toggles, no terminal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectToggle {
    animated: bool,
    latest: u64,
}

impl EffectToggle {
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// Flips the flag and issues exactly one request for the preset of the new state.
    pub fn toggle(&mut self) -> EffectRequest {
        self.animated = !self.animated;
        self.latest += 1;
        EffectRequest {
            sequence: self.latest,
            preset: EffectPreset::for_state(self.animated),
        }
    }

    /// Whether a completed request is still the newest one issued.
    pub fn is_latest(&self, sequence: u64) -> bool {
        sequence == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_taps_restore_flag() {
        let mut toggle = EffectToggle::default();
        assert!(!toggle.is_animated());

        let first = toggle.toggle();
        assert!(toggle.is_animated());
        assert_eq!(first.preset, EffectPreset::Animated);

        let second = toggle.toggle();
        assert!(!toggle.is_animated());
        assert_eq!(second.preset, EffectPreset::Resting);
        assert!(second.sequence > first.sequence);
    }

    #[test]
    fn only_newest_request_is_current() {
        let mut toggle = EffectToggle::default();
        let stale = toggle.toggle();
        let fresh = toggle.toggle();
        assert!(!toggle.is_latest(stale.sequence));
        assert!(toggle.is_latest(fresh.sequence));
    }

    #[test]
    fn presets_match_pulse_values() {
        let on = PulseParameters::try_from(&EffectPreset::Animated.parameters()).unwrap();
        assert_eq!(
            on,
            PulseParameters {
                maximum_size: 5.0,
                speed: 0.5
            }
        );
        let off = PulseParameters::try_from(&EffectPreset::Resting.parameters()).unwrap();
        assert_eq!(
            off,
            PulseParameters {
                maximum_size: 0.0,
                speed: 1.0
            }
        );
    }

    #[test]
    fn unknown_parameter_is_fatal() {
        let parameters = EffectPreset::Animated
            .parameters()
            .with("Radius", ParameterValue::Float(1.0));
        let err = PulseParameters::try_from(&parameters).unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("Radius"));
    }

    #[test]
    fn wrong_type_is_fatal() {
        let parameters = ParameterSet::new()
            .with(MAXIMUM_SIZE, ParameterValue::Bool(true))
            .with(SPEED, ParameterValue::Float(1.0));
        assert!(PulseParameters::try_from(&parameters).unwrap_err().is_fatal());
    }

    #[test]
    fn missing_material_is_not_fatal() {
        assert!(!EffectError::MaterialNotFound("Sphere".into()).is_fatal());
    }
}

// End of File
