// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Float(f32),
    String(String),
    FloatList(Vec<f32>),
}

impl SettingValue {
    pub fn type_as_string(&self) -> &str {
        match self {
            SettingValue::Bool(_) => "bool",
            SettingValue::Int(_) => "int",
            SettingValue::Float(_) => "float",
            SettingValue::String(_) => "string",
            SettingValue::FloatList(_) => "float list",
        }
    }

    /// Integers are accepted wherever a float is expected, since JSON does not tell `1` and
    /// `1.0` apart reliably.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            SettingValue::Float(value) => Some(*value),
            SettingValue::Int(value) => Some(*value as f32),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_f32_list(&self) -> Option<Vec<f32>> {
        match self {
            SettingValue::FloatList(values) => Some(values.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(value) => write!(f, "{}", value),
            SettingValue::Int(value) => write!(f, "{}", value),
            SettingValue::Float(value) => write!(f, "{}", value),
            SettingValue::String(value) => write!(f, "{}", value),
            SettingValue::FloatList(values) => write!(f, "{:?}", values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_json_picks_natural_variant() {
        let values: Vec<SettingValue> =
            serde_json::from_str(r#"[true, 3, 1.5, "indexed", [1.0, 2]]"#).unwrap();
        assert_eq!(
            values,
            vec![
                SettingValue::Bool(true),
                SettingValue::Int(3),
                SettingValue::Float(1.5),
                SettingValue::String("indexed".into()),
                SettingValue::FloatList(vec![1.0, 2.0]),
            ]
        );
    }

    #[test]
    fn ints_read_as_floats() {
        assert_eq!(SettingValue::Int(2).as_f32(), Some(2.0));
        assert_eq!(SettingValue::Bool(true).as_f32(), None);
    }
}

// End of File
