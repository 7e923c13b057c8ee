use serde::{Deserialize, Serialize};

use crate::time_value::TimeValue;

/// The five time inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Start,
    Work,
    Lunch,
    Overtime,
    CompTime,
}

impl TimeField {
    pub const ALL: [TimeField; 5] = [
        TimeField::Start,
        TimeField::Work,
        TimeField::Lunch,
        TimeField::Overtime,
        TimeField::CompTime,
    ];
}

/// Request body of `calculate`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationPayload {
    pub start: TimeValue,
    pub work: TimeValue,
    pub lunch: TimeValue,
    pub ot: TimeValue,
    pub ct: TimeValue,
}

/// Initial form values handed out by `get_defaults`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(rename = "StartTime")]
    pub start: TimeValue,
    #[serde(rename = "WorkTime")]
    pub work: TimeValue,
    #[serde(rename = "LunchTime")]
    pub lunch: TimeValue,
    #[serde(rename = "OvertimeGoal")]
    pub overtime_goal: TimeValue,
    #[serde(rename = "CompTimeGoal")]
    pub comp_time_goal: TimeValue,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            start: TimeValue::new(7, 30),
            work: TimeValue::new(8, 0),
            lunch: TimeValue::new(0, 30),
            overtime_goal: TimeValue::default(),
            comp_time_goal: TimeValue::default(),
        }
    }
}

impl Defaults {
    pub fn value(&self, field: TimeField) -> TimeValue {
        match field {
            TimeField::Start => self.start,
            TimeField::Work => self.work,
            TimeField::Lunch => self.lunch,
            TimeField::Overtime => self.overtime_goal,
            TimeField::CompTime => self.comp_time_goal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub author: String,
    pub version: String,
    pub fullname: String,
}

/// The part of the settings document the form cares about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_service_key_names() {
        let json = r#"{
            "StartTime": {"h": 6, "m": 45},
            "WorkTime": {"h": 7, "m": 48},
            "LunchTime": {"h": 0, "m": 30},
            "OvertimeGoal": {"h": 1, "m": 0},
            "CompTimeGoal": {"h": 0, "m": 15}
        }"#;
        let defaults: Defaults = serde_json::from_str(json).unwrap();
        assert_eq!(defaults.value(TimeField::Start), TimeValue::new(6, 45));
        assert_eq!(defaults.value(TimeField::Work), TimeValue::new(7, 48));
        assert_eq!(defaults.value(TimeField::CompTime), TimeValue::new(0, 15));
    }

    #[test]
    fn payload_field_names() {
        let payload = CalculationPayload {
            start: TimeValue::new(8, 0),
            ..Default::default()
        };
        let value = serde_json::to_value(payload).unwrap();
        assert_eq!(value["start"]["h"], 8);
        for key in ["work", "lunch", "ot", "ct"] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn settings_theme_is_optional() {
        let settings: Settings = serde_json::from_str(r#"{"other": 1}"#).unwrap();
        assert!(settings.theme.is_none());
    }
}
