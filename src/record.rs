//! Workbook record and its enumerated fields
//!
//! The record is the unit of persistence: it is loaded and saved whole.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::consts::DAYS_PER_WEEK;

/// Unit label attached to the action frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ActionUnit {
    #[serde(rename = "時間")]
    Hours,
    #[default]
    #[serde(rename = "回")]
    Times,
    #[serde(rename = "ページ")]
    Pages,
}

impl ActionUnit {
    /// All units in the order the selector lists them
    pub const ALL: [ActionUnit; 3] = [ActionUnit::Hours, ActionUnit::Times, ActionUnit::Pages];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionUnit::Hours => "時間",
            ActionUnit::Times => "回",
            ActionUnit::Pages => "ページ",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.as_str() == s)
    }
}

/// Answer to "does the projection reach the ideal?"
///
/// Stored as `null`, `"yes"` or `"no"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reachability {
    /// No choice made yet
    #[default]
    Unset,
    /// The current action is enough
    Reachable,
    /// The action needs revising
    NotReachable,
}

impl Reachability {
    pub fn as_option_str(&self) -> Option<&'static str> {
        match self {
            Reachability::Unset => None,
            Reachability::Reachable => Some("yes"),
            Reachability::NotReachable => Some("no"),
        }
    }

    /// Parse a radio value; there is no radio for `Unset`
    pub fn from_choice(s: &str) -> Option<Self> {
        match s {
            "yes" => Some(Reachability::Reachable),
            "no" => Some(Reachability::NotReachable),
            _ => None,
        }
    }
}

impl Serialize for Reachability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_option_str() {
            Some(s) => serializer.serialize_str(s),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Reachability {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(Reachability::Unset),
            Some(s) => Reachability::from_choice(&s).ok_or_else(|| {
                de::Error::invalid_value(de::Unexpected::Str(&s), &"null, \"yes\" or \"no\"")
            }),
        }
    }
}

/// Day of the weekly log, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; DAYS_PER_WEEK] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }
}

/// All user-entered fields of the workbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkbookRecord {
    /// Present state (T0)
    pub current_status: String,
    /// Target state (T)
    pub ideal_status: String,
    /// Repeated action
    pub current_action: String,
    /// Times per week, kept as typed
    pub action_frequency: String,
    pub action_unit: ActionUnit,
    pub is_ideal_reachable: Reachability,
    /// Revised action, only shown when not reachable
    pub new_action: String,
    /// One entry per day, Monday first
    pub weekly_log: [String; DAYS_PER_WEEK],
}

impl WorkbookRecord {
    pub fn day(&self, day: Weekday) -> &str {
        &self.weekly_log[day.index()]
    }

    /// Copy with a single day of the log replaced
    pub fn with_day(&self, day: Weekday, text: impl Into<String>) -> Self {
        let mut weekly_log = self.weekly_log.clone();
        weekly_log[day.index()] = text.into();
        Self {
            weekly_log,
            ..self.clone()
        }
    }

    /// Copy with the log entry at `index` replaced
    ///
    /// # Panics
    /// If `index` is outside 0..7.
    pub fn with_day_index(&self, index: usize, text: impl Into<String>) -> Self {
        let day = Weekday::from_index(index)
            .unwrap_or_else(|| panic!("weekly log index {index} out of range 0..{DAYS_PER_WEEK}"));
        self.with_day(day, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record() {
        let record = WorkbookRecord::default();
        assert_eq!(record.action_unit, ActionUnit::Times);
        assert_eq!(record.is_ideal_reachable, Reachability::Unset);
        assert!(record.weekly_log.iter().all(String::is_empty));
        assert!(record.current_status.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let record = WorkbookRecord {
            action_frequency: "3".to_string(),
            is_ideal_reachable: Reachability::NotReachable,
            ..Default::default()
        };
        let json: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert_eq!(json["actionFrequency"], "3");
        assert_eq!(json["actionUnit"], "回");
        assert_eq!(json["isIdealReachable"], "no");
        assert_eq!(json["weeklyLog"].as_array().unwrap().len(), 7);
        assert!(json.get("newAction").is_some());

        let unset = serde_json::to_value(WorkbookRecord::default()).unwrap();
        assert!(unset["isIdealReachable"].is_null());
    }

    #[test]
    fn test_parses_stored_json() {
        let json = r#"{
            "currentStatus": "大学院生",
            "idealStatus": "博士課程進学",
            "currentAction": "note執筆",
            "actionFrequency": "2",
            "actionUnit": "ページ",
            "isIdealReachable": "yes",
            "newAction": "",
            "weeklyLog": ["a", "", "", "", "", "", "g"]
        }"#;
        let record: WorkbookRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.action_unit, ActionUnit::Pages);
        assert_eq!(record.is_ideal_reachable, Reachability::Reachable);
        assert_eq!(record.day(Weekday::Mon), "a");
        assert_eq!(record.day(Weekday::Sun), "g");
    }

    #[test]
    fn test_rejects_invalid_fields() {
        let base = serde_json::to_value(WorkbookRecord::default()).unwrap();

        let mut bad_unit = base.clone();
        bad_unit["actionUnit"] = "km".into();
        assert!(serde_json::from_value::<WorkbookRecord>(bad_unit).is_err());

        let mut short_log = base.clone();
        short_log["weeklyLog"] = serde_json::json!(["", "", ""]);
        assert!(serde_json::from_value::<WorkbookRecord>(short_log).is_err());

        let mut bad_choice = base;
        bad_choice["isIdealReachable"] = "maybe".into();
        assert!(serde_json::from_value::<WorkbookRecord>(bad_choice).is_err());
    }

    #[test]
    fn test_unit_labels() {
        for unit in ActionUnit::ALL {
            assert_eq!(ActionUnit::from_label(unit.as_str()), Some(unit));
        }
        assert_eq!(ActionUnit::from_label(""), None);
    }

    #[test]
    fn test_weekday_index() {
        for (i, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
            assert_eq!(Weekday::from_index(i), Some(*day));
        }
        assert_eq!(Weekday::from_index(7), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_day_index_out_of_range_panics() {
        WorkbookRecord::default().with_day_index(7, "x");
    }
}
