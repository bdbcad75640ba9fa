//! Form state store
//!
//! Holds the current record. Every change goes through [`FieldUpdate`], which
//! replaces exactly one field and leaves the rest untouched.

use crate::record::{ActionUnit, Reachability, Weekday, WorkbookRecord};

/// A single field change coming from the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    CurrentStatus(String),
    IdealStatus(String),
    CurrentAction(String),
    ActionFrequency(String),
    ActionUnit(ActionUnit),
    Reachability(Reachability),
    NewAction(String),
    WeeklyLog { day: Weekday, text: String },
}

impl FieldUpdate {
    /// Record field name as stored
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldUpdate::CurrentStatus(_) => "currentStatus",
            FieldUpdate::IdealStatus(_) => "idealStatus",
            FieldUpdate::CurrentAction(_) => "currentAction",
            FieldUpdate::ActionFrequency(_) => "actionFrequency",
            FieldUpdate::ActionUnit(_) => "actionUnit",
            FieldUpdate::Reachability(_) => "isIdealReachable",
            FieldUpdate::NewAction(_) => "newAction",
            FieldUpdate::WeeklyLog { .. } => "weeklyLog",
        }
    }

    /// Build an update from a field name and the raw control value
    ///
    /// Returns `None` for unknown fields and for values the field cannot hold.
    pub fn from_input(field: &str, value: &str) -> Option<Self> {
        let value_owned = value.to_string();
        match field {
            "currentStatus" => Some(FieldUpdate::CurrentStatus(value_owned)),
            "idealStatus" => Some(FieldUpdate::IdealStatus(value_owned)),
            "currentAction" => Some(FieldUpdate::CurrentAction(value_owned)),
            "actionFrequency" => Some(FieldUpdate::ActionFrequency(value_owned)),
            "actionUnit" => ActionUnit::from_label(value).map(FieldUpdate::ActionUnit),
            "isIdealReachable" => Reachability::from_choice(value).map(FieldUpdate::Reachability),
            "newAction" => Some(FieldUpdate::NewAction(value_owned)),
            _ => None,
        }
    }

    /// Apply to a record, producing the updated copy
    pub fn apply_to(self, record: &WorkbookRecord) -> WorkbookRecord {
        match self {
            FieldUpdate::CurrentStatus(current_status) => WorkbookRecord {
                current_status,
                ..record.clone()
            },
            FieldUpdate::IdealStatus(ideal_status) => WorkbookRecord {
                ideal_status,
                ..record.clone()
            },
            FieldUpdate::CurrentAction(current_action) => WorkbookRecord {
                current_action,
                ..record.clone()
            },
            FieldUpdate::ActionFrequency(action_frequency) => WorkbookRecord {
                action_frequency,
                ..record.clone()
            },
            FieldUpdate::ActionUnit(action_unit) => WorkbookRecord {
                action_unit,
                ..record.clone()
            },
            FieldUpdate::Reachability(is_ideal_reachable) => WorkbookRecord {
                is_ideal_reachable,
                ..record.clone()
            },
            FieldUpdate::NewAction(new_action) => WorkbookRecord {
                new_action,
                ..record.clone()
            },
            FieldUpdate::WeeklyLog { day, text } => record.with_day(day, text),
        }
    }
}

/// Current workbook state
#[derive(Debug, Clone, Default)]
pub struct WorkbookStore {
    record: WorkbookRecord,
}

impl WorkbookStore {
    pub fn new(record: WorkbookRecord) -> Self {
        Self { record }
    }

    pub fn record(&self) -> &WorkbookRecord {
        &self.record
    }

    pub fn apply(&mut self, update: FieldUpdate) {
        log::debug!("Field update: {}", update.field_name());
        self.record = update.apply_to(&self.record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_record() -> WorkbookRecord {
        WorkbookRecord {
            current_status: "貯金100万円".to_string(),
            ideal_status: "月1万PV".to_string(),
            current_action: "note執筆".to_string(),
            action_frequency: "1".to_string(),
            action_unit: ActionUnit::Hours,
            is_ideal_reachable: Reachability::NotReachable,
            new_action: "週2回にする".to_string(),
            weekly_log: std::array::from_fn(|i| format!("day {i}")),
        }
    }

    #[test]
    fn test_apply_replaces_one_field() {
        let mut store = WorkbookStore::new(sample_record());
        store.apply(FieldUpdate::CurrentAction("読書".to_string()));

        let expected = WorkbookRecord {
            current_action: "読書".to_string(),
            ..sample_record()
        };
        assert_eq!(store.record(), &expected);
    }

    #[test]
    fn test_weekly_log_update() {
        let mut store = WorkbookStore::default();
        store.apply(FieldUpdate::WeeklyLog {
            day: Weekday::Wed,
            text: "30分走った".to_string(),
        });
        assert_eq!(store.record().weekly_log[2], "30分走った");
        assert_eq!(store.record().weekly_log.len(), 7);
        assert_eq!(
            store.record().weekly_log.iter().filter(|d| !d.is_empty()).count(),
            1
        );
    }

    #[test]
    fn test_from_input() {
        assert_eq!(
            FieldUpdate::from_input("actionUnit", "ページ"),
            Some(FieldUpdate::ActionUnit(ActionUnit::Pages))
        );
        assert_eq!(
            FieldUpdate::from_input("isIdealReachable", "no"),
            Some(FieldUpdate::Reachability(Reachability::NotReachable))
        );
        assert_eq!(FieldUpdate::from_input("actionUnit", "km"), None);
        assert_eq!(FieldUpdate::from_input("isIdealReachable", ""), None);
        assert_eq!(FieldUpdate::from_input("weeklyLog", "x"), None);
        assert_eq!(
            FieldUpdate::from_input("idealStatus", "x").map(|u| u.field_name()),
            Some("idealStatus")
        );
    }

    fn field_update() -> impl Strategy<Value = FieldUpdate> {
        prop_oneof![
            ".*".prop_map(FieldUpdate::CurrentStatus),
            ".*".prop_map(FieldUpdate::IdealStatus),
            ".*".prop_map(FieldUpdate::CurrentAction),
            ".*".prop_map(FieldUpdate::ActionFrequency),
            prop::sample::select(ActionUnit::ALL.to_vec()).prop_map(FieldUpdate::ActionUnit),
            prop::sample::select(vec![Reachability::Reachable, Reachability::NotReachable])
                .prop_map(FieldUpdate::Reachability),
            ".*".prop_map(FieldUpdate::NewAction),
        ]
    }

    /// Serialize every field except `skip` for comparison
    fn other_fields(record: &WorkbookRecord, skip: &str) -> serde_json::Value {
        let mut value = serde_json::to_value(record).unwrap();
        value.as_object_mut().unwrap().remove(skip);
        value
    }

    proptest! {
        #[test]
        fn prop_update_leaves_other_fields(update in field_update()) {
            let before = sample_record();
            let name = update.field_name();
            let after = update.apply_to(&before);
            prop_assert_eq!(other_fields(&before, name), other_fields(&after, name));
        }

        #[test]
        fn prop_weekly_log_changes_only_index(index in 0usize..7, text in ".*") {
            let before = sample_record();
            let after = before.with_day_index(index, text.clone());
            prop_assert_eq!(after.weekly_log.len(), 7);
            for i in 0..7 {
                if i == index {
                    prop_assert_eq!(&after.weekly_log[i], &text);
                } else {
                    prop_assert_eq!(&after.weekly_log[i], &before.weekly_log[i]);
                }
            }
            prop_assert_eq!(
                other_fields(&before, "weeklyLog"),
                other_fields(&after, "weeklyLog")
            );
        }
    }
}
