//! What the page shows for the current state
//!
//! Built fresh on every render; the DOM layer only copies these values out.

use crate::ack::{AckStatus, SaveAck};
use crate::labels;
use crate::projection::{Projection, project};
use crate::record::{Reachability, WorkbookRecord};

/// Follow-up panel under the reachability question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    None,
    /// Current action is on track; no input
    Affirmation,
    /// Action needs revising; shows the new-action input
    Revision,
}

impl Panel {
    pub fn for_reachability(reachability: Reachability) -> Self {
        match reachability {
            Reachability::Unset => Panel::None,
            Reachability::Reachable => Panel::Affirmation,
            Reachability::NotReachable => Panel::Revision,
        }
    }

    pub fn shows_affirmation(&self) -> bool {
        *self == Panel::Affirmation
    }

    pub fn shows_revision(&self) -> bool {
        *self == Panel::Revision
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkbookView {
    pub projection: Projection,
    pub panel: Panel,
    pub reachable_checked: bool,
    pub not_reachable_checked: bool,
    pub save_status: AckStatus,
    /// Days with a non-empty entry get a marker dot
    pub day_markers: [bool; 7],
}

impl WorkbookView {
    pub fn build(record: &WorkbookRecord, ack: &SaveAck) -> Self {
        let reachability = record.is_ideal_reachable;
        Self {
            projection: project(&record.action_frequency, record.action_unit),
            panel: Panel::for_reachability(reachability),
            reachable_checked: reachability == Reachability::Reachable,
            not_reachable_checked: reachability == Reachability::NotReachable,
            save_status: ack.status(),
            day_markers: std::array::from_fn(|i| !record.weekly_log[i].is_empty()),
        }
    }

    /// Full projection line
    pub fn projection_line(&self) -> String {
        format!(
            "{}{}{}",
            labels::PROJECTION_LEAD,
            self.projection,
            labels::PROJECTION_TAIL
        )
    }

    pub fn save_label(&self) -> &'static str {
        match self.save_status {
            AckStatus::Idle => labels::SAVE,
            AckStatus::Saved => labels::SAVED,
            AckStatus::Failed => labels::SAVE_FAILED,
        }
    }

    /// CSS class for the save button
    pub fn save_class(&self) -> &'static str {
        match self.save_status {
            AckStatus::Idle => "save-btn",
            AckStatus::Saved => "save-btn saved",
            AckStatus::Failed => "save-btn failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Weekday;

    fn view_for(reachability: Reachability) -> WorkbookView {
        let record = WorkbookRecord {
            is_ideal_reachable: reachability,
            ..Default::default()
        };
        WorkbookView::build(&record, &SaveAck::default())
    }

    #[test]
    fn test_panels_mutually_exclusive() {
        for reachability in [
            Reachability::Unset,
            Reachability::Reachable,
            Reachability::NotReachable,
        ] {
            let view = view_for(reachability);
            assert!(!(view.panel.shows_affirmation() && view.panel.shows_revision()));
            assert!(!(view.reachable_checked && view.not_reachable_checked));
        }
    }

    #[test]
    fn test_panel_per_choice() {
        assert_eq!(view_for(Reachability::Unset).panel, Panel::None);

        let reachable = view_for(Reachability::Reachable);
        assert!(reachable.panel.shows_affirmation());
        assert!(!reachable.panel.shows_revision());
        assert!(reachable.reachable_checked);

        let not_reachable = view_for(Reachability::NotReachable);
        assert!(not_reachable.panel.shows_revision());
        assert!(not_reachable.not_reachable_checked);
    }

    #[test]
    fn test_projection_line() {
        let record = WorkbookRecord {
            action_frequency: "3".to_string(),
            ..Default::default()
        };
        let view = WorkbookView::build(&record, &SaveAck::default());
        assert_eq!(view.projection_line(), "積分結果予測： １年間で 156 回 の積み上げ");

        let empty = WorkbookView::build(&WorkbookRecord::default(), &SaveAck::default());
        assert_eq!(
            empty.projection_line(),
            "積分結果予測： 数値を入力すると計算されます の積み上げ"
        );
    }

    #[test]
    fn test_save_label_follows_ack() {
        let mut ack = SaveAck::default();
        let record = WorkbookRecord::default();
        assert_eq!(WorkbookView::build(&record, &ack).save_label(), "保存");

        ack.arm(AckStatus::Saved, 0.0);
        let view = WorkbookView::build(&record, &ack);
        assert_eq!(view.save_label(), "保存完了");
        assert_eq!(view.save_class(), "save-btn saved");

        ack.arm(AckStatus::Failed, 0.0);
        assert_eq!(WorkbookView::build(&record, &ack).save_label(), "保存失敗");
    }

    #[test]
    fn test_day_markers() {
        let record = WorkbookRecord::default()
            .with_day(Weekday::Tue, "走った")
            .with_day(Weekday::Sun, "休み");
        let view = WorkbookView::build(&record, &SaveAck::default());
        assert_eq!(
            view.day_markers,
            [false, true, false, false, false, false, true]
        );
    }
}
