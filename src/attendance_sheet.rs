//! Attendance Sheet
//!
//! In-memory sheet for one standard/date selection. Only explicit
//! selections are stored; everyone else falls back to absent when the
//! sheet is submitted, so a fresh save always covers the full roster.

use std::collections::HashMap;

use crate::models::{AttendanceMark, AttendanceStatus, Student};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceSheet {
    statuses: HashMap<String, AttendanceStatus>,
    existing: bool,
}

impl AttendanceSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill from the records the server already has for this date.
    /// A non-empty response means this save is an update.
    pub fn from_marks(marks: Vec<AttendanceMark>) -> Self {
        let existing = !marks.is_empty();
        let statuses = marks
            .into_iter()
            .map(|m| (m.student_id, m.status))
            .collect();
        Self { statuses, existing }
    }

    /// Whether the server already had records for this date
    pub fn exists(&self) -> bool {
        self.existing
    }

    pub fn mark_saved(&mut self) {
        self.existing = true;
    }

    /// Explicit selection for one student, None when untouched.
    /// Untouched rows highlight neither toggle button.
    pub fn status_of(&self, student_id: &str) -> Option<AttendanceStatus> {
        self.statuses.get(student_id).copied()
    }

    pub fn set_status(&mut self, student_id: &str, status: AttendanceStatus) {
        self.statuses.insert(student_id.to_string(), status);
    }

    /// Bulk buttons act on the rows currently visible, not the full roster
    pub fn bulk_apply<'a>(
        &mut self,
        student_ids: impl IntoIterator<Item = &'a str>,
        status: AttendanceStatus,
    ) {
        for id in student_ids {
            self.statuses.insert(id.to_string(), status);
        }
    }

    /// One mark per roster student, in roster order, unset rows absent
    pub fn save_plan(&self, roster: &[Student]) -> Vec<AttendanceMark> {
        roster
            .iter()
            .map(|s| AttendanceMark {
                student_id: s.id.clone(),
                status: self.status_of(&s.id).unwrap_or_default(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_student(id: &str, name: &str) -> Student {
        Student {
            id: id.to_string(),
            name: name.to_string(),
            roll_number: "1".to_string(),
            standard: "5".to_string(),
            section: "A".to_string(),
            father_name: String::new(),
            mother_name: String::new(),
            phone: String::new(),
            address: String::new(),
        }
    }

    fn make_mark(id: &str, status: AttendanceStatus) -> AttendanceMark {
        AttendanceMark {
            student_id: id.to_string(),
            status,
        }
    }

    #[test]
    fn test_fresh_sheet_defaults_absent() {
        let sheet = AttendanceSheet::new();
        let roster = vec![make_student("a", "Ravi"), make_student("b", "Amit")];

        // Should be: no existing records, nothing highlighted, everyone
        // absent in the submitted plan
        assert!(!sheet.exists());
        assert_eq!(sheet.status_of("a"), None);

        let plan = sheet.save_plan(&roster);
        assert_eq!(plan.len(), 2);
        assert!(plan.iter().all(|m| m.status == AttendanceStatus::Absent));
    }

    #[test]
    fn test_prefill_covers_partial_records() {
        let marks = vec![
            make_mark("a", AttendanceStatus::Present),
            make_mark("b", AttendanceStatus::Absent),
        ];
        let sheet = AttendanceSheet::from_marks(marks);
        let roster = vec![
            make_student("a", "Ravi"),
            make_student("b", "Amit"),
            make_student("c", "Sita"),
        ];

        // Should be: the two recorded students keep their status, the
        // third stays unset and submits as absent
        assert!(sheet.exists());
        assert_eq!(sheet.status_of("a"), Some(AttendanceStatus::Present));
        assert_eq!(sheet.status_of("b"), Some(AttendanceStatus::Absent));
        assert_eq!(sheet.status_of("c"), None);

        let plan = sheet.save_plan(&roster);
        assert_eq!(plan[0].status, AttendanceStatus::Present);
        assert_eq!(plan[2].status, AttendanceStatus::Absent);
    }

    #[test]
    fn test_empty_prefill_is_not_existing() {
        let sheet = AttendanceSheet::from_marks(Vec::new());
        assert!(!sheet.exists());
    }

    #[test]
    fn test_bulk_apply_touches_only_given_ids() {
        let mut sheet = AttendanceSheet::new();
        let roster = vec![
            make_student("a", "Ravi"),
            make_student("b", "Amit"),
            make_student("c", "Sita"),
        ];

        // Simulates "All Present" while a search hides student c
        sheet.bulk_apply(["a", "b"], AttendanceStatus::Present);

        assert_eq!(sheet.status_of("a"), Some(AttendanceStatus::Present));
        assert_eq!(sheet.status_of("b"), Some(AttendanceStatus::Present));
        assert_eq!(sheet.status_of("c"), None);

        let plan = sheet.save_plan(&roster);
        assert_eq!(plan[2].status, AttendanceStatus::Absent);
    }

    #[test]
    fn test_set_status_overrides_previous_choice() {
        let mut sheet = AttendanceSheet::new();
        sheet.set_status("a", AttendanceStatus::Present);
        sheet.set_status("a", AttendanceStatus::Absent);
        assert_eq!(sheet.status_of("a"), Some(AttendanceStatus::Absent));
    }

    #[test]
    fn test_mark_saved_flips_to_update_mode() {
        let mut sheet = AttendanceSheet::new();
        sheet.mark_saved();
        assert!(sheet.exists());
    }
}
