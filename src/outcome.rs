//! Bulk Submit Outcomes
//!
//! Attendance and result entry both submit one request per student.
//! The report keeps per-student outcomes so a partial failure names
//! exactly who was saved and who was not.

/// Per-student outcome of a bulk submit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaveReport {
    saved: Vec<String>,
    failed: Vec<String>,
    skipped: Vec<String>,
}

impl SaveReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_saved(&mut self, name: &str) {
        self.saved.push(name.to_string());
    }

    pub fn record_failed(&mut self, name: &str) {
        self.failed.push(name.to_string());
    }

    /// Students never attempted because the submit stopped early
    pub fn record_skipped(&mut self, name: &str) {
        self.skipped.push(name.to_string());
    }

    pub fn saved_count(&self) -> usize {
        self.saved.len()
    }

    pub fn all_saved(&self) -> bool {
        self.failed.is_empty() && self.skipped.is_empty()
    }

    /// One-line report for the popup, e.g.
    /// "Saved 2 of 4; failed: Amit; not attempted: Sita"
    pub fn summary(&self) -> String {
        let total = self.saved.len() + self.failed.len() + self.skipped.len();
        let mut line = format!("Saved {} of {}", self.saved.len(), total);
        if !self.failed.is_empty() {
            line.push_str(&format!("; failed: {}", self.failed.join(", ")));
        }
        if !self.skipped.is_empty() {
            line.push_str(&format!("; not attempted: {}", self.skipped.join(", ")));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_report_summary() {
        let mut report = SaveReport::new();
        report.record_saved("Ravi");
        report.record_saved("Amit");
        report.record_failed("Sita");
        report.record_skipped("Mira");

        // Should be: counts in order, failures and skips named
        assert!(!report.all_saved());
        assert_eq!(report.saved_count(), 2);
        assert_eq!(
            report.summary(),
            "Saved 2 of 4; failed: Sita; not attempted: Mira"
        );
    }

    #[test]
    fn test_save_report_all_saved() {
        let mut report = SaveReport::new();
        report.record_saved("Ravi");
        report.record_saved("Amit");

        assert!(report.all_saved());
        assert_eq!(report.summary(), "Saved 2 of 2");
    }

    #[test]
    fn test_save_report_empty() {
        let report = SaveReport::new();
        // Vacuously complete; nothing was submitted
        assert!(report.all_saved());
        assert_eq!(report.summary(), "Saved 0 of 0");
    }
}
