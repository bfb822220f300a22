//! Attendance Requests

use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::models::{AttendanceFilterRow, AttendanceMark, AttendanceStatus};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MarkArgs<'a> {
    student_id: &'a str,
    date: &'a str,
    status: AttendanceStatus,
}

/// Rows come wrapped under an `attendance` key;
/// a missing key means no records for that date
#[derive(Deserialize, Default)]
struct AttendancePayload {
    #[serde(default)]
    attendance: Vec<AttendanceMark>,
}

impl ApiClient {
    /// Upsert one student's status for a date
    pub async fn mark_attendance(
        &self,
        student_id: &str,
        date: &str,
        status: AttendanceStatus,
    ) -> Result<(), String> {
        self.post_unit(
            "/attendance",
            &MarkArgs {
                student_id,
                date,
                status,
            },
        )
        .await
    }

    pub async fn attendance_by_standard(
        &self,
        standard: &str,
        date: &str,
    ) -> Result<Vec<AttendanceMark>, String> {
        let payload: AttendancePayload = self
            .get_json_query(
                &format!("/attendance/by-standard/{}", Self::seg(standard)),
                &[("date", date)],
            )
            .await?;
        Ok(payload.attendance)
    }

    pub async fn attendance_filter(
        &self,
        date: &str,
        standard: &str,
    ) -> Result<Vec<AttendanceFilterRow>, String> {
        self.get_json_query("/attendance/filter", &[("date", date), ("standard", standard)])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendance_payload_missing_key_is_empty() {
        let payload: AttendancePayload = serde_json::from_str("{}").unwrap();
        assert!(payload.attendance.is_empty());

        let json = r#"{"attendance":[{"studentId":"a","status":"Present"}]}"#;
        let payload: AttendancePayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.attendance.len(), 1);
        assert_eq!(payload.attendance[0].status, AttendanceStatus::Present);
    }

    #[test]
    fn test_mark_args_wire_names() {
        let args = MarkArgs {
            student_id: "a1",
            date: "2024-10-01",
            status: AttendanceStatus::Absent,
        };
        let json = serde_json::to_string(&args).unwrap();
        assert_eq!(
            json,
            r#"{"studentId":"a1","date":"2024-10-01","status":"Absent"}"#
        );
    }
}
