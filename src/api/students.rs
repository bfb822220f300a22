//! Student Requests
//!
//! CRUD against the student collection plus the by-standard roster
//! lookup shared by the attendance and results screens.

use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::models::Student;

/// Outbound create/update body; the full record is sent both times
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPayload<'a> {
    pub name: &'a str,
    pub roll_number: &'a str,
    pub standard: &'a str,
    pub section: &'a str,
    pub father_name: &'a str,
    pub mother_name: &'a str,
    pub phone: &'a str,
    pub address: &'a str,
}

/// The by-standard endpoint answers `{"students": [...]}` or a bare array
#[derive(Deserialize)]
#[serde(untagged)]
enum RosterPayload {
    Wrapped { students: Vec<Student> },
    Bare(Vec<Student>),
}

impl RosterPayload {
    fn into_students(self) -> Vec<Student> {
        match self {
            RosterPayload::Wrapped { students } => students,
            RosterPayload::Bare(students) => students,
        }
    }
}

impl ApiClient {
    pub async fn list_students(&self) -> Result<Vec<Student>, String> {
        self.get_json("/students").await
    }

    pub async fn get_student(&self, id: &str) -> Result<Student, String> {
        self.get_json(&format!("/students/{}", Self::seg(id))).await
    }

    pub async fn students_by_standard(&self, standard: &str) -> Result<Vec<Student>, String> {
        let payload: RosterPayload = self
            .get_json(&format!("/students/by-standard/{}", Self::seg(standard)))
            .await?;
        Ok(payload.into_students())
    }

    pub async fn create_student(&self, payload: &StudentPayload<'_>) -> Result<(), String> {
        self.post_unit("/students", payload).await
    }

    pub async fn update_student(
        &self,
        id: &str,
        payload: &StudentPayload<'_>,
    ) -> Result<(), String> {
        self.put_unit(&format!("/students/{}", Self::seg(id)), payload)
            .await
    }

    pub async fn delete_student(&self, id: &str) -> Result<(), String> {
        self.delete_unit(&format!("/students/{}", Self::seg(id)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_payload_both_shapes() {
        let wrapped = r#"{"students":[{"_id":"a","name":"A"}]}"#;
        let payload: RosterPayload = serde_json::from_str(wrapped).unwrap();
        let students = payload.into_students();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].name, "A");

        let bare = r#"[{"_id":"b","name":"B"},{"_id":"c","name":"C"}]"#;
        let payload: RosterPayload = serde_json::from_str(bare).unwrap();
        assert_eq!(payload.into_students().len(), 2);
    }

    #[test]
    fn test_student_payload_wire_names() {
        let payload = StudentPayload {
            name: "A",
            roll_number: "1",
            standard: "5",
            section: "A",
            father_name: "F",
            mother_name: "M",
            phone: "999",
            address: "X",
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"rollNumber\":\"1\""));
        assert!(json.contains("\"motherName\":\"M\""));
        assert!(!json.contains("_id"));
    }
}
