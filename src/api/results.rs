//! Result Requests

use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::models::{ExamResult, SubjectMarks};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateResultArgs<'a> {
    student_id: &'a str,
    exam_name: &'a str,
    standard: &'a str,
    exam_date: &'a str,
    subjects: &'a [SubjectMarks],
}

/// The detail endpoint answers `{"data": {...}}` or the bare object
#[derive(Deserialize)]
#[serde(untagged)]
enum DetailPayload {
    Wrapped { data: ExamResult },
    Bare(ExamResult),
}

impl DetailPayload {
    fn into_result(self) -> ExamResult {
        match self {
            DetailPayload::Wrapped { data } => data,
            DetailPayload::Bare(result) => result,
        }
    }
}

impl ApiClient {
    pub async fn create_result(
        &self,
        student_id: &str,
        exam_name: &str,
        standard: &str,
        exam_date: &str,
        subjects: &[SubjectMarks],
    ) -> Result<(), String> {
        self.post_unit(
            "/results",
            &CreateResultArgs {
                student_id,
                exam_name,
                standard,
                exam_date,
                subjects,
            },
        )
        .await
    }

    pub async fn results_by_student(&self, student_id: &str) -> Result<Vec<ExamResult>, String> {
        self.get_json(&format!("/results/student/{}", Self::seg(student_id)))
            .await
    }

    pub async fn result_detail(&self, id: &str) -> Result<ExamResult, String> {
        let payload: DetailPayload = self
            .get_json(&format!("/results/id/{}", Self::seg(id)))
            .await?;
        Ok(payload.into_result())
    }

    pub async fn delete_result(&self, id: &str) -> Result<(), String> {
        self.delete_unit(&format!("/results/{}", Self::seg(id)))
            .await
    }

    /// Raw PDF bytes; forwarded to the browser untouched
    pub async fn result_pdf(&self, student_id: &str, result_id: &str) -> Result<Vec<u8>, String> {
        self.get_bytes(&format!(
            "/results/pdf/{}/{}",
            Self::seg(student_id),
            Self::seg(result_id)
        ))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_payload_both_shapes() {
        let wrapped = r#"{"data":{"_id":"r1","examName":"Midterm"}}"#;
        let payload: DetailPayload = serde_json::from_str(wrapped).unwrap();
        assert_eq!(payload.into_result().exam_name, "Midterm");

        let bare = r#"{"_id":"r2","examName":"Final"}"#;
        let payload: DetailPayload = serde_json::from_str(bare).unwrap();
        assert_eq!(payload.into_result().exam_name, "Final");
    }

    #[test]
    fn test_create_result_args_wire_names() {
        let subjects = vec![SubjectMarks {
            name: "Maths".to_string(),
            marks_obtained: "85".to_string(),
            total_marks: "100".to_string(),
        }];
        let args = CreateResultArgs {
            student_id: "s1",
            exam_name: "Midterm",
            standard: "5",
            exam_date: "2024-10-01",
            subjects: &subjects,
        };
        let json = serde_json::to_string(&args).unwrap();
        assert!(json.contains("\"studentId\":\"s1\""));
        assert!(json.contains("\"examDate\":\"2024-10-01\""));
        assert!(json.contains("\"marksObtained\":\"85\""));
    }
}
