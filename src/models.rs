//! Frontend Models
//!
//! Data structures matching the backend API's JSON entities. The backend
//! speaks camelCase and stores a few numeric fields as either strings or
//! numbers, so some fields deserialize through `string_or_number`.

use serde::{Deserialize, Deserializer, Serialize};

/// Student record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub roll_number: String,
    #[serde(default)]
    pub standard: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub father_name: String,
    #[serde(default)]
    pub mother_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

/// Attendance status for one student on one date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AttendanceStatus {
    Present,
    /// Unset statuses fall back to Absent at save time
    #[default]
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Present" => AttendanceStatus::Present,
            _ => AttendanceStatus::Absent,
        }
    }
}

/// One attendance row as returned by the by-standard lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceMark {
    pub student_id: String,
    pub status: AttendanceStatus,
}

/// Row from the attendance filter query; student is populated server-side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceFilterRow {
    #[serde(default)]
    pub student: Option<StudentRef>,
    pub status: AttendanceStatus,
}

/// Partial student object embedded in populated responses
/// (pending fees, top students, attendance filter)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRef {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roll_number: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub standard: String,
}

/// Payment mode for a fee payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentMode {
    #[default]
    Cash,
    Online,
    Cheque,
}

impl PaymentMode {
    pub const ALL: [PaymentMode; 3] =
        [PaymentMode::Cash, PaymentMode::Online, PaymentMode::Cheque];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "Cash",
            PaymentMode::Online => "Online",
            PaymentMode::Cheque => "Cheque",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Online" => PaymentMode::Online,
            "Cheque" => PaymentMode::Cheque,
            _ => PaymentMode::Cash,
        }
    }
}

/// Yearly fee configured for one standard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeStructure {
    #[serde(default, deserialize_with = "string_or_number")]
    pub standard: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub yearly_fee: String,
}

/// Fee totals for one student, computed server-side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeStatus {
    #[serde(default)]
    pub total_fee: f64,
    #[serde(default)]
    pub total_paid: f64,
    #[serde(default)]
    pub remaining: f64,
}

/// Pending fee row; student is populated server-side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingFeeRow {
    pub student: StudentRef,
    #[serde(default)]
    pub remaining: f64,
}

/// Collection overview numbers; missing values render as "-"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeeAnalytics {
    pub total_students: Option<u32>,
    pub total_yearly_fees: Option<f64>,
    pub total_collected: Option<f64>,
    pub total_pending: Option<f64>,
    pub today_collected: Option<f64>,
}

/// Per-subject marks entry; the wire field for the subject name is `name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectMarks {
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub marks_obtained: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub total_marks: String,
}

/// Exam result; percentage and grade are derived server-side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamResult {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub student_id: String,
    #[serde(default)]
    pub exam_name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub standard: String,
    #[serde(default)]
    pub exam_date: String,
    #[serde(default)]
    pub subjects: Vec<SubjectMarks>,
    pub percentage: Option<f64>,
    pub grade: Option<String>,
}

/// One bar of the class-wise student count chart;
/// the aggregation id is the standard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassCount {
    #[serde(rename = "_id", default, deserialize_with = "string_or_number")]
    pub standard: String,
    #[serde(default)]
    pub count: u32,
}

/// Top performing student row; studentId is populated server-side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopStudent {
    pub student_id: StudentRef,
    #[serde(default)]
    pub percentage: f64,
}

/// Main dashboard aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_students: Option<u32>,
    pub present_today: Option<u32>,
    #[serde(default)]
    pub class_wise: Vec<ClassCount>,
    #[serde(default)]
    pub top_students: Vec<TopStudent>,
}

/// Per-standard fee total for the fees distribution chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardFees {
    #[serde(default, deserialize_with = "string_or_number")]
    pub standard: String,
    #[serde(default)]
    pub total_fee: f64,
}

/// Login response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Accepts a JSON string or number; the backend is inconsistent about which
/// it stores for standards, fees and marks
fn string_or_number<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(f64),
    }

    Ok(match Raw::deserialize(de)? {
        Raw::Str(s) => s,
        Raw::Num(n) => format!("{}", n),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_round_trip() {
        let student = Student {
            id: "66f1a2b3c4d5e6f7a8b9c0d1".to_string(),
            name: "A".to_string(),
            roll_number: "1".to_string(),
            standard: "5".to_string(),
            section: "A".to_string(),
            father_name: "F".to_string(),
            mother_name: "M".to_string(),
            phone: "999".to_string(),
            address: "X".to_string(),
        };

        let json = serde_json::to_string(&student).unwrap();
        assert!(json.contains("\"rollNumber\":\"1\""));
        assert!(json.contains("\"fatherName\":\"F\""));

        let back: Student = serde_json::from_str(&json).unwrap();
        assert_eq!(back, student);
    }

    #[test]
    fn test_student_missing_optionals() {
        let json = r#"{"_id":"abc","name":"B"}"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.name, "B");
        assert_eq!(student.roll_number, "");
        assert_eq!(student.address, "");
    }

    #[test]
    fn test_attendance_status_serialization() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Present).unwrap(),
            "\"Present\""
        );
        let parsed: AttendanceStatus = serde_json::from_str("\"Absent\"").unwrap();
        assert_eq!(parsed, AttendanceStatus::Absent);
        assert_eq!(AttendanceStatus::from_str("Present"), AttendanceStatus::Present);
        assert_eq!(AttendanceStatus::from_str("anything"), AttendanceStatus::Absent);
        assert_eq!(AttendanceStatus::default(), AttendanceStatus::Absent);
    }

    #[test]
    fn test_payment_mode_round_trip() {
        for mode in PaymentMode::ALL {
            assert_eq!(PaymentMode::from_str(mode.as_str()), mode);
        }
        assert_eq!(PaymentMode::from_str("junk"), PaymentMode::Cash);
    }

    #[test]
    fn test_subject_marks_accepts_numbers_and_strings() {
        let json = r#"{"name":"Maths","marksObtained":85,"totalMarks":"100"}"#;
        let marks: SubjectMarks = serde_json::from_str(json).unwrap();
        assert_eq!(marks.marks_obtained, "85");
        assert_eq!(marks.total_marks, "100");

        let json = r#"{"name":"Science","marksObtained":"","totalMarks":90.5}"#;
        let marks: SubjectMarks = serde_json::from_str(json).unwrap();
        assert_eq!(marks.marks_obtained, "");
        assert_eq!(marks.total_marks, "90.5");
    }

    #[test]
    fn test_dashboard_summary_tolerates_missing_fields() {
        let summary: DashboardSummary = serde_json::from_str("{}").unwrap();
        assert_eq!(summary.total_students, None);
        assert!(summary.class_wise.is_empty());
        assert!(summary.top_students.is_empty());

        let json = r#"{
            "totalStudents": 42,
            "presentToday": 30,
            "classWise": [{"_id": 5, "count": 12}, {"_id": "6", "count": 9}],
            "topStudents": [{"studentId": {"name": "A", "standard": 5}, "percentage": 92.5}]
        }"#;
        let summary: DashboardSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_students, Some(42));
        assert_eq!(summary.class_wise[0].standard, "5");
        assert_eq!(summary.class_wise[1].standard, "6");
        assert_eq!(summary.top_students[0].student_id.standard, "5");
    }

    #[test]
    fn test_exam_result_detail_shape() {
        let json = r#"{
            "_id": "r1",
            "examName": "Midterm",
            "standard": "5",
            "examDate": "2024-10-01T00:00:00.000Z",
            "subjects": [{"_id": "s1", "name": "Maths", "marksObtained": 85, "totalMarks": 100}],
            "percentage": 85,
            "grade": "A"
        }"#;
        let result: ExamResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.exam_name, "Midterm");
        assert_eq!(result.subjects[0].name, "Maths");
        assert_eq!(result.subjects[0].marks_obtained, "85");
        assert_eq!(result.percentage, Some(85.0));
        assert_eq!(result.grade.as_deref(), Some("A"));
    }
}
