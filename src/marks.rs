//! Marks Matrix
//!
//! Per-student subject grid behind the create-result screen. The
//! subject chips and the shared total can change after marks were
//! typed in, so the grid is rebuilt rather than reset: entered marks
//! survive every change that keeps their subject selected.

use std::collections::HashMap;

use crate::models::{Student, SubjectMarks};

/// Student id -> one row per selected subject, in chip order
pub type MarksMatrix = HashMap<String, Vec<SubjectMarks>>;

/// Fresh grid for a newly loaded roster, every cell empty
pub fn init_matrix(students: &[Student], subjects: &[String], total_marks: &str) -> MarksMatrix {
    rebuild_matrix(&MarksMatrix::new(), students, subjects, total_marks)
}

/// Rebuild after the subject set or the shared total changes.
/// Kept subjects retain their entered marks and adopt the new total,
/// newly selected subjects start empty, deselected subjects drop.
pub fn rebuild_matrix(
    prev: &MarksMatrix,
    students: &[Student],
    subjects: &[String],
    total_marks: &str,
) -> MarksMatrix {
    students
        .iter()
        .map(|student| {
            let rows = subjects
                .iter()
                .map(|subject| {
                    let entered = prev
                        .get(&student.id)
                        .and_then(|rows| rows.iter().find(|m| &m.name == subject))
                        .map(|m| m.marks_obtained.clone())
                        .unwrap_or_default();
                    SubjectMarks {
                        name: subject.clone(),
                        marks_obtained: entered,
                        total_marks: total_marks.to_string(),
                    }
                })
                .collect();
            (student.id.clone(), rows)
        })
        .collect()
}

/// Type into one cell; the column index follows the chip order
pub fn set_marks(matrix: &mut MarksMatrix, student_id: &str, column: usize, value: String) {
    if let Some(row) = matrix
        .get_mut(student_id)
        .and_then(|rows| rows.get_mut(column))
    {
        row.marks_obtained = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_student(id: &str) -> Student {
        Student {
            id: id.to_string(),
            name: format!("Student {id}"),
            roll_number: "1".to_string(),
            standard: "5".to_string(),
            section: "A".to_string(),
            father_name: String::new(),
            mother_name: String::new(),
            phone: String::new(),
            address: String::new(),
        }
    }

    fn subjects(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_init_matrix_is_empty_grid() {
        let students = vec![make_student("a"), make_student("b")];
        let matrix = init_matrix(&students, &subjects(&["Maths", "Science"]), "100");

        assert_eq!(matrix.len(), 2);
        let rows = &matrix["a"];
        // Should be: one row per subject, chips order kept, cells empty
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Maths");
        assert_eq!(rows[1].name, "Science");
        assert_eq!(rows[0].marks_obtained, "");
        assert_eq!(rows[0].total_marks, "100");
    }

    #[test]
    fn test_rebuild_preserves_entered_marks() {
        let students = vec![make_student("a")];
        let mut matrix = init_matrix(&students, &subjects(&["Maths", "Science"]), "100");
        set_marks(&mut matrix, "a", 0, "87".to_string());

        // Add a subject: Maths keeps its marks, Hindi starts empty,
        // Science is untouched
        let rebuilt = rebuild_matrix(
            &matrix,
            &students,
            &subjects(&["Maths", "Science", "Hindi"]),
            "100",
        );
        let rows = &rebuilt["a"];
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].marks_obtained, "87");
        assert_eq!(rows[1].marks_obtained, "");
        assert_eq!(rows[2].marks_obtained, "");

        // Remove Maths: its marks drop with it
        let rebuilt = rebuild_matrix(&rebuilt, &students, &subjects(&["Science", "Hindi"]), "100");
        let rows = &rebuilt["a"];
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Science");
        assert!(rows.iter().all(|m| m.marks_obtained.is_empty()));
    }

    #[test]
    fn test_rebuild_applies_new_total_everywhere() {
        let students = vec![make_student("a")];
        let mut matrix = init_matrix(&students, &subjects(&["Maths"]), "100");
        set_marks(&mut matrix, "a", 0, "41".to_string());

        let rebuilt = rebuild_matrix(&matrix, &students, &subjects(&["Maths"]), "50");
        let rows = &rebuilt["a"];
        assert_eq!(rows[0].total_marks, "50");
        assert_eq!(rows[0].marks_obtained, "41");
    }

    #[test]
    fn test_set_marks_ignores_unknown_cell() {
        let students = vec![make_student("a")];
        let mut matrix = init_matrix(&students, &subjects(&["Maths"]), "100");

        set_marks(&mut matrix, "missing", 0, "10".to_string());
        set_marks(&mut matrix, "a", 5, "10".to_string());

        assert_eq!(matrix["a"][0].marks_obtained, "");
    }
}
