//! Student Search
//!
//! Client-side filtering for the student directory and the attendance
//! roster. Recomputed on every keystroke; no debouncing.

use crate::models::Student;

/// True when the student matches the free-text search:
/// case-insensitive substring on name, plain substring on roll number.
/// An empty search matches everyone.
pub fn matches_search(student: &Student, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    student
        .name
        .to_lowercase()
        .contains(&search.to_lowercase())
        || student.roll_number.contains(search)
}

/// Directory filter: exact-match standard (empty = all standards)
/// combined with the free-text search
pub fn filter_students<'a>(
    students: &'a [Student],
    search: &str,
    standard: &str,
) -> Vec<&'a Student> {
    students
        .iter()
        .filter(|s| (standard.is_empty() || s.standard == standard) && matches_search(s, search))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_student(id: &str, name: &str, roll: &str, standard: &str) -> Student {
        Student {
            id: id.to_string(),
            name: name.to_string(),
            roll_number: roll.to_string(),
            standard: standard.to_string(),
            section: "A".to_string(),
            father_name: String::new(),
            mother_name: String::new(),
            phone: String::new(),
            address: String::new(),
        }
    }

    #[test]
    fn test_search_by_name_case_insensitive() {
        let students = vec![
            make_student("1", "Ravi Patel", "12", "5"),
            make_student("2", "Amit Shah", "7", "5"),
        ];
        let hits = filter_students(&students, "ravi", "");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");

        let hits = filter_students(&students, "SHAH", "");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");
    }

    #[test]
    fn test_search_by_roll_substring() {
        let students = vec![
            make_student("1", "Ravi", "12", "5"),
            make_student("2", "Amit", "121", "5"),
            make_student("3", "Sita", "7", "5"),
        ];
        // "12" is a substring of both "12" and "121"
        let hits = filter_students(&students, "12", "");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_empty_search_returns_all() {
        let students = vec![
            make_student("1", "Ravi", "1", "5"),
            make_student("2", "Amit", "2", "6"),
        ];
        assert_eq!(filter_students(&students, "", "").len(), 2);
    }

    #[test]
    fn test_standard_filter_composes_with_search() {
        let students = vec![
            make_student("1", "Ravi", "1", "5"),
            make_student("2", "Ravina", "2", "6"),
            make_student("3", "Amit", "3", "5"),
        ];
        let hits = filter_students(&students, "rav", "5");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");

        // empty search, standard only
        let hits = filter_students(&students, "", "5");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let students = vec![make_student("1", "Ravi", "1", "5")];
        assert!(filter_students(&students, "zzz", "").is_empty());
        assert!(filter_students(&students, "", "9").is_empty());
    }
}
