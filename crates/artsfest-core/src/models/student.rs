use serde::{Deserialize, Serialize};

/// A registered competitor.
///
/// `chest_number` is the label judges write on result sheets; results are
/// matched back to students by chest number or by full name.
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub chest_number: String,
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub photo: Option<String>,
}

impl Student {
    /// Whether a result entry refers to this student.
    pub fn matches_entry(&self, entry: &str) -> bool {
        self.chest_number == entry || self.name == entry
    }

    /// Case-insensitive match on name or chest number.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.chest_number.to_lowercase().contains(&term)
    }
}

/// Next free student id: one past the current maximum, or 1.
pub fn next_student_id(students: &[Student]) -> u64 {
    students.iter().map(|s| s.id).max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: u64, name: &str, chest: &str) -> Student {
        Student {
            id,
            name: name.to_string(),
            chest_number: chest.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_matches_entry_by_chest_or_name() {
        let s = student(1, "Asha", "101");
        assert!(s.matches_entry("101"));
        assert!(s.matches_entry("Asha"));
        assert!(!s.matches_entry("asha"));
    }

    #[test]
    fn test_matches_search_ignores_case() {
        let s = student(1, "Asha Menon", "J-101");
        assert!(s.matches_search("menon"));
        assert!(s.matches_search("j-1"));
        assert!(!s.matches_search("202"));
    }

    #[test]
    fn test_next_student_id() {
        assert_eq!(next_student_id(&[]), 1);
        assert_eq!(next_student_id(&[student(4, "a", "1"), student(2, "b", "2")]), 5);
    }
}
