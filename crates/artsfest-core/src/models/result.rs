use serde::{Deserialize, Serialize};

/// Grade letters that may be appended to a participant name as `"Name (A)"`.
const SUFFIX_GRADES: [char; 4] = ['A', 'B', 'C', 'D'];

/// Medal category derived from a participant's textual position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Gold,
    Silver,
    Bronze,
    Unplaced,
}

impl Placement {
    /// Only the exact strings "1", "2" and "3" earn a medal.
    pub fn from_position(position: &str) -> Self {
        match position {
            "1" => Placement::Gold,
            "2" => Placement::Silver,
            "3" => Placement::Bronze,
            _ => Placement::Unplaced,
        }
    }
}

/// One placed (or unplaced) entry in a result.
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Student name or chest number, optionally suffixed with `" (X)"`.
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub points: Option<u32>,
}

impl Participant {
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            grade: None,
            points: None,
        }
    }

    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    pub fn with_points(mut self, points: u32) -> Self {
        self.points = Some(points);
        self
    }

    pub fn placement(&self) -> Placement {
        Placement::from_position(&self.position)
    }

    /// The grade field, treating an empty string as absent.
    pub fn explicit_grade(&self) -> Option<&str> {
        self.grade.as_deref().filter(|g| !g.is_empty())
    }

    /// Effective grade and display name.
    ///
    /// An explicit grade wins and leaves the name untouched. Otherwise a
    /// trailing `(A)`..`(D)` is split off the name.
    pub fn grade_and_display_name(&self) -> (Option<String>, &str) {
        if let Some(grade) = self.explicit_grade() {
            return (Some(grade.to_string()), &self.name);
        }
        match split_grade_suffix(&self.name) {
            Some((display, grade)) => (Some(grade.to_string()), display),
            None => (None, &self.name),
        }
    }
}

/// Split `"Jane Doe (A)"` into `("Jane Doe", 'A')`.
pub fn split_grade_suffix(name: &str) -> Option<(&str, char)> {
    let inner = name.strip_suffix(')')?;
    let mut chars = inner.char_indices().rev();
    let (_, grade) = chars.next()?;
    if !SUFFIX_GRADES.contains(&grade) {
        return None;
    }
    let (open_idx, open) = chars.next()?;
    if open != '(' {
        return None;
    }
    Some((name[..open_idx].trim_end(), grade))
}

/// Placements for one program in one event and category.
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContestResult {
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub program: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl ContestResult {
    /// Case-insensitive match against any participant name.
    pub fn has_participant_matching(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.participants
            .iter()
            .any(|p| p.name.to_lowercase().contains(&term))
    }
}
