//! Student management for a logged-in team manager.

use tracing::info;

use crate::auth;
use crate::error::{ensure_saved, LoginError, ValidationError};
use crate::models::student::next_student_id;
use crate::models::Student;
use crate::store::{FestivalStore, StoreKey};

type Result<T> = std::result::Result<T, ValidationError>;

/// A manager scoped to exactly one team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamManagerSession {
    pub username: String,
    pub team: String,
}

impl TeamManagerSession {
    pub fn login(
        store: &FestivalStore,
        username: &str,
        password: &str,
        team: &str,
    ) -> std::result::Result<Self, LoginError> {
        let record = auth::login_team_manager(store, username, password, team)?;
        Ok(Self {
            username: record.username,
            team: record.team,
        })
    }

    /// Students on the managed team, optionally narrowed by a search term.
    pub fn students(&self, store: &FestivalStore, search: &str) -> Vec<Student> {
        let search = search.trim();
        store
            .load_students()
            .into_iter()
            .filter(|s| s.team == self.team)
            .filter(|s| search.is_empty() || s.matches_search(search))
            .collect()
    }

    pub fn register_student(&self, store: &FestivalStore, mut draft: Student) -> Result<Student> {
        validate(&draft)?;
        let mut students = store.load_students();
        draft.id = next_student_id(&students);
        draft.team = self.team.clone();
        students.push(draft.clone());
        ensure_saved(store.save_students(&students), StoreKey::Students)?;
        info!(
            manager = %self.username,
            team = %self.team,
            chest_number = %draft.chest_number,
            "Registered student"
        );
        Ok(draft)
    }

    /// Replace a student's details. The id and team cannot change.
    pub fn update_student(&self, store: &FestivalStore, id: u64, mut draft: Student) -> Result<()> {
        validate(&draft)?;
        let mut students = store.load_students();
        let slot = self.owned_mut(&mut students, id)?;
        draft.id = id;
        draft.team = self.team.clone();
        *slot = draft;
        ensure_saved(store.save_students(&students), StoreKey::Students)
    }

    pub fn delete_student(&self, store: &FestivalStore, id: u64) -> Result<()> {
        let mut students = store.load_students();
        self.owned_mut(&mut students, id)?;
        students.retain(|s| s.id != id);
        ensure_saved(store.save_students(&students), StoreKey::Students)?;
        info!(manager = %self.username, id, "Deleted student");
        Ok(())
    }

    fn owned_mut<'s>(&self, students: &'s mut [Student], id: u64) -> Result<&'s mut Student> {
        let student = students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ValidationError::not_found("Student", id.to_string()))?;
        if student.team != self.team {
            return Err(ValidationError::NotManagedTeam(self.team.clone()));
        }
        Ok(student)
    }
}

fn validate(draft: &Student) -> Result<()> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::MissingField("student name"));
    }
    if draft.chest_number.trim().is_empty() {
        return Err(ValidationError::MissingField("chest number"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamManager;

    fn store_with_manager() -> FestivalStore {
        let store = FestivalStore::in_memory();
        store.save_team_managers(&[TeamManager {
            username: "asha".to_string(),
            password: "pw".to_string(),
            event: "Dance Competition".to_string(),
            team: "Team Alpha".to_string(),
        }]);
        store.save_students(&[Student {
            id: 7,
            name: "Other".to_string(),
            chest_number: "B-7".to_string(),
            team: "Team Beta".to_string(),
            ..Default::default()
        }]);
        store
    }

    fn draft(name: &str, chest: &str) -> Student {
        Student {
            name: name.to_string(),
            chest_number: chest.to_string(),
            team: "Team Beta".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_login_requires_matching_team() {
        let store = store_with_manager();
        assert!(TeamManagerSession::login(&store, "asha", "pw", "Team Beta").is_err());
        let session = TeamManagerSession::login(&store, "asha", "pw", "Team Alpha").unwrap();
        assert_eq!(session.team, "Team Alpha");
    }

    #[test]
    fn test_register_forces_team() {
        let store = store_with_manager();
        let session = TeamManagerSession::login(&store, "asha", "pw", "Team Alpha").unwrap();

        let student = session.register_student(&store, draft("Asha", "A-1")).unwrap();
        assert_eq!(student.team, "Team Alpha");
        assert_eq!(student.id, 8);

        let own = session.students(&store, "");
        assert_eq!(own.len(), 1);
        assert_eq!(own[0].name, "Asha");
        assert_eq!(session.students(&store, "a-1").len(), 1);
        assert!(session.students(&store, "zzz").is_empty());
    }

    #[test]
    fn test_register_requires_fields() {
        let store = store_with_manager();
        let session = TeamManagerSession::login(&store, "asha", "pw", "Team Alpha").unwrap();
        assert_eq!(
            session.register_student(&store, draft("Asha", " ")),
            Err(ValidationError::MissingField("chest number"))
        );
        assert_eq!(store.load_students().len(), 1);
    }

    #[test]
    fn test_cannot_touch_other_team() {
        let store = store_with_manager();
        let session = TeamManagerSession::login(&store, "asha", "pw", "Team Alpha").unwrap();

        assert_eq!(
            session.delete_student(&store, 7),
            Err(ValidationError::NotManagedTeam("Team Alpha".to_string()))
        );
        assert!(session
            .update_student(&store, 7, draft("Renamed", "B-7"))
            .is_err());
        assert_eq!(store.load_students()[0].name, "Other");
        assert!(session.delete_student(&store, 99).is_err());
    }

    #[test]
    fn test_update_and_delete_own_student() {
        let store = store_with_manager();
        let session = TeamManagerSession::login(&store, "asha", "pw", "Team Alpha").unwrap();
        let student = session.register_student(&store, draft("Asha", "A-1")).unwrap();

        session
            .update_student(&store, student.id, draft("Asha K", "A-2"))
            .unwrap();
        let own = session.students(&store, "");
        assert_eq!(own[0].name, "Asha K");
        assert_eq!(own[0].team, "Team Alpha");
        assert_eq!(own[0].id, student.id);

        session.delete_student(&store, student.id).unwrap();
        assert!(session.students(&store, "").is_empty());
        assert_eq!(store.load_students().len(), 1);
    }
}
