//! First-run seeding of baseline festival data.

use tracing::{info, warn};

use crate::models::{Category, Event, MedalPoints, Program, ProgramType, Rgb, Team, TeamManager};
use crate::models::{CategoryPointsMap, GradePointsMap};
use crate::store::{FestivalStore, DEFAULT_ADMIN_PASSWORD, DEFAULT_GRADES};

/// What `initialize` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Seeded,
    AlreadyInitialized,
}

pub fn default_categories() -> Vec<Category> {
    ["Sub Junior", "Junior", "Senior"]
        .iter()
        .enumerate()
        .map(|(i, name)| Category {
            id: Some(i as u64 + 1),
            name: name.to_string(),
            order: i as u32 + 1,
        })
        .collect()
}

pub fn default_events() -> Vec<Event> {
    vec![Event {
        id: Some(1),
        name: "Dance Competition".to_string(),
        categories: vec![
            "Sub Junior".to_string(),
            "Junior".to_string(),
            "Senior".to_string(),
        ],
        color: Rgb { r: 106, g: 17, b: 203 },
        active: false,
    }]
}

pub fn default_teams() -> Vec<Team> {
    let mut team = Team::new("Team Alpha", "");
    team.id = Some(1);
    vec![team]
}

pub fn default_programs() -> Vec<Program> {
    vec![Program {
        id: Some(1),
        name: "Classical Dance".to_string(),
        event: String::new(),
        category: String::new(),
        program_type: ProgramType::Individual,
    }]
}

/// Seed the store unless the `initialized` flag is already set.
///
/// Categories are only written when none exist. The flag is written last, so
/// an interrupted run is retried in full next time; the keys are not written
/// atomically and a failed write is logged and skipped.
pub fn initialize(store: &FestivalStore) -> InitOutcome {
    if store.is_initialized() {
        info!("Data already initialized");
        return InitOutcome::AlreadyInitialized;
    }

    info!("Data not initialized, setting up default data");

    if store.load_categories().is_empty() {
        info!("Creating default categories");
        check("categories", store.save_categories(&default_categories()));
    }

    check("events", store.save_events(&default_events()));
    check("teams", store.save_teams(&default_teams()));
    check("programs", store.save_programs(&default_programs()));
    check("points", store.save_points(&MedalPoints::standard()));
    check("adminPassword", store.save_admin_password(DEFAULT_ADMIN_PASSWORD));
    check("categoryPoints", store.save_category_points(&CategoryPointsMap::new()));
    check("gradePoints", store.save_grade_points(&GradePointsMap::new()));
    check("teamManagers", store.save_team_managers(&[TeamManager::default()]));
    let grades: Vec<String> = DEFAULT_GRADES.iter().map(|g| g.to_string()).collect();
    check("availableGrades", store.save_available_grades(&grades));
    check("initialized", store.mark_initialized());

    info!("Default data initialization complete");
    InitOutcome::Seeded
}

fn check(key: &str, saved: bool) {
    if !saved {
        warn!(key, "Failed to write default data");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::backend::tests::CountingBackend;

    #[test]
    fn test_seeds_defaults_once() {
        let backend = CountingBackend::default();
        let store = FestivalStore::new(Box::new(backend.clone()));

        assert_eq!(initialize(&store), InitOutcome::Seeded);
        let writes = backend.write_count();
        assert!(writes > 0);

        assert_eq!(store.load_categories(), default_categories());
        assert_eq!(store.load_events()[0].name, "Dance Competition");
        assert_eq!(store.load_teams()[0].name, "Team Alpha");
        assert_eq!(store.load_programs()[0].name, "Classical Dance");
        assert_eq!(store.load_points(), MedalPoints::new(3, 2, 1));
        assert_eq!(store.load_admin_password(), "admin123");
        assert!(store.load_category_points().is_empty());
        assert!(store.load_grade_points().is_empty());
        assert_eq!(store.load_team_managers(), vec![TeamManager::default()]);
        assert_eq!(store.load_available_grades(), vec!["A", "B", "C", "D"]);
        assert!(store.is_initialized());

        assert_eq!(initialize(&store), InitOutcome::AlreadyInitialized);
        assert_eq!(backend.write_count(), writes);
    }

    #[test]
    fn test_does_not_overwrite_existing_data() {
        let store = FestivalStore::in_memory();
        assert_eq!(initialize(&store), InitOutcome::Seeded);

        let teams = vec![Team::new("Custom", "Dance Competition")];
        assert!(store.save_teams(&teams));
        assert!(store.save_admin_password("s3cret"));

        assert_eq!(initialize(&store), InitOutcome::AlreadyInitialized);
        assert_eq!(store.load_teams(), teams);
        assert_eq!(store.load_admin_password(), "s3cret");
    }

    #[test]
    fn test_existing_categories_are_kept() {
        let store = FestivalStore::in_memory();
        let categories = vec![Category {
            id: Some(9),
            name: "Open".to_string(),
            order: 1,
        }];
        assert!(store.save_categories(&categories));

        assert_eq!(initialize(&store), InitOutcome::Seeded);
        assert_eq!(store.load_categories(), categories);
    }
}
