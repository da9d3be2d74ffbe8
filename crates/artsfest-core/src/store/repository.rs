use std::path::PathBuf;

use anyhow::Result;

use crate::models::{
    AppSettings, AppTheme, Category, CategoryPointsMap, ContestResult, Event, GradePointsMap,
    MedalPoints, Program, Student, Team, TeamManager,
};
use crate::standings::PointRules;

use super::backend::{FileBackend, MemoryBackend, StorageBackend};
use super::keys::StoreKey;
use super::kv::KeyValueStore;

/// Admin password used until one is set.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Grade letters offered when none are configured.
pub const DEFAULT_GRADES: [&str; 4] = ["A", "B", "C", "D"];

/// Typed access to every persisted collection.
///
/// Saves rewrite the whole collection and return `false` on failure; loads
/// fall back to an empty or built-in default. Record collections are read
/// per record, skipping entries that do not parse.
pub struct FestivalStore {
    kv: KeyValueStore,
}

impl FestivalStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self {
            kv: KeyValueStore::new(backend),
        }
    }

    /// Store backed by `<data_dir>/<key>.json` files.
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        Ok(Self::new(Box::new(FileBackend::new(data_dir)?)))
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryBackend::new()))
    }

    pub fn kv(&self) -> &KeyValueStore {
        &self.kv
    }

    // ===== Events =====

    pub fn load_events(&self) -> Vec<Event> {
        self.kv.load_list(StoreKey::Events)
    }

    pub fn save_events(&self, events: &[Event]) -> bool {
        self.kv.save(StoreKey::Events, events)
    }

    // ===== Categories =====

    pub fn load_categories(&self) -> Vec<Category> {
        self.kv.load_list(StoreKey::Categories)
    }

    pub fn save_categories(&self, categories: &[Category]) -> bool {
        self.kv.save(StoreKey::Categories, categories)
    }

    // ===== Teams =====

    pub fn load_teams(&self) -> Vec<Team> {
        self.kv.load_list(StoreKey::Teams)
    }

    pub fn save_teams(&self, teams: &[Team]) -> bool {
        self.kv.save(StoreKey::Teams, teams)
    }

    // ===== Students =====

    pub fn load_students(&self) -> Vec<Student> {
        self.kv.load_list(StoreKey::Students)
    }

    pub fn save_students(&self, students: &[Student]) -> bool {
        self.kv.save(StoreKey::Students, students)
    }

    // ===== Programs =====

    pub fn load_programs(&self) -> Vec<Program> {
        self.kv.load_list(StoreKey::Programs)
    }

    pub fn save_programs(&self, programs: &[Program]) -> bool {
        self.kv.save(StoreKey::Programs, programs)
    }

    // ===== Results =====

    pub fn load_results(&self) -> Vec<ContestResult> {
        self.kv.load_list(StoreKey::Results)
    }

    pub fn save_results(&self, results: &[ContestResult]) -> bool {
        self.kv.save(StoreKey::Results, results)
    }

    // ===== Point Rules =====

    pub fn load_points(&self) -> MedalPoints {
        self.kv.load(StoreKey::Points, MedalPoints::standard())
    }

    pub fn save_points(&self, points: &MedalPoints) -> bool {
        self.kv.save(StoreKey::Points, points)
    }

    pub fn load_category_points(&self) -> CategoryPointsMap {
        self.kv.load(StoreKey::CategoryPoints, CategoryPointsMap::new())
    }

    pub fn save_category_points(&self, points: &CategoryPointsMap) -> bool {
        self.kv.save(StoreKey::CategoryPoints, points)
    }

    pub fn load_grade_points(&self) -> GradePointsMap {
        self.kv.load(StoreKey::GradePoints, GradePointsMap::new())
    }

    pub fn save_grade_points(&self, points: &GradePointsMap) -> bool {
        self.kv.save(StoreKey::GradePoints, points)
    }

    /// All three point layers, as the standings calculator consumes them.
    pub fn load_point_rules(&self) -> PointRules {
        PointRules {
            global: self.load_points(),
            category: self.load_category_points(),
            grade: self.load_grade_points(),
        }
    }

    pub fn load_available_grades(&self) -> Vec<String> {
        self.kv.load(
            StoreKey::AvailableGrades,
            DEFAULT_GRADES.iter().map(|g| g.to_string()).collect(),
        )
    }

    pub fn save_available_grades(&self, grades: &[String]) -> bool {
        self.kv.save(StoreKey::AvailableGrades, grades)
    }

    // ===== Credentials =====

    pub fn load_team_managers(&self) -> Vec<TeamManager> {
        self.kv.load_list(StoreKey::TeamManagers)
    }

    pub fn save_team_managers(&self, managers: &[TeamManager]) -> bool {
        self.kv.save(StoreKey::TeamManagers, managers)
    }

    pub fn load_admin_password(&self) -> String {
        self.kv
            .load(StoreKey::AdminPassword, DEFAULT_ADMIN_PASSWORD.to_string())
    }

    pub fn save_admin_password(&self, password: &str) -> bool {
        self.kv.save(StoreKey::AdminPassword, password)
    }

    // ===== Initialization Flag =====

    pub fn is_initialized(&self) -> bool {
        self.kv.load(StoreKey::Initialized, false)
    }

    pub fn mark_initialized(&self) -> bool {
        self.kv.save(StoreKey::Initialized, &true)
    }

    // ===== Display Settings =====

    pub fn load_app_settings(&self) -> AppSettings {
        let defaults = AppSettings::default();
        AppSettings {
            app_title: self.kv.load(StoreKey::AppTitle, defaults.app_title),
            app_theme: self.kv.load(StoreKey::AppTheme, defaults.app_theme),
            logo_image: self.kv.load(StoreKey::LogoImage, defaults.logo_image),
            gallery_images: self.kv.load(StoreKey::GalleryImages, defaults.gallery_images),
        }
    }

    pub fn save_app_title(&self, title: &str) -> bool {
        self.kv.save(StoreKey::AppTitle, title)
    }

    pub fn save_app_theme(&self, theme: &AppTheme) -> bool {
        self.kv.save(StoreKey::AppTheme, theme)
    }

    pub fn save_logo_image(&self, logo: Option<&str>) -> bool {
        self.kv.save(StoreKey::LogoImage, &logo)
    }

    pub fn save_gallery_images(&self, images: &[String]) -> bool {
        self.kv.save(StoreKey::GalleryImages, images)
    }

    /// Drop all display settings so the defaults apply again.
    pub fn clear_app_settings(&self) -> bool {
        [
            StoreKey::AppTitle,
            StoreKey::AppTheme,
            StoreKey::LogoImage,
            StoreKey::GalleryImages,
        ]
        .into_iter()
        .map(|key| self.kv.remove(key))
        .fold(true, |ok, removed| ok && removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Participant;
    use crate::store::backend::tests::scratch_dir;

    #[test]
    fn test_defaults_on_empty_store() {
        let store = FestivalStore::in_memory();
        assert!(store.load_events().is_empty());
        assert!(store.load_results().is_empty());
        assert_eq!(store.load_points(), MedalPoints::standard());
        assert_eq!(store.load_admin_password(), DEFAULT_ADMIN_PASSWORD);
        assert_eq!(store.load_available_grades(), vec!["A", "B", "C", "D"]);
        assert!(!store.is_initialized());
        assert_eq!(store.load_app_settings(), AppSettings::default());
    }

    #[test]
    fn test_collections_are_rewritten_whole() {
        let store = FestivalStore::in_memory();
        let first = vec![Team::new("Alpha", "Dance"), Team::new("Beta", "Dance")];
        assert!(store.save_teams(&first));
        assert!(store.save_teams(&first[1..]));

        let teams = store.load_teams();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].name, "Beta");
    }

    #[test]
    fn test_results_persist_on_disk() {
        let dir = scratch_dir("repository");
        {
            let store = FestivalStore::open(dir.clone()).unwrap();
            let result = ContestResult {
                event: "Dance".to_string(),
                program: "Solo".to_string(),
                category: "Junior".to_string(),
                participants: vec![Participant::new("101", "1").with_grade("A")],
            };
            assert!(store.save_results(&[result]));
        }

        let reopened = FestivalStore::open(dir.clone()).unwrap();
        let results = reopened.load_results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].participants[0].explicit_grade(), Some("A"));

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_unreadable_student_is_skipped() {
        let backend = MemoryBackend::new();
        backend
            .write(
                "students",
                r#"[{"id":1,"name":"Asha","chestNumber":"101","team":"Alpha"},{"id":"two"}]"#,
            )
            .unwrap();
        let store = FestivalStore::new(Box::new(backend));

        let students = store.load_students();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].name, "Asha");
    }

    #[test]
    fn test_clear_app_settings_restores_defaults() {
        let store = FestivalStore::in_memory();
        assert!(store.save_app_title("Spring Fest"));
        assert!(store.save_logo_image(Some("logo.png")));
        assert_eq!(store.load_app_settings().app_title, "Spring Fest");

        assert!(store.clear_app_settings());
        assert_eq!(store.load_app_settings(), AppSettings::default());
    }
}
