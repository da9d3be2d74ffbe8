//! Admin dashboard operations.
//!
//! Each operation validates its input, loads the whole collection, applies the
//! change and saves the whole collection back. A validation failure returns
//! before anything is written.

use tracing::info;

use crate::auth;
use crate::error::{ensure_saved, LoginError, ValidationError};
use crate::models::points::{grade_key, place_key};
use crate::models::student::next_student_id;
use crate::models::{
    AppTheme, Category, CategoryPoints, CategoryPointsMap, ContestResult, Event, GradePointsMap,
    MedalPoints, Participant, Program, Student, Team, TeamManager, MAX_GALLERY_IMAGES,
};
use crate::store::{FestivalStore, StoreKey};

type Result<T> = std::result::Result<T, ValidationError>;

fn require(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

fn remove_at<T>(items: &mut Vec<T>, index: usize, kind: &'static str) -> Result<T> {
    if index < items.len() {
        Ok(items.remove(index))
    } else {
        Err(ValidationError::not_found(kind, format!("#{}", index)))
    }
}

/// Students whose chest number contains `term`, ignoring case.
///
/// A blank term matches nothing.
pub fn search_by_chest_number<'a>(students: &'a [Student], term: &str) -> Vec<&'a Student> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }
    students
        .iter()
        .filter(|s| s.chest_number.to_lowercase().contains(&term))
        .collect()
}

/// Add a student to a result being drafted, identified by chest number.
pub fn add_participant(draft: &mut ContestResult, student: &Student) -> Result<()> {
    if draft
        .participants
        .iter()
        .any(|p| p.name == student.chest_number)
    {
        return Err(ValidationError::duplicate(
            "Participant",
            student.chest_number.clone(),
        ));
    }
    draft
        .participants
        .push(Participant::new(student.chest_number.clone(), ""));
    Ok(())
}

/// An authenticated admin. Obtained only through `login`.
pub struct AdminSession<'a> {
    store: &'a FestivalStore,
}

impl<'a> AdminSession<'a> {
    pub fn login(
        store: &'a FestivalStore,
        username: &str,
        password: &str,
    ) -> std::result::Result<Self, LoginError> {
        auth::login_admin(store, username, password)?;
        Ok(Self { store })
    }

    pub fn store(&self) -> &FestivalStore {
        self.store
    }

    // ===== Events =====

    pub fn add_event(&self, event: Event) -> Result<()> {
        require(&event.name, "event name")?;
        let mut events = self.store.load_events();
        if events.iter().any(|e| e.name == event.name) {
            return Err(ValidationError::duplicate("Event", event.name));
        }
        info!(event = %event.name, "Adding event");
        events.push(event);
        ensure_saved(self.store.save_events(&events), StoreKey::Events)
    }

    pub fn delete_event(&self, index: usize) -> Result<Event> {
        let mut events = self.store.load_events();
        let removed = remove_at(&mut events, index, "Event")?;
        ensure_saved(self.store.save_events(&events), StoreKey::Events)?;
        info!(event = %removed.name, "Deleted event");
        Ok(removed)
    }

    /// Mark `name` as the only active event.
    pub fn set_active_event(&self, name: &str) -> Result<()> {
        let mut events = self.store.load_events();
        if !events.iter().any(|e| e.name == name) {
            return Err(ValidationError::not_found("Event", name));
        }
        for event in &mut events {
            event.active = event.name == name;
        }
        info!(event = name, "Setting active event");
        ensure_saved(self.store.save_events(&events), StoreKey::Events)
    }

    /// Add a category to an event, registering it globally if new.
    ///
    /// The two collections are separate writes. The global list is saved
    /// first, so a failed event write leaves at worst an unused category.
    pub fn add_category_to_event(&self, event_name: &str, category: &str) -> Result<()> {
        require(category, "category name")?;
        require(event_name, "event")?;

        let mut events = self.store.load_events();
        let event = events
            .iter_mut()
            .find(|e| e.name == event_name)
            .ok_or_else(|| ValidationError::not_found("Event", event_name))?;
        if event.has_category(category) {
            return Err(ValidationError::duplicate("Category", category));
        }
        event.categories.push(category.to_string());

        let mut categories = self.store.load_categories();
        if !categories.iter().any(|c| c.name == category) {
            categories.push(Category {
                id: None,
                name: category.to_string(),
                order: categories.len() as u32 + 1,
            });
            ensure_saved(self.store.save_categories(&categories), StoreKey::Categories)?;
        }
        ensure_saved(self.store.save_events(&events), StoreKey::Events)?;

        info!(event = event_name, category, "Added category");
        Ok(())
    }

    // ===== Teams =====

    pub fn add_team(&self, team: Team) -> Result<()> {
        require(&team.event, "event")?;
        require(&team.name, "team name")?;
        let mut teams = self.store.load_teams();
        info!(team = %team.name, event = %team.event, "Adding team");
        teams.push(team);
        ensure_saved(self.store.save_teams(&teams), StoreKey::Teams)
    }

    pub fn delete_team(&self, index: usize) -> Result<Team> {
        let mut teams = self.store.load_teams();
        let removed = remove_at(&mut teams, index, "Team")?;
        ensure_saved(self.store.save_teams(&teams), StoreKey::Teams)?;
        info!(team = %removed.name, "Deleted team");
        Ok(removed)
    }

    // ===== Students =====

    /// Register a student; the id is assigned here.
    pub fn add_student(&self, mut student: Student) -> Result<Student> {
        require(&student.name, "student name")?;
        require(&student.chest_number, "chest number")?;
        let mut students = self.store.load_students();
        student.id = next_student_id(&students);
        students.push(student.clone());
        ensure_saved(self.store.save_students(&students), StoreKey::Students)?;
        info!(id = student.id, chest_number = %student.chest_number, "Added student");
        Ok(student)
    }

    pub fn delete_student(&self, id: u64) -> Result<()> {
        let mut students = self.store.load_students();
        let before = students.len();
        students.retain(|s| s.id != id);
        if students.len() == before {
            return Err(ValidationError::not_found("Student", id.to_string()));
        }
        ensure_saved(self.store.save_students(&students), StoreKey::Students)
    }

    // ===== Programs =====

    pub fn add_program(&self, program: Program) -> Result<()> {
        require(&program.event, "event")?;
        require(&program.category, "category")?;
        require(&program.name, "program name")?;
        let mut programs = self.store.load_programs();
        programs.push(program);
        ensure_saved(self.store.save_programs(&programs), StoreKey::Programs)
    }

    pub fn delete_program(&self, index: usize) -> Result<Program> {
        let mut programs = self.store.load_programs();
        let removed = remove_at(&mut programs, index, "Program")?;
        ensure_saved(self.store.save_programs(&programs), StoreKey::Programs)?;
        Ok(removed)
    }

    // ===== Results =====

    pub fn add_result(&self, result: ContestResult) -> Result<()> {
        require(&result.event, "event")?;
        require(&result.program, "program")?;
        require(&result.category, "category")?;
        if result.participants.is_empty() {
            return Err(ValidationError::MissingField("participants"));
        }
        let mut results = self.store.load_results();
        info!(
            event = %result.event,
            program = %result.program,
            participants = result.participants.len(),
            "Adding result"
        );
        results.push(result);
        ensure_saved(self.store.save_results(&results), StoreKey::Results)
    }

    pub fn delete_result(&self, index: usize) -> Result<ContestResult> {
        let mut results = self.store.load_results();
        let removed = remove_at(&mut results, index, "Result")?;
        ensure_saved(self.store.save_results(&results), StoreKey::Results)?;
        Ok(removed)
    }

    // ===== Team Managers =====

    pub fn create_team_manager(&self, record: TeamManager) -> Result<()> {
        require(&record.username, "username")?;
        require(&record.password, "password")?;
        require(&record.team, "team")?;
        let mut managers = self.store.load_team_managers();
        if managers.iter().any(|m| m.username == record.username) {
            return Err(ValidationError::duplicate("Username", record.username));
        }
        info!(username = %record.username, team = %record.team, "Creating team manager");
        managers.push(record);
        ensure_saved(self.store.save_team_managers(&managers), StoreKey::TeamManagers)
    }

    /// Replace the record stored under `original_username`.
    pub fn update_team_manager(&self, original_username: &str, record: TeamManager) -> Result<()> {
        require(&record.username, "username")?;
        let mut managers = self.store.load_team_managers();
        if record.username != original_username
            && managers.iter().any(|m| m.username == record.username)
        {
            return Err(ValidationError::duplicate("Username", record.username));
        }
        let slot = managers
            .iter_mut()
            .find(|m| m.username == original_username)
            .ok_or_else(|| ValidationError::not_found("Team manager", original_username))?;
        *slot = record;
        ensure_saved(self.store.save_team_managers(&managers), StoreKey::TeamManagers)
    }

    pub fn delete_team_manager(&self, username: &str) -> Result<()> {
        let mut managers = self.store.load_team_managers();
        let before = managers.len();
        managers.retain(|m| m.username != username);
        if managers.len() == before {
            return Err(ValidationError::not_found("Team manager", username));
        }
        ensure_saved(self.store.save_team_managers(&managers), StoreKey::TeamManagers)
    }

    // ===== Admin Password =====

    pub fn change_admin_password(&self, current: &str, new: &str, confirm: &str) -> Result<()> {
        if current != self.store.load_admin_password() {
            return Err(ValidationError::IncorrectPassword);
        }
        if new != confirm {
            return Err(ValidationError::PasswordMismatch);
        }
        require(new, "new password")?;
        ensure_saved(self.store.save_admin_password(new), StoreKey::AdminPassword)?;
        info!("Admin password updated");
        Ok(())
    }

    // ===== Point Rules =====

    pub fn set_global_points(&self, points: MedalPoints) -> Result<()> {
        ensure_saved(self.store.save_points(&points), StoreKey::Points)
    }

    pub fn set_grade_points(&self, category: &str, grade: &str, points: MedalPoints) -> Result<()> {
        require(category, "category")?;
        require(grade, "grade")?;
        let mut grade_points = self.store.load_grade_points();
        grade_points.insert(grade_key(category, grade), points);
        ensure_saved(self.store.save_grade_points(&grade_points), StoreKey::GradePoints)
    }

    /// Set the same grade rule across several categories at once.
    pub fn preconfigure_grade_points(
        &self,
        grade: &str,
        categories: &[String],
        points: MedalPoints,
    ) -> Result<()> {
        require(grade, "grade")?;
        let mut grade_points = self.store.load_grade_points();
        for category in categories {
            grade_points.insert(grade_key(category, grade), points);
        }
        ensure_saved(self.store.save_grade_points(&grade_points), StoreKey::GradePoints)
    }

    /// Store a place-schema entry under `"<event>-<category>"`.
    pub fn save_category_place_points(
        &self,
        event: &str,
        category: &str,
        entry: CategoryPoints,
    ) -> Result<()> {
        if event.trim().is_empty() || category.trim().is_empty() {
            return Err(ValidationError::MissingField("event and category"));
        }
        let mut category_points = self.store.load_category_points();
        category_points.insert(place_key(event, category), entry);
        ensure_saved(
            self.store.save_category_points(&category_points),
            StoreKey::CategoryPoints,
        )?;
        info!(event, category, "Saved category points");
        Ok(())
    }

    /// Global rule back to 3/2/1; category and grade rules cleared.
    pub fn reset_points(&self) -> Result<()> {
        ensure_saved(self.store.save_points(&MedalPoints::standard()), StoreKey::Points)?;
        ensure_saved(
            self.store.save_category_points(&CategoryPointsMap::new()),
            StoreKey::CategoryPoints,
        )?;
        ensure_saved(
            self.store.save_grade_points(&GradePointsMap::new()),
            StoreKey::GradePoints,
        )?;
        info!("All points reset");
        Ok(())
    }

    pub fn add_available_grade(&self, grade: &str) -> Result<()> {
        let grade = grade.trim();
        require(grade, "grade")?;
        let mut grades = self.store.load_available_grades();
        if grades.iter().any(|g| g == grade) {
            return Err(ValidationError::duplicate("Grade", grade));
        }
        grades.push(grade.to_string());
        ensure_saved(self.store.save_available_grades(&grades), StoreKey::AvailableGrades)
    }

    // ===== Display Settings =====

    pub fn save_app_title(&self, title: &str) -> Result<()> {
        require(title, "title")?;
        ensure_saved(self.store.save_app_title(title), StoreKey::AppTitle)
    }

    pub fn save_app_theme(&self, theme: &AppTheme) -> Result<()> {
        ensure_saved(self.store.save_app_theme(theme), StoreKey::AppTheme)
    }

    pub fn save_logo_image(&self, logo: Option<&str>) -> Result<()> {
        ensure_saved(self.store.save_logo_image(logo), StoreKey::LogoImage)
    }

    pub fn save_gallery_images(&self, images: &[String]) -> Result<()> {
        if images.len() > MAX_GALLERY_IMAGES {
            return Err(ValidationError::TooManyImages(MAX_GALLERY_IMAGES));
        }
        ensure_saved(self.store.save_gallery_images(images), StoreKey::GalleryImages)
    }

    pub fn reset_app_settings(&self) -> Result<()> {
        ensure_saved(self.store.clear_app_settings(), StoreKey::AppTitle)
    }
}
