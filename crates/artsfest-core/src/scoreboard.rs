//! Read-only snapshot of everything the public board shows.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::{AppSettings, ContestResult, Event, Student, Team, TeamStanding};
use crate::performers::{compute_top_performers, TopPerformer};
use crate::standings::{compute_standings, PointRules};
use crate::store::FestivalStore;

#[derive(Debug, Clone)]
pub struct Scoreboard {
    pub settings: AppSettings,
    pub events: Vec<Event>,
    pub teams: Vec<Team>,
    pub students: Vec<Student>,
    pub rules: PointRules,
    /// Every stored result, regardless of event.
    pub all_results: Vec<ContestResult>,
    /// Results of the active event, or all of them when none is active.
    pub results: Vec<ContestResult>,
    pub standings: Vec<TeamStanding>,
    pub top_performers: Vec<TopPerformer>,
    pub active_event: Option<String>,
    pub computed_at: DateTime<Utc>,
    limit: usize,
}

impl Scoreboard {
    pub fn load(store: &FestivalStore, limit: usize) -> Self {
        let events = store.load_events();
        let active_event = events.iter().find(|e| e.active).map(|e| e.name.clone());

        let mut board = Self {
            settings: store.load_app_settings(),
            events,
            teams: store.load_teams(),
            students: store.load_students(),
            rules: store.load_point_rules(),
            all_results: store.load_results(),
            results: Vec::new(),
            standings: Vec::new(),
            top_performers: Vec::new(),
            active_event,
            computed_at: Utc::now(),
            limit,
        };
        board.recompute();
        board
    }

    /// Show `event_name` as the active event. Nothing is written back.
    ///
    /// An unknown name leaves no event active, which shows every result.
    pub fn switch_event(&mut self, event_name: &str) {
        for event in &mut self.events {
            event.active = event.name == event_name;
        }
        self.active_event = self
            .events
            .iter()
            .find(|e| e.active)
            .map(|e| e.name.clone());
        self.recompute();
    }

    /// Results with a participant whose name contains `term`.
    ///
    /// A search spans every stored result, not just the active event's. An
    /// empty term returns the active event's results.
    pub fn search_results(&self, term: &str) -> Vec<&ContestResult> {
        if term.is_empty() {
            return self.results.iter().collect();
        }
        self.all_results
            .iter()
            .filter(|r| r.has_participant_matching(term))
            .collect()
    }

    pub fn title(&self) -> &str {
        &self.settings.app_title
    }

    pub fn age_minutes(&self) -> i64 {
        (Utc::now() - self.computed_at).num_minutes()
    }

    pub fn age_display(&self) -> String {
        let minutes = self.age_minutes();
        if minutes < 1 {
            "just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 1440 {
            format!("{}h ago", minutes / 60)
        } else {
            format!("{}d ago", minutes / 1440)
        }
    }

    fn recompute(&mut self) {
        self.results = match &self.active_event {
            Some(name) => self
                .all_results
                .iter()
                .filter(|r| &r.event == name)
                .cloned()
                .collect(),
            None => self.all_results.clone(),
        };
        self.standings = compute_standings(&self.teams, &self.students, &self.results, &self.rules);
        self.top_performers = compute_top_performers(&self.results, self.limit);
        self.computed_at = Utc::now();
        debug!(
            active_event = ?self.active_event,
            results = self.results.len(),
            teams = self.standings.len(),
            "Scoreboard recomputed"
        );
    }
}
