//! Application state for the terminal scoreboard.
//!
//! `App` owns the current `Scoreboard` snapshot, the UI state and the
//! background tasks: a poller that re-reads the store on an interval and a
//! one-shot timer that dismisses the welcome screen.

use std::sync::Arc;
use std::time::Duration;

use artsfest_core::models::ContestResult;
use artsfest_core::{Config, FestivalStore, Scoreboard};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the background message channel.
const CHANNEL_BUFFER_SIZE: usize = 8;

/// Maximum length for the results search box.
const MAX_SEARCH_LENGTH: usize = 40;

/// Number of rows to scroll on page up/down.
pub const PAGE_SCROLL_SIZE: usize = 10;

// ============================================================================
// UI State Types
// ============================================================================

/// Main navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Standings,
    TopPerformers,
    Results,
    Events,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Standings, Tab::TopPerformers, Tab::Results, Tab::Events];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Standings => "Standings",
            Tab::TopPerformers => "Top Performers",
            Tab::Results => "Results",
            Tab::Events => "Events",
        }
    }

    /// Get the next tab (wrapping around)
    pub fn next(&self) -> Self {
        match self {
            Tab::Standings => Tab::TopPerformers,
            Tab::TopPerformers => Tab::Results,
            Tab::Results => Tab::Events,
            Tab::Events => Tab::Standings,
        }
    }

    /// Get the previous tab (wrapping around)
    pub fn prev(&self) -> Self {
        match self {
            Tab::Standings => Tab::Events,
            Tab::TopPerformers => Tab::Standings,
            Tab::Results => Tab::TopPerformers,
            Tab::Events => Tab::Results,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Standings => 0,
            Tab::TopPerformers => 1,
            Tab::Results => 2,
            Tab::Events => 3,
        }
    }
}

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Normal,
    Searching,
    ShowingHelp,
    ConfirmingQuit,
    Quitting,
}

// ============================================================================
// Background Messages
// ============================================================================

/// Messages sent from background tasks to the main loop.
pub enum BackgroundMessage {
    /// A fresh snapshot read from the store
    Refreshed(Scoreboard),
    /// The welcome timer ran out
    WelcomeElapsed,
}

// ============================================================================
// App
// ============================================================================

pub struct App {
    pub config: Config,
    store: Arc<FestivalStore>,

    pub state: AppState,
    pub current_tab: Tab,
    pub board: Scoreboard,

    /// Event chosen on the Events tab; survives background refreshes.
    pub viewed_event: Option<String>,

    pub search_query: String,
    pub standings_selection: usize,
    pub performers_selection: usize,
    pub results_selection: usize,
    pub events_selection: usize,

    pub status_message: Option<String>,

    rx: mpsc::Receiver<BackgroundMessage>,
    tx: mpsc::Sender<BackgroundMessage>,
    tasks: Vec<JoinHandle<()>>,
}

impl App {
    pub fn new(config: Config, store: Arc<FestivalStore>) -> Self {
        let board = Scoreboard::load(&store, config.top_performers_limit);
        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);
        let state = if config.welcome_seconds == 0 {
            AppState::Normal
        } else {
            AppState::Welcome
        };

        Self {
            config,
            store,
            state,
            current_tab: Tab::Standings,
            board,
            viewed_event: None,
            search_query: String::new(),
            standings_selection: 0,
            performers_selection: 0,
            results_selection: 0,
            events_selection: 0,
            status_message: None,
            rx,
            tx,
            tasks: Vec::new(),
        }
    }

    // =========================================================================
    // Background Tasks
    // =========================================================================

    /// Spawn the store poller and, if the welcome screen is up, its timer.
    pub fn start_background_tasks(&mut self) {
        let interval = Duration::from_secs(self.config.poll_interval_secs.max(1));
        let limit = self.config.top_performers_limit;
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();

        info!(interval_secs = interval.as_secs(), "Starting scoreboard poller");
        self.tasks.push(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // First tick fires immediately and the board is already fresh
            ticker.tick().await;
            loop {
                ticker.tick().await;
                // Store reads are blocking file I/O
                let store = Arc::clone(&store);
                let board =
                    match tokio::task::spawn_blocking(move || Scoreboard::load(&store, limit)).await
                    {
                        Ok(board) => board,
                        Err(e) => {
                            warn!(error = %e, "Scoreboard refresh task failed");
                            continue;
                        }
                    };
                if tx.send(BackgroundMessage::Refreshed(board)).await.is_err() {
                    break;
                }
            }
        }));

        if self.state == AppState::Welcome {
            let delay = Duration::from_secs(self.config.welcome_seconds);
            let tx = self.tx.clone();
            self.tasks.push(tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = tx.send(BackgroundMessage::WelcomeElapsed).await;
            }));
        }
    }

    pub fn stop_background_tasks(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
        debug!("Background tasks stopped");
    }

    /// Drain pending background messages without blocking.
    pub fn check_background_tasks(&mut self) {
        let mut messages = Vec::new();
        while let Ok(message) = self.rx.try_recv() {
            messages.push(message);
        }
        for message in messages {
            self.process_message(message);
        }
    }

    fn process_message(&mut self, message: BackgroundMessage) {
        match message {
            BackgroundMessage::Refreshed(board) => self.apply_board(board),
            BackgroundMessage::WelcomeElapsed => self.dismiss_welcome(),
        }
    }

    /// Replace the snapshot, keeping the event the user is viewing.
    fn apply_board(&mut self, mut board: Scoreboard) {
        if let Some(ref name) = self.viewed_event {
            board.switch_event(name);
        }
        self.board = board;
        self.clamp_selections();
    }

    /// Re-read the store now instead of waiting for the poller.
    pub fn refresh_now(&mut self) {
        let board = Scoreboard::load(&self.store, self.config.top_performers_limit);
        self.apply_board(board);
        self.status_message = Some("Refreshed".to_string());
    }

    pub fn dismiss_welcome(&mut self) {
        if self.state == AppState::Welcome {
            self.state = AppState::Normal;
        }
    }

    // =========================================================================
    // View Operations
    // =========================================================================

    /// Show the event under the Events tab cursor.
    pub fn view_selected_event(&mut self) {
        let Some(name) = self
            .board
            .events
            .get(self.events_selection)
            .map(|e| e.name.clone())
        else {
            return;
        };
        info!(event = %name, "Switching viewed event");
        self.board.switch_event(&name);
        self.status_message = Some(format!("Showing {}", name));
        self.viewed_event = Some(name);
        self.clamp_selections();
    }

    /// Results matching the search box, or the viewed event's results when it is empty.
    pub fn filtered_results(&self) -> Vec<&ContestResult> {
        self.board.search_results(&self.search_query)
    }

    pub fn push_search_char(&mut self, c: char) {
        if can_add_search_char(self.search_query.chars().count(), c) {
            self.search_query.push(c);
            self.results_selection = 0;
        }
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.results_selection = 0;
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.results_selection = 0;
    }

    fn row_count(&self, tab: Tab) -> usize {
        match tab {
            Tab::Standings => self.board.standings.len(),
            Tab::TopPerformers => self.board.top_performers.len(),
            Tab::Results => self.filtered_results().len(),
            Tab::Events => self.board.events.len(),
        }
    }

    fn selection_mut(&mut self, tab: Tab) -> &mut usize {
        match tab {
            Tab::Standings => &mut self.standings_selection,
            Tab::TopPerformers => &mut self.performers_selection,
            Tab::Results => &mut self.results_selection,
            Tab::Events => &mut self.events_selection,
        }
    }

    /// Move the current tab's cursor by `delta` rows, clamped to the list.
    pub fn move_selection(&mut self, delta: isize) {
        let tab = self.current_tab;
        let count = self.row_count(tab);
        let selection = self.selection_mut(tab);
        *selection = step(*selection, delta, count);
    }

    fn clamp_selections(&mut self) {
        for tab in Tab::ALL {
            let count = self.row_count(tab);
            let selection = self.selection_mut(tab);
            *selection = (*selection).min(count.saturating_sub(1));
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.stop_background_tasks();
    }
}

fn step(current: usize, delta: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let max = count - 1;
    if delta < 0 {
        current.saturating_sub(delta.unsigned_abs())
    } else {
        current.saturating_add(delta as usize).min(max)
    }
}

/// Check if a search character should be accepted
pub fn can_add_search_char(current_len: usize, c: char) -> bool {
    current_len < MAX_SEARCH_LENGTH && !c.is_control()
}

// ============================================================================
// Tests
// ============================================================================
