use serde::{Deserialize, Serialize};

/// Default colour given to new teams.
pub const DEFAULT_TEAM_COLOR: &str = "#FF5733";

fn default_team_color() -> String {
    DEFAULT_TEAM_COLOR.to_string()
}

/// A named leadership slot on a team, with an optional photo reference.
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
}

#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub event: String,
    #[serde(default = "default_team_color")]
    pub color: String,
    #[serde(default)]
    pub team_leader: Option<LeaderInfo>,
    #[serde(default)]
    pub assistant_leader: Option<LeaderInfo>,
    #[serde(default)]
    pub manager: Option<LeaderInfo>,
}

impl Team {
    /// A team with empty leadership slots, as the dashboard creates them.
    pub fn new(name: impl Into<String>, event: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            event: event.into(),
            color: default_team_color(),
            team_leader: Some(LeaderInfo::default()),
            assistant_leader: Some(LeaderInfo::default()),
            manager: Some(LeaderInfo::default()),
        }
    }
}

/// A team with its computed medal tally and rank.
///
/// Derived on every evaluation; never written back to the store.
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    #[serde(flatten)]
    pub team: Team,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total_points: u32,
    pub rank: usize,
}

impl TeamStanding {
    /// Zeroed working copy used before aggregation.
    pub fn zeroed(team: &Team) -> Self {
        Self {
            team: team.clone(),
            gold: 0,
            silver: 0,
            bronze: 0,
            total_points: 0,
            rank: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.team.name
    }

    pub fn medal_count(&self) -> u32 {
        self.gold + self.silver + self.bronze
    }
}

/// Login record for a team manager. The password is stored as entered.
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamManager {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub team: String,
}
