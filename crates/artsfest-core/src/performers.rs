//! Top performers: participant points summed across results.
//!
//! Uses the `points` recorded on each participant, not the medal tables the
//! standings use.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::ContestResult;

/// How many performers the public board lists.
pub const DEFAULT_TOP_PERFORMERS: usize = 10;

/// Program label when a performer has no recorded program.
const VARIOUS_PROGRAMS: &str = "Various";

/// One program a performer placed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramEntry {
    pub program: String,
    pub position: String,
    pub points: u32,
}

#[derive(Debug, Clone)]
struct Accumulator {
    name: String,
    total_points: u32,
    programs: Vec<ProgramEntry>,
}

/// A ranked row of the top-performer table.
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopPerformer {
    /// 1-based rank.
    pub id: usize,
    pub name: String,
    pub program: String,
    pub points: u32,
}

/// Sum participant points by name and return the best `limit`, ranked.
///
/// Performers are grouped by the exact participant name. Ties keep the order
/// in which names were first seen.
pub fn compute_top_performers(results: &[ContestResult], limit: usize) -> Vec<TopPerformer> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut performers: Vec<Accumulator> = Vec::new();

    for result in results {
        for participant in &result.participants {
            let slot = *index.entry(participant.name.as_str()).or_insert_with(|| {
                performers.push(Accumulator {
                    name: participant.name.clone(),
                    total_points: 0,
                    programs: Vec::new(),
                });
                performers.len() - 1
            });

            let points = participant.points.unwrap_or(0);
            let performer = &mut performers[slot];
            performer.total_points = performer.total_points.saturating_add(points);
            performer.programs.push(ProgramEntry {
                program: result.program.clone(),
                position: participant.position.clone(),
                points,
            });
        }
    }

    performers.sort_by(|a, b| b.total_points.cmp(&a.total_points));

    performers
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, performer)| TopPerformer {
            id: i + 1,
            program: performer
                .programs
                .first()
                .map(|p| p.program.clone())
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| VARIOUS_PROGRAMS.to_string()),
            name: performer.name,
            points: performer.total_points,
        })
        .collect()
}
