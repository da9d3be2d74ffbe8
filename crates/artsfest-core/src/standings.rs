//! Team standings: medal tallies and points, ranked.
//!
//! Points for a placement come from the most specific rule layer that
//! applies: grade-scoped, then category-scoped, then the global table. A
//! layer that omits the medal falls back to the global value and finally to
//! the built-in 3/2/1.

use tracing::trace;

use crate::models::points::grade_key;
use crate::models::{
    CategoryPointsMap, ContestResult, GradePointsMap, MedalPoints, Participant, Placement,
    Student, Team, TeamStanding,
};

/// Which rule layer supplied a participant's point table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    Grade,
    Category,
    Global,
}

/// The three layers of point configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointRules {
    pub global: MedalPoints,
    pub category: CategoryPointsMap,
    pub grade: GradePointsMap,
}

impl PointRules {
    /// Rules with only a global table.
    pub fn global(points: MedalPoints) -> Self {
        Self {
            global: points,
            ..Default::default()
        }
    }

    /// Pick the table for a result category and an optional grade.
    ///
    /// Without a grade the grade layer is skipped entirely. Category-scoped
    /// entries are looked up by bare category name and contribute only their
    /// medal fields.
    pub fn resolve(&self, category: &str, grade: Option<&str>) -> (RuleScope, MedalPoints) {
        if let Some(grade) = grade {
            if !category.is_empty() {
                if let Some(points) = self.grade.get(&grade_key(category, grade)) {
                    return (RuleScope::Grade, *points);
                }
            }
        }
        if let Some(entry) = self.category.get(category) {
            return (RuleScope::Category, entry.medals);
        }
        (RuleScope::Global, self.global)
    }

    /// Points a placement earns under `table`.
    pub fn points_for(&self, table: &MedalPoints, placement: Placement) -> u32 {
        table
            .value(placement)
            .or_else(|| self.global.value(placement))
            .unwrap_or_else(|| MedalPoints::builtin(placement))
    }
}

fn find_student<'a>(
    students: &'a [Student],
    participant: &Participant,
    display_name: &str,
) -> Option<&'a Student> {
    students
        .iter()
        .find(|s| s.matches_entry(&participant.name))
        .or_else(|| {
            if display_name != participant.name {
                students.iter().find(|s| s.matches_entry(display_name))
            } else {
                None
            }
        })
}

/// Rank teams by total points from the given results.
///
/// Participants that match no student, or whose student names no known team,
/// are skipped. Ties keep the order of `teams`. Inputs are not modified.
pub fn compute_standings(
    teams: &[Team],
    students: &[Student],
    results: &[ContestResult],
    rules: &PointRules,
) -> Vec<TeamStanding> {
    let mut standings: Vec<TeamStanding> = teams.iter().map(TeamStanding::zeroed).collect();

    for result in results {
        for participant in &result.participants {
            let (grade, display_name) = participant.grade_and_display_name();

            let Some(student) = find_student(students, participant, display_name) else {
                trace!(participant = %participant.name, "No student for participant, skipping");
                continue;
            };

            let Some(standing) = standings.iter_mut().find(|s| s.team.name == student.team) else {
                trace!(student = %student.name, team = %student.team, "Unknown team, skipping");
                continue;
            };

            let placement = participant.placement();
            if placement == Placement::Unplaced {
                continue;
            }

            let (scope, table) = rules.resolve(&result.category, grade.as_deref());
            let points = rules.points_for(&table, placement);
            trace!(
                participant = %display_name,
                team = %standing.team.name,
                ?placement,
                ?scope,
                points,
                "Awarding placement"
            );

            // Point values are user-configured; totals saturate instead of wrapping
            let counter = match placement {
                Placement::Gold => &mut standing.gold,
                Placement::Silver => &mut standing.silver,
                Placement::Bronze => &mut standing.bronze,
                Placement::Unplaced => continue,
            };
            *counter = counter.saturating_add(1);
            standing.total_points = standing.total_points.saturating_add(points);
        }
    }

    // Stable: equal totals keep input order
    standings.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    for (index, standing) in standings.iter_mut().enumerate() {
        standing.rank = index + 1;
    }

    standings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryPoints;

    fn team(id: u64, name: &str) -> Team {
        let mut team = Team::new(name, "");
        team.id = Some(id);
        team
    }

    fn student(id: u64, name: &str, chest: &str, team: &str) -> Student {
        Student {
            id,
            name: name.to_string(),
            chest_number: chest.to_string(),
            team: team.to_string(),
            ..Default::default()
        }
    }

    fn result(category: &str, participants: Vec<Participant>) -> ContestResult {
        ContestResult {
            event: "E".to_string(),
            program: "P".to_string(),
            category: category.to_string(),
            participants,
        }
    }

    #[test]
    fn test_single_gold_by_chest_number() {
        let teams = vec![team(1, "Alpha")];
        let students = vec![student(1, "S1", "101", "Alpha")];
        let results = vec![result("C", vec![Participant::new("101", "1")])];
        let rules = PointRules::global(MedalPoints::new(3, 2, 1));

        let standings = compute_standings(&teams, &students, &results, &rules);
        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].gold, 1);
        assert_eq!(standings[0].total_points, 3);
        assert_eq!(standings[0].rank, 1);
    }

    #[test]
    fn test_grade_suffix_uses_grade_points() {
        let teams = vec![team(1, "Alpha")];
        let students = vec![student(1, "Jane Doe", "205", "Alpha")];
        let results = vec![result("Dance", vec![Participant::new("Jane Doe (A)", "2")])];
        let mut rules = PointRules::global(MedalPoints::standard());
        rules.grade.insert(
            "Dance-A".to_string(),
            MedalPoints {
                silver: Some(5),
                ..Default::default()
            },
        );

        let standings = compute_standings(&teams, &students, &results, &rules);
        assert_eq!(standings[0].silver, 1);
        assert_eq!(standings[0].total_points, 5);
    }

    #[test]
    fn test_raw_name_with_suffix_matches_first() {
        let teams = vec![team(1, "Alpha"), team(2, "Beta")];
        let students = vec![
            student(1, "Jane Doe (A)", "1", "Beta"),
            student(2, "Jane Doe", "2", "Alpha"),
        ];
        let results = vec![result("Dance", vec![Participant::new("Jane Doe (A)", "1")])];

        let standings = compute_standings(&teams, &students, &results, &PointRules::default());
        let beta = standings.iter().find(|s| s.name() == "Beta").unwrap();
        assert_eq!(beta.gold, 1);
    }

    #[test]
    fn test_grade_rule_beats_category_and_global() {
        let mut rules = PointRules::global(MedalPoints::new(3, 2, 1));
        rules.category.insert(
            "Dance".to_string(),
            CategoryPoints::from_medals(MedalPoints::new(7, 5, 3)),
        );
        rules
            .grade
            .insert("Dance-A".to_string(), MedalPoints::new(11, 9, 8));

        let (scope, table) = rules.resolve("Dance", Some("A"));
        assert_eq!(scope, RuleScope::Grade);
        assert_eq!(rules.points_for(&table, Placement::Gold), 11);

        let (scope, table) = rules.resolve("Dance", Some("B"));
        assert_eq!(scope, RuleScope::Category);
        assert_eq!(rules.points_for(&table, Placement::Gold), 7);

        let (scope, _) = rules.resolve("Dance", None);
        assert_eq!(scope, RuleScope::Category);

        let (scope, table) = rules.resolve("Music", Some("A"));
        assert_eq!(scope, RuleScope::Global);
        assert_eq!(rules.points_for(&table, Placement::Bronze), 1);
    }

    #[test]
    fn test_grade_layer_skipped_without_grade() {
        let mut rules = PointRules::global(MedalPoints::new(3, 2, 1));
        rules
            .grade
            .insert("Dance-".to_string(), MedalPoints::new(50, 50, 50));
        let (scope, _) = rules.resolve("Dance", None);
        assert_eq!(scope, RuleScope::Global);
    }

    #[test]
    fn test_missing_fields_fall_back_to_global_then_builtin() {
        let rules = PointRules::global(MedalPoints {
            gold: Some(10),
            ..Default::default()
        });
        let table = MedalPoints {
            silver: Some(6),
            ..Default::default()
        };
        assert_eq!(rules.points_for(&table, Placement::Silver), 6);
        assert_eq!(rules.points_for(&table, Placement::Gold), 10);
        assert_eq!(rules.points_for(&table, Placement::Bronze), 1);
    }

    #[test]
    fn test_place_schema_entry_does_not_award_points() {
        let teams = vec![team(1, "Alpha")];
        let students = vec![student(1, "S1", "101", "Alpha")];
        let results = vec![result("Junior", vec![Participant::new("101", "1")])];
        let mut rules = PointRules::global(MedalPoints::new(4, 2, 1));
        rules.category.insert(
            "Junior".to_string(),
            CategoryPoints::from_places(10, 6, 3, 1, Default::default()),
        );

        let standings = compute_standings(&teams, &students, &results, &rules);
        // Place fields are not consulted; gold falls through to the global 4
        assert_eq!(standings[0].total_points, 4);
    }

    #[test]
    fn test_unplaced_and_unmatched_participants_are_ignored() {
        let teams = vec![team(1, "Alpha")];
        let students = vec![
            student(1, "S1", "101", "Alpha"),
            student(2, "S2", "102", "Ghost Team"),
        ];
        let results = vec![result(
            "C",
            vec![
                Participant::new("101", "4"),
                Participant::new("101", "first"),
                Participant::new("999", "1"),
                Participant::new("102", "1"),
            ],
        )];

        let standings = compute_standings(&teams, &students, &results, &PointRules::default());
        assert_eq!(standings[0].medal_count(), 0);
        assert_eq!(standings[0].total_points, 0);
    }

    #[test]
    fn test_teams_without_results_keep_input_order() {
        let teams = vec![team(1, "Alpha"), team(2, "Beta"), team(3, "Gamma")];
        let standings = compute_standings(&teams, &[], &[], &PointRules::default());

        let names: Vec<&str> = standings.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
        for (i, s) in standings.iter().enumerate() {
            assert_eq!(s.rank, i + 1);
            assert_eq!((s.gold, s.silver, s.bronze, s.total_points), (0, 0, 0, 0));
        }
    }

    #[test]
    fn test_ranking_is_monotonic_and_stable_for_ties() {
        let teams = vec![team(1, "Alpha"), team(2, "Beta"), team(3, "Gamma")];
        let students = vec![
            student(1, "A1", "1", "Alpha"),
            student(2, "B1", "2", "Beta"),
            student(3, "G1", "3", "Gamma"),
        ];
        let results = vec![
            result("C", vec![Participant::new("2", "1"), Participant::new("3", "2")]),
            result("C", vec![Participant::new("1", "2"), Participant::new("3", "3")]),
        ];
        let rules = PointRules::global(MedalPoints::new(3, 2, 1));

        let standings = compute_standings(&teams, &students, &results, &rules);
        let names: Vec<&str> = standings.iter().map(|s| s.name()).collect();
        // Beta 3, Gamma 3, Alpha 2: Beta precedes Gamma in the input
        assert_eq!(names, vec!["Beta", "Gamma", "Alpha"]);
        for pair in standings.windows(2) {
            assert!(pair[0].rank <= pair[1].rank);
            assert!(pair[0].total_points >= pair[1].total_points);
        }
    }

    #[test]
    fn test_inputs_untouched_and_output_repeatable() {
        let teams = vec![team(1, "Alpha")];
        let students = vec![student(1, "S1", "101", "Alpha")];
        let results = vec![result("C", vec![Participant::new("101", "3")])];
        let rules = PointRules::global(MedalPoints::standard());
        let teams_before = teams.clone();

        let first = compute_standings(&teams, &students, &results, &rules);
        let second = compute_standings(&teams, &students, &results, &rules);
        assert_eq!(first, second);
        assert_eq!(teams, teams_before);
        assert_eq!(first[0].bronze, 1);
    }

    #[test]
    fn test_huge_point_values_saturate() {
        let teams = vec![team(1, "Alpha"), team(2, "Beta")];
        let students = vec![
            student(1, "S1", "101", "Alpha"),
            student(2, "S2", "102", "Alpha"),
            student(3, "S3", "201", "Beta"),
        ];
        let results = vec![result(
            "C",
            vec![
                Participant::new("101", "1"),
                Participant::new("102", "1"),
                Participant::new("201", "2"),
            ],
        )];
        let rules = PointRules::global(MedalPoints::new(u32::MAX, 2, 1));

        let standings = compute_standings(&teams, &students, &results, &rules);
        assert_eq!(standings[0].name(), "Alpha");
        assert_eq!(standings[0].gold, 2);
        assert_eq!(standings[0].total_points, u32::MAX);
        assert_eq!(standings[1].total_points, 2);
    }
}
