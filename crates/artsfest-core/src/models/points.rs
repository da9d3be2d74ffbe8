use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::result::Placement;

/// Points per medal. A missing field falls through to the next rule layer.
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalPoints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silver: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bronze: Option<u32>,
}

impl MedalPoints {
    pub fn new(gold: u32, silver: u32, bronze: u32) -> Self {
        Self {
            gold: Some(gold),
            silver: Some(silver),
            bronze: Some(bronze),
        }
    }

    /// The festival-wide default of 3/2/1.
    pub fn standard() -> Self {
        Self::new(3, 2, 1)
    }

    pub fn value(&self, placement: Placement) -> Option<u32> {
        match placement {
            Placement::Gold => self.gold,
            Placement::Silver => self.silver,
            Placement::Bronze => self.bronze,
            Placement::Unplaced => None,
        }
    }

    /// Last-resort value when no rule layer defines the medal.
    pub fn builtin(placement: Placement) -> u32 {
        match placement {
            Placement::Gold => 3,
            Placement::Silver => 2,
            Placement::Bronze => 1,
            Placement::Unplaced => 0,
        }
    }
}

/// Bonus points per performance grade in the place schema.
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeBonus {
    #[serde(rename = "A", default)]
    pub a: u32,
    #[serde(rename = "B", default)]
    pub b: u32,
}

/// A category-scoped entry of the `categoryPoints` map.
///
/// The map holds two shapes: medal-shaped entries keyed by category name,
/// read by the standings calculator, and place-shaped entries
/// (`first`..`more`, grade bonuses) keyed `"<event>-<category>"`, written by
/// the point-system form. Both deserialize into this record.
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPoints {
    #[serde(flatten)]
    pub medals: MedalPoints,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub third: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grades: Option<GradeBonus>,
}

impl CategoryPoints {
    pub fn from_medals(medals: MedalPoints) -> Self {
        Self {
            medals,
            ..Default::default()
        }
    }

    pub fn from_places(first: u32, second: u32, third: u32, more: u32, grades: GradeBonus) -> Self {
        Self {
            medals: MedalPoints::default(),
            first: Some(first),
            second: Some(second),
            third: Some(third),
            more: Some(more),
            grades: Some(grades),
        }
    }
}

/// `categoryPoints`: key -> category-scoped entry.
pub type CategoryPointsMap = HashMap<String, CategoryPoints>;

/// `gradePoints`: `"<category>-<grade>"` -> medal points.
pub type GradePointsMap = HashMap<String, MedalPoints>;

/// Key of a grade-scoped rule.
pub fn grade_key(category: &str, grade: &str) -> String {
    format!("{}-{}", category, grade)
}

/// Key of a place-schema entry.
pub fn place_key(event: &str, category: &str) -> String {
    format!("{}-{}", event, category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medal_points_partial_json() {
        let points: MedalPoints = serde_json::from_str(r#"{"silver":5}"#).unwrap();
        assert_eq!(points.value(Placement::Silver), Some(5));
        assert_eq!(points.value(Placement::Gold), None);
        assert_eq!(points.value(Placement::Unplaced), None);
    }

    #[test]
    fn test_category_points_reads_both_shapes() {
        let medal: CategoryPoints = serde_json::from_str(r#"{"gold":7,"silver":4,"bronze":2}"#).unwrap();
        assert_eq!(medal.medals, MedalPoints::new(7, 4, 2));
        assert!(medal.first.is_none());

        let place: CategoryPoints = serde_json::from_str(
            r#"{"first":10,"second":6,"third":3,"more":1,"grades":{"A":5,"B":3}}"#,
        )
        .unwrap();
        assert_eq!(place.medals, MedalPoints::default());
        assert_eq!(place.more, Some(1));
        assert_eq!(place.grades, Some(GradeBonus { a: 5, b: 3 }));
    }

    #[test]
    fn test_place_entry_serializes_without_medal_fields() {
        let entry = CategoryPoints::from_places(10, 6, 3, 1, GradeBonus { a: 5, b: 3 });
        let json = serde_json::to_value(entry).unwrap();
        assert!(json.get("gold").is_none());
        assert_eq!(json["first"], 10);
        assert_eq!(json["grades"]["A"], 5);
    }

    #[test]
    fn test_keys() {
        assert_eq!(grade_key("Dance", "A"), "Dance-A");
        assert_eq!(place_key("Music Fest", "Junior"), "Music Fest-Junior");
    }
}
