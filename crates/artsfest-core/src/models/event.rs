use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Display colour of an event card.
///
/// Reading is lenient: a channel that is missing, null or not a number takes
/// the default colour's value, and numbers are clamped to 0..=255.
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Rgb {
    fn default() -> Self {
        Self { r: 106, g: 17, b: 203 }
    }
}

#[derive(Default, Deserialize)]
struct RawRgb {
    #[serde(default)]
    r: Value,
    #[serde(default)]
    g: Value,
    #[serde(default)]
    b: Value,
}

fn channel(value: &Value, fallback: u8) -> u8 {
    match value.as_f64() {
        Some(n) if n.is_finite() => n.round().clamp(0.0, 255.0) as u8,
        _ => fallback,
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<RawRgb>::deserialize(deserializer)?.unwrap_or_default();
        let fallback = Rgb::default();
        Ok(Rgb {
            r: channel(&raw.r, fallback.r),
            g: channel(&raw.g, fallback.g),
            b: channel(&raw.b, fallback.b),
        })
    }
}

impl Rgb {
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A festival event, e.g. "Dance Competition".
///
/// At most one event is `active` at a time; the public scoreboard shows only
/// the active event's results.
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub color: Rgb,
    #[serde(default)]
    pub active: bool,
}

impl Event {
    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }
}

/// An age/level bracket such as "Junior".
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub order: u32,
}

#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgramType {
    #[default]
    Individual,
    Team,
}

impl std::fmt::Display for ProgramType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProgramType::Individual => write!(f, "Individual"),
            ProgramType::Team => write!(f, "Team"),
        }
    }
}

/// A single competition item within an event and category.
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "type", default)]
    pub program_type: ProgramType,
}
