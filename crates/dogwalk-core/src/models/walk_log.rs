//! Walk log model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use uuid::Uuid;


/// Display name used when none has been saved.
pub const DEFAULT_USER_NAME: &str = "User";

/// A unique identifier for a walk log, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalkLogId(Uuid);

impl WalkLogId {
    /// Create a new unique walk log ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for WalkLogId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WalkLogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WalkLogId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Returned when a quality or bathroom tag cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseTagError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

/// Color tag attached to each walk quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualityColor {
    Green,
    Orange,
    Red,
}

impl QualityColor {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }
}

/// How the walk went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalkQuality {
    Good,
    Okay,
    Bad,
}

impl WalkQuality {
    /// Every quality, best first.
    pub const ALL: [Self; 3] = [Self::Good, Self::Okay, Self::Bad];

    /// Lowercase name used on the wire and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Okay => "okay",
            Self::Bad => "bad",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Great Walk",
            Self::Okay => "Okay Walk",
            Self::Bad => "Poor Walk",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Good => "🐕🥇",
            Self::Okay => "🐕",
            Self::Bad => "🐕🫣",
        }
    }

    pub const fn color(self) -> QualityColor {
        match self {
            Self::Good => QualityColor::Green,
            Self::Okay => QualityColor::Orange,
            Self::Bad => QualityColor::Red,
        }
    }
}

impl fmt::Display for WalkQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WalkQuality {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|quality| quality.as_str() == value)
            .ok_or_else(|| ParseTagError {
                kind: "walk quality",
                value: s.to_string(),
                expected: "good, okay, bad",
            })
    }
}

/// What the dog did outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BathroomActivity {
    None,
    Pee,
    Poop,
    Both,
}

impl BathroomActivity {
    pub const ALL: [Self; 4] = [Self::None, Self::Pee, Self::Poop, Self::Both];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Pee => "pee",
            Self::Poop => "poop",
            Self::Both => "both",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Nothing",
            Self::Pee => "Pee",
            Self::Poop => "Poop",
            Self::Both => "Both",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::None => "🚫",
            Self::Pee => "💧",
            Self::Poop => "💩",
            Self::Both => "💩💧",
        }
    }
}

impl fmt::Display for BathroomActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BathroomActivity {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|activity| activity.as_str() == value)
            .ok_or_else(|| ParseTagError {
                kind: "bathroom activity",
                value: s.to_string(),
                expected: "none, pee, poop, both",
            })
    }
}

/// One logged walk.
///
/// The JSON shape is shared by the local store and the `walk_logs` table:
/// camelCase keys, lowercase enum tags, RFC 3339 dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkLog {
    /// Unique identifier, assigned at creation. Rows decoded from elsewhere may lack one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<WalkLogId>,
    /// Creation timestamp
    pub date: DateTime<Utc>,
    /// How the walk went
    #[serde(rename = "walkQuality")]
    pub quality: WalkQuality,
    /// Bathroom activity during the walk
    pub bathroom: BathroomActivity,
    /// Who logged the walk
    pub user_name: String,
    /// Free-text notes; never `Some("")`
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_notes"
    )]
    pub notes: Option<String>,
}

impl WalkLog {
    /// Create a walk log stamped now, with a fresh id and the default user name.
    #[must_use]
    pub fn new(quality: WalkQuality, bathroom: BathroomActivity) -> Self {
        Self {
            id: Some(WalkLogId::new()),
            date: Utc::now(),
            quality,
            bathroom,
            user_name: DEFAULT_USER_NAME.to_string(),
            notes: None,
        }
    }

    /// Set the notes; an empty string is stored as no notes.
    #[must_use]
    pub fn with_notes(mut self, notes: Option<impl Into<String>>) -> Self {
        self.notes = non_empty(notes.map(Into::into));
        self
    }

    #[must_use]
    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    /// Whether this log's id starts with `prefix` (case-insensitive).
    pub fn id_matches_prefix(&self, prefix: &str) -> bool {
        let prefix = prefix.trim().to_ascii_lowercase();
        !prefix.is_empty()
            && self
                .id
                .is_some_and(|id| id.as_str().starts_with(prefix.as_str()))
    }
}

fn deserialize_notes<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(non_empty(raw))
}

fn non_empty(notes: Option<String>) -> Option<String> {
    notes.filter(|notes| !notes.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_log_id_unique() {
        let id1 = WalkLogId::new();
        let id2 = WalkLogId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_walk_log_id_parse() {
        let id = WalkLogId::new();
        let parsed: WalkLogId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_walk_log_new_assigns_id_and_defaults() {
        let log = WalkLog::new(WalkQuality::Good, BathroomActivity::Pee);
        assert!(log.id.is_some());
        assert_eq!(log.user_name, DEFAULT_USER_NAME);
        assert_eq!(log.notes, None);
    }

    #[test]
    fn test_empty_notes_become_none() {
        let log = WalkLog::new(WalkQuality::Okay, BathroomActivity::None).with_notes(Some(""));
        assert_eq!(log.notes, None);

        let log = WalkLog::new(WalkQuality::Okay, BathroomActivity::None)
            .with_notes(Some(" sniffed every tree\n"));
        assert_eq!(log.notes.as_deref(), Some(" sniffed every tree\n"));

        let log = WalkLog::new(WalkQuality::Okay, BathroomActivity::None)
            .with_notes(Some("chased a squirrel"));
        assert_eq!(log.notes.as_deref(), Some("chased a squirrel"));
    }

    #[test]
    fn test_quality_metadata() {
        assert_eq!(WalkQuality::Good.label(), "Great Walk");
        assert_eq!(WalkQuality::Bad.color(), QualityColor::Red);
        assert_eq!(WalkQuality::Okay.color().as_str(), "orange");
        assert_eq!(BathroomActivity::Both.label(), "Both");
    }

    #[test]
    fn test_tags_parse_case_insensitively() {
        assert_eq!("GOOD".parse::<WalkQuality>().unwrap(), WalkQuality::Good);
        assert_eq!(" poop ".parse::<BathroomActivity>().unwrap(), BathroomActivity::Poop);
        let error = "great".parse::<WalkQuality>().unwrap_err();
        assert!(error.to_string().contains("good, okay, bad"));
    }

    #[test]
    fn test_json_shape_matches_walk_logs_table() {
        let log = WalkLog::new(WalkQuality::Bad, BathroomActivity::Both)
            .with_user_name("Jake")
            .with_notes(Some("rainy"));
        let value = serde_json::to_value(&log).unwrap();

        assert_eq!(value["walkQuality"], "bad");
        assert_eq!(value["bathroom"], "both");
        assert_eq!(value["userName"], "Jake");
        assert_eq!(value["notes"], "rainy");
        assert_eq!(value["id"], log.id.unwrap().as_str());
    }

    #[test]
    fn test_decode_remote_row() {
        let raw = r#"{
            "id": "0190a0b2-7c1e-7cc3-98c4-dc0c0c07398f",
            "date": "2025-07-12T14:30:00+00:00",
            "walkQuality": "okay",
            "bathroom": "pee",
            "userName": "Jake",
            "notes": ""
        }"#;
        let log: WalkLog = serde_json::from_str(raw).unwrap();
        assert_eq!(log.quality, WalkQuality::Okay);
        assert_eq!(log.bathroom, BathroomActivity::Pee);
        assert_eq!(log.notes, None);
        assert_eq!(log.date.to_rfc3339(), "2025-07-12T14:30:00+00:00");
    }

    #[test]
    fn test_decode_keeps_note_text_verbatim() {
        let raw = r#"{"date":"2025-07-12T14:30:00Z","walkQuality":"good","bathroom":"none","userName":"Sam","notes":"  muddy paws\n"}"#;
        let log: WalkLog = serde_json::from_str(raw).unwrap();
        assert_eq!(log.notes.as_deref(), Some("  muddy paws\n"));
    }

    #[test]
    fn test_decode_row_without_id_or_notes() {
        let raw = r#"{"date":"2025-07-12T14:30:00Z","walkQuality":"good","bathroom":"none","userName":"Sam"}"#;
        let log: WalkLog = serde_json::from_str(raw).unwrap();
        assert!(log.id.is_none());
        assert!(log.notes.is_none());
    }

    #[test]
    fn test_id_prefix_match() {
        let log = WalkLog::new(WalkQuality::Good, BathroomActivity::Pee);
        let id = log.id.unwrap().as_str();
        assert!(log.id_matches_prefix(&id[..8]));
        assert!(log.id_matches_prefix(&id[..8].to_ascii_uppercase()));
        assert!(!log.id_matches_prefix(""));
        assert!(!log.id_matches_prefix("zzzz"));
    }
}
