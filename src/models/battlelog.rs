//! Canonical battle-log records.

use serde::{Deserialize, Serialize};

use super::NamedAsset;

/// Outcome of a battle from the tracked player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Victory,
    Defeat,
    Draw,
}

impl ResultKind {
    /// Parse an explicit result string from the remote feed.
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "victory" => Some(ResultKind::Victory),
            "defeat" => Some(ResultKind::Defeat),
            "draw" => Some(ResultKind::Draw),
            _ => None,
        }
    }
}

impl std::fmt::Display for ResultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultKind::Victory => write!(f, "victory"),
            ResultKind::Defeat => write!(f, "defeat"),
            ResultKind::Draw => write!(f, "draw"),
        }
    }
}

/// Mode and map a battle was played on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub mode: NamedAsset,
    pub map: NamedAsset,
}

/// A participant's pick in a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pick {
    pub tag: String,
    pub brawler: NamedAsset,
}

/// One normalized battle-log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battlelog {
    /// `YYYY-MM-DDTHH:MM:SS.mmm`
    pub battle_time: String,

    pub event: Option<Event>,

    pub result: Option<ResultKind>,

    /// The tracked player's side, in feed order
    pub picks: Vec<Pick>,
}

impl Battlelog {
    pub fn is_victory(&self) -> bool {
        self.result == Some(ResultKind::Victory)
    }

    pub fn is_defeat(&self) -> bool {
        self.result == Some(ResultKind::Defeat)
    }
}
