//! Raw battle-log records as delivered by the remote ranking service.
//!
//! These mirror the upstream JSON loosely: almost every field is optional,
//! and the participant layout of a battle differs between team modes and
//! free-for-all modes. The layout is resolved once, at deserialization time,
//! into a [`BattleShape`].

use serde::{Deserialize, Serialize};

/// Battle types kept when the feed is restricted to ranked play.
pub const RANKED_BATTLE_TYPES: &[&str] = &["ranked", "proLeague"];

/// Envelope used by every list endpoint of the remote service.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemsEnvelope<T> {
    pub items: Option<Vec<T>>,
}

/// One entry of a player's battle log.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBattleItem {
    /// Compact timestamp, e.g. `20230615T120530.000Z`
    pub battle_time: String,

    #[serde(default)]
    pub event: Option<RawEvent>,

    #[serde(default)]
    pub battle: RawBattle,
}

impl RawBattleItem {
    /// Returns true if the battle counts as ranked play.
    pub fn is_ranked(&self) -> bool {
        self.battle
            .battle_type
            .as_deref()
            .map(|t| RANKED_BATTLE_TYPES.contains(&t))
            .unwrap_or(false)
    }
}

/// Event (mode + map rotation slot) a battle was played in.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    pub id: Option<i64>,
    pub mode: Option<String>,
    pub map: Option<String>,
}

/// The battle body with the participant layout already resolved.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawBattleFields")]
pub struct RawBattle {
    pub battle_type: Option<String>,
    pub result: Option<String>,
    pub trophy_change: Option<i64>,
    pub shape: BattleShape,
}

/// Participant layout of a battle.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum BattleShape {
    /// Two or more teams, each an ordered list of participants.
    Team(Vec<Vec<RawParticipant>>),
    /// A flat list of participants (showdown and similar).
    FreeForAll(Vec<RawParticipant>),
    /// Neither layout was present.
    #[default]
    Unknown,
}

/// Wire layout of the battle body before shape resolution.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBattleFields {
    #[serde(rename = "type")]
    battle_type: Option<String>,
    result: Option<String>,
    trophy_change: Option<i64>,
    teams: Option<Vec<Vec<RawParticipant>>>,
    players: Option<Vec<RawParticipant>>,
}

impl From<RawBattleFields> for RawBattle {
    fn from(fields: RawBattleFields) -> Self {
        // Teams take precedence when a payload carries both.
        let shape = match (fields.teams, fields.players) {
            (Some(teams), _) => BattleShape::Team(teams),
            (None, Some(players)) => BattleShape::FreeForAll(players),
            (None, None) => BattleShape::Unknown,
        };

        Self {
            battle_type: fields.battle_type,
            result: fields.result,
            trophy_change: fields.trophy_change,
            shape,
        }
    }
}

/// A player entry inside a battle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawParticipant {
    pub tag: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub brawler: Option<RawBrawlerRef>,

    /// Some modes list every brawler a player used instead of one pick.
    #[serde(default)]
    pub brawlers: Vec<RawBrawlerRef>,
}

impl RawParticipant {
    /// The brawler this participant played, if any was reported.
    pub fn played_brawler(&self) -> Option<&RawBrawlerRef> {
        self.brawler.as_ref().or_else(|| self.brawlers.first())
    }
}

/// Brawler reference inside a participant entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawBrawlerRef {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

/// Roster entry from the `brawlers` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBrawler {
    pub id: i64,
    pub name: String,
}
