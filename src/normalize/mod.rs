//! Battle-log normalization.
//!
//! Turns raw battle-log items into display-ready [`Battlelog`] records:
//! - **names**: brawler and mode name canonicalization
//! - **assets**: CDN image URLs for brawlers, modes and maps
//! - **result**: victory / defeat / draw classification
//! - **picks**: the tracked player's side of a battle
//!
//! Normalization is total: absent or unrecognized fields become `None` or an
//! empty list, never an error.

mod assets;
mod names;
mod picks;
mod result;

pub use assets::{AssetUrlBuilder, DEFAULT_CDN_BASE};
pub use names::{brawler_name, capitalize_words, map_name, mode_name};
pub use picks::extract_picks;
pub use result::classify_result;

use tracing::debug;

use crate::models::{Battlelog, Brawler, Event, RawBattleItem, RawBrawler, RawEvent};

/// Reformat a compact battle time (`20230615T120530.000Z`) as
/// `2023-06-15T12:05:30.000Z`.
///
/// Works on fixed character offsets; a short input yields empty segments.
pub fn format_battle_time(raw: &str) -> String {
    let part = |start: usize, end: usize| raw.get(start..end).unwrap_or("");
    format!(
        "{}-{}-{}T{}:{}:{}.{}",
        part(0, 4),
        part(4, 6),
        part(6, 8),
        part(9, 11),
        part(11, 13),
        part(13, 15),
        part(16, 20)
    )
}

/// Normalize the event slot. Map-less slots and event id 0 carry no event.
pub fn normalize_event(event: Option<&RawEvent>, assets: &AssetUrlBuilder) -> Option<Event> {
    let event = event?;
    if event.id == Some(0) {
        return None;
    }
    let map = event.map.as_deref()?;
    let mode = event.mode.as_deref()?;

    Some(Event {
        mode: assets.mode(mode),
        map: assets.map(map),
    })
}

/// Normalizes raw battle-log items for one tracked player.
#[derive(Debug, Clone)]
pub struct BattlelogNormalizer<'a> {
    assets: &'a AssetUrlBuilder,
    player_tag: &'a str,
}

impl<'a> BattlelogNormalizer<'a> {
    pub fn new(assets: &'a AssetUrlBuilder, player_tag: &'a str) -> Self {
        Self { assets, player_tag }
    }

    /// Normalize a single item.
    pub fn normalize(&self, item: &RawBattleItem) -> Battlelog {
        Battlelog {
            battle_time: format_battle_time(&item.battle_time),
            event: normalize_event(item.event.as_ref(), self.assets),
            result: classify_result(&item.battle),
            picks: extract_picks(&item.battle.shape, self.player_tag, self.assets),
        }
    }

    /// Normalize a whole log, keeping feed order.
    pub fn normalize_all(&self, items: &[RawBattleItem]) -> Vec<Battlelog> {
        let logs: Vec<Battlelog> = items.iter().map(|item| self.normalize(item)).collect();
        debug!(
            player_tag = %self.player_tag,
            count = logs.len(),
            unknown_results = logs.iter().filter(|l| l.result.is_none()).count(),
            "Normalized battle log"
        );
        logs
    }
}

/// Roster listing with display names and image URLs.
pub fn normalize_roster(raw: Vec<RawBrawler>, assets: &AssetUrlBuilder) -> Vec<Brawler> {
    raw.into_iter()
        .map(|b| {
            let asset = assets.brawler(&b.name);
            Brawler {
                id: b.id,
                name: asset.name,
                image_url: asset.image_url,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResultKind;
    use pretty_assertions::assert_eq;

    fn item(value: serde_json::Value) -> RawBattleItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_format_battle_time() {
        assert_eq!(format_battle_time("20230615T120530.000Z"), "2023-06-15T12:05:30.000Z");
        assert_eq!(format_battle_time("20211231T235959.123Z"), "2021-12-31T23:59:59.123Z");
    }

    #[test]
    fn test_format_battle_time_short_input() {
        assert_eq!(format_battle_time("2023"), "2023--T::.");
        assert_eq!(format_battle_time(""), "--T::.");
    }

    #[test]
    fn test_event_null_for_id_zero() {
        let assets = AssetUrlBuilder::default();
        let event = RawEvent {
            id: Some(0),
            mode: Some("gemGrab".to_string()),
            map: Some("Hard Rock Mine".to_string()),
        };
        assert_eq!(normalize_event(Some(&event), &assets), None);
    }

    #[test]
    fn test_event_null_without_map() {
        let assets = AssetUrlBuilder::default();
        let event = RawEvent {
            id: Some(15000007),
            mode: Some("gemGrab".to_string()),
            map: None,
        };
        assert_eq!(normalize_event(Some(&event), &assets), None);
        assert_eq!(normalize_event(None, &assets), None);
    }

    #[test]
    fn test_event_normalized() {
        let assets = AssetUrlBuilder::default();
        let event = RawEvent {
            id: Some(15000007),
            mode: Some("brawlBall".to_string()),
            map: Some("Backyard Bowl".to_string()),
        };
        let normalized = normalize_event(Some(&event), &assets).unwrap();

        assert_eq!(normalized.mode.name, "Brawl Ball");
        assert_eq!(normalized.mode.image_url, "https://cdn.brawlify.com/gamemode/Brawl-Ball.png");
        assert_eq!(normalized.map.name, "Backyard Bowl");
        assert_eq!(normalized.map.image_url, "https://cdn.brawlify.com/map/Backyard-Bowl.png");
    }

    #[test]
    fn test_normalize_team_battle() {
        let assets = AssetUrlBuilder::default();
        let normalizer = BattlelogNormalizer::new(&assets, "#ME");
        let raw = item(serde_json::json!({
            "battleTime": "20230615T120530.000Z",
            "event": { "id": 15000007, "mode": "gemGrab", "map": "Hard Rock Mine" },
            "battle": {
                "type": "ranked",
                "trophyChange": 8,
                "teams": [
                    [{ "tag": "#A", "brawler": { "name": "SHELLY" } }],
                    [{ "tag": "#ME", "brawler": { "name": "MR. P" } }, { "tag": "#B", "brawler": { "name": "POCO" } }]
                ]
            }
        }));

        let log = normalizer.normalize(&raw);

        assert_eq!(log.battle_time, "2023-06-15T12:05:30.000Z");
        assert_eq!(log.event.as_ref().map(|e| e.mode.name.as_str()), Some("Gem Grab"));
        assert_eq!(log.result, Some(ResultKind::Victory));
        let pick_names: Vec<&str> = log.picks.iter().map(|p| p.brawler.name.as_str()).collect();
        assert_eq!(pick_names, vec!["Mr.P", "Poco"]);
    }

    #[test]
    fn test_unchanged_trophies_serialize_null_result() {
        let assets = AssetUrlBuilder::default();
        let raw = item(serde_json::json!({
            "battleTime": "20230615T120530.000Z",
            "battle": { "type": "ranked", "trophyChange": 0 }
        }));

        let log = BattlelogNormalizer::new(&assets, "#ME").normalize(&raw);
        let json = serde_json::to_value(&log).unwrap();

        assert_eq!(log.result, None);
        assert!(json["result"].is_null());
    }

    #[test]
    fn test_normalize_all_preserves_order_and_is_deterministic() {
        let assets = AssetUrlBuilder::default();
        let normalizer = BattlelogNormalizer::new(&assets, "#ME");
        let items = vec![
            item(serde_json::json!({ "battleTime": "20230615T120530.000Z", "battle": { "result": "defeat" } })),
            item(serde_json::json!({ "battleTime": "20230614T120530.000Z", "battle": { "result": "victory" } })),
            item(serde_json::json!({ "battleTime": "20230613T120530.000Z", "battle": {} })),
        ];

        let first = normalizer.normalize_all(&items);
        let second = normalizer.normalize_all(&items);

        assert_eq!(first, second);
        let results: Vec<Option<ResultKind>> = first.iter().map(|l| l.result).collect();
        assert_eq!(results, vec![Some(ResultKind::Defeat), Some(ResultKind::Victory), None]);
        assert_eq!(first[2].battle_time, "2023-06-13T12:05:30.000Z");
        assert!(first[2].picks.is_empty());
    }

    #[test]
    fn test_normalize_roster() {
        let roster = normalize_roster(
            vec![
                RawBrawler { id: 16000000, name: "SHELLY".to_string() },
                RawBrawler { id: 16000032, name: "MR. P".to_string() },
            ],
            &AssetUrlBuilder::default(),
        );

        assert_eq!(roster[1].id, 16000032);
        assert_eq!(roster[1].name, "Mr.P");
        assert_eq!(roster[0].image_url, "https://cdn.brawlify.com/brawler-bs/Shelly.png");
    }
}
