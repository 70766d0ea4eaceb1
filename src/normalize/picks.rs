//! Extraction of the tracked player's side of a battle.

use super::AssetUrlBuilder;
use crate::models::{BattleShape, Pick, RawParticipant};

/// Picks of the tracked player's side.
///
/// Team battles return the whole first team containing the player, in feed
/// order. Free-for-all battles return only the player's own entry.
/// Participants without a reported brawler are left out.
pub fn extract_picks(shape: &BattleShape, player_tag: &str, assets: &AssetUrlBuilder) -> Vec<Pick> {
    let side: &[RawParticipant] = match shape {
        BattleShape::Team(teams) => teams
            .iter()
            .find(|team| team.iter().any(|p| p.tag == player_tag))
            .map(Vec::as_slice)
            .unwrap_or_default(),
        BattleShape::FreeForAll(players) => players
            .iter()
            .find(|p| p.tag == player_tag)
            .map(std::slice::from_ref)
            .unwrap_or_default(),
        BattleShape::Unknown => &[],
    };

    side.iter()
        .filter_map(|participant| {
            let brawler = participant.played_brawler()?;
            Some(Pick {
                tag: participant.tag.clone(),
                brawler: assets.brawler(&brawler.name),
            })
        })
        .collect()
}
