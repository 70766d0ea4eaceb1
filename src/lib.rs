//! # Brawl Stats
//!
//! Battle-log normalization and graded win/loss statistics for Brawl Stars
//! players.
//!
//! ## Architecture
//!
//! - **models**: Raw feed records and their display-ready forms
//! - **normalize**: Raw battle items → canonical battle logs
//! - **calculate**: Win/loss, win rate and streak cards with grade tiers
//! - **statistic**: Normalization + aggregation for one player
//! - **fetch**: Remote ranking service client
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod fetch;
pub mod models;
pub mod normalize;
pub mod statistic;

pub use models::*;
pub use statistic::StatisticBuilder;

/// Normalize a player tag for matching and lookups: trimmed, upper-cased,
/// with a leading `#`.
pub fn canonical_player_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_start_matches('#');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!("#{}", trimmed.to_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_tag_adds_hash() {
        assert_eq!(canonical_player_tag("2qyuppug8"), Some("#2QYUPPUG8".to_string()));
    }

    #[test]
    fn test_canonical_tag_keeps_hash() {
        assert_eq!(canonical_player_tag(" #2QYUPPUG8 "), Some("#2QYUPPUG8".to_string()));
    }

    #[test]
    fn test_canonical_tag_empty() {
        assert_eq!(canonical_player_tag(""), None);
        assert_eq!(canonical_player_tag("#"), None);
        assert_eq!(canonical_player_tag("   "), None);
    }
}
