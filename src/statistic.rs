//! Statistic assembly: normalization followed by aggregation.

use tracing::debug;

use crate::calculate::{self, Locale};
use crate::models::{Brawler, RawBattleItem, RawBrawler, Statistic};
use crate::normalize::{self, AssetUrlBuilder, BattlelogNormalizer};

/// Builds [`Statistic`] payloads from raw battle logs.
///
/// Holds only display settings; every call is a pure function of its input.
#[derive(Debug, Clone, Default)]
pub struct StatisticBuilder {
    assets: AssetUrlBuilder,
    locale: Locale,
}

impl StatisticBuilder {
    pub fn new(assets: AssetUrlBuilder, locale: Locale) -> Self {
        Self { assets, locale }
    }

    pub fn assets(&self) -> &AssetUrlBuilder {
        &self.assets
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Normalize `items` for `player_tag` and summarize them.
    pub fn build(&self, items: &[RawBattleItem], player_tag: &str) -> Statistic {
        let battlelogs = BattlelogNormalizer::new(&self.assets, player_tag).normalize_all(items);
        let records = calculate::summarize(&battlelogs, self.locale);
        debug!(
            player_tag = %player_tag,
            battles = battlelogs.len(),
            has_records = records.is_some(),
            "Built statistic"
        );
        Statistic::new(records, battlelogs)
    }

    /// Roster listing with display names and image URLs.
    pub fn roster(&self, raw: Vec<RawBrawler>) -> Vec<Brawler> {
        normalize::normalize_roster(raw, &self.assets)
    }
}
