//! Localized strings for the summary cards.

use serde::{Deserialize, Serialize};

/// Display language of the summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    pub fn win_loss(&self, victories: u32, defeats: u32) -> String {
        match self {
            Locale::Ja => format!("{}勝{}敗", victories, defeats),
            Locale::En => format!("{} wins {} losses", victories, defeats),
        }
    }

    pub fn recent_games(&self, count: usize) -> String {
        match self {
            Locale::Ja => format!("直近{}戦", count),
            Locale::En => format!("last {} games", count),
        }
    }

    pub fn win_rate(&self) -> &'static str {
        match self {
            Locale::Ja => "勝率",
            Locale::En => "win rate",
        }
    }

    pub fn winning_streak(&self) -> &'static str {
        match self {
            Locale::Ja => "連勝中",
            Locale::En => "winning streak",
        }
    }

    pub fn losing_streak(&self) -> &'static str {
        match self {
            Locale::Ja => "連敗中",
            Locale::En => "losing streak",
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ja" => Ok(Locale::Ja),
            "en" => Ok(Locale::En),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ja_strings() {
        let ja = Locale::Ja;
        assert_eq!(ja.win_loss(12, 3), "12勝3敗");
        assert_eq!(ja.recent_games(25), "直近25戦");
        assert_eq!(ja.win_rate(), "勝率");
        assert_eq!(ja.winning_streak(), "連勝中");
        assert_eq!(ja.losing_streak(), "連敗中");
    }

    #[test]
    fn test_en_strings() {
        let en = Locale::En;
        assert_eq!(en.win_loss(12, 3), "12 wins 3 losses");
        assert_eq!(en.recent_games(25), "last 25 games");
        assert_eq!(en.win_rate(), "win rate");
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!("JA".parse::<Locale>(), Ok(Locale::Ja));
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::Ja);
    }
}
