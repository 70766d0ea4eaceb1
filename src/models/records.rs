//! Graded summary cards and the per-player statistic payload.

use serde::{Deserialize, Serialize};

use super::Battlelog;

/// Qualitative grade attached to a summary metric, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GradeTier {
    Bad,
    Soso,
    Good,
    Great,
    God,
}

impl std::fmt::Display for GradeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradeTier::Bad => write!(f, "BAD"),
            GradeTier::Soso => write!(f, "SOSO"),
            GradeTier::Good => write!(f, "GOOD"),
            GradeTier::Great => write!(f, "GREAT"),
            GradeTier::God => write!(f, "GOD"),
        }
    }
}

/// One display box of the summary (`DisplayBoxFormat` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub content: String,
    pub caption: String,
    pub grade: GradeTier,
    /// Reserved for staged rollouts; never set.
    pub staged: bool,
}

impl StatCard {
    pub fn new(content: impl Into<String>, caption: impl Into<String>, grade: GradeTier) -> Self {
        Self {
            content: content.into(),
            caption: caption.into(),
            grade,
            staged: false,
        }
    }
}

/// The three summary cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Records {
    pub sum_of_win_loss: StatCard,
    pub winning_percentage: StatCard,
    pub winning_streak: StatCard,
}

/// Everything the statistic query returns for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistic {
    /// `None` when the log holds no decided battle
    pub records: Option<Records>,

    /// Most recent first
    pub battlelogs: Vec<Battlelog>,

    pub latest_battlelog: Option<Battlelog>,
}

impl Statistic {
    /// Assemble a statistic, taking the latest entry from the head of the log.
    pub fn new(records: Option<Records>, battlelogs: Vec<Battlelog>) -> Self {
        let latest_battlelog = battlelogs.first().cloned();
        Self {
            records,
            battlelogs,
            latest_battlelog,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_ordering() {
        assert!(GradeTier::Bad < GradeTier::Soso);
        assert!(GradeTier::Soso < GradeTier::Good);
        assert!(GradeTier::Good < GradeTier::Great);
        assert!(GradeTier::Great < GradeTier::God);
    }

    #[test]
    fn test_grade_wire_names() {
        assert_eq!(serde_json::to_string(&GradeTier::Soso).unwrap(), "\"SOSO\"");
        assert_eq!(serde_json::to_string(&GradeTier::God).unwrap(), "\"GOD\"");
        let parsed: GradeTier = serde_json::from_str("\"GREAT\"").unwrap();
        assert_eq!(parsed, GradeTier::Great);
        assert_eq!(GradeTier::Bad.to_string(), "BAD");
    }

    #[test]
    fn test_stat_card_never_staged() {
        let card = StatCard::new("10", "連勝中", GradeTier::Good);
        assert!(!card.staged);
    }

    #[test]
    fn test_empty_statistic_shape() {
        let stat = Statistic::new(None, vec![]);
        let json = serde_json::to_value(&stat).unwrap();

        assert!(json["records"].is_null());
        assert_eq!(json["battlelogs"], serde_json::json!([]));
        assert!(json["latestBattlelog"].is_null());
    }

    #[test]
    fn test_records_wire_names() {
        let card = StatCard::new("1", "c", GradeTier::Bad);
        let records = Records {
            sum_of_win_loss: card.clone(),
            winning_percentage: card.clone(),
            winning_streak: card,
        };
        let json = serde_json::to_value(&records).unwrap();

        assert!(json.get("sumOfWinLoss").is_some());
        assert!(json.get("winningPercentage").is_some());
        assert_eq!(json["winningStreak"]["staged"], false);
        assert_eq!(json["winningStreak"]["grade"], "BAD");
    }
}
