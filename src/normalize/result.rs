//! Battle outcome classification.

use std::cmp::Ordering;

use crate::models::{RawBattle, ResultKind};

/// Classify a battle outcome.
///
/// An explicit result wins. Otherwise a nonzero trophy delta decides: gain
/// is a victory, loss a defeat. With neither, or an unchanged trophy count,
/// the outcome is unknown.
pub fn classify_result(battle: &RawBattle) -> Option<ResultKind> {
    if let Some(kind) = battle.result.as_deref().and_then(ResultKind::from_raw) {
        return Some(kind);
    }

    battle.trophy_change.and_then(|delta| match delta.cmp(&0) {
        Ordering::Greater => Some(ResultKind::Victory),
        Ordering::Less => Some(ResultKind::Defeat),
        Ordering::Equal => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn battle(result: Option<&str>, trophy_change: Option<i64>) -> RawBattle {
        RawBattle {
            result: result.map(str::to_string),
            trophy_change,
            ..Default::default()
        }
    }

    #[test]
    fn test_explicit_result_used_verbatim() {
        assert_eq!(classify_result(&battle(Some("victory"), None)), Some(ResultKind::Victory));
        assert_eq!(classify_result(&battle(Some("defeat"), None)), Some(ResultKind::Defeat));
        assert_eq!(classify_result(&battle(Some("draw"), None)), Some(ResultKind::Draw));
    }

    #[test]
    fn test_explicit_result_beats_trophy_change() {
        assert_eq!(classify_result(&battle(Some("defeat"), Some(8))), Some(ResultKind::Defeat));
    }

    #[test]
    fn test_trophy_change_sign() {
        assert_eq!(classify_result(&battle(None, Some(9))), Some(ResultKind::Victory));
        assert_eq!(classify_result(&battle(None, Some(-4))), Some(ResultKind::Defeat));
    }

    #[test]
    fn test_zero_trophy_change_is_unknown() {
        assert_eq!(classify_result(&battle(None, Some(0))), None);
        assert_eq!(classify_result(&battle(Some("draw"), Some(0))), Some(ResultKind::Draw));

        let ranked: RawBattle =
            serde_json::from_value(serde_json::json!({ "type": "ranked", "trophyChange": 0 })).unwrap();
        assert_eq!(classify_result(&ranked), None);
    }

    #[test]
    fn test_unknown_outcome() {
        assert_eq!(classify_result(&battle(None, None)), None);
    }

    #[test]
    fn test_unrecognized_result_falls_back_to_trophies() {
        assert_eq!(classify_result(&battle(Some("rank 3"), Some(4))), Some(ResultKind::Victory));
        assert_eq!(classify_result(&battle(Some(""), None)), None);
    }
}
