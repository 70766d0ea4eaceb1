//! Statistics calculation engine.
//!
//! Reduces a normalized battle log (most recent first) into three graded
//! summary cards:
//! - win/loss totals
//! - win rate
//! - current winning streak

pub mod grade;
mod locale;

pub use locale::Locale;

use crate::models::{Battlelog, GradeTier, Records, StatCard};

/// Victory and defeat counts over a log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub victories: u32,
    pub defeats: u32,
    /// All entries, including draws and unknown outcomes
    pub total: usize,
}

impl Tally {
    pub fn has_decided(&self) -> bool {
        self.victories > 0 || self.defeats > 0
    }
}

/// Consecutive victories and defeats counted from the most recent battle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Streak {
    pub victories: u32,
    pub defeats: u32,
}

/// Count victories and defeats.
pub fn tally(logs: &[Battlelog]) -> Tally {
    logs.iter().fold(
        Tally {
            total: logs.len(),
            ..Default::default()
        },
        |mut acc, log| {
            if log.is_victory() {
                acc.victories += 1;
            } else if log.is_defeat() {
                acc.defeats += 1;
            }
            acc
        },
    )
}

/// Current streaks. Each run ends at the first battle that breaks it.
pub fn current_streak(logs: &[Battlelog]) -> Streak {
    Streak {
        victories: logs.iter().take_while(|l| l.is_victory()).count() as u32,
        defeats: logs.iter().take_while(|l| l.is_defeat()).count() as u32,
    }
}

/// Win rate in whole percent, rounded up. The denominator is every entry of
/// the log, not only decided battles.
pub fn win_rate(victories: u32, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (victories as f64 / total as f64 * 100.0).ceil() as u32
}

/// Summary cards for a log, or `None` when it holds no victory and no defeat.
pub fn summarize(logs: &[Battlelog], locale: Locale) -> Option<Records> {
    let counts = tally(logs);
    if !counts.has_decided() {
        return None;
    }

    Some(Records {
        sum_of_win_loss: sum_of_win_loss_card(&counts, locale),
        winning_percentage: winning_percentage_card(&counts, locale),
        winning_streak: winning_streak_card(&current_streak(logs), locale),
    })
}

fn sum_of_win_loss_card(counts: &Tally, locale: Locale) -> StatCard {
    StatCard::new(
        locale.win_loss(counts.victories, counts.defeats),
        locale.recent_games(counts.total),
        grade::sum_of_win_loss_grade(counts.victories),
    )
}

fn winning_percentage_card(counts: &Tally, locale: Locale) -> StatCard {
    let rate = win_rate(counts.victories, counts.total);
    StatCard::new(
        format!("{}%", rate),
        locale.win_rate(),
        grade::winning_percentage_grade(rate),
    )
}

fn winning_streak_card(streak: &Streak, locale: Locale) -> StatCard {
    match grade::winning_streak_grade(streak.victories) {
        Some(grade) => StatCard::new(streak.victories.to_string(), locale.winning_streak(), grade),
        None => StatCard::new(streak.defeats.to_string(), locale.losing_streak(), GradeTier::Bad),
    }
}
