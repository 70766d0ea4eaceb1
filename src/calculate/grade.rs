//! Grade threshold tables.
//!
//! Each summary metric has its own table. Rows are checked top to bottom and
//! the first matching row decides the grade.

use crate::models::GradeTier;

/// Condition of a single table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    Exactly(u32),
    AtLeast(u32),
    Above(u32),
}

impl Threshold {
    pub fn matches(&self, value: u32) -> bool {
        match *self {
            Threshold::Exactly(n) => value == n,
            Threshold::AtLeast(n) => value >= n,
            Threshold::Above(n) => value > n,
        }
    }
}

/// An ordered threshold table, highest grade first.
#[derive(Debug, Clone, Copy)]
pub struct GradeTable {
    rows: &'static [(Threshold, GradeTier)],
    fallback: Option<GradeTier>,
}

impl GradeTable {
    /// Grade for `value`, or `None` when no row matches and the table has no
    /// fallback.
    pub fn grade(&self, value: u32) -> Option<GradeTier> {
        self.rows
            .iter()
            .find(|(threshold, _)| threshold.matches(value))
            .map(|(_, tier)| *tier)
            .or(self.fallback)
    }
}

/// Victory count over the log.
pub const SUM_OF_WIN_LOSS: GradeTable = GradeTable {
    rows: &[
        (Threshold::Exactly(25), GradeTier::God),
        (Threshold::AtLeast(20), GradeTier::Great),
        (Threshold::AtLeast(10), GradeTier::Good),
        (Threshold::Above(0), GradeTier::Soso),
    ],
    fallback: Some(GradeTier::Bad),
};

/// Win rate in whole percent.
pub const WINNING_PERCENTAGE: GradeTable = GradeTable {
    rows: &[
        (Threshold::Exactly(100), GradeTier::God),
        (Threshold::AtLeast(90), GradeTier::Great),
        (Threshold::AtLeast(70), GradeTier::Good),
        (Threshold::AtLeast(50), GradeTier::Soso),
    ],
    fallback: Some(GradeTier::Bad),
};

/// Current victory streak. The last row accepts every count, so the table
/// never falls through.
pub const WINNING_STREAK: GradeTable = GradeTable {
    rows: &[
        (Threshold::Exactly(25), GradeTier::God),
        (Threshold::AtLeast(20), GradeTier::Great),
        (Threshold::AtLeast(10), GradeTier::Good),
        (Threshold::AtLeast(0), GradeTier::Soso),
    ],
    fallback: None,
};

pub fn sum_of_win_loss_grade(victories: u32) -> GradeTier {
    SUM_OF_WIN_LOSS.grade(victories).unwrap_or(GradeTier::Bad)
}

pub fn winning_percentage_grade(rate: u32) -> GradeTier {
    WINNING_PERCENTAGE.grade(rate).unwrap_or(GradeTier::Bad)
}

/// `None` only if a count falls below every row.
pub fn winning_streak_grade(streak: u32) -> Option<GradeTier> {
    WINNING_STREAK.grade(streak)
}
