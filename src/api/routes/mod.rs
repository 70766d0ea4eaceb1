//! Route handlers.

pub mod health;
pub mod listings;
pub mod statistic;
