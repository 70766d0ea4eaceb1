use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::fetch::MatchSource;
use crate::statistic::StatisticBuilder;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn MatchSource>,
    pub statistics: Arc<StatisticBuilder>,
    pub cors_origin: String,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(source: Arc<dyn MatchSource>, statistics: StatisticBuilder, cors_origin: String) -> Self {
        Self {
            source,
            statistics: Arc::new(statistics),
            cors_origin,
            started_at: Utc::now(),
        }
    }
}
