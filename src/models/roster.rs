//! Roster and ranking listings.

use serde::{Deserialize, Serialize};

/// A brawler from the roster listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brawler {
    pub id: i64,
    pub name: String,
    pub image_url: String,
}

/// A ranked player, passed through from the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub tag: String,
    pub rank: i64,
    pub trophies: i64,
    pub name: String,
    #[serde(default)]
    pub club: Option<Club>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub name: String,
}
