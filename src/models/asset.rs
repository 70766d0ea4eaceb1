//! Display names paired with CDN image URLs.

use serde::{Deserialize, Serialize};

/// Asset families hosted on the image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    Brawler,
    GameMode,
    Map,
}

impl AssetCategory {
    /// Directory of this category on the CDN.
    pub fn path(&self) -> &'static str {
        match self {
            AssetCategory::Brawler => "brawler-bs",
            AssetCategory::GameMode => "gamemode",
            AssetCategory::Map => "map",
        }
    }
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// A display name with its image. Used for brawlers, modes and maps alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedAsset {
    pub name: String,
    pub image_url: String,
}
