//! CDN image URL construction.

use std::sync::LazyLock;

use regex::Regex;

use super::names;
use crate::models::{AssetCategory, NamedAsset};

/// Default image CDN.
pub const DEFAULT_CDN_BASE: &str = "https://cdn.brawlify.com";

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Builds `<cdn>/<category>/<Name-With-Hyphens>.png` URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUrlBuilder {
    cdn_base: String,
}

impl Default for AssetUrlBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_CDN_BASE)
    }
}

impl AssetUrlBuilder {
    pub fn new(cdn_base: impl Into<String>) -> Self {
        let cdn_base: String = cdn_base.into();
        Self {
            cdn_base: cdn_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn cdn_base(&self) -> &str {
        &self.cdn_base
    }

    /// Image URL for an already-normalized name.
    pub fn url(&self, name: &str, category: AssetCategory) -> String {
        format!(
            "{}/{}/{}.png",
            self.cdn_base,
            category.path(),
            WHITESPACE.replace_all(name, "-")
        )
    }

    /// Pair a normalized name with its image URL.
    pub fn named(&self, name: String, category: AssetCategory) -> NamedAsset {
        let image_url = self.url(&name, category);
        NamedAsset { name, image_url }
    }

    pub fn brawler(&self, raw_name: &str) -> NamedAsset {
        self.named(names::brawler_name(raw_name), AssetCategory::Brawler)
    }

    pub fn mode(&self, raw_name: &str) -> NamedAsset {
        self.named(names::mode_name(raw_name), AssetCategory::GameMode)
    }

    pub fn map(&self, raw_name: &str) -> NamedAsset {
        self.named(names::map_name(raw_name), AssetCategory::Map)
    }
}
