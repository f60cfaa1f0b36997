use std::path::PathBuf;

use serde::Deserialize;

use crate::collection::MediaType;
use crate::organize::{Filter, Sort};

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/mediashelf/config.toml` or `~/.config/mediashelf/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MEDIASHELF__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub view: ViewSettings,
    pub display: DisplaySettings,
    pub collection: CollectionSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Which part of the collection is shown.
    pub filter: FilterSetting,
    /// How items are ordered and grouped.
    pub sort: SortSetting,
    /// Print sections that ended up with no items.
    pub show_empty_sections: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            filter: FilterSetting::All,
            sort: SortSetting::RecentlyAdded,
            show_empty_sections: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Which fields make up an item's line, and in what order.
    ///
    /// Example: ["artist", "title", "year"]
    pub fields: Vec<MediaDisplayField>,
    /// Separator used to join `fields`.
    pub separator: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            fields: vec![MediaDisplayField::Artist, MediaDisplayField::Title],
            separator: " - ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CollectionSettings {
    /// Snapshot used when no path is given on the command line.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterSetting {
    All,
    #[serde(alias = "favourites", alias = "favorite")]
    Favorites,
    Owned,
    #[serde(alias = "wishlist", alias = "want-list")]
    Wanted,
    Vinyl,
    Cd,
    Cassette,
}

impl From<FilterSetting> for Filter {
    fn from(s: FilterSetting) -> Self {
        match s {
            FilterSetting::All => Filter::All,
            FilterSetting::Favorites => Filter::Favorites,
            FilterSetting::Owned => Filter::Owned,
            FilterSetting::Wanted => Filter::Wanted,
            FilterSetting::Vinyl => Filter::Type(MediaType::Vinyl),
            FilterSetting::Cd => Filter::Type(MediaType::Cd),
            FilterSetting::Cassette => Filter::Type(MediaType::Cassette),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortSetting {
    #[serde(alias = "recent", alias = "newest-first", alias = "recently_added")]
    RecentlyAdded,
    #[serde(alias = "oldest", alias = "oldest_first")]
    OldestFirst,
    Type,
    Condition,
    Title,
    Artist,
}

impl From<SortSetting> for Sort {
    fn from(s: SortSetting) -> Self {
        match s {
            SortSetting::RecentlyAdded => Sort::RecentlyAddedDesc,
            SortSetting::OldestFirst => Sort::RecentlyAddedAsc,
            SortSetting::Type => Sort::Type,
            SortSetting::Condition => Sort::Condition,
            SortSetting::Title => Sort::Title,
            SortSetting::Artist => Sort::Artist,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaDisplayField {
    Title,
    Artist,
    Type,
    Condition,
    /// Release year.
    Year,
    /// Date the item was added to the collection.
    Added,
}
