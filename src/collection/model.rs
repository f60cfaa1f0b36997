use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::dates;

/// Stable identity of a collection item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaId(pub Uuid);

impl MediaId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MediaId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Physical format of an item. Declaration order is the canonical order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaType {
    #[serde(alias = "vinyl-record", alias = "lp", alias = "record")]
    Vinyl,
    #[serde(alias = "compact-disc", alias = "compact_disc")]
    Cd,
    #[serde(alias = "compact-cassette", alias = "tape")]
    Cassette,
}

impl MediaType {
    pub const ALL: [MediaType; 3] = [MediaType::Vinyl, MediaType::Cd, MediaType::Cassette];

    pub fn display_name(self) -> &'static str {
        match self {
            MediaType::Vinyl => "Vinyl",
            MediaType::Cd => "CD",
            MediaType::Cassette => "Cassette",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Grading scale, best first. Declaration order is the canonical order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    Mint,
    #[serde(alias = "near_mint", alias = "nm")]
    NearMint,
    #[serde(alias = "very_good", alias = "vg")]
    VeryGood,
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub const ALL: [Condition; 6] = [
        Condition::Mint,
        Condition::NearMint,
        Condition::VeryGood,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Condition::Mint => "Mint",
            Condition::NearMint => "Near Mint",
            Condition::VeryGood => "Very Good",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One physical item in a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(default)]
    pub id: MediaId,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub condition: Condition,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(deserialize_with = "dates::timestamp")]
    pub date_added: DateTime<Utc>,
    #[serde(deserialize_with = "dates::date")]
    pub release_date: NaiveDate,
    #[serde(default)]
    pub favorite: bool,
    /// `false` means the item is on the want list.
    #[serde(default = "default_owned")]
    pub owned: bool,
}

fn default_owned() -> bool {
    true
}

impl Media {
    pub fn is_wanted(&self) -> bool {
        !self.owned
    }
}
