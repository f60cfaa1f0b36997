use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, ShelfError};

use super::model::Media;

/// On-disk snapshot layout: a `[[media]]` array of tables.
#[derive(Debug, Deserialize)]
struct Snapshot {
    #[serde(default)]
    media: Vec<Media>,
}

/// Parse a TOML collection snapshot.
///
/// Unknown `type` or `condition` values reject the whole snapshot rather than
/// dropping the offending record, so the caller never sees a short count.
pub fn parse_collection(src: &str) -> Result<Vec<Media>> {
    let snapshot: Snapshot = toml::from_str(src)?;
    check_unique_ids(&snapshot.media)?;
    Ok(snapshot.media)
}

/// Read and parse a TOML collection snapshot from `path`.
pub fn load_collection(path: &Path) -> Result<Vec<Media>> {
    let src = fs::read_to_string(path).map_err(|source| ShelfError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let snapshot: Snapshot = toml::from_str(&src).map_err(|source| ShelfError::ParseFile {
        path: path.to_path_buf(),
        source,
    })?;
    check_unique_ids(&snapshot.media)?;

    tracing::info!(
        path = %path.display(),
        items = snapshot.media.len(),
        "loaded collection snapshot"
    );
    Ok(snapshot.media)
}

fn check_unique_ids(media: &[Media]) -> Result<()> {
    let mut seen = HashSet::with_capacity(media.len());
    for m in media {
        if !seen.insert(m.id) {
            return Err(ShelfError::DuplicateId(m.id));
        }
    }
    Ok(())
}
