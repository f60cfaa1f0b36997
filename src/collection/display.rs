use chrono::Datelike;

use crate::config::MediaDisplayField;

use super::model::Media;

/// Build a display line for `media` according to the provided `fields` and separator.
///
/// Blank text fields are skipped. Falls back to the title, or `"Untitled"` when
/// the title is blank too, if no parts were produced.
pub fn display_from_fields(media: &Media, fields: &[MediaDisplayField], sep: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in fields {
        match f {
            MediaDisplayField::Title => {
                if !media.title.trim().is_empty() {
                    parts.push(media.title.trim().to_string());
                }
            }
            MediaDisplayField::Artist => {
                if !media.artist.trim().is_empty() {
                    parts.push(media.artist.trim().to_string());
                }
            }
            MediaDisplayField::Type => parts.push(media.media_type.display_name().to_string()),
            MediaDisplayField::Condition => {
                parts.push(media.condition.display_name().to_string())
            }
            MediaDisplayField::Year => parts.push(media.release_date.year().to_string()),
            MediaDisplayField::Added => {
                parts.push(media.date_added.format("%Y-%m-%d").to_string())
            }
        }
    }

    if !parts.is_empty() {
        parts.join(sep)
    } else if !media.title.trim().is_empty() {
        media.title.clone()
    } else {
        "Untitled".to_string()
    }
}
