use std::fmt::Write;

use crate::collection::{CollectionSummary, display_from_fields};
use crate::config::Settings;
use crate::organize::{Section, item_count};

/// Render a summary line, the number of items shown, then each section and
/// its items.
///
/// Empty sections are skipped unless `view.show_empty_sections` is set or the
/// section is the only one in the result.
pub fn render(summary: &CollectionSummary, sections: &[Section<'_>], settings: &Settings) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", summary.headline());
    let _ = writeln!(out, "Showing {} of {}", item_count(sections), summary.total);

    let always_show = settings.view.show_empty_sections || sections.len() == 1;
    for section in sections {
        if section.is_empty() && !always_show {
            continue;
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "== {} ({})", section.title, section.len());
        if section.is_empty() {
            let _ = writeln!(out, "  (nothing here)");
        }
        for media in &section.content {
            let line =
                display_from_fields(media, &settings.display.fields, &settings.display.separator);
            let marker = if media.favorite { "*" } else { " " };
            let _ = writeln!(out, " {marker}{line}");
        }
    }

    out
}
