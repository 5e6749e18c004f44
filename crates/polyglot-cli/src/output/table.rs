//! Table formatting utilities for CLI output.

use comfy_table::{ContentArrangement, Table, presets};
use owo_colors::{OwoColorize, Stream};

/// Coverage data for a single language.
pub struct LanguageCoverage {
    /// Language key (e.g., "de", "fr").
    pub language: String,
    /// Number of default-language messages this language also has.
    pub translated: usize,
    /// Keys of the default language missing here.
    pub missing: Vec<String>,
    /// Keys only this language has.
    pub extra: Vec<String>,
}

/// Format coverage data as an ASCII table.
pub fn format_coverage_table(source_count: usize, coverage: &[LanguageCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Coverage", "Missing", "Extra"]);

    for lang in coverage {
        let ratio = format!("{}/{}", lang.translated, source_count);
        let ratio = if lang.missing.is_empty() {
            ratio.if_supports_color(Stream::Stdout, |text| text.green()).to_string()
        } else {
            ratio.if_supports_color(Stream::Stdout, |text| text.yellow()).to_string()
        };
        table.add_row(vec![
            lang.language.clone(),
            ratio,
            lang.missing.len().to_string(),
            lang.extra.len().to_string(),
        ]);
    }

    table
}
