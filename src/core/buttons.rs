//! Button list parsing for the generic dialog.

/// Separator between labels in the `--buttons` option.
pub const BUTTON_SEPARATOR: char = ';';

/// Split a `;`-joined label list, keeping empty segments.
///
/// There is no escaping, so a label can never contain `;`. An empty string
/// yields a single empty label.
pub fn split_buttons(raw: &str) -> Vec<String> {
    raw.split(BUTTON_SEPARATOR).map(str::to_string).collect()
}
