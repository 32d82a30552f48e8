//! Output file naming.

const EXTENSION: &str = ".txt";
const UNTITLED: &str = "untitled";

/// Derives the output file name for a list or board name.
///
/// The name is lower-cased and whitespace or path separators become `-`, so
/// `To Do` maps to `to-do.txt` and `Q1/Q2` cannot escape the output
/// directory.
#[must_use]
pub fn output_file_name(name: &str) -> String {
    let stem: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|ch| {
            if ch.is_whitespace() || ch == '/' || ch == '\\' {
                '-'
            } else {
                ch
            }
        })
        .collect();

    if stem.is_empty() || stem.chars().all(|ch| ch == '.') {
        format!("{UNTITLED}{EXTENSION}")
    } else {
        format!("{stem}{EXTENSION}")
    }
}
