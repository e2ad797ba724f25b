//! Single-line classification.

use crate::consts;
use crate::models::RawEntry;

/// Parses one listing line of the shape `(<category>)<title>:<url>`.
///
/// The line is trimmed before matching and each captured part is trimmed
/// afterwards. Returns `None` (not an error) for blank lines, lines that don't
/// match the grammar, and lines whose category or title trims to nothing.
///
/// When a title itself contains `:http…`, the URL starts at the *last* such
/// boundary on the line.
///
/// ```
/// use lectern_parse::parse_line;
/// let entry = parse_line("(Physics)Lect-1 Mechanics:https://cdn.example.com/v1.mp4").unwrap();
/// assert_eq!(entry.category, "Physics");
/// assert_eq!(entry.title, "Lect-1 Mechanics");
/// assert_eq!(entry.url, "https://cdn.example.com/v1.mp4");
///
/// assert!(parse_line("Physics - Lect-1:https://cdn.example.com/v1.mp4").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<RawEntry> {
    let captures = consts::LINE_REGEX.captures(line.trim())?;
    let category = captures.get(1)?.as_str().trim();
    let title = captures.get(2)?.as_str().trim();
    let url = captures.get(3)?.as_str().trim();
    if category.is_empty() || title.is_empty() {
        return None;
    }
    Some(RawEntry { category: category.to_string(), title: title.to_string(), url: url.to_string() })
}
