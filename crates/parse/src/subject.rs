//! Subject names derived from entry titles.
//!
//! Entries are grouped by a human-readable subject rather than by their
//! category. The subject is whatever is left of the title once the lecture
//! numbering and trailing qualifiers are removed:
//!
//! 1. One leading lecture index (`Lect-1`, `Lect.-1`, `Lecture 5:`, `Lesson12`),
//!    matched case-insensitively, together with the separators after it.
//! 2. Every trailing parenthetical, e.g. `(HD)` or `(Part 2) (Revised)`.
//! 3. Runs of whitespace collapse to a single space.
//!
//! A title that reduces to nothing belongs to [`DEFAULT_SUBJECT`].

use crate::consts::{self, DEFAULT_SUBJECT};

/// Derives the subject name for a title. Never returns an empty string.
///
/// ```
/// use lectern_parse::derive_subject;
/// assert_eq!(derive_subject("Lect-1 Mechanics"), "Mechanics");
/// assert_eq!(derive_subject("Lect.-2  Rotational   Motion (HD)"), "Rotational Motion");
/// assert_eq!(derive_subject("Notes-1 Formulas"), "Notes-1 Formulas");
/// assert_eq!(derive_subject("Lect-3"), "General");
/// ```
pub fn derive_subject(title: &str) -> String {
    let mut name = consts::LECTURE_MARKER_REGEX.replace(title.trim(), "").into_owned();
    loop {
        let stripped = consts::TRAILING_QUALIFIER_REGEX.replace(&name, "");
        if stripped.len() == name.len() {
            break;
        }
        name = stripped.into_owned();
    }
    let name = consts::WHITESPACE_REGEX.replace_all(name.trim(), " ");
    match name.is_empty() {
        true => DEFAULT_SUBJECT.to_string(),
        false => name.into_owned(),
    }
}
