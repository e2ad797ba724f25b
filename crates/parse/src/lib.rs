//! Classification of lecture link listings.
//!
//! A listing is UTF-8 text with one entry per line:
//!
//! ```text
//! (Physics)Lect-1 Mechanics:https://cdn.example.com/v1.mp4
//! (Physics)Notes-1 Formulas:https://cdn.example.com/formulas.pdf
//! ```
//!
//! Each accepted line becomes an [`Entry`]: a video or a document (see
//! [`ContentKind`]) with a subject derived from its title (see
//! [`derive_subject`]). Lines that don't fit the grammar are skipped and
//! counted, never reported as errors.

mod classify;
mod consts;
pub mod error;
pub mod models;
mod subject;

use exn::ResultExt;
use std::path::Path;
use tracing::instrument;

pub use crate::classify::parse_line;
pub use crate::consts::DEFAULT_SUBJECT;
use crate::error::{ErrorKind, Result};
pub use crate::models::{ContentKind, Entry, RawEntry};
pub use crate::subject::derive_subject;

/// Classified entries of a listing, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub entries: Vec<Entry>,
    /// Non-blank lines that did not match the grammar
    pub skipped: usize,
}
impl Listing {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn videos(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.is_video())
    }

    pub fn documents(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.is_document())
    }
}

/// Classifies every line of a listing.
///
/// Blank lines are ignored entirely; other lines that fail [`parse_line`] are
/// counted in [`Listing::skipped`]. A leading byte-order mark is ignored.
#[instrument(skip(text), fields(text_size = text.len()))]
pub fn parse_listing(text: &str) -> Listing {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    let mut listing = Listing::default();
    for (number, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(raw) => listing.entries.push(raw.into()),
            None => {
                tracing::debug!(line = number + 1, "Skipping line that doesn't match the listing format");
                listing.skipped += 1;
            },
        }
    }
    tracing::debug!(
        entries = listing.len(),
        videos = listing.videos().count(),
        documents = listing.documents().count(),
        skipped = listing.skipped,
        "Listing classified"
    );
    listing
}

/// Reads a listing from disk and classifies it. The whole file must be valid
/// UTF-8; nothing is classified from a file that isn't.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_listing(path: impl AsRef<Path>) -> Result<Listing> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).or_raise(|| ErrorKind::Unreadable(path.to_path_buf()))?;
    let text = String::from_utf8(bytes).or_raise(|| ErrorKind::InvalidEncoding(path.to_path_buf()))?;
    Ok(parse_listing(&text))
}
