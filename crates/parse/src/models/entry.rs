use super::ContentKind;
use crate::subject::derive_subject;

/// The three captured parts of an accepted listing line, already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Text between the leading parentheses (e.g. `Physics`)
    pub category: String,
    /// Everything between the category and the URL boundary
    pub title: String,
    /// The `http://` or `https://` URL, unmodified
    pub url: String,
}

/// A classified listing entry: a [`RawEntry`] with its kind and subject
/// decided. This is what the catalog groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub category: String,
    pub title: String,
    pub url: String,
    pub kind: ContentKind,
    /// Subject name derived from the title; never empty
    pub subject: String,
}
impl From<RawEntry> for Entry {
    fn from(raw: RawEntry) -> Self {
        let kind = ContentKind::of_url(&raw.url);
        let subject = derive_subject(&raw.title);
        Self { category: raw.category, title: raw.title, url: raw.url, kind, subject }
    }
}
impl Entry {
    pub fn is_video(&self) -> bool {
        self.kind.is_video()
    }

    pub fn is_document(&self) -> bool {
        self.kind.is_document()
    }
}
