//! Subject hierarchy built from a classified listing.
//!
//! ```text
//! Catalog
//! └── Folder "Mechanics"
//!     └── Subject "Mechanics"
//!         ├── videos: [Lect-1 Mechanics, Lect-2 Mechanics (HD)]
//!         └── pdfs:   [Lect-1 Mechanics Notes]
//! ```
//!
//! Every folder holds exactly one subject of the same name; the nesting only
//! exists because the viewer's navigator is shaped that way. Subjects, and
//! the items within them, keep the order in which they first appear in the
//! listing. Protected video sources are rewritten through the
//! [`SourceRewriter`] while the catalog is built, never afterwards.

mod aggregate;
mod models;
mod rewrite;

use crate::aggregate::Aggregator;
pub use crate::models::{Folder, PdfItem, Subject, Summary, VideoItem};
pub use crate::rewrite::{DEFAULT_MARKER, Source, SourceRewriter};
use lectern_parse::{Entry, Listing};
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    folders: Vec<Folder>,
    #[serde(skip)]
    skipped: usize,
}
impl Catalog {
    /// Builds the catalog for a whole listing, carrying over its skipped-line
    /// count for the [`Summary`].
    #[instrument(skip_all, fields(entries = listing.len()))]
    pub fn from_listing(listing: Listing, rewriter: &SourceRewriter) -> Self {
        let mut catalog = Self::from_entries(listing.entries, rewriter);
        catalog.skipped = listing.skipped;
        let summary = catalog.summary();
        tracing::debug!(
            subjects = summary.subjects,
            videos = summary.videos,
            documents = summary.documents,
            protected = summary.protected_videos,
            "Catalog built"
        );
        catalog
    }

    pub fn from_entries(entries: impl IntoIterator<Item = Entry>, rewriter: &SourceRewriter) -> Self {
        let mut aggregator = Aggregator::new(rewriter);
        for entry in entries {
            aggregator.push(entry);
        }
        let folders = aggregator.finish().into_iter().map(Folder::from).collect();
        Self { folders, skipped: 0 }
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn subjects(&self) -> impl Iterator<Item = &Subject> {
        self.folders.iter().flat_map(Folder::subjects)
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary { skipped: self.skipped, ..Summary::default() };
        for subject in self.subjects() {
            summary.subjects += 1;
            summary.videos += subject.videos.len();
            summary.documents += subject.pdfs.len();
            summary.protected_videos += subject.videos.iter().filter(|v| v.is_protected_source).count();
        }
        summary
    }
}
