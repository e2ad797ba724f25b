use serde::Serialize;

/// A playable video. `src` is the effective playback URL, which differs from
/// the listing URL when the source was routed through the proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub title: String,
    pub src: String,
    pub category: String,
    pub is_protected_source: bool,
}

/// A document, always opened outside the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfItem {
    pub name: String,
    pub src: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Derived subject name; never empty
    pub name: String,
    /// URL-safe identifier, unique within a catalog
    pub slug: String,
    pub videos: Vec<VideoItem>,
    pub pdfs: Vec<PdfItem>,
}
impl Subject {
    pub(crate) fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self { name: name.into(), slug: slug.into(), videos: Vec::new(), pdfs: Vec::new() }
    }

    pub fn first_video(&self) -> Option<&VideoItem> {
        self.videos.first()
    }
}

/// A navigator folder. Each folder holds exactly one subject of the same name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    name: String,
    subjects: [Subject; 1],
}
impl From<Subject> for Folder {
    fn from(subject: Subject) -> Self {
        Self { name: subject.name.clone(), subjects: [subject] }
    }
}
impl Folder {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subject(&self) -> &Subject {
        &self.subjects[0]
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }
}

/// Counts reported back to whoever requested the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub subjects: usize,
    pub videos: usize,
    pub documents: usize,
    /// Videos whose original URL pointed at a DRM host
    pub protected_videos: usize,
    /// Non-blank listing lines that were not entries
    pub skipped: usize,
}
