use crate::models::{PdfItem, Subject, VideoItem};
use crate::rewrite::SourceRewriter;
use lectern_parse::{ContentKind, Entry};
use rslug::slugify;
use std::collections::{HashMap, HashSet};

/// Groups classified entries into subjects, in first-seen order.
///
/// Subjects are keyed by their exact derived name; the entry category plays
/// no part in grouping. Video sources are rewritten here, once, as they are
/// added.
pub(crate) struct Aggregator<'r> {
    rewriter: &'r SourceRewriter,
    subjects: Vec<Subject>,
    by_name: HashMap<String, usize>,
    slugs: HashSet<String>,
}
impl<'r> Aggregator<'r> {
    pub(crate) fn new(rewriter: &'r SourceRewriter) -> Self {
        Self { rewriter, subjects: Vec::new(), by_name: HashMap::new(), slugs: HashSet::new() }
    }

    pub(crate) fn push(&mut self, entry: Entry) {
        let index = self.subject_index(&entry.subject);
        let subject = &mut self.subjects[index];
        match entry.kind {
            ContentKind::Video => {
                let source = self.rewriter.rewrite(&entry.url);
                subject.videos.push(VideoItem {
                    src: source.src.into_owned(),
                    is_protected_source: source.protected,
                    title: entry.title,
                    category: entry.category,
                });
            },
            ContentKind::Document => {
                subject.pdfs.push(PdfItem { name: entry.title, src: entry.url, category: entry.category });
            },
        }
    }

    pub(crate) fn finish(self) -> Vec<Subject> {
        self.subjects
    }

    fn subject_index(&mut self, name: &str) -> usize {
        if let Some(index) = self.by_name.get(name) {
            return *index;
        }
        let slug = self.unique_slug(name);
        let index = self.subjects.len();
        self.subjects.push(Subject::new(name, slug));
        self.by_name.insert(name.to_string(), index);
        index
    }

    /// Distinct subject names can slugify identically ("C++" and "C"), so
    /// later ones get a numeric suffix.
    fn unique_slug(&mut self, name: &str) -> String {
        let base = match slugify!(name) {
            s if s.is_empty() => "subject".to_string(),
            s => s,
        };
        let mut slug = base.clone();
        let mut n = 2;
        while self.slugs.contains(&slug) {
            slug = format!("{base}-{n}");
            n += 1;
        }
        self.slugs.insert(slug.clone());
        slug
    }
}
