use std::fmt::{Display, Formatter, Result as FmtResult};
use url::Url;

/// What an entry links to. Every entry is exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Anything that isn't a PDF is assumed to be streamable.
    Video,
    /// A PDF document, opened outside the player.
    Document,
}
impl ContentKind {
    /// Decides the kind from the URL alone: documents are URLs whose path ends
    /// in `.pdf`, in any letter case. Query strings and fragments are ignored.
    pub fn of_url(url: &str) -> Self {
        let is_pdf = match Url::parse(url) {
            Ok(parsed) => ends_with_pdf(parsed.path()),
            // Unparseable (spaces, bad hosts) but still matched the grammar.
            Err(_) => ends_with_pdf(url.split(['?', '#']).next().unwrap_or(url)),
        };
        if is_pdf { Self::Document } else { Self::Video }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, Self::Video)
    }

    pub fn is_document(&self) -> bool {
        matches!(self, Self::Document)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Document => "document",
        }
    }
}

fn ends_with_pdf(path: &str) -> bool {
    path.len() >= 4 && path.as_bytes()[path.len() - 4..].eq_ignore_ascii_case(b".pdf")
}

impl Display for ContentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
