use regex::Regex;
use std::sync::LazyLock;

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

/// Subject assigned to entries whose titles reduce to nothing.
pub const DEFAULT_SUBJECT: &str = "General";

// `(<category>)<title>:<url>`. The title group is greedy so that the URL begins
// at the last `:http(s)://` boundary on the line.
regex!(LINE_REGEX, r"^\(([^)]+)\)(.+):(https?://.+)$");
// Leading lecture index: "Lect-1 ", "Lect.-1 ", "Lecture 5: ", "Lesson12 ", "LECT ".
regex!(LECTURE_MARKER_REGEX, r"^(?i:lecture|lect|lesson)(?:[\s.\-_#:]*\d+)?(?:[\s.\-_:]+|$)");
regex!(TRAILING_QUALIFIER_REGEX, r"\s*\([^()]*\)\s*$");
regex!(WHITESPACE_REGEX, r"\s+");
