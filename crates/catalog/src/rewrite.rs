//! Playback URL rewriting for DRM-hosted videos.
//!
//! Videos hosted behind DRM can't be played directly, so their URLs are
//! handed to an external proxy which resolves and streams them:
//!
//! ```text
//! https://cdn.example.com/classplus/v1.mp4
//!   → <origin>/?url=https%3A%2F%2Fcdn.example.com%2Fclassplus%2Fv1.mp4
//! ```
//!
//! A source is DRM-hosted when its lowercased URL contains the marker token.
//! Only the URL is constructed here; the proxy's behavior is not checked.

use std::borrow::Cow;

/// Marker token identifying DRM-hosted sources.
pub const DEFAULT_MARKER: &str = "classplus";

/// The effective playback source of a video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source<'a> {
    pub src: Cow<'a, str>,
    /// The original URL carries the marker, regardless of whether it was rewritten
    pub protected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRewriter {
    origin: Option<String>,
    marker: String,
}
impl Default for SourceRewriter {
    /// Detects the default marker, but rewrites nothing until an origin is set.
    fn default() -> Self {
        Self::new(None::<String>, DEFAULT_MARKER)
    }
}
impl SourceRewriter {
    /// `origin` is expected to be an already-validated `http(s)` origin; any
    /// trailing slashes are dropped. The marker is matched case-insensitively.
    pub fn new(origin: Option<impl Into<String>>, marker: impl AsRef<str>) -> Self {
        let origin = origin.map(|o| o.into().trim().trim_end_matches('/').to_string()).filter(|o| !o.is_empty());
        Self { origin, marker: marker.as_ref().trim().to_lowercase() }
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Whether the URL points at a DRM host. An empty marker matches nothing.
    pub fn is_protected(&self, url: &str) -> bool {
        !self.marker.is_empty() && url.to_lowercase().contains(&self.marker)
    }

    /// The proxy URL for `url`, if a proxy origin is configured. Does not check
    /// the marker.
    pub fn proxy_url(&self, url: &str) -> Option<String> {
        self.origin.as_ref().map(|origin| format!("{origin}/?url={}", urlencoding::encode(url)))
    }

    /// Resolves the playback source for a video URL.
    pub fn rewrite<'a>(&self, url: &'a str) -> Source<'a> {
        if !self.is_protected(url) {
            return Source { src: Cow::Borrowed(url), protected: false };
        }
        match self.proxy_url(url) {
            Some(proxied) => {
                tracing::debug!(original = url, proxied = %proxied, "Rewriting protected source through proxy");
                Source { src: Cow::Owned(proxied), protected: true }
            },
            None => Source { src: Cow::Borrowed(url), protected: true },
        }
    }
}
