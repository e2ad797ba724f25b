//! How the viewer runtime starts.
//!
//! The embedded client runtime (`assets/runtime/core.js`) keeps the viewer
//! state and moves through it as the user navigates:
//!
//! ```text
//! Idle ── select_subject(s) ──▶ SubjectSelected(s)   when s has no videos
//!      └─ select_subject(s) ──▶ Playing(s, 0)        otherwise
//! Playing(s, _) ── select_video(v) ──▶ Playing(s, v)
//! any non-idle state ── select_subject(t) ──▶ as from Idle
//! ```
//!
//! Its first transition is decided here, at generation time, and written into
//! the settings block as a [`BootPlan`].

use lectern_catalog::Catalog;
use serde::Serialize;

/// Which subject (and video) the runtime selects first, and after how long.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BootPlan {
    pub subject: Option<usize>,
    pub video: Option<usize>,
    pub delay_ms: u64,
}
impl BootPlan {
    /// Open viewer: select the first subject after `delay_ms`, playing its
    /// first video if it has one.
    pub fn open(catalog: &Catalog, delay_ms: u64) -> Self {
        match catalog.subjects().next() {
            Some(subject) => Self { subject: Some(0), video: subject.first_video().map(|_| 0), delay_ms },
            None => Self::default(),
        }
    }

    /// Protected viewer: immediately play the first video of the first subject
    /// that has one. Stays idle when the catalog has no videos.
    pub fn protected(catalog: &Catalog) -> Self {
        match catalog.subjects().position(|s| s.first_video().is_some()) {
            Some(index) => Self { subject: Some(index), video: Some(0), delay_ms: 0 },
            None => Self::default(),
        }
    }
}
