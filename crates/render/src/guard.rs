//! Deterrents used by the protected viewer.
//!
//! None of this is access control. Anyone with browser tooling can read the
//! document, and the video URLs are in it. The watermark and key guard only
//! make casual recording and inspection less convenient.

use lectern_config::WatermarkConfig;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Who the document was generated for. Shown in the watermark only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requester {
    pub name: String,
    pub id: String,
}
impl Requester {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self { name: name.into(), id: id.into() }
    }
}
impl Display for Requester {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "User: {} | ID: {}", self.name, self.id)
    }
}

/// Watermark settings handed to the runtime, which picks a new random
/// position within `min_percent..=max_percent` on each axis every
/// `interval_ms` while a video is loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Watermark {
    pub label: String,
    pub interval_ms: u64,
    pub opacity: f32,
    pub min_percent: u8,
    pub max_percent: u8,
}
impl Watermark {
    pub fn new(requester: &Requester, config: &WatermarkConfig) -> Self {
        Self {
            label: requester.to_string(),
            interval_ms: config.interval_ms,
            opacity: config.opacity,
            min_percent: config.min_percent,
            max_percent: config.max_percent,
        }
    }
}

/// A key combination, matched against `KeyboardEvent.code` and the exact set
/// of held modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KeyCombo {
    pub code: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}
impl KeyCombo {
    const fn key(code: &'static str) -> Self {
        Self { code, ctrl: false, shift: false, alt: false, meta: false }
    }

    const fn ctrl(code: &'static str) -> Self {
        Self { ctrl: true, ..Self::key(code) }
    }

    const fn ctrl_shift(code: &'static str) -> Self {
        Self { ctrl: true, shift: true, ..Self::key(code) }
    }

    const fn meta(code: &'static str) -> Self {
        Self { meta: true, ..Self::key(code) }
    }

    const fn meta_alt(code: &'static str) -> Self {
        Self { meta: true, alt: true, ..Self::key(code) }
    }
}

/// Developer tools, view-source and save-page shortcuts on Windows, Linux
/// and macOS.
pub const GUARDED_KEYS: &[KeyCombo] = &[
    KeyCombo::key("F12"),
    KeyCombo::ctrl_shift("KeyI"),
    KeyCombo::ctrl_shift("KeyJ"),
    KeyCombo::ctrl_shift("KeyC"),
    KeyCombo::ctrl("KeyU"),
    KeyCombo::ctrl("KeyS"),
    KeyCombo::meta_alt("KeyI"),
    KeyCombo::meta_alt("KeyJ"),
    KeyCombo::meta_alt("KeyC"),
    KeyCombo::meta_alt("KeyU"),
    KeyCombo::meta("KeyU"),
    KeyCombo::meta("KeyS"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyGuard {
    pub context_menu: bool,
    pub keys: Vec<KeyCombo>,
}
impl Default for KeyGuard {
    fn default() -> Self {
        Self { context_menu: true, keys: GUARDED_KEYS.to_vec() }
    }
}
