//! Embedded assets for generated documents.
//!
//! The viewer template, its stylesheets and the client runtime scripts are
//! embedded into the binary at compile time using [`rust-embed`](rust_embed),
//! so a generated document never references files outside itself.

use crate::error::{ErrorKind, Result};
use exn::{OptionExt, ResultExt};
use rust_embed::Embed;
use std::borrow::Cow;

#[derive(Embed)]
#[folder = "../../assets/"]
pub(crate) struct Assets;
impl Assets {
    /// Loads an asset as UTF-8 text.
    pub(crate) fn text(name: impl AsRef<str>) -> Result<Cow<'static, str>> {
        let name = name.as_ref();
        let data = Self::get(name).map(|f| f.data).ok_or_raise(|| ErrorKind::AssetNotFound(name.to_string()))?;
        match data {
            Cow::Borrowed(bytes) => {
                std::str::from_utf8(bytes).map(Cow::Borrowed).or_raise(|| ErrorKind::AssetNotFound(name.to_string()))
            },
            Cow::Owned(bytes) => {
                String::from_utf8(bytes).map(Cow::Owned).or_raise(|| ErrorKind::AssetNotFound(name.to_string()))
            },
        }
    }

    /// Loads several text assets and joins them, in order, with newlines.
    pub(crate) fn concat(names: &[&str]) -> Result<String> {
        let mut out = String::new();
        for name in names {
            out.push_str(&Self::text(name)?);
            out.push('\n');
        }
        Ok(out)
    }

    pub(crate) fn exists(name: impl AsRef<str>) -> bool {
        Self::get(name.as_ref()).is_some()
    }
}
