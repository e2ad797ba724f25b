use crate::document::Document;
use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::instrument;

impl Document {
    /// Writes the document to `path` atomically.
    ///
    /// The HTML goes to a uniquely named temporary file next to `path`, which
    /// is then renamed over it. On failure the temporary file is removed, so
    /// either the complete document exists at `path` or nothing new does.
    #[instrument(skip_all, fields(path = %path.as_ref().display(), bytes = self.len()))]
    pub fn persist(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let raise = || ErrorKind::Write(path.to_path_buf());
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).or_raise(raise)?;
        let mut tmp = NamedTempFile::new_in(parent).or_raise(raise)?;
        tmp.write_all(self.as_bytes()).or_raise(raise)?;
        tmp.as_file().sync_all().or_raise(raise)?;
        tmp.persist(path).map_err(|e| e.error).or_raise(raise)?;
        tracing::debug!("Viewer document written");
        Ok(path.to_path_buf())
    }
}
