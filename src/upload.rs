use crate::error::{ErrorKind, Result};
use std::path::{Path, PathBuf};

/// Rejects anything that isn't a `.txt` listing, before it is read.
pub(crate) fn check_upload(path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(extension) if extension.eq_ignore_ascii_case("txt") => Ok(()),
        _ => exn::bail!(ErrorKind::UnsupportedUpload(path.to_path_buf())),
    }
}

/// Where a generated viewer goes when no output path was given: next to the
/// listing, or in `directory` when one is configured, named after the
/// listing with an `.html` extension.
pub(crate) fn default_output(input: &Path, directory: Option<&Path>) -> PathBuf {
    match directory {
        Some(directory) => {
            let mut name = input.file_stem().unwrap_or_default().to_os_string();
            name.push(".html");
            directory.join(name)
        },
        None => input.with_extension("html"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("batch.txt")]
    #[case("Batch.TXT")]
    #[case("dir.v2/physics.Txt")]
    fn test_accepts_txt(#[case] path: &str) {
        assert!(check_upload(Path::new(path)).is_ok());
    }

    #[rstest]
    #[case("batch.pdf")]
    #[case("batch.txt.html")]
    #[case("batch")]
    #[case(".txt")]
    fn test_rejects_other_uploads(#[case] path: &str) {
        let err = check_upload(Path::new(path)).unwrap_err();
        assert_eq!(*err, ErrorKind::UnsupportedUpload(PathBuf::from(path)));
    }

    #[rstest]
    #[case("batch.txt", None, "batch.html")]
    #[case("in/Physics.TXT", None, "in/Physics.html")]
    #[case("in/physics.txt", Some("/srv/out"), "/srv/out/physics.html")]
    #[case("in/physics.v2.txt", Some("out"), "out/physics.v2.html")]
    fn test_default_output(#[case] input: &str, #[case] directory: Option<&str>, #[case] expected: &str) {
        assert_eq!(default_output(Path::new(input), directory.map(Path::new)), PathBuf::from(expected));
    }
}
