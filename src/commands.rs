use crate::cli::{GenerateArgs, InspectArgs, VariantArg};
use crate::error::{ErrorKind, Result};
use crate::upload::{check_upload, default_output};
use exn::ResultExt;
use lectern_catalog::{Catalog, SourceRewriter, Summary};
use lectern_config::Config;
use lectern_parse::read_listing;
use lectern_render::{Generator, Requester, Variant};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::instrument;

pub(crate) const FORMAT_HELP: &str = "\
Send a .txt listing with one entry per line:

  (Category)Title:URL

Example:
  (Physics)Lect.-1 Introduction:https://example.com/video1.mp4
  (Physics)Notes-1 Formulas:https://example.com/notes.pdf

Links ending in .pdf become documents, everything else is a video. Videos and
documents are grouped into subjects named after their titles, without the
leading lecture number or trailing qualifiers such as \"(HD)\". Lines that
don't fit the format are skipped.
";

/// Raises an error from one of the library crates into a CLI error kind,
/// keeping its message for the user.
fn describe<T, E>(result: std::result::Result<T, exn::Exn<E>>, kind: impl FnOnce(String) -> ErrorKind) -> Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.or_else(|err| {
        let reason = (*err).to_string();
        Err(err).or_raise(|| kind(reason))
    })
}

pub(crate) fn load_config(path: Option<&Path>) -> Result<Config> {
    describe(Config::load(path), ErrorKind::Config)
}

/// Validates, reads and classifies a listing into a catalog.
fn load_catalog(input: &Path, config: &Config) -> Result<Catalog> {
    check_upload(input)?;
    let listing = describe(read_listing(input), ErrorKind::Input)?;
    if listing.is_empty() {
        tracing::warn!(skipped = listing.skipped, "Listing has no usable entries");
    }
    let rewriter = SourceRewriter::new(config.proxy.origin.as_deref(), &config.proxy.marker);
    Ok(Catalog::from_listing(listing, &rewriter))
}

fn variant(args: &GenerateArgs) -> Result<Variant> {
    match args.variant {
        VariantArg::Open => Ok(Variant::Open),
        VariantArg::Protected => match (&args.user_name, &args.user_id) {
            (Some(name), Some(id)) => Ok(Variant::Protected(Requester::new(name, id))),
            _ => exn::bail!(ErrorKind::Input("a protected viewer needs --user-name and --user-id".to_string())),
        },
    }
}

/// What a successful `generate` reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Report {
    pub output: PathBuf,
    pub summary: Summary,
}
impl Report {
    pub(crate) fn write_to(&self, w: &mut impl Write) -> std::io::Result<()> {
        let summary = &self.summary;
        writeln!(w, "Viewer written to {}", self.output.display())?;
        writeln!(w, "  subjects:  {}", summary.subjects)?;
        writeln!(w, "  videos:    {} ({} protected)", summary.videos, summary.protected_videos)?;
        writeln!(w, "  pdfs:      {}", summary.documents)?;
        writeln!(w, "  skipped:   {}", summary.skipped)
    }
}

#[instrument(skip_all, fields(input = %args.input.display(), variant = ?args.variant))]
pub(crate) fn generate(args: &GenerateArgs, config: &Config) -> Result<Report> {
    let variant = variant(args)?;
    let catalog = load_catalog(&args.input, config)?;
    let generator = describe(Generator::from_config(config), ErrorKind::Render)?;
    let document = describe(generator.generate(&catalog, &variant), ErrorKind::Render)?;
    let output =
        args.output.clone().unwrap_or_else(|| default_output(&args.input, config.output.directory.as_deref()));
    document.persist(&output).or_raise(|| ErrorKind::Write(output.clone()))?;

    let summary = catalog.summary();
    tracing::info!(
        output = %output.display(),
        subjects = summary.subjects,
        videos = summary.videos,
        documents = summary.documents,
        protected = summary.protected_videos,
        skipped = summary.skipped,
        "Viewer generated"
    );
    Ok(Report { output, summary })
}

#[instrument(skip_all, fields(input = %args.input.display()))]
pub(crate) fn inspect(args: &InspectArgs, config: &Config, w: &mut impl Write) -> Result<()> {
    let catalog = load_catalog(&args.input, config)?;
    if args.json {
        serde_json::to_writer_pretty(&mut *w, &catalog).or_raise(|| ErrorKind::Output)?;
        writeln!(w).or_raise(|| ErrorKind::Output)?;
    } else {
        write_tree(&catalog, w).or_raise(|| ErrorKind::Output)?;
    }
    Ok(())
}

fn write_tree(catalog: &Catalog, w: &mut impl Write) -> std::io::Result<()> {
    for subject in catalog.subjects() {
        writeln!(w, "{} ({} videos, {} pdfs)", subject.name, subject.videos.len(), subject.pdfs.len())?;
        for video in &subject.videos {
            let marker = if video.is_protected_source { " [protected]" } else { "" };
            writeln!(w, "  video  {}{marker}", video.title)?;
        }
        for pdf in &subject.pdfs {
            writeln!(w, "  pdf    {}", pdf.name)?;
        }
    }
    let summary = catalog.summary();
    writeln!(
        w,
        "{} subjects, {} videos, {} pdfs, {} skipped lines",
        summary.subjects, summary.videos, summary.documents, summary.skipped
    )
}
