use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Turn a listing of lecture links into a self-contained HTML course viewer.
///
/// Each listing line has the form `(Category)Title:URL`. Videos are grouped
/// into subjects by title, DRM-hosted videos are routed through a proxy, and
/// PDFs are listed next to them.
#[derive(Parser, Debug)]
#[command(name = "lectern")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file (TOML, YAML or JSON), layered over the platform config
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a viewer document from a listing
    Generate(GenerateArgs),
    /// Classify a listing and print the subjects it would produce
    Inspect(InspectArgs),
    /// Print the accepted listing format
    Format,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VariantArg {
    /// Three sections with search, theme toggle and documents
    #[default]
    Open,
    /// Autoplaying, watermarked viewer with inspection deterrents
    Protected,
}

#[derive(ClapArgs, Debug)]
pub struct GenerateArgs {
    /// Listing to convert (a .txt file)
    pub input: PathBuf,

    /// Viewer variant
    #[arg(long, value_enum, default_value_t)]
    pub variant: VariantArg,

    /// Output path; defaults to the input path with an .html extension
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Requester name shown in the protected watermark
    #[arg(long, value_name = "NAME", required_if_eq("variant", "protected"))]
    pub user_name: Option<String>,

    /// Requester ID shown in the protected watermark
    #[arg(long, value_name = "ID", required_if_eq("variant", "protected"))]
    pub user_id: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct InspectArgs {
    /// Listing to classify (a .txt file)
    pub input: PathBuf,

    /// Print the catalog as JSON instead of a tree
    #[arg(long)]
    pub json: bool,
}
