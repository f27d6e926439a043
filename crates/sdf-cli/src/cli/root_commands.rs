use std::path::PathBuf;

use clap::{ArgGroup, Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Extract the element tree from one specification page.
    Extract(ExtractArgs),
    /// Graft per-element pages onto the placeholders of a structure file.
    Enrich(EnrichArgs),
    /// Extract every element page linked from the specification index.
    ExtractAll(ExtractAllArgs),
    /// Build the OWL ontology from a structure file.
    Build(BuildArgs),
    /// Print the JSON Schema of structure files.
    Schema,
}

#[derive(Clone, Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "url", "element"])))]
pub struct ExtractArgs {
    /// Saved HTML page.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Page URL.
    #[arg(long)]
    pub url: Option<String>,

    /// Element name, fetched from the configured base URL.
    #[arg(long)]
    pub element: Option<String>,

    /// Keep only roots with this name (defaults to `--element`).
    #[arg(long)]
    pub root: Option<String>,

    /// Structure file to write; prints the tree when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct EnrichArgs {
    /// Structure file holding the primary tree.
    #[arg(short, long)]
    pub structure: PathBuf,

    /// Elements to fetch (defaults to `merge.targets`).
    #[arg(long, value_delimiter = ',')]
    pub targets: Option<Vec<String>>,

    /// Merged structure file. When omitted, `--structure` is backed up to
    /// `<stem>_backup.json`, the result is kept as `<stem>_merged.json`, and
    /// `--structure` is overwritten with it.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write each fetched tree to `structure_<name>.json` in the output directory.
    #[arg(long)]
    pub save_pages: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ExtractAllArgs {
    /// Directory for the `structure_<name>.json` files (defaults to `output.dir`).
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

/// Serialization of the built ontology.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum BuildFormat {
    Turtle,
    Json,
}

#[derive(Clone, Debug, Args)]
pub struct BuildArgs {
    /// Structure file to read.
    #[arg(short, long)]
    pub structure: PathBuf,

    /// Ontology file to write; prints the ontology when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output serialization.
    #[arg(long = "as", value_enum, default_value = "turtle")]
    pub syntax: BuildFormat,
}
