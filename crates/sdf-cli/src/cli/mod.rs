use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `sdfo` binary.
#[derive(Debug, Parser)]
#[command(
    name = "sdfo",
    version,
    about = "Extract SDFormat specification trees and build an OWL ontology"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra config file, layered above the discovered ones
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::root_commands::{BuildFormat, ExtractArgs};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["sdfo", "--format", "raw", "--verbose", "schema"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Schema));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["sdfo", "schema", "--quiet", "--config", "sdfo.toml"])
            .expect("cli should parse");

        assert!(cli.quiet);
        assert_eq!(cli.global_flags().config, Some(PathBuf::from("sdfo.toml")));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["sdfo", "--format", "table", "schema"]).is_err());
    }

    #[test]
    fn extract_sources_are_exclusive() {
        let both = Cli::try_parse_from([
            "sdfo", "extract", "--input", "model.html", "--element", "model",
        ]);
        assert!(both.is_err());
        let none = Cli::try_parse_from(["sdfo", "extract"]);
        assert!(none.is_err());
    }

    #[test]
    fn extract_from_file_with_root_filter() {
        let cli = Cli::try_parse_from([
            "sdfo", "extract", "--input", "model.html", "--root", "model", "-o", "s.json",
        ])
        .expect("cli should parse");
        let Commands::Extract(ExtractArgs {
            input, root, output, ..
        }) = cli.command
        else {
            panic!("expected extract");
        };
        assert_eq!(input, Some(PathBuf::from("model.html")));
        assert_eq!(root.as_deref(), Some("model"));
        assert_eq!(output, Some(PathBuf::from("s.json")));
    }

    #[test]
    fn enrich_targets_are_comma_separated() {
        let cli = Cli::try_parse_from([
            "sdfo",
            "enrich",
            "--structure",
            "structure.json",
            "--targets",
            "link,joint",
        ])
        .expect("cli should parse");
        let Commands::Enrich(args) = cli.command else {
            panic!("expected enrich");
        };
        assert_eq!(args.targets, Some(vec!["link".to_string(), "joint".to_string()]));
        assert!(!args.save_pages);
    }

    #[test]
    fn build_defaults_to_turtle() {
        let cli = Cli::try_parse_from(["sdfo", "build", "--structure", "structure.json"])
            .expect("cli should parse");
        let Commands::Build(args) = cli.command else {
            panic!("expected build");
        };
        assert_eq!(args.syntax, BuildFormat::Turtle);
        assert!(args.output.is_none());

        let cli = Cli::try_parse_from(["sdfo", "build", "-s", "s.json", "--as", "json"])
            .expect("cli should parse");
        let Commands::Build(args) = cli.command else {
            panic!("expected build");
        };
        assert_eq!(args.syntax, BuildFormat::Json);
    }

    #[test]
    fn extract_all_dir_is_optional() {
        let cli = Cli::try_parse_from(["sdfo", "extract-all"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::ExtractAll(ref a) if a.dir.is_none()));
    }
}
