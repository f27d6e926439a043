use sdf_config::SdfoConfig;
use sdf_ontology::{GraphSummary, SchemaGraph, analyze, to_turtle};
use serde::Serialize;

use crate::cli::root_commands::{BuildArgs, BuildFormat};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::{output, render};
use crate::store;

#[derive(Debug, Serialize)]
struct BuildResponse {
    structure: String,
    output: String,
    syntax: &'static str,
    summary: GraphSummary,
}

/// Serialize the graph as Turtle or as JSON in the requested layout.
pub fn render_ontology(
    graph: &SchemaGraph,
    syntax: BuildFormat,
    base_iri: &str,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match syntax {
        BuildFormat::Turtle => Ok(to_turtle(graph, base_iri)),
        BuildFormat::Json => render(graph, format),
    }
}

/// Handle `sdfo build`.
pub fn handle(args: &BuildArgs, config: &SdfoConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let forest = store::read_forest(&args.structure)?;
    let graph = SchemaGraph::build(&forest);
    let rendered = render_ontology(&graph, args.syntax, &config.ontology.base_iri, flags.format)?;

    let Some(path) = &args.output else {
        println!("{rendered}");
        return Ok(());
    };
    store::write_text(path, &rendered)?;
    output(
        &BuildResponse {
            structure: args.structure.display().to_string(),
            output: path.display().to_string(),
            syntax: match args.syntax {
                BuildFormat::Turtle => "turtle",
                BuildFormat::Json => "json",
            },
            summary: analyze(&graph),
        },
        flags.format,
    )
}
