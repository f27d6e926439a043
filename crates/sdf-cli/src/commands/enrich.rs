use std::path::{Path, PathBuf};

use sdf_config::SdfoConfig;
use sdf_core::Forest;
use sdf_fetch::{ElementPage, PageClient};
use sdf_ontology::{AuxiliaryForests, ExpansionPolicy, Merger};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EnrichArgs;
use crate::output::output;
use crate::store;

#[derive(Debug, Serialize)]
struct EnrichResponse {
    structure: String,
    output: String,
    merged: Option<String>,
    backup: Option<String>,
    fetched: Vec<String>,
    empty: Vec<String>,
    failed: Vec<String>,
    expanded: usize,
    truncated: Vec<String>,
}

/// Auxiliary trees extracted from the fetched pages.
#[derive(Debug, Default)]
pub struct AuxiliaryPages {
    pub forests: AuxiliaryForests,
    pub fetched: Vec<String>,
    /// Pages that downloaded but held no tree.
    pub empty: Vec<String>,
    pub failed: Vec<String>,
}

/// Extract each downloaded page; failed downloads are recorded and skipped.
pub fn collect_auxiliary(pages: Vec<ElementPage>) -> AuxiliaryPages {
    let mut collected = AuxiliaryPages::default();
    for page in pages {
        match page.html {
            Ok(html) => {
                let forest = sdf_parser::extract_page(&html, &page.element);
                if forest.is_empty() {
                    tracing::warn!(element = %page.element, url = %page.url, "no structure found");
                    collected.empty.push(page.element);
                } else {
                    collected.fetched.push(page.element.clone());
                    collected.forests.insert(page.element, forest);
                }
            }
            Err(error) => {
                tracing::warn!(element = %page.element, %error, "skipping page");
                collected.failed.push(page.element);
            }
        }
    }
    collected
}

/// Merger configured from the `[merge]` section.
pub fn merger(config: &SdfoConfig) -> Merger {
    let policy = config
        .merge
        .context_rules
        .clone()
        .map_or_else(ExpansionPolicy::default, ExpansionPolicy::new);
    Merger::new(policy, config.merge.max_depth)
}

/// Files written for a merged forest.
#[derive(Debug, PartialEq, Eq)]
struct MergedFiles {
    output: PathBuf,
    merged: Option<PathBuf>,
    backup: Option<PathBuf>,
}

/// Write the merged forest to `output`, or in place of `structure`.
///
/// In place, the original is first copied to `<stem>_backup.json` and the
/// result is also kept as `<stem>_merged.json`.
fn write_merged(
    structure: &Path,
    output: Option<&Path>,
    forest: &Forest,
) -> anyhow::Result<MergedFiles> {
    if let Some(path) = output {
        store::write_forest(path, forest)?;
        return Ok(MergedFiles {
            output: path.to_path_buf(),
            merged: None,
            backup: None,
        });
    }

    let backup = store::backup(structure)?;
    let merged = store::merged_path(structure);
    store::write_forest(&merged, forest)?;
    store::write_forest(structure, forest)?;
    Ok(MergedFiles {
        output: structure.to_path_buf(),
        merged: Some(merged),
        backup: Some(backup),
    })
}

fn save_pages(dir: &Path, pages: &AuxiliaryPages) -> anyhow::Result<()> {
    for name in &pages.fetched {
        if let Some(forest) = pages.forests.get(name) {
            store::write_forest(&store::element_structure_path(dir, name), forest)?;
        }
    }
    Ok(())
}

/// Handle `sdfo enrich`.
pub async fn handle(
    args: &EnrichArgs,
    config: &SdfoConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let primary = store::read_forest(&args.structure)?;
    let targets = args
        .targets
        .clone()
        .unwrap_or_else(|| config.merge.targets.clone());

    let client = PageClient::new(config.source.clone())?;
    let pages = collect_auxiliary(client.fetch_elements(targets).await);
    if args.save_pages {
        save_pages(&config.output.dir, &pages)?;
    }

    let outcome = merger(config).merge(primary, &pages.forests);

    let files = write_merged(&args.structure, args.output.as_deref(), &outcome.forest)?;

    output(
        &EnrichResponse {
            structure: args.structure.display().to_string(),
            output: files.output.display().to_string(),
            merged: files.merged.map(|p| p.display().to_string()),
            backup: files.backup.map(|p| p.display().to_string()),
            fetched: pages.fetched,
            empty: pages.empty,
            failed: pages.failed,
            expanded: outcome.report.expanded,
            truncated: outcome.report.truncated,
        },
        flags.format,
    )
}
