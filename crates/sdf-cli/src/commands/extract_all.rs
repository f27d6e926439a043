use std::path::Path;

use anyhow::Context;
use sdf_config::SdfoConfig;
use sdf_fetch::{ElementPage, PageClient};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExtractAllArgs;
use crate::output::output;
use crate::store;

#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExtractAllResponse {
    pub dir: String,
    pub discovered: usize,
    pub saved: Vec<String>,
    pub empty: Vec<String>,
    pub failed: Vec<String>,
}

/// Extract each page and write the non-empty trees to `dir`.
pub fn save_element_pages(
    dir: &Path,
    pages: Vec<ElementPage>,
) -> anyhow::Result<ExtractAllResponse> {
    let mut response = ExtractAllResponse {
        dir: dir.display().to_string(),
        discovered: pages.len(),
        ..ExtractAllResponse::default()
    };

    for page in pages {
        let html = match page.html {
            Ok(html) => html,
            Err(error) => {
                tracing::warn!(element = %page.element, %error, "failed to fetch page");
                response.failed.push(page.element);
                continue;
            }
        };
        let forest = sdf_parser::extract_page(&html, &page.element);
        if forest.is_empty() {
            tracing::info!(element = %page.element, "no structure on page");
            response.empty.push(page.element);
            continue;
        }
        let path = store::element_structure_path(dir, &page.element);
        store::write_forest(&path, &forest)
            .with_context(|| format!("failed to save structure for {}", page.element))?;
        response.saved.push(page.element);
    }

    Ok(response)
}

/// Handle `sdfo extract-all`.
pub async fn handle(
    args: &ExtractAllArgs,
    config: &SdfoConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let dir = args.dir.clone().unwrap_or_else(|| config.output.dir.clone());
    let client = PageClient::new(config.source.clone())?;

    let index = client
        .fetch_index()
        .await
        .context("failed to fetch the specification index")?;
    let names = sdf_parser::discover_element_names(&sdf_parser::tokenize(&index));
    tracing::info!(count = names.len(), "element pages discovered");

    let pages = client.fetch_elements(names).await;
    let response = save_element_pages(&dir, pages)?;
    output(&response, flags.format)
}
