use std::path::PathBuf;

use anyhow::Context;
use sdf_config::SdfoConfig;
use sdf_core::Forest;
use sdf_fetch::PageClient;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExtractArgs;
use crate::output::output;
use crate::store;

#[derive(Debug, Serialize)]
struct ExtractResponse {
    source: String,
    output: String,
    roots: usize,
    nodes: usize,
}

/// Where the page comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PageSource {
    File(PathBuf),
    Url(String),
    Element(String),
}

impl PageSource {
    fn from_args(args: &ExtractArgs) -> anyhow::Result<Self> {
        match (&args.input, &args.url, &args.element) {
            (Some(path), None, None) => Ok(Self::File(path.clone())),
            (None, Some(url), None) => Ok(Self::Url(url.clone())),
            (None, None, Some(element)) => Ok(Self::Element(element.clone())),
            _ => anyhow::bail!("exactly one of --input, --url or --element is required"),
        }
    }

    fn describe(&self, config: &SdfoConfig) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Url(url) => url.clone(),
            Self::Element(element) => config.source.element_url(element),
        }
    }

    async fn load(&self, config: &SdfoConfig) -> anyhow::Result<String> {
        match self {
            Self::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
            Self::Url(url) => Ok(PageClient::new(config.source.clone())?.fetch(url).await?),
            Self::Element(element) => Ok(PageClient::new(config.source.clone())?
                .fetch_element(element)
                .await?),
        }
    }
}

/// Extract a page, keeping only roots named `root` when given.
pub fn extract_forest(html: &str, root: Option<&str>) -> Forest {
    root.map_or_else(
        || sdf_parser::extract_html(html),
        |element| sdf_parser::extract_page(html, element),
    )
}

/// Handle `sdfo extract`.
pub async fn handle(
    args: &ExtractArgs,
    config: &SdfoConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let source = PageSource::from_args(args)?;
    let html = source.load(config).await?;

    let root = args.root.as_deref().or(args.element.as_deref());
    let forest = extract_forest(&html, root);
    if forest.is_empty() {
        tracing::warn!(source = %source.describe(config), "no element tree found on page");
    }

    let Some(path) = &args.output else {
        return output(&forest, flags.format);
    };
    store::write_forest(path, &forest)?;
    output(
        &ExtractResponse {
            source: source.describe(config),
            output: path.display().to_string(),
            roots: forest.len(),
            nodes: sdf_core::node::forest_size(&forest),
        },
        flags.format,
    )
}
