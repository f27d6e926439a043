use schemars::schema_for;
use sdf_core::Node;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `sdfo schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_for!(Vec<Node>), flags.format)
}
