use sdf_config::SdfoConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &SdfoConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Extract(args) => commands::extract::handle(&args, config, flags).await,
        Commands::Enrich(args) => commands::enrich::handle(&args, config, flags).await,
        Commands::ExtractAll(args) => commands::extract_all::handle(&args, config, flags).await,
        Commands::Build(args) => commands::build::handle(&args, config, flags),
        Commands::Schema => commands::schema::handle(flags),
    }
}
