use clap::{ArgAction, Parser, Subcommand};
use commands::sync;
use std::path::PathBuf;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "anisync")]
#[command(about = "Sync the AniList catalog into the franchise document store")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bulk sync of the most popular catalog records
    #[command(long_about = "Fetch the most popular catalog records, group them into franchises, and write one canonical document per franchise. Documents that already exist are skipped unless --force (or FORCE_UPDATE=true) is set.")]
    Backfill {
        /// Maximum records to fetch (defaults to BACKFILL_LIMIT, 500)
        #[arg(long)]
        limit: Option<u32>,

        /// Overwrite documents that already exist
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
    /// Incremental sync of recently updated records
    #[command(long_about = "Fetch the most recently updated catalog records and overwrite their franchise documents unconditionally.")]
    Update {
        /// Maximum records to fetch (defaults to UPDATE_LIMIT, 200)
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Targeted sync driven by a seed-title list
    #[command(long_about = "Resolve each seed title to a catalog id via best-effort search, fetch the resolved records, and sync them with backfill semantics. Unmatched titles are dropped silently.")]
    Import {
        /// Path to a JSON array of seed titles (defaults to SEED_FILE)
        #[arg(long)]
        seed_file: Option<PathBuf>,

        /// Overwrite documents that already exist
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    match cli.command {
        Commands::Backfill { limit, force } => sync::run_backfill(limit, force).await,
        Commands::Update { limit } => sync::run_update(limit).await,
        Commands::Import { seed_file, force } => sync::run_import(seed_file, force).await,
    }
}
