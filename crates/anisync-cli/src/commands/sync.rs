use anime_sync_config::{load_seed_titles, CatalogSettings, StoreSettings, SyncSettings};
use anime_sync_core::{SyncOrchestrator, SyncReport};
use anime_sync_sources::{AniListClient, FirestoreStore};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::env;
use std::path::PathBuf;

pub async fn run_backfill(limit: Option<u32>, force: bool) -> Result<()> {
    tracing::debug!("backfill command started");

    let settings = SyncSettings::from_env()?;
    let sync = build_orchestrator(&settings)?;

    let limit = limit.unwrap_or(settings.backfill_limit);
    let force = force || settings.force_update;
    let report = sync
        .backfill(limit, force)
        .await
        .map_err(|e| eyre!("backfill failed: {}", e))?;

    print_report("Backfill", &report);
    Ok(())
}

pub async fn run_update(limit: Option<u32>) -> Result<()> {
    tracing::debug!("update command started");

    let settings = SyncSettings::from_env()?;
    let sync = build_orchestrator(&settings)?;

    let limit = limit.unwrap_or(settings.update_limit);
    let report = sync
        .update(limit)
        .await
        .map_err(|e| eyre!("update failed: {}", e))?;

    print_report("Update", &report);
    Ok(())
}

pub async fn run_import(seed_file: Option<PathBuf>, force: bool) -> Result<()> {
    tracing::debug!("import command started");

    let settings = SyncSettings::from_env()?;

    // Seed list is validated before any network work happens.
    let seed_file = seed_file
        .or_else(|| env::var("SEED_FILE").ok().map(PathBuf::from))
        .ok_or_else(|| eyre!("no seed file: pass --seed-file or set SEED_FILE"))?;
    let titles = load_seed_titles(&seed_file)?;

    let sync = build_orchestrator(&settings)?;
    let force = force || settings.force_update;
    let report = sync
        .import(&titles, force)
        .await
        .map_err(|e| eyre!("import failed: {}", e))?;

    print_report("Import", &report);
    Ok(())
}

fn build_orchestrator(
    settings: &SyncSettings,
) -> Result<SyncOrchestrator<AniListClient, FirestoreStore>> {
    let catalog_settings = CatalogSettings::from_env();
    let store_settings = StoreSettings::from_env()?;

    let catalog = AniListClient::new(catalog_settings.endpoint, settings.per_page)
        .map_err(|e| eyre!("failed to build catalog client: {}", e))?;
    let store = FirestoreStore::new(
        store_settings.project_id,
        store_settings.collection,
        store_settings.access_token,
    )
    .map_err(|e| eyre!("failed to build store client: {}", e))?;

    Ok(SyncOrchestrator::new(catalog, store))
}

fn print_report(mode: &str, report: &SyncReport) {
    println!(
        "{} complete: {} clusters processed, {} written, {} skipped in {:.1?}",
        mode, report.processed, report.written, report.skipped, report.duration
    );
}
