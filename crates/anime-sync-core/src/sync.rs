use crate::doc::build_canonical_doc;
use crate::grouper::RelationGrouper;
use crate::selector::select_primary;
use crate::timeline::build_timeline;
use anime_sync_models::MediaRecord;
use anime_sync_sources::{CatalogSource, DocumentStore, PageSort};
use anyhow::Result;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Fixed delay between import-mode search calls, honoring the catalog's
/// rate limit proactively instead of waiting to be throttled.
const SEARCH_PACING: Duration = Duration::from_millis(700);

#[derive(Debug, Clone, Copy)]
enum WritePolicy {
    /// Backfill/import: leave existing documents alone unless forced.
    SkipExisting { force: bool },
    /// Update: overwrite every cluster regardless of store state.
    Always,
}

#[derive(Debug)]
pub struct SyncReport {
    /// Clusters that came out of grouping.
    pub processed: usize,
    pub written: usize,
    pub skipped: usize,
    pub duration: Duration,
}

/// Drives fetch → group → select → write for the three run modes. All
/// catalog fetches and store writes are strictly sequential; both ends are
/// rate-limited and parallel requests would trip them.
pub struct SyncOrchestrator<C, S> {
    catalog: C,
    store: S,
    search_pacing: Duration,
}

impl<C: CatalogSource, S: DocumentStore> SyncOrchestrator<C, S> {
    pub fn new(catalog: C, store: S) -> Self {
        Self {
            catalog,
            store,
            search_pacing: SEARCH_PACING,
        }
    }

    pub fn with_search_pacing(mut self, pacing: Duration) -> Self {
        self.search_pacing = pacing;
        self
    }

    /// Bulk sync of the most popular records, skip-if-exists unless forced.
    #[instrument(skip(self))]
    pub async fn backfill(&self, limit: u32, force: bool) -> Result<SyncReport> {
        let records = self.catalog.fetch_sorted(PageSort::Popularity, limit).await?;
        info!(fetched = records.len(), "backfill fetch complete");
        self.sync_records(records, WritePolicy::SkipExisting { force })
            .await
    }

    /// Incremental sync of recently-updated records, always overwriting.
    #[instrument(skip(self))]
    pub async fn update(&self, limit: u32) -> Result<SyncReport> {
        let records = self.catalog.fetch_sorted(PageSort::UpdatedAt, limit).await?;
        info!(fetched = records.len(), "update fetch complete");
        self.sync_records(records, WritePolicy::Always).await
    }

    /// Seed-list import: resolve titles to ids one search at a time,
    /// silently dropping misses, then sync the deduplicated id set with
    /// backfill semantics.
    #[instrument(skip(self, titles), fields(titles = titles.len()))]
    pub async fn import(&self, titles: &[String], force: bool) -> Result<SyncReport> {
        let mut ids = BTreeSet::new();
        for (i, title) in titles.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.search_pacing).await;
            }
            match self.catalog.search_id(title).await? {
                Some(id) => {
                    ids.insert(id);
                }
                None => debug!(%title, "no catalog match for seed title"),
            }
        }

        let ids: Vec<i64> = ids.into_iter().collect();
        info!(resolved = ids.len(), "import seed resolution complete");
        let records = self.catalog.fetch_by_ids(&ids).await?;
        self.sync_records(records, WritePolicy::SkipExisting { force })
            .await
    }

    async fn sync_records(
        &self,
        records: Vec<MediaRecord>,
        policy: WritePolicy,
    ) -> Result<SyncReport> {
        let start = Instant::now();
        let mut grouper = RelationGrouper::new();
        for record in records {
            grouper.insert(record);
        }
        let clusters = grouper.clusters();

        let mut written = 0;
        let mut skipped = 0;
        let processed = clusters.len();

        for cluster in &clusters {
            let Some(primary) = select_primary(cluster) else {
                continue;
            };
            let doc_id = primary.id.to_string();

            if let WritePolicy::SkipExisting { force: false } = policy {
                if self.store.exists(&doc_id).await? {
                    debug!(id = %doc_id, "document exists, skipping");
                    skipped += 1;
                    continue;
                }
            }

            let doc = build_canonical_doc(primary, build_timeline(cluster));
            self.store.upsert(&doc_id, &doc).await?;
            written += 1;
        }

        let report = SyncReport {
            processed,
            written,
            skipped,
            duration: start.elapsed(),
        };
        info!(
            processed = report.processed,
            written = report.written,
            skipped = report.skipped,
            "sync pass complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{media, related};
    use anime_sync_models::{CanonicalDoc, FuzzyDate, RelationKind};
    use anime_sync_sources::SourceError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeCatalog {
        records: Vec<MediaRecord>,
        search: HashMap<String, i64>,
        id_fetches: Mutex<Vec<Vec<i64>>>,
    }

    #[async_trait]
    impl CatalogSource for FakeCatalog {
        async fn fetch_sorted(
            &self,
            _sort: PageSort,
            limit: u32,
        ) -> Result<Vec<MediaRecord>, SourceError> {
            Ok(self.records.iter().take(limit as usize).cloned().collect())
        }

        async fn fetch_by_ids(&self, ids: &[i64]) -> Result<Vec<MediaRecord>, SourceError> {
            self.id_fetches.lock().unwrap().push(ids.to_vec());
            Ok(self
                .records
                .iter()
                .filter(|r| ids.contains(&r.id))
                .cloned()
                .collect())
        }

        async fn search_id(&self, title: &str) -> Result<Option<i64>, SourceError> {
            Ok(self.search.get(title).copied())
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        docs: Mutex<HashMap<String, CanonicalDoc>>,
        writes: Mutex<u32>,
    }

    #[async_trait]
    impl DocumentStore for MemoryStore {
        async fn exists(&self, id: &str) -> Result<bool, SourceError> {
            Ok(self.docs.lock().unwrap().contains_key(id))
        }

        async fn upsert(&self, id: &str, doc: &CanonicalDoc) -> Result<(), SourceError> {
            *self.writes.lock().unwrap() += 1;
            self.docs
                .lock()
                .unwrap()
                .insert(id.to_string(), doc.clone());
            Ok(())
        }
    }

    fn franchise_records() -> Vec<MediaRecord> {
        let mut a = media(1, "Series");
        a.start_date = FuzzyDate::new(Some(2009), Some(4), Some(1));
        related(&mut a, RelationKind::Sequel, media(2, "Series II"));
        let b = media(2, "Series II");
        let standalone = media(10, "Standalone");
        vec![a, b, standalone]
    }

    fn orchestrator(
        catalog: FakeCatalog,
    ) -> SyncOrchestrator<FakeCatalog, MemoryStore> {
        SyncOrchestrator::new(catalog, MemoryStore::default())
            .with_search_pacing(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_backfill_groups_and_writes_one_doc_per_cluster() {
        let sync = orchestrator(FakeCatalog {
            records: franchise_records(),
            ..Default::default()
        });

        let report = sync.backfill(50, false).await.unwrap();
        assert_eq!(report.processed, 2);
        assert_eq!(report.written, 2);
        assert_eq!(report.skipped, 0);

        let docs = sync.store.docs.lock().unwrap();
        let franchise = docs.get("1").unwrap();
        assert_eq!(franchise.timeline.len(), 2);
        assert!(docs.contains_key("10"));
    }

    #[tokio::test]
    async fn test_backfill_is_idempotent_without_force() {
        let sync = orchestrator(FakeCatalog {
            records: franchise_records(),
            ..Default::default()
        });

        sync.backfill(50, false).await.unwrap();
        let before = sync.store.docs.lock().unwrap().clone();

        let report = sync.backfill(50, false).await.unwrap();
        assert_eq!(report.written, 0);
        assert_eq!(report.skipped, 2);
        assert_eq!(*sync.store.writes.lock().unwrap(), 2);
        assert_eq!(*sync.store.docs.lock().unwrap(), before);
    }

    #[tokio::test]
    async fn test_backfill_force_rewrites_existing() {
        let sync = orchestrator(FakeCatalog {
            records: franchise_records(),
            ..Default::default()
        });

        sync.backfill(50, false).await.unwrap();
        let report = sync.backfill(50, true).await.unwrap();
        assert_eq!(report.written, 2);
        assert_eq!(report.skipped, 0);
    }

    #[tokio::test]
    async fn test_update_always_overwrites() {
        let sync = orchestrator(FakeCatalog {
            records: franchise_records(),
            ..Default::default()
        });

        sync.update(50).await.unwrap();
        let report = sync.update(50).await.unwrap();
        assert_eq!(report.written, 2);
        assert_eq!(report.skipped, 0);
    }

    #[tokio::test]
    async fn test_excluded_records_produce_no_documents() {
        let mut adult = media(1, "X");
        adult.is_adult = true;
        let sync = orchestrator(FakeCatalog {
            records: vec![adult],
            ..Default::default()
        });

        let report = sync.backfill(50, false).await.unwrap();
        assert_eq!(report.processed, 0);
        assert_eq!(report.written, 0);
        assert!(sync.store.docs.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_import_dedups_resolved_ids_and_drops_misses() {
        let search = HashMap::from([
            ("Series".to_string(), 1_i64),
            ("Series II".to_string(), 2_i64),
        ]);
        let sync = orchestrator(FakeCatalog {
            records: franchise_records(),
            search,
            ..Default::default()
        });

        let titles = vec![
            "Series".to_string(),
            "Series II".to_string(),
            "Series".to_string(),
            "No Such Show".to_string(),
        ];
        let report = sync.import(&titles, false).await.unwrap();

        // Duplicate and unmatched titles collapse to one fetch of [1, 2];
        // both records belong to one franchise, so one document lands.
        let fetches = sync.catalog.id_fetches.lock().unwrap();
        assert_eq!(*fetches, vec![vec![1, 2]]);
        assert_eq!(report.processed, 1);
        assert_eq!(report.written, 1);
    }
}
