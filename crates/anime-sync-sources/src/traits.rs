use crate::error::SourceError;
use anime_sync_models::MediaRecord;
use async_trait::async_trait;

/// Sort orders the catalog accepts for bulk page fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSort {
    /// Most popular first; used by backfill.
    Popularity,
    /// Most recently updated first; used by incremental update.
    UpdatedAt,
}

impl PageSort {
    pub fn wire_value(&self) -> &'static str {
        match self {
            PageSort::Popularity => "POPULARITY_DESC",
            PageSort::UpdatedAt => "UPDATED_AT_DESC",
        }
    }
}

/// Read side of the external catalog. The orchestrator is generic over this
/// so tests can drive it with canned records.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch up to `limit` records page by page in the given order. The
    /// result is truncated to exactly `limit` even when the final page
    /// carried more.
    async fn fetch_sorted(&self, sort: PageSort, limit: u32)
        -> Result<Vec<MediaRecord>, SourceError>;

    /// Fetch records by id, in chunked requests, concatenating results in
    /// chunk order. Ids are not deduplicated here.
    async fn fetch_by_ids(&self, ids: &[i64]) -> Result<Vec<MediaRecord>, SourceError>;

    /// Best-effort single-result title search; None when nothing matched.
    async fn search_id(&self, title: &str) -> Result<Option<i64>, SourceError>;
}
