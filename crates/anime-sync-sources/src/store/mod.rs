pub mod firestore;

pub use firestore::FirestoreStore;

use crate::error::SourceError;
use anime_sync_models::CanonicalDoc;
use async_trait::async_trait;

/// Keyed document store holding one canonical document per franchise.
/// Writes are merge-upserts: fields present in `doc` overwrite, everything
/// else on an existing document is left untouched.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn exists(&self, id: &str) -> Result<bool, SourceError>;
    async fn upsert(&self, id: &str, doc: &CanonicalDoc) -> Result<(), SourceError>;
}
