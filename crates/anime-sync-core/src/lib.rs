pub mod classifier;
pub mod doc;
#[cfg(test)]
mod fixtures;
pub mod grouper;
pub mod sanitize;
pub mod selector;
pub mod sync;
pub mod timeline;

pub use classifier::is_excluded;
pub use doc::build_canonical_doc;
pub use grouper::RelationGrouper;
pub use sanitize::sanitize_description;
pub use selector::select_primary;
pub use sync::{SyncOrchestrator, SyncReport};
pub use timeline::build_timeline;
