pub mod anilist;
pub mod error;
pub mod retry;
pub mod store;
pub mod traits;

pub use anilist::AniListClient;
pub use error::SourceError;
pub use retry::RetryPolicy;
pub use store::{DocumentStore, FirestoreStore};
pub use traits::{CatalogSource, PageSort};
