pub mod date;
pub mod doc;
pub mod format;
pub mod media;
pub mod relation;

pub use date::FuzzyDate;
pub use doc::{CanonicalDoc, NextAiringEpisode, TimelineEntry, TimelineKind};
pub use format::MediaFormat;
pub use media::{CoverImage, MediaKind, MediaRecord, RelationEdge, TitleVariants};
pub use relation::RelationKind;
