use crate::sanitize::sanitize_description;
use anime_sync_models::{CanonicalDoc, MediaRecord, TimelineEntry};

/// Assemble the persisted document from a cluster's canonical record and
/// its timeline. `updated_at` stays unset here; the store stamps it at
/// write time.
pub fn build_canonical_doc(primary: &MediaRecord, timeline: Vec<TimelineEntry>) -> CanonicalDoc {
    CanonicalDoc {
        anilist_id: primary.id,
        title: primary.title.display().to_string(),
        genre: primary.genres.clone(),
        img: primary.cover_image.best().to_string(),
        summary: sanitize_description(primary.description.as_deref()),
        status: primary.status.clone(),
        season: primary.season.clone(),
        season_year: primary.season_year,
        episodes: primary.episodes,
        next_airing_episode: primary.next_airing_episode,
        score: primary.average_score,
        timeline,
        source: "anilist".to_string(),
        updated_at: None,
    }
}
