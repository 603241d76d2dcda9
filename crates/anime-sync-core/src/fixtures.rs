//! Shared record constructors for unit tests.

use anime_sync_models::{
    CoverImage, FuzzyDate, MediaFormat, MediaKind, MediaRecord, RelationEdge, RelationKind,
    TitleVariants,
};

pub fn media(id: i64, title: &str) -> MediaRecord {
    MediaRecord {
        id,
        title: TitleVariants {
            romaji: Some(title.to_string()),
            english: None,
            native: None,
        },
        media_kind: Some(MediaKind::Anime),
        format: Some(MediaFormat::Tv),
        description: Some(format!("About {title}.")),
        genres: vec!["Action".to_string()],
        is_adult: false,
        is_kids: false,
        status: Some("FINISHED".to_string()),
        season: None,
        season_year: Some(2010),
        episodes: Some(12),
        average_score: Some(70),
        start_date: FuzzyDate::new(Some(2010), Some(1), Some(1)),
        cover_image: CoverImage::default(),
        next_airing_episode: None,
        relations: Vec::new(),
    }
}

pub fn related(record: &mut MediaRecord, kind: RelationKind, target: MediaRecord) {
    record.relations.push(RelationEdge {
        kind,
        target: Some(target),
    });
}
