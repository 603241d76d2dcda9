use crate::date::FuzzyDate;
use crate::doc::NextAiringEpisode;
use crate::format::MediaFormat;
use crate::relation::RelationKind;
use serde::{Deserialize, Serialize};

/// A catalog record after normalization, with relation edges embedded one
/// level deep. Relation targets are themselves `MediaRecord`s whose own
/// `relations` list is empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaRecord {
    pub id: i64,
    pub title: TitleVariants,
    pub media_kind: Option<MediaKind>,
    pub format: Option<MediaFormat>,
    pub description: Option<String>,
    pub genres: Vec<String>,
    pub is_adult: bool,
    pub is_kids: bool,
    pub status: Option<String>,
    pub season: Option<String>,
    pub season_year: Option<i32>,
    pub episodes: Option<i32>,
    pub average_score: Option<i32>,
    pub start_date: FuzzyDate,
    pub cover_image: CoverImage,
    pub next_airing_episode: Option<NextAiringEpisode>,
    pub relations: Vec<RelationEdge>,
}

impl MediaRecord {
    pub fn is_anime(&self) -> bool {
        matches!(self.media_kind, Some(MediaKind::Anime))
    }

    pub fn description_len(&self) -> usize {
        self.description.as_deref().map_or(0, str::len)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaKind {
    Anime,
    Manga,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TitleVariants {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
}

impl TitleVariants {
    /// Preferred display title: english, then romaji, then native.
    pub fn display(&self) -> &str {
        self.english
            .as_deref()
            .or(self.romaji.as_deref())
            .or(self.native.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoverImage {
    pub large: Option<String>,
    pub extra_large: Option<String>,
}

impl CoverImage {
    /// Largest available cover URL, empty string when the record has none.
    pub fn best(&self) -> &str {
        self.extra_large
            .as_deref()
            .or(self.large.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelationEdge {
    pub kind: RelationKind,
    pub target: Option<MediaRecord>,
}
