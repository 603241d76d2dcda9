use crate::doc::TimelineKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaFormat {
    Tv,
    TvShort,
    Movie,
    Ova,
    Ona,
    Special,
    Music,
    #[serde(other)]
    Unknown,
}

impl MediaFormat {
    /// Rank used when choosing a cluster's canonical record; lower wins.
    /// Main-series TV entries take precedence over films and one-offs.
    pub fn priority(&self) -> u8 {
        match self {
            MediaFormat::Tv => 1,
            MediaFormat::TvShort => 2,
            MediaFormat::Movie => 3,
            MediaFormat::Ova => 4,
            MediaFormat::Ona => 5,
            MediaFormat::Special => 6,
            _ => 99,
        }
    }

    pub fn timeline_kind(&self) -> TimelineKind {
        match self {
            MediaFormat::Movie => TimelineKind::Movie,
            MediaFormat::Ova => TimelineKind::Ova,
            MediaFormat::Ona => TimelineKind::Ona,
            MediaFormat::Special => TimelineKind::Special,
            _ => TimelineKind::Season,
        }
    }

    pub fn is_main_series(&self) -> bool {
        matches!(
            self,
            MediaFormat::Tv | MediaFormat::TvShort | MediaFormat::Movie
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_table() {
        assert_eq!(MediaFormat::Tv.priority(), 1);
        assert_eq!(MediaFormat::TvShort.priority(), 2);
        assert_eq!(MediaFormat::Movie.priority(), 3);
        assert_eq!(MediaFormat::Ova.priority(), 4);
        assert_eq!(MediaFormat::Ona.priority(), 5);
        assert_eq!(MediaFormat::Special.priority(), 6);
        assert_eq!(MediaFormat::Music.priority(), 99);
        assert_eq!(MediaFormat::Unknown.priority(), 99);
    }

    #[test]
    fn test_unknown_formats_fall_back_to_season() {
        assert_eq!(MediaFormat::Music.timeline_kind(), TimelineKind::Season);
        assert_eq!(MediaFormat::Tv.timeline_kind(), TimelineKind::Season);
        assert_eq!(MediaFormat::Movie.timeline_kind(), TimelineKind::Movie);
    }
}
