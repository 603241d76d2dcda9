use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted franchise document, one per cluster, keyed by the canonical
/// record's id in decimal string form. Field names match the store schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalDoc {
    pub anilist_id: i64,
    pub title: String,
    pub genre: Vec<String>,
    pub img: String,
    pub summary: String,
    pub status: Option<String>,
    pub season: Option<String>,
    pub season_year: Option<i32>,
    pub episodes: Option<i32>,
    pub next_airing_episode: Option<NextAiringEpisode>,
    pub score: Option<i32>,
    pub timeline: Vec<TimelineEntry>,
    pub source: String,
    /// Stamped by the store at write time, never compared for idempotence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CanonicalDoc {
    pub fn doc_id(&self) -> String {
        self.anilist_id.to_string()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NextAiringEpisode {
    pub episode: i32,
    pub airing_at: i64,
    pub time_until_airing: i64,
}

/// One franchise member in release order, rebuilt from scratch every run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    #[serde(rename = "type")]
    pub kind: TimelineKind,
    pub title: String,
    pub episodes: Option<i32>,
    pub is_canon: bool,
    pub status: String,
    /// `YYYY-MM-DD`, or None when the release year is unknown.
    pub release_date: Option<String>,
    pub season_year: Option<i32>,
    pub anilist_id: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimelineKind {
    Movie,
    Ova,
    Ona,
    Special,
    Season,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_id_is_decimal_string() {
        let doc = CanonicalDoc {
            anilist_id: 16498,
            title: "Attack on Titan".to_string(),
            genre: vec!["Action".to_string()],
            img: String::new(),
            summary: String::new(),
            status: Some("FINISHED".to_string()),
            season: None,
            season_year: Some(2013),
            episodes: Some(25),
            next_airing_episode: None,
            score: Some(84),
            timeline: Vec::new(),
            source: "anilist".to_string(),
            updated_at: None,
        };
        assert_eq!(doc.doc_id(), "16498");
    }

    #[test]
    fn test_timeline_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TimelineKind::Ova).unwrap(),
            "\"ova\""
        );
        assert_eq!(
            serde_json::to_string(&TimelineKind::Season).unwrap(),
            "\"season\""
        );
    }
}
