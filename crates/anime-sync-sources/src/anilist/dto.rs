use serde::{Deserialize, Serialize};
use serde_json::Value;

/// GraphQL request envelope.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
    pub variables: Value,
}

/// GraphQL response envelope. `errors` may be present alongside `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    pub status: Option<u16>,
}

impl GraphQlError {
    /// AniList tags application-level throttling with status 429.
    pub fn is_rate_limit(&self) -> bool {
        self.status == Some(429)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageData {
    #[serde(rename = "Page")]
    pub page: MediaPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaPage {
    #[serde(default)]
    pub media: Vec<MediaNode>,
}

/// Raw catalog payload. Relation edges nest nodes one level deep; nested
/// nodes carry no `relations` of their own.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaNode {
    pub id: i64,
    pub title: Option<TitleNode>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub format: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(rename = "isAdult", default)]
    pub is_adult: bool,
    #[serde(rename = "isKids", default)]
    pub is_kids: bool,
    pub status: Option<String>,
    pub season: Option<String>,
    #[serde(rename = "seasonYear")]
    pub season_year: Option<i32>,
    pub episodes: Option<i32>,
    #[serde(rename = "averageScore")]
    pub average_score: Option<i32>,
    #[serde(rename = "startDate")]
    pub start_date: Option<DateNode>,
    #[serde(rename = "coverImage")]
    pub cover_image: Option<CoverImageNode>,
    #[serde(rename = "nextAiringEpisode")]
    pub next_airing_episode: Option<AiringNode>,
    pub relations: Option<RelationConnection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TitleNode {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DateNode {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoverImageNode {
    pub large: Option<String>,
    #[serde(rename = "extraLarge")]
    pub extra_large: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AiringNode {
    pub episode: i32,
    #[serde(rename = "airingAt")]
    pub airing_at: i64,
    #[serde(rename = "timeUntilAiring")]
    pub time_until_airing: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelationConnection {
    #[serde(default)]
    pub edges: Vec<RelationEdgeNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelationEdgeNode {
    #[serde(rename = "relationType")]
    pub relation_type: Option<String>,
    pub node: Option<MediaNode>,
}
