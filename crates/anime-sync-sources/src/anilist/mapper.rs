use super::dto::{DateNode, MediaNode, TitleNode};
use anime_sync_models::{
    CoverImage, FuzzyDate, MediaRecord, NextAiringEpisode, RelationEdge, RelationKind,
    TitleVariants,
};
use serde_json::Value;

/// Map a raw catalog node into the normalized record shape. Relation edges
/// are mapped one level deep; nested targets end up with empty `relations`.
pub fn to_record(node: MediaNode) -> MediaRecord {
    let relations = node
        .relations
        .map(|conn| {
            conn.edges
                .into_iter()
                .filter_map(|edge| {
                    let kind = relation_kind(edge.relation_type.as_deref()?);
                    Some(RelationEdge {
                        kind,
                        target: edge.node.map(to_record),
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    MediaRecord {
        id: node.id,
        title: map_title(node.title),
        media_kind: node.media_type.as_deref().and_then(parse_wire_tag),
        format: node.format.as_deref().and_then(parse_wire_tag),
        description: node.description,
        genres: node.genres,
        is_adult: node.is_adult,
        is_kids: node.is_kids,
        status: node.status,
        season: node.season,
        season_year: node.season_year,
        episodes: node.episodes,
        average_score: node.average_score,
        start_date: map_date(node.start_date),
        cover_image: node
            .cover_image
            .map(|c| CoverImage {
                large: c.large,
                extra_large: c.extra_large,
            })
            .unwrap_or_default(),
        next_airing_episode: node.next_airing_episode.map(|a| NextAiringEpisode {
            episode: a.episode,
            airing_at: a.airing_at,
            time_until_airing: a.time_until_airing,
        }),
        relations,
    }
}

fn map_title(title: Option<TitleNode>) -> TitleVariants {
    title
        .map(|t| TitleVariants {
            romaji: t.romaji,
            english: t.english,
            native: t.native,
        })
        .unwrap_or_default()
}

fn map_date(date: Option<DateNode>) -> FuzzyDate {
    date.map(|d| FuzzyDate::new(d.year, d.month, d.day))
        .unwrap_or_default()
}

fn relation_kind(tag: &str) -> RelationKind {
    parse_wire_tag(tag).unwrap_or(RelationKind::Unknown)
}

/// Parse a SCREAMING_SNAKE_CASE wire tag into one of the model enums.
fn parse_wire_tag<T: serde::de::DeserializeOwned>(tag: &str) -> Option<T> {
    serde_json::from_value(Value::String(tag.to_string())).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anime_sync_models::{MediaFormat, MediaKind};
    use serde_json::json;

    fn node_json(id: i64) -> Value {
        json!({
            "id": id,
            "title": { "romaji": "Romaji", "english": "English", "native": "ネイティブ" },
            "type": "ANIME",
            "format": "TV",
            "description": "desc",
            "genres": ["Action"],
            "isAdult": false,
            "isKids": false,
            "status": "FINISHED",
            "season": "SPRING",
            "seasonYear": 2013,
            "episodes": 25,
            "averageScore": 84,
            "startDate": { "year": 2013, "month": 4, "day": 7 },
            "coverImage": { "large": "l.png", "extraLarge": "xl.png" }
        })
    }

    #[test]
    fn test_maps_scalar_fields() {
        let node: MediaNode = serde_json::from_value(node_json(16498)).unwrap();
        let record = to_record(node);

        assert_eq!(record.id, 16498);
        assert_eq!(record.title.display(), "English");
        assert_eq!(record.format, Some(MediaFormat::Tv));
        assert_eq!(record.media_kind, Some(MediaKind::Anime));
        assert_eq!(record.start_date.iso_date().as_deref(), Some("2013-04-07"));
        assert_eq!(record.cover_image.best(), "xl.png");
        assert!(record.relations.is_empty());
    }

    #[test]
    fn test_maps_relation_edges_one_level() {
        let mut raw = node_json(1);
        raw["relations"] = json!({
            "edges": [
                { "relationType": "SEQUEL", "node": node_json(2) },
                { "relationType": "ADAPTATION", "node": node_json(3) },
                { "relationType": null, "node": node_json(4) }
            ]
        });

        let node: MediaNode = serde_json::from_value(raw).unwrap();
        let record = to_record(node);

        // The null-tagged edge is dropped; the rest keep their kinds.
        assert_eq!(record.relations.len(), 2);
        assert_eq!(record.relations[0].kind, RelationKind::Sequel);
        assert_eq!(record.relations[0].target.as_ref().unwrap().id, 2);
        assert_eq!(record.relations[1].kind, RelationKind::Adaptation);
    }

    #[test]
    fn test_unrecognized_format_tag_maps_to_unknown() {
        let mut raw = node_json(1);
        raw["format"] = json!("HOLOGRAM");
        let node: MediaNode = serde_json::from_value(raw).unwrap();
        let record = to_record(node);
        assert_eq!(record.format, Some(MediaFormat::Unknown));
    }
}
