use serde_json::{json, Value};

/// Field selection shared by every media query. Relation nodes repeat the
/// scalar fields but stop there, so edges nest exactly one level deep.
const MEDIA_FIELDS: &str = r#"
  id
  title { romaji english native }
  type
  format
  description(asHtml: false)
  genres
  isAdult
  isKids
  status
  season
  seasonYear
  episodes
  averageScore
  startDate { year month day }
  coverImage { large extraLarge }
  nextAiringEpisode { episode airingAt timeUntilAiring }
  relations {
    edges {
      relationType
      node {
        id
        title { romaji english native }
        type
        format
        description(asHtml: false)
        genres
        isAdult
        isKids
        status
        season
        seasonYear
        episodes
        averageScore
        startDate { year month day }
        coverImage { large extraLarge }
      }
    }
  }
"#;

pub fn page_query() -> String {
    format!(
        "query ($page: Int, $perPage: Int, $sort: [MediaSort]) {{\n\
         Page(page: $page, perPage: $perPage) {{\n\
         media(type: ANIME, sort: $sort) {{ {MEDIA_FIELDS} }}\n\
         }}\n}}"
    )
}

pub fn page_variables(page: u32, per_page: u32, sort: &str) -> Value {
    json!({ "page": page, "perPage": per_page, "sort": [sort] })
}

pub fn by_ids_query() -> String {
    format!(
        "query ($ids: [Int], $perPage: Int) {{\n\
         Page(page: 1, perPage: $perPage) {{\n\
         media(type: ANIME, id_in: $ids) {{ {MEDIA_FIELDS} }}\n\
         }}\n}}"
    )
}

pub fn by_ids_variables(ids: &[i64], per_page: u32) -> Value {
    json!({ "ids": ids, "perPage": per_page })
}

/// Single best match by title; only the id is needed.
pub fn search_query() -> String {
    "query ($search: String) {\n\
     Page(page: 1, perPage: 1) {\n\
     media(type: ANIME, search: $search) { id }\n\
     }\n}"
        .to_string()
}

pub fn search_variables(title: &str) -> Value {
    json!({ "search": title })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queries_select_relation_edges_one_level_deep() {
        let query = page_query();
        assert!(query.contains("relations"));
        assert!(query.contains("relationType"));
        // The nested node must not recurse into relations again.
        assert_eq!(query.matches("relations {").count(), 1);
    }

    #[test]
    fn test_id_chunks_preserve_order_and_sizes() {
        let ids: Vec<i64> = (1..=120).collect();
        let chunks: Vec<&[i64]> = ids.chunks(50).collect();

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 50);
        assert_eq!(chunks[1].len(), 50);
        assert_eq!(chunks[2].len(), 20);

        let vars = by_ids_variables(chunks[2], 50);
        assert_eq!(vars["ids"].as_array().unwrap().len(), 20);
        assert_eq!(vars["ids"][0], 101);
        assert_eq!(vars["ids"][19], 120);
    }

    #[test]
    fn test_page_variables_carry_sort() {
        let vars = page_variables(3, 50, "POPULARITY_DESC");
        assert_eq!(vars["page"], 3);
        assert_eq!(vars["perPage"], 50);
        assert_eq!(vars["sort"][0], "POPULARITY_DESC");
    }
}
