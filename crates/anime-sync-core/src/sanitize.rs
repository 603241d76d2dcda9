use regex::Regex;
use std::sync::OnceLock;

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"))
}

/// Strip markup from a catalog description: HTML tags removed, the two
/// entities the catalog actually emits decoded. Absent text becomes "".
pub fn sanitize_description(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };
    tag_pattern()
        .replace_all(text, "")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags() {
        assert_eq!(
            sanitize_description(Some("Humanity lives<br><i>inside walls</i>.")),
            "Humanity livesinside walls."
        );
    }

    #[test]
    fn test_decodes_entities() {
        assert_eq!(
            sanitize_description(Some("&quot;Ataque&quot; &amp; more")),
            "\"Ataque\" & more"
        );
    }

    #[test]
    fn test_none_becomes_empty() {
        assert_eq!(sanitize_description(None), "");
    }
}
