use serde::{Deserialize, Serialize};

/// Relation tags carried on catalog edges. Only a fixed subset marks two
/// records as belonging to the same franchise; everything else (adaptations,
/// shared characters, source material) is ignored when grouping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationKind {
    Prequel,
    Sequel,
    SideStory,
    Summary,
    Alternative,
    AlternativeSetting,
    SpinOff,
    Parent,
    Child,
    Compilation,
    Other,
    Adaptation,
    Character,
    Source,
    Contains,
    #[serde(other)]
    Unknown,
}

impl RelationKind {
    /// True when an edge of this kind links records of one franchise.
    pub fn is_franchise(&self) -> bool {
        matches!(
            self,
            RelationKind::Prequel
                | RelationKind::Sequel
                | RelationKind::SideStory
                | RelationKind::Summary
                | RelationKind::Alternative
                | RelationKind::AlternativeSetting
                | RelationKind::SpinOff
                | RelationKind::Parent
                | RelationKind::Child
                | RelationKind::Compilation
                | RelationKind::Other
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_franchise_allow_list() {
        assert!(RelationKind::Sequel.is_franchise());
        assert!(RelationKind::SideStory.is_franchise());
        assert!(RelationKind::Compilation.is_franchise());
        assert!(!RelationKind::Adaptation.is_franchise());
        assert!(!RelationKind::Character.is_franchise());
        assert!(!RelationKind::Unknown.is_franchise());
    }

    #[test]
    fn test_wire_tag_round_trip() {
        let kind: RelationKind = serde_json::from_str("\"SIDE_STORY\"").unwrap();
        assert_eq!(kind, RelationKind::SideStory);

        // Tags outside the known set must not fail deserialization.
        let kind: RelationKind = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
        assert_eq!(kind, RelationKind::Unknown);
    }
}
