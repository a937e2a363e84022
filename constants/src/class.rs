use serde::{Deserialize, Serialize};

/// Semantic classes for segmentation rendering.
///
/// Discriminants are the wire values written into the per-surface stencil
/// channel and consumed by the segmentation render pass. Extending the
/// taxonomy appends new variants; existing values never shift.
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SemanticClass {
    #[default]
    None = 0,
    Buildings = 1,
    Fences = 2,
    Other = 3,
    Pedestrians = 4,
    Poles = 5,
    RoadLines = 6,
    Roads = 7,
    Sidewalks = 8,
    Vegetation = 9,
    Vehicles = 10,
    Walls = 11,
}

/// Path keyword to class mapping. Matching is exact and case-sensitive;
/// asset naming is a content-pipeline convention enforced upstream.
pub const KEYWORD_MAP: &[(&str, SemanticClass)] = &[
    ("Buildings", SemanticClass::Buildings),
    ("Fences", SemanticClass::Fences),
    ("Pedestrians", SemanticClass::Pedestrians),
    ("Pole", SemanticClass::Poles),
    ("Props", SemanticClass::Other),
    ("Road", SemanticClass::Roads),
    ("RoadLines", SemanticClass::RoadLines),
    ("SideWalk", SemanticClass::Sidewalks),
    ("Vegetation", SemanticClass::Vegetation),
    ("Vehicles", SemanticClass::Vehicles),
    ("Walls", SemanticClass::Walls),
];

impl SemanticClass {
    /// Looks up the class for a path keyword.
    /// Keywords absent from the table map to `None`.
    pub fn from_keyword(keyword: &str) -> Self {
        KEYWORD_MAP
            .iter()
            .find(|(key, _)| *key == keyword)
            .map_or(SemanticClass::None, |(_, class)| *class)
    }

    /// Numeric code written into the stencil channel (0-255 range,
    /// current taxonomy uses 0-11).
    pub fn stencil_value(self) -> u8 {
        self as u8
    }

    /// Human-readable class name for logs and reports.
    pub fn name(self) -> &'static str {
        match self {
            SemanticClass::None => "unlabeled",
            SemanticClass::Buildings => "buildings",
            SemanticClass::Fences => "fences",
            SemanticClass::Other => "other",
            SemanticClass::Pedestrians => "pedestrians",
            SemanticClass::Poles => "poles",
            SemanticClass::RoadLines => "road lines",
            SemanticClass::Roads => "roads",
            SemanticClass::Sidewalks => "sidewalks",
            SemanticClass::Vegetation => "vegetation",
            SemanticClass::Vehicles => "vehicles",
            SemanticClass::Walls => "walls",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table_mapping() {
        for (keyword, class) in KEYWORD_MAP {
            assert_eq!(SemanticClass::from_keyword(keyword), *class);
        }
    }

    #[test]
    fn test_aliased_keywords() {
        // Table keys that differ from the class they map to.
        assert_eq!(SemanticClass::from_keyword("Pole"), SemanticClass::Poles);
        assert_eq!(SemanticClass::from_keyword("Props"), SemanticClass::Other);
        assert_eq!(SemanticClass::from_keyword("Road"), SemanticClass::Roads);
        assert_eq!(
            SemanticClass::from_keyword("SideWalk"),
            SemanticClass::Sidewalks
        );
    }

    #[test]
    fn test_unknown_keywords_stay_unlabeled() {
        assert_eq!(SemanticClass::from_keyword(""), SemanticClass::None);
        assert_eq!(SemanticClass::from_keyword("Misc"), SemanticClass::None);
        // Matching is exact: no case folding, no prefixes.
        assert_eq!(
            SemanticClass::from_keyword("buildings"),
            SemanticClass::None
        );
        assert_eq!(SemanticClass::from_keyword("Building"), SemanticClass::None);
        assert_eq!(
            SemanticClass::from_keyword(" Buildings"),
            SemanticClass::None
        );
    }

    #[test]
    fn test_stencil_codes_are_stable() {
        // Wire contract with the segmentation render pass.
        assert_eq!(SemanticClass::None.stencil_value(), 0);
        assert_eq!(SemanticClass::Buildings.stencil_value(), 1);
        assert_eq!(SemanticClass::Fences.stencil_value(), 2);
        assert_eq!(SemanticClass::Other.stencil_value(), 3);
        assert_eq!(SemanticClass::Pedestrians.stencil_value(), 4);
        assert_eq!(SemanticClass::Poles.stencil_value(), 5);
        assert_eq!(SemanticClass::RoadLines.stencil_value(), 6);
        assert_eq!(SemanticClass::Roads.stencil_value(), 7);
        assert_eq!(SemanticClass::Sidewalks.stencil_value(), 8);
        assert_eq!(SemanticClass::Vegetation.stencil_value(), 9);
        assert_eq!(SemanticClass::Vehicles.stencil_value(), 10);
        assert_eq!(SemanticClass::Walls.stencil_value(), 11);
    }

    #[test]
    fn test_default_is_unlabeled() {
        assert_eq!(SemanticClass::default(), SemanticClass::None);
        assert_eq!(SemanticClass::None.name(), "unlabeled");
    }
}
