use crate::class::SemanticClass;

/// Root segment prepended when canonicalising engine asset paths.
pub const ASSET_ROOT_SEGMENT: &str = "assets";

/// Index of the classification keyword when a canonical path is split on
/// `/` with empty segments kept. Canonical paths are root-relative
/// (`/<asset root>/<category>/<keyword>/<asset>`), so the leading slash
/// contributes an empty first segment.
pub const KEYWORD_SEGMENT_INDEX: usize = 3;

/// Location of the tagger settings file, relative to the asset root.
pub const RELATIVE_SETTINGS_PATH: &str = "config/tagger.settings.json";

/// Extracts the classification keyword from a canonical storage path.
/// Paths too shallow to carry a keyword segment yield `None` and no
/// classification is attempted for them.
pub fn classification_keyword(path: &str) -> Option<&str> {
    path.split('/').nth(KEYWORD_SEGMENT_INDEX)
}

/// Derives the semantic class for a canonical storage path.
/// Total over all strings: shallow paths and unknown keywords both come
/// back as `SemanticClass::None`.
pub fn classify_path(path: &str) -> SemanticClass {
    classification_keyword(path).map_or(SemanticClass::None, SemanticClass::from_keyword)
}
