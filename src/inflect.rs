//! Name inflection for member keys.
use once_cell::sync::Lazy;
use regex::Regex;

static ACRONYM_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z\d]+)([A-Z][a-z])").expect("acronym pattern is valid"));
static WORD_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("word pattern is valid"));

/// `PascalCase`, `SHOUTY_CASE` and friends to `snake_case`.
///
/// A run of capitals followed by a capitalized word splits before the word,
/// so `HTTPStatus` becomes `http_status`.
pub fn underscore(name: &str) -> String {
    let name = ACRONYM_BOUNDARY.replace_all(name, "${1}_${2}");
    let name = WORD_BOUNDARY.replace_all(&name, "${1}_${2}");
    name.replace('-', "_").to_lowercase()
}
