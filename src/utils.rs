use once_cell::sync::Lazy;
use regex::Regex;

// Innermost parenthesized group plus any whitespace directly before it.
static PARENTHETICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\([^()]*\)").unwrap());

// Trailing release-type annotation as Apple Music writes it.
static TRAILING_RELEASE_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*-\s*(?:single|ep)\s*$").unwrap());

/// Normalizes a track or album name for exact-phrase search.
///
/// Exact-phrase matching makes annotations like `(Remastered)` or the
/// `- Single` suffix produce false negatives, so they are stripped before
/// the query is built:
///
/// 1. parenthesized qualifiers are removed, innermost first, so nested
///    groups unwrap completely;
/// 2. one trailing ` - Single` / ` - EP` suffix is removed,
///    case-insensitively;
/// 3. surrounding whitespace is trimmed.
///
/// A name without annotations is returned unchanged. The normalized form is
/// only ever used for querying; persisted records keep their original names.
pub fn clean_name_for_search(name: &str) -> String {
    let mut cleaned = name.to_string();
    loop {
        let next = PARENTHETICAL.replace_all(&cleaned, "").into_owned();
        if next == cleaned {
            break;
        }
        cleaned = next;
    }

    let cleaned = TRAILING_RELEASE_TYPE.replace(&cleaned, "");
    cleaned.trim().to_string()
}
