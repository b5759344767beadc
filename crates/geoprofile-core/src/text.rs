// crates/geoprofile-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Côte d'Ivoire` -> `Cote d'Ivoire`)
/// 2\) Normalize to lowercase
/// 3\) Collapse runs of whitespace to one space
///
/// # Examples
///
/// ```rust
/// use geoprofile_core::text::fold_key;
///
/// assert_eq!(fold_key("  Türkiye "), "turkiye");
/// assert_eq!(fold_key("United   States"), "united states");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits `text` into sentence units on ". ", keeps the first `max` units and
/// joins them back with ". ", ending with exactly one period.
///
/// Returns `None` when there is nothing left to join.
pub fn first_sentences(text: &str, max: usize) -> Option<String> {
    let units: Vec<&str> = text
        .split(". ")
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .take(max)
        .collect();
    if units.is_empty() {
        return None;
    }
    let joined = units.join(". ");
    Some(format!("{}.", joined.trim_end_matches('.')))
}
