//! Text-to-payload normalization shared by every form and filter.
//!
//! Raw inputs are kept as the user typed them; these helpers turn them into
//! the typed values the remote API expects.

/// Splits a comma-separated field into trimmed tags, dropping empty segments.
///
/// Duplicates are preserved in input order.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Like [`split_tags`], but yields `None` when no tag survives.
pub fn optional_tags(raw: &str) -> Option<Vec<String>> {
    let tags = split_tags(raw);
    if tags.is_empty() { None } else { Some(tags) }
}

/// Parses a numeric field. Blank input is `None`, never zero.
///
/// Input that is not a finite number also becomes `None`.
pub fn optional_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Returns the trimmed text, or `None` when it is blank.
pub fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
