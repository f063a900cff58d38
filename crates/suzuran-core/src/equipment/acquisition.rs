//! Comma-joined acquisition labels stored on equipment.

/// Separator written between labels.
pub const ACQUISITION_SEPARATOR: &str = ", ";

/// Splits a stored `acquisitionMethod` into its labels.
///
/// Whitespace around each label is trimmed and blank labels are dropped, so
/// hand-edited values such as `"a,b , "` still split cleanly.
pub fn split_acquisition_methods(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins labels for storage. An empty list (or one with only blank labels)
/// yields `None`, which clears the field.
pub fn join_acquisition_methods<S: AsRef<str>>(labels: &[S]) -> Option<String> {
    let labels: Vec<&str> = labels
        .iter()
        .map(|label| label.as_ref().trim())
        .filter(|label| !label.is_empty())
        .collect();
    if labels.is_empty() {
        None
    } else {
        Some(labels.join(ACQUISITION_SEPARATOR))
    }
}
