//! Column-name flattening for two-level table headers

/// Marker carried by group labels generated for blank header cells
pub const PLACEHOLDER_MARKER: &str = "Unnamed";

/// Returns true if a group label was generated rather than read from the page
pub fn is_placeholder(label: &str) -> bool {
    label.contains(PLACEHOLDER_MARKER)
}

/// Joins one (group, sub) header pair into a single column name
///
/// Placeholder group labels are dropped; the result is trimmed.
pub fn flatten_label(group: &str, sub: &str) -> String {
    let group = if is_placeholder(group) { "" } else { group };
    format!("{} {}", group, sub).trim().to_string()
}

/// Flattens a sequence of two-level column headers, preserving order
///
/// # Example
///
/// ```
/// use fantasydata_scraper::table::flatten;
///
/// let columns = [("Unnamed: 0_level_0", "Yards"), ("Passing", "TD")];
/// assert_eq!(flatten(&columns), vec!["Yards", "Passing TD"]);
/// ```
pub fn flatten<G, S>(columns: &[(G, S)]) -> Vec<String>
where
    G: AsRef<str>,
    S: AsRef<str>,
{
    columns
        .iter()
        .map(|(group, sub)| flatten_label(group.as_ref(), sub.as_ref()))
        .collect()
}
