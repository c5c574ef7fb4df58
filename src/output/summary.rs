//! Run summary for the terminal

use crate::output::Manifest;

/// Formats the manifest as a short plain-text report
pub fn format_summary(manifest: &Manifest) -> String {
    let mut out = String::new();

    out.push_str("=== Scrape Summary ===\n\n");
    out.push_str(&format!(
        "Season {} (weeks {}-{})\n",
        manifest.season, manifest.week_from, manifest.week_to
    ));
    out.push_str(&format!(
        "Generated: {}\n",
        manifest.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!("Config hash: {}\n\n", manifest.config_hash));

    if manifest.files.is_empty() {
        out.push_str("No datasets were written.\n");
        return out;
    }

    out.push_str("Datasets:\n");
    for entry in &manifest.files {
        let label = match &entry.position {
            Some(position) => format!("{} {}", entry.dataset, position.to_uppercase()),
            None => entry.dataset.clone(),
        };
        out.push_str(&format!(
            "  {:<20} {:>7} rows  {}\n",
            label, entry.rows, entry.file
        ));
    }

    out.push_str(&format!(
        "\nTotal: {} rows in {} files\n",
        manifest.total_rows(),
        manifest.files.len()
    ));
    out
}

/// Prints the summary to stdout
pub fn print_summary(manifest: &Manifest) {
    print!("{}", format_summary(manifest));
}
