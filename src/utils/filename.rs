use crate::utils::constants::OUTPUT_PREFIX;
use std::path::{Path, PathBuf};

/// Output file name for a centroid: `map_of_{GEOID}.png`
///
/// Characters that cannot appear in a file name are replaced with `_`.
pub fn output_file_name(geoid: &str) -> String {
    let safe: String = geoid
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    format!("{}{}.png", OUTPUT_PREFIX, safe)
}

pub fn output_path(output_dir: &Path, geoid: &str) -> PathBuf {
    output_dir.join(output_file_name(geoid))
}
