use crate::error::ConfigError;
use crate::string_normalization::clean_line;
use std::path::Path;

/// Seed artist names, in file order. Repeated names are kept.
pub fn load_seed_artists(path: &Path) -> Result<Vec<String>, ConfigError> {
    read_entries(path)
}

pub fn load_genre_allow_list(path: &Path) -> Result<Vec<String>, ConfigError> {
    read_entries(path)
}

pub fn parse_entries(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter_map(clean_line)
        .map(str::to_string)
        .collect()
}

fn read_entries(path: &Path) -> Result<Vec<String>, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Missing {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_entries(&contents);
    if entries.is_empty() {
        return Err(ConfigError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(entries)
}
