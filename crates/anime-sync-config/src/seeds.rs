use crate::error::ConfigError;
use std::path::Path;

/// Load the import-mode seed list: a JSON array of title strings. Blank
/// entries are dropped here so the orchestrator never searches for them.
pub fn load_seed_titles(path: &Path) -> Result<Vec<String>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::MissingSeedFile {
        path: path.to_path_buf(),
    })?;

    let titles: Vec<String> = serde_json::from_str(&raw).map_err(|source| ConfigError::SeedParse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(titles
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect())
}
