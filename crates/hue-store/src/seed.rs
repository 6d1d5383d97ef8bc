//! Seed data loading.
//!
//! Seed data is a JSON array of `{id, title, color, rating, timestamp}`
//! records. Colors go through the same [`ColorValue`](hue_types::ColorValue)
//! codec as client input, so a seed with an invalid color is rejected.

use std::path::Path;

use hue_types::Color;

use crate::error::StoreResult;

/// Seed data compiled into the binary.
pub const DEFAULT_SEED: &str = include_str!("../data/colors.json");

/// Parse seed records from a JSON document.
pub fn parse_seed(json: &str) -> StoreResult<Vec<Color>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse seed records from a file.
pub fn load_seed(path: &Path) -> StoreResult<Vec<Color>> {
    let json = std::fs::read_to_string(path)?;
    let colors = parse_seed(&json)?;
    tracing::info!(path = %path.display(), count = colors.len(), "loaded seed data");
    Ok(colors)
}

/// The embedded default seed records.
pub fn default_seed() -> StoreResult<Vec<Color>> {
    parse_seed(DEFAULT_SEED)
}
