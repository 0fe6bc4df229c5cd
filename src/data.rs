use std::path::Path;

use anyhow::Result;
use serde_json::Value;

/// One game item as loaded from the source document. Items are free-form
/// objects; only `category` and `id` are meaningful to the organizer.
pub type ItemRecord = serde_json::Map<String, Value>;

/// Parse the source document into item records. The root value must be a
/// JSON array of objects; anything else fails the parse.
pub fn load_items(path: &Path) -> Result<Vec<ItemRecord>> {
    let data_str = std::fs::read_to_string(path)?;
    let items: Vec<ItemRecord> = serde_json::from_str(&data_str)?;
    Ok(items)
}
