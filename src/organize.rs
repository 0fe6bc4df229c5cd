use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::data::ItemRecord;

/// Directory name for an item, derived from its `category` field. Missing or
/// non-string categories land in `misc`.
pub fn category_key(item: &ItemRecord) -> String {
    item.get("category")
        .and_then(|v| v.as_str())
        .unwrap_or("misc")
        .to_lowercase()
        .replace(' ', "_")
}

/// File stem for an item, the raw `id` field. Missing or non-string ids
/// become `unknown_item`.
pub fn id_key(item: &ItemRecord) -> String {
    item.get("id")
        .and_then(|v| v.as_str())
        .unwrap_or("unknown_item")
        .to_string()
}

/// Write each item to `<out_dir>/<category_key>/<id_key>.json` as
/// pretty-printed JSON. Items sharing a category and id overwrite each other,
/// last write wins. Returns the number of records processed.
pub fn organize(items: &[ItemRecord], out_dir: &Path) -> Result<usize> {
    for item in items {
        let folder_path = out_dir.join(category_key(item));
        fs::create_dir_all(&folder_path)?;
        let file_path = folder_path.join(format!("{}.json", id_key(item)));
        fs::write(&file_path, serde_json::to_string_pretty(item)?)?;
    }
    Ok(items.len())
}
