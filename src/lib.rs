pub mod data;
pub mod organize;

pub use data::ItemRecord;
pub use data::load_items;
pub use organize::organize;

/// Source document, expected in the current working directory.
pub static ITEMS_FILE: &str = "items-srd.json";

/// Root of the output tree, created relative to the current working directory.
pub static OUTPUT_DIR: &str = "organized_items";
