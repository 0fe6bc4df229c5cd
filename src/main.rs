use std::path::Path;

use item_organizer::ITEMS_FILE;
use item_organizer::OUTPUT_DIR;
use item_organizer::load_items;
use item_organizer::organize;

fn main() -> anyhow::Result<()> {
    let input_path = Path::new(ITEMS_FILE);
    if !input_path.exists() {
        eprintln!("Error: {ITEMS_FILE} not found in this folder.");
        std::process::exit(1);
    }

    let items = load_items(input_path)?;
    organize(&items, Path::new(OUTPUT_DIR))?;
    println!("Success! All items organized into folders under '{OUTPUT_DIR}/'");
    Ok(())
}
