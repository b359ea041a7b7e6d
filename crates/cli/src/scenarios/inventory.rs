use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use tracing::warn;

use recordworks_core::Entity;
use recordworks_inventory::{InventoryItem, InventoryLog, ItemId};

/// Inventory capture: load the journal, capture three records, save.
pub fn run(log_path: &Path) -> anyhow::Result<()> {
    println!("=== Inventory capture ===");

    let mut log: InventoryLog<InventoryItem> = InventoryLog::new(log_path);
    match log.load() {
        Ok(loaded) if loaded > 0 => {
            println!("Loaded {loaded} items from '{}'.", log_path.display());
        }
        Ok(_) => {}
        // A corrupt or unreadable journal is reported, then we continue
        // with an empty log rather than abort the capture session.
        Err(err) => warn!("could not load inventory log: {err}"),
    }

    let now = Utc::now();
    log.add(InventoryItem::new(ItemId::new(1), "Laptop", 10, now));
    log.add(InventoryItem::new(ItemId::new(2), "Mouse", 50, now));
    log.add(InventoryItem::new(ItemId::new(3), "Keyboard", 25, now));

    println!("Current inventory items:");
    for item in log.records() {
        println!(
            "ID: {}, Name: {}, Quantity: {}, Added: {}",
            item.id(),
            item.name(),
            item.quantity(),
            item.added_at().format("%Y-%m-%d %H:%M:%S")
        );
    }

    log.save().context("saving inventory log")?;
    println!("Inventory saved to file.");
    Ok(())
}
