use chrono::Utc;

use recordworks_warehouse::{increase_stock, ElectronicItem, StockId, Warehouse};

/// Warehouse stock: seed both catalogs, list them, then walk the failure
/// drills (duplicate add, missing remove, negative update). Every failure
/// is reported and none of them is fatal.
pub fn run() -> anyhow::Result<()> {
    println!("=== Warehouse stock ===");

    let mut warehouse = Warehouse::new();
    warehouse.seed(Utc::now().date_naive())?;

    println!("--- Grocery Items ---");
    for item in warehouse.groceries().snapshot() {
        println!("{item}");
    }

    println!("--- Electronic Items ---");
    for item in warehouse.electronics().snapshot() {
        println!("{item}");
    }

    println!("--- Failure drills ---");

    println!("Adding duplicate item to electronics...");
    let duplicate = ElectronicItem::new(StockId::new(1), "Tablet", 20, "BrandD", 18);
    match warehouse.electronics_mut().add(duplicate) {
        Ok(()) => println!("unexpected: duplicate accepted"),
        Err(err) => println!("rejected: {err}"),
    }

    println!("Removing non-existent grocery item with ID 999...");
    match warehouse.groceries_mut().remove(StockId::new(999)) {
        Ok(_) => println!("unexpected: removed"),
        Err(err) => println!("rejected: {err}"),
    }

    println!("Updating grocery quantity with a negative value...");
    match warehouse.groceries_mut().update_quantity(StockId::new(101), -10) {
        Ok(()) => println!("unexpected: accepted"),
        Err(err) => println!("rejected: {err}"),
    }

    println!("Restocking smartphones...");
    match increase_stock(warehouse.electronics_mut(), StockId::new(1), 10) {
        Ok(new_quantity) => {
            println!("Increased stock for item ID 1 by 10. New quantity: {new_quantity}");
        }
        Err(err) => println!("rejected: {err}"),
    }

    Ok(())
}
