use std::path::Path;

use serde::Deserialize;

use super::CatalogStore;
use crate::error::Result;
use crate::models::{DietType, Ingredient, MenuItem, RecipeLine};

/// Counts reported after a CSV ingest run.
#[derive(Debug, Default)]
pub struct IngestReport {
    pub ingredients_added: usize,
    pub menu_items_added: usize,
    pub recipe_lines_added: usize,
    pub rows_skipped: usize,
}

/// Row of the inventory export.
///
/// Headers: Category, Item ID, Item Name, Regional Name, Brand,
/// Package Size, Unit, Stock Quantity.
#[derive(Debug, Deserialize)]
struct InventoryRow {
    #[serde(rename = "Category")]
    category: String,

    #[serde(rename = "Item ID")]
    item_id: u32,

    #[serde(rename = "Item Name")]
    item_name: String,

    #[serde(rename = "Regional Name")]
    regional_name: Option<String>,

    #[serde(rename = "Brand")]
    brand: Option<String>,

    #[serde(rename = "Package Size")]
    package_size: Option<String>,

    #[serde(rename = "Unit")]
    unit: String,

    #[serde(rename = "Stock Quantity")]
    stock_qty: Option<f64>,
}

/// Row of the master recipe export.
///
/// Headers: Menu Item ID, Menu Category, Menu Sub-Category, Menu Item Name,
/// Ingredient Type, Ingredient ID, Ingredient Name, Quantity, Unit. The
/// ingredient id column holds "N/A" for fresh items, so it is read as text.
#[derive(Debug, Deserialize)]
struct RecipeRow {
    #[serde(rename = "Menu Item ID")]
    menu_item_id: u32,

    #[serde(rename = "Menu Category")]
    menu_category: String,

    #[serde(rename = "Menu Sub-Category")]
    menu_sub_category: String,

    #[serde(rename = "Menu Item Name")]
    menu_item_name: String,

    #[serde(rename = "Ingredient ID")]
    ingredient_id: Option<String>,

    #[serde(rename = "Quantity")]
    quantity: Option<f64>,

    #[serde(rename = "Unit")]
    unit: String,
}

/// Ingest the inventory CSV into the store.
///
/// Existing ingredient ids are left untouched, so a re-run never clobbers
/// hand-edited rows.
pub fn ingest_inventory<P: AsRef<Path>>(store: &mut CatalogStore, path: P) -> Result<IngestReport> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut report = IngestReport::default();

    for row in reader.deserialize() {
        let row: InventoryRow = row?;

        if store.ingredient(row.item_id).is_some() {
            report.rows_skipped += 1;
            continue;
        }

        store.upsert_ingredient(Ingredient {
            id: row.item_id,
            name: row.item_name,
            category: row.category,
            unit: row.unit,
            regional_name: row.regional_name,
            brand: row.brand,
            package_size: row.package_size,
            stock_qty: row.stock_qty.unwrap_or(0.0),
        });
        report.ingredients_added += 1;
    }

    Ok(report)
}

/// Ingest the master recipe CSV: menu items first (the first row per id
/// supplies the item's details), then recipe lines.
///
/// Rows whose ingredient id is blank or non-numeric ("N/A" fresh items), or
/// references an id missing from the inventory, are skipped rather than
/// inserted as dangling lines.
pub fn ingest_recipes<P: AsRef<Path>>(store: &mut CatalogStore, path: P) -> Result<IngestReport> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut report = IngestReport::default();

    for row in reader.deserialize() {
        let row: RecipeRow = row?;

        if store.menu_item(row.menu_item_id).is_none() {
            let diet_type = if row.menu_category.contains("Non-Veg") {
                DietType::NonVeg
            } else {
                DietType::Veg
            };
            store.upsert_menu_item(MenuItem {
                id: row.menu_item_id,
                name: row.menu_item_name,
                category: row.menu_category,
                sub_category: row.menu_sub_category,
                diet_type,
            });
            report.menu_items_added += 1;
        }

        let Some(raw_id) = row.ingredient_id else {
            report.rows_skipped += 1;
            continue;
        };
        let Ok(ingredient_id) = raw_id.trim().parse::<u32>() else {
            report.rows_skipped += 1;
            continue;
        };
        if store.ingredient(ingredient_id).is_none() {
            report.rows_skipped += 1;
            continue;
        }
        let Some(quantity) = row.quantity else {
            report.rows_skipped += 1;
            continue;
        };

        let inserted = store.upsert_recipe_line(RecipeLine {
            menu_item_id: row.menu_item_id,
            ingredient_id,
            quantity,
            unit: row.unit,
        });
        if inserted {
            report.recipe_lines_added += 1;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const INVENTORY_CSV: &str = "\
Category,Item ID,Item Name,Regional Name,Brand,Package Size,Unit,Stock Quantity
Grains,5,Basmati Rice,Chawal,,25 kg,kg,40
Dairy,6,Ghee,,Amul,1 L,kg,
Spices,7,Turmeric,Haldi,,200 g,g,12.5
";

    const RECIPES_CSV: &str = "\
Menu Item ID,Menu Category,Menu Sub-Category,Menu Item Name,Ingredient Type,Ingredient ID,Ingredient Name,Quantity,Unit
10,Mains,Rice,Veg Biryani,Dry,5,Basmati Rice,0.01,kg
10,Mains,Rice,Veg Biryani,Dairy,6,Ghee,0.002,kg
10,Mains,Rice,Veg Biryani,Fresh,N/A,Mint Leaves,0.001,kg
11,Non-Veg Mains,Curry,Chicken Curry,Fresh,N/A,Chicken,0.05,kg
11,Non-Veg Mains,Curry,Chicken Curry,Dry,7,Turmeric,0.5,g
11,Non-Veg Mains,Curry,Chicken Curry,Dry,42,Ground Cumin,0.3,g
";

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_ingest_inventory() {
        let file = write_csv(INVENTORY_CSV);
        let mut store = CatalogStore::new();

        let report = ingest_inventory(&mut store, file.path()).unwrap();
        assert_eq!(report.ingredients_added, 3);
        assert_eq!(report.rows_skipped, 0);

        let ghee = store.ingredient(6).unwrap();
        assert_eq!(ghee.brand.as_deref(), Some("Amul"));
        assert!(ghee.regional_name.is_none());
        // Blank stock defaults to zero.
        assert_eq!(ghee.stock_qty, 0.0);
    }

    #[test]
    fn test_ingest_inventory_keeps_existing_rows() {
        let file = write_csv(INVENTORY_CSV);
        let mut store = CatalogStore::new();

        ingest_inventory(&mut store, file.path()).unwrap();
        let report = ingest_inventory(&mut store, file.path()).unwrap();
        assert_eq!(report.ingredients_added, 0);
        assert_eq!(report.rows_skipped, 3);
    }

    #[test]
    fn test_ingest_recipes_skips_unresolved_ingredients() {
        let inventory = write_csv(INVENTORY_CSV);
        let recipes = write_csv(RECIPES_CSV);
        let mut store = CatalogStore::new();

        ingest_inventory(&mut store, inventory.path()).unwrap();
        let report = ingest_recipes(&mut store, recipes.path()).unwrap();

        assert_eq!(report.menu_items_added, 2);
        // Two N/A rows and one id (42) absent from the inventory.
        assert_eq!(report.rows_skipped, 3);
        assert_eq!(report.recipe_lines_added, 3);

        assert_eq!(store.recipe_lines(10).len(), 2);
        assert_eq!(store.recipe_lines(11).len(), 1);
    }

    #[test]
    fn test_ingest_recipes_diet_heuristic() {
        let inventory = write_csv(INVENTORY_CSV);
        let recipes = write_csv(RECIPES_CSV);
        let mut store = CatalogStore::new();

        ingest_inventory(&mut store, inventory.path()).unwrap();
        ingest_recipes(&mut store, recipes.path()).unwrap();

        assert_eq!(store.menu_item(10).unwrap().diet_type, DietType::Veg);
        assert_eq!(store.menu_item(11).unwrap().diet_type, DietType::NonVeg);
    }

    #[test]
    fn test_ingest_recipes_rerun_is_idempotent() {
        let inventory = write_csv(INVENTORY_CSV);
        let recipes = write_csv(RECIPES_CSV);
        let mut store = CatalogStore::new();

        ingest_inventory(&mut store, inventory.path()).unwrap();
        ingest_recipes(&mut store, recipes.path()).unwrap();
        let report = ingest_recipes(&mut store, recipes.path()).unwrap();

        assert_eq!(report.menu_items_added, 0);
        assert_eq!(report.recipe_lines_added, 0);
        assert_eq!(store.recipe_lines(10).len(), 2);
    }
}
