use std::io::Write;

use tempfile::NamedTempFile;

use cater_indent_rs::catalog::{
    CatalogStore, ingest_inventory, ingest_recipes, load_catalog, save_catalog,
};
use cater_indent_rs::models::{AttendeeProfile, CrowdProfile, Event};
use cater_indent_rs::planner::{ConsumptionCoefficients, compute_indent};

const INVENTORY_CSV: &str = "\
Category,Item ID,Item Name,Regional Name,Brand,Package Size,Unit,Stock Quantity
Grains,5,Basmati Rice,Chawal,,25 kg,kg,40
Dairy,6,Ghee,,Amul,1 L,kg,8
Vegetables,8,Onion,Pyaz,,,kg,15
";

const RECIPES_CSV: &str = "\
Menu Item ID,Menu Category,Menu Sub-Category,Menu Item Name,Ingredient Type,Ingredient ID,Ingredient Name,Quantity,Unit
10,Mains,Rice,Veg Biryani,Dry,5,Basmati Rice,0.01,kg
10,Mains,Rice,Veg Biryani,Dairy,6,Ghee,0.002,kg
10,Mains,Rice,Veg Biryani,Fresh,8,Onion,0.015,kg
11,Mains,Rice,Jeera Rice,Dry,5,Basmati Rice,0.02,kg
11,Mains,Rice,Jeera Rice,Fresh,N/A,Coriander,0.001,kg
";

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn ingested_store() -> CatalogStore {
    let inventory = write_csv(INVENTORY_CSV);
    let recipes = write_csv(RECIPES_CSV);

    let mut store = CatalogStore::new();
    ingest_inventory(&mut store, inventory.path()).unwrap();
    ingest_recipes(&mut store, recipes.path()).unwrap();

    store.upsert_event(Event {
        id: 1,
        name: "Housewarming".to_string(),
        date: "2026-06-01".to_string(),
        venue: "Community Hall".to_string(),
        attendees: AttendeeProfile::new(100, 80, 20),
        profile: CrowdProfile::Urban,
    });
    store
}

#[test]
fn test_csv_to_indent_pipeline() {
    let store = ingested_store();
    assert_eq!(store.ingredient_count(), 3);
    assert_eq!(store.menu_item_count(), 2);

    let coeffs = ConsumptionCoefficients::default();
    let result = compute_indent(&store, 1, &[10, 11], &coeffs).unwrap();

    assert_eq!(result.capacity, 178.0);
    assert_eq!(result.portion_per_item, 89.0);

    // Rice comes from both items; the N/A coriander row never became a line.
    assert_eq!(result.requirements.len(), 3);
    let rice = result
        .requirements
        .iter()
        .find(|r| r.ingredient_id == 5)
        .unwrap();
    assert!((rice.quantity - (0.01 + 0.02) * 89.0).abs() < 1e-9);
}

#[test]
fn test_catalog_survives_a_save_load_cycle() {
    let store = ingested_store();
    let coeffs = ConsumptionCoefficients::default();
    let before = compute_indent(&store, 1, &[10, 11], &coeffs).unwrap();

    let file = NamedTempFile::new().unwrap();
    save_catalog(file.path(), &store).unwrap();
    let reloaded = load_catalog(file.path()).unwrap();

    let after = compute_indent(&reloaded, 1, &[10, 11], &coeffs).unwrap();

    assert_eq!(before.capacity, after.capacity);
    assert_eq!(before.requirements.len(), after.requirements.len());
    for requirement in &before.requirements {
        let other = after
            .requirements
            .iter()
            .find(|r| r.ingredient_id == requirement.ingredient_id)
            .unwrap();
        assert!((requirement.quantity - other.quantity).abs() < 1e-12);
        assert_eq!(requirement.unit, other.unit);
    }
}
