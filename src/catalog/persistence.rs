use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::CatalogStore;
use crate::error::Result;
use crate::models::{Event, Ingredient, MenuItem, RecipeLine};

/// On-disk layout of the catalog file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    events: Vec<Event>,

    #[serde(default)]
    menu_items: Vec<MenuItem>,

    #[serde(default)]
    ingredients: Vec<Ingredient>,

    #[serde(default)]
    recipes: Vec<RecipeLine>,
}

/// Load the catalog from a JSON file.
///
/// Duplicate ids collapse with the last occurrence winning; recipe lines
/// keep at most one entry per (menu item, ingredient) pair.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<CatalogStore> {
    let content = fs::read_to_string(path)?;
    let file: CatalogFile = serde_json::from_str(&content)?;

    let mut store = CatalogStore::new();
    for event in file.events {
        store.upsert_event(event);
    }
    for item in file.menu_items {
        store.upsert_menu_item(item);
    }
    for ingredient in file.ingredients {
        store.upsert_ingredient(ingredient);
    }
    for line in file.recipes {
        store.upsert_recipe_line(line);
    }

    Ok(store)
}

/// Save the catalog to a JSON file, pretty-printed, ids in ascending order.
pub fn save_catalog<P: AsRef<Path>>(path: P, store: &CatalogStore) -> Result<()> {
    let file = CatalogFile {
        events: store.all_events().into_iter().cloned().collect(),
        menu_items: store.all_menu_items().into_iter().cloned().collect(),
        ingredients: store.all_ingredients().into_iter().cloned().collect(),
        recipes: store.all_recipe_lines().into_iter().cloned().collect(),
    };

    let json = serde_json::to_string_pretty(&file)?;
    fs::write(path, json)?;
    Ok(())
}
