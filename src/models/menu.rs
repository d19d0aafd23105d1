use serde::{Deserialize, Serialize};

use super::{IngredientId, MenuItemId};

/// Diet classification of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietType {
    Veg,
    #[serde(rename = "Non-Veg")]
    NonVeg,
}

impl std::fmt::Display for DietType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DietType::Veg => write!(f, "Veg"),
            DietType::NonVeg => write!(f, "Non-Veg"),
        }
    }
}

/// A dish offered on the menu. Reference data, read-only to the planner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub category: String,
    pub sub_category: String,
    pub diet_type: DietType,
}

/// A raw ingredient in the inventory.
///
/// `stock_qty` is informational only; the planner reports requirements and
/// never decrements stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    pub category: String,
    pub unit: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regional_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_size: Option<String>,

    #[serde(default)]
    pub stock_qty: f64,
}

/// One ingredient requirement of one menu item, per single portion.
///
/// Realizes the many-to-many relation between menu items and ingredients;
/// the catalog keeps at most one line per (menu item, ingredient) pair.
/// The unit is recipe-local and may differ from the ingredient's storage
/// unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeLine {
    pub menu_item_id: MenuItemId,
    pub ingredient_id: IngredientId,
    pub quantity: f64,
    pub unit: String,
}
