mod ingest;
mod persistence;
mod store;

pub use ingest::{IngestReport, ingest_inventory, ingest_recipes};
pub use persistence::{load_catalog, save_catalog};
pub use store::CatalogStore;

use std::collections::HashMap;

use crate::models::{Event, EventId, Ingredient, IngredientId, MenuItemId, RecipeLine};

/// Read-only reference data the planner consults.
///
/// The planner performs no I/O of its own; lookups go through this seam, so
/// any snapshot that is safe for concurrent reads can back a computation.
pub trait Catalog {
    /// Resolve an event by id.
    fn event(&self, id: EventId) -> Option<&Event>;

    /// All recipe lines of one menu item. Order is not significant.
    fn recipe_lines(&self, menu_item_id: MenuItemId) -> &[RecipeLine];

    /// Resolve a batch of ingredient ids in one call. Unknown ids are
    /// simply absent from the result.
    fn ingredients(&self, ids: &[IngredientId]) -> HashMap<IngredientId, &Ingredient>;
}
