use std::collections::HashMap;

use super::Catalog;
use crate::models::{Event, EventId, Ingredient, IngredientId, MenuItem, MenuItemId, RecipeLine};

/// In-memory reference data: events, menu, inventory, and recipes.
#[derive(Debug, Default)]
pub struct CatalogStore {
    events: HashMap<EventId, Event>,
    menu_items: HashMap<MenuItemId, MenuItem>,
    ingredients: HashMap<IngredientId, Ingredient>,

    /// Recipe lines indexed by menu item, so expansion is one lookup per
    /// selected item instead of a scan.
    recipes: HashMap<MenuItemId, Vec<RecipeLine>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an event.
    pub fn upsert_event(&mut self, event: Event) {
        self.events.insert(event.id, event);
    }

    /// Next free event id (1-based).
    pub fn next_event_id(&self) -> EventId {
        self.events.keys().copied().max().map_or(1, |id| id + 1)
    }

    /// Insert or replace a menu item.
    pub fn upsert_menu_item(&mut self, item: MenuItem) {
        self.menu_items.insert(item.id, item);
    }

    /// Insert or replace an ingredient.
    pub fn upsert_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.insert(ingredient.id, ingredient);
    }

    /// Insert or replace the line for a (menu item, ingredient) pair.
    ///
    /// At most one line per pair survives, so a re-ingest updates in place
    /// instead of duplicating. Returns true if the line was new.
    pub fn upsert_recipe_line(&mut self, line: RecipeLine) -> bool {
        let lines = self.recipes.entry(line.menu_item_id).or_default();
        match lines
            .iter_mut()
            .find(|l| l.ingredient_id == line.ingredient_id)
        {
            Some(existing) => {
                *existing = line;
                false
            }
            None => {
                lines.push(line);
                true
            }
        }
    }

    pub fn menu_item(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.menu_items.get(&id)
    }

    pub fn ingredient(&self, id: IngredientId) -> Option<&Ingredient> {
        self.ingredients.get(&id)
    }

    /// All events, ordered by id.
    pub fn all_events(&self) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.values().collect();
        events.sort_by_key(|e| e.id);
        events
    }

    /// All menu items, ordered by id.
    pub fn all_menu_items(&self) -> Vec<&MenuItem> {
        let mut items: Vec<&MenuItem> = self.menu_items.values().collect();
        items.sort_by_key(|i| i.id);
        items
    }

    /// All ingredients, ordered by id.
    pub fn all_ingredients(&self) -> Vec<&Ingredient> {
        let mut ingredients: Vec<&Ingredient> = self.ingredients.values().collect();
        ingredients.sort_by_key(|i| i.id);
        ingredients
    }

    /// All recipe lines across all menu items, ordered by menu item id.
    pub fn all_recipe_lines(&self) -> Vec<&RecipeLine> {
        let mut lines: Vec<&RecipeLine> = self.recipes.values().flatten().collect();
        lines.sort_by_key(|l| (l.menu_item_id, l.ingredient_id));
        lines
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn menu_item_count(&self) -> usize {
        self.menu_items.len()
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }
}

impl Catalog for CatalogStore {
    fn event(&self, id: EventId) -> Option<&Event> {
        self.events.get(&id)
    }

    fn recipe_lines(&self, menu_item_id: MenuItemId) -> &[RecipeLine] {
        self.recipes.get(&menu_item_id).map_or(&[], Vec::as_slice)
    }

    fn ingredients(&self, ids: &[IngredientId]) -> HashMap<IngredientId, &Ingredient> {
        ids.iter()
            .filter_map(|id| self.ingredients.get(id).map(|ing| (*id, ing)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendeeProfile, CrowdProfile};

    fn sample_event(id: EventId) -> Event {
        Event {
            id,
            name: format!("Event {id}"),
            date: "2026-01-01".to_string(),
            venue: "Hall".to_string(),
            attendees: AttendeeProfile::new(10, 10, 5),
            profile: CrowdProfile::Urban,
        }
    }

    fn sample_line(menu_item_id: MenuItemId, ingredient_id: IngredientId, quantity: f64) -> RecipeLine {
        RecipeLine {
            menu_item_id,
            ingredient_id,
            quantity,
            unit: "kg".to_string(),
        }
    }

    #[test]
    fn test_next_event_id() {
        let mut store = CatalogStore::new();
        assert_eq!(store.next_event_id(), 1);

        store.upsert_event(sample_event(3));
        assert_eq!(store.next_event_id(), 4);
    }

    #[test]
    fn test_recipe_line_pair_uniqueness() {
        let mut store = CatalogStore::new();
        assert!(store.upsert_recipe_line(sample_line(10, 5, 0.01)));
        // Same pair again: replaced, not duplicated.
        assert!(!store.upsert_recipe_line(sample_line(10, 5, 0.03)));

        let lines = store.recipe_lines(10);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 0.03);
    }

    #[test]
    fn test_recipe_lines_for_unknown_item_are_empty() {
        let store = CatalogStore::new();
        assert!(store.recipe_lines(42).is_empty());
    }

    #[test]
    fn test_batch_ingredient_lookup_skips_unknown_ids() {
        let mut store = CatalogStore::new();
        store.upsert_ingredient(Ingredient {
            id: 5,
            name: "Rice".to_string(),
            category: "Grains".to_string(),
            unit: "kg".to_string(),
            regional_name: None,
            brand: None,
            package_size: None,
            stock_qty: 12.0,
        });

        let resolved = store.ingredients(&[5, 999]);
        assert_eq!(resolved.len(), 1);
        assert!(resolved.contains_key(&5));
    }

    #[test]
    fn test_all_events_sorted_by_id() {
        let mut store = CatalogStore::new();
        store.upsert_event(sample_event(2));
        store.upsert_event(sample_event(1));

        let ids: Vec<EventId> = store.all_events().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
