use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::error::{CaterError, Result};
use crate::models::{EventId, IndentResult, IngredientId, IngredientRequirement, MenuItemId};
use crate::planner::allocation::allocate_uniform;
use crate::planner::capacity::{ConsumptionCoefficients, estimate_capacity};

/// Descriptor used when a recipe line references an ingredient the catalog
/// cannot resolve. The quantity still counts toward the indent; dropping it
/// would understate the order.
const UNKNOWN_NAME: &str = "Unknown";
const UNKNOWN_CATEGORY: &str = "Misc";

/// Running total for one ingredient before metadata resolution.
struct Accumulated {
    quantity: f64,
    unit: String,
}

/// Expand an event's menu selection into aggregated ingredient quantities.
///
/// Capacity is estimated from the event's attendance, divided uniformly
/// across `menu_item_ids` (duplicates each take a full share), and each
/// item's recipe lines contribute `quantity * portion` to a shared
/// per-ingredient accumulator. Descriptive metadata is resolved afterwards
/// in a single batch lookup over the distinct ingredient ids.
///
/// Fails with `EventNotFound` if the event id does not resolve. An empty
/// selection yields the zero allocation: capacity echoed, portion 0, no
/// requirements.
pub fn compute_indent<C: Catalog>(
    catalog: &C,
    event_id: EventId,
    menu_item_ids: &[MenuItemId],
    coeffs: &ConsumptionCoefficients,
) -> Result<IndentResult> {
    let event = catalog
        .event(event_id)
        .ok_or(CaterError::EventNotFound(event_id))?;

    let capacity = estimate_capacity(&event.attendees, coeffs);
    let allocation = allocate_uniform(capacity, menu_item_ids);

    let mut totals: HashMap<IngredientId, Accumulated> = HashMap::new();

    for &item_id in menu_item_ids {
        for line in catalog.recipe_lines(item_id) {
            let entry = totals
                .entry(line.ingredient_id)
                .or_insert_with(|| Accumulated {
                    quantity: 0.0,
                    // The first line seen fixes the unit of the aggregate
                    // row; recipe units are kept as-is, never normalized to
                    // the ingredient's storage unit.
                    unit: line.unit.clone(),
                });
            entry.quantity += line.quantity * allocation.portion_per_item;
        }
    }

    let ids: Vec<IngredientId> = totals.keys().copied().collect();
    let resolved = catalog.ingredients(&ids);

    let requirements = totals
        .into_iter()
        .map(|(id, acc)| {
            let (name, category) = match resolved.get(&id) {
                Some(ingredient) => (ingredient.name.clone(), ingredient.category.clone()),
                None => (UNKNOWN_NAME.to_string(), UNKNOWN_CATEGORY.to_string()),
            };
            IngredientRequirement {
                ingredient_id: id,
                name,
                category,
                unit: acc.unit,
                quantity: acc.quantity,
            }
        })
        .collect();

    Ok(IndentResult {
        capacity: allocation.capacity,
        total_items: allocation.item_count,
        portion_per_item: allocation.portion_per_item,
        requirements,
    })
}
