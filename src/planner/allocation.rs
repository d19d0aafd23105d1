use crate::models::MenuItemId;

/// Capacity divided across a menu selection.
#[derive(Debug, Clone, Copy)]
pub struct Allocation {
    pub capacity: f64,
    pub item_count: usize,
    pub portion_per_item: f64,
}

/// Divide capacity uniformly across the selected items.
///
/// Every entry gets an identical share regardless of category or density;
/// a duplicated id is a request to prepare that item twice as much and
/// counts as its own entry. An empty selection allocates nothing (portion
/// 0) rather than dividing by zero.
pub fn allocate_uniform(capacity: f64, items: &[MenuItemId]) -> Allocation {
    let item_count = items.len();
    let portion_per_item = if item_count == 0 {
        0.0
    } else {
        capacity / item_count as f64
    };

    Allocation {
        capacity,
        item_count,
        portion_per_item,
    }
}
