use super::IngredientId;

/// Aggregated requirement for one ingredient across a whole indent.
#[derive(Debug, Clone)]
pub struct IngredientRequirement {
    pub ingredient_id: IngredientId,
    pub name: String,
    pub category: String,

    /// Unit of the first recipe line seen for this ingredient.
    pub unit: String,

    pub quantity: f64,
}

/// Result of expanding a menu selection into ingredient quantities.
///
/// Computed fresh per call and never persisted. The order of
/// `requirements` carries no meaning; quantities are unrounded.
#[derive(Debug, Clone)]
pub struct IndentResult {
    pub capacity: f64,
    pub total_items: usize,
    pub portion_per_item: f64,
    pub requirements: Vec<IngredientRequirement>,
}

/// One total split into three sequential preparation tranches.
///
/// Parts are unrounded so they reconcile with the total; round only at the
/// display boundary.
#[derive(Debug, Clone, Copy)]
pub struct BatchSplit {
    pub batch_1: f64,
    pub batch_2: f64,
    pub batch_3: f64,
}

impl BatchSplit {
    /// Sum of the three tranches.
    pub fn total(&self) -> f64 {
        self.batch_1 + self.batch_2 + self.batch_3
    }
}
