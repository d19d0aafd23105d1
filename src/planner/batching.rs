use crate::models::BatchSplit;

/// Fixed share of the total prepared in each sequential batch.
pub const BATCH_RATIOS: [f64; 3] = [0.60, 0.30, 0.10];

/// Split one quantity into the three staged preparation batches.
///
/// Pure and unrounded; the parts sum to the input up to float error.
/// Display code rounds, and rounded parts may not sum to the rounded whole.
pub fn split_batches(total: f64) -> BatchSplit {
    BatchSplit {
        batch_1: total * BATCH_RATIOS[0],
        batch_2: total * BATCH_RATIOS[1],
        batch_3: total * BATCH_RATIOS[2],
    }
}
