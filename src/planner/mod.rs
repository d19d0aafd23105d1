pub mod allocation;
pub mod batching;
pub mod capacity;
pub mod expansion;

pub use allocation::{Allocation, allocate_uniform};
pub use batching::{BATCH_RATIOS, split_batches};
pub use capacity::{ConsumptionCoefficients, estimate_capacity};
pub use expansion::compute_indent;
