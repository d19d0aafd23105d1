pub mod prompts;
pub mod render;

pub use prompts::{collect_event_details, prompt_yes_no, select_menu_items};
pub use render::{display_batch_schedule, display_batches, display_events, display_indent, display_menu};
