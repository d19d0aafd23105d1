mod event;
mod indent;
mod menu;

pub use event::{AttendeeProfile, CrowdProfile, Event};
pub use indent::{BatchSplit, IndentResult, IngredientRequirement};
pub use menu::{DietType, Ingredient, MenuItem, RecipeLine};

pub type EventId = u32;
pub type MenuItemId = u32;
pub type IngredientId = u32;
